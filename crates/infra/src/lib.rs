mod config;
mod repos;
mod search;
mod system;

pub use config::Config;
use repos::Repos;
pub use repos::{IAccountRepo, INotificationRepo, IParticipantRepo, IReminderRepo, IUserRepo};
pub use search::{ISearchIndex, InMemorySearchIndex, SearchRegistration};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct MemoraContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub search: Arc<dyn ISearchIndex>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl MemoraContext {
    pub fn create_inmemory() -> Self {
        Self::assemble(Repos::create_inmemory())
    }

    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self::assemble(repos)
    }

    fn assemble(repos: Repos) -> Self {
        let search: Arc<dyn ISearchIndex> = Arc::new(InMemorySearchIndex::new());
        search.register(search::reminder_search_registration());
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            search,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> MemoraContext {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(connection_string) => {
            info!(
                "{} env var was provided. Going to use postgres.",
                PSQL_CONNECTION_STRING
            );
            MemoraContext::create(ContextParams {
                postgres_connection_string: connection_string,
            })
            .await
        }
        Err(_) => {
            info!(
                "{} env var was not provided. Going to use inmemory infra.",
                PSQL_CONNECTION_STRING
            );
            MemoraContext::create_inmemory()
        }
    }
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let connection_string =
        std::env::var("DATABASE_URL").expect("DATABASE_URL env var to be present.");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registers_reminder_search_entity_once() {
        let ctx = setup_context().await;
        let registrations = ctx.search.registrations();
        assert_eq!(registrations.len(), 1);
        let registration = &registrations[0];
        assert_eq!(registration.entity, "reminder");
        assert_eq!(registration.label, "reminder");
        assert_eq!(
            registration.fields,
            vec![
                "label",
                "notes",
                "participant.user.username",
                "participant.user.first_name",
                "participant.user.last_name"
            ]
        );
    }
}
