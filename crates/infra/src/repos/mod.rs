mod account;
mod notification;
mod participant;
mod reminder;
mod shared;
mod user;

pub use account::IAccountRepo;
use account::{InMemoryAccountRepo, PostgresAccountRepo};
pub use notification::INotificationRepo;
use notification::{InMemoryNotificationRepo, PostgresNotificationRepo};
pub use participant::IParticipantRepo;
use participant::{InMemoryParticipantRepo, PostgresParticipantRepo};
pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub account_repo: Arc<dyn IAccountRepo>,
    pub user_repo: Arc<dyn IUserRepo>,
    pub reminder_repo: Arc<dyn IReminderRepo>,
    pub participant_repo: Arc<dyn IParticipantRepo>,
    pub notification_repo: Arc<dyn INotificationRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        sqlx::migrate!().run(&pool).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            account_repo: Arc::new(PostgresAccountRepo::new(pool.clone())),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            reminder_repo: Arc::new(PostgresReminderRepo::new(pool.clone())),
            participant_repo: Arc::new(PostgresParticipantRepo::new(pool.clone())),
            notification_repo: Arc::new(PostgresNotificationRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        let participant_repo = Arc::new(InMemoryParticipantRepo::new());
        let notification_repo = Arc::new(InMemoryNotificationRepo::new());
        // The reminder repo performs the same cascade on delete that the
        // postgres schema gets from its foreign keys.
        let reminder_repo = Arc::new(InMemoryReminderRepo::new(
            participant_repo.clone(),
            notification_repo.clone(),
        ));
        Self {
            account_repo: Arc::new(InMemoryAccountRepo::new()),
            user_repo: Arc::new(InMemoryUserRepo::new()),
            reminder_repo,
            participant_repo,
            notification_repo,
        }
    }
}
