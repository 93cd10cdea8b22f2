mod inmemory;
mod postgres;

pub use inmemory::InMemoryParticipantRepo;
use memora_domain::{Participant, ID};
pub use postgres::PostgresParticipantRepo;

#[async_trait::async_trait]
pub trait IParticipantRepo: Send + Sync {
    /// Fails when the user already holds the given role on the reminder
    async fn insert(&self, participant: &Participant) -> anyhow::Result<()>;
    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<Participant>;
    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::NaiveDate;
    use memora_domain::{Account, Participant, ParticipantRole, Reminder, User};

    async fn reminder_with_user(ctx: &crate::MemoraContext) -> (Reminder, User) {
        let account = Account::new();
        ctx.repos
            .account_repo
            .insert(&account)
            .await
            .expect("To insert account");
        let user = User::new(account.id.clone());
        ctx.repos
            .user_repo
            .insert(&user)
            .await
            .expect("To insert user");
        let reminder = Reminder {
            id: Default::default(),
            account_id: account.id.clone(),
            label: "Renew passport".into(),
            notes: Default::default(),
            created: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            expires: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        };
        ctx.repos
            .reminder_repo
            .insert(&reminder)
            .await
            .expect("To insert reminder");
        (reminder, user)
    }

    #[tokio::test]
    async fn create_and_find() {
        let ctx = setup_context().await;
        let (reminder, user) = reminder_with_user(&ctx).await;
        let participant = Participant::new(&reminder.id, &user.id, ParticipantRole::Creator);

        assert!(ctx.repos.participant_repo.insert(&participant).await.is_ok());

        let found = ctx
            .repos
            .participant_repo
            .find_by_reminder(&reminder.id)
            .await;
        assert_eq!(found, vec![participant]);
    }

    #[tokio::test]
    async fn rejects_same_role_twice() {
        let ctx = setup_context().await;
        let (reminder, user) = reminder_with_user(&ctx).await;
        let watcher = Participant::new(&reminder.id, &user.id, ParticipantRole::Watcher);
        ctx.repos
            .participant_repo
            .insert(&watcher)
            .await
            .expect("To insert participant");

        // Same user and role again
        let watcher_again = Participant::new(&reminder.id, &user.id, ParticipantRole::Watcher);
        assert!(ctx
            .repos
            .participant_repo
            .insert(&watcher_again)
            .await
            .is_err());

        // A second role for the same user is fine
        let editor = Participant::new(&reminder.id, &user.id, ParticipantRole::Editor);
        assert!(ctx.repos.participant_repo.insert(&editor).await.is_ok());

        let found = ctx
            .repos
            .participant_repo
            .find_by_reminder(&reminder.id)
            .await;
        assert_eq!(found.len(), 2);
    }
}
