mod inmemory;
mod postgres;

pub use inmemory::InMemoryUserRepo;
use memora_domain::{User, ID};
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    /// Find a user, but only if it belongs to the given account
    async fn find_by_account_id(&self, user_id: &ID, account_id: &ID) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use memora_domain::{Account, User};

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = setup_context().await;
        let account = Account::new();
        ctx.repos
            .account_repo
            .insert(&account)
            .await
            .expect("To insert account");
        let user = User::new(account.id.clone());

        // Insert
        assert!(ctx.repos.user_repo.insert(&user).await.is_ok());

        // Different find methods
        let res = ctx.repos.user_repo.find(&user.id).await.unwrap();
        assert_eq!(res, user);
        let res = ctx
            .repos
            .user_repo
            .find_by_account_id(&user.id, &account.id)
            .await
            .unwrap();
        assert_eq!(res, user);
        assert!(ctx
            .repos
            .user_repo
            .find_by_account_id(&user.id, &Default::default())
            .await
            .is_none());

        // Delete
        let res = ctx.repos.user_repo.delete(&user.id).await;
        assert_eq!(res, Some(user.clone()));

        // Find
        assert!(ctx.repos.user_repo.find(&user.id).await.is_none());
    }

    #[tokio::test]
    async fn update() {
        let ctx = setup_context().await;
        let account = Account::new();
        ctx.repos
            .account_repo
            .insert(&account)
            .await
            .expect("To insert account");
        let mut user = User::new(account.id.clone());
        ctx.repos
            .user_repo
            .insert(&user)
            .await
            .expect("To insert user");

        user.username = "ada".into();
        user.first_name = "Ada".into();
        user.last_name = "Lovelace".into();

        // Save
        assert!(ctx.repos.user_repo.save(&user).await.is_ok());

        // Find
        let updated_user = ctx.repos.user_repo.find(&user.id).await.unwrap();
        assert_eq!(updated_user, user);
        assert_eq!(updated_user.full_name().unwrap(), "Ada Lovelace");
    }
}
