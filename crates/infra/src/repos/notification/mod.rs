mod inmemory;
mod postgres;

pub use inmemory::InMemoryNotificationRepo;
use memora_domain::{Notification, ID};
pub use postgres::PostgresNotificationRepo;

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()>;
    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<Notification>;
    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<()>;
}
