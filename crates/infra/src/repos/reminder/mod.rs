mod inmemory;
mod postgres;

use chrono::NaiveDate;
pub use inmemory::InMemoryReminderRepo;
use memora_domain::{Reminder, ID};
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// Persists every field of the reminder except `created`, which is
    /// stamped at insert and never moves afterwards.
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All reminders belonging to the account, newest creation date first
    async fn find_by_account(&self, account_id: &ID) -> Vec<Reminder>;
    /// The reminders belonging to the account that expire strictly before
    /// the given date, newest creation date first
    async fn find_expired(&self, account_id: &ID, before: NaiveDate) -> Vec<Reminder>;
    /// Deleting a reminder also deletes its participants and notifications
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>>;
}
