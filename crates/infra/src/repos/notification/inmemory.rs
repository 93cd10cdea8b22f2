use super::INotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use memora_domain::{Notification, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<Notification> {
        find_by(&self.notifications, |n| n.reminder_id == *reminder_id)
    }

    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.notifications, |n| n.reminder_id == *reminder_id);
        Ok(())
    }
}
