use std::sync::Arc;

use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::{INotificationRepo, IParticipantRepo};
use chrono::NaiveDate;
use memora_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
    participant_repo: Arc<dyn IParticipantRepo>,
    notification_repo: Arc<dyn INotificationRepo>,
}

impl InMemoryReminderRepo {
    pub fn new(
        participant_repo: Arc<dyn IParticipantRepo>,
        notification_repo: Arc<dyn INotificationRepo>,
    ) -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
            participant_repo,
            notification_repo,
        }
    }
}

fn sort_newest_first(reminders: &mut [Reminder]) {
    reminders.sort_by(|r1, r2| {
        r2.created
            .cmp(&r1.created)
            .then_with(|| r1.label.cmp(&r2.label))
            .then_with(|| r1.id.inner_ref().cmp(r2.id.inner_ref()))
    });
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let mut reminder = reminder.clone();
        if let Some(existing) = find(&reminder.id, &self.reminders) {
            // created is stamped at insert and never moves
            reminder.created = existing.created;
        }
        save(&reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_account(&self, account_id: &ID) -> Vec<Reminder> {
        let mut reminders = find_by(&self.reminders, |r| r.account_id == *account_id);
        sort_newest_first(&mut reminders);
        reminders
    }

    async fn find_expired(&self, account_id: &ID, before: NaiveDate) -> Vec<Reminder> {
        let mut reminders = find_by(&self.reminders, |r| {
            r.account_id == *account_id && r.expires < before
        });
        sort_newest_first(&mut reminders);
        reminders
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        let deleted = delete(reminder_id, &self.reminders);
        if let Some(deleted) = &deleted {
            // The postgres schema cascades these deletes through its
            // foreign keys, here it has to be done by hand.
            self.participant_repo.delete_by_reminder(&deleted.id).await?;
            self.notification_repo.delete_by_reminder(&deleted.id).await?;
        }
        Ok(deleted)
    }
}
