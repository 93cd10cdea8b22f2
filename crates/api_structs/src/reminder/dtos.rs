use chrono::NaiveDate;
use memora_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub account_id: ID,
    pub label: String,
    pub notes: String,
    pub created: NaiveDate,
    pub expires: NaiveDate,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            account_id: reminder.account_id.clone(),
            label: reminder.label,
            notes: reminder.notes,
            created: reminder.created,
            expires: reminder.expires,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExpiredReminderDTO {
    pub reminder: ReminderDTO,
    pub days_expired: i64,
}

impl ExpiredReminderDTO {
    pub fn new(reminder: Reminder, days_expired: i64) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
            days_expired,
        }
    }
}
