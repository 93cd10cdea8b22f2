use crate::dtos::{ExpiredReminderDTO, ReminderDTO};
use chrono::NaiveDate;
use memora_domain::{Reminder, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

/// Confirmation prompt returned when a delete route is hit with GET.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConfirmationResponse {
    pub title: String,
    pub reminders: Vec<ReminderDTO>,
    pub previous: String,
    pub next: String,
}

impl DeleteConfirmationResponse {
    pub fn new(reminders: Vec<Reminder>, previous: String, next: String) -> Self {
        let labels = reminders
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let title = if reminders.len() == 1 {
            format!("Are you sure you wish to delete the reminder \"{}\"?", labels)
        } else {
            format!("Are you sure you wish to delete the reminders: {}?", labels)
        };
        Self {
            title,
            reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            previous,
            next,
        }
    }
}

/// Outcome of a delete route hit with POST. Deletions are reported one
/// by one so a partial failure still lists every success.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionResponse {
    pub notices: Vec<String>,
    pub errors: Vec<String>,
    pub redirect_to: String,
}

impl DeletionResponse {
    pub fn new(
        deleted: Vec<Reminder>,
        failed: Vec<(Reminder, String)>,
        redirect_to: String,
    ) -> Self {
        Self {
            notices: deleted
                .into_iter()
                .map(|r| format!("Reminder \"{}\" deleted successfully.", r))
                .collect(),
            errors: failed
                .into_iter()
                .map(|(r, e)| format!("Error deleting reminder \"{}\"; {}", r, e))
                .collect(),
            redirect_to,
        }
    }
}

pub mod get_reminders {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub title: String,
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                title: "reminders".into(),
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod get_expired_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub at: Option<NaiveDate>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub title: String,
        pub reminders: Vec<ExpiredReminderDTO>,
    }

    impl APIResponse {
        pub fn new(expired: Vec<(Reminder, i64)>) -> Self {
            Self {
                title: "expired reminders".into(),
                reminders: expired
                    .into_iter()
                    .map(|(reminder, days_expired)| {
                        ExpiredReminderDTO::new(reminder, days_expired)
                    })
                    .collect(),
            }
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DateRequestBody {
        pub label: String,
        pub notes: Option<String>,
        pub created: Option<NaiveDate>,
        pub expires: NaiveDate,
        pub next: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DaysRequestBody {
        pub label: String,
        pub notes: Option<String>,
        pub created: Option<NaiveDate>,
        pub days: i64,
        pub next: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub next: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder: ReminderDTO,
        pub notice: String,
        pub redirect_to: String,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder, redirect_to: String) -> Self {
            Self {
                notice: format!("Reminder \"{}\" created successfully.", reminder),
                reminder: ReminderDTO::new(reminder),
                redirect_to,
            }
        }
    }
}

pub mod update_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DateRequestBody {
        pub label: String,
        pub notes: Option<String>,
        pub expires: NaiveDate,
        pub next: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DaysRequestBody {
        pub label: String,
        pub notes: Option<String>,
        pub days: i64,
        pub next: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub next: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminder: ReminderDTO,
        pub notice: String,
        pub redirect_to: String,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder, redirect_to: String) -> Self {
            Self {
                notice: format!("Reminder \"{}\" edited successfully.", reminder),
                reminder: ReminderDTO::new(reminder),
                redirect_to,
            }
        }
    }
}

pub mod get_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub title: String,
        pub reminder: ReminderDTO,
        pub days: i64,
    }

    impl APIResponse {
        pub fn new(reminder: Reminder, days_expired: i64) -> Self {
            let expired_suffix = if days_expired > 0 {
                format!(" (expired {} days)", days_expired)
            } else {
                String::new()
            };
            Self {
                title: format!("Detail for reminder \"{}\"{}", reminder, expired_suffix),
                days: reminder.days(),
                reminder: ReminderDTO::new(reminder),
            }
        }
    }
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub next: Option<String>,
        pub previous: Option<String>,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub next: Option<String>,
        pub previous: Option<String>,
    }

    pub type ConfirmationResponse = DeleteConfirmationResponse;
    pub type APIResponse = DeletionResponse;
}

pub mod delete_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub ids: Option<String>,
        pub next: Option<String>,
        pub previous: Option<String>,
    }

    pub type RequestBody = delete_reminder::RequestBody;
    pub type ConfirmationResponse = DeleteConfirmationResponse;
    pub type APIResponse = DeletionResponse;
}
