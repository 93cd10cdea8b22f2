use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use std::fmt::Display;
use thiserror::Error;

pub const REMINDER_LABEL_MAX_LENGTH: usize = 64;

/// A `Reminder` is a short labeled note owned by an `Account` that
/// expires on a given calendar date. `Participant`s connect `User`s to
/// it and `Notification`s describe when they should be alerted before
/// it expires.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The `Account` this `Reminder` belongs to
    pub account_id: ID,
    pub label: String,
    pub notes: String,
    /// The date this `Reminder` was created. Stamped by the server on
    /// creation and never changed by later edits.
    pub created: NaiveDate,
    /// The date this `Reminder` expires. The expiration date itself is
    /// not yet expired, only dates strictly after it are.
    pub expires: NaiveDate,
}

impl Reminder {
    pub fn validate(&self) -> Result<(), InvalidReminderError> {
        if self.label.trim().is_empty() {
            return Err(InvalidReminderError::EmptyLabel);
        }
        let len = self.label.chars().count();
        if len > REMINDER_LABEL_MAX_LENGTH {
            return Err(InvalidReminderError::LabelTooLong {
                max: REMINDER_LABEL_MAX_LENGTH,
                len,
            });
        }
        Ok(())
    }

    pub fn is_expired(&self, date: NaiveDate) -> bool {
        self.expires < date
    }

    /// How many days past its expiration date this `Reminder` is.
    /// Negative when the expiration date is still ahead.
    pub fn days_expired(&self, today: NaiveDate) -> i64 {
        (today - self.expires).num_days()
    }

    /// The number of days between creation and expiration.
    pub fn days(&self) -> i64 {
        (self.expires - self.created).num_days()
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Display for Reminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidReminderError {
    #[error("Reminder label cannot be empty")]
    EmptyLabel,
    #[error("Reminder label cannot be longer than {max} characters, was: {len}")]
    LabelTooLong { max: usize, len: usize },
}
