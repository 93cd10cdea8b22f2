mod account;
mod notification;
mod participant;
mod reminder;
mod shared;
mod user;

pub use account::{Account, JwtSecret};
pub use notification::{Notification, Preemptive};
pub use participant::{Participant, ParticipantRole};
pub use reminder::{InvalidReminderError, Reminder, REMINDER_LABEL_MAX_LENGTH};
pub use shared::entity::{Entity, ID};
pub use user::User;
