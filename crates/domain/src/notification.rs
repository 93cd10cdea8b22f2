use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A `Notification` describes how far ahead of a `Reminder`s
/// expiration date the given `Participant` wants to be alerted.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ID,
    pub reminder_id: ID,
    pub participant_id: ID,
    pub preemptive: Preemptive,
}

impl Notification {
    pub fn new(reminder_id: &ID, participant_id: &ID, preemptive: Preemptive) -> Self {
        Self {
            id: Default::default(),
            reminder_id: reminder_id.clone(),
            participant_id: participant_id.clone(),
            preemptive,
        }
    }
}

impl Entity for Notification {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.preemptive {
            Preemptive::SameDay => {
                write!(f, "Notification on the day reminder {} expires", self.reminder_id)
            }
            p => write!(
                f,
                "Notification {} days before reminder {} expires",
                p.days(),
                self.reminder_id
            ),
        }
    }
}

/// How many days ahead of the expiration date an alert should go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preemptive {
    SameDay,
    OneDay,
    ThreeDays,
    OneWeek,
    TwoWeeks,
    OneMonth,
}

impl Preemptive {
    pub fn days(&self) -> i64 {
        match self {
            Self::SameDay => 0,
            Self::OneDay => 1,
            Self::ThreeDays => 3,
            Self::OneWeek => 7,
            Self::TwoWeeks => 14,
            Self::OneMonth => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SameDay => "sameDay",
            Self::OneDay => "oneDay",
            Self::ThreeDays => "threeDays",
            Self::OneWeek => "oneWeek",
            Self::TwoWeeks => "twoWeeks",
            Self::OneMonth => "oneMonth",
        }
    }
}

impl Display for Preemptive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum InvalidPreemptiveError {
    #[error("Invalid preemptive window specified: {0}")]
    Malformed(String),
}

impl FromStr for Preemptive {
    type Err = InvalidPreemptiveError;

    fn from_str(preemptive: &str) -> Result<Self, Self::Err> {
        match preemptive {
            "sameDay" => Ok(Self::SameDay),
            "oneDay" => Ok(Self::OneDay),
            "threeDays" => Ok(Self::ThreeDays),
            "oneWeek" => Ok(Self::OneWeek),
            "twoWeeks" => Ok(Self::TwoWeeks),
            "oneMonth" => Ok(Self::OneMonth),
            _ => Err(InvalidPreemptiveError::Malformed(preemptive.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_preemptive_windows() {
        for preemptive in [
            Preemptive::SameDay,
            Preemptive::OneDay,
            Preemptive::ThreeDays,
            Preemptive::OneWeek,
            Preemptive::TwoWeeks,
            Preemptive::OneMonth,
        ] {
            assert_eq!(
                preemptive.as_str().parse::<Preemptive>().unwrap(),
                preemptive
            );
        }
        assert!("twoMonths".parse::<Preemptive>().is_err());
    }

    #[test]
    fn it_describes_itself() {
        let reminder_id = ID::new();
        let participant_id = ID::new();
        let n = Notification::new(&reminder_id, &participant_id, Preemptive::OneWeek);
        assert_eq!(
            n.to_string(),
            format!("Notification 7 days before reminder {} expires", reminder_id)
        );
        let n = Notification::new(&reminder_id, &participant_id, Preemptive::SameDay);
        assert_eq!(
            n.to_string(),
            format!("Notification on the day reminder {} expires", reminder_id)
        );
    }
}
