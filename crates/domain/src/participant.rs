use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A `Participant` connects a `User` to a `Reminder` together with the
/// role that user plays for it. A user can hold several roles on the
/// same reminder, but never the same role twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: ID,
    pub reminder_id: ID,
    pub user_id: ID,
    pub role: ParticipantRole,
}

impl Participant {
    pub fn new(reminder_id: &ID, user_id: &ID, role: ParticipantRole) -> Self {
        Self {
            id: Default::default(),
            reminder_id: reminder_id.clone(),
            user_id: user_id.clone(),
            role,
        }
    }
}

impl Entity for Participant {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Creator,
    Editor,
    Watcher,
}

impl ParticipantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Editor => "editor",
            Self::Watcher => "watcher",
        }
    }
}

impl Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum InvalidParticipantRoleError {
    #[error("Invalid participant role specified: {0}")]
    Malformed(String),
}

impl FromStr for ParticipantRole {
    type Err = InvalidParticipantRoleError;

    fn from_str(role: &str) -> Result<Self, Self::Err> {
        match role {
            "creator" => Ok(Self::Creator),
            "editor" => Ok(Self::Editor),
            "watcher" => Ok(Self::Watcher),
            _ => Err(InvalidParticipantRoleError::Malformed(role.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_participant_roles() {
        for role in [
            ParticipantRole::Creator,
            ParticipantRole::Editor,
            ParticipantRole::Watcher,
        ] {
            assert_eq!(role.as_str().parse::<ParticipantRole>().unwrap(), role);
        }
        assert!("owner".parse::<ParticipantRole>().is_err());
        assert!("Creator".parse::<ParticipantRole>().is_err());
    }
}
