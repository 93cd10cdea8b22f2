use crate::shared::entity::{Entity, ID};

/// A `User` is an end user of the application that owns an `Account`.
/// Users are created on the fly the first time a token for them is
/// verified, so the fields below mirror what the token claims carry.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub account_id: ID,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(account_id: ID) -> Self {
        Self {
            id: Default::default(),
            account_id,
            username: Default::default(),
            first_name: Default::default(),
            last_name: Default::default(),
        }
    }

    pub fn full_name(&self) -> Option<String> {
        if self.first_name.is_empty() && self.last_name.is_empty() {
            return None;
        }
        Some(
            format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string(),
        )
    }

    /// Full name when one is known, otherwise the username.
    pub fn display_name(&self) -> String {
        self.full_name().unwrap_or_else(|| self.username.clone())
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
