use crate::shared::entity::{Entity, ID};
use memora_utils::create_random_secret;
use serde::{Deserialize, Serialize};

const API_KEY_LEN: usize = 30;
const JWT_SECRET_MIN_LEN: usize = 16;

/// An `Account` acts as a namespace for all other resources and lets multiple different
/// applications use the same instance of this server without interfering
/// with each other.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: ID,
    pub secret_api_key: String,
    pub jwt_secret: Option<JwtSecret>,
}

/// Shared secret with which the application owning the `Account` signs
/// the `HS256` tokens its end users authenticate with.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct JwtSecret(String);

impl JwtSecret {
    pub fn new(secret: String) -> anyhow::Result<Self> {
        if secret.len() < JWT_SECRET_MIN_LEN {
            return Err(anyhow::Error::msg(format!(
                "Expected jwt secret to be at least {} characters long",
                JWT_SECRET_MIN_LEN
            )));
        }
        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn inner(self) -> String {
        self.0
    }
}

impl Account {
    pub fn new() -> Self {
        Self {
            id: Default::default(),
            jwt_secret: None,
            secret_api_key: Self::generate_secret_api_key(),
        }
    }

    pub fn generate_secret_api_key() -> String {
        let rand_secret = create_random_secret(API_KEY_LEN);
        format!("sk_{}", rand_secret)
    }

    pub fn set_jwt_secret(&mut self, secret: Option<JwtSecret>) {
        self.jwt_secret = secret;
    }
}

impl Entity for Account {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_creates_account() {
        let acc = Account::new();
        assert!(acc.secret_api_key.starts_with("sk_"));
        assert!(acc.secret_api_key.len() > API_KEY_LEN);
    }

    #[test]
    fn it_rejects_short_jwt_secrets() {
        assert!(JwtSecret::new("short".into()).is_err());
    }

    #[test]
    fn it_accepts_long_jwt_secrets() {
        assert!(JwtSecret::new(create_random_secret(32)).is_ok());
    }
}
