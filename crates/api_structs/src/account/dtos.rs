use memora_domain::{Account, JwtSecret, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDTO {
    pub id: ID,
    pub jwt_secret: Option<JwtSecret>,
}

impl AccountDTO {
    pub fn new(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            jwt_secret: account.jwt_secret.clone(),
        }
    }
}
