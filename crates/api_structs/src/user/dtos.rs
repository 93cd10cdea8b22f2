use memora_domain::{User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub account_id: ID,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id.clone(),
            account_id: user.account_id.clone(),
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
