mod account;
mod base;
mod reminder;
mod status;
mod user;

use account::AccountClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use memora_api_structs::dtos::*;
pub use memora_domain::ID;
use reminder::ReminderClient;
pub use reminder::{
    CreateReminderDateInput, CreateReminderDaysInput, DeleteReminderInput, DeleteRemindersInput,
    GetExpiredRemindersInput, UpdateReminderDateInput, UpdateReminderDaysInput,
};
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;

// Domain
pub use memora_api_structs::dtos::AccountDTO as Account;
pub use memora_api_structs::dtos::ExpiredReminderDTO as ExpiredReminder;
pub use memora_api_structs::dtos::ReminderDTO as Reminder;
pub use memora_api_structs::dtos::UserDTO as User;

/// Memora Server SDK
///
/// The SDK contains methods for interacting with the Memora server
/// API.
#[derive(Clone)]
pub struct MemoraSDK {
    pub account: AccountClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl MemoraSDK {
    /// Client acting as the account itself, authenticated with the
    /// account api key.
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        Self::assemble(base)
    }

    /// Client acting on behalf of a single user of the account,
    /// authenticated with a json web token signed by the account.
    pub fn with_token<T: Into<String>>(address: String, account_id: T, token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_user_credentials(account_id.into(), token.into());
        Self::assemble(base)
    }

    fn assemble(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let account = AccountClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let user = UserClient::new(base);

        Self {
            account,
            reminder,
            status,
            user,
        }
    }
}
