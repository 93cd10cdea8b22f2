use crate::error::MemoraError;
use memora_domain::ID;

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: String) -> Result<ID, MemoraError> {
        val.parse()
            .map_err(|e| MemoraError::BadClientData(format!("{}", e)))
    }
}
