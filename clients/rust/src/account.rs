use crate::{APIResponse, BaseClient};
use memora_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountClient {
    base: Arc<BaseClient>,
}

impl AccountClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, code: &str) -> APIResponse<create_account::APIResponse> {
        let body = create_account::RequestBody {
            code: code.to_string(),
        };
        self.base
            .post(body, "account".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self) -> APIResponse<get_account::APIResponse> {
        self.base.get("account".into(), StatusCode::OK).await
    }

    pub async fn set_jwt_secret(
        &self,
        jwt_secret: Option<String>,
    ) -> APIResponse<set_account_jwt_secret::APIResponse> {
        let body = set_account_jwt_secret::RequestBody { jwt_secret };
        self.base
            .put(body, "account/jwtsecret".into(), StatusCode::OK)
            .await
    }
}
