use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// Result of an api call made by the client
pub type APIResponse<T> = Result<T, APIError>;

#[derive(Debug, Clone)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    Unauthorized,
    NotFound,
    BadClientData,
    UnexpectedStatusCode,
}

pub(crate) struct BaseClient {
    client: Client,
    address: String,
    api_key: Option<String>,
    account_id: Option<String>,
    token: Option<String>,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
            api_key: None,
            account_id: None,
            token: None,
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_user_credentials(&mut self, account_id: String, token: String) {
        self.account_id = Some(account_id);
        self.token = Some(token);
    }

    fn get_url(&self, path: String) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }

    fn with_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if let Some(api_key) = &self.api_key {
            builder = builder.header("x-api-key", api_key);
        }
        if let Some(account_id) = &self.account_id {
            builder = builder.header("memora-account", account_id);
        }
        if let Some(token) = &self.token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status = res.status();
        if status != expected_status_code {
            let message = res.text().await.unwrap_or_default();
            return Err(APIError {
                variant: error_variant_for_status(status),
                message,
            });
        }

        res.json().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.with_headers(self.client.get(self.get_url(path)));
        let res = req.send().await.map_err(network_error)?;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.with_headers(self.client.post(self.get_url(path)).json(&body));
        let res = req.send().await.map_err(network_error)?;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.with_headers(self.client.put(self.get_url(path)).json(&body));
        let res = req.send().await.map_err(network_error)?;
        self.handle_response(res, expected_status_code).await
    }
}

fn network_error(e: reqwest::Error) -> APIError {
    APIError {
        variant: APIErrorVariant::Network,
        message: e.to_string(),
    }
}

fn error_variant_for_status(status: StatusCode) -> APIErrorVariant {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => APIErrorVariant::Unauthorized,
        StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
        StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
        _ => APIErrorVariant::UnexpectedStatusCode,
    }
}
