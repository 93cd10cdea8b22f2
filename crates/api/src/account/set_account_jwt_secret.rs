use crate::shared::usecase::{execute, UseCase};
use crate::{error::MemoraError, shared::auth::protect_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use memora_api_structs::set_account_jwt_secret::{APIResponse, RequestBody};
use memora_domain::{Account, JwtSecret};
use memora_infra::MemoraContext;

pub async fn set_account_jwt_secret_controller(
    http_req: HttpRequest,
    ctx: web::Data<MemoraContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, MemoraError> {
    let account = protect_account_route(&http_req, &ctx).await?;

    let usecase = SetAccountJwtSecretUseCase {
        account,
        jwt_secret: body.0.jwt_secret,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(MemoraError::from)
}

#[derive(Debug)]
struct SetAccountJwtSecretUseCase {
    pub account: Account,
    pub jwt_secret: Option<String>,
}

#[derive(Debug)]
enum UseCaseErrors {
    InvalidJwtSecret(String),
    StorageError,
}

impl From<UseCaseErrors> for MemoraError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::InvalidJwtSecret(e) => Self::BadClientData(e),
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetAccountJwtSecretUseCase {
    type Response = Account;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        let jwt_secret = match self.jwt_secret.take() {
            Some(secret) => Some(
                JwtSecret::new(secret).map_err(|e| UseCaseErrors::InvalidJwtSecret(e.to_string()))?,
            ),
            None => None,
        };
        self.account.set_jwt_secret(jwt_secret);

        match ctx.repos.account_repo.save(&self.account).await {
            Ok(_) => Ok(self.account.clone()),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
