use crate::{
    error::MemoraError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use memora_api_structs::create_account::{APIResponse, RequestBody};
use memora_domain::Account;
use memora_infra::MemoraContext;

pub async fn create_account_controller(
    ctx: web::Data<MemoraContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, MemoraError> {
    let usecase = CreateAccountUseCase { code: body.0.code };
    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Created().json(APIResponse::new(account)))
        .map_err(MemoraError::from)
}

#[derive(Debug)]
struct CreateAccountUseCase {
    code: String,
}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
    InvalidCreateAccountCode,
}

impl From<UseCaseErrors> for MemoraError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::InvalidCreateAccountCode => {
                Self::Unauthorized("Invalid code provided".into())
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAccountUseCase {
    type Response = Account;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        if self.code != ctx.config.create_account_secret_code {
            return Err(UseCaseErrors::InvalidCreateAccountCode);
        }
        let account = Account::new();
        let res = ctx.repos.account_repo.insert(&account).await;

        res.map(|_| account)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
