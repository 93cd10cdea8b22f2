use crate::error::MemoraError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use actix_web::{web, HttpRequest, HttpResponse};
use memora_api_structs::get_reminders::*;
use memora_domain::{Reminder, ID};
use memora_infra::MemoraContext;

pub async fn get_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetRemindersUseCase {
        account_id: user.account_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => match e {},
        })
}

#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub account_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx
            .repos
            .reminder_repo
            .find_by_account(&self.account_id)
            .await)
    }
}

impl PermissionBoundary for GetRemindersUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ViewReminder]
    }
}
