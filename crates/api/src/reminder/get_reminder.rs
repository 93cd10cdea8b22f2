use crate::error::MemoraError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use actix_web::{web, HttpRequest, HttpResponse};
use memora_api_structs::get_reminder::*;
use memora_domain::{Reminder, ID};
use memora_infra::MemoraContext;

pub async fn get_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetReminderUseCase {
        account_id: user.account_id,
        reminder_id: path_params.reminder_id.clone(),
    };

    let today = ctx.sys.get_date();
    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| {
            let days_expired = reminder.days_expired(today);
            HttpResponse::Ok().json(APIResponse::new(reminder, days_expired))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct GetReminderUseCase {
    pub account_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    NotFound(ID),
}

impl From<UseCaseErrors> for MemoraError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.reminder_repo.find(&self.reminder_id).await {
            Some(reminder) if reminder.account_id == self.account_id => Ok(reminder),
            _ => Err(UseCaseErrors::NotFound(self.reminder_id.clone())),
        }
    }
}

impl PermissionBoundary for GetReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ViewReminder]
    }
}
