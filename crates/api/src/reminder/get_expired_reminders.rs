use crate::error::MemoraError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use memora_api_structs::get_expired_reminders::*;
use memora_domain::{Reminder, ID};
use memora_infra::MemoraContext;

pub async fn get_expired_reminders_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = GetExpiredRemindersUseCase {
        account_id: user.account_id,
        at: query_params.at,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|expired| HttpResponse::Ok().json(APIResponse::new(expired)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => match e {},
        })
}

#[derive(Debug)]
pub struct GetExpiredRemindersUseCase {
    pub account_id: ID,
    /// Reference date for the expiration cutoff, defaults to today
    pub at: Option<NaiveDate>,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetExpiredRemindersUseCase {
    type Response = Vec<(Reminder, i64)>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        let today = ctx.sys.get_date();
        let before = self.at.unwrap_or(today);
        let expired = ctx
            .repos
            .reminder_repo
            .find_expired(&self.account_id, before)
            .await;

        // How long ago each reminder expired is always counted from
        // today, also when another reference date was given.
        Ok(expired
            .into_iter()
            .map(|reminder| {
                let days_expired = reminder.days_expired(today);
                (reminder, days_expired)
            })
            .collect())
    }
}

impl PermissionBoundary for GetExpiredRemindersUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ViewReminder]
    }
}
