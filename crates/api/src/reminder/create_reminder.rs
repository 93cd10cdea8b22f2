use crate::error::MemoraError;
use crate::shared::{
    auth::{protect_route, Permission},
    redirect::resolve_redirect,
    usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Duration, NaiveDate};
use memora_api_structs::create_reminder::*;
use memora_domain::{InvalidReminderError, Reminder, ID};
use memora_infra::MemoraContext;

pub async fn create_reminder_date_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    body: web::Json<DateRequestBody>,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let redirect_to = resolve_redirect(
        &http_req,
        &[body.next.as_deref(), query_params.next.as_deref()],
    );
    let usecase = CreateReminderUseCase {
        account_id: user.account_id,
        label: body.label,
        notes: body.notes.unwrap_or_default(),
        created: body.created,
        expiration: ReminderExpiration::Date(body.expires),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder, redirect_to)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

pub async fn create_reminder_days_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    body: web::Json<DaysRequestBody>,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let redirect_to = resolve_redirect(
        &http_req,
        &[body.next.as_deref(), query_params.next.as_deref()],
    );
    let usecase = CreateReminderUseCase {
        account_id: user.account_id,
        label: body.label,
        notes: body.notes.unwrap_or_default(),
        created: body.created,
        expiration: ReminderExpiration::Days(body.days),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder, redirect_to)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// How the client gave the expiration of a reminder, either as the
/// expiration date itself or as a number of days counted from the
/// creation date.
#[derive(Debug, Clone, Copy)]
pub enum ReminderExpiration {
    Date(NaiveDate),
    Days(i64),
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub account_id: ID,
    pub label: String,
    pub notes: String,
    /// When not given the server stamps the current date
    pub created: Option<NaiveDate>,
    pub expiration: ReminderExpiration,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    InvalidReminder(InvalidReminderError),
    InvalidDayCount(i64),
    StorageError,
}

impl From<UseCaseErrors> for MemoraError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::InvalidReminder(e) => Self::BadClientData(e.to_string()),
            UseCaseErrors::InvalidDayCount(days) => {
                Self::BadClientData(format!("Invalid day count: {}, it is out of range.", days))
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        let created = self.created.unwrap_or_else(|| ctx.sys.get_date());
        let expires = match self.expiration {
            ReminderExpiration::Date(expires) => expires,
            ReminderExpiration::Days(days) => {
                let limit = ctx.config.reminder_day_count_limit;
                if days > limit || days < -limit {
                    return Err(UseCaseErrors::InvalidDayCount(days));
                }
                created
                    .checked_add_signed(Duration::days(days))
                    .ok_or(UseCaseErrors::InvalidDayCount(days))?
            }
        };

        let reminder = Reminder {
            id: Default::default(),
            account_id: self.account_id.clone(),
            label: std::mem::take(&mut self.label),
            notes: std::mem::take(&mut self.notes),
            created,
            expires,
        };
        reminder
            .validate()
            .map_err(UseCaseErrors::InvalidReminder)?;

        ctx.repos
            .reminder_repo
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(reminder)
    }
}

impl PermissionBoundary for CreateReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateReminder]
    }
}
