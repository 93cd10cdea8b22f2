use super::create_reminder::ReminderExpiration;
use crate::error::MemoraError;
use crate::shared::{
    auth::{protect_route, Permission},
    redirect::resolve_redirect,
    usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Duration;
use memora_api_structs::update_reminder::*;
use memora_domain::{InvalidReminderError, Reminder, ID};
use memora_infra::MemoraContext;

pub async fn update_reminder_date_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
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
    let usecase = UpdateReminderUseCase {
        account_id: user.account_id,
        reminder_id: path_params.reminder_id.clone(),
        label: body.label,
        notes: body.notes.unwrap_or_default(),
        expiration: ReminderExpiration::Date(body.expires),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder, redirect_to)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

pub async fn update_reminder_days_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
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
    let usecase = UpdateReminderUseCase {
        account_id: user.account_id,
        reminder_id: path_params.reminder_id.clone(),
        label: body.label,
        notes: body.notes.unwrap_or_default(),
        expiration: ReminderExpiration::Days(body.days),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder, redirect_to)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub account_id: ID,
    pub reminder_id: ID,
    pub label: String,
    pub notes: String,
    pub expiration: ReminderExpiration,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    NotFound(ID),
    InvalidReminder(InvalidReminderError),
    InvalidDayCount(i64),
    StorageError,
}

impl From<UseCaseErrors> for MemoraError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseErrors::InvalidReminder(e) => Self::BadClientData(e.to_string()),
            UseCaseErrors::InvalidDayCount(days) => {
                Self::BadClientData(format!("Invalid day count: {}, it is out of range.", days))
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        let mut reminder = match ctx.repos.reminder_repo.find(&self.reminder_id).await {
            Some(reminder) if reminder.account_id == self.account_id => reminder,
            _ => return Err(UseCaseErrors::NotFound(self.reminder_id.clone())),
        };

        reminder.label = std::mem::take(&mut self.label);
        reminder.notes = std::mem::take(&mut self.notes);
        // A day count keeps counting from the original creation date
        reminder.expires = match self.expiration {
            ReminderExpiration::Date(expires) => expires,
            ReminderExpiration::Days(days) => {
                let limit = ctx.config.reminder_day_count_limit;
                if days > limit || days < -limit {
                    return Err(UseCaseErrors::InvalidDayCount(days));
                }
                reminder
                    .created
                    .checked_add_signed(Duration::days(days))
                    .ok_or(UseCaseErrors::InvalidDayCount(days))?
            }
        };
        reminder
            .validate()
            .map_err(UseCaseErrors::InvalidReminder)?;

        ctx.repos
            .reminder_repo
            .save(&reminder)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(reminder)
    }
}

impl PermissionBoundary for UpdateReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateReminder]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use memora_domain::Account;
    use memora_infra::setup_context;

    fn date(ymd: (i32, u32, u32)) -> NaiveDate {
        NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap()
    }

    struct TestContext {
        ctx: MemoraContext,
        account: Account,
        reminder: Reminder,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context().await;
        let account = Account::default();
        ctx.repos.account_repo.insert(&account).await.unwrap();
        let reminder = Reminder {
            id: Default::default(),
            account_id: account.id.clone(),
            label: "Pay rent".into(),
            notes: "".into(),
            created: date((2024, 1, 1)),
            expires: date((2024, 3, 1)),
        };
        ctx.repos.reminder_repo.insert(&reminder).await.unwrap();

        TestContext {
            ctx,
            account,
            reminder,
        }
    }

    fn usecase(
        account: &Account,
        reminder: &Reminder,
        expiration: ReminderExpiration,
    ) -> UpdateReminderUseCase {
        UpdateReminderUseCase {
            account_id: account.id.clone(),
            reminder_id: reminder.id.clone(),
            label: "Pay rent on time".into(),
            notes: "Wire it the day before".into(),
            expiration,
        }
    }

    #[actix_web::main]
    #[test]
    async fn updates_the_reminder_but_not_its_creation_date() {
        let TestContext {
            ctx,
            account,
            reminder,
        } = setup().await;

        let mut usecase = usecase(
            &account,
            &reminder,
            ReminderExpiration::Date(date((2024, 4, 1))),
        );

        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.label, "Pay rent on time");
        assert_eq!(updated.notes, "Wire it the day before");
        assert_eq!(updated.expires, date((2024, 4, 1)));
        assert_eq!(updated.created, reminder.created);

        let found = ctx.repos.reminder_repo.find(&reminder.id).await;
        assert_eq!(found, Some(updated));
    }

    #[actix_web::main]
    #[test]
    async fn day_count_keeps_counting_from_the_original_creation_date() {
        let TestContext {
            ctx,
            account,
            reminder,
        } = setup().await;

        let mut usecase = usecase(&account, &reminder, ReminderExpiration::Days(20));

        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.created, date((2024, 1, 1)));
        assert_eq!(updated.expires, date((2024, 1, 21)));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_reminder_owned_by_someone_else() {
        let TestContext {
            ctx,
            account: _,
            reminder,
        } = setup().await;

        let other_account = Account::default();
        ctx.repos.account_repo.insert(&other_account).await.unwrap();
        let mut usecase = usecase(
            &other_account,
            &reminder,
            ReminderExpiration::Date(date((2024, 4, 1))),
        );

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseErrors::NotFound(reminder.id));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_reminder() {
        let TestContext {
            ctx,
            account,
            reminder,
        } = setup().await;

        let mut usecase = usecase(&account, &reminder, ReminderExpiration::Days(20));
        usecase.reminder_id = Default::default();

        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseErrors::NotFound(usecase.reminder_id.clone())
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_labels() {
        let TestContext {
            ctx,
            account,
            reminder,
        } = setup().await;

        let mut usecase = usecase(&account, &reminder, ReminderExpiration::Days(20));
        usecase.label = "".into();

        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res.unwrap_err(),
            UseCaseErrors::InvalidReminder(InvalidReminderError::EmptyLabel)
        );

        // The stored reminder was not touched
        let found = ctx.repos.reminder_repo.find(&reminder.id).await;
        assert_eq!(found, Some(reminder));
    }
}
