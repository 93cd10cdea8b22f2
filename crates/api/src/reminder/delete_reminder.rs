use crate::error::MemoraError;
use crate::shared::{
    auth::{protect_route, Permission},
    redirect::resolve_redirect,
    usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use actix_web::{web, HttpRequest, HttpResponse};
use memora_api_structs::delete_reminder::*;
use memora_domain::{Reminder, ID};
use memora_infra::MemoraContext;

/// Where a delete redirects to when the client gave no other target
pub const REMINDER_LIST_PATH: &str = "/api/v1/reminders";

pub async fn delete_reminder_confirmation_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let next = resolve_redirect(
        &http_req,
        &[query_params.next.as_deref(), Some(REMINDER_LIST_PATH)],
    );
    let previous = resolve_redirect(&http_req, &[query_params.previous.as_deref()]);
    let usecase = GetDeleteConfirmationUseCase {
        account_id: user.account_id,
        reminder_ids: vec![path_params.reminder_id.clone()],
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminders| {
            HttpResponse::Ok().json(ConfirmationResponse::new(reminders, previous, next))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

pub async fn delete_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    body: Option<web::Json<RequestBody>>,
    ctx: web::Data<MemoraContext>,
) -> Result<HttpResponse, MemoraError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.map(|body| body.0).unwrap_or_default();
    let redirect_to = resolve_redirect(
        &http_req,
        &[
            body.next.as_deref(),
            query_params.next.as_deref(),
            Some(REMINDER_LIST_PATH),
        ],
    );
    let usecase = DeleteRemindersUseCase {
        account_id: user.account_id,
        reminder_ids: vec![path_params.reminder_id.clone()],
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|report| {
            HttpResponse::Ok().json(APIResponse::new(report.deleted, report.failed, redirect_to))
        })
        .map_err(|e| match e {
            UseCaseErrorContainer::Forbidden(e) => MemoraError::Forbidden(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// Looks up the reminders a delete request points at so that the client
/// can show a confirmation prompt before committing to it.
#[derive(Debug)]
pub struct GetDeleteConfirmationUseCase {
    pub account_id: ID,
    pub reminder_ids: Vec<ID>,
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
impl UseCase for GetDeleteConfirmationUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        // Keep the order the client asked for, the confirmation prompt
        // lists the reminders in that order
        let mut reminders = Vec::with_capacity(self.reminder_ids.len());
        for reminder_id in &self.reminder_ids {
            match ctx.repos.reminder_repo.find(reminder_id).await {
                Some(reminder) if reminder.account_id == self.account_id => {
                    reminders.push(reminder)
                }
                _ => return Err(UseCaseErrors::NotFound(reminder_id.clone())),
            }
        }

        Ok(reminders)
    }
}

impl PermissionBoundary for GetDeleteConfirmationUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteReminder]
    }
}

#[derive(Debug)]
pub struct DeletionReport {
    pub deleted: Vec<Reminder>,
    pub failed: Vec<(Reminder, String)>,
}

#[derive(Debug)]
pub struct DeleteRemindersUseCase {
    pub account_id: ID,
    pub reminder_ids: Vec<ID>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteRemindersUseCase {
    type Response = DeletionReport;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &MemoraContext) -> Result<Self::Response, Self::Errors> {
        // Resolve every id before deleting anything, one unknown id
        // fails the whole request with nothing deleted
        let mut reminders = Vec::with_capacity(self.reminder_ids.len());
        for reminder_id in &self.reminder_ids {
            match ctx.repos.reminder_repo.find(reminder_id).await {
                Some(reminder) if reminder.account_id == self.account_id => {
                    reminders.push(reminder)
                }
                _ => return Err(UseCaseErrors::NotFound(reminder_id.clone())),
            }
        }

        // A failed deletion does not stop the remaining ones
        let mut report = DeletionReport {
            deleted: Vec::new(),
            failed: Vec::new(),
        };
        for reminder in reminders {
            match ctx.repos.reminder_repo.delete(&reminder.id).await {
                Ok(_) => report.deleted.push(reminder),
                Err(e) => report.failed.push((reminder, e.to_string())),
            }
        }

        Ok(report)
    }
}

impl PermissionBoundary for DeleteRemindersUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteReminder]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use memora_domain::Account;
    use memora_infra::{setup_context, IReminderRepo};
    use std::sync::Arc;

    struct TestContext {
        ctx: MemoraContext,
        account: Account,
        reminders: Vec<Reminder>,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context().await;
        let account = Account::default();
        ctx.repos.account_repo.insert(&account).await.unwrap();

        let mut reminders = Vec::new();
        for (i, label) in ["Pay rent", "Renew passport", "Water plants"]
            .iter()
            .enumerate()
        {
            let reminder = Reminder {
                id: Default::default(),
                account_id: account.id.clone(),
                label: (*label).into(),
                notes: "".into(),
                created: NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(),
                expires: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            };
            ctx.repos.reminder_repo.insert(&reminder).await.unwrap();
            reminders.push(reminder);
        }

        TestContext {
            ctx,
            account,
            reminders,
        }
    }

    fn ids(reminders: &[Reminder]) -> Vec<ID> {
        reminders.iter().map(|r| r.id.clone()).collect()
    }

    #[actix_web::main]
    #[test]
    async fn confirmation_lists_reminders_in_request_order() {
        let TestContext {
            ctx,
            account,
            reminders,
        } = setup().await;

        let mut usecase = GetDeleteConfirmationUseCase {
            account_id: account.id.clone(),
            reminder_ids: vec![
                reminders[2].id.clone(),
                reminders[0].id.clone(),
                reminders[1].id.clone(),
            ],
        };

        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            res,
            vec![
                reminders[2].clone(),
                reminders[0].clone(),
                reminders[1].clone()
            ]
        );
    }

    #[actix_web::main]
    #[test]
    async fn confirmation_fails_when_any_reminder_is_unknown() {
        let TestContext {
            ctx,
            account,
            reminders,
        } = setup().await;

        let unknown_id = ID::default();
        let mut usecase = GetDeleteConfirmationUseCase {
            account_id: account.id.clone(),
            reminder_ids: vec![reminders[0].id.clone(), unknown_id.clone()],
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res, Err(UseCaseErrors::NotFound(unknown_id)));

        // A reminder in another account counts as unknown as well
        let mut usecase = GetDeleteConfirmationUseCase {
            account_id: Default::default(),
            reminder_ids: vec![reminders[0].id.clone()],
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(
            res,
            Err(UseCaseErrors::NotFound(reminders[0].id.clone()))
        );
    }

    #[actix_web::main]
    #[test]
    async fn deletes_every_reminder() {
        let TestContext {
            ctx,
            account,
            reminders,
        } = setup().await;

        let mut usecase = DeleteRemindersUseCase {
            account_id: account.id.clone(),
            reminder_ids: ids(&reminders),
        };

        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(report.deleted, reminders);
        assert!(report.failed.is_empty());
        for reminder in &reminders {
            assert!(ctx.repos.reminder_repo.find(&reminder.id).await.is_none());
        }
    }

    #[actix_web::main]
    #[test]
    async fn one_unknown_id_fails_the_whole_request() {
        let TestContext {
            ctx,
            account,
            reminders,
        } = setup().await;

        let unknown_id = ID::default();
        let mut usecase = DeleteRemindersUseCase {
            account_id: account.id.clone(),
            reminder_ids: vec![
                reminders[0].id.clone(),
                unknown_id.clone(),
                reminders[1].id.clone(),
            ],
        };

        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseErrors::NotFound(unknown_id));

        // Nothing was deleted
        for reminder in &reminders {
            assert!(ctx.repos.reminder_repo.find(&reminder.id).await.is_some());
        }
    }

    struct FailingDeleteRepo {
        inner: Arc<dyn IReminderRepo>,
        fail_on: ID,
    }

    #[async_trait::async_trait]
    impl IReminderRepo for FailingDeleteRepo {
        async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
            self.inner.insert(reminder).await
        }

        async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
            self.inner.save(reminder).await
        }

        async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
            self.inner.find(reminder_id).await
        }

        async fn find_by_account(&self, account_id: &ID) -> Vec<Reminder> {
            self.inner.find_by_account(account_id).await
        }

        async fn find_expired(&self, account_id: &ID, before: NaiveDate) -> Vec<Reminder> {
            self.inner.find_expired(account_id, before).await
        }

        async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
            if *reminder_id == self.fail_on {
                return Err(anyhow::Error::msg("the database is on fire"));
            }
            self.inner.delete(reminder_id).await
        }
    }

    #[actix_web::main]
    #[test]
    async fn keeps_deleting_past_failures() {
        let TestContext {
            mut ctx,
            account,
            reminders,
        } = setup().await;
        ctx.repos.reminder_repo = Arc::new(FailingDeleteRepo {
            inner: ctx.repos.reminder_repo.clone(),
            fail_on: reminders[1].id.clone(),
        });

        let mut usecase = DeleteRemindersUseCase {
            account_id: account.id.clone(),
            reminder_ids: ids(&reminders),
        };

        let report = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            report.deleted,
            vec![reminders[0].clone(), reminders[2].clone()]
        );
        assert_eq!(
            report.failed,
            vec![(reminders[1].clone(), "the database is on fire".to_string())]
        );

        // The reminder that failed to delete is still there
        assert!(ctx.repos.reminder_repo.find(&reminders[1].id).await.is_some());
        assert!(ctx.repos.reminder_repo.find(&reminders[0].id).await.is_none());
        assert!(ctx.repos.reminder_repo.find(&reminders[2].id).await.is_none());
    }
}
