use crate::{APIResponse, BaseClient};
use chrono::NaiveDate;
use memora_api_structs::*;
use memora_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderDateInput {
    pub label: String,
    pub notes: Option<String>,
    pub created: Option<NaiveDate>,
    pub expires: NaiveDate,
    pub next: Option<String>,
}

pub struct CreateReminderDaysInput {
    pub label: String,
    pub notes: Option<String>,
    pub created: Option<NaiveDate>,
    pub days: i64,
    pub next: Option<String>,
}

pub struct UpdateReminderDateInput {
    pub reminder_id: ID,
    pub label: String,
    pub notes: Option<String>,
    pub expires: NaiveDate,
    pub next: Option<String>,
}

pub struct UpdateReminderDaysInput {
    pub reminder_id: ID,
    pub label: String,
    pub notes: Option<String>,
    pub days: i64,
    pub next: Option<String>,
}

pub struct GetExpiredRemindersInput {
    pub at: Option<NaiveDate>,
}

pub struct DeleteReminderInput {
    pub reminder_id: ID,
    pub next: Option<String>,
    pub previous: Option<String>,
}

pub struct DeleteRemindersInput {
    pub reminder_ids: Vec<ID>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn expired(
        &self,
        input: GetExpiredRemindersInput,
    ) -> APIResponse<get_expired_reminders::APIResponse> {
        let path = match input.at {
            Some(at) => format!("reminders/expired?at={}", at),
            None => "reminders/expired".into(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn get(&self, reminder_id: ID) -> APIResponse<get_reminder::APIResponse> {
        self.base
            .get(format!("reminders/{}", reminder_id), StatusCode::OK)
            .await
    }

    pub async fn create_with_date(
        &self,
        input: CreateReminderDateInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::DateRequestBody {
            label: input.label,
            notes: input.notes,
            created: input.created,
            expires: input.expires,
            next: input.next,
        };
        self.base
            .post(body, "reminders/date".into(), StatusCode::CREATED)
            .await
    }

    pub async fn create_with_days(
        &self,
        input: CreateReminderDaysInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::DaysRequestBody {
            label: input.label,
            notes: input.notes,
            created: input.created,
            days: input.days,
            next: input.next,
        };
        self.base
            .post(body, "reminders/days".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update_with_date(
        &self,
        input: UpdateReminderDateInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::DateRequestBody {
            label: input.label,
            notes: input.notes,
            expires: input.expires,
            next: input.next,
        };
        self.base
            .put(
                body,
                format!("reminders/{}/date", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn update_with_days(
        &self,
        input: UpdateReminderDaysInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::DaysRequestBody {
            label: input.label,
            notes: input.notes,
            days: input.days,
            next: input.next,
        };
        self.base
            .put(
                body,
                format!("reminders/{}/days", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete_confirmation(
        &self,
        input: DeleteReminderInput,
    ) -> APIResponse<delete_reminder::ConfirmationResponse> {
        let mut query = Vec::new();
        if let Some(next) = input.next {
            query.push(format!("next={}", next));
        }
        if let Some(previous) = input.previous {
            query.push(format!("previous={}", previous));
        }
        let mut path = format!("reminders/{}/delete", input.reminder_id);
        if !query.is_empty() {
            path = format!("{}?{}", path, query.join("&"));
        }
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn delete(
        &self,
        input: DeleteReminderInput,
    ) -> APIResponse<delete_reminder::APIResponse> {
        let body = delete_reminder::RequestBody {
            next: input.next,
            previous: input.previous,
        };
        self.base
            .post(
                body,
                format!("reminders/{}/delete", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete_many_confirmation(
        &self,
        input: DeleteRemindersInput,
    ) -> APIResponse<delete_reminders::ConfirmationResponse> {
        let mut query = vec![format!("ids={}", join_ids(&input.reminder_ids))];
        if let Some(next) = input.next {
            query.push(format!("next={}", next));
        }
        if let Some(previous) = input.previous {
            query.push(format!("previous={}", previous));
        }
        self.base
            .get(
                format!("reminders/delete?{}", query.join("&")),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete_many(
        &self,
        input: DeleteRemindersInput,
    ) -> APIResponse<delete_reminders::APIResponse> {
        let body = delete_reminders::RequestBody {
            next: input.next,
            previous: input.previous,
        };
        let path = format!("reminders/delete?ids={}", join_ids(&input.reminder_ids));
        self.base.post(body, path, StatusCode::OK).await
    }
}

fn join_ids(ids: &[ID]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
