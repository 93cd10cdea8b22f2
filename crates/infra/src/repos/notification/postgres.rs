use std::str::FromStr;

use super::INotificationRepo;
use memora_domain::{Notification, Preemptive, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresNotificationRepo {
    pool: PgPool,
}

impl PostgresNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NotificationRaw {
    notification_uid: Uuid,
    reminder_uid: Uuid,
    participant_uid: Uuid,
    preemptive: String,
}

impl From<NotificationRaw> for Notification {
    fn from(e: NotificationRaw) -> Self {
        Self {
            id: e.notification_uid.into(),
            reminder_id: e.reminder_uid.into(),
            participant_id: e.participant_uid.into(),
            preemptive: Preemptive::from_str(&e.preemptive).unwrap(),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for PostgresNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications(notification_uid, reminder_uid, participant_uid, preemptive)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(notification.id.inner_ref())
        .bind(notification.reminder_id.inner_ref())
        .bind(notification.participant_id.inner_ref())
        .bind(notification.preemptive.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert notification: {:?}. DB returned error: {:?}",
                notification, e
            );
            e
        })?;

        Ok(())
    }

    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<Notification> {
        let notifications: Vec<NotificationRaw> = sqlx::query_as(
            r#"
            SELECT * FROM notifications
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find notifications for reminder id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .unwrap_or_default();

        notifications.into_iter().map(|n| n.into()).collect()
    }

    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM notifications
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete notifications for reminder id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })?;
        Ok(())
    }
}
