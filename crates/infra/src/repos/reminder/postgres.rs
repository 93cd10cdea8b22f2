use super::IReminderRepo;
use chrono::NaiveDate;
use memora_domain::{Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    account_uid: Uuid,
    label: String,
    notes: String,
    created: NaiveDate,
    expires: NaiveDate,
}

impl From<ReminderRaw> for Reminder {
    fn from(e: ReminderRaw) -> Self {
        Self {
            id: e.reminder_uid.into(),
            account_id: e.account_uid.into(),
            label: e.label,
            notes: e.notes,
            created: e.created,
            expires: e.expires,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders(reminder_uid, account_uid, label, notes, created, expires)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.account_id.inner_ref())
        .bind(&reminder.label)
        .bind(&reminder.notes)
        .bind(reminder.created)
        .bind(reminder.expires)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;

        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        // created is deliberately left out, it is stamped at insert and
        // never moves
        sqlx::query(
            r#"
            UPDATE reminders
            SET label = $2,
            notes = $3,
            expires = $4
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.label)
        .bind(&reminder.notes)
        .bind(reminder.expires)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .ok()?;
        res.map(|reminder| reminder.into())
    }

    async fn find_by_account(&self, account_id: &ID) -> Vec<Reminder> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE account_uid = $1
            ORDER BY created DESC, label ASC, reminder_uid ASC
            "#,
        )
        .bind(account_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminders for account id: {:?} failed. DB returned error: {:?}",
                account_id, e
            );
            e
        })
        .unwrap_or_default();

        reminders.into_iter().map(|r| r.into()).collect()
    }

    async fn find_expired(&self, account_id: &ID, before: NaiveDate) -> Vec<Reminder> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE account_uid = $1 AND expires < $2
            ORDER BY created DESC, label ASC, reminder_uid ASC
            "#,
        )
        .bind(account_id.inner_ref())
        .bind(before)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find expired reminders for account id: {:?} failed. DB returned error: {:?}",
                account_id, e
            );
            e
        })
        .unwrap_or_default();

        reminders.into_iter().map(|r| r.into()).collect()
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<Option<Reminder>> {
        // participants and notifications reference reminders with
        // ON DELETE CASCADE, so they go down with it
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })?;
        Ok(res.map(|reminder| reminder.into()))
    }
}
