use std::str::FromStr;

use super::IParticipantRepo;
use memora_domain::{Participant, ParticipantRole, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresParticipantRepo {
    pool: PgPool,
}

impl PostgresParticipantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ParticipantRaw {
    participant_uid: Uuid,
    reminder_uid: Uuid,
    user_uid: Uuid,
    role: String,
}

impl From<ParticipantRaw> for Participant {
    fn from(e: ParticipantRaw) -> Self {
        Self {
            id: e.participant_uid.into(),
            reminder_id: e.reminder_uid.into(),
            user_id: e.user_uid.into(),
            role: ParticipantRole::from_str(&e.role).unwrap(),
        }
    }
}

#[async_trait::async_trait]
impl IParticipantRepo for PostgresParticipantRepo {
    async fn insert(&self, participant: &Participant) -> anyhow::Result<()> {
        // The unique index on (reminder_uid, user_uid, role) rejects a
        // user holding the same role twice
        sqlx::query(
            r#"
            INSERT INTO participants(participant_uid, reminder_uid, user_uid, role)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(participant.id.inner_ref())
        .bind(participant.reminder_id.inner_ref())
        .bind(participant.user_id.inner_ref())
        .bind(participant.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert participant: {:?}. DB returned error: {:?}",
                participant, e
            );
            e
        })?;

        Ok(())
    }

    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<Participant> {
        let participants: Vec<ParticipantRaw> = sqlx::query_as(
            r#"
            SELECT * FROM participants
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find participants for reminder id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .unwrap_or_default();

        participants.into_iter().map(|p| p.into()).collect()
    }

    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM participants
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete participants for reminder id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })?;
        Ok(())
    }
}
