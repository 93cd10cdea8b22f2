use super::IParticipantRepo;
use crate::repos::shared::inmemory_repo::*;
use memora_domain::{Participant, ID};

pub struct InMemoryParticipantRepo {
    participants: std::sync::Mutex<Vec<Participant>>,
}

impl InMemoryParticipantRepo {
    pub fn new() -> Self {
        Self {
            participants: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IParticipantRepo for InMemoryParticipantRepo {
    async fn insert(&self, participant: &Participant) -> anyhow::Result<()> {
        let same_role = find_by(&self.participants, |p| {
            p.reminder_id == participant.reminder_id
                && p.user_id == participant.user_id
                && p.role == participant.role
        });
        if !same_role.is_empty() {
            return Err(anyhow::Error::msg(format!(
                "User: {} already holds the role: {} on reminder: {}",
                participant.user_id, participant.role, participant.reminder_id
            )));
        }
        insert(participant, &self.participants);
        Ok(())
    }

    async fn find_by_reminder(&self, reminder_id: &ID) -> Vec<Participant> {
        find_by(&self.participants, |p| p.reminder_id == *reminder_id)
    }

    async fn delete_by_reminder(&self, reminder_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.participants, |p| p.reminder_id == *reminder_id);
        Ok(())
    }
}
