//! In-memory implementations of the core repository ports

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use meetnotify_core::{
    MeetingRepository, ParticipantRepository, SettingsRepository, UserRepository,
};
use meetnotify_domain::{
    MeetNotifyError, Meeting, MeetingUpdate, NewMeeting, NewParticipant, NewUser,
    NotificationSettings, Participant, ParticipantUpdate, Result, User, UserUpdate,
};
use tracing::debug;

use super::store::InMemoryStore;

fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

fn not_found(kind: &str, id: u64) -> MeetNotifyError {
    MeetNotifyError::NotFound(format!("{kind} {id}"))
}

/// Meetings held in an [`InMemoryStore`]
#[derive(Clone)]
pub struct MemoryMeetingRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryMeetingRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MeetingRepository for MemoryMeetingRepository {
    async fn list(&self) -> Result<Vec<Meeting>> {
        Ok(self.store.read(|state| state.meetings.clone()))
    }

    async fn get(&self, id: u64) -> Result<Option<Meeting>> {
        Ok(self.store.read(|state| state.meetings.iter().find(|m| m.id == id).cloned()))
    }

    async fn create(&self, meeting: NewMeeting) -> Result<Meeting> {
        let created = self.store.write(|state| {
            let now = timestamp();
            let created = Meeting {
                id: state.next_meeting_id(),
                title: meeting.title,
                description: meeting.description,
                date: meeting.date,
                start_time: meeting.start_time,
                end_time: meeting.end_time,
                location: meeting.location,
                participant_ids: meeting.participant_ids,
                attachments: Vec::new(),
                status: None,
                created_at: Some(now.clone()),
                updated_at: Some(now),
            };
            state.meetings.push(created.clone());
            created
        });
        debug!(meeting_id = created.id, "stored meeting in memory");
        Ok(created)
    }

    async fn update(&self, id: u64, update: MeetingUpdate) -> Result<Meeting> {
        self.store.write(|state| {
            let slot = state
                .meetings
                .iter_mut()
                .find(|m| m.id == id)
                .ok_or_else(|| not_found("meeting", id))?;
            let mut merged = update.apply_to(slot);
            merged.updated_at = Some(timestamp());
            *slot = merged.clone();
            Ok(merged)
        })
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.store.write(|state| {
            let before = state.meetings.len();
            state.meetings.retain(|m| m.id != id);
            if state.meetings.len() == before {
                return Err(not_found("meeting", id));
            }
            Ok(())
        })
    }
}

/// Participants held in an [`InMemoryStore`]
#[derive(Clone)]
pub struct MemoryParticipantRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryParticipantRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ParticipantRepository for MemoryParticipantRepository {
    async fn list(&self) -> Result<Vec<Participant>> {
        Ok(self.store.read(|state| state.participants.clone()))
    }

    async fn get(&self, id: u64) -> Result<Option<Participant>> {
        Ok(self.store.read(|state| state.participants.iter().find(|p| p.id == id).cloned()))
    }

    async fn create(&self, participant: NewParticipant) -> Result<Participant> {
        Ok(self.store.write(|state| {
            let created = Participant {
                id: state.next_participant_id(),
                name: participant.name,
                whatsapp_number: participant.whatsapp_number,
                seksi: participant.seksi,
                position: participant.position,
                email: participant.email,
            };
            state.participants.push(created.clone());
            created
        }))
    }

    async fn update(&self, id: u64, update: ParticipantUpdate) -> Result<Participant> {
        self.store.write(|state| {
            let slot = state
                .participants
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| not_found("participant", id))?;
            *slot = update.apply_to(slot);
            Ok(slot.clone())
        })
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.store.write(|state| {
            let before = state.participants.len();
            state.participants.retain(|p| p.id != id);
            if state.participants.len() == before {
                return Err(not_found("participant", id));
            }
            // Drop dangling references from meetings.
            for meeting in &mut state.meetings {
                meeting.participant_ids.retain(|pid| *pid != id);
            }
            Ok(())
        })
    }
}

/// Users held in an [`InMemoryStore`]; passwords are accepted and discarded
#[derive(Clone)]
pub struct MemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.store.read(|state| state.users.clone()))
    }

    async fn get(&self, id: u64) -> Result<Option<User>> {
        Ok(self.store.read(|state| state.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        Ok(self.store.write(|state| {
            let created = User {
                id: state.next_user_id(),
                username: user.username,
                name: user.name,
                email: user.email,
                role: user.role,
            };
            state.users.push(created.clone());
            created
        }))
    }

    async fn update(&self, id: u64, update: UserUpdate) -> Result<User> {
        self.store.write(|state| {
            let slot =
                state.users.iter_mut().find(|u| u.id == id).ok_or_else(|| not_found("user", id))?;
            *slot = update.apply_to(slot);
            Ok(slot.clone())
        })
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.store.write(|state| {
            let before = state.users.len();
            state.users.retain(|u| u.id != id);
            if state.users.len() == before {
                return Err(not_found("user", id));
            }
            Ok(())
        })
    }
}

/// Notification settings held in an [`InMemoryStore`]
#[derive(Clone)]
pub struct MemorySettingsRepository {
    store: Arc<InMemoryStore>,
}

impl MemorySettingsRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn get(&self) -> Result<NotificationSettings> {
        Ok(self.store.read(|state| state.settings.clone()))
    }

    async fn update(&self, settings: NotificationSettings) -> Result<NotificationSettings> {
        self.store.write(|state| state.settings = settings.clone());
        Ok(settings)
    }
}
