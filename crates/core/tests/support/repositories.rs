//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the core repository ports, enabling
//! deterministic service tests without HTTP.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use meetnotify_core::{
    MeetingRepository, ParticipantRepository, SettingsRepository, UserRepository,
};
use meetnotify_domain::{
    MeetNotifyError, Meeting, MeetingUpdate, NewMeeting, NewParticipant, NewUser,
    NotificationSettings, Participant, ParticipantUpdate, Result as DomainResult, User,
    UserUpdate,
};

/// In-memory mock for `MeetingRepository`.
#[derive(Default, Clone)]
pub struct MockMeetingRepository {
    meetings: Arc<Mutex<Vec<Meeting>>>,
}

impl MockMeetingRepository {
    /// Create a new mock seeded with the provided meetings.
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self { meetings: Arc::new(Mutex::new(meetings)) }
    }

    pub fn snapshot(&self) -> Vec<Meeting> {
        self.meetings.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingRepository for MockMeetingRepository {
    async fn list(&self) -> DomainResult<Vec<Meeting>> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: u64) -> DomainResult<Option<Meeting>> {
        Ok(self.meetings.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, meeting: NewMeeting) -> DomainResult<Meeting> {
        let mut meetings = self.meetings.lock().unwrap();
        let id = meetings.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let created = Meeting {
            id,
            title: meeting.title,
            description: meeting.description,
            date: meeting.date,
            start_time: meeting.start_time,
            end_time: meeting.end_time,
            location: meeting.location,
            participant_ids: meeting.participant_ids,
            attachments: Vec::new(),
            status: None,
            created_at: None,
            updated_at: None,
        };
        meetings.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u64, update: MeetingUpdate) -> DomainResult<Meeting> {
        let mut meetings = self.meetings.lock().unwrap();
        let slot = meetings
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| MeetNotifyError::NotFound(format!("meeting {id}")))?;
        *slot = update.apply_to(slot);
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> DomainResult<()> {
        let mut meetings = self.meetings.lock().unwrap();
        let before = meetings.len();
        meetings.retain(|m| m.id != id);
        if meetings.len() == before {
            return Err(MeetNotifyError::NotFound(format!("meeting {id}")));
        }
        Ok(())
    }
}

/// In-memory mock for `ParticipantRepository`.
#[derive(Default, Clone)]
pub struct MockParticipantRepository {
    participants: Arc<Mutex<Vec<Participant>>>,
}

impl MockParticipantRepository {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants: Arc::new(Mutex::new(participants)) }
    }

    pub fn snapshot(&self) -> Vec<Participant> {
        self.participants.lock().unwrap().clone()
    }
}

#[async_trait]
impl ParticipantRepository for MockParticipantRepository {
    async fn list(&self) -> DomainResult<Vec<Participant>> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: u64) -> DomainResult<Option<Participant>> {
        Ok(self.participants.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, participant: NewParticipant) -> DomainResult<Participant> {
        let mut participants = self.participants.lock().unwrap();
        let id = participants.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = Participant {
            id,
            name: participant.name,
            whatsapp_number: participant.whatsapp_number,
            seksi: participant.seksi,
            position: participant.position,
            email: participant.email,
        };
        participants.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u64, update: ParticipantUpdate) -> DomainResult<Participant> {
        let mut participants = self.participants.lock().unwrap();
        let slot = participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| MeetNotifyError::NotFound(format!("participant {id}")))?;
        *slot = update.apply_to(slot);
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> DomainResult<()> {
        let mut participants = self.participants.lock().unwrap();
        let before = participants.len();
        participants.retain(|p| p.id != id);
        if participants.len() == before {
            return Err(MeetNotifyError::NotFound(format!("participant {id}")));
        }
        Ok(())
    }
}

/// In-memory mock for `UserRepository`.
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: Arc::new(Mutex::new(users)) }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.snapshot())
    }

    async fn get(&self, id: u64) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let created = User {
            id,
            username: user.username,
            name: user.name,
            email: user.email,
            role: user.role,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u64, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| MeetNotifyError::NotFound(format!("user {id}")))?;
        *slot = update.apply_to(slot);
        Ok(slot.clone())
    }

    async fn delete(&self, id: u64) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(MeetNotifyError::NotFound(format!("user {id}")));
        }
        Ok(())
    }
}

/// In-memory mock for `SettingsRepository`.
#[derive(Default, Clone)]
pub struct MockSettingsRepository {
    settings: Arc<Mutex<NotificationSettings>>,
}

impl MockSettingsRepository {
    pub fn new(settings: NotificationSettings) -> Self {
        Self { settings: Arc::new(Mutex::new(settings)) }
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn get(&self) -> DomainResult<NotificationSettings> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn update(&self, settings: NotificationSettings) -> DomainResult<NotificationSettings> {
        *self.settings.lock().unwrap() = settings.clone();
        Ok(settings)
    }
}
