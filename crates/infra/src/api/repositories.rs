//! REST implementations of the core repository ports

use std::sync::Arc;

use async_trait::async_trait;
use meetnotify_core::{
    MeetingRepository, ParticipantRepository, SettingsRepository, UserRepository,
};
use meetnotify_domain::{
    Meeting, MeetingUpdate, NewMeeting, NewParticipant, NewUser, NotificationSettings,
    Participant, ParticipantUpdate, Result, User, UserUpdate,
};

use super::client::ApiClient;
use super::errors::ApiError;

/// `GET` a single resource, treating 404 as absence.
async fn get_optional<T: serde::de::DeserializeOwned>(
    client: &ApiClient,
    path: &str,
) -> Result<Option<T>> {
    match client.get(path).await {
        Ok(found) => Ok(Some(found)),
        Err(ApiError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Meetings over `/meetings`
#[derive(Clone)]
pub struct ApiMeetingRepository {
    client: Arc<ApiClient>,
}

impl ApiMeetingRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MeetingRepository for ApiMeetingRepository {
    async fn list(&self) -> Result<Vec<Meeting>> {
        Ok(self.client.get("/meetings").await?)
    }

    async fn get(&self, id: u64) -> Result<Option<Meeting>> {
        get_optional(&self.client, &format!("/meetings/{id}")).await
    }

    async fn create(&self, meeting: NewMeeting) -> Result<Meeting> {
        Ok(self.client.post("/meetings", &meeting).await?)
    }

    async fn update(&self, id: u64, update: MeetingUpdate) -> Result<Meeting> {
        Ok(self.client.put(&format!("/meetings/{id}"), &update).await?)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        Ok(self.client.delete(&format!("/meetings/{id}")).await?)
    }
}

/// Participants over `/participants`
#[derive(Clone)]
pub struct ApiParticipantRepository {
    client: Arc<ApiClient>,
}

impl ApiParticipantRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParticipantRepository for ApiParticipantRepository {
    async fn list(&self) -> Result<Vec<Participant>> {
        Ok(self.client.get("/participants").await?)
    }

    async fn get(&self, id: u64) -> Result<Option<Participant>> {
        get_optional(&self.client, &format!("/participants/{id}")).await
    }

    async fn create(&self, participant: NewParticipant) -> Result<Participant> {
        Ok(self.client.post("/participants", &participant).await?)
    }

    async fn update(&self, id: u64, update: ParticipantUpdate) -> Result<Participant> {
        Ok(self.client.put(&format!("/participants/{id}"), &update).await?)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        Ok(self.client.delete(&format!("/participants/{id}")).await?)
    }
}

/// Users over `/users`
#[derive(Clone)]
pub struct ApiUserRepository {
    client: Arc<ApiClient>,
}

impl ApiUserRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for ApiUserRepository {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.client.get("/users").await?)
    }

    async fn get(&self, id: u64) -> Result<Option<User>> {
        get_optional(&self.client, &format!("/users/{id}")).await
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        Ok(self.client.post("/users", &user).await?)
    }

    async fn update(&self, id: u64, update: UserUpdate) -> Result<User> {
        Ok(self.client.put(&format!("/users/{id}"), &update).await?)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        Ok(self.client.delete(&format!("/users/{id}")).await?)
    }
}

/// Notification settings over `/settings`
#[derive(Clone)]
pub struct ApiSettingsRepository {
    client: Arc<ApiClient>,
}

impl ApiSettingsRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsRepository for ApiSettingsRepository {
    async fn get(&self) -> Result<NotificationSettings> {
        Ok(self.client.get("/settings").await?)
    }

    async fn update(&self, settings: NotificationSettings) -> Result<NotificationSettings> {
        Ok(self.client.put("/settings", &settings).await?)
    }
}
