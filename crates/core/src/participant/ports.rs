//! Port interfaces for participant management

use async_trait::async_trait;
use meetnotify_domain::{NewParticipant, Participant, ParticipantUpdate, Result};

/// Trait for participant persistence and retrieval
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Participant>>;

    async fn get(&self, id: u64) -> Result<Option<Participant>>;

    async fn create(&self, participant: NewParticipant) -> Result<Participant>;

    async fn update(&self, id: u64, update: ParticipantUpdate) -> Result<Participant>;

    async fn delete(&self, id: u64) -> Result<()>;
}
