//! Port interfaces for meeting persistence
//!
//! Implementations hand out owned snapshots; nothing outside the repository
//! mutates its collection.

use async_trait::async_trait;
use meetnotify_domain::{Meeting, MeetingUpdate, NewMeeting, Result};

/// Trait for meeting persistence and retrieval
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Snapshot of every meeting
    async fn list(&self) -> Result<Vec<Meeting>>;

    /// Get meeting by ID
    async fn get(&self, id: u64) -> Result<Option<Meeting>>;

    /// Create a new meeting
    async fn create(&self, meeting: NewMeeting) -> Result<Meeting>;

    /// Update an existing meeting; `NotFound` if it does not exist
    async fn update(&self, id: u64, update: MeetingUpdate) -> Result<Meeting>;

    /// Delete a meeting by ID; `NotFound` if it does not exist
    async fn delete(&self, id: u64) -> Result<()>;
}
