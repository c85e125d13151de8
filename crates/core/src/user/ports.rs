//! Port interfaces for user management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for user account operations.

use async_trait::async_trait;
use meetnotify_domain::{NewUser, Result, User, UserUpdate};

/// Trait for user account persistence and retrieval
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all user accounts
    async fn list(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get(&self, id: u64) -> Result<Option<User>>;

    /// Create a new user account
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Update an existing user account
    async fn update(&self, id: u64, update: UserUpdate) -> Result<User>;

    /// Delete a user account by ID
    async fn delete(&self, id: u64) -> Result<()>;
}
