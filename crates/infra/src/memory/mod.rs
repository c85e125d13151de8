//! In-memory fallback backend
//!
//! Used when no REST backend is configured. Implements the same ports as the
//! API repositories.

pub mod repositories;
pub mod store;

pub use repositories::{
    MemoryMeetingRepository, MemoryParticipantRepository, MemorySettingsRepository,
    MemoryUserRepository,
};
pub use store::InMemoryStore;
