//! # MeetNotify Domain
//!
//! Business domain types and models for MeetNotify.
//!
//! This crate contains:
//! - Domain data types (Meeting, Participant, User, NotificationSettings)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Pure helpers for meeting date/time parsing and WhatsApp numbers
//!
//! ## Architecture
//! - No dependencies on other MeetNotify crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::meeting_time::combine_date_time;
pub use utils::phone::normalize_whatsapp_number;
