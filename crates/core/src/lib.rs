//! # MeetNotify Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Temporal classification and meeting list arrangement
//! - Port/adapter interfaces (traits)
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `meetnotify-domain`
//! - No HTTP or storage code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod meeting;
pub mod participant;
pub mod review;
pub mod schedule;
pub mod settings;
pub mod user;

// Re-export specific items to avoid ambiguity
pub use meeting::ports::MeetingRepository;
pub use meeting::MeetingService;
pub use participant::ports::ParticipantRepository;
pub use participant::ParticipantService;
pub use review::ReviewService;
pub use schedule::{
    arrange, arrange_with_divider, ArrangedMeetings, Classification, Clock, FixedClock,
    SystemClock, TemporalClassifier,
};
pub use settings::ports::SettingsRepository;
pub use settings::{render_message, SettingsService};
pub use user::ports::UserRepository;
pub use user::UserService;
