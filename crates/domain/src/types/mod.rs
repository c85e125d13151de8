//! Domain types and models

pub mod filter;
pub mod meeting;
pub mod participant;
pub mod review;
pub mod settings;
pub mod user;

pub use filter::{MeetingFilter, Page, ParticipantFilter};
pub use meeting::{Attachment, BoundaryField, Meeting, MeetingUpdate, NewMeeting, TemporalStatus};
pub use participant::{NewParticipant, Participant, ParticipantUpdate};
pub use review::ReviewSummary;
pub use settings::NotificationSettings;
pub use user::{NewUser, User, UserRole, UserUpdate};
