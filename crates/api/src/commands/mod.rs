//! Command handlers - service calls rendered as plain text
//!
//! Each handler takes the [`AppContext`](crate::AppContext), runs one use
//! case and returns the text the binary prints.

mod meetings;
mod participants;
mod review;
mod settings;
mod users;

pub use meetings::{delete_meeting, list_meetings, meeting_reminders, show_meeting};
pub use participants::{list_participants, list_seksi};
pub use review::review_summary;
pub use settings::show_settings;
pub use users::list_users;

/// Line printed between the upcoming and completed groups
pub const DIVIDER: &str = "------------------------ completed ------------------------";

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("-")
}
