//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! application.

// Scheduling
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

// Notification settings
pub const MAX_REMINDER_OFFSET_MINUTES: u32 = 7 * 24 * 60;
pub const DEFAULT_REMINDER_OFFSETS_MINUTES: [u32; 2] = [24 * 60, 60];
pub const DEFAULT_MESSAGE_TEMPLATE: &str =
    "Reminder: {title} on {date} at {start_time}, location {location}.";

// User management
pub const MIN_PASSWORD_LENGTH: usize = 8;

// HTTP client
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_MAX_ATTEMPTS: usize = 3;
