//! Notification timing settings

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MESSAGE_TEMPLATE, DEFAULT_REMINDER_OFFSETS_MINUTES};

/// Settings panel for WhatsApp reminders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub enabled: bool,
    /// Minutes before a meeting starts at which a reminder goes out.
    pub reminder_offsets_minutes: Vec<u32>,
    #[serde(default)]
    pub notify_on_create: bool,
    #[serde(default)]
    pub notify_on_update: bool,
    pub message_template: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_offsets_minutes: DEFAULT_REMINDER_OFFSETS_MINUTES.to_vec(),
            notify_on_create: true,
            notify_on_update: false,
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
        }
    }
}
