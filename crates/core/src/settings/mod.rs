//! Notification timing settings

pub mod ports;
pub mod service;

pub use service::{render_message, SettingsService};
