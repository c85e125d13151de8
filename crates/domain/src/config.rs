//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS, DEFAULT_PAGE_SIZE,
    DEFAULT_TIMEZONE,
};
use crate::impl_domain_status_conversions;
use crate::types::BoundaryField;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where data comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// REST API over HTTP
    #[serde(alias = "http", alias = "rest")]
    Api,
    /// Seeded in-memory store for local development
    #[default]
    #[serde(alias = "mock")]
    Memory,
}

impl_domain_status_conversions!(BackendKind {
    Api => "api" | "http" | "rest",
    Memory => "memory" | "mock",
});

/// REST API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            max_attempts: DEFAULT_API_MAX_ATTEMPTS,
            token: None,
        }
    }
}

/// Meeting list classification and paging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// IANA timezone name used as the wall clock, e.g. `Asia/Jakarta`.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub boundary: BoundaryField,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            boundary: BoundaryField::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ScheduleConfig {
    /// Resolve the configured timezone.
    ///
    /// # Errors
    /// Returns `MeetNotifyError::Config` for unknown timezone names.
    pub fn tz(&self) -> crate::Result<chrono_tz::Tz> {
        self.timezone.parse::<chrono_tz::Tz>().map_err(|err| {
            crate::MeetNotifyError::Config(format!("Invalid timezone '{}': {err}", self.timezone))
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_API_MAX_ATTEMPTS
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}
