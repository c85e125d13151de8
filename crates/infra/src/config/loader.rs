//! Configuration loader
//!
//! Loads application configuration from environment variables and files.
//!
//! ## Loading Strategy
//! 1. Start from a config file: `MEETNOTIFY_CONFIG` if set, otherwise the
//!    first file found by [`probe_config_paths`], otherwise defaults
//! 2. Apply environment variable overrides on top
//! 3. Validate the result (timezone, page size, API URL)
//!
//! ## Environment Variables
//! - `MEETNOTIFY_CONFIG`: Explicit config file path
//! - `MEETNOTIFY_BACKEND`: `api` or `memory`
//! - `MEETNOTIFY_API_URL`: REST API base URL
//! - `MEETNOTIFY_API_TOKEN`: Bearer token for the REST API
//! - `MEETNOTIFY_API_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `MEETNOTIFY_API_MAX_ATTEMPTS`: Attempts per request including the first
//! - `MEETNOTIFY_TIMEZONE`: IANA timezone used as the wall clock
//! - `MEETNOTIFY_STATUS_BOUNDARY`: `start` or `end`
//! - `MEETNOTIFY_PAGE_SIZE`: Default meeting list page size
//! - `MEETNOTIFY_LOG_LEVEL`: Default `tracing` filter when `RUST_LOG` is unset
//! - `MEETNOTIFY_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./meetnotify.json` or `./meetnotify.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use meetnotify_domain::constants::MAX_PAGE_SIZE;
use meetnotify_domain::{BackendKind, BoundaryField, Config, MeetNotifyError, Result};

/// Configuration plus the file it was layered on, if any
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `MeetNotifyError::Config` if:
/// - An explicitly named config file is missing or invalid
/// - A probed file exists but cannot be parsed
/// - An environment variable has an invalid value
pub fn load() -> Result<Config> {
    load_layered().map(|loaded| loaded.config)
}

/// Like [`load`], also reporting which file was used.
///
/// Does not log; callers report `source` after installing the subscriber.
pub fn load_layered() -> Result<LoadedConfig> {
    let source = match std::env::var("MEETNOTIFY_CONFIG").ok().filter(|p| !p.trim().is_empty()) {
        Some(path) => Some(PathBuf::from(path)),
        None => probe_config_paths(),
    };
    let base = match &source {
        Some(path) => load_from_file(Some(path.clone()))?,
        None => Config::default(),
    };

    let config = apply_env_overrides(base)?;
    validate(&config)?;
    Ok(LoadedConfig { config, source })
}

/// Load configuration from environment variables over built-in defaults
///
/// Unset variables keep their default value.
///
/// # Errors
/// Returns `MeetNotifyError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let config = apply_env_overrides(Config::default())?;
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `MeetNotifyError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MeetNotifyError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MeetNotifyError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MeetNotifyError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MeetNotifyError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MeetNotifyError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MeetNotifyError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.json", "config.toml", "meetnotify.json", "meetnotify.toml"];
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(names.iter().map(|name| cwd.join(name)));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(names.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

/// Apply `MEETNOTIFY_*` variables on top of `config`
fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(backend) = env_opt("MEETNOTIFY_BACKEND") {
        config.backend = parse_env("MEETNOTIFY_BACKEND", &backend, BackendKind::from_str)?;
    }
    if let Some(url) = env_opt("MEETNOTIFY_API_URL") {
        config.api.base_url = url;
    }
    if let Some(token) = env_opt("MEETNOTIFY_API_TOKEN") {
        config.api.token = Some(token);
    }
    if let Some(timeout) = env_opt("MEETNOTIFY_API_TIMEOUT_SECS") {
        config.api.timeout_secs =
            parse_env("MEETNOTIFY_API_TIMEOUT_SECS", &timeout, u64::from_str)?;
    }
    if let Some(attempts) = env_opt("MEETNOTIFY_API_MAX_ATTEMPTS") {
        config.api.max_attempts =
            parse_env("MEETNOTIFY_API_MAX_ATTEMPTS", &attempts, usize::from_str)?;
    }
    if let Some(timezone) = env_opt("MEETNOTIFY_TIMEZONE") {
        config.schedule.timezone = timezone;
    }
    if let Some(boundary) = env_opt("MEETNOTIFY_STATUS_BOUNDARY") {
        config.schedule.boundary =
            parse_env("MEETNOTIFY_STATUS_BOUNDARY", &boundary, BoundaryField::from_str)?;
    }
    if let Some(page_size) = env_opt("MEETNOTIFY_PAGE_SIZE") {
        config.schedule.page_size = parse_env("MEETNOTIFY_PAGE_SIZE", &page_size, u32::from_str)?;
    }
    if let Some(level) = env_opt("MEETNOTIFY_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("MEETNOTIFY_LOG_JSON", config.logging.json);
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    config.schedule.tz()?;
    if config.schedule.page_size == 0 || config.schedule.page_size > MAX_PAGE_SIZE {
        return Err(MeetNotifyError::Config(format!(
            "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
            config.schedule.page_size
        )));
    }
    if config.backend == BackendKind::Api {
        if config.api.base_url.trim().is_empty() {
            return Err(MeetNotifyError::Config("API backend requires an API URL".into()));
        }
        if config.api.max_attempts == 0 || config.api.timeout_secs == 0 {
            return Err(MeetNotifyError::Config(
                "API timeout and attempts must be at least 1".into(),
            ));
        }
    }
    Ok(())
}

fn parse_env<T, E: std::fmt::Display>(
    key: &str,
    raw: &str,
    parse: impl Fn(&str) -> std::result::Result<T, E>,
) -> Result<T> {
    parse(raw.trim()).map_err(|e| MeetNotifyError::Config(format!("Invalid {key} '{raw}': {e}")))
}

/// Non-empty environment variable, if set
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
