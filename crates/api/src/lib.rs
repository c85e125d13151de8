//! # MeetNotify App
//!
//! Application layer - context wiring, logging and command handlers.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Command handlers rendering service results as text
//! - Logging setup and the `meetnotify` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Chooses the REST or in-memory backend from configuration

pub mod commands;
pub mod context;
pub mod utils;

pub use context::AppContext;
