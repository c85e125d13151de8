//! # MeetNotify Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with retry and backoff
//! - REST API client and repositories
//! - Seeded in-memory repositories for running without a backend
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `meetnotify-core`
//! - Contains all "impure" code (network I/O, filesystem, shared state)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod memory;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError};
pub use errors::InfraError;
pub use http::{HttpClient, RetryPolicy};
pub use memory::InMemoryStore;
