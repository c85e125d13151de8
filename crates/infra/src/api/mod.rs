//! REST API client for the meeting backend
//!
//! This module provides the HTTP-based client and the repository adapters
//! that implement the core ports on top of it.
//!
//! # Architecture
//!
//! - Uses the shared `HttpClient` (no direct reqwest calls elsewhere)
//! - Optional static bearer token
//! - Idempotent calls retried on 5xx and connection failures; POST sent once
//! - One overall deadline per call, enforced by the transport
//! - `{"data": ...}` envelopes and bare JSON are both accepted

pub mod auth;
pub mod client;
pub mod errors;
pub mod repositories;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use client::{ApiClient, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
pub use repositories::{
    ApiMeetingRepository, ApiParticipantRepository, ApiSettingsRepository, ApiUserRepository,
};
