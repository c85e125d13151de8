//! Shared test helpers for `meetnotify-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight in-memory
//! repositories so service tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
