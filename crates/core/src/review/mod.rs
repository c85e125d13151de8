//! Review dashboard

pub mod service;

pub use service::ReviewService;
