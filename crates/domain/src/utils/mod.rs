//! Pure helpers shared by the core and infrastructure layers

pub mod meeting_time;
pub mod phone;
