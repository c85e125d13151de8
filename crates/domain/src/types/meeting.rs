//! Meeting types
//!
//! A [`Meeting`] is an immutable snapshot of what the REST API returned. The
//! temporal status is never stored on it: it is derived from the wall clock
//! every time a list is arranged.

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Meeting record as exchanged with the REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD` or a full timestamp whose date portion is used.
    pub date: String,
    /// `HH:mm`, `HH:mm:ss` or a full ISO timestamp.
    pub start_time: String,
    /// `HH:mm`, `HH:mm:ss` or a full ISO timestamp.
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub participant_ids: Vec<u64>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Status column some backends expose. Advisory only; never used for
    /// classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Attachment metadata. Upload and download transport live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u64,
    pub file_name: String,
    pub url: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

/// Payload for creating a meeting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMeeting {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub participant_ids: Vec<u64>,
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_ids: Option<Vec<u64>>,
}

impl MeetingUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the update onto an existing meeting, returning the merged copy.
    pub fn apply_to(&self, meeting: &Meeting) -> Meeting {
        let mut merged = meeting.clone();
        if let Some(title) = &self.title {
            merged.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            merged.description = Some(description.clone());
        }
        if let Some(date) = &self.date {
            merged.date.clone_from(date);
        }
        if let Some(start_time) = &self.start_time {
            merged.start_time.clone_from(start_time);
        }
        if let Some(end_time) = &self.end_time {
            merged.end_time.clone_from(end_time);
        }
        if let Some(location) = &self.location {
            merged.location = Some(location.clone());
        }
        if let Some(participant_ids) = &self.participant_ids {
            merged.participant_ids.clone_from(participant_ids);
        }
        merged
    }
}

/// Status derived from the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalStatus {
    /// Boundary is at or after now (also called "incoming").
    #[serde(alias = "incoming")]
    Upcoming,
    /// Boundary is strictly before now.
    Completed,
}

impl_domain_status_conversions!(TemporalStatus {
    Upcoming => "upcoming" | "incoming",
    Completed => "completed",
});

/// Which time field the classifier compares against now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryField {
    /// A meeting stops being upcoming the moment it starts.
    #[default]
    #[serde(alias = "start_time")]
    Start,
    /// A meeting stays upcoming until it has fully ended.
    #[serde(alias = "end_time")]
    End,
}

impl_domain_status_conversions!(BoundaryField {
    Start => "start" | "start_time",
    End => "end" | "end_time",
});
