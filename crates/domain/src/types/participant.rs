//! Participant types
//!
//! Participants receive WhatsApp notifications. `seksi` is the
//! organizational section the participant belongs to and is carried as a
//! plain string.

use serde::{Deserialize, Serialize};

/// Participant record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    /// E.164 digits without the leading `+`, e.g. `6281234567890`.
    pub whatsapp_number: String,
    pub seksi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Payload for creating a participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParticipant {
    pub name: String,
    pub whatsapp_number: String,
    pub seksi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seksi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ParticipantUpdate {
    /// Apply the update onto an existing participant, returning the merged copy.
    pub fn apply_to(&self, participant: &Participant) -> Participant {
        let mut merged = participant.clone();
        if let Some(name) = &self.name {
            merged.name.clone_from(name);
        }
        if let Some(number) = &self.whatsapp_number {
            merged.whatsapp_number.clone_from(number);
        }
        if let Some(seksi) = &self.seksi {
            merged.seksi.clone_from(seksi);
        }
        if let Some(position) = &self.position {
            merged.position = Some(position.clone());
        }
        if let Some(email) = &self.email {
            merged.email = Some(email.clone());
        }
        merged
    }
}
