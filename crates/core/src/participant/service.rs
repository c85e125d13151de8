//! Participant service - search, validation and WhatsApp number hygiene

use std::collections::BTreeSet;
use std::sync::Arc;

use meetnotify_domain::{
    normalize_whatsapp_number, MeetNotifyError, NewParticipant, Participant, ParticipantFilter,
    ParticipantUpdate, Result,
};
use tracing::info;

use super::ports::ParticipantRepository;

/// Participant use cases
pub struct ParticipantService {
    repository: Arc<dyn ParticipantRepository>,
}

impl ParticipantService {
    pub fn new(repository: Arc<dyn ParticipantRepository>) -> Self {
        Self { repository }
    }

    /// Participants matching `filter`, sorted by name.
    pub async fn list(&self, filter: &ParticipantFilter) -> Result<Vec<Participant>> {
        let mut participants = self.repository.list().await?;
        if let Some(seksi) = filter.seksi.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            participants.retain(|p| p.seksi.eq_ignore_ascii_case(seksi));
        }
        if let Some(term) = filter.normalized_search() {
            participants.retain(|p| matches_search(p, &term));
        }
        participants.sort_by_cached_key(|p| p.name.to_lowercase());
        Ok(participants)
    }

    /// Distinct seksi names, sorted.
    pub async fn seksi_names(&self) -> Result<Vec<String>> {
        let participants = self.repository.list().await?;
        let names: BTreeSet<String> =
            participants.into_iter().map(|p| p.seksi.trim().to_string()).collect();
        Ok(names.into_iter().filter(|s| !s.is_empty()).collect())
    }

    /// Get a participant by ID
    pub async fn get(&self, id: u64) -> Result<Participant> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| MeetNotifyError::NotFound(format!("participant {id}")))
    }

    /// Validate, normalize the WhatsApp number and create a participant
    ///
    /// # Errors
    /// `InvalidInput` for missing fields or an unusable number, `Conflict`
    /// when another participant already uses the number.
    pub async fn create(&self, mut participant: NewParticipant) -> Result<Participant> {
        require_non_empty("name", &participant.name)?;
        require_non_empty("seksi", &participant.seksi)?;
        validate_email(participant.email.as_deref())?;
        participant.whatsapp_number = normalize_whatsapp_number(&participant.whatsapp_number)?;
        self.ensure_number_unused(&participant.whatsapp_number, None).await?;

        let created = self.repository.create(participant).await?;
        info!(participant_id = created.id, seksi = %created.seksi, "participant created");
        Ok(created)
    }

    /// Validate and update a participant
    pub async fn update(&self, id: u64, mut update: ParticipantUpdate) -> Result<Participant> {
        if let Some(name) = &update.name {
            require_non_empty("name", name)?;
        }
        if let Some(seksi) = &update.seksi {
            require_non_empty("seksi", seksi)?;
        }
        validate_email(update.email.as_deref())?;
        if let Some(number) = &update.whatsapp_number {
            let normalized = normalize_whatsapp_number(number)?;
            self.ensure_number_unused(&normalized, Some(id)).await?;
            update.whatsapp_number = Some(normalized);
        }

        let updated = self.repository.update(id, update).await?;
        info!(participant_id = id, "participant updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.repository.delete(id).await?;
        info!(participant_id = id, "participant deleted");
        Ok(())
    }

    async fn ensure_number_unused(&self, number: &str, except: Option<u64>) -> Result<()> {
        let taken = self
            .repository
            .list()
            .await?
            .into_iter()
            .any(|p| p.whatsapp_number == number && Some(p.id) != except);
        if taken {
            return Err(MeetNotifyError::Conflict(format!(
                "WhatsApp number {number} is already registered"
            )));
        }
        Ok(())
    }
}

fn matches_search(participant: &Participant, term: &str) -> bool {
    participant.name.to_lowercase().contains(term)
        || participant.seksi.to_lowercase().contains(term)
        || participant.whatsapp_number.contains(term)
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MeetNotifyError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

fn validate_email(email: Option<&str>) -> Result<()> {
    match email {
        Some(email) if !email.trim().is_empty() && !email.contains('@') => Err(
            MeetNotifyError::InvalidInput(format!("'{email}' is not an email address")),
        ),
        _ => Ok(()),
    }
}
