//! Notification settings service
//!
//! Validates the settings panel and previews when reminders for a meeting
//! would go out. Delivery itself happens on the server.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use meetnotify_domain::constants::MAX_REMINDER_OFFSET_MINUTES;
use meetnotify_domain::{MeetNotifyError, Meeting, NotificationSettings, Result};
use tracing::{info, warn};

use super::ports::SettingsRepository;
use crate::schedule::{Clock, TemporalClassifier};

/// Notification settings use cases
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
    classifier: TemporalClassifier,
    clock: Arc<dyn Clock>,
}

impl SettingsService {
    pub fn new(
        repository: Arc<dyn SettingsRepository>,
        classifier: TemporalClassifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repository, classifier, clock }
    }

    pub async fn get(&self) -> Result<NotificationSettings> {
        self.repository.get().await
    }

    /// Normalize, validate and store settings.
    ///
    /// Offsets are deduplicated and sorted from the earliest reminder to the
    /// latest (largest offset first).
    pub async fn update(&self, settings: NotificationSettings) -> Result<NotificationSettings> {
        let settings = normalize(settings)?;
        let stored = self.repository.update(settings).await?;
        info!(
            enabled = stored.enabled,
            offsets = ?stored.reminder_offsets_minutes,
            "notification settings updated"
        );
        Ok(stored)
    }

    /// Instants at which reminders for `meeting` fire, in chronological order.
    pub fn reminder_schedule(
        &self,
        settings: &NotificationSettings,
        meeting: &Meeting,
    ) -> Vec<NaiveDateTime> {
        if !settings.enabled {
            return Vec::new();
        }
        let Some(start) = self.classifier.start_of(meeting) else {
            warn!(meeting_id = meeting.id, "cannot schedule reminders for unparsable meeting");
            return Vec::new();
        };
        let mut schedule: Vec<NaiveDateTime> = settings
            .reminder_offsets_minutes
            .iter()
            .map(|offset| start - Duration::minutes(i64::from(*offset)))
            .collect();
        schedule.sort();
        schedule.dedup();
        schedule
    }

    /// Reminders for `meeting` still due at or after now.
    pub async fn pending_reminders(&self, meeting: &Meeting) -> Result<Vec<NaiveDateTime>> {
        let settings = self.repository.get().await?;
        let now = self.clock.now();
        Ok(self
            .reminder_schedule(&settings, meeting)
            .into_iter()
            .filter(|at| *at >= now)
            .collect())
    }
}

/// Fill the message template with meeting fields.
pub fn render_message(template: &str, meeting: &Meeting) -> String {
    template
        .replace("{title}", &meeting.title)
        .replace("{date}", &meeting.date)
        .replace("{start_time}", &meeting.start_time)
        .replace("{end_time}", &meeting.end_time)
        .replace("{location}", meeting.location.as_deref().unwrap_or("-"))
}

fn normalize(mut settings: NotificationSettings) -> Result<NotificationSettings> {
    if let Some(bad) = settings
        .reminder_offsets_minutes
        .iter()
        .find(|offset| **offset == 0 || **offset > MAX_REMINDER_OFFSET_MINUTES)
    {
        return Err(MeetNotifyError::InvalidInput(format!(
            "reminder offset {bad} must be between 1 and {MAX_REMINDER_OFFSET_MINUTES} minutes"
        )));
    }
    if settings.enabled && settings.reminder_offsets_minutes.is_empty() {
        return Err(MeetNotifyError::InvalidInput(
            "at least one reminder offset is required while notifications are enabled".into(),
        ));
    }
    if settings.message_template.trim().is_empty() {
        return Err(MeetNotifyError::InvalidInput("message template must not be empty".into()));
    }

    settings.reminder_offsets_minutes.sort_unstable_by(|a, b| b.cmp(a));
    settings.reminder_offsets_minutes.dedup();
    Ok(settings)
}
