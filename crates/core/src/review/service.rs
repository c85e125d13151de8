//! Review dashboard aggregates

use std::collections::BTreeMap;
use std::sync::Arc;

use meetnotify_domain::utils::meeting_time::month_key;
use meetnotify_domain::{Result, ReviewSummary};
use tracing::debug;

use crate::meeting::ports::MeetingRepository;
use crate::participant::ports::ParticipantRepository;
use crate::schedule::{arrange_with_divider, Clock, TemporalClassifier};

/// Builds the review/analytics dashboard from repository snapshots
pub struct ReviewService {
    meetings: Arc<dyn MeetingRepository>,
    participants: Arc<dyn ParticipantRepository>,
    classifier: TemporalClassifier,
    clock: Arc<dyn Clock>,
}

impl ReviewService {
    pub fn new(
        meetings: Arc<dyn MeetingRepository>,
        participants: Arc<dyn ParticipantRepository>,
        classifier: TemporalClassifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { meetings, participants, classifier, clock }
    }

    pub async fn summary(&self) -> Result<ReviewSummary> {
        let meetings = self.meetings.list().await?;
        let participants = self.participants.list().await?;

        let arranged = arrange_with_divider(&meetings, &self.classifier, self.clock.now());

        let mut meetings_by_month = BTreeMap::new();
        for meeting in &meetings {
            if let Some(key) = month_key(&meeting.date) {
                *meetings_by_month.entry(key).or_insert(0) += 1;
            }
        }

        let mut participants_by_seksi = BTreeMap::new();
        for participant in &participants {
            *participants_by_seksi.entry(participant.seksi.trim().to_string()).or_insert(0) += 1;
        }

        let summary = ReviewSummary {
            total_meetings: arranged.len(),
            upcoming: arranged.upcoming_count,
            completed: arranged.completed_count,
            unparsed: arranged.unparsed_count,
            total_participants: participants.len(),
            participants_by_seksi,
            meetings_by_month,
            next_meeting: arranged.upcoming().first().cloned(),
            last_meeting: arranged
                .completed()
                .iter()
                .find(|m| self.classifier.start_of(m).is_some())
                .cloned(),
        };

        debug!(
            total = summary.total_meetings,
            upcoming = summary.upcoming,
            completed = summary.completed,
            "built review summary"
        );
        Ok(summary)
    }
}
