//! Temporal classification of meetings.
//!
//! Whether a meeting is upcoming or completed is never read from the record.
//! It is a pure function of the meeting's boundary time and the current
//! instant: `boundary >= now` is upcoming, `boundary < now` is completed. The
//! comparison is inclusive, so a meeting starting exactly now is still
//! upcoming.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use meetnotify_domain::{combine_date_time, BoundaryField, Meeting, TemporalStatus};
use tracing::warn;

/// Result of classifying one meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: TemporalStatus,
    /// The instant compared against now; `None` when it could not be parsed.
    pub anchor: Option<NaiveDateTime>,
}

impl Classification {
    /// `false` when the status is the fallback for an unparsable record.
    pub fn is_parsed(&self) -> bool {
        self.anchor.is_some()
    }
}

/// Derives [`TemporalStatus`] from meeting times
#[derive(Debug, Clone, Copy)]
pub struct TemporalClassifier {
    tz: Tz,
    boundary: BoundaryField,
}

impl Default for TemporalClassifier {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Jakarta, BoundaryField::Start)
    }
}

impl TemporalClassifier {
    pub fn new(tz: Tz, boundary: BoundaryField) -> Self {
        Self { tz, boundary }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn boundary(&self) -> BoundaryField {
        self.boundary
    }

    /// Start of the meeting as wall-clock time.
    pub fn start_of(&self, meeting: &Meeting) -> Option<NaiveDateTime> {
        combine_date_time(&meeting.date, &meeting.start_time, self.tz)
    }

    /// End of the meeting as wall-clock time.
    pub fn end_of(&self, meeting: &Meeting) -> Option<NaiveDateTime> {
        combine_date_time(&meeting.date, &meeting.end_time, self.tz)
    }

    /// The instant the configured boundary field resolves to.
    pub fn anchor(&self, meeting: &Meeting) -> Option<NaiveDateTime> {
        match self.boundary {
            BoundaryField::Start => self.start_of(meeting),
            BoundaryField::End => self.end_of(meeting),
        }
    }

    /// Classify `meeting` relative to `now`.
    ///
    /// Unparsable records fall back to completed so they never crowd the
    /// "what's next" group; a warning is logged for each.
    pub fn classify_detailed(&self, meeting: &Meeting, now: NaiveDateTime) -> Classification {
        match self.anchor(meeting) {
            Some(anchor) => Classification { status: status_at(anchor, now), anchor: Some(anchor) },
            None => {
                warn!(
                    meeting_id = meeting.id,
                    date = %meeting.date,
                    start_time = %meeting.start_time,
                    end_time = %meeting.end_time,
                    boundary = %self.boundary,
                    "unparsable meeting date/time, classifying as completed"
                );
                Classification { status: TemporalStatus::Completed, anchor: None }
            }
        }
    }

    pub fn classify(&self, meeting: &Meeting, now: NaiveDateTime) -> TemporalStatus {
        self.classify_detailed(meeting, now).status
    }
}

/// Inclusive boundary comparison.
pub fn status_at(anchor: NaiveDateTime, now: NaiveDateTime) -> TemporalStatus {
    if anchor >= now {
        TemporalStatus::Upcoming
    } else {
        TemporalStatus::Completed
    }
}
