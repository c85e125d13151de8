//! Review dashboard aggregates

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::meeting::Meeting;

/// Aggregates shown on the review/analytics dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total_meetings: usize,
    pub upcoming: usize,
    pub completed: usize,
    /// Meetings whose date/time could not be parsed (counted as completed too).
    pub unparsed: usize,
    pub total_participants: usize,
    pub participants_by_seksi: BTreeMap<String, usize>,
    /// Keyed by `YYYY-MM` of the meeting date.
    pub meetings_by_month: BTreeMap<String, usize>,
    pub next_meeting: Option<Meeting>,
    pub last_meeting: Option<Meeting>,
}
