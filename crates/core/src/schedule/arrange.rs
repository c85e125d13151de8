//! Partition and ordering of meeting lists.
//!
//! Upcoming meetings come first, soonest at the top; completed meetings
//! follow, most recent first. Both orders use the meeting start, whatever
//! boundary the classifier uses to decide the group, and both are stable so
//! ties keep their input order. Records whose start cannot be parsed are
//! kept and placed at the end of their group.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use meetnotify_domain::{Meeting, TemporalStatus};
use tracing::debug;

use super::classifier::TemporalClassifier;

/// An arranged meeting list plus the group boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrangedMeetings {
    /// Upcoming (ascending) followed by completed (descending).
    pub items: Vec<Meeting>,
    /// Index of the first completed item when both groups are non-empty.
    pub divider_index: Option<usize>,
    pub upcoming_count: usize,
    pub completed_count: usize,
    /// Items classified by fallback because their time could not be parsed.
    pub unparsed_count: usize,
}

impl ArrangedMeetings {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn upcoming(&self) -> &[Meeting] {
        &self.items[..self.upcoming_count]
    }

    pub fn completed(&self) -> &[Meeting] {
        &self.items[self.upcoming_count..]
    }

    /// Group of the item at `index` in `items`.
    pub fn status_at(&self, index: usize) -> Option<TemporalStatus> {
        if index >= self.items.len() {
            None
        } else if index < self.upcoming_count {
            Some(TemporalStatus::Upcoming)
        } else {
            Some(TemporalStatus::Completed)
        }
    }

    /// Consume into just the group matching `status`.
    pub fn into_group(mut self, status: TemporalStatus) -> Vec<Meeting> {
        match status {
            TemporalStatus::Upcoming => {
                self.items.truncate(self.upcoming_count);
                self.items
            }
            TemporalStatus::Completed => self.items.split_off(self.upcoming_count),
        }
    }
}

/// Arrange `meetings` for display at instant `now`.
///
/// The input is left untouched and the output has the same length.
pub fn arrange(
    meetings: &[Meeting],
    classifier: &TemporalClassifier,
    now: NaiveDateTime,
) -> Vec<Meeting> {
    arrange_with_divider(meetings, classifier, now).items
}

/// Like [`arrange`], also reporting where the completed group begins.
pub fn arrange_with_divider(
    meetings: &[Meeting],
    classifier: &TemporalClassifier,
    now: NaiveDateTime,
) -> ArrangedMeetings {
    let mut upcoming: Vec<(Option<NaiveDateTime>, &Meeting)> = Vec::new();
    let mut completed: Vec<(Option<NaiveDateTime>, &Meeting)> = Vec::new();
    let mut unparsed_count = 0;

    for meeting in meetings {
        let classification = classifier.classify_detailed(meeting, now);
        if !classification.is_parsed() {
            unparsed_count += 1;
        }
        let start = classifier.start_of(meeting);
        match classification.status {
            TemporalStatus::Upcoming => upcoming.push((start, meeting)),
            TemporalStatus::Completed => completed.push((start, meeting)),
        }
    }

    upcoming.sort_by(|a, b| soonest_first(a.0, b.0));
    completed.sort_by(|a, b| latest_first(a.0, b.0));

    let upcoming_count = upcoming.len();
    let completed_count = completed.len();
    let divider_index =
        (upcoming_count > 0 && completed_count > 0).then_some(upcoming_count);

    let items: Vec<Meeting> =
        upcoming.into_iter().chain(completed).map(|(_, meeting)| meeting.clone()).collect();

    debug!(
        total = items.len(),
        upcoming = upcoming_count,
        completed = completed_count,
        unparsed = unparsed_count,
        "arranged meeting list"
    );

    ArrangedMeetings { items, divider_index, upcoming_count, completed_count, unparsed_count }
}

fn soonest_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (a, b) => unparsed_last(a, b),
    }
}

fn latest_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (a, b) => unparsed_last(a, b),
    }
}

fn unparsed_last(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
