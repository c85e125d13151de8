//! Meeting service - list arrangement, validation and CRUD

use std::sync::Arc;

use meetnotify_domain::constants::DEFAULT_PAGE_SIZE;
use meetnotify_domain::utils::meeting_time::parse_date;
use meetnotify_domain::{
    combine_date_time, MeetNotifyError, Meeting, MeetingFilter, MeetingUpdate, NewMeeting, Page,
    Result, TemporalStatus,
};
use tracing::{debug, info};

use super::ports::MeetingRepository;
use crate::schedule::{arrange_with_divider, ArrangedMeetings, Clock, TemporalClassifier};

/// Meeting use cases
pub struct MeetingService {
    repository: Arc<dyn MeetingRepository>,
    classifier: TemporalClassifier,
    clock: Arc<dyn Clock>,
    page_size: u32,
}

impl MeetingService {
    /// Create a new meeting service
    pub fn new(
        repository: Arc<dyn MeetingRepository>,
        classifier: TemporalClassifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { repository, classifier, clock, page_size: DEFAULT_PAGE_SIZE }
    }

    /// Default page size when the filter does not set one
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn classifier(&self) -> &TemporalClassifier {
        &self.classifier
    }

    /// Full arranged list at the current instant.
    pub async fn arranged(&self) -> Result<ArrangedMeetings> {
        let meetings = self.repository.list().await?;
        Ok(arrange_with_divider(&meetings, &self.classifier, self.clock.now()))
    }

    /// Search, arrange, filter by status and paginate.
    ///
    /// The divider index on the returned page is relative to the page items.
    pub async fn list(&self, filter: &MeetingFilter) -> Result<Page<Meeting>> {
        let mut meetings = self.repository.list().await?;
        if let Some(term) = filter.normalized_search() {
            meetings.retain(|meeting| matches_search(meeting, &term));
        }

        let arranged = arrange_with_divider(&meetings, &self.classifier, self.clock.now());

        let page_number = filter.page_or_default();
        let per_page = filter.per_page_or(self.page_size);
        let start = (page_number as usize - 1).saturating_mul(per_page as usize);

        // Statuses come from this one arrangement, never from a later clock read.
        let (items, divider, leading) = match filter.status {
            Some(status) => (arranged.into_group(status), None, Some(status)),
            None => {
                let leading = arranged.status_at(start);
                (arranged.items, arranged.divider_index, leading)
            }
        };

        let mut page = Page::from_vec(items, page_number, per_page);
        page.leading_status = leading;
        page.divider_index = divider.and_then(|index| {
            let end = start + page.items.len();
            (index > start && index < end).then(|| index - start)
        });

        debug!(
            status = ?filter.status,
            page = page.page,
            total = page.total,
            returned = page.items.len(),
            "listed meetings"
        );
        Ok(page)
    }

    /// Get a meeting by ID
    ///
    /// # Errors
    /// `NotFound` when no meeting has this ID.
    pub async fn get(&self, id: u64) -> Result<Meeting> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| MeetNotifyError::NotFound(format!("meeting {id}")))
    }

    /// Status of a single meeting at the current instant.
    pub fn status_of(&self, meeting: &Meeting) -> TemporalStatus {
        self.classifier.classify(meeting, self.clock.now())
    }

    /// Validate and create a meeting
    pub async fn create(&self, meeting: NewMeeting) -> Result<Meeting> {
        self.validate(&meeting.title, &meeting.date, &meeting.start_time, &meeting.end_time)?;
        let created = self.repository.create(meeting).await?;
        info!(meeting_id = created.id, "meeting created");
        Ok(created)
    }

    /// Validate the merged result and update a meeting
    pub async fn update(&self, id: u64, update: MeetingUpdate) -> Result<Meeting> {
        if update.is_empty() {
            return Err(MeetNotifyError::InvalidInput("update contains no changes".into()));
        }
        let existing = self.get(id).await?;
        let merged = update.apply_to(&existing);
        self.validate(&merged.title, &merged.date, &merged.start_time, &merged.end_time)?;

        let updated = self.repository.update(id, update).await?;
        info!(meeting_id = id, "meeting updated");
        Ok(updated)
    }

    /// Delete a meeting
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.repository.delete(id).await?;
        info!(meeting_id = id, "meeting deleted");
        Ok(())
    }

    fn validate(&self, title: &str, date: &str, start_time: &str, end_time: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(MeetNotifyError::InvalidInput("title must not be empty".into()));
        }
        if parse_date(date).is_none() {
            return Err(MeetNotifyError::InvalidInput(format!(
                "date '{date}' is not a YYYY-MM-DD date"
            )));
        }
        let tz = self.classifier.tz();
        let start = combine_date_time(date, start_time, tz).ok_or_else(|| {
            MeetNotifyError::InvalidInput(format!("start_time '{start_time}' is not a valid time"))
        })?;
        let end = combine_date_time(date, end_time, tz).ok_or_else(|| {
            MeetNotifyError::InvalidInput(format!("end_time '{end_time}' is not a valid time"))
        })?;
        if end <= start {
            return Err(MeetNotifyError::InvalidInput(
                "end_time must be after start_time".into(),
            ));
        }
        Ok(())
    }
}

fn matches_search(meeting: &Meeting, term: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(term);
    contains(&meeting.title)
        || meeting.location.as_deref().is_some_and(contains)
        || meeting.description.as_deref().is_some_and(contains)
}
