//! Closed filter and paging types for list queries

use serde::{Deserialize, Serialize};

use super::meeting::TemporalStatus;
use crate::constants::MAX_PAGE_SIZE;

/// Filter for the meeting list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TemporalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl MeetingFilter {
    pub fn with_status(mut self, status: TemporalStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Page number clamped to at least 1.
    pub fn page_or_default(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`.
    pub fn per_page_or(&self, default: u32) -> u32 {
        self.per_page.unwrap_or(default).clamp(1, MAX_PAGE_SIZE)
    }

    /// Trimmed, lowercased search term, `None` when blank.
    pub fn normalized_search(&self) -> Option<String> {
        normalize_search(self.search.as_deref())
    }
}

/// Filter for the participant list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seksi: Option<String>,
}

impl ParticipantFilter {
    pub fn normalized_search(&self) -> Option<String> {
        normalize_search(self.search.as_deref())
    }
}

/// One page of an arranged list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    pub total_pages: u32,
    /// Index within `items` where the completed group begins, if both groups
    /// are present on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider_index: Option<usize>,
    /// Group of the first item on an arranged meeting page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_status: Option<TemporalStatus>,
}

impl<T> Page<T> {
    /// Slice `all` into the requested page.
    pub fn from_vec(all: Vec<T>, page: u32, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let page = page.max(1);
        let total = all.len();
        let total_pages = u32::try_from(total.div_ceil(per_page as usize)).unwrap_or(u32::MAX);
        let start = (page as usize - 1).saturating_mul(per_page as usize);
        let items: Vec<T> = all.into_iter().skip(start).take(per_page as usize).collect();
        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
            divider_index: None,
            leading_status: None,
        }
    }

    /// Group of the item at `index`, as decided when the page was arranged.
    pub fn status_at(&self, index: usize) -> Option<TemporalStatus> {
        if index >= self.items.len() {
            return None;
        }
        match self.divider_index {
            Some(divider) if index >= divider => Some(TemporalStatus::Completed),
            _ => self.leading_status,
        }
    }
}

fn normalize_search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_lowercase)
}
