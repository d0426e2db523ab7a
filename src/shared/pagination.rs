//! Pagination Parameters and Envelopes
//!
//! Query parameters arrive as optional values and are normalized against
//! per-surface defaults. Listings return a `Page` envelope with a
//! `has_more` hint.
use serde::{Deserialize, Serialize};

/// Upper bound on page size regardless of what the caller asks for
pub const MAX_PER_PAGE: u32 = 100;

/// Default page size for message listings
pub const MESSAGES_PER_PAGE: u32 = 50;

/// Default page size for room listings
pub const ROOMS_PER_PAGE: u32 = 15;

/// Raw pagination query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageParams {
    /// Normalize against a default page size, clamping to sane bounds
    pub fn normalize(self, default_per_page: u32) -> PageRequest {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self
            .per_page
            .unwrap_or(default_per_page)
            .clamp(1, MAX_PER_PAGE);
        PageRequest { page, per_page }
    }
}

/// Normalized pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

/// One page of results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    /// True when the page came back full, so another page may exist
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest) -> Self {
        let has_more = items.len() as i64 == request.limit();
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            has_more,
        }
    }
}
