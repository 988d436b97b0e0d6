//! # Paginated responses
//!
//! The listing endpoints answer with a DRF-style envelope ([`PageResponse`]):
//! `results` plus `next` / `previous` links and a few counters that not every
//! endpoint fills in. [`PageResult`] is the normalised form the rest of the
//! workspace consumes.
//!
//! `next` and `previous` are opaque cursors. They are carried around verbatim and
//! handed back to the client to navigate; nothing parses or rebuilds them.

use serde::{Deserialize, Serialize};

/// Raw listing envelope as sent by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub num_pages: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub total_count: Option<u64>,
    pub num_pages: Option<u32>,
}

impl<T> PageResult<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<PageResponse<T>> for PageResult<T> {
    fn from(raw: PageResponse<T>) -> Self {
        Self {
            total_count: raw.total_count.or(raw.count),
            num_pages: raw.num_pages,
            next: raw.next.filter(|link| !link.is_empty()),
            previous: raw.previous.filter(|link| !link.is_empty()),
            items: raw.results,
        }
    }
}
