//! # Listing state machine
//!
//! [`ListingController`] owns everything a paginated table needs between requests:
//! the query, the cursor of the page on screen, the last page received, the last
//! error and a display-only page counter.
//!
//! It never performs I/O. Every operation that needs data returns a
//! [`PendingFetch`] describing the request; the caller runs it against a
//! [`PageSource`] and hands the outcome back to [`ListingController::commit`].
//!
//! ```text
//!   activate / update / next / previous / reload
//!            │  generation += 1, phase = Loading
//!            ▼
//!      PendingFetch ──run──▶ Result<PageResult, ApiError>
//!                                     │
//!                          commit ◀───┘  (dropped unless generation is the latest)
//! ```
//!
//! Only the most recently dispatched fetch may be committed. Older responses are
//! reported as [`CommitOutcome::Stale`] and leave the state untouched, so a slow
//! reply to an outdated query can never overwrite a newer one.
//!
//! A failed request keeps the previous page on screen, but its `next`/`previous`
//! links only stay usable while the query still matches the one that produced it.

use api::{ApiError, ListingQuery, PageCursor, PageResult, PageSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPhase {
    /// No usable token; nothing is requested.
    Idle,
    Loading,
    Loaded,
}

/// How a fetch moves the display counter once committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Reset,
    Next,
    Previous,
    Reload,
}

/// A request built by the controller, waiting to be run.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch<Q> {
    pub generation: u64,
    pub query: Q,
    pub cursor: PageCursor,
    pub token: String,
    pub navigation: Navigation,
}

impl<Q: ListingQuery> PendingFetch<Q> {
    pub async fn run<S: PageSource<Q>>(&self, source: &S) -> Result<PageResult<Q::Item>, ApiError> {
        source.fetch_page(&self.query, &self.cursor, &self.token).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingController<Q: ListingQuery> {
    query: Q,
    cursor: PageCursor,
    page: Option<PageResult<Q::Item>>,
    /// Query that produced `page`.
    page_query: Option<Q>,
    phase: ListingPhase,
    error: Option<ApiError>,
    generation: u64,
    current_page: u32,
}

impl<Q: ListingQuery> ListingController<Q> {
    pub fn new(query: Q) -> Self {
        Self {
            query,
            cursor: PageCursor::First,
            page: None,
            page_query: None,
            phase: ListingPhase::Idle,
            error: None,
            generation: 0,
            current_page: 1,
        }
    }

    /// Start (or restart) the listing for a session.
    ///
    /// Without a token the controller goes idle and forgets the page it showed.
    pub fn activate(&mut self, token: Option<&str>) -> Option<PendingFetch<Q>> {
        let Some(token) = usable(token) else {
            self.go_idle();
            return None;
        };
        self.cursor = PageCursor::First;
        Some(self.begin(token, PageCursor::First, Navigation::Reset))
    }

    /// Apply a change to the query. A change resets the cursor and triggers a
    /// first-page request; a no-op change triggers nothing.
    pub fn update(
        &mut self,
        token: Option<&str>,
        change: impl FnOnce(&mut Q),
    ) -> Option<PendingFetch<Q>> {
        let before = self.query.clone();
        change(&mut self.query);
        if self.query == before {
            return None;
        }
        self.cursor = PageCursor::First;

        let Some(token) = usable(token) else {
            self.go_idle();
            return None;
        };
        Some(self.begin(token, PageCursor::First, Navigation::Reset))
    }

    pub fn next(&mut self, token: Option<&str>) -> Option<PendingFetch<Q>> {
        let link = self.current_page_result()?.next.clone()?;
        let token = usable(token)?;
        Some(self.begin(token, PageCursor::Link(link), Navigation::Next))
    }

    pub fn previous(&mut self, token: Option<&str>) -> Option<PendingFetch<Q>> {
        let link = self.current_page_result()?.previous.clone()?;
        let token = usable(token)?;
        Some(self.begin(token, PageCursor::Link(link), Navigation::Previous))
    }

    /// Re-request the page currently on screen, or the first page of the query
    /// when what is on screen belongs to an earlier query.
    pub fn reload(&mut self, token: Option<&str>) -> Option<PendingFetch<Q>> {
        let token = usable(token)?;
        if self.current_page_result().is_none() {
            self.cursor = PageCursor::First;
            return Some(self.begin(token, PageCursor::First, Navigation::Reset));
        }
        let cursor = self.cursor.clone();
        Some(self.begin(token, cursor, Navigation::Reload))
    }

    pub fn commit(
        &mut self,
        fetch: PendingFetch<Q>,
        result: Result<PageResult<Q::Item>, ApiError>,
    ) -> CommitOutcome {
        if fetch.generation != self.generation || self.phase == ListingPhase::Idle {
            tracing::debug!(
                generation = fetch.generation,
                latest = self.generation,
                "dropping stale listing response"
            );
            return CommitOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.current_page = match fetch.navigation {
                    Navigation::Reset => 1,
                    Navigation::Next => self.current_page + 1,
                    Navigation::Previous => self.current_page.saturating_sub(1).max(1),
                    Navigation::Reload => self.current_page,
                };
                self.cursor = fetch.cursor;
                self.page = Some(page);
                self.page_query = Some(fetch.query);
                self.error = None;
            }
            Err(e) => {
                tracing::error!(path = Q::PATH, "listing request failed: {e}");
                self.error = Some(e);
            }
        }
        self.phase = ListingPhase::Loaded;
        CommitOutcome::Applied
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn page(&self) -> Option<&PageResult<Q::Item>> {
        self.page.as_ref()
    }

    pub fn items(&self) -> &[Q::Item] {
        self.page.as_ref().map(|p| p.items.as_slice()).unwrap_or_default()
    }

    pub fn phase(&self) -> ListingPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListingPhase::Loading
    }

    /// Error of the last committed request, cleared by the next success.
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// 1-based counter shown next to the pager. Never sent to the server.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_next(&self) -> bool {
        self.current_page_result().is_some_and(|p| p.has_next())
    }

    pub fn has_previous(&self) -> bool {
        self.current_page_result().is_some_and(|p| p.has_previous())
    }

    /// A page arrived and it has no rows.
    pub fn is_empty(&self) -> bool {
        self.page.as_ref().is_some_and(|p| p.is_empty())
    }

    /// The page on screen, if it was produced by the current query.
    fn current_page_result(&self) -> Option<&PageResult<Q::Item>> {
        match &self.page_query {
            Some(q) if *q == self.query => self.page.as_ref(),
            _ => None,
        }
    }

    fn begin(&mut self, token: &str, cursor: PageCursor, navigation: Navigation) -> PendingFetch<Q> {
        self.generation += 1;
        self.phase = ListingPhase::Loading;
        PendingFetch {
            generation: self.generation,
            query: self.query.clone(),
            cursor,
            token: token.to_string(),
            navigation,
        }
    }

    fn go_idle(&mut self) {
        // Bumping the generation orphans anything still in flight.
        self.generation += 1;
        self.phase = ListingPhase::Idle;
        self.cursor = PageCursor::First;
        self.page = None;
        self.page_query = None;
        self.error = None;
        self.current_page = 1;
    }
}

fn usable(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.trim().is_empty())
}
