//! Pagination cursor state machine.
//!
//! Pure logic, no DOM or network. The component owning a cursor asks it
//! which page to fetch next; the cursor enforces that at most one request
//! is outstanding and that no request is issued past the last page.

/// Cursor into a remote paginated collection.
///
/// `page` is the last *requested* page (0 = nothing requested yet).
/// `has_more` starts optimistic and is recomputed from each response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    has_more: bool,
    in_flight: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            page: 0,
            has_more: true,
            in_flight: false,
        }
    }

    /// Request the first page. Returns `Some(1)` only if nothing has been
    /// requested yet, so a gate effect that re-runs stays a no-op.
    pub fn start(&mut self) -> Option<u32> {
        if self.page != 0 {
            return None;
        }
        self.advance()
    }

    /// Request the next page in response to a sentinel-visibility event.
    /// Returns `None` while a fetch is in flight or the collection is
    /// exhausted; otherwise marks the fetch in flight and returns the page
    /// number to request.
    pub fn advance(&mut self) -> Option<u32> {
        if self.in_flight || !self.has_more {
            return None;
        }
        self.in_flight = true;
        self.page += 1;
        Some(self.page)
    }

    /// Record a successful response. Returns false (response rejected) if
    /// the reported page does not match the page we asked for; a mismatch
    /// is treated like a failed attempt so the caller discards the payload
    /// and the expected page can be re-requested.
    pub fn complete(&mut self, page: u32, total_pages: u32) -> bool {
        if page != self.page {
            self.fail();
            return false;
        }
        self.in_flight = false;
        self.has_more = page < total_pages;
        true
    }

    /// Record a failed fetch: clear the in-flight flag and roll the page
    /// counter back, leaving state as if the request had never been issued.
    /// The next sentinel event retries the same page.
    pub fn fail(&mut self) {
        self.in_flight = false;
        self.page = self.page.saturating_sub(1);
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }
}
