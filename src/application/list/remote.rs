use tracing::{debug, warn};

use super::PageSource;
use crate::shared::{ApiError, PageRequest, Paginated, PaginationState};

/// Handle of one in-flight page fetch.
///
/// Only the most recently issued ticket may update the list, and only while
/// the list still points at the page the ticket was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    request: PageRequest,
}

impl FetchTicket {
    pub fn request(&self) -> PageRequest {
        self.request
    }
}

/// Server-side paginated list.
pub struct RemoteList<T, S> {
    source: S,
    state: PaginationState,
    items: Vec<T>,
    issued: u64,
}

impl<T, S: PageSource<T>> RemoteList<T, S> {
    pub fn new(source: S, state: PaginationState) -> Self {
        Self {
            source,
            state,
            items: Vec::new(),
            issued: 0,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Items of the last applied page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn summary(&self) -> String {
        self.state.summary()
    }

    /// Issue a ticket for fetching the current page. Any older ticket becomes
    /// stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket {
            generation: self.issued,
            request: self.state.page_request(),
        }
    }

    /// Apply a fetched page. Returns `false` and leaves the list untouched
    /// when the ticket is stale.
    pub fn complete(&mut self, ticket: FetchTicket, page: Paginated<T>) -> bool {
        if ticket.generation != self.issued || ticket.request != self.state.page_request() {
            debug!(
                ticket = ticket.generation,
                latest = self.issued,
                page = ticket.request.page,
                "Dropping stale page response"
            );
            return false;
        }
        self.state.set_total_items(page.total);
        self.items = page.list;
        true
    }

    /// Fetch the current page.
    ///
    /// If the reported total no longer reaches the requested page, the page
    /// is clamped and the clamped page is fetched once more.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let requested = self.fetch_current().await?;
        if self.state.current_page() != requested.page {
            debug!(
                requested = requested.page,
                clamped = self.state.current_page(),
                "Total shrank below requested page, reloading"
            );
            self.fetch_current().await?;
        }
        Ok(())
    }

    pub async fn set_page(&mut self, page: u32) -> Result<(), ApiError> {
        let before = self.state.current_page();
        self.state.set_page(page);
        self.reload_if_changed(before).await
    }

    pub async fn next_page(&mut self) -> Result<(), ApiError> {
        let before = self.state.current_page();
        self.state.next_page();
        self.reload_if_changed(before).await
    }

    pub async fn prev_page(&mut self) -> Result<(), ApiError> {
        let before = self.state.current_page();
        self.state.prev_page();
        self.reload_if_changed(before).await
    }

    pub async fn set_page_size(&mut self, size: u32) -> Result<(), ApiError> {
        let before = self.state.page_request();
        self.state.set_page_size(size);
        if self.state.page_request() == before {
            return Ok(());
        }
        self.refresh().await
    }

    /// Reset pagination and load the first page again.
    pub async fn reset(&mut self) -> Result<(), ApiError> {
        self.state.reset();
        self.items.clear();
        self.refresh().await
    }

    async fn reload_if_changed(&mut self, before: u32) -> Result<(), ApiError> {
        if self.state.current_page() == before {
            return Ok(());
        }
        self.refresh().await
    }

    async fn fetch_current(&mut self) -> Result<PageRequest, ApiError> {
        let ticket = self.begin_fetch();
        match self.source.fetch(ticket.request).await {
            Ok(page) => {
                self.complete(ticket, page);
                Ok(ticket.request)
            }
            Err(e) => {
                warn!(page = ticket.request.page, error = %e, "Failed to load page");
                Err(e)
            }
        }
    }
}
