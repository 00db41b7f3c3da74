//! Paginated list controllers
//!
//! [`LocalList`] paginates a fully loaded collection in memory.
//! [`RemoteList`] asks a [`PageSource`] for one page at a time and trusts the
//! total the backend reports.

mod local;
mod remote;

use async_trait::async_trait;

use crate::shared::{ApiError, PageRequest, Paginated};

pub use local::LocalList;
pub use remote::{FetchTicket, RemoteList};

/// Anything that can serve one page of a server-paginated collection.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch(&self, page: PageRequest) -> Result<Paginated<T>, ApiError>;
}
