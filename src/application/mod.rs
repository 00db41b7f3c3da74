//! List controllers driving the console pages.

pub mod list;
pub mod sources;

pub use list::{FetchTicket, LocalList, PageSource, RemoteList};
pub use sources::{ReleasePages, UserPages};
