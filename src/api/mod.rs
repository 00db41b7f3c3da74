//! REST client for the registry backend
//!
//! One resource namespace per console page family. Server-paginated lists
//! (users, releases) take a [`PageRequest`](crate::shared::PageRequest);
//! everything else is returned whole and paginated locally.

mod client;
pub mod dto;
pub mod resources;

pub use client::{ClientBuilder, ConsoleClient};
