//! Client-access credentials and share links

mod client_access;
mod share_link;

pub use client_access::{ClientAccess, ClientAccessCreated, CreateClientAccessRequest};
pub use share_link::{CreateShareLinkRequest, ShareLink};
