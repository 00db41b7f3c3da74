//! # Registry Console
//!
//! Client-side core of the package registry admin console.
//!
//! - **shared**: pagination state, errors and small utilities
//! - **domain**: DTOs mirroring the backend (users, tenants, catalog, access)
//! - **api**: typed REST client with GET retry
//! - **application**: list controllers for client- and server-side pagination
//! - **config**: TOML configuration
//! - **logging**: tracing subscriber setup

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod shared;

pub use api::{ClientBuilder, ConsoleClient};
pub use application::{LocalList, PageSource, RemoteList};
pub use config::{default_config_path, AppConfig};
pub use logging::init_tracing;
pub use shared::{PageRequest, Paginated, PaginationState};
