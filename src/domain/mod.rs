//! Backend DTOs consumed by the console pages.

pub mod access;
pub mod catalog;
pub mod dashboard;
pub mod tenant;
pub mod user;

pub use access::*;
pub use catalog::*;
pub use dashboard::DashboardStats;
pub use tenant::{CreateTenantRequest, Role, Tenant};
pub use user::*;
