//! Resource namespaces of the backend API.

mod access;
mod catalog;
mod dashboard;
mod tenants;
mod users;

pub use access::{ClientAccessResource, ShareLinksResource};
pub use catalog::{PackagesResource, ProjectsResource, ReleasesResource};
pub use dashboard::DashboardResource;
pub use tenants::{RolesResource, TenantsResource};
pub use users::UsersResource;
