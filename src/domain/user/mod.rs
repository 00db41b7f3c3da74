//! User administration
//!
//! The user entity plus the request types sent by the user pages.

pub mod model;

mod dto_create;
mod dto_get;
mod dto_update;

pub use model::User;

pub use dto_create::CreateUserRequest;
pub use dto_get::ListUsersParams;
pub use dto_update::{AssignRolesRequest, UpdateUserRequest};
