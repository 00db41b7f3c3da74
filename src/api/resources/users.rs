//! User resource.

use reqwest::Method;
use validator::Validate;

use crate::api::ConsoleClient;
use crate::domain::{AssignRolesRequest, CreateUserRequest, ListUsersParams, UpdateUserRequest, User};
use crate::shared::{ApiError, PageRequest, Paginated};

const USERS: &str = "/api/v1/users";

/// User administration; the list is paginated server-side.
pub struct UsersResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> UsersResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: &ListUsersParams,
        page: PageRequest,
    ) -> Result<Paginated<User>, ApiError> {
        self.client.get(USERS, &params.to_query(page)).await
    }

    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        self.client.get(&format!("{USERS}/{id}"), &[]).await
    }

    pub async fn create(&self, req: &CreateUserRequest) -> Result<User, ApiError> {
        req.validate()?;
        self.client.send(Method::POST, USERS, Some(req)).await
    }

    pub async fn update(&self, id: &str, req: &UpdateUserRequest) -> Result<User, ApiError> {
        req.validate()?;
        self.client
            .send(Method::PUT, &format!("{USERS}/{id}"), Some(req))
            .await
    }

    /// Replace the user's role assignments.
    pub async fn assign_roles(&self, id: &str, req: &AssignRolesRequest) -> Result<User, ApiError> {
        req.validate()?;
        self.client
            .send(Method::PUT, &format!("{USERS}/{id}/roles"), Some(req))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{USERS}/{id}")).await
    }
}
