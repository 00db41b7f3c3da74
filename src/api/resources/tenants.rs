//! Tenant and role resources.

use reqwest::Method;
use validator::Validate;

use crate::api::ConsoleClient;
use crate::domain::{CreateTenantRequest, Role, Tenant};
use crate::shared::ApiError;

const TENANTS: &str = "/api/v1/tenants";
const ROLES: &str = "/api/v1/roles";

pub struct TenantsResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> TenantsResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    /// All tenants; the tenant page paginates them locally.
    pub async fn list(&self) -> Result<Vec<Tenant>, ApiError> {
        self.client.get(TENANTS, &[]).await
    }

    pub async fn create(&self, req: &CreateTenantRequest) -> Result<Tenant, ApiError> {
        req.validate()?;
        self.client.send(Method::POST, TENANTS, Some(req)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{TENANTS}/{id}")).await
    }
}

pub struct RolesResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> RolesResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Role>, ApiError> {
        self.client.get(ROLES, &[]).await
    }
}
