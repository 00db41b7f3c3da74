//! Client-access credential and share-link resources.

use reqwest::Method;
use validator::Validate;

use crate::api::ConsoleClient;
use crate::domain::{
    ClientAccess, ClientAccessCreated, CreateClientAccessRequest, CreateShareLinkRequest,
    ShareLink,
};
use crate::shared::ApiError;

const CLIENT_ACCESS: &str = "/api/v1/client-access";
const SHARE_LINKS: &str = "/api/v1/share-links";

pub struct ClientAccessResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> ClientAccessResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<ClientAccess>, ApiError> {
        self.client.get(CLIENT_ACCESS, &[]).await
    }

    /// Issue a credential. The returned secret cannot be fetched again.
    pub async fn create(
        &self,
        req: &CreateClientAccessRequest,
    ) -> Result<ClientAccessCreated, ApiError> {
        req.validate()?;
        self.client.send(Method::POST, CLIENT_ACCESS, Some(req)).await
    }

    pub async fn revoke(&self, id: &str) -> Result<ClientAccess, ApiError> {
        self.client
            .send::<(), _>(Method::POST, &format!("{CLIENT_ACCESS}/{id}/revoke"), None)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{CLIENT_ACCESS}/{id}")).await
    }
}

pub struct ShareLinksResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> ShareLinksResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<ShareLink>, ApiError> {
        self.client.get(SHARE_LINKS, &[]).await
    }

    pub async fn create(&self, req: &CreateShareLinkRequest) -> Result<ShareLink, ApiError> {
        req.validate()?;
        self.client.send(Method::POST, SHARE_LINKS, Some(req)).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{SHARE_LINKS}/{id}")).await
    }
}
