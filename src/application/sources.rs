//! Server-paginated backend collections as [`PageSource`]s.

use async_trait::async_trait;

use super::list::PageSource;
use crate::api::ConsoleClient;
use crate::domain::{ListUsersParams, Release, User};
use crate::shared::{ApiError, PageRequest, Paginated};

/// User list with the page's search/role/tenant filters.
#[derive(Debug, Clone)]
pub struct UserPages {
    client: ConsoleClient,
    params: ListUsersParams,
}

impl UserPages {
    pub fn new(client: ConsoleClient, params: ListUsersParams) -> Self {
        Self { client, params }
    }
}

#[async_trait]
impl PageSource<User> for UserPages {
    async fn fetch(&self, page: PageRequest) -> Result<Paginated<User>, ApiError> {
        self.client.users().list(&self.params, page).await
    }
}

/// Releases of a single package.
#[derive(Debug, Clone)]
pub struct ReleasePages {
    client: ConsoleClient,
    package_id: String,
}

impl ReleasePages {
    pub fn new(client: ConsoleClient, package_id: impl Into<String>) -> Self {
        Self {
            client,
            package_id: package_id.into(),
        }
    }
}

#[async_trait]
impl PageSource<Release> for ReleasePages {
    async fn fetch(&self, page: PageRequest) -> Result<Paginated<Release>, ApiError> {
        self.client.releases().list(&self.package_id, page).await
    }
}
