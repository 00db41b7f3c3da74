//! Project, package and release resources.

use crate::api::ConsoleClient;
use crate::domain::{Package, Project, Release};
use crate::shared::{ApiError, PageRequest, Paginated};

const PROJECTS: &str = "/api/v1/projects";
const PACKAGES: &str = "/api/v1/packages";
const RELEASES: &str = "/api/v1/releases";

pub struct ProjectsResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> ProjectsResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get(PROJECTS, &[]).await
    }

    pub async fn get(&self, id: &str) -> Result<Project, ApiError> {
        self.client.get(&format!("{PROJECTS}/{id}"), &[]).await
    }
}

pub struct PackagesResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> PackagesResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    /// All packages, optionally restricted to one project. Paginated locally.
    pub async fn list(&self, project_id: Option<&str>) -> Result<Vec<Package>, ApiError> {
        let query: Vec<(&str, String)> = project_id
            .map(|id| vec![("project_id", id.to_string())])
            .unwrap_or_default();
        self.client.get(PACKAGES, &query).await
    }

    pub async fn get(&self, id: &str) -> Result<Package, ApiError> {
        self.client.get(&format!("{PACKAGES}/{id}"), &[]).await
    }
}

/// Releases of a package; the list is paginated server-side.
pub struct ReleasesResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> ReleasesResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        package_id: &str,
        page: PageRequest,
    ) -> Result<Paginated<Release>, ApiError> {
        self.client
            .get(&format!("{PACKAGES}/{package_id}/releases"), &page.to_query())
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Release, ApiError> {
        self.client.get(&format!("{RELEASES}/{id}"), &[]).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{RELEASES}/{id}")).await
    }
}
