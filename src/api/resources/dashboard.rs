use crate::api::ConsoleClient;
use crate::domain::DashboardStats;
use crate::shared::ApiError;

pub struct DashboardResource<'c> {
    client: &'c ConsoleClient,
}

impl<'c> DashboardResource<'c> {
    pub(crate) fn new(client: &'c ConsoleClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.client.get("/api/v1/dashboard/stats", &[]).await
    }
}
