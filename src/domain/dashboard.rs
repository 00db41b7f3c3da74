use serde::{Deserialize, Serialize};

use super::Release;

/// Counters shown on the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub project_count: u64,
    pub package_count: u64,
    pub release_count: u64,
    pub user_count: u64,
    #[serde(default)]
    pub tenant_count: u64,
    #[serde(default)]
    pub storage_bytes: u64,
    #[serde(default)]
    pub downloads_last_30_days: u64,
    #[serde(default)]
    pub recent_releases: Vec<Release>,
}
