use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public download link for a single release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareLink {
    pub id: String,
    pub token: String,
    pub release_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_downloads: Option<u32>,
    #[serde(default)]
    pub download_count: u32,
}

impl ShareLink {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires| expires <= now)
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_downloads
            .is_some_and(|max| self.download_count >= max)
    }

    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired(now) && !self.is_exhausted()
    }

    /// Public URL of the link under the console's base URL.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/share/{}", base_url.trim_end_matches('/'), self.token)
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateShareLinkRequest {
    #[validate(length(min = 1))]
    pub release_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 720))]
    pub expires_in_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub max_downloads: Option<u32>,
}
