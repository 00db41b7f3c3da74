use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{compare_versions, format_file_size, icon_for_file_name};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    pub package_id: String,
    pub version: String,
    pub file_name: String,
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum_sha256: Option<String>,
    #[serde(default)]
    pub download_count: u64,
    pub published_at: DateTime<Utc>,
}

impl Release {
    pub fn display_size(&self) -> String {
        format_file_size(self.size_bytes)
    }

    pub fn icon(&self) -> &'static str {
        icon_for_file_name(&self.file_name)
    }

    /// Newest version first; equal versions fall back to publish time.
    pub fn cmp_newest_first(&self, other: &Release) -> Ordering {
        compare_versions(&other.version, &self.version)
            .then_with(|| other.published_at.cmp(&self.published_at))
    }
}

/// Latest release by version, ties broken by publish time.
pub fn latest_release(releases: &[Release]) -> Option<&Release> {
    releases.iter().min_by(|a, b| a.cmp_newest_first(b))
}
