use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::icon_for_package_kind;

/// Package ecosystem. Unknown kinds reported by the backend map to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Npm,
    Maven,
    Pypi,
    Docker,
    Cargo,
    Nuget,
    Helm,
    #[serde(other)]
    Generic,
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageKind::Npm => "npm",
            PackageKind::Maven => "maven",
            PackageKind::Pypi => "pypi",
            PackageKind::Docker => "docker",
            PackageKind::Cargo => "cargo",
            PackageKind::Nuget => "nuget",
            PackageKind::Helm => "helm",
            PackageKind::Generic => "generic",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: PackageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    #[serde(default)]
    pub download_count: u64,
    pub updated_at: DateTime<Utc>,
}

fn default_kind() -> PackageKind {
    PackageKind::Generic
}

impl Package {
    pub fn icon(&self) -> &'static str {
        icon_for_package_kind(self.kind)
    }

    /// Case-insensitive match against name, description and kind.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.kind.to_string() == query
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}
