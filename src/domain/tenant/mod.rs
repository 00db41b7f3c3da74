//! Tenants and roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub user_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateTenantRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 512))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    /// Whether the role grants `permission`, honoring `*` and `scope:*`
    /// wildcards.
    pub fn grants(&self, permission: &str) -> bool {
        self.permissions.iter().any(|granted| {
            granted == "*"
                || granted == permission
                || granted
                    .strip_suffix(":*")
                    .is_some_and(|scope| permission.starts_with(&format!("{scope}:")))
        })
    }
}
