use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::validate_scopes;

/// Machine credential allowing a CI system or tool to talk to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientAccess {
    pub id: String,
    pub name: String,
    pub client_id: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
}

impl ClientAccess {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && self.expires_at.map_or(true, |expires| expires > now)
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateClientAccessRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(custom(function = "validate_scopes"))]
    pub scopes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 365))]
    pub expires_in_days: Option<u32>,
}

/// Creation response; the secret is only ever returned here.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientAccessCreated {
    #[serde(flatten)]
    pub access: ClientAccess,
    pub client_secret: String,
}
