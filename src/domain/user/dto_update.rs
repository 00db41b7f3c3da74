use serde::Serialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct AssignRolesRequest {
    #[validate(length(min = 1))]
    pub role_ids: Vec<String>,
}
