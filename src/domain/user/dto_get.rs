use crate::shared::PageRequest;

/// Filters of the user list page. Paging comes from the list's state.
#[derive(Debug, Clone, Default)]
pub struct ListUsersParams {
    /// Search by username or email
    pub search: Option<String>,
    pub role: Option<String>,
    pub tenant_id: Option<String>,
}

impl ListUsersParams {
    pub fn to_query(&self, page: PageRequest) -> Vec<(&'static str, String)> {
        let mut query = page.to_query();
        let filters = [
            ("search", &self.search),
            ("role", &self.role),
            ("tenant_id", &self.tenant_id),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                query.push((key, value.to_string()));
            }
        }
        query
    }
}
