use std::borrow::Cow;

use validator::ValidationError;

/// Client-access scopes: at least one, each `resource:action` without
/// whitespace.
pub fn validate_scopes(scopes: &[String]) -> Result<(), ValidationError> {
    if scopes.is_empty() {
        return Err(scope_error("at least one scope is required"));
    }
    let malformed = scopes.iter().any(|scope| {
        let Some((resource, action)) = scope.split_once(':') else {
            return true;
        };
        resource.is_empty() || action.is_empty() || scope.chars().any(char::is_whitespace)
    });
    if malformed {
        return Err(scope_error("scopes must look like `resource:action`"));
    }
    Ok(())
}

fn scope_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("scopes");
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Page-size selector options: positive, sorted, deduplicated, and always
/// containing the default size.
pub fn normalize_page_sizes(options: &[u32], default_size: u32) -> Vec<u32> {
    let mut sizes: Vec<u32> = options.iter().copied().filter(|size| *size > 0).collect();
    sizes.push(default_size.max(1));
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}
