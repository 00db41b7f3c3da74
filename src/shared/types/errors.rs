use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request to {0} timed out")]
    Timeout(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether this error is likely transient (network blip, overloaded
    /// backend) and a GET may succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) | ApiError::Timeout(_) => true,
            ApiError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let target = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "backend".to_string());
        if err.is_timeout() {
            ApiError::Timeout(target)
        } else if err.is_decode() {
            ApiError::Transport(format!("invalid response body from {target}: {err}"))
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Timeout("/api/v1/users".into()).is_transient());
        assert!(ApiError::Transport("connection reset".into()).is_transient());
        assert!(ApiError::Status {
            status: 503,
            message: "unavailable".into()
        }
        .is_transient());
        assert!(ApiError::Status {
            status: 429,
            message: "slow down".into()
        }
        .is_transient());

        assert!(!ApiError::Status {
            status: 400,
            message: "bad".into()
        }
        .is_transient());
        assert!(!ApiError::Unauthorized("token expired".into()).is_transient());
        assert!(!ApiError::NotFound("/api/v1/users/9".into()).is_transient());
    }

    #[test]
    fn test_app_error_is_transparent() {
        let err: AppError = ApiError::NotFound("/api/v1/packages/x".into()).into();
        assert_eq!(err.to_string(), "Not found: /api/v1/packages/x");
        assert!(matches!(err, AppError::Api(ApiError::NotFound(_))));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = ConfigError::from(io).into();
        assert_eq!(err.to_string(), "Failed to read config: denied");
    }
}
