use thiserror::Error;

/// Errors raised by the routing core and its configuration layer.
///
/// Cloneable so a single in-flight page load can report the same failure to
/// every caller awaiting it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Duplicate route key: {0}")]
    DuplicateRouteKey(String),

    #[error("Duplicate route path: {0}")]
    DuplicateRoutePath(String),

    #[error("Unknown route key: {0}")]
    UnknownRouteKey(String),

    #[error("Failed to load page '{key}': {reason}")]
    RouteLoadFailure { key: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

impl AppError {
    pub fn load_failure(key: impl Into<String>, reason: impl ToString) -> Self {
        AppError::RouteLoadFailure {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Configuration defects abort startup; everything else degrades gracefully.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::DuplicateRouteKey(_) | AppError::DuplicateRoutePath(_) | AppError::ConfigError(_)
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
