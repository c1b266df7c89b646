use thiserror::Error;

/// Application-wide error types.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Replace an unexpected failure with a generic, user-facing message.
    ///
    /// Client-facing errors (not found, bad request, conflict) pass through
    /// untouched. Everything else is logged with its original cause and
    /// becomes `AppError::Internal(message)`.
    pub fn or_internal(self, message: &str) -> Self {
        match self {
            AppError::NotFound(_) | AppError::BadRequest(_) | AppError::Conflict(_) => self,
            other => {
                tracing::error!(error = %other, "{message}");
                AppError::Internal(message.to_string())
            }
        }
    }
}

impl AppError {
    /// Convert for returning from a Leptos server function.
    pub fn into_server_error(self) -> leptos::prelude::ServerFnError {
        leptos::prelude::ServerFnError::new(self.to_string())
    }
}

/// Helper conversion from anyhow::Error
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_internal_keeps_not_found() {
        let err = AppError::NotFound("Documentation not found".into()).or_internal("Error fetching documentation");
        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Documentation not found"),
            other => panic!("Expected NotFound, got: {:?}", other),
        }
    }

    #[test]
    fn test_or_internal_hides_store_failure() {
        let err = AppError::Store("lock poisoned".into()).or_internal("Error searching documentation");
        match err {
            AppError::Internal(msg) => assert_eq!(msg, "Error searching documentation"),
            other => panic!("Expected Internal, got: {:?}", other),
        }
    }

    #[test]
    fn test_from_anyhow() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Internal(ref msg) if msg == "boom"));
    }
}
