use thiserror::Error;

/// Errors surfaced by the rotation core and the storage layer.
#[derive(Debug, Error)]
pub enum RotationError {
    /// The request cannot be carried out as given.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The named participant is not on the roster.
    #[error("not found: {0}")]
    NotFound(String),

    /// Blob download or upload failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// A persisted table could not be encoded or decoded.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<reqwest::Error> for RotationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input() {
        let err = RotationError::InvalidInput("select at least one team member".to_string());
        assert_eq!(err.to_string(), "invalid input: select at least one team member");
    }

    #[test]
    fn display_not_found() {
        let err = RotationError::NotFound("Cleo is not on the roster".to_string());
        assert!(err.to_string().contains("Cleo"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RotationError>();
    }
}
