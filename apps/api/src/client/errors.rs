use thiserror::Error;

/// Errors surfaced by the data layer
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Query {0} is disabled")]
    Disabled(String),
}

impl ClientError {
    /// Returns true for a 404 from the simulator
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected() {
        let err = ClientError::Status {
            status: 404,
            message: "Task not found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Task not found (HTTP 404)");
    }

    #[test]
    fn validation_is_not_a_status() {
        let err = ClientError::Validation("Title is required".to_string());
        assert!(!err.is_not_found());
        assert_eq!(err.status(), None);
    }
}
