use thiserror::Error;

/// Failure of a single query or of a whole `search` batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Rejected locally, no request was sent
    #[error("{0}")]
    InvalidInput(String),

    /// The request could not complete (connect, DNS, timeout, bad gateway)
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a JSON-RPC error object; message is passed through untouched
    #[error("{message}")]
    Remote { code: Option<i64>, message: String },

    /// The endpoint answered, but not in the shape the method promises
    #[error("Malformed {method} response: {reason}")]
    MalformedResponse { method: String, reason: String },
}

impl QueryError {
    pub fn malformed(method: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            method: method.to_string(),
            reason: reason.into(),
        }
    }

    /// Short label for the error screen title
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "Invalid input",
            Self::Transport(_) => "Network error",
            Self::Remote { .. } => "RPC error",
            Self::MalformedResponse { .. } => "Unexpected response",
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Transport(format!("Request timed out: {e}"))
        } else if e.is_connect() {
            Self::Transport(format!("Connection failed: {e}"))
        } else {
            Self::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_message_verbatim() {
        let err = QueryError::Remote {
            code: Some(-32602),
            message: "Invalid param: WrongSize".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid param: WrongSize");
    }

    #[test]
    fn test_malformed_names_method() {
        let err = QueryError::malformed("getBalance", "missing field `value`");
        assert_eq!(
            err.to_string(),
            "Malformed getBalance response: missing field `value`"
        );
        assert_eq!(err.kind(), "Unexpected response");
    }
}
