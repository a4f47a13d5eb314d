//! Top-level client error type.

use thiserror::Error;

use super::{ConfigError, SessionError};

/// Error type for every Harbor client operation.
///
/// Transport and JSON failures are carried through unchanged so callers can
/// inspect the underlying `reqwest` or `serde_json` error.
///
/// ## Examples
///
/// ```rust,ignore
/// use harbor_client::HarborError;
///
/// match client.delete_targets_by_id(Params::new()).await {
///     Err(HarborError::MissingParameter { name }) => eprintln!("need {name}"),
///     Err(HarborError::Status { status, .. }) => eprintln!("server said {status}"),
///     Err(e) => eprintln!("{e}"),
///     Ok(body) => println!("{body}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HarborError {
    /// Client construction failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Login or logout failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A required path, query, or body parameter was absent. Raised before
    /// any network activity.
    #[error("Missing required parameter: {name}")]
    MissingParameter {
        /// Caller-facing parameter name.
        name: String,
    },

    /// A parameter value could not be interpreted.
    #[error("Invalid value for parameter {name}: {message}")]
    InvalidParameter {
        /// Caller-facing parameter name.
        name: String,
        /// What was wrong with it.
        message: String,
    },

    /// No operation with this id exists.
    #[error("Unknown operation: {id}")]
    UnknownOperation {
        /// The id that was looked up.
        id: String,
    },

    /// Network or protocol failure from the HTTP stack.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },
}

impl HarborError {
    /// Creates a missing parameter error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.to_string(),
        }
    }

    /// Returns `true` if the call was rejected for a missing parameter.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }

    /// Returns the HTTP status code, if the error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Session(e) => e.status_code(),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = HarborError::missing_parameter("id");
        assert_eq!(err.to_string(), "Missing required parameter: id");
        assert!(err.is_missing_parameter());
    }

    #[test]
    fn test_status_code() {
        let err = HarborError::Status {
            status: 404,
            body: "not found".into(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: not found");
        assert!(!err.is_missing_parameter());
    }

    #[test]
    fn test_session_status_code() {
        let err: HarborError = SessionError::LoginRejected { status: 401 }.into();
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.to_string(), "Login rejected with HTTP 401");
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let expected = json_err.to_string();
        let err = HarborError::from(json_err);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: HarborError = ConfigError::EmptyDomain.into();
        assert_eq!(err.to_string(), "Domain must be a non-empty URL");
    }
}
