//! Client configuration errors.

use thiserror::Error;

/// Errors raised while building a [`HarborClient`](crate::HarborClient).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The domain was given but empty.
    #[error("Domain must be a non-empty URL")]
    EmptyDomain,

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Only `http` and `https` are supported.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// A default header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// Header name as given.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_domain() {
        assert_eq!(
            ConfigError::EmptyDomain.to_string(),
            "Domain must be a non-empty URL"
        );
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::from(url_err);
        assert!(err.to_string().starts_with("Invalid URL"));
    }

    #[test]
    fn test_invalid_header() {
        let err = ConfigError::invalid_header("X Bad", "contains a space");
        assert_eq!(err.to_string(), "Invalid header X Bad: contains a space");
    }
}
