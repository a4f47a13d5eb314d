//! Definition validation errors.

use thiserror::Error;

/// Problems found by [`RestApi::validate`](crate::RestApi::validate).
///
/// These are programmer errors in an API table and are caught by the
/// definitions crate's own tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Two endpoints share an id.
    #[error("Duplicate endpoint ID: {id}")]
    DuplicateEndpoint {
        /// The repeated id.
        id: String,
    },

    /// A `{placeholder}` in the path has no path parameter bound to it.
    #[error("Endpoint {endpoint}: placeholder {{{placeholder}}} has no path parameter")]
    UnboundPlaceholder {
        /// Endpoint id.
        endpoint: String,
        /// The placeholder name.
        placeholder: String,
    },

    /// A path parameter names a placeholder the template does not contain.
    #[error("Endpoint {endpoint}: path parameter {param} does not appear in {path}")]
    UnusedPathParam {
        /// Endpoint id.
        endpoint: String,
        /// The caller-facing parameter name.
        param: String,
        /// The path template.
        path: String,
    },

    /// A path parameter was marked optional.
    #[error("Endpoint {endpoint}: path parameter {param} must be required")]
    OptionalPathParam {
        /// Endpoint id.
        endpoint: String,
        /// The caller-facing parameter name.
        param: String,
    },

    /// More than one parameter is designated as the body.
    #[error("Endpoint {endpoint}: at most one body parameter is allowed")]
    MultipleBodies {
        /// Endpoint id.
        endpoint: String,
    },

    /// A body parameter on a method that carries no body.
    #[error("Endpoint {endpoint}: {method} requests do not carry a body")]
    BodyNotAllowed {
        /// Endpoint id.
        endpoint: String,
        /// The offending method.
        method: String,
    },

    /// Two parameters of one endpoint share a caller-facing name.
    #[error("Endpoint {endpoint}: parameter {param} is declared twice")]
    DuplicateParam {
        /// Endpoint id.
        endpoint: String,
        /// The repeated name.
        param: String,
    },
}

impl DefinitionError {
    /// Returns the endpoint id the error refers to.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::DuplicateEndpoint { id } => id,
            Self::UnboundPlaceholder { endpoint, .. }
            | Self::UnusedPathParam { endpoint, .. }
            | Self::OptionalPathParam { endpoint, .. }
            | Self::MultipleBodies { endpoint }
            | Self::BodyNotAllowed { endpoint, .. }
            | Self::DuplicateParam { endpoint, .. } => endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_placeholder_message_shows_braces() {
        let err = DefinitionError::UnboundPlaceholder {
            endpoint: "GetTargetsById".into(),
            placeholder: "id".into(),
        };
        assert_eq!(
            err.to_string(),
            "Endpoint GetTargetsById: placeholder {id} has no path parameter"
        );
    }

    #[test]
    fn endpoint_accessor() {
        let err = DefinitionError::DuplicateEndpoint {
            id: "GetLogs".into(),
        };
        assert_eq!(err.endpoint(), "GetLogs");
        assert_eq!(err.to_string(), "Duplicate endpoint ID: GetLogs");
    }
}
