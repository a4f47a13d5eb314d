//! Session handshake errors.

use thiserror::Error;

/// Errors from [`login`](crate::HarborClient::login) and
/// [`logout`](crate::HarborClient::logout).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The server answered the login with something other than 200.
    #[error("Login rejected with HTTP {status}")]
    LoginRejected {
        /// HTTP status code.
        status: u16,
    },

    /// Login succeeded but no session cookie came back.
    #[error("Login response did not set a beegosessionID cookie")]
    MissingCookie,

    /// The server answered the logout with something other than 200.
    #[error("Logout rejected with HTTP {status}")]
    LogoutRejected {
        /// HTTP status code.
        status: u16,
    },
}

impl SessionError {
    /// Returns the HTTP status for rejected handshakes.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::LoginRejected { status } | Self::LogoutRejected { status } => Some(*status),
            Self::MissingCookie => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cookie_names_the_cookie() {
        assert_eq!(
            SessionError::MissingCookie.to_string(),
            "Login response did not set a beegosessionID cookie"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(
            SessionError::LoginRejected { status: 401 }.status_code(),
            Some(401)
        );
        assert_eq!(SessionError::MissingCookie.status_code(), None);
    }
}
