//! Error types for the Harbor client.
//!
//! - [`HarborError`] - Top-level error returned by every call
//! - [`ConfigError`] - Client construction problems
//! - [`SessionError`] - Login/logout handshake failures

mod config_error;
mod harbor_error;
mod session_error;

pub use config_error::ConfigError;
pub use harbor_error::HarborError;
pub use session_error::SessionError;
