//! Convenient re-exports for calling Harbor.
//!
//! ```
//! use harbor_client::prelude::*;
//!
//! let params = Params::new().with("projectId", 1);
//! assert!(params.get("projectId").is_some());
//! ```

pub use crate::client::HarborClient;
pub use crate::error::{ConfigError, HarborError, SessionError};
pub use crate::params::Params;
pub use crate::session::{Credentials, Session};
pub use crate::transport::{HttpTransport, ReqwestTransport};
