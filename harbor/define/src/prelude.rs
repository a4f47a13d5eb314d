//! Convenient re-exports for writing API definitions.
//!
//! ```
//! use harbor_define::prelude::*;
//!
//! let endpoint = Endpoint {
//!     id: "GetStatistics".to_string(),
//!     method: RestMethod::Get,
//!     path: "/statistics".to_string(),
//!     description: "Project and repository counts".to_string(),
//!     params: vec![],
//! };
//! assert!(endpoint.body_param().is_none());
//! ```

pub use crate::error::DefinitionError;
pub use crate::param::{Param, ParamKind, ParamLocation};
pub use crate::path::{extract_path_params, substitute_path_params};
pub use crate::types::{Endpoint, RestApi, RestMethod};
