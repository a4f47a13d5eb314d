//! Harbor Definition Library
//!
//! Declarative primitives for describing the operations of a REST API as data.
//! A single dispatcher in `harbor-client` walks these descriptors to build
//! requests, so every operation shares one code path instead of one
//! hand-written method body per endpoint.
//!
//! ## Core Types
//!
//! - [`RestApi`] - A complete API definition with base URL, headers, and endpoints
//! - [`Endpoint`] - A single operation: method, path template, parameters
//! - [`Param`] - One named parameter and where it travels (path, query, or body)
//! - [`ParamKind`] - The value type a parameter expects
//! - [`ParamLocation`] - Path, query string, or request body
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//!
//! ## Path Templates
//!
//! - [`extract_path_params`] - Placeholder names in template order
//! - [`substitute_path_params`] - Raw placeholder substitution
//!
//! ## Examples
//!
//! ```
//! use harbor_define::{Endpoint, Param, ParamKind, RestApi, RestMethod};
//!
//! let api = RestApi {
//!     name: "Registry".to_string(),
//!     description: "Registry management API".to_string(),
//!     base_url: "http://localhost/api".to_string(),
//!     docs_url: None,
//!     headers: vec![],
//!     endpoints: vec![Endpoint {
//!         id: "GetTargetsById".to_string(),
//!         method: RestMethod::Get,
//!         path: "/targets/{id}".to_string(),
//!         description: "Get a replication target".to_string(),
//!         params: vec![Param::path("id", "id", ParamKind::Integer, "Target ID")],
//!     }],
//! };
//!
//! assert!(api.validate().is_ok());
//! assert_eq!(api.endpoint("GetTargetsById").unwrap().path_params().count(), 1);
//! ```

pub mod error;
pub mod param;
pub mod path;
pub mod prelude;
pub mod types;

// Re-export main types at crate root
pub use error::DefinitionError;
pub use param::{Param, ParamKind, ParamLocation};
pub use path::{extract_path_params, substitute_path_params};
pub use types::{Endpoint, RestApi, RestMethod};
