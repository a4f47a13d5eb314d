//! Harbor API Definitions
//!
//! The operation table of the Harbor container registry management API,
//! written with the primitives from `harbor-define`.
//!
//! ## Examples
//!
//! ```
//! use harbor_definitions::define_harbor_api;
//!
//! let api = define_harbor_api();
//! assert_eq!(api.name, "Harbor");
//! assert_eq!(api.endpoints.len(), 67);
//! assert!(api.validate().is_ok());
//! ```

pub mod harbor;
pub mod prelude;

// Re-export API definition functions for convenience
pub use harbor::{DEFAULT_BASE_URL, define_harbor_api};
