//! Convenient re-exports for consumers of the Harbor definition.

pub use crate::harbor::{DEFAULT_BASE_URL, define_harbor_api};
pub use harbor_define::prelude::*;
