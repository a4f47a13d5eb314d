//! Harbor Client
//!
//! Async client for the Harbor container registry REST API. Every operation
//! is a row in the `harbor-definitions` table; one dispatcher validates the
//! parameters, assembles the request, and decodes the JSON response.
//!
//! ## Calling Operations
//!
//! Operations can be run by id through [`HarborClient::call`] or through the
//! generated method of the same name (`GetProjects` becomes `get_projects`).
//! Parameters use caller-facing names (`projectId`, `pageSize`) and are mapped
//! to the wire names the server expects.
//!
//! ```rust,ignore
//! use harbor_client::{HarborClient, Params};
//!
//! let client = HarborClient::new(Some("https://registry.example.com/api"))?;
//! let tags = client
//!     .get_repositories_by_repo_name_tags(Params::new().with("repoName", "library/nginx"))
//!     .await?;
//! ```
//!
//! ## Sessions
//!
//! ```rust,ignore
//! use harbor_client::{Credentials, HarborClient, Params};
//!
//! let client = HarborClient::new(None)?;
//! let session = client.login(&Credentials::new("admin", password)).await?;
//! let me = client.with_session(&session).get_users_current(Params::new()).await?;
//! client.logout(&session).await?;
//! ```
//!
//! ## Logging
//!
//! Each call runs in a `harbor_request` span. The crate never installs a
//! subscriber.

mod client;
pub mod config;
pub mod error;
mod operations;
pub mod params;
pub mod prelude;
mod request;
pub mod session;
pub mod transport;

pub use client::HarborClient;
pub use config::{DEFAULT_DOMAIN, DEFAULT_TIMEOUT_SECS, HarborClientBuilder, resolve_domain};
pub use error::{ConfigError, HarborError, SessionError};
pub use operations::OPERATION_IDS;
pub use params::{Params, QUERY_PARAMETERS_KEY, coerce_value, render_value};
pub use request::prepare;
pub use session::{Credentials, SESSION_COOKIE, Session};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

pub use harbor_define::{Endpoint, Param, ParamKind, ParamLocation, RestApi, RestMethod};
