//! Operation dispatch with tracing instrumentation.
//!
//! [`HarborClient::call`] is the single code path behind every operation:
//! look up the descriptor, [`prepare`] the request, send it, check the
//! status, parse the body.

use std::sync::Arc;

use serde_json::Value;
use tracing::{Span, instrument, warn};
use url::Url;

use harbor_define::{Endpoint, RestApi};
use harbor_definitions::define_harbor_api;

use crate::config::HarborClientBuilder;
use crate::error::HarborError;
use crate::params::Params;
use crate::request::prepare;
use crate::session::Session;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Async client for the Harbor registry API.
///
/// The client is immutable: its domain never changes after construction and
/// calls share no mutable state, so one instance can serve concurrent tasks.
///
/// ## Examples
///
/// ```rust,ignore
/// use harbor_client::{HarborClient, Params};
///
/// let client = HarborClient::new(Some("https://registry.example.com/api"))?;
/// let projects = client
///     .get_projects(Params::new().with("name", "lib").with("pageSize", 5))
///     .await?;
/// println!("{projects:#}");
/// ```
#[derive(Debug, Clone)]
pub struct HarborClient<T = ReqwestTransport> {
    domain: String,
    session_base: Url,
    api: Arc<RestApi>,
    session: Option<Session>,
    transport: T,
}

impl HarborClient {
    /// Creates a new builder.
    pub fn builder() -> HarborClientBuilder {
        HarborClientBuilder::new()
    }

    /// Creates a client with default settings.
    ///
    /// `None` selects [`DEFAULT_DOMAIN`](crate::config::DEFAULT_DOMAIN).
    ///
    /// ## Errors
    ///
    /// Returns [`HarborError::Config`] if the domain is empty or not a URL.
    pub fn new(domain: Option<&str>) -> Result<Self, HarborError> {
        let mut builder = Self::builder();
        if let Some(domain) = domain {
            builder = builder.domain(domain);
        }
        builder.build()
    }
}

impl<T: HttpTransport> HarborClient<T> {
    pub(crate) fn from_parts(domain: String, session_base: Url, transport: T) -> Self {
        Self {
            domain,
            session_base,
            api: Arc::new(define_harbor_api()),
            session: None,
            transport,
        }
    }

    /// The API root every endpoint path is appended to.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Where `/login` and `/log_out` are served.
    pub fn session_base(&self) -> &Url {
        &self.session_base
    }

    /// The session attached by [`with_session`](Self::with_session), if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// All operation descriptors.
    pub fn operations(&self) -> &[Endpoint] {
        &self.api.endpoints
    }

    /// Looks up one operation descriptor.
    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.api.endpoint(id)
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn attach_session(&self, session: Session) -> Self
    where
        T: Clone,
    {
        Self {
            session: Some(session),
            ..self.clone()
        }
    }

    /// Runs an operation by id.
    ///
    /// ## Errors
    ///
    /// - [`HarborError::UnknownOperation`] if `id` is not in the table.
    /// - [`HarborError::MissingParameter`] before any network activity.
    /// - [`HarborError::Http`] on transport failure, unmodified.
    /// - [`HarborError::Status`] on a non-2xx response.
    /// - [`HarborError::Json`] if a 2xx body is not JSON.
    #[instrument(
        name = "harbor_request",
        skip_all,
        fields(
            operation = %id,
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn call(&self, id: &str, params: Params) -> Result<Value, HarborError> {
        let endpoint = self
            .api
            .endpoint(id)
            .ok_or_else(|| HarborError::UnknownOperation { id: id.to_string() })?;

        let mut request = prepare(&self.domain, endpoint, &params)?;
        request.headers = self.request_headers();

        let span = Span::current();
        span.record("http.method", request.method.to_string().as_str());
        span.record("http.url", request.url.as_str());

        let response = self.transport.execute(request).await?;
        span.record("http.status_code", response.status);

        if !response.is_success() {
            let otel_status = if response.status >= 500 { "ERROR" } else { "UNSET" };
            span.record("otel.status_code", otel_status);
            warn!(status = response.status, "Harbor returned a non-success status");
            return Err(HarborError::Status {
                status: response.status,
                body: response.text(),
            });
        }

        span.record("otel.status_code", "OK");
        response.json()
    }

    /// Fixed API headers plus the session cookie, if attached.
    fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = self.api.headers.clone();
        if let Some(session) = &self.session {
            headers.push(("Cookie".to_string(), session.cookie()));
        }
        headers
    }
}
