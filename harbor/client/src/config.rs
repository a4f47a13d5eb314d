//! Client configuration.
//!
//! The domain is the API root (`http://host/api`) and is fixed for the life
//! of a client. The session base is where `/login` and `/log_out` live; it
//! defaults to the domain's origin.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

pub use harbor_definitions::DEFAULT_BASE_URL as DEFAULT_DOMAIN;

use crate::client::HarborClient;
use crate::error::{ConfigError, HarborError};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring a [`HarborClient`].
///
/// ## Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use harbor_client::HarborClient;
///
/// let client = HarborClient::builder()
///     .domain("https://registry.example.com/api")
///     .timeout(Duration::from_secs(10))
///     .default_header("User-Agent", "harbor-cli")?
///     .build()?;
/// ```
#[derive(Debug)]
pub struct HarborClientBuilder {
    domain: Option<String>,
    session_base: Option<String>,
    timeout: Duration,
    default_headers: HeaderMap,
}

impl HarborClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            domain: None,
            session_base: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }

    /// Sets the API root. Without one, [`DEFAULT_DOMAIN`] is used.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets where `/login` and `/log_out` are served.
    pub fn session_base(mut self, base: impl Into<String>) -> Self {
        self.session_base = Some(base.into());
        self
    }

    /// Sets the request timeout. Only applies to the built-in transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header to every request. Only applies to the built-in transport.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, HarborError> {
        let header_name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::invalid_header(name.as_ref(), e))?;
        let header_value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(name.as_ref(), e))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Builds a client on the `reqwest` transport.
    ///
    /// ## Errors
    ///
    /// Returns [`HarborError::Config`] for a bad domain or session base, or
    /// [`HarborError::Http`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HarborClient, HarborError> {
        let (domain, session_base) = self.resolve()?;
        let transport = ReqwestTransport::new(self.timeout, self.default_headers)?;
        Ok(HarborClient::from_parts(domain, session_base, transport))
    }

    /// Builds a client on a caller-supplied transport.
    ///
    /// ## Errors
    ///
    /// Returns [`HarborError::Config`] for a bad domain or session base.
    pub fn build_with<T: HttpTransport>(self, transport: T) -> Result<HarborClient<T>, HarborError> {
        let (domain, session_base) = self.resolve()?;
        Ok(HarborClient::from_parts(domain, session_base, transport))
    }

    fn resolve(&self) -> Result<(String, Url), ConfigError> {
        let domain = resolve_domain(self.domain.as_deref())?;
        let session_base = match &self.session_base {
            Some(base) => {
                let base = base.trim();
                if base.is_empty() {
                    return Err(ConfigError::EmptyDomain);
                }
                let mut url = parse_http_url(base)?;
                if !url.path().ends_with('/') {
                    let path = format!("{}/", url.path());
                    url.set_path(&path);
                }
                url
            }
            None => origin_of(&domain)?,
        };
        Ok((domain, session_base))
    }
}

/// Validates a domain, applying the default when none is given.
///
/// A trailing `/` is removed so endpoint paths can be appended directly.
///
/// ## Errors
///
/// - [`ConfigError::EmptyDomain`] for `Some("")` or whitespace.
/// - [`ConfigError::InvalidUrl`] if it is not an absolute URL.
/// - [`ConfigError::UnsupportedScheme`] for anything but http/https.
///
/// ## Examples
///
/// ```
/// use harbor_client::config::resolve_domain;
///
/// assert_eq!(resolve_domain(None).unwrap(), "http://localhost/api");
/// assert_eq!(resolve_domain(Some("https://r.example.com/api/")).unwrap(), "https://r.example.com/api");
/// assert!(resolve_domain(Some("")).is_err());
/// ```
pub fn resolve_domain(domain: Option<&str>) -> Result<String, ConfigError> {
    let Some(domain) = domain else {
        return Ok(DEFAULT_DOMAIN.to_string());
    };
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(ConfigError::EmptyDomain);
    }
    parse_http_url(domain)?;
    Ok(domain.trim_end_matches('/').to_string())
}

fn parse_http_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn origin_of(domain: &str) -> Result<Url, ConfigError> {
    let url = parse_http_url(domain)?;
    Ok(Url::parse(&format!("{}/", url.origin().ascii_serialization()))?)
}
