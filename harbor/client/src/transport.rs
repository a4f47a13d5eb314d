//! HTTP transport seam.
//!
//! The dispatcher builds an [`HttpRequest`] and hands it to an
//! [`HttpTransport`]. [`ReqwestTransport`] is the production implementation;
//! tests can substitute their own.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde_json::Value;
use url::Url;

use harbor_define::RestMethod;

use crate::error::HarborError;

/// A fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: RestMethod,
    /// Absolute URL including the query string.
    pub url: Url,
    /// Request headers in send order.
    pub headers: Vec<(String, String)>,
    /// Encoded request body.
    pub body: Option<Bytes>,
}

/// A received response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers; repeated headers appear once per value.
    pub headers: Vec<(String, String)>,
    /// Raw body bytes.
    pub body: Bytes,
}

impl HttpResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// All values of a header, matched case-insensitively.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body as lossy UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON. An empty body yields `Value::Null`.
    ///
    /// ## Errors
    ///
    /// Returns [`HarborError::Json`] when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, HarborError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Sends requests over the network.
///
/// ## Native Async Traits
///
/// Uses native async functions in traits. Implementations may write
/// `async fn execute(...)` directly.
///
/// ## Examples
///
/// ```ignore
/// use harbor_client::{HttpRequest, HttpResponse, HttpTransport, HarborError};
///
/// struct Canned;
///
/// impl HttpTransport for Canned {
///     async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, HarborError> {
///         Ok(HttpResponse { status: 200, headers: vec![], body: "{}".into() })
///     }
/// }
/// ```
pub trait HttpTransport: Send + Sync {
    /// Sends one request and returns the response, whatever its status.
    ///
    /// ## Errors
    ///
    /// Returns [`HarborError::Http`] on network failure.
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HarborError>> + Send;
}

/// [`HttpTransport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with a request timeout and default headers.
    ///
    /// ## Errors
    ///
    /// Returns [`HarborError::Http`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration, default_headers: HeaderMap) -> Result<Self, HarborError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HarborError> {
        let mut builder = self
            .client
            .request(to_reqwest(request.method), request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Converts to the equivalent `reqwest::Method`.
fn to_reqwest(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Patch => reqwest::Method::PATCH,
        RestMethod::Delete => reqwest::Method::DELETE,
        RestMethod::Head => reqwest::Method::HEAD,
        RestMethod::Options => reqwest::Method::OPTIONS,
    }
}
