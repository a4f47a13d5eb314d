//! Request assembly.
//!
//! [`prepare`] turns an endpoint descriptor plus call parameters into an
//! [`HttpRequest`] without touching the network. Every validation failure
//! surfaces here, so a rejected call never reaches the transport.

use bytes::Bytes;
use serde_json::Value;
use tracing::debug;
use url::Url;

use harbor_define::{Endpoint, substitute_path_params};

use crate::error::{ConfigError, HarborError};
use crate::params::{Params, render_value};

/// Builds the request for one operation call.
///
/// Checks run in this order: path parameters, query parameters, then the
/// body. Recognized query parameters are emitted under their wire names in
/// descriptor order; pass-through pairs follow and replace an earlier pair
/// with the same name in place.
///
/// Query values are `application/x-www-form-urlencoded`: a space becomes
/// `+` rather than `%20`, and `!'()` are percent-encoded. Harbor decodes
/// both forms the same way.
///
/// The returned request carries no headers; the caller adds them.
///
/// ## Errors
///
/// - [`HarborError::MissingParameter`] for an absent required parameter.
/// - [`HarborError::Json`] if the body cannot be serialized.
/// - [`HarborError::Config`] if the resulting URL does not parse.
///
/// ## Examples
///
/// ```
/// use harbor_client::{Params, prepare};
/// use harbor_definitions::define_harbor_api;
///
/// let api = define_harbor_api();
/// let endpoint = api.endpoint("GetProjects").unwrap();
/// let params = Params::new().with("name", "lib").with("pageSize", 5);
///
/// let request = prepare("http://localhost/api", endpoint, &params).unwrap();
/// assert_eq!(
///     request.url.as_str(),
///     "http://localhost/api/projects?name=lib&page_size=5"
/// );
/// ```
pub fn prepare(
    domain: &str,
    endpoint: &Endpoint,
    params: &Params,
) -> Result<crate::HttpRequest, HarborError> {
    let mut substitutions = Vec::new();
    for param in endpoint.path_params() {
        let value = params
            .get(&param.name)
            .ok_or_else(|| HarborError::missing_parameter(&param.name))?;
        substitutions.push((param.wire_name.as_str(), render_value(value)));
    }
    let pairs: Vec<(&str, &str)> = substitutions
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    let path = substitute_path_params(&endpoint.path, &pairs);

    let mut query: Vec<(String, String)> = Vec::new();
    for param in endpoint.query_params() {
        match params.get(&param.name) {
            Some(value) => query.push((param.wire_name.clone(), render_value(value))),
            None if param.required => return Err(HarborError::missing_parameter(&param.name)),
            None => {}
        }
    }

    let body = match endpoint.body_param() {
        Some(param) => match params.get(&param.name) {
            Some(value) => encode_body(value)?,
            None if param.required => return Err(HarborError::missing_parameter(&param.name)),
            None => None,
        },
        None => None,
    };

    for (name, value) in params.extra_query() {
        match query.iter_mut().find(|(existing, _)| existing == name) {
            Some(slot) => slot.1 = value.clone(),
            None => query.push((name.clone(), value.clone())),
        }
    }

    for name in params.names() {
        if endpoint.param(name).is_none() {
            debug!(operation = %endpoint.id, parameter = name, "Ignoring unrecognized parameter");
        }
    }

    let mut url = Url::parse(&format!("{domain}{path}")).map_err(ConfigError::from)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(&query);
    }

    Ok(crate::HttpRequest {
        method: endpoint.method,
        url,
        headers: Vec::new(),
        body,
    })
}

/// Serializes a body value. Empty objects and arrays are dropped.
fn encode_body(value: &Value) -> Result<Option<Bytes>, HarborError> {
    let empty = match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if empty {
        return Ok(None);
    }
    Ok(Some(Bytes::from(serde_json::to_vec(value)?)))
}
