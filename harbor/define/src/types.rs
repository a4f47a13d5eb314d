//! Core types for REST API definitions.
//!
//! - [`RestApi`] - The top-level API definition
//! - [`Endpoint`] - Individual operation descriptors
//! - [`RestMethod`] - HTTP method enumeration

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::DefinitionError;
use crate::param::{Param, ParamLocation};
use crate::path::extract_path_params;

/// HTTP methods supported by REST APIs.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use harbor_define::RestMethod;
///
/// assert_eq!(RestMethod::from_str("HEAD").unwrap(), RestMethod::Head);
/// assert_eq!(RestMethod::Delete.to_string(), "DELETE");
/// assert!(RestMethod::Put.has_body());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a resource or trigger an action
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

impl RestMethod {
    /// Returns `true` if requests with this method carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns `true` for methods that do not change server state.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options)
    }

    /// Returns `true` if repeating the request has the same effect as sending it once.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post | Self::Patch)
    }
}

/// A complete REST API definition.
///
/// ## Examples
///
/// ```
/// use harbor_define::{RestApi, Endpoint, RestMethod};
///
/// let api = RestApi {
///     name: "Tiny".to_string(),
///     description: "A single-endpoint API".to_string(),
///     base_url: "http://localhost/api".to_string(),
///     docs_url: None,
///     headers: vec![],
///     endpoints: vec![Endpoint {
///         id: "GetSysteminfo".to_string(),
///         method: RestMethod::Get,
///         path: "/systeminfo".to_string(),
///         description: "General system info".to_string(),
///         params: vec![],
///     }],
/// };
///
/// assert!(api.endpoint("GetSysteminfo").is_some());
/// assert!(api.endpoint("Missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApi {
    /// Identifier for this API.
    pub name: String,
    /// Human-readable description of the API.
    pub description: String,
    /// Default base URL; endpoint paths are appended to it verbatim.
    pub base_url: String,
    /// Link to API documentation (optional).
    pub docs_url: Option<String>,
    /// HTTP headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// All operations of this API.
    pub endpoints: Vec<Endpoint>,
}

impl RestApi {
    /// Finds an endpoint by id (case-sensitive).
    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Checks the table for structural mistakes.
    ///
    /// ## Errors
    ///
    /// Returns the first [`DefinitionError`] found, scanning endpoints in order.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::new();
        for endpoint in &self.endpoints {
            if !seen.insert(endpoint.id.as_str()) {
                return Err(DefinitionError::DuplicateEndpoint {
                    id: endpoint.id.clone(),
                });
            }
            endpoint.validate()?;
        }
        Ok(())
    }
}

/// A single API operation.
///
/// ## Examples
///
/// ```
/// use harbor_define::{Endpoint, Param, ParamKind, RestMethod};
///
/// let endpoint = Endpoint {
///     id: "GetProjects".to_string(),
///     method: RestMethod::Get,
///     path: "/projects".to_string(),
///     description: "List projects".to_string(),
///     params: vec![
///         Param::query("name", "name", ParamKind::String, "Project name"),
///         Param::query("pageSize", "page_size", ParamKind::Integer, "Page size"),
///     ],
/// };
///
/// let wire: Vec<_> = endpoint.query_params().map(|p| p.wire_name.as_str()).collect();
/// assert_eq!(wire, vec!["name", "page_size"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// PascalCase identifier (e.g. "GetProjectsByProjectId").
    pub id: String,
    /// HTTP method for this endpoint.
    pub method: RestMethod,
    /// Path template (e.g. "/projects/{project_id}").
    pub path: String,
    /// Human-readable description of what this endpoint does.
    pub description: String,
    /// Parameters in declaration order. Query parameters are emitted in
    /// this order.
    pub params: Vec<Param>,
}

impl Endpoint {
    /// Looks up a parameter by caller-facing name.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Path parameters, in declaration order.
    pub fn path_params(&self) -> impl Iterator<Item = &Param> {
        self.params_at(ParamLocation::Path)
    }

    /// Query parameters, in declaration order.
    pub fn query_params(&self) -> impl Iterator<Item = &Param> {
        self.params_at(ParamLocation::Query)
    }

    /// The parameter sent as the request body, if any.
    pub fn body_param(&self) -> Option<&Param> {
        self.params_at(ParamLocation::Body).next()
    }

    /// Names of all required parameters.
    pub fn required_params(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
    }

    fn params_at(&self, location: ParamLocation) -> impl Iterator<Item = &Param> {
        self.params.iter().filter(move |p| p.location == location)
    }

    fn validate(&self) -> Result<(), DefinitionError> {
        let mut names = HashSet::new();
        for param in &self.params {
            if !names.insert(param.name.as_str()) {
                return Err(DefinitionError::DuplicateParam {
                    endpoint: self.id.clone(),
                    param: param.name.clone(),
                });
            }
        }

        let placeholders = extract_path_params(&self.path);
        for placeholder in &placeholders {
            if !self.path_params().any(|p| p.wire_name == *placeholder) {
                return Err(DefinitionError::UnboundPlaceholder {
                    endpoint: self.id.clone(),
                    placeholder: (*placeholder).to_string(),
                });
            }
        }

        for param in self.path_params() {
            if !placeholders.contains(&param.wire_name.as_str()) {
                return Err(DefinitionError::UnusedPathParam {
                    endpoint: self.id.clone(),
                    param: param.name.clone(),
                    path: self.path.clone(),
                });
            }
            if !param.required {
                return Err(DefinitionError::OptionalPathParam {
                    endpoint: self.id.clone(),
                    param: param.name.clone(),
                });
            }
        }

        match self.params_at(ParamLocation::Body).count() {
            0 => Ok(()),
            1 if self.method.has_body() => Ok(()),
            1 => Err(DefinitionError::BodyNotAllowed {
                endpoint: self.id.clone(),
                method: self.method.to_string(),
            }),
            _ => Err(DefinitionError::MultipleBodies {
                endpoint: self.id.clone(),
            }),
        }
    }
}
