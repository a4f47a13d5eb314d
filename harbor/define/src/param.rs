//! Parameter descriptors.
//!
//! Every operation parameter has two names: the caller-facing `name` used in
//! call parameters (e.g. `pageSize`) and the `wire_name` that appears in the
//! HTTP request (e.g. `page_size`). For path parameters the wire name is the
//! placeholder inside the path template.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The value type a parameter expects.
///
/// ## Examples
///
/// ```
/// use harbor_define::ParamKind;
///
/// assert_eq!(ParamKind::Integer.to_string(), "integer");
/// assert_eq!("boolean".parse::<ParamKind>().unwrap(), ParamKind::Boolean);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParamKind {
    /// Free-form text
    String,
    /// Whole number (ids, page numbers, timestamps)
    Integer,
    /// `true` / `false`
    Boolean,
    /// A JSON document (request bodies)
    Object,
}

/// Where a parameter travels in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParamLocation {
    /// Substituted into a `{placeholder}` of the path template.
    Path,
    /// Appended to the query string under its wire name.
    Query,
    /// Serialized as the JSON request body.
    Body,
}

/// A single operation parameter.
///
/// ## Examples
///
/// ```
/// use harbor_define::{Param, ParamKind, ParamLocation};
///
/// let page_size = Param::query("pageSize", "page_size", ParamKind::Integer, "Page size");
/// assert_eq!(page_size.location, ParamLocation::Query);
/// assert!(!page_size.required);
///
/// let project = Param::body("project", "New project").required();
/// assert!(project.required);
/// assert_eq!(project.kind, ParamKind::Object);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Caller-facing name (the key in call parameters).
    pub name: String,
    /// Name on the wire: path placeholder or query key.
    ///
    /// Body parameters keep their caller-facing name here; the body is sent
    /// as the bare value, never wrapped under this key.
    pub wire_name: String,
    /// Where the parameter travels.
    pub location: ParamLocation,
    /// Expected value type.
    pub kind: ParamKind,
    /// Whether the call is rejected when the parameter is absent.
    pub required: bool,
    /// Human-readable description.
    pub description: String,
}

impl Param {
    /// Creates a path parameter. Path parameters are always required.
    pub fn path(
        name: impl Into<String>,
        wire_name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            wire_name: wire_name.into(),
            location: ParamLocation::Path,
            kind,
            required: true,
            description: description.into(),
        }
    }

    /// Creates an optional query parameter.
    pub fn query(
        name: impl Into<String>,
        wire_name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            wire_name: wire_name.into(),
            location: ParamLocation::Query,
            kind,
            required: false,
            description: description.into(),
        }
    }

    /// Creates an optional JSON body parameter.
    pub fn body(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            wire_name: name.clone(),
            name,
            location: ParamLocation::Body,
            kind: ParamKind::Object,
            required: false,
            description: description.into(),
        }
    }

    /// Marks the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn path_params_are_always_required() {
        let p = Param::path("projectId", "project_id", ParamKind::Integer, "Project ID");
        assert!(p.required);
        assert_eq!(p.location, ParamLocation::Path);
        assert_eq!(p.wire_name, "project_id");
    }

    #[test]
    fn query_params_default_to_optional() {
        let p = Param::query("q", "q", ParamKind::String, "Search term");
        assert!(!p.required);
        assert!(p.required().required);
    }

    #[test]
    fn body_param_keeps_its_name_on_the_wire() {
        let p = Param::body("hasAdminRole", "Admin flag");
        assert_eq!(p.wire_name, "hasAdminRole");
        assert_eq!(p.kind, ParamKind::Object);
        assert_eq!(p.location, ParamLocation::Body);
    }

    #[test]
    fn param_kind_parses_lowercase() {
        for kind in ParamKind::iter() {
            assert_eq!(ParamKind::from_str(&kind.to_string()).unwrap(), kind);
        }
        assert!(ParamKind::from_str("Integer").is_err());
    }

    #[test]
    fn param_serializes_location_lowercase() {
        let p = Param::query("pageSize", "page_size", ParamKind::Integer, "Page size");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["location"], "query");
        assert_eq!(json["kind"], "integer");
        assert_eq!(json["wire_name"], "page_size");
    }
}
