//! Call parameters.
//!
//! [`Params`] maps caller-facing parameter names (`projectId`, `pageSize`) to
//! JSON values. Pass-through query pairs that no descriptor knows about ride
//! alongside and are appended to the query string as given.

use serde_json::{Map, Value};

use harbor_define::{Param, ParamKind};

use crate::error::HarborError;

/// Reserved key for pass-through query parameters inside a JSON object.
///
/// ```
/// use harbor_client::Params;
/// use serde_json::json;
///
/// let params = Params::try_from(json!({
///     "name": "lib",
///     "$queryParameters": { "sort": "name" }
/// }))
/// .unwrap();
/// assert_eq!(params.extra_query(), &[("sort".to_string(), "name".to_string())]);
/// ```
pub const QUERY_PARAMETERS_KEY: &str = "$queryParameters";

/// Named values for one operation call.
///
/// A `null` value is treated the same as an absent one.
///
/// ## Examples
///
/// ```
/// use harbor_client::Params;
///
/// let params = Params::new()
///     .with("name", "lib")
///     .with("pageSize", 5)
///     .query("sort", "creation_time");
///
/// assert_eq!(params.get("pageSize"), Some(&serde_json::json!(5)));
/// assert!(params.get("owner").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: Map<String, Value>,
    extra_query: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a pass-through query pair.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_query.push((name.into(), value.into()));
        self
    }

    /// Inserts or replaces a named value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns the value for `name`, treating `null` as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    /// Names of all supplied values.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Pass-through query pairs in insertion order.
    pub fn extra_query(&self) -> &[(String, String)] {
        &self.extra_query
    }

    /// Returns `true` when no values and no pass-through pairs are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.extra_query.is_empty()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(mut values: Map<String, Value>) -> Self {
        let extra_query = match values.remove(QUERY_PARAMETERS_KEY) {
            Some(Value::Object(pairs)) => pairs
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), render_value(v)))
                .collect(),
            _ => Vec::new(),
        };
        Self {
            values,
            extra_query,
        }
    }
}

impl TryFrom<Value> for Params {
    type Error = HarborError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            Value::Null => Ok(Self::new()),
            other => Err(HarborError::invalid_parameter(
                "parameters",
                format!("expected a JSON object, got {other}"),
            )),
        }
    }
}

/// Renders a JSON value the way it appears in a path or query string.
///
/// Strings are unquoted, arrays are comma-joined, and objects are compact
/// JSON text.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Parses command-line text into a JSON value according to the parameter's kind.
///
/// ## Errors
///
/// Returns [`HarborError::InvalidParameter`] when the text does not parse as
/// the expected kind.
///
/// ## Examples
///
/// ```
/// use harbor_client::coerce_value;
/// use harbor_define::{Param, ParamKind};
///
/// let id = Param::path("id", "id", ParamKind::Integer, "Target ID");
/// assert_eq!(coerce_value(&id, "42").unwrap(), serde_json::json!(42));
/// assert!(coerce_value(&id, "forty-two").is_err());
/// ```
pub fn coerce_value(param: &Param, raw: &str) -> Result<Value, HarborError> {
    match param.kind {
        ParamKind::String => Ok(Value::String(raw.to_string())),
        ParamKind::Integer => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|e| HarborError::invalid_parameter(&param.name, e)),
        ParamKind::Boolean => raw
            .trim()
            .parse::<bool>()
            .map(Value::from)
            .map_err(|e| HarborError::invalid_parameter(&param.name, e)),
        ParamKind::Object => serde_json::from_str(raw)
            .map_err(|e| HarborError::invalid_parameter(&param.name, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_counts_as_absent() {
        let params = Params::new().with("id", Value::Null);
        assert!(params.get("id").is_none());
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn insert_replaces() {
        let mut params = Params::new().with("page", 1);
        params.insert("page", 2);
        assert_eq!(params.get("page"), Some(&json!(2)));
    }

    #[test]
    fn reserved_key_is_lifted_out_of_values() {
        let params = Params::try_from(json!({
            "projectId": 3,
            "$queryParameters": { "detail": true, "skip": null, "ids": [1, 2] }
        }))
        .unwrap();

        assert!(params.get(QUERY_PARAMETERS_KEY).is_none());
        assert_eq!(params.get("projectId"), Some(&json!(3)));
        assert!(params.extra_query().contains(&("detail".into(), "true".into())));
        assert!(params.extra_query().contains(&("ids".into(), "1,2".into())));
        assert_eq!(params.extra_query().len(), 2);
    }

    #[test]
    fn non_object_is_rejected() {
        let err = Params::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, HarborError::InvalidParameter { .. }));
        assert!(Params::try_from(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn render_scalars_and_collections() {
        assert_eq!(render_value(&json!("lib")), "lib");
        assert_eq!(render_value(&json!(5)), "5");
        assert_eq!(render_value(&json!(false)), "false");
        assert_eq!(render_value(&json!(["a", 1])), "a,1");
        assert_eq!(render_value(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn coerce_by_kind() {
        let name = Param::query("name", "name", ParamKind::String, "");
        let public = Param::query("public", "public", ParamKind::Boolean, "");
        let body = Param::body("project", "");

        assert_eq!(coerce_value(&name, "42").unwrap(), json!("42"));
        assert_eq!(coerce_value(&public, "true").unwrap(), json!(true));
        assert_eq!(
            coerce_value(&body, r#"{"project_name":"lib"}"#).unwrap(),
            json!({"project_name": "lib"})
        );
    }

    #[test]
    fn coerce_reports_the_parameter_name() {
        let public = Param::query("public", "public", ParamKind::Boolean, "");
        let err = coerce_value(&public, "yes").unwrap_err();
        assert!(err.to_string().starts_with("Invalid value for parameter public"));
    }
}
