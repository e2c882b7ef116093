//! Conversion of error entities to plain, always-encodable mappings.
//!
//! The adapter guarantees totality: whatever lives in an entity's context,
//! [`to_map`] yields a mapping every JSON encoder accepts and [`to_json`]
//! never fails. Fidelity is traded for that guarantee — opaque context
//! values come out as their `Debug` strings.
//!
//! # Examples
//!
//! ```
//! use error_forge::{ctx, define_error, params, ContextValue, ErrorDefinition};
//!
//! define_error! {
//!     pub UploadFailed { kind: Infrastructure, message: "upload failed", reason: "io" }
//! }
//!
//! let err = UploadFailed::new(params!(context: ctx! {
//!     "bucket" => "media",
//!     "handle" => ContextValue::opaque(std::time::Duration::from_secs(3)),
//! }));
//!
//! let map = err.to_map();
//! assert_eq!(map["message"], "upload failed");
//! assert_eq!(map["context"]["bucket"], "media");
//! assert_eq!(map["context"]["handle"], "3s");
//! ```

use crate::types::{Context, ContextValue, ErrorEntity, InvocationContext};
use serde_json::{Map, Number, Value};

/// Produces the plain mapping form of an entity:
/// `{error_type, reason, message, env, context}`.
///
/// `env` comes from [`InvocationContext::to_plain_map`] (empty when absent,
/// stack trace always omitted) and `context` from [`sanitize`].
pub fn to_map(entity: &ErrorEntity) -> Map<String, Value> {
    let mut map = Map::with_capacity(5);
    map.insert(
        "error_type".to_owned(),
        Value::String(entity.error_type.clone().into_owned()),
    );
    map.insert(
        "reason".to_owned(),
        entity
            .reason
            .as_ref()
            .map_or(Value::Null, |r| Value::String(r.as_str().to_owned())),
    );
    map.insert(
        "message".to_owned(),
        entity
            .message
            .as_deref()
            .map_or(Value::Null, |m| Value::String(m.to_owned())),
    );
    map.insert(
        "env".to_owned(),
        Value::Object(InvocationContext::to_plain_map(entity.env.as_ref())),
    );
    map.insert(
        "context".to_owned(),
        Value::Object(sanitize(entity.context.as_ref())),
    );
    map
}

/// Converts a context to an always-encodable mapping.
///
/// An absent context yields an empty mapping. Present entries are kept
/// as-is when encodable and replaced by their `Debug` rendering otherwise,
/// recursively through sequences and nested maps.
pub fn sanitize(context: Option<&Context>) -> Map<String, Value> {
    context
        .map(|entries| {
            entries
                .iter()
                .map(|(key, value)| (key.clone(), sanitize_value(value)))
                .collect()
        })
        .unwrap_or_default()
}

fn sanitize_value(value: &ContextValue) -> Value {
    match value {
        ContextValue::Null => Value::Null,
        ContextValue::Bool(b) => Value::Bool(*b),
        ContextValue::Int(i) => Value::Number((*i).into()),
        ContextValue::Float(x) => Number::from_f64(*x)
            .map(Value::Number)
            // NaN and infinities have no JSON form; stringify like any other
            // non-encodable value.
            .unwrap_or_else(|| Value::String(x.to_string())),
        ContextValue::String(s) => Value::String(s.clone()),
        ContextValue::Seq(items) => Value::Array(items.iter().map(sanitize_value).collect()),
        ContextValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), sanitize_value(value)))
                .collect(),
        ),
        ContextValue::Opaque(inner) => Value::String(format!("{inner:?}")),
    }
}

/// JSON rendering of [`to_map`]'s output.
///
/// Sanitization has already removed everything an encoder could choke on,
/// and rendering a `serde_json::Value` is itself infallible, so this returns
/// `String` rather than a `Result`.
#[inline]
pub fn to_json(entity: &ErrorEntity) -> String {
    Value::Object(to_map(entity)).to_string()
}
