//! Structural classification predicates.
//!
//! Classification is structural, not nominal: anything shaped like an error
//! counts as one, no matter which route manufactured it. Concretely the
//! predicates recognize two shapes:
//!
//! - any [`ErrorEntity`], including hand-assembled ones, and
//! - any [`serde_json::Value`] object exposing the canonical field names
//!   (`error_type`, `kind`, `message`, `reason`, `context`, `env`) with a
//!   `kind` drawn from the closed tag set — the recognition route for values
//!   decoded off the wire or built literally in tests.
//!
//! All predicates are pure, total over any `Any` value, allocation-free, and
//! constant-time in the size of the input, so they are safe to call inside
//! `match` guards.
//!
//! # Examples
//!
//! ```
//! use error_forge::{classify, define_error, params, ErrorDefinition};
//!
//! define_error! {
//!     pub OutOfStock { kind: Domain, message: "invalid order", reason: "out_of_stock" }
//! }
//!
//! let err = OutOfStock::new(params!());
//! assert!(classify::is_error(&err));
//! assert!(classify::is_domain_error(&err));
//! assert!(!classify::is_infrastructure_error(&err));
//! assert!(!classify::is_error(&42));
//! ```

use crate::types::{ErrorEntity, ErrorKind};
use serde_json::Value;
use std::any::Any;

/// Field names a JSON object must expose to be recognized as an error.
/// `error_type` is the marker; the rest mirror [`ErrorEntity`].
const REQUIRED_FIELDS: [&str; 6] = ["error_type", "kind", "message", "reason", "context", "env"];

/// `true` when `value` is error-shaped, whatever its kind.
#[inline]
pub fn is_error(value: &dyn Any) -> bool {
    kind_of(value).is_some()
}

/// `true` when `value` is error-shaped and of kind `domain`.
#[inline]
pub fn is_domain_error(value: &dyn Any) -> bool {
    matches!(kind_of(value), Some(ErrorKind::Domain))
}

/// `true` when `value` is error-shaped and of kind `infrastructure`.
#[inline]
pub fn is_infrastructure_error(value: &dyn Any) -> bool {
    matches!(kind_of(value), Some(ErrorKind::Infrastructure))
}

/// Extracts the kind of an error-shaped value; `None` for everything else.
///
/// There is no dedicated predicate for `general` errors; combine this with
/// [`ErrorKind::General`] when a caller needs that check.
#[inline]
pub fn kind_of(value: &dyn Any) -> Option<ErrorKind> {
    if let Some(entity) = value.downcast_ref::<ErrorEntity>() {
        return Some(entity.kind);
    }
    if let Some(decoded) = value.downcast_ref::<Value>() {
        return shape_kind(decoded);
    }
    None
}

/// Duck-typed check over a decoded value: the canonical field names must all
/// be present and `kind` must parse. Field values beyond `kind` are not
/// inspected.
fn shape_kind(value: &Value) -> Option<ErrorKind> {
    let object = value.as_object()?;
    if !REQUIRED_FIELDS.iter().all(|field| object.contains_key(*field)) {
        return None;
    }
    ErrorKind::parse(object.get("kind")?.as_str()?)
}
