//! The error definition engine.
//!
//! A definition is a compile-time artifact: a unit struct produced by
//! [`define_error!`](crate::define_error) that binds a name to a fixed
//! [`ErrorKind`] and optional default message/reason. The runtime value is
//! always a plain [`ErrorEntity`]; the definition only drives how its fields
//! are filled. Misusing the engine (an unknown kind tag) is rejected when the
//! macro expands, never at runtime, and runtime construction is total: it
//! only fills defaults.
//!
//! # Examples
//!
//! ```
//! use error_forge::{create, define_error, params, ErrorDefinition};
//!
//! define_error! {
//!     /// The order cannot be fulfilled.
//!     pub InvalidOrder {
//!         kind: Domain,
//!         message: "invalid order",
//!         reason: "out_of_stock",
//!     }
//! }
//!
//! // Bare construction: no invocation context.
//! let bare = InvalidOrder::new(params!(reason: "discontinued"));
//! assert_eq!(bare.format_message(), "invalid order: discontinued");
//! assert!(bare.env.is_none());
//!
//! // Context-capturing construction records this call site.
//! let full = create!(InvalidOrder);
//! assert!(full.env.is_some());
//! ```

use crate::types::{ErrorEntity, ErrorKind, ErrorParams, InvocationContext, Reason};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Behavior shared by every generated error definition.
///
/// Implementations come from [`define_error!`](crate::define_error); the
/// provided methods are the engine. `new` is bare construction; the
/// [`create!`](crate::create) macro routes through [`build`](Self::build)
/// with a call-site capture.
pub trait ErrorDefinition {
    /// Name of the definition, recorded as the entity's `error_type`.
    const NAME: &'static str;
    /// Fixed classification of every value this definition produces.
    const KIND: ErrorKind;
    /// Message used when construction params carry none.
    const DEFAULT_MESSAGE: Option<&'static str>;
    /// Reason used when construction params carry none.
    const DEFAULT_REASON: Option<&'static str>;

    /// Bare construction: fills `message`/`reason` from `params`, falling
    /// back to the definition's defaults; `env` is always `None`.
    #[inline]
    fn new(params: ErrorParams) -> ErrorEntity {
        Self::build(params, None)
    }

    /// Shared field-filling for both construction tiers. Callers other than
    /// [`new`](Self::new) and the [`create!`](crate::create) expansion have
    /// no reason to use this directly.
    fn build(params: ErrorParams, env: Option<InvocationContext>) -> ErrorEntity {
        ErrorEntity {
            error_type: Cow::Borrowed(Self::NAME),
            kind: Self::KIND,
            message: params.message.or(Self::DEFAULT_MESSAGE.map(Cow::Borrowed)),
            reason: params.reason.or(Self::DEFAULT_REASON.map(Reason::new)),
            context: params.context,
            env,
        }
    }

    /// Plain serializable mapping of an entity; delegates to
    /// [`serialize::to_map`](crate::serialize::to_map).
    #[inline]
    fn to_map(entity: &ErrorEntity) -> Map<String, Value> {
        crate::serialize::to_map(entity)
    }

    /// JSON rendering of an entity; delegates to
    /// [`serialize::to_json`](crate::serialize::to_json) and never fails.
    #[inline]
    fn to_json(entity: &ErrorEntity) -> String {
        crate::serialize::to_json(entity)
    }
}
