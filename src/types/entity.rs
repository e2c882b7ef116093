//! The canonical error value shape.
//!
//! Every error produced by this crate, whatever definition built it, is an
//! [`ErrorEntity`]: kind + message + reason + context + invocation context.
//! The fields are public on purpose. Classification is structural, so values
//! assembled by hand (most often in tests) are every bit as much an error as
//! values built through a definition.

use crate::types::{Context, ErrorKind, InvocationContext, Reason};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt::Display;

/// Construction parameters accepted by `new`, [`create!`](crate::create),
/// and [`fail!`](crate::fail).
///
/// Usually built with the [`params!`](crate::params) macro, which also drops
/// unrecognized keys so caller input shapes can grow without breaking older
/// definitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorParams {
    /// Overrides the definition's default message.
    pub message: Option<Cow<'static, str>>,
    /// Overrides the definition's default reason.
    pub reason: Option<Reason>,
    /// Metadata attached to this instance.
    pub context: Option<Context>,
}

/// A structured error value.
///
/// Entities are created exactly once, at the detection site, and never
/// mutated afterwards. Cloning is cheap and clones are safe to hand to other
/// threads.
///
/// # Examples
///
/// ```
/// use error_forge::{define_error, params, ErrorDefinition};
///
/// define_error! {
///     /// The upstream quota service said no.
///     pub QuotaExceeded {
///         kind: Infrastructure,
///         message: "quota exceeded",
///         reason: "limit_reached",
///     }
/// }
///
/// let err = QuotaExceeded::new(params!());
/// assert_eq!(err.format_message(), "quota exceeded: limit_reached");
/// assert!(err.is_infrastructure());
/// assert!(err.env.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEntity {
    /// Name of the definition that produced this value. Doubles as the error
    /// marker in the serialized shape.
    pub error_type: Cow<'static, str>,
    /// Fixed classification of the producing definition.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: Option<Cow<'static, str>>,
    /// Machine-matchable discriminator.
    pub reason: Option<Reason>,
    /// Free-form instance metadata.
    pub context: Option<Context>,
    /// Call-site snapshot, present only for context-capturing construction.
    pub env: Option<InvocationContext>,
}

impl ErrorEntity {
    /// Renders the display form: `"<message>"`, or `"<message>: <reason>"`
    /// when a reason is present. The format is uniform across all kinds so
    /// logs and traces stay greppable.
    ///
    /// # Panics
    ///
    /// Panics when `message` is `None`. Formatting a message-less error is a
    /// contract violation by the definition (it configured no default and the
    /// caller supplied none), not a runtime condition to recover from.
    pub fn format_message(&self) -> String {
        let message = self
            .message
            .as_deref()
            .expect("error entity has no message to format");
        match &self.reason {
            Some(reason) => format!("{message}: {reason}"),
            None => message.to_owned(),
        }
    }

    /// `true` when this entity is of kind [`ErrorKind::Domain`].
    #[inline]
    pub const fn is_domain(&self) -> bool {
        matches!(self.kind, ErrorKind::Domain)
    }

    /// `true` when this entity is of kind [`ErrorKind::Infrastructure`].
    #[inline]
    pub const fn is_infrastructure(&self) -> bool {
        matches!(self.kind, ErrorKind::Infrastructure)
    }

    /// `true` when this entity is of kind [`ErrorKind::General`].
    #[inline]
    pub const fn is_general(&self) -> bool {
        matches!(self.kind, ErrorKind::General)
    }

    /// Plain serializable mapping of this entity.
    /// See [`serialize::to_map`](crate::serialize::to_map).
    #[inline]
    pub fn to_map(&self) -> Map<String, Value> {
        crate::serialize::to_map(self)
    }

    /// JSON rendering of [`to_map`](Self::to_map); never fails.
    #[inline]
    pub fn to_json(&self) -> String {
        crate::serialize::to_json(self)
    }
}

/// Hand-built entities start as an anonymous `general` error with every
/// optional field empty.
impl Default for ErrorEntity {
    fn default() -> Self {
        Self {
            error_type: Cow::Borrowed("error"),
            kind: ErrorKind::General,
            message: None,
            reason: None,
            context: None,
            env: None,
        }
    }
}

impl Display for ErrorEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_message())
    }
}

impl std::error::Error for ErrorEntity {}
