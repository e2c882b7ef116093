//! Named, uniformly shaped error definitions.
//!
//! Every error defined through this crate carries the same five-field shape:
//! a fixed classification kind (`domain` / `infrastructure` / `general`), a
//! human-readable message, a machine-matchable reason code, a free-form
//! context mapping, and optionally a snapshot of the call site it was created
//! at. Definitions are declared once with [`define_error!`]; values are plain
//! [`ErrorEntity`] structs usable as `Err` returns or through `?` like any
//! `std::error::Error`.
//!
//! # Examples
//!
//! ## Defining and constructing
//!
//! ```
//! use error_forge::prelude::*;
//!
//! define_error! {
//!     /// An order that cannot be fulfilled as requested.
//!     pub InvalidOrder {
//!         kind: Domain,
//!         message: "invalid order",
//!         reason: "out_of_stock",
//!     }
//! }
//!
//! // Bare construction: defaults fill in, no call-site capture.
//! let bare = InvalidOrder::new(params!());
//! assert_eq!(bare.format_message(), "invalid order: out_of_stock");
//! assert!(bare.env.is_none());
//!
//! // Context-capturing construction records this exact location.
//! let traced = create!(InvalidOrder, context: ctx! { "sku" => "A1" });
//! assert!(traced.env.is_some());
//! assert!(is_domain_error(&traced));
//! ```
//!
//! ## Serialization never fails
//!
//! ```
//! use error_forge::prelude::*;
//!
//! define_error! {
//!     pub PoolExhausted { kind: Infrastructure, message: "pool exhausted" }
//! }
//!
//! // A live handle has no JSON form; it is stringified, not rejected.
//! let err = PoolExhausted::new(params!(context: ctx! {
//!     "pool" => "pg-main",
//!     "guard" => ContextValue::opaque(std::time::Duration::from_secs(1)),
//! }));
//! let json = err.to_json();
//! assert!(json.contains("\"pool\":\"pg-main\""));
//! ```

/// Structural classification predicates, safe inside `match` guards.
pub mod classify;
/// The error definition engine: [`ErrorDefinition`] and its construction tiers.
pub mod define;
/// Macros for defining error types and constructing their values.
pub mod macros;
/// Convenience re-exports for quick starts.
pub mod prelude;
/// Conversion of entities to plain, always-encodable mappings.
pub mod serialize;
/// The data model: kinds, reasons, context values, call-site capture, entities.
pub mod types;

/// Structured logging of entities via `tracing` (requires the `tracing` feature).
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use classify::{is_domain_error, is_error, is_infrastructure_error, kind_of};
pub use define::ErrorDefinition;
pub use serialize::{sanitize, to_json, to_map};
pub use types::{
    Context, ContextValue, ErrorEntity, ErrorKind, ErrorParams, InvocationContext, OpaqueValue,
    Reason,
};
