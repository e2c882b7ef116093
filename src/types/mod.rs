//! The data model: error kinds, reasons, context values, call-site capture,
//! and the canonical [`ErrorEntity`] shape they assemble into.
//!
//! # Examples
//!
//! ```
//! use error_forge::{create, ctx, define_error};
//!
//! define_error! {
//!     pub StaleRead { kind: Infrastructure, message: "read from stale replica" }
//! }
//!
//! let err = create!(StaleRead, context: ctx! { "replica" => "eu-2" });
//! assert!(err.env.is_some());
//! println!("{}", err.to_json());
//! ```

pub mod context_value;
pub mod entity;
pub mod invocation;
pub mod kind;
pub mod reason;

pub use context_value::{Context, ContextValue, OpaqueValue};
pub use entity::{ErrorEntity, ErrorParams};
pub use invocation::InvocationContext;
pub use kind::ErrorKind;
pub use reason::Reason;
