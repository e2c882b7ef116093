//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_forge::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`define_error!`], [`params!`], [`ctx!`], [`create!`],
//!   [`capture!`], [`fail!`]
//! - **Types**: [`ErrorEntity`], [`ErrorKind`], [`Reason`], [`ContextValue`],
//!   [`Context`], [`ErrorParams`], [`InvocationContext`]
//! - **Traits**: [`ErrorDefinition`]
//! - **Predicates**: [`is_error`], [`is_domain_error`], [`is_infrastructure_error`]
//!
//! # Examples
//!
//! ```
//! use error_forge::prelude::*;
//!
//! define_error! {
//!     pub BadHandle { kind: General, message: "bad handle" }
//! }
//!
//! fn open(path: &str) -> Result<(), ErrorEntity> {
//!     if path.is_empty() {
//!         fail!(BadHandle, reason: "empty_path");
//!     }
//!     Ok(())
//! }
//!
//! let err = open("").unwrap_err();
//! assert!(is_error(&err));
//! ```

// Macros
pub use crate::{capture, create, ctx, define_error, fail, params};

// Core types
pub use crate::types::{
    Context, ContextValue, ErrorEntity, ErrorKind, ErrorParams, InvocationContext, Reason,
};

// The engine trait
pub use crate::define::ErrorDefinition;

// Guard-safe predicates
pub use crate::classify::{is_domain_error, is_error, is_infrastructure_error, kind_of};

/// Result alias for functions whose failure side is a structured entity.
///
/// # Examples
///
/// ```
/// use error_forge::prelude::*;
///
/// define_error! {
///     pub NoSuchUser { kind: Domain, message: "no such user" }
/// }
///
/// fn lookup(id: u64) -> ForgeResult<String> {
///     if id == 0 {
///         fail!(NoSuchUser, reason: "zero_id");
///     }
///     Ok(format!("user-{id}"))
/// }
/// ```
pub type ForgeResult<T> = Result<T, crate::types::ErrorEntity>;
