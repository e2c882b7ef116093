//! Macros for defining error types and constructing their values.
//!
//! - [`define_error!`](crate::define_error) - declares a named error type
//!   with a fixed kind and optional default message/reason.
//! - [`params!`](crate::params) - builds construction parameters, dropping
//!   unrecognized keys instead of rejecting them.
//! - [`ctx!`](crate::ctx) - builds a context mapping from `key => value`
//!   pairs.
//! - [`capture!`](crate::capture) - snapshots the current call site
//!   (module, function, file, line, stack trace).
//! - [`create!`](crate::create) - context-capturing construction; expands at
//!   the call site so the *caller's* location lands in `env`.
//! - [`fail!`](crate::fail) - early-returns a bare-constructed error, the
//!   raise-side twin of `new`.
//!
//! # Examples
//!
//! ```
//! use error_forge::{create, ctx, define_error, fail, ErrorDefinition, ErrorEntity};
//!
//! define_error! {
//!     pub PaymentDeclined { kind: Domain, message: "payment declined", reason: "card" }
//! }
//!
//! fn charge(amount: u32) -> Result<(), ErrorEntity> {
//!     if amount > 100 {
//!         fail!(PaymentDeclined, reason: "over_limit");
//!     }
//!     Ok(())
//! }
//!
//! let err = charge(250).unwrap_err();
//! assert_eq!(err.format_message(), "payment declined: over_limit");
//!
//! let traced = create!(PaymentDeclined, context: ctx! { "order" => 17 });
//! assert!(traced.env.is_some());
//! ```

/// Declares a named error type with a fixed kind and optional defaults.
///
/// Expands to a unit struct implementing
/// [`ErrorDefinition`](crate::define::ErrorDefinition). The kind must be one
/// of the idents `Domain`, `Infrastructure`, or `General`; anything else
/// fails to compile, which makes engine misuse a definition-time error.
///
/// # Syntax
///
/// ```text
/// define_error! {
///     /// Optional doc comment.
///     pub TypeName {
///         kind: Domain | Infrastructure | General,
///         message: "default message",   // optional
///         reason: "default_reason",     // optional
///     }
/// }
/// ```
///
/// # Examples
///
/// ```
/// use error_forge::{define_error, params, ErrorDefinition, ErrorKind};
///
/// define_error! {
///     /// Catch-all for unclassified failures.
///     pub Unexpected { kind: General, message: "unexpected error" }
/// }
///
/// let err = Unexpected::new(params!());
/// assert_eq!(err.kind, ErrorKind::General);
/// assert_eq!(err.reason, None);
/// ```
#[macro_export]
macro_rules! define_error {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            kind: $kind:ident
            $(, message: $message:expr)?
            $(, reason: $reason:expr)?
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::define::ErrorDefinition for $name {
            const NAME: &'static str = stringify!($name);
            const KIND: $crate::types::ErrorKind = $crate::__error_kind!($kind);
            const DEFAULT_MESSAGE: Option<&'static str> = $crate::__opt_str!($($message)?);
            const DEFAULT_REASON: Option<&'static str> = $crate::__opt_str!($($reason)?);
        }
    };
}

/// Maps a kind ident to [`ErrorKind`](crate::types::ErrorKind). No arm for
/// anything outside the closed set, so an unknown tag is a compile error.
#[macro_export]
#[doc(hidden)]
macro_rules! __error_kind {
    (Domain) => {
        $crate::types::ErrorKind::Domain
    };
    (Infrastructure) => {
        $crate::types::ErrorKind::Infrastructure
    };
    (General) => {
        $crate::types::ErrorKind::General
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __opt_str {
    () => {
        None
    };
    ($value:expr) => {
        Some($value)
    };
}

/// Builds [`ErrorParams`](crate::types::ErrorParams) from `key: value` pairs.
///
/// The recognized keys are `message`, `reason`, and `context`. Unrecognized
/// keys are evaluated and dropped, never an error, so caller input shapes
/// can grow ahead of the definitions consuming them.
///
/// # Examples
///
/// ```
/// use error_forge::params;
///
/// let p = params!(reason: "timeout", deadline: "ignored");
/// assert_eq!(p.reason.as_ref().map(|r| r.as_str()), Some("timeout"));
/// assert_eq!(p.message, None);
/// ```
#[macro_export]
macro_rules! params {
    ($($key:ident: $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut __params = $crate::types::ErrorParams::default();
        $( $crate::__set_param!(__params, $key, $value); )*
        __params
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __set_param {
    ($params:ident, message, $value:expr) => {
        $params.message = Some($value.into());
    };
    ($params:ident, reason, $value:expr) => {
        $params.reason = Some($crate::types::Reason::new($value));
    };
    ($params:ident, context, $value:expr) => {
        $params.context = Some($value);
    };
    // Unrecognized key: evaluate for side effects, then drop.
    ($params:ident, $unknown:ident, $value:expr) => {
        let _ = $value;
    };
}

/// Builds a [`Context`](crate::types::Context) mapping from `key => value`
/// pairs; values go through [`ContextValue::from`](crate::types::ContextValue).
///
/// # Examples
///
/// ```
/// use error_forge::{ctx, ContextValue};
///
/// let context = ctx! {
///     "sku" => "A1",
///     "attempt" => 3,
///     "socket" => ContextValue::opaque("raw handle"),
/// };
/// assert_eq!(context.len(), 3);
/// ```
#[macro_export]
macro_rules! ctx {
    () => {
        $crate::types::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut __context = $crate::types::Context::new();
        $(
            __context.insert(
                ::std::string::String::from($key),
                $crate::types::ContextValue::from($value),
            );
        )+
        __context
    }};
}

/// Snapshots the current call site as an
/// [`InvocationContext`](crate::types::InvocationContext).
///
/// Expands in the caller's scope: `module_path!()`, `file!()`, `line!()`,
/// and a local probe function supply the location, and the current thread's
/// stack is rendered unless invoked as `capture!(false)`.
///
/// # Examples
///
/// ```
/// use error_forge::capture;
///
/// let env = capture!();
/// assert!(env.stacktrace.is_some());
///
/// let bare = capture!(false);
/// assert!(bare.stacktrace.is_none());
/// ```
#[macro_export]
macro_rules! capture {
    () => {
        $crate::capture!(true)
    };
    ($with_stacktrace:expr) => {{
        fn __probe() {}
        $crate::types::InvocationContext::capture(
            module_path!(),
            ::std::any::type_name_of_val(&__probe),
            file!(),
            line!(),
            $with_stacktrace,
        )
    }};
}

/// Context-capturing construction.
///
/// Identical field filling to `new`, plus a [`capture!`](crate::capture)
/// of the call site assigned to `env`. Must stay a macro: a plain function
/// would record the engine's own location instead of the caller's.
///
/// # Examples
///
/// ```
/// use error_forge::{create, ctx, define_error};
///
/// define_error! {
///     pub ReplayDetected { kind: Domain, message: "replay detected", reason: "nonce_reuse" }
/// }
///
/// let err = create!(ReplayDetected, context: ctx! { "nonce" => "9f2c" });
/// let env = err.env.as_ref().unwrap();
/// assert_eq!(env.file, file!());
/// ```
#[macro_export]
macro_rules! create {
    ($ty:ty $(, $key:ident: $value:expr)* $(,)?) => {{
        <$ty as $crate::define::ErrorDefinition>::build(
            $crate::params!($($key: $value),*),
            Some($crate::capture!()),
        )
    }};
}

/// Early-returns `Err` with a bare-constructed error.
///
/// The raise-side path routes through the same construction as `new`, so a
/// raised error and a returned one are structurally identical. The entity is
/// passed through `.into()`, which also covers `Result` signatures whose
/// error type converts from [`ErrorEntity`](crate::types::ErrorEntity).
///
/// # Examples
///
/// ```
/// use error_forge::{define_error, fail, ErrorEntity};
///
/// define_error! {
///     pub VaultSealed { kind: Infrastructure, message: "vault is sealed" }
/// }
///
/// fn read_secret() -> Result<String, ErrorEntity> {
///     fail!(VaultSealed, reason: "startup");
/// }
///
/// assert!(read_secret().unwrap_err().is_infrastructure());
/// ```
#[macro_export]
macro_rules! fail {
    ($ty:ty $(, $key:ident: $value:expr)* $(,)?) => {
        return Err(
            <$ty as $crate::define::ErrorDefinition>::new(
                $crate::params!($($key: $value),*),
            )
            .into(),
        )
    };
}
