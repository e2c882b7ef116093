//! Structured logging of error entities via `tracing` (requires the
//! `tracing` feature).
//!
//! Emission is deliberately the only logging surface: the crate shapes error
//! values, it does not own a logging policy.

use crate::types::ErrorEntity;

/// Extension trait emitting an entity as a structured `tracing` event.
pub trait ErrorEntityExt {
    /// Logs the entity at `ERROR` level with its fields broken out, and
    /// returns it so the call chains into a `return Err(...)` or `?` path.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_forge::{create, define_error};
    /// use error_forge::tracing_ext::ErrorEntityExt;
    ///
    /// define_error! {
    ///     pub SyncLagged { kind: Infrastructure, message: "replica lag", reason: "lag" }
    /// }
    ///
    /// let err = create!(SyncLagged);
    /// err.emit();
    /// ```
    fn emit(&self) -> &Self;
}

impl ErrorEntityExt for ErrorEntity {
    fn emit(&self) -> &Self {
        tracing::error!(
            error_type = %self.error_type,
            kind = %self.kind,
            error_message = self.message.as_deref(),
            reason = self.reason.as_ref().map(|r| r.as_str()),
            file_line = self.env.as_ref().map(|env| env.file_line()),
            "error raised"
        );
        self
    }
}
