use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;

/// Machine-matchable code distinguishing causes within one error type.
///
/// A reason is a short snake_case discriminator such as `out_of_stock` or
/// `connection_refused`. It renders as the bare code, both on its own and as
/// the `": <reason>"` suffix of a formatted error message.
///
/// # Examples
///
/// ```
/// use error_forge::Reason;
///
/// let reason = Reason::new("out_of_stock");
/// assert_eq!(reason.as_str(), "out_of_stock");
/// assert_eq!(reason.to_string(), "out_of_stock");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reason(Cow<'static, str>);

impl Reason {
    /// Creates a reason from any string-like code.
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(code: S) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Reason {
    #[inline]
    fn from(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }
}

impl From<String> for Reason {
    #[inline]
    fn from(code: String) -> Self {
        Self(Cow::Owned(code))
    }
}
