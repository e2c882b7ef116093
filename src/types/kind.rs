use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Classification tag shared by every error definition.
///
/// The kind is fixed when a type is defined with
/// [`define_error!`](crate::define_error) and never changes per instance.
///
/// # Examples
///
/// ```
/// use error_forge::ErrorKind;
///
/// assert_eq!(ErrorKind::Domain.as_str(), "domain");
/// assert_eq!(ErrorKind::parse("infrastructure"), Some(ErrorKind::Infrastructure));
/// assert_eq!(ErrorKind::parse("network"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Business-rule failures: the request was understood but cannot be honored.
    Domain,
    /// Failures of collaborating systems: databases, queues, remote services.
    Infrastructure,
    /// Everything that fits neither of the above.
    General,
}

impl ErrorKind {
    /// Returns the lowercase tag used in serialized output.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Infrastructure => "infrastructure",
            Self::General => "general",
        }
    }

    /// Parses a lowercase tag back into a kind.
    ///
    /// Returns `None` for anything outside the closed set, which is what the
    /// structural classification predicates rely on when inspecting decoded
    /// values.
    #[inline]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "domain" => Some(Self::Domain),
            "infrastructure" => Some(Self::Infrastructure),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
