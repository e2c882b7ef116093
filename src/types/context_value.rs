//! Values carried in an error's free-form context mapping.
//!
//! Context entries are arbitrary metadata. Most of the time they are plain
//! scalars, sequences, or nested maps, all of which encode cleanly. Values
//! that a data-interchange encoder cannot represent (live handles, channel
//! ends, lock guards) are attached through the [`ContextValue::Opaque`]
//! variant, which keeps the original value for in-process inspection and
//! falls back to its `Debug` rendering whenever the context is serialized.

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Free-form metadata mapping attached to one error instance.
///
/// Keys are `String` by construction, so the question of non-string context
/// keys never arises at runtime.
pub type Context = BTreeMap<String, ContextValue>;

/// Marker for values attachable as opaque context entries.
///
/// Blanket-implemented for everything `Debug + Send + Sync + 'static`, so any
/// debuggable value can ride along in an error's context.
pub trait OpaqueValue: fmt::Debug + Send + Sync + 'static {}

impl<T: fmt::Debug + Send + Sync + 'static> OpaqueValue for T {}

/// One value slot in an error context.
///
/// # Examples
///
/// ```
/// use error_forge::ContextValue;
///
/// let encodable = ContextValue::from(42);
/// assert!(encodable.is_encodable());
///
/// let handle = ContextValue::opaque(std::time::Instant::now());
/// assert!(!handle.is_encodable());
/// ```
#[derive(Clone)]
pub enum ContextValue {
    /// Explicit absence.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered sequence of nested values.
    Seq(Vec<ContextValue>),
    /// Nested string-keyed mapping.
    Map(BTreeMap<String, ContextValue>),
    /// A value the target encoding cannot represent; serialized as its
    /// `Debug` rendering.
    Opaque(Arc<dyn OpaqueValue>),
}

impl ContextValue {
    /// Wraps an arbitrary debuggable value as an opaque context entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_forge::ContextValue;
    ///
    /// let value = ContextValue::opaque(vec![0u8; 4]);
    /// assert_eq!(format!("{:?}", value), "[0, 0, 0, 0]");
    /// ```
    #[inline]
    pub fn opaque<T: OpaqueValue>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Returns `true` when the value (recursively) contains nothing the
    /// target encoding would reject.
    pub fn is_encodable(&self) -> bool {
        match self {
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::String(_) => true,
            Self::Float(f) => f.is_finite(),
            Self::Seq(items) => items.iter().all(Self::is_encodable),
            Self::Map(entries) => entries.values().all(Self::is_encodable),
            Self::Opaque(_) => false,
        }
    }
}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => b.fmt(f),
            Self::Int(i) => i.fmt(f),
            Self::Float(x) => x.fmt(f),
            Self::String(s) => s.fmt(f),
            Self::Seq(items) => items.fmt(f),
            Self::Map(entries) => entries.fmt(f),
            Self::Opaque(value) => value.fmt(f),
        }
    }
}

/// Opaque values compare by identity; everything else compares by content.
impl PartialEq for ContextValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for ContextValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(x) if x.is_finite() => serializer.serialize_f64(*x),
            // Non-finite floats would encode as null and lose information;
            // their display form is more useful in a diagnostic payload.
            Self::Float(x) => serializer.collect_str(x),
            Self::String(s) => serializer.serialize_str(s),
            Self::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Opaque(value) => serializer.collect_str(&format_args!("{value:?}")),
        }
    }
}

impl<'de> Deserialize<'de> for ContextValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = ContextValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("any encodable context value")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ContextValue::Null)
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
                Ok(ContextValue::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ContextValue::Int(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v)
                    .map(ContextValue::Int)
                    .or(Ok(ContextValue::Float(v as f64)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ContextValue::Float(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ContextValue::String(v.to_owned()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
                Ok(ContextValue::String(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(ContextValue::Seq(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();
                while let Some((key, value)) = map.next_entry::<String, ContextValue>()? {
                    entries.insert(key, value);
                }
                Ok(ContextValue::Map(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for ContextValue {
    #[inline]
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ContextValue {
    #[inline]
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for ContextValue {
    #[inline]
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for ContextValue {
    #[inline]
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for ContextValue {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ContextValue {
    #[inline]
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for ContextValue {
    #[inline]
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<V: Into<ContextValue>> From<Vec<V>> for ContextValue {
    fn from(items: Vec<V>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<ContextValue>> From<BTreeMap<String, V>> for ContextValue {
    fn from(entries: BTreeMap<String, V>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
