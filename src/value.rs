//! Typed option values.
//!
//! Provides the value kinds an option default may take (string, integer,
//! none, list) and the bounded storage backing them. Values deserialize
//! from TOML override tables via a hand-written visitor.

use core::fmt;

use heapless::{String, Vec};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

use crate::error::ValueError;

/// Maximum length of a string value.
///
/// Values are stored inline (twice per option: default and override), so
/// this bound is kept small to keep whole-registry values stack-friendly.
pub const MAX_STR_LEN: usize = 32;

/// Maximum number of elements in a list value.
///
/// Same footprint constraint as [`MAX_STR_LEN`]: each slot inlines a
/// [`Scalar`].
pub const MAX_LIST_LEN: usize = 4;

/// The kind of a [`Value`], used for type checks against declared defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// String value
    Str,
    /// Integer value
    Int,
    /// Absent value (untyped option)
    None,
    /// Ordered list of scalars
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Str => write!(f, "string"),
            ValueKind::Int => write!(f, "integer"),
            ValueKind::None => write!(f, "none"),
            ValueKind::List => write!(f, "list"),
        }
    }
}

/// A list element: a bounded string or an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// String element
    Str(String<MAX_STR_LEN>),
    /// Integer element
    Int(i64),
}

impl Scalar {
    /// Create a string scalar.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::StringTooLong` if the string exceeds [`MAX_STR_LEN`].
    pub fn str(s: &str) -> Result<Self, ValueError> {
        String::try_from(s)
            .map(Scalar::Str)
            .map_err(|_| ValueError::StringTooLong)
    }

    /// Create an integer scalar.
    #[inline]
    pub const fn int(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "'{}'", s),
            Scalar::Int(v) => write!(f, "{}", v),
        }
    }
}

/// A typed option value: default or override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// String value
    Str(String<MAX_STR_LEN>),
    /// Integer value
    Int(i64),
    /// Absent value
    None,
    /// Ordered list of scalars (max [`MAX_LIST_LEN`])
    List(Vec<Scalar, MAX_LIST_LEN>),
}

impl Value {
    /// Create an empty string value.
    #[inline]
    pub const fn empty_str() -> Self {
        Value::Str(String::new())
    }

    /// Create a string value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::StringTooLong` if the string exceeds [`MAX_STR_LEN`].
    pub fn str(s: &str) -> Result<Self, ValueError> {
        String::try_from(s)
            .map(Value::Str)
            .map_err(|_| ValueError::StringTooLong)
    }

    /// Create an integer value.
    #[inline]
    pub const fn int(v: i64) -> Self {
        Value::Int(v)
    }

    /// Create an absent value.
    #[inline]
    pub const fn none() -> Self {
        Value::None
    }

    /// Create an empty list value.
    #[inline]
    pub const fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    /// Create a list value from a slice of scalars.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::ListTooLong` if the slice exceeds [`MAX_LIST_LEN`].
    pub fn list(items: &[Scalar]) -> Result<Self, ValueError> {
        let mut vec: Vec<Scalar, MAX_LIST_LEN> = Vec::new();
        for item in items {
            vec.push(item.clone()).map_err(|_| ValueError::ListTooLong)?;
        }
        Ok(Value::List(vec))
    }

    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::None => ValueKind::None,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Check whether a value of `other`'s kind may override a default of
    /// this value's kind.
    ///
    /// A `None` default leaves the option untyped and accepts any kind.
    pub fn accepts(&self, other: &Value) -> bool {
        self.kind() == ValueKind::None || self.kind() == other.kind()
    }

    /// Check if this value is absent.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Get the integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the list elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "'{}'", s),
            Value::Int(v) => write!(f, "{}", v),
            Value::None => write!(f, "none"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
                i64::try_from(v)
                    .map(Scalar::Int)
                    .map_err(|_| E::custom("integer out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
                String::try_from(v)
                    .map(Scalar::Str)
                    .map_err(|_| E::custom("string value too long"))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, integer, or list of scalars")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
                Ok(Value::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
                i64::try_from(v)
                    .map(Value::Int)
                    .map_err(|_| E::custom("integer out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
                String::try_from(v)
                    .map(Value::Str)
                    .map_err(|_| E::custom("string value too long"))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
                Ok(Value::None)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
                let mut items: Vec<Scalar, MAX_LIST_LEN> = Vec::new();
                while let Some(item) = seq.next_element::<Scalar>()? {
                    items
                        .push(item)
                        .map_err(|_| de::Error::custom("list value too long"))?;
                }
                Ok(Value::List(items))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
