// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Loosely-typed column values.
//!
//! A [`Value`] is what a row hands out for a column before the target field
//! decides what it wants. Conversion into concrete Rust types goes through
//! [`FromValue`], which is the only coercion layer generated factories rely
//! on.
//!
//! # Conversion Table
//!
//! | Target | Accepted variants |
//! |--------|-------------------|
//! | `bool` | `Bool` |
//! | `i8` .. `i128`, `u8` .. `u128` | `Int`, `Uint` (range checked) |
//! | `f32`, `f64` | `Float`, `Int`, `Uint` |
//! | `String` | `Text` |
//! | `Vec<u8>` | `Bytes` |
//! | `Option<T>` | `Null` as `None`, anything else through `T` |
//! | `Value` | everything |

use thiserror::Error;

/// Single column value as produced by a tabular data source.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// SQL `NULL` or an absent cell.
    #[default]
    Null,

    /// Boolean.
    Bool(bool),

    /// Signed integer.
    Int(i64),

    /// Unsigned integer.
    Uint(u64),

    /// Floating point number.
    Float(f64),

    /// UTF-8 text.
    Text(String),

    /// Raw bytes.
    Bytes(Vec<u8>)
}

impl Value {
    /// Name of the variant, used in conversion errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes"
        }
    }

    /// Check if this is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Failure to convert a [`Value`] into a Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value has a variant the target type does not accept.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Target type name.
        expected: &'static str,
        /// Variant name of the value.
        found:    &'static str
    },

    /// The value is numeric but does not fit the target type.
    #[error("value {value} is out of range for {target}")]
    OutOfRange {
        /// Rendered source value.
        value:  String,
        /// Target type name.
        target: &'static str
    }
}

impl ValueError {
    fn mismatch(expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.kind()
        }
    }

    fn out_of_range(value: impl ToString, target: &'static str) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            target
        }
    }
}

/// Conversion from a loosely-typed [`Value`].
///
/// Implement this for custom field types to make them assignable from a row.
///
/// # Example
///
/// ```rust
/// use rowmap_core::{FromValue, Value, ValueError};
///
/// struct Email(String);
///
/// impl FromValue for Email {
///     fn from_value(value: Value) -> Result<Self, ValueError> {
///         String::from_value(value).map(Email)
///     }
/// }
///
/// let email = Email::from_value(Value::Text("a@b.c".into())).unwrap();
/// assert_eq!(email.0, "a@b.c");
/// ```
pub trait FromValue: Sized {
    /// Convert the value, or report why it does not fit.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when the variant or range is not accepted.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(ValueError::mismatch("bool", &other))
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(v) => Ok(v),
            other => Err(ValueError::mismatch("String", &other))
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bytes(v) => Ok(v),
            other => Err(ValueError::mismatch("Vec<u8>", &other))
        }
    }
}

impl FromValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            Value::Uint(v) => Ok(v as f64),
            other => Err(ValueError::mismatch("f64", &other))
        }
    }
}

impl FromValue for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some)
        }
    }
}

macro_rules! impl_from_value_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Int(v) => <$ty>::try_from(v)
                            .map_err(|_| ValueError::out_of_range(v, stringify!($ty))),
                        Value::Uint(v) => <$ty>::try_from(v)
                            .map_err(|_| ValueError::out_of_range(v, stringify!($ty))),
                        other => Err(ValueError::mismatch(stringify!($ty), &other))
                    }
                }
            }
        )*
    };
}

impl_from_value_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_value_from {
    ($variant:ident: $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from!(Bool: bool);
impl_value_from!(Int: i8, i16, i32, i64);
impl_value_from!(Uint: u8, u16, u32, u64);
impl_value_from!(Float: f32, f64);
impl_value_from!(Text: String, &str);
impl_value_from!(Bytes: Vec<u8>, &[u8]);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
