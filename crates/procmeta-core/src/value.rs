// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host-side value representation.
//!
//! [`SqlValue`] is the single currency crossing the accessor boundary: a
//! field accessor reads a holder field into an `SqlValue` and writes one
//! back. [`IntoSqlValue`]/[`FromSqlValue`] cover the builtin scalar types,
//! `Option<T>` (absent values travel as [`SqlValue::Null`]) and `Vec<T>`
//! (cursor rows travel as [`SqlValue::Seq`]). `Vec<u8>` is a binary
//! scalar, not a sequence.

use crate::error::{Error, Result};

/// A database-bindable host value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Absent value (`Option::None` on the host side).
    Null,

    /// Boolean.
    Bool(bool),

    /// 8-bit signed integer.
    I8(i8),

    /// 16-bit signed integer.
    I16(i16),

    /// 32-bit signed integer.
    I32(i32),

    /// 64-bit signed integer.
    I64(i64),

    /// Single-precision float.
    F32(f32),

    /// Double-precision float.
    F64(f64),

    /// Character data.
    Text(String),

    /// Raw binary data.
    Bytes(Vec<u8>),

    /// Calendar date without time.
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),

    /// Date and time without offset.
    #[cfg(feature = "chrono")]
    Timestamp(chrono::NaiveDateTime),

    /// UUID.
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),

    /// Ordered sequence, e.g. rows received through a cursor parameter.
    Seq(Vec<SqlValue>)
}

impl SqlValue {
    /// Short name of the carried value kind, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            #[cfg(feature = "chrono")]
            Self::Date(_) => "date",
            #[cfg(feature = "chrono")]
            Self::Timestamp(_) => "timestamp",
            #[cfg(feature = "uuid")]
            Self::Uuid(_) => "uuid",
            Self::Seq(_) => "seq"
        }
    }

    /// Check if this is [`SqlValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Conversion of a host value into its [`SqlValue`] representation.
pub trait IntoSqlValue {
    /// Convert `self` into an [`SqlValue`].
    fn into_sql_value(self) -> SqlValue;
}

/// Fallible conversion of an [`SqlValue`] back into a host value.
pub trait FromSqlValue: Sized {
    /// Convert an [`SqlValue`] into the host type.
    ///
    /// # Errors
    ///
    /// [`Error::ValueMismatch`] when the value does not carry this type.
    fn from_sql_value(value: SqlValue) -> Result<Self>;
}

impl<T: IntoSqlValue> IntoSqlValue for Option<T> {
    fn into_sql_value(self) -> SqlValue {
        match self {
            Some(value) => value.into_sql_value(),
            None => SqlValue::Null
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    fn from_sql_value(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Null => Ok(None),
            other => T::from_sql_value(other).map(Some)
        }
    }
}

/// Scalar conversions plus the matching `Vec<T>` sequence conversions.
macro_rules! scalar_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl IntoSqlValue for $ty {
            fn into_sql_value(self) -> SqlValue {
                SqlValue::$variant(self)
            }
        }

        impl FromSqlValue for $ty {
            fn from_sql_value(value: SqlValue) -> Result<Self> {
                match value {
                    SqlValue::$variant(v) => Ok(v),
                    other => Err(Error::ValueMismatch {
                        expected: stringify!($ty),
                        actual: other.type_name()
                    })
                }
            }
        }

        impl IntoSqlValue for Vec<$ty> {
            fn into_sql_value(self) -> SqlValue {
                SqlValue::Seq(self.into_iter().map(IntoSqlValue::into_sql_value).collect())
            }
        }

        impl FromSqlValue for Vec<$ty> {
            fn from_sql_value(value: SqlValue) -> Result<Self> {
                match value {
                    SqlValue::Seq(items) => {
                        items.into_iter().map(FromSqlValue::from_sql_value).collect()
                    }
                    other => Err(Error::ValueMismatch {
                        expected: concat!("Vec<", stringify!($ty), ">"),
                        actual: other.type_name()
                    })
                }
            }
        }
    )*};
}

scalar_value! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => Text,
}

#[cfg(feature = "chrono")]
scalar_value! {
    chrono::NaiveDate => Date,
    chrono::NaiveDateTime => Timestamp,
}

#[cfg(feature = "uuid")]
scalar_value! {
    uuid::Uuid => Uuid,
}

impl IntoSqlValue for &str {
    fn into_sql_value(self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }
}

impl IntoSqlValue for Vec<u8> {
    fn into_sql_value(self) -> SqlValue {
        SqlValue::Bytes(self)
    }
}

impl FromSqlValue for Vec<u8> {
    fn from_sql_value(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Bytes(bytes) => Ok(bytes),
            other => Err(Error::ValueMismatch {
                expected: "Vec<u8>",
                actual: other.type_name()
            })
        }
    }
}

#[cfg(feature = "chrono")]
impl IntoSqlValue for chrono::DateTime<chrono::Utc> {
    fn into_sql_value(self) -> SqlValue {
        SqlValue::Timestamp(self.naive_utc())
    }
}

#[cfg(feature = "chrono")]
impl FromSqlValue for chrono::DateTime<chrono::Utc> {
    fn from_sql_value(value: SqlValue) -> Result<Self> {
        match value {
            SqlValue::Timestamp(naive) => Ok(naive.and_utc()),
            other => Err(Error::ValueMismatch {
                expected: "DateTime<Utc>",
                actual: other.type_name()
            })
        }
    }
}
