// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Value converters and their registry.
//!
//! A [`ValueType`] is the opaque handle a resolved parameter carries: it
//! names the marshaling strategy between a host value and the database
//! wire representation. The [`ValueTypeRegistry`] resolves converters two
//! ways: by an explicit registered name, or by the host type of the
//! parameter field. Cursor converters for list-like OUT parameters are
//! name-registered only; the resolver picks one based on the active
//! dialect.

use std::{any::TypeId, collections::HashMap, fmt, sync::Arc};

use crate::{
    error::{Error, Result},
    value::SqlValue
};

/// Converter name for Oracle-style ref-cursor OUT parameters.
pub const ORACLE_RESULT_SET: &str = "oracle_result_set";

/// Converter name for PostgreSQL-style cursor OUT parameters.
pub const POSTGRES_RESULT_SET: &str = "postgres_result_set";

/// Converter name for the serialized byte-array cursor fallback.
pub const SERIALIZABLE_BYTE_ARRAY: &str = "serializable_byte_array";

/// SQL type codes, following the JDBC numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// BOOLEAN.
    Boolean,
    /// TINYINT.
    TinyInt,
    /// SMALLINT.
    SmallInt,
    /// INTEGER.
    Integer,
    /// BIGINT.
    BigInt,
    /// REAL (single precision).
    Real,
    /// DOUBLE.
    Double,
    /// VARCHAR.
    Varchar,
    /// VARBINARY.
    VarBinary,
    /// DATE.
    Date,
    /// TIMESTAMP.
    Timestamp,
    /// OTHER (driver-specific object).
    Other,
    /// REF_CURSOR.
    RefCursor
}

impl SqlType {
    /// Numeric JDBC type code.
    #[must_use]
    pub const fn code(&self) -> i16 {
        match self {
            Self::Boolean => 16,     // JDBC BOOLEAN
            Self::TinyInt => -6,     // JDBC TINYINT
            Self::SmallInt => 5,     // JDBC SMALLINT
            Self::Integer => 4,      // JDBC INTEGER
            Self::BigInt => -5,      // JDBC BIGINT
            Self::Real => 7,         // JDBC REAL
            Self::Double => 8,       // JDBC DOUBLE
            Self::Varchar => 12,     // JDBC VARCHAR
            Self::VarBinary => -3,   // JDBC VARBINARY
            Self::Date => 91,        // JDBC DATE
            Self::Timestamp => 93,   // JDBC TIMESTAMP
            Self::Other => 1111,     // JDBC OTHER
            Self::RefCursor => 2012  // JDBC REF_CURSOR
        }
    }
}

/// Bidirectional marshaler between a host value and its wire form.
///
/// Implementations are shared handles; the registry and every descriptor
/// referring to a converter hold the same `Arc`.
pub trait ValueType: fmt::Debug + Send + Sync {
    /// Registry name of this converter.
    fn name(&self) -> &'static str;

    /// SQL type the converter binds and registers parameters as.
    fn sql_type(&self) -> SqlType;

    /// Check whether a host value is representable by this converter.
    ///
    /// `Null` is always representable.
    fn accepts(&self, value: &SqlValue) -> bool;
}

/// Converter for one scalar host type.
#[derive(Debug)]
struct ScalarType {
    name: &'static str,
    sql_type: SqlType,
    check: fn(&SqlValue) -> bool
}

impl ValueType for ScalarType {
    fn name(&self) -> &'static str {
        self.name
    }

    fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    fn accepts(&self, value: &SqlValue) -> bool {
        value.is_null() || (self.check)(value)
    }
}

/// Converter for cursor OUT parameters on dialects with a native cursor
/// convention.
#[derive(Debug)]
struct CursorType {
    name: &'static str,
    sql_type: SqlType
}

impl ValueType for CursorType {
    fn name(&self) -> &'static str {
        self.name
    }

    fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    fn accepts(&self, value: &SqlValue) -> bool {
        matches!(value, SqlValue::Null | SqlValue::Seq(_))
    }
}

/// Cursor fallback that travels as a serialized byte array.
#[derive(Debug)]
struct SerializableType;

impl ValueType for SerializableType {
    fn name(&self) -> &'static str {
        SERIALIZABLE_BYTE_ARRAY
    }

    fn sql_type(&self) -> SqlType {
        SqlType::VarBinary
    }

    fn accepts(&self, value: &SqlValue) -> bool {
        matches!(
            value,
            SqlValue::Null | SqlValue::Seq(_) | SqlValue::Bytes(_)
        )
    }
}

/// Registry resolving converters by name or by host type.
///
/// [`ValueTypeRegistry::default`] carries the builtin scalar converters
/// and the three cursor converters. Callers may register additional
/// converters under a name ([`register_named`](Self::register_named)) or
/// for a host type ([`register_for`](Self::register_for)), mirroring the
/// usual plugin/basic split of value-type registries.
#[derive(Debug, Clone)]
pub struct ValueTypeRegistry {
    by_type: HashMap<TypeId, Arc<dyn ValueType>>,
    by_name: HashMap<String, Arc<dyn ValueType>>
}

impl ValueTypeRegistry {
    /// Registry with the builtin converters.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.install_builtins();
        registry
    }

    /// Registry with no converters at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_type: HashMap::new(),
            by_name: HashMap::new()
        }
    }

    /// Resolve a converter by its registered name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownValueType`] when no converter carries the name.
    pub fn by_name(&self, name: &str) -> Result<Arc<dyn ValueType>> {
        self.by_name
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownValueType {
                name: name.to_string()
            })
    }

    /// Resolve a converter from a host type.
    ///
    /// `type_name` is only used for the error message.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedType`] when the type has no converter.
    pub fn by_type_id(
        &self,
        type_id: TypeId,
        type_name: &'static str
    ) -> Result<Arc<dyn ValueType>> {
        self.by_type
            .get(&type_id)
            .cloned()
            .ok_or(Error::UnsupportedType {
                type_name
            })
    }

    /// Resolve a converter from a host type known at compile time.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedType`] when the type has no converter.
    pub fn by_type<T: 'static>(&self) -> Result<Arc<dyn ValueType>> {
        self.by_type_id(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    /// Register a converter for a host type, replacing any previous one.
    pub fn register_for<T: 'static>(&mut self, value_type: Arc<dyn ValueType>) {
        self.by_type.insert(TypeId::of::<T>(), value_type);
    }

    /// Register a converter under a name, replacing any previous one.
    pub fn register_named(&mut self, name: impl Into<String>, value_type: Arc<dyn ValueType>) {
        self.by_name.insert(name.into(), value_type);
    }

    fn install<T: 'static>(
        &mut self,
        name: &'static str,
        sql_type: SqlType,
        check: fn(&SqlValue) -> bool
    ) {
        let value_type: Arc<dyn ValueType> = Arc::new(ScalarType {
            name,
            sql_type,
            check
        });
        self.by_type.insert(TypeId::of::<T>(), Arc::clone(&value_type));
        self.by_name.insert(name.to_string(), value_type);
    }

    fn install_builtins(&mut self) {
        self.install::<bool>("boolean", SqlType::Boolean, |v| {
            matches!(v, SqlValue::Bool(_))
        });
        self.install::<i8>("byte", SqlType::TinyInt, |v| matches!(v, SqlValue::I8(_)));
        self.install::<i16>("short", SqlType::SmallInt, |v| {
            matches!(v, SqlValue::I16(_))
        });
        self.install::<i32>("integer", SqlType::Integer, |v| {
            matches!(v, SqlValue::I32(_))
        });
        self.install::<i64>("long", SqlType::BigInt, |v| matches!(v, SqlValue::I64(_)));
        self.install::<f32>("float", SqlType::Real, |v| matches!(v, SqlValue::F32(_)));
        self.install::<f64>("double", SqlType::Double, |v| {
            matches!(v, SqlValue::F64(_))
        });
        self.install::<String>("string", SqlType::Varchar, |v| {
            matches!(v, SqlValue::Text(_))
        });
        self.install::<Vec<u8>>("binary", SqlType::VarBinary, |v| {
            matches!(v, SqlValue::Bytes(_))
        });

        #[cfg(feature = "chrono")]
        {
            self.install::<chrono::NaiveDate>("date", SqlType::Date, |v| {
                matches!(v, SqlValue::Date(_))
            });
            self.install::<chrono::NaiveDateTime>("timestamp", SqlType::Timestamp, |v| {
                matches!(v, SqlValue::Timestamp(_))
            });
            // DateTime<Utc> binds through the same timestamp converter.
            if let Ok(timestamp) = self.by_name("timestamp") {
                self.register_for::<chrono::DateTime<chrono::Utc>>(timestamp);
            }
        }

        #[cfg(feature = "uuid")]
        self.install::<uuid::Uuid>("uuid", SqlType::Other, |v| {
            matches!(v, SqlValue::Uuid(_))
        });

        self.register_named(
            ORACLE_RESULT_SET,
            Arc::new(CursorType {
                name: ORACLE_RESULT_SET,
                sql_type: SqlType::RefCursor
            })
        );
        self.register_named(
            POSTGRES_RESULT_SET,
            Arc::new(CursorType {
                name: POSTGRES_RESULT_SET,
                sql_type: SqlType::Other
            })
        );
        self.register_named(SERIALIZABLE_BYTE_ARRAY, Arc::new(SerializableType));
    }
}

impl Default for ValueTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_by_type() {
        let registry = ValueTypeRegistry::new();
        assert_eq!(registry.by_type::<i32>().unwrap().name(), "integer");
        assert_eq!(registry.by_type::<String>().unwrap().name(), "string");
        assert_eq!(registry.by_type::<Vec<u8>>().unwrap().name(), "binary");
    }

    #[test]
    fn builtin_by_name() {
        let registry = ValueTypeRegistry::new();
        assert_eq!(
            registry.by_name("long").unwrap().sql_type(),
            SqlType::BigInt
        );
        assert_eq!(
            registry.by_name(ORACLE_RESULT_SET).unwrap().sql_type(),
            SqlType::RefCursor
        );
        assert_eq!(
            registry.by_name(POSTGRES_RESULT_SET).unwrap().sql_type(),
            SqlType::Other
        );
        assert_eq!(
            registry.by_name(SERIALIZABLE_BYTE_ARRAY).unwrap().sql_type(),
            SqlType::VarBinary
        );
    }

    #[test]
    fn unknown_name_fails() {
        let registry = ValueTypeRegistry::new();
        let err = registry.by_name("no_such_type").unwrap_err();
        assert!(err.to_string().contains("no_such_type"));
    }

    #[test]
    fn unsupported_type_fails() {
        struct Unregistered;
        let registry = ValueTypeRegistry::new();
        assert!(registry.by_type::<Unregistered>().is_err());
    }

    #[test]
    fn plugin_registration() {
        #[derive(Debug)]
        struct FixedLengthString;

        impl ValueType for FixedLengthString {
            fn name(&self) -> &'static str {
                "fixed_length_string"
            }

            fn sql_type(&self) -> SqlType {
                SqlType::Varchar
            }

            fn accepts(&self, value: &SqlValue) -> bool {
                matches!(value, SqlValue::Null | SqlValue::Text(_))
            }
        }

        let mut registry = ValueTypeRegistry::new();
        registry.register_named("fixed_length_string", Arc::new(FixedLengthString));
        assert_eq!(
            registry.by_name("fixed_length_string").unwrap().name(),
            "fixed_length_string"
        );
    }

    #[test]
    fn scalar_accepts_null_and_own_kind() {
        let registry = ValueTypeRegistry::new();
        let integer = registry.by_name("integer").unwrap();
        assert!(integer.accepts(&SqlValue::Null));
        assert!(integer.accepts(&SqlValue::I32(1)));
        assert!(!integer.accepts(&SqlValue::Text("1".to_string())));
    }

    #[test]
    fn cursor_accepts_sequences() {
        let registry = ValueTypeRegistry::new();
        let cursor = registry.by_name(ORACLE_RESULT_SET).unwrap();
        assert!(cursor.accepts(&SqlValue::Seq(Vec::new())));
        assert!(!cursor.accepts(&SqlValue::I32(1)));

        let fallback = registry.by_name(SERIALIZABLE_BYTE_ARRAY).unwrap();
        assert!(fallback.accepts(&SqlValue::Seq(Vec::new())));
        assert!(fallback.accepts(&SqlValue::Bytes(Vec::new())));
    }

    #[test]
    fn type_codes() {
        assert_eq!(SqlType::Integer.code(), 4);
        assert_eq!(SqlType::BigInt.code(), -5);
        assert_eq!(SqlType::Varchar.code(), 12);
        assert_eq!(SqlType::RefCursor.code(), 2012);
        assert_eq!(SqlType::Other.code(), 1111);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn datetime_utc_shares_timestamp_converter() {
        let registry = ValueTypeRegistry::new();
        let by_utc = registry
            .by_type::<chrono::DateTime<chrono::Utc>>()
            .unwrap();
        assert_eq!(by_utc.name(), "timestamp");
    }
}
