// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database dialect selection.
//!
//! The dialect only influences one resolution decision: which converter a
//! list-like OUT parameter gets. Oracle and PostgreSQL have native cursor
//! conventions; every other database falls back to a serialized byte
//! array. The dialect is an explicit value passed to the resolver, never
//! ambient state.

use crate::value_type::{ORACLE_RESULT_SET, POSTGRES_RESULT_SET, SERIALIZABLE_BYTE_ARRAY};

/// Database product the resolved metadata targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Oracle - native ref-cursor OUT parameters.
    Oracle,

    /// PostgreSQL - refcursor via its own convention.
    Postgres,

    /// MySQL.
    MySql,

    /// H2.
    H2,

    /// Microsoft SQL Server.
    SqlServer,

    /// SQLite.
    Sqlite,

    /// Unrecognized or unconfigured database.
    #[default]
    Unknown
}

impl Dialect {
    /// Parse a dialect tag, accepting common aliases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use procmeta_core::Dialect;
    ///
    /// assert_eq!(Dialect::parse("postgresql"), Some(Dialect::Postgres));
    /// assert_eq!(Dialect::parse("PG"), Some(Dialect::Postgres));
    /// assert_eq!(Dialect::parse("db2"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "oracle" => Some(Self::Oracle),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            "mysql" => Some(Self::MySql),
            "h2" => Some(Self::H2),
            "sqlserver" | "mssql" => Some(Self::SqlServer),
            "sqlite" => Some(Self::Sqlite),
            "unknown" => Some(Self::Unknown),
            _ => None
        }
    }

    /// Registry name of the converter used for list-like OUT parameters.
    #[must_use]
    pub const fn cursor_value_type(&self) -> &'static str {
        match self {
            Self::Oracle => ORACLE_RESULT_SET,
            Self::Postgres => POSTGRES_RESULT_SET,
            _ => SERIALIZABLE_BYTE_ARRAY
        }
    }

    /// Check if this dialect has a native cursor convention.
    #[must_use]
    pub const fn has_native_cursor(&self) -> bool {
        matches!(self, Self::Oracle | Self::Postgres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!(Dialect::parse("oracle"), Some(Dialect::Oracle));
        assert_eq!(Dialect::parse("postgres"), Some(Dialect::Postgres));
        assert_eq!(Dialect::parse("POSTGRESQL"), Some(Dialect::Postgres));
        assert_eq!(Dialect::parse("pg"), Some(Dialect::Postgres));
        assert_eq!(Dialect::parse("mysql"), Some(Dialect::MySql));
        assert_eq!(Dialect::parse("H2"), Some(Dialect::H2));
        assert_eq!(Dialect::parse("mssql"), Some(Dialect::SqlServer));
        assert_eq!(Dialect::parse("sqlite"), Some(Dialect::Sqlite));
    }

    #[test]
    fn parse_unrecognized() {
        assert_eq!(Dialect::parse("db2"), None);
        assert_eq!(Dialect::parse(""), None);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(Dialect::default(), Dialect::Unknown);
    }

    #[test]
    fn cursor_converter_per_dialect() {
        assert_eq!(Dialect::Oracle.cursor_value_type(), ORACLE_RESULT_SET);
        assert_eq!(Dialect::Postgres.cursor_value_type(), POSTGRES_RESULT_SET);
        assert_eq!(Dialect::MySql.cursor_value_type(), SERIALIZABLE_BYTE_ARRAY);
        assert_eq!(Dialect::H2.cursor_value_type(), SERIALIZABLE_BYTE_ARRAY);
        assert_eq!(
            Dialect::Unknown.cursor_value_type(),
            SERIALIZABLE_BYTE_ARRAY
        );
    }

    #[test]
    fn native_cursor_dialects() {
        assert!(Dialect::Oracle.has_native_cursor());
        assert!(Dialect::Postgres.has_native_cursor());
        assert!(!Dialect::MySql.has_native_cursor());
        assert!(!Dialect::Unknown.has_native_cursor());
    }
}
