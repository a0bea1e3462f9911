// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for procedure metadata resolution.
//!
//! Every failure in this crate is a configuration error: the parameter
//! holder, its attributes, or the registry contents are wrong. Nothing is
//! retried and nothing is silently defaulted; resolution aborts on the
//! first error and the caller is expected to treat the whole procedure
//! binding as misconfigured.

use std::num::ParseIntError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while resolving procedure parameter metadata.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A role token was not one of `in`, `out`, `inout`, `return`.
    #[error("parameter role should be 'in', 'out', 'inout' or 'return': role={role}")]
    InvalidRole {
        /// The offending role token, trimmed.
        role: String
    },

    /// The index segment of a role spec did not parse as a base-10 integer.
    #[error("parameter index should be a number: index={raw} spec={spec}")]
    InvalidIndex {
        /// The index segment as written.
        raw: String,
        /// The complete role spec the segment was extracted from.
        spec: String,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError
    },

    /// No converter is registered under the requested name.
    #[error("unknown value type name: {name}")]
    UnknownValueType {
        /// The requested converter name.
        name: String
    },

    /// No converter is registered for the parameter's host type.
    #[error("no value type registered for type: {type_name}")]
    UnsupportedType {
        /// The host type name, as reported by [`std::any::type_name`].
        type_name: &'static str
    },

    /// A field accessor was handed a holder of the wrong concrete type.
    #[error("parameter holder type mismatch: expected {holder} for field {field}")]
    HolderMismatch {
        /// The holder type the accessor was built for.
        holder: &'static str,
        /// The field the accessor reads or writes.
        field: &'static str
    },

    /// A value could not be converted to or from the field's host type.
    #[error("value not representable: expected {expected}, got {actual}")]
    ValueMismatch {
        /// The host type the conversion targets.
        expected: &'static str,
        /// What the value actually was.
        actual: &'static str
    }
}
