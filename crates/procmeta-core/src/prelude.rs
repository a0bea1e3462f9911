// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use procmeta_core::prelude::*;
//! ```

pub use crate::{
    Dialect, Direction, Error, FromSqlValue, IntoSqlValue, ProcedureDto, ProcedureMetadata,
    ProcedureParams, ProcedureResolver, Result, RoleSpec, SqlType, SqlValue, ValueType,
    ValueTypeRegistry
};
