// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types and resolver for stored-procedure parameter metadata.
//!
//! This crate provides the runtime half of procmeta: parameter holder
//! traits, value converters, and the resolver that turns a holder's
//! declarative parameter definitions into ordered, immutable
//! [`ProcedureMetadata`] ready for a call-statement binder.
//!
//! # Overview
//!
//! - [`ProcedureParams`] / [`ProcedureDto`] — implemented by
//!   `#[derive(Procedure)]` from `procmeta-derive`
//! - [`ProcedureResolver`] — builds [`ProcedureMetadata`] for a holder
//! - [`ValueTypeRegistry`] — converter resolution by name or host type
//! - [`Dialect`] — explicit database selection for cursor converters
//! - [`prelude`] — convenient re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use procmeta_core::{Dialect, ProcedureResolver};
//!
//! let resolver = ProcedureResolver::new(Dialect::Postgres);
//! let metadata = resolver.resolve::<SpFetchMemberPmb>()?;
//! for parameter in metadata.parameters() {
//!     // bind IN values, register OUT parameters...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod descriptor;
pub mod dialect;
pub mod direction;
pub mod error;
pub mod metadata;
pub mod prelude;
pub mod resolver;
pub mod value;
pub mod value_type;

pub use descriptor::{
    FieldAccessor, ParameterDef, ParameterDescriptor, TypeHint, downcast_holder,
    downcast_holder_mut
};
pub use dialect::Dialect;
pub use direction::{Direction, RoleSpec};
pub use error::{Error, Result};
pub use metadata::ProcedureMetadata;
pub use resolver::ProcedureResolver;
pub use value::{FromSqlValue, IntoSqlValue, SqlValue};
pub use value_type::{SqlType, ValueType, ValueTypeRegistry};

/// A parameter holder whose annotated fields describe stored-procedure
/// parameters.
///
/// Implemented by `#[derive(Procedure)]`. A holder that carries no
/// procedure name implements only this trait and can be embedded into
/// other holders.
pub trait ProcedureParams {
    /// Parameter definitions in walk order: embedded base holders first,
    /// then the holder's own fields in declaration order.
    fn parameter_defs() -> Vec<ParameterDef>;
}

/// A parameter holder bound to a named stored procedure.
pub trait ProcedureDto: ProcedureParams {
    /// Identifier of the target stored procedure.
    fn procedure_name() -> &'static str;
}
