// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # procmeta-derive-impl
//!
//! Procedural macro turning a parameter holder struct into stored-procedure
//! parameter metadata.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use procmeta_derive::Procedure;
//!
//! #[derive(Procedure)]
//! #[procedure(name = "SP_FETCH_MEMBER")]
//! pub struct SpFetchMemberPmb {
//!     #[param("in,0")]
//!     pub member_id: Option<i64>,
//!
//!     #[param("out")]
//!     pub member_name: Option<String>,
//!
//!     #[param("return")]
//!     pub result_code: Option<i32>,
//! }
//! ```
//!
//! Generates `ProcedureParams` (the ordered parameter definitions with
//! field accessors) and, when `#[procedure(name = ...)]` is present,
//! `ProcedureDto` binding the holder to its procedure.
//!
//! ## Field Attributes
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[param("in")]` | IN parameter |
//! | `#[param("out")]` | OUT parameter |
//! | `#[param("inout")]` | IN and OUT |
//! | `#[param("return")]` | return value (also OUT, always ordered first) |
//! | `#[param("in,3")]` | explicit ordering index after the comma |
//! | `#[param("out", value_type = "...")]` | converter-name override |
//! | `#[param(base)]` | embedded holder, parameters spliced in first |
//!
//! Fields without `#[param]` are not procedure parameters.

mod procedure;

use proc_macro::TokenStream;

/// Derive macro generating procedure parameter metadata for a holder
/// struct.
#[proc_macro_derive(Procedure, attributes(procedure, param))]
pub fn derive_procedure(input: TokenStream) -> TokenStream {
    procedure::derive(input)
}
