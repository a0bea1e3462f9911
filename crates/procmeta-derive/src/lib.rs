// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # procmeta-derive
//!
//! One crate, all features. Re-exports:
//! - [`Procedure`] derive macro from `procmeta-derive-impl`
//! - All types from `procmeta-core` ([`ProcedureResolver`], [`Dialect`],
//!   [`ValueTypeRegistry`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use procmeta_derive::{Dialect, Procedure, ProcedureResolver};
//!
//! #[derive(Procedure)]
//! #[procedure(name = "SP_COUNT_URLS")]
//! pub struct SpCountUrlsPmb {
//!     #[param("in")]
//!     pub session_id: Option<String>,
//!     #[param("return")]
//!     pub url_count: Option<i64>,
//! }
//!
//! let resolver = ProcedureResolver::new(Dialect::MySql);
//! let metadata = resolver.resolve::<SpCountUrlsPmb>()?;
//! ```

// Re-export all core types
pub use procmeta_core::*;
// Re-export derive macro
pub use procmeta_derive_impl::Procedure;
