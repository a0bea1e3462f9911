// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Procedure derive macro implementation.
//!
//! This module contains the parsing and code generation for the
//! `#[derive(Procedure)]` macro.

mod defs;
mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::HolderDef;

/// Main entry point for the Procedure derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match HolderDef::from_derive_input(&input) {
        Ok(holder) => defs::generate(&holder).into(),
        Err(err) => err.write_errors().into()
    }
}
