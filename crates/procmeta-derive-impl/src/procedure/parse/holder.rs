// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing.
//!
//! This module handles parsing of the `#[procedure(...)]` attribute using
//! darling, and provides the [`HolderDef`] structure consumed by code
//! generation.

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident};

use super::param::FieldDef;

/// Struct-level attributes parsed from `#[procedure(...)]`.
///
/// Internal struct used by darling; the public API is [`HolderDef`].
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(procedure), supports(struct_named))]
struct HolderAttrs {
    /// Struct identifier (e.g. `SpFetchMemberPmb`).
    ident: Ident,

    /// Target stored-procedure name.
    ///
    /// Optional: a holder without a name only implements
    /// `ProcedureParams` and can be embedded into other holders.
    #[darling(default)]
    name: Option<String>
}

/// Complete parsed holder definition.
///
/// Combines the struct-level attributes with the parsed field
/// definitions, in declaration order.
#[derive(Debug)]
pub struct HolderDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Target procedure name, when declared.
    pub name: Option<String>,

    /// All field definitions, in declaration order.
    pub fields: Vec<FieldDef>
}

impl HolderDef {
    /// Parse a holder definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to a non-struct, tuple struct or unit struct
    /// - Invalid `#[procedure(...)]` attribute values
    /// - Invalid `#[param(...)]` attributes on any field
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = HolderAttrs::from_derive_input(input)?;

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(|field| FieldDef::from_field(field, &attrs.ident))
                    .collect::<syn::Result<Vec<_>>>()
                    .map_err(darling::Error::from)?,
                _ => {
                    return Err(darling::Error::custom(
                        "Procedure requires named fields"
                    )
                    .with_span(&input.ident));
                }
            },
            _ => {
                return Err(darling::Error::custom(
                    "Procedure can only be derived for structs"
                )
                .with_span(&input.ident));
            }
        };

        Ok(Self {
            ident: attrs.ident,
            name: attrs.name,
            fields
        })
    }
}
