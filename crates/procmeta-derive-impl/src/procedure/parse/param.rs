// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! This module handles parsing of `#[param(...)]` attributes. The role
//! spec string keeps the `"role[,index]"` wire format; parsing is
//! delegated to [`RoleSpec`] so the macro and the runtime agree on the
//! grammar, and parse failures become spanned compile errors naming the
//! struct and field.

use procmeta_core::{Direction, RoleSpec};
use syn::{
    Attribute, Field, GenericArgument, Ident, LitStr, PathArguments, Token, Type,
    parse::ParseStream
};

/// What a field contributes to the holder's parameter list.
#[derive(Debug)]
pub enum ParamKind {
    /// Not a procedure parameter; skipped entirely.
    None,

    /// Embedded base holder whose parameters are spliced in ahead of the
    /// embedding holder's own.
    Base,

    /// One procedure parameter.
    Param {
        /// Data-flow direction from the role token.
        direction: Direction,

        /// Explicit ordering index, when the spec carried one.
        index: Option<i32>,

        /// Converter-name override from `value_type = "..."`.
        value_type: Option<String>
    }
}

/// Field definition with its parsed `#[param]` attribute.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type as declared.
    pub ty: Type,

    /// The field's parameter contribution.
    pub kind: ParamKind
}

impl FieldDef {
    /// Parse a field definition from syn's `Field`.
    ///
    /// `holder` is the declaring struct's identifier, used in error
    /// messages.
    ///
    /// # Errors
    ///
    /// Malformed `#[param(...)]` attributes: unknown role token,
    /// non-numeric index, unexpected arguments.
    ///
    /// # Panics
    ///
    /// Panics if the field has no identifier (tuple struct field); this
    /// is caught earlier by darling's `supports(struct_named)`.
    pub fn from_field(field: &Field, holder: &Ident) -> syn::Result<Self> {
        let ident = field.ident.clone().expect("named field required");
        let ty = field.ty.clone();

        let mut kind = ParamKind::None;
        for attr in &field.attrs {
            if attr.path().is_ident("param") {
                kind = parse_param_attr(attr, holder, &ident)?;
            }
        }

        Ok(Self {
            ident,
            ty,
            kind
        })
    }
}

/// Parse one `#[param(...)]` attribute.
///
/// Accepted forms: `#[param(base)]`, `#[param("role[,index]")]`,
/// `#[param("role[,index]", value_type = "name")]`.
fn parse_param_attr(attr: &Attribute, holder: &Ident, field: &Ident) -> syn::Result<ParamKind> {
    attr.parse_args_with(|input: ParseStream<'_>| {
        if input.peek(Ident) {
            let marker: Ident = input.parse()?;
            if marker != "base" {
                return Err(syn::Error::new(
                    marker.span(),
                    "expected `base` or a role spec string"
                ));
            }
            if !input.is_empty() {
                return Err(syn::Error::new(
                    marker.span(),
                    "`base` takes no further arguments"
                ));
            }
            return Ok(ParamKind::Base);
        }

        let role: LitStr = input.parse()?;

        let mut value_type = None;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let key: Ident = input.parse()?;
            if key != "value_type" {
                return Err(syn::Error::new(key.span(), "expected `value_type`"));
            }
            input.parse::<Token![=]>()?;
            let name: LitStr = input.parse()?;
            value_type = Some(name.value());
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens in #[param(...)]"));
        }

        let spec = RoleSpec::parse(&role.value()).map_err(|err| {
            syn::Error::new(role.span(), format!("{holder}.{field}: {err}"))
        })?;

        Ok(ParamKind::Param {
            direction: spec.direction,
            index: spec.index,
            value_type
        })
    })
}

/// Strip one `Option<...>` wrapper, mirroring the nullable-field
/// convention.
///
/// This is a simple heuristic that checks the last path segment. It may
/// give false positives for custom types named `Option`.
pub fn unwrap_option(ty: &Type) -> &Type {
    generic_inner(ty, "Option").unwrap_or(ty)
}

/// Detect a list-like type: `Vec<T>` with `T != u8`.
///
/// `Vec<u8>` is binary data, not a cursor sequence. Same last-segment
/// heuristic as [`unwrap_option`].
pub fn is_sequence(ty: &Type) -> bool {
    match generic_inner(ty, "Vec") {
        Some(inner) => !is_u8(inner),
        None => false
    }
}

fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    }
}

fn is_u8(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
    {
        return segment.ident == "u8";
    }
    false
}
