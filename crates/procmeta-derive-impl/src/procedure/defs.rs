// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for the Procedure derive macro.
//!
//! Generates `ProcedureParams` (the ordered parameter definitions) and,
//! for named holders, `ProcedureDto`. Generated paths are absolute so the
//! expansion works regardless of local imports.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{HolderDef, ParamKind, is_sequence, unwrap_option};
use procmeta_core::Direction;

/// Generate all code for the holder.
pub fn generate(holder: &HolderDef) -> TokenStream {
    let params_impl = generate_params_impl(holder);
    let dto_impl = generate_dto_impl(holder);

    quote! {
        #params_impl
        #dto_impl
    }
}

/// Generate the `ProcedureParams` implementation.
///
/// Definitions are emitted in walk order: embedded base holders first
/// (their own walk order preserved, accessors re-based through the
/// embedding field), then the holder's own parameters in declaration
/// order.
fn generate_params_impl(holder: &HolderDef) -> TokenStream {
    let holder_ident = &holder.ident;

    let mut base_pushes = Vec::new();
    let mut own_pushes = Vec::new();
    for field in &holder.fields {
        match &field.kind {
            ParamKind::None => {}
            ParamKind::Base => {
                let field_ident = &field.ident;
                let base_ty = &field.ty;
                base_pushes.push(quote! {
                    {
                        fn project_ref(holder: &#holder_ident) -> &dyn ::core::any::Any {
                            &holder.#field_ident
                        }
                        fn project_mut(
                            holder: &mut #holder_ident
                        ) -> &mut dyn ::core::any::Any {
                            &mut holder.#field_ident
                        }
                        let base = <#base_ty as ::procmeta_core::ProcedureParams>::parameter_defs();
                        for def in base {
                            defs.push(def.nested::<#holder_ident, _, _>(project_ref, project_mut));
                        }
                    }
                });
            }
            ParamKind::Param {
                direction,
                index,
                value_type
            } => {
                own_pushes.push(generate_param_push(
                    holder,
                    field,
                    *direction,
                    *index,
                    value_type.as_deref()
                ));
            }
        }
    }

    quote! {
        impl ::procmeta_core::ProcedureParams for #holder_ident {
            fn parameter_defs() -> ::std::vec::Vec<::procmeta_core::ParameterDef> {
                #[allow(unused_mut)]
                let mut defs = ::std::vec::Vec::new();
                #(#base_pushes)*
                #(#own_pushes)*
                defs
            }
        }
    }
}

/// Generate the push of one `ParameterDef`, accessors included.
fn generate_param_push(
    holder: &HolderDef,
    field: &super::parse::FieldDef,
    direction: Direction,
    index: Option<i32>,
    value_type: Option<&str>
) -> TokenStream {
    let holder_ident = &holder.ident;
    let field_ident = &field.ident;
    let name = field_ident.to_string();

    let direction_tokens = match direction {
        Direction::In => quote!(::procmeta_core::Direction::In),
        Direction::Out => quote!(::procmeta_core::Direction::Out),
        Direction::InOut => quote!(::procmeta_core::Direction::InOut),
        Direction::Return => quote!(::procmeta_core::Direction::Return)
    };

    let index_tokens = match index {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None)
    };

    let value_type_tokens = match value_type {
        Some(name) => quote!(::core::option::Option::Some(#name)),
        None => quote!(::core::option::Option::None)
    };

    let hint_ty = unwrap_option(&field.ty);
    let type_hint_tokens = if is_sequence(hint_ty) {
        quote!(::procmeta_core::TypeHint::Sequence)
    } else {
        quote!(::procmeta_core::TypeHint::scalar::<#hint_ty>())
    };

    quote! {
        defs.push(::procmeta_core::ParameterDef {
            name: #name,
            direction: #direction_tokens,
            index: #index_tokens,
            value_type: #value_type_tokens,
            type_hint: #type_hint_tokens,
            accessor: ::procmeta_core::FieldAccessor::new(
                #name,
                |holder| {
                    let holder =
                        ::procmeta_core::downcast_holder::<#holder_ident>(holder, #name)?;
                    ::core::result::Result::Ok(::procmeta_core::IntoSqlValue::into_sql_value(
                        ::core::clone::Clone::clone(&holder.#field_ident)
                    ))
                },
                |holder, value| {
                    let holder =
                        ::procmeta_core::downcast_holder_mut::<#holder_ident>(holder, #name)?;
                    holder.#field_ident = ::procmeta_core::FromSqlValue::from_sql_value(value)?;
                    ::core::result::Result::Ok(())
                }
            )
        });
    }
}

/// Generate the `ProcedureDto` implementation for named holders.
fn generate_dto_impl(holder: &HolderDef) -> TokenStream {
    let Some(name) = &holder.name else {
        return TokenStream::new();
    };
    let holder_ident = &holder.ident;

    quote! {
        impl ::procmeta_core::ProcedureDto for #holder_ident {
            fn procedure_name() -> &'static str {
                #name
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::*;

    fn parse(input: DeriveInput) -> HolderDef {
        HolderDef::from_derive_input(&input).unwrap()
    }

    #[test]
    fn named_holder_generates_both_impls() {
        let holder = parse(parse_quote! {
            #[procedure(name = "SP_FETCH")]
            pub struct SpFetchPmb {
                #[param("in,0")]
                pub id: Option<i64>,
            }
        });

        let output = generate(&holder).to_string();
        assert!(output.contains("ProcedureParams"));
        assert!(output.contains("ProcedureDto"));
        assert!(output.contains("SP_FETCH"));
        assert!(output.contains("downcast_holder"));
    }

    #[test]
    fn unnamed_holder_generates_params_only() {
        let holder = parse(parse_quote! {
            pub struct CommonPmb {
                #[param("in")]
                pub tenant: Option<String>,
            }
        });

        let output = generate(&holder).to_string();
        assert!(output.contains("ProcedureParams"));
        assert!(!output.contains("ProcedureDto"));
    }

    #[test]
    fn sequence_field_uses_sequence_hint() {
        let holder = parse(parse_quote! {
            #[procedure(name = "SP_LIST")]
            pub struct SpListPmb {
                #[param("out")]
                pub rows: Vec<String>,
            }
        });

        let output = generate(&holder).to_string();
        assert!(output.contains("Sequence"));
    }

    #[test]
    fn byte_vec_is_scalar() {
        let holder = parse(parse_quote! {
            #[procedure(name = "SP_BLOB")]
            pub struct SpBlobPmb {
                #[param("in")]
                pub payload: Vec<u8>,
            }
        });

        let output = generate(&holder).to_string();
        assert!(!output.contains("Sequence"));
        assert!(output.contains("scalar"));
    }

    #[test]
    fn base_field_splices_nested_defs() {
        let holder = parse(parse_quote! {
            pub struct SpChildPmb {
                #[param(base)]
                pub common: CommonPmb,
                #[param("in")]
                pub own: Option<i32>,
            }
        });

        let output = generate(&holder).to_string();
        assert!(output.contains("nested"));
        assert!(output.contains("CommonPmb"));
    }

    #[test]
    fn skipped_fields_produce_no_defs() {
        let holder = parse(parse_quote! {
            #[procedure(name = "SP_NONE")]
            pub struct SpNonePmb {
                pub plain: String,
            }
        });

        let output = generate(&holder).to_string();
        assert!(!output.contains("defs . push"));
    }

    #[test]
    fn value_type_override_is_emitted() {
        let holder = parse(parse_quote! {
            #[procedure(name = "SP_VT")]
            pub struct SpVtPmb {
                #[param("out", value_type = "fixed_length_string")]
                pub name: Option<String>,
            }
        });

        let output = generate(&holder).to_string();
        assert!(output.contains("fixed_length_string"));
    }
}
