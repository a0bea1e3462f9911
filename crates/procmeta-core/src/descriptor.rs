// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameter definitions, descriptors and field accessors.
//!
//! The derive macro emits one [`ParameterDef`] per annotated field; the
//! resolver turns each into a [`ParameterDescriptor`] by attaching the
//! resolved value converter. A [`FieldAccessor`] is the get/set
//! capability for one field, built once at expansion time and re-based
//! through embedding holders when parameter holders are composed.

use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc
};

use crate::{
    direction::Direction,
    error::{Error, Result},
    value::SqlValue,
    value_type::ValueType
};

/// Host-type hint used to infer a value converter when no explicit
/// converter name is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    /// A scalar host type, resolved through the registry's type map.
    Scalar {
        /// `TypeId` of the field's host type, `Option` unwrapped.
        type_id: TypeId,
        /// Host type name, for diagnostics.
        type_name: &'static str
    },

    /// A list-like host type: an OUT parameter receiving a cursor. The
    /// converter depends on the active dialect.
    Sequence
}

impl TypeHint {
    /// Hint for a scalar host type.
    #[must_use]
    pub fn scalar<T: 'static>() -> Self {
        Self::Scalar {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>()
        }
    }
}

/// Downcast a holder reference to its concrete type.
///
/// # Errors
///
/// [`Error::HolderMismatch`] naming the expected holder and the field.
pub fn downcast_holder<'a, T: Any>(holder: &'a dyn Any, field: &'static str) -> Result<&'a T> {
    holder.downcast_ref::<T>().ok_or(Error::HolderMismatch {
        holder: std::any::type_name::<T>(),
        field
    })
}

/// Mutable variant of [`downcast_holder`].
///
/// # Errors
///
/// [`Error::HolderMismatch`] naming the expected holder and the field.
pub fn downcast_holder_mut<'a, T: Any>(
    holder: &'a mut dyn Any,
    field: &'static str
) -> Result<&'a mut T> {
    holder.downcast_mut::<T>().ok_or(Error::HolderMismatch {
        holder: std::any::type_name::<T>(),
        field
    })
}

type GetFn = dyn Fn(&dyn Any) -> Result<SqlValue> + Send + Sync;
type SetFn = dyn Fn(&mut dyn Any, SqlValue) -> Result<()> + Send + Sync;

/// Read/write capability for one parameter field on a holder instance.
#[derive(Clone)]
pub struct FieldAccessor {
    field: &'static str,
    get: Arc<GetFn>,
    set: Arc<SetFn>
}

impl FieldAccessor {
    /// Build an accessor from its get and set halves.
    pub fn new<G, S>(field: &'static str, get: G, set: S) -> Self
    where
        G: Fn(&dyn Any) -> Result<SqlValue> + Send + Sync + 'static,
        S: Fn(&mut dyn Any, SqlValue) -> Result<()> + Send + Sync + 'static
    {
        Self {
            field,
            get: Arc::new(get),
            set: Arc::new(set)
        }
    }

    /// The field this accessor is bound to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Read the field's value from a holder instance.
    ///
    /// # Errors
    ///
    /// [`Error::HolderMismatch`] when `holder` is not the concrete type
    /// the accessor was built for.
    pub fn get(&self, holder: &dyn Any) -> Result<SqlValue> {
        (*self.get)(holder)
    }

    /// Write a value into the field on a holder instance.
    ///
    /// # Errors
    ///
    /// [`Error::HolderMismatch`] for a foreign holder,
    /// [`Error::ValueMismatch`] when the value does not fit the field.
    pub fn set(&self, holder: &mut dyn Any, value: SqlValue) -> Result<()> {
        (*self.set)(holder, value)
    }

    /// Re-base this accessor through an embedding holder of type `P`.
    ///
    /// The projections select the embedded holder inside `P`; the
    /// returned accessor accepts `P` instances and delegates to the
    /// original accessor against the projected field.
    #[must_use]
    pub fn nested<P, R, M>(&self, project_ref: R, project_mut: M) -> Self
    where
        P: Any,
        R: Fn(&P) -> &(dyn Any + 'static) + Send + Sync + 'static,
        M: Fn(&mut P) -> &mut (dyn Any + 'static) + Send + Sync + 'static
    {
        let field = self.field;
        let get = Arc::clone(&self.get);
        let set = Arc::clone(&self.set);
        Self {
            field,
            get: Arc::new(move |holder| {
                let parent = downcast_holder::<P>(holder, field)?;
                (*get)(project_ref(parent))
            }),
            set: Arc::new(move |holder, value| {
                let parent = downcast_holder_mut::<P>(holder, field)?;
                (*set)(project_mut(parent), value)
            })
        }
    }
}

impl fmt::Debug for FieldAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// One unresolved parameter, as emitted by the derive macro.
#[derive(Debug, Clone)]
pub struct ParameterDef {
    /// Field identifier, unique within one holder.
    pub name: &'static str,

    /// Data-flow direction parsed from the role spec.
    pub direction: Direction,

    /// Explicit ordering index, when the role spec carried one.
    pub index: Option<i32>,

    /// Converter-name override, when given.
    pub value_type: Option<&'static str>,

    /// Host-type hint for converter inference.
    pub type_hint: TypeHint,

    /// Accessor bound to the field.
    pub accessor: FieldAccessor
}

impl ParameterDef {
    /// Re-base this definition through an embedding holder field.
    ///
    /// Used when splicing an embedded base holder's parameters into the
    /// embedding holder's definition list.
    #[must_use]
    pub fn nested<P, R, M>(self, project_ref: R, project_mut: M) -> Self
    where
        P: Any,
        R: Fn(&P) -> &(dyn Any + 'static) + Send + Sync + 'static,
        M: Fn(&mut P) -> &mut (dyn Any + 'static) + Send + Sync + 'static
    {
        Self {
            accessor: self.accessor.nested(project_ref, project_mut),
            ..self
        }
    }
}

/// One resolved parameter of a procedure call.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    name: &'static str,
    direction: Direction,
    index: Option<i32>,
    value_type: Arc<dyn ValueType>,
    accessor: FieldAccessor
}

impl ParameterDescriptor {
    pub(crate) fn new(def: ParameterDef, value_type: Arc<dyn ValueType>) -> Self {
        Self {
            name: def.name,
            direction: def.direction,
            index: def.index,
            value_type,
            accessor: def.accessor
        }
    }

    /// Field identifier of the parameter.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Data-flow direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Explicit ordering index, when one was declared.
    #[must_use]
    pub const fn index(&self) -> Option<i32> {
        self.index
    }

    /// The resolved value converter.
    #[must_use]
    pub fn value_type(&self) -> &Arc<dyn ValueType> {
        &self.value_type
    }

    /// Read this parameter's value from a holder instance.
    ///
    /// # Errors
    ///
    /// See [`FieldAccessor::get`].
    pub fn get(&self, holder: &dyn Any) -> Result<SqlValue> {
        self.accessor.get(holder)
    }

    /// Write a value into this parameter on a holder instance.
    ///
    /// # Errors
    ///
    /// See [`FieldAccessor::set`].
    pub fn set(&self, holder: &mut dyn Any, value: SqlValue) -> Result<()> {
        self.accessor.set(holder, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FromSqlValue, IntoSqlValue};

    struct Holder {
        code: Option<i32>
    }

    fn code_accessor() -> FieldAccessor {
        FieldAccessor::new(
            "code",
            |holder| {
                let holder = downcast_holder::<Holder>(holder, "code")?;
                Ok(holder.code.into_sql_value())
            },
            |holder, value| {
                let holder = downcast_holder_mut::<Holder>(holder, "code")?;
                holder.code = FromSqlValue::from_sql_value(value)?;
                Ok(())
            }
        )
    }

    #[test]
    fn accessor_round_trip() {
        let accessor = code_accessor();
        let mut holder = Holder {
            code: None
        };
        accessor.set(&mut holder, SqlValue::I32(9)).unwrap();
        assert_eq!(holder.code, Some(9));
        assert_eq!(accessor.get(&holder).unwrap(), SqlValue::I32(9));
    }

    #[test]
    fn accessor_rejects_foreign_holder() {
        let accessor = code_accessor();
        let err = accessor.get(&"not a holder").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Holder"));
        assert!(msg.contains("code"));
    }

    #[test]
    fn nested_accessor_projects_into_parent() {
        struct Parent {
            base: Holder
        }

        fn project_ref(parent: &Parent) -> &dyn std::any::Any {
            &parent.base
        }

        fn project_mut(parent: &mut Parent) -> &mut dyn std::any::Any {
            &mut parent.base
        }

        let accessor = code_accessor().nested::<Parent, _, _>(project_ref, project_mut);
        let mut parent = Parent {
            base: Holder {
                code: Some(1)
            }
        };
        assert_eq!(accessor.get(&parent).unwrap(), SqlValue::I32(1));
        accessor.set(&mut parent, SqlValue::Null).unwrap();
        assert_eq!(parent.base.code, None);
    }

    #[test]
    fn scalar_hint_distinguishes_types() {
        assert_ne!(TypeHint::scalar::<i32>(), TypeHint::scalar::<i64>());
        assert_eq!(TypeHint::scalar::<String>(), TypeHint::scalar::<String>());
    }
}
