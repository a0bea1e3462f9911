// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata resolution from derived parameter definitions.
//!
//! The resolver owns its two collaborators — the value-type registry and
//! the active dialect — as plain injected values. It keeps no cache:
//! resolving the same holder twice yields equivalent, freshly allocated
//! metadata. Callers that invoke the same procedure repeatedly are
//! expected to cache the result keyed by procedure name and holder type.

use tracing::{debug, trace};

use crate::{
    ProcedureDto,
    descriptor::{ParameterDef, ParameterDescriptor, TypeHint},
    dialect::Dialect,
    error::Result,
    metadata::ProcedureMetadata,
    value_type::ValueTypeRegistry
};

/// Resolves ordered procedure metadata for parameter holder types.
#[derive(Debug, Clone)]
pub struct ProcedureResolver {
    registry: ValueTypeRegistry,
    dialect: Dialect
}

impl ProcedureResolver {
    /// Resolver with the builtin converter registry.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            registry: ValueTypeRegistry::new(),
            dialect
        }
    }

    /// Resolver with a caller-supplied registry.
    #[must_use]
    pub fn with_registry(dialect: Dialect, registry: ValueTypeRegistry) -> Self {
        Self {
            registry,
            dialect
        }
    }

    /// The active dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Mutable access to the registry, for plugin registration.
    pub fn registry_mut(&mut self) -> &mut ValueTypeRegistry {
        &mut self.registry
    }

    /// Resolve complete, ordered metadata for `T`'s procedure.
    ///
    /// # Errors
    ///
    /// Converter resolution failures surface unchanged:
    /// [`crate::Error::UnknownValueType`] for a bad explicit converter
    /// name, [`crate::Error::UnsupportedType`] for a host type without a
    /// registered converter.
    pub fn resolve<T: ProcedureDto>(&self) -> Result<ProcedureMetadata> {
        self.resolve_defs(T::procedure_name(), T::parameter_defs())
    }

    /// Resolve metadata for a procedure that takes no parameters.
    #[must_use]
    pub fn resolve_empty(&self, procedure_name: impl Into<String>) -> ProcedureMetadata {
        ProcedureMetadata::empty(procedure_name.into())
    }

    /// Resolve metadata from explicit parameter definitions.
    ///
    /// `defs` must be in walk order (embedded base holders first, then
    /// declaration order); the derive macro produces exactly that.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_defs(
        &self,
        procedure_name: &str,
        defs: Vec<ParameterDef>
    ) -> Result<ProcedureMetadata> {
        debug!(
            procedure = procedure_name,
            params = defs.len(),
            "resolving procedure metadata"
        );
        let mut parameters = Vec::with_capacity(defs.len());
        for def in defs {
            let value_type = match (def.value_type, def.type_hint) {
                (Some(name), _) => self.registry.by_name(name)?,
                (None, TypeHint::Sequence) => {
                    self.registry.by_name(self.dialect.cursor_value_type())?
                }
                (None, TypeHint::Scalar { type_id, type_name }) => {
                    self.registry.by_type_id(type_id, type_name)?
                }
            };
            trace!(
                field = def.name,
                direction = def.direction.as_str(),
                value_type = value_type.name(),
                "resolved parameter"
            );
            parameters.push(ParameterDescriptor::new(def, value_type));
        }
        Ok(ProcedureMetadata::new(procedure_name.to_string(), parameters))
    }
}
