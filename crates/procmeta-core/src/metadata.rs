// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved procedure metadata and parameter ordering.

use std::cmp::Ordering;

use crate::descriptor::ParameterDescriptor;

/// Ordered, immutable description of one stored procedure's parameters.
///
/// Built by the resolver, consumed by a call-statement binder that binds
/// IN values before execution and extracts OUT/RETURN values after, in
/// parameter order. The metadata exclusively owns its descriptors.
#[derive(Debug, Clone)]
pub struct ProcedureMetadata {
    procedure_name: String,
    parameters: Vec<ParameterDescriptor>,
    has_return: bool
}

impl ProcedureMetadata {
    pub(crate) fn new(procedure_name: String, mut parameters: Vec<ParameterDescriptor>) -> Self {
        // Stable sort: equal-order parameters keep walk order.
        parameters.sort_by(parameter_order);
        let has_return = parameters.iter().any(|p| p.direction().is_return());
        Self {
            procedure_name,
            parameters,
            has_return
        }
    }

    pub(crate) fn empty(procedure_name: String) -> Self {
        Self {
            procedure_name,
            parameters: Vec::new(),
            has_return: false
        }
    }

    /// Identifier of the target stored procedure.
    #[must_use]
    pub fn procedure_name(&self) -> &str {
        &self.procedure_name
    }

    /// The resolved parameters, in binding order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Check if any parameter is the procedure's return value.
    #[must_use]
    pub const fn has_return_parameter(&self) -> bool {
        self.has_return
    }

    /// The return parameter, when one exists.
    ///
    /// Always the first parameter in binding order.
    #[must_use]
    pub fn return_parameter(&self) -> Option<&ParameterDescriptor> {
        self.parameters.first().filter(|p| p.direction().is_return())
    }

    /// Render the JDBC escape call syntax for this procedure.
    ///
    /// One placeholder per non-return parameter; a return parameter adds
    /// the `? =` receiver.
    ///
    /// # Examples
    ///
    /// `{call SP_JOB(?, ?)}`, or `{? = call SP_JOB(?)}` with a return
    /// parameter.
    #[must_use]
    pub fn build_call_sql(&self) -> String {
        let binds = self
            .parameters
            .iter()
            .filter(|p| !p.direction().is_return())
            .count();
        let marks = vec!["?"; binds].join(", ");
        if self.has_return {
            format!("{{? = call {}({})}}", self.procedure_name, marks)
        } else {
            format!("{{call {}({})}}", self.procedure_name, marks)
        }
    }
}

/// Total order over resolved parameters: return parameters first, then
/// index-less parameters in walk order, then indexed parameters by
/// ascending index.
fn parameter_order(a: &ParameterDescriptor, b: &ParameterDescriptor) -> Ordering {
    match (a.direction().is_return(), b.direction().is_return()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match (a.index(), b.index()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.cmp(&y)
        }
    }
}
