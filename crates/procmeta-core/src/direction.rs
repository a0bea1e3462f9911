// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameter directions and role-spec parsing.
//!
//! A parameter's role is declared as a spec string of the form
//! `"role"` or `"role,index"`, where `role` is one of `in`, `out`,
//! `inout`, `return` (case-insensitive) and `index` is a base-10 integer
//! giving the parameter an explicit position among its siblings.

use crate::error::{Error, Result};

/// Data-flow direction of one stored-procedure parameter.
///
/// A `Return` parameter is the procedure's primary return value; it is
/// also an OUT parameter, since it carries a value back from the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Value flows from the caller into the procedure.
    In,

    /// Value flows from the procedure back to the caller.
    Out,

    /// Value flows both ways.
    InOut,

    /// The procedure's return value. Implies OUT.
    Return
}

impl Direction {
    /// Check if a value is bound before execution.
    #[must_use]
    pub const fn is_in(&self) -> bool {
        matches!(self, Self::In | Self::InOut)
    }

    /// Check if a value is extracted after execution.
    ///
    /// True for `Out`, `InOut` and `Return`.
    #[must_use]
    pub const fn is_out(&self) -> bool {
        matches!(self, Self::Out | Self::InOut | Self::Return)
    }

    /// Check if this is the procedure's return value.
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return)
    }

    /// Canonical lower-case role token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inout",
            Self::Return => "return"
        }
    }
}

/// A parsed `"role[,index]"` parameter spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSpec {
    /// Data-flow direction derived from the role token.
    pub direction: Direction,

    /// Explicit ordering index, when the spec carried one.
    ///
    /// `None` means "no index given" and is distinct from index zero:
    /// index-less parameters keep their declaration position ahead of
    /// explicitly numbered ones.
    pub index: Option<i32>
}

impl RoleSpec {
    /// Parse a role spec string.
    ///
    /// The spec is split at the first comma. The left side, trimmed, must
    /// match one of the four role tokens case-insensitively; the right
    /// side, when present, must parse as a base-10 integer.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRole`] for an unrecognized role token,
    /// [`Error::InvalidIndex`] for a non-numeric index segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use procmeta_core::{Direction, RoleSpec};
    ///
    /// let spec = RoleSpec::parse("in,3").unwrap();
    /// assert_eq!(spec.direction, Direction::In);
    /// assert_eq!(spec.index, Some(3));
    ///
    /// let spec = RoleSpec::parse("RETURN").unwrap();
    /// assert!(spec.direction.is_return());
    /// assert_eq!(spec.index, None);
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let (role, index) = match spec.split_once(',') {
            Some((role, index)) => (role.trim(), Some(index.trim())),
            None => (spec.trim(), None)
        };

        let direction = if role.eq_ignore_ascii_case("in") {
            Direction::In
        } else if role.eq_ignore_ascii_case("out") {
            Direction::Out
        } else if role.eq_ignore_ascii_case("inout") {
            Direction::InOut
        } else if role.eq_ignore_ascii_case("return") {
            Direction::Return
        } else {
            return Err(Error::InvalidRole {
                role: role.to_string()
            });
        };

        let index = match index {
            Some(raw) => {
                let parsed = raw.parse::<i32>().map_err(|source| Error::InvalidIndex {
                    raw: raw.to_string(),
                    spec: spec.to_string(),
                    source
                })?;
                Some(parsed)
            }
            None => None
        };

        Ok(Self {
            direction,
            index
        })
    }
}
