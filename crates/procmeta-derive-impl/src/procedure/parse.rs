// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Procedure derive macro.

mod holder;
mod param;

pub use holder::HolderDef;
pub use param::{FieldDef, ParamKind, is_sequence, unwrap_option};
