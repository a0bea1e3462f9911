// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use procmeta_derive::{Dialect, Procedure, ProcedureResolver};

#[derive(Procedure)]
#[procedure(name = "SP_EXPORT")]
pub struct SpExportPmb {
    #[param("in", value_type = "binary")]
    pub payload: Option<String>,
}

fn main() {
    let resolver = ProcedureResolver::new(Dialect::Unknown);
    let metadata = resolver.resolve::<SpExportPmb>().unwrap();

    // The explicit converter name wins over the field's host type.
    assert_eq!(metadata.parameters()[0].value_type().name(), "binary");
}
