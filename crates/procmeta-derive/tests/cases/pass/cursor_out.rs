// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use procmeta_derive::{Dialect, Procedure, ProcedureResolver};

#[derive(Procedure)]
#[procedure(name = "SP_LIST_URLS")]
pub struct SpListUrlsPmb {
    #[param("in")]
    pub session_id: Option<String>,

    #[param("out")]
    pub url_rows: Vec<String>,
}

fn main() {
    let oracle = ProcedureResolver::new(Dialect::Oracle)
        .resolve::<SpListUrlsPmb>()
        .unwrap();
    assert_eq!(
        oracle.parameters()[1].value_type().name(),
        "oracle_result_set"
    );

    let h2 = ProcedureResolver::new(Dialect::H2)
        .resolve::<SpListUrlsPmb>()
        .unwrap();
    assert_eq!(
        h2.parameters()[1].value_type().name(),
        "serializable_byte_array"
    );
}
