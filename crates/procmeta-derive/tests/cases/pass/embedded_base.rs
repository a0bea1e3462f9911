// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use procmeta_derive::{Dialect, Procedure, ProcedureResolver};

#[derive(Procedure)]
pub struct CommonPmb {
    #[param("in")]
    pub tenant: Option<String>,
}

#[derive(Procedure)]
#[procedure(name = "SP_CHILD")]
pub struct SpChildPmb {
    #[param(base)]
    pub common: CommonPmb,

    #[param("out")]
    pub result: Option<i32>,
}

fn main() {
    let resolver = ProcedureResolver::new(Dialect::H2);
    let metadata = resolver.resolve::<SpChildPmb>().unwrap();

    // Embedded base parameters come first.
    let names: Vec<_> = metadata.parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["tenant", "result"]);
}
