// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use procmeta_derive::{Dialect, Procedure, ProcedureResolver};

#[derive(Procedure)]
#[procedure(name = "SP_ORDERED")]
pub struct SpOrderedPmb {
    #[param("in,2")]
    pub third: Option<i32>,

    #[param("in,0")]
    pub first: Option<i32>,

    #[param("in,1")]
    pub second: Option<i32>,
}

fn main() {
    let resolver = ProcedureResolver::new(Dialect::MySql);
    let metadata = resolver.resolve::<SpOrderedPmb>().unwrap();

    let names: Vec<_> = metadata.parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert!(!metadata.has_return_parameter());
}
