// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use procmeta_derive::{Dialect, Procedure, ProcedureResolver};

#[derive(Procedure)]
#[procedure(name = "SP_FETCH_MEMBER")]
pub struct SpFetchMemberPmb {
    #[param("in,0")]
    pub member_id: Option<i64>,

    #[param("out")]
    pub member_name: Option<String>,

    #[param("return")]
    pub result_code: Option<i32>,
}

fn main() {
    let resolver = ProcedureResolver::new(Dialect::Postgres);
    let metadata = resolver.resolve::<SpFetchMemberPmb>().unwrap();

    assert_eq!(metadata.procedure_name(), "SP_FETCH_MEMBER");
    assert!(metadata.has_return_parameter());

    let names: Vec<_> = metadata.parameters().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["result_code", "member_name", "member_id"]);

    assert_eq!(metadata.build_call_sql(), "{? = call SP_FETCH_MEMBER(?, ?)}");
}
