// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use procmeta_derive::{Dialect, Procedure, ProcedureResolver};

#[derive(Procedure)]
#[procedure(name = "SP_HOUSEKEEPING")]
pub struct SpHousekeepingPmb {
    pub note: String,
}

fn main() {
    let resolver = ProcedureResolver::new(Dialect::Sqlite);

    let metadata = resolver.resolve::<SpHousekeepingPmb>().unwrap();
    assert!(metadata.parameters().is_empty());
    assert!(!metadata.has_return_parameter());

    let bare = resolver.resolve_empty("SP_PING");
    assert!(bare.parameters().is_empty());
    assert_eq!(bare.build_call_sql(), "{call SP_PING()}");
}
