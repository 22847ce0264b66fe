// Copyright 2017 PingCAP, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.

//! `ValueList` construction, the right-hand side of `IN`.

use codec::{cmp_same_kind, Datum};
use pb::{Expr, ExprType};

use super::capability::{supports_tag, Client};
use super::StatementContext;

/// Homogenizes, sorts the datums under the statement context's collation,
/// and encodes them into a single `ValueList` wire node.
///
/// Requires `supports(Select, ValueList)`. Returns `None` on any
/// homogeneity violation or encode/sort failure.
pub fn build(client: &dyn Client, sc: &StatementContext, datums: &[Datum]) -> Option<Expr> {
    if !supports_tag(client, ExprType::ValueList) {
        return None;
    }

    let kind = datums.iter().find(|d| !d.is_null()).map(Datum::kind_name);
    if let Some(kind) = kind {
        if datums
            .iter()
            .any(|d| !d.is_null() && d.kind_name() != kind)
        {
            return None;
        }
    }

    let mut sorted: Vec<&Datum> = datums.iter().collect();
    sorted.sort_by(|a, b| cmp_same_kind(a, b, &sc.collation));

    let mut buf = Vec::new();
    for d in sorted {
        if d.encode_with_flag(&mut buf).is_err() {
            warn!("failed to encode value list datum {:?}", d);
            return None;
        }
    }

    let mut expr = Expr::with_tp(ExprType::ValueList);
    expr.set_val(buf);
    Some(expr)
}
