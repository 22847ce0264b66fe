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

//! `ColumnRef` compilation.

use codec::mysql::types;
use pb::{Expr, ExprType};
use util::codec::number::NumberEncoder;

use super::capability::{supports_tag, Client, RequestKind, DAG_BASIC};
use super::ColumnRef;

/// MySQL types a `ColumnRef` is never pushed for.
fn is_excluded_type(tp: u8) -> bool {
    matches!(
        tp,
        types::BIT | types::SET | types::ENUM | types::GEOMETRY | types::UNSPECIFIED
    )
}

pub fn compile(client: &dyn Client, column: &ColumnRef) -> Option<Expr> {
    if is_excluded_type(column.field_type.type_code) {
        return None;
    }
    if !supports_tag(client, ExprType::ColumnRef) {
        return None;
    }

    let payload = if client.supports(RequestKind::Dag, DAG_BASIC) {
        column.index as i64
    } else {
        // Zero/−1 column ids are not a column from a base table  and can not be pushed down.
        if column.id == 0 || column.id == -1 {
            return None;
        }
        column.id
    };

    let mut buf = Vec::with_capacity(8);
    buf.encode_i64(payload).ok()?;
    let mut expr = Expr::with_tp(ExprType::ColumnRef);
    expr.set_val(buf);
    Some(expr)
}
