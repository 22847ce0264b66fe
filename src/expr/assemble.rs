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

//! Top-level assemblers: the three entry points planners call instead of
//! `compiler::compile` directly.

use pb::{ByItem, Expr, ExprType};

use super::capability::Client;
use super::compiler;
use super::{Expression, StatementContext};

/// Compiles each expression in `exprs`, preserving positions: a non-pushable
/// item becomes an explicit `None` slot rather than being dropped.
pub fn compile_list(client: &dyn Client, sc: &StatementContext, exprs: &[Expression]) -> Vec<Option<Expr>> {
    exprs.iter().map(|e| compiler::compile(client, sc, e)).collect()
}

/// Compiles each expression in `exprs`, folds every success into a single
/// left-deep `And` tree, and returns the untranslated remainder alongside
/// it. `pushed`/`remained` are returned too so callers can distinguish
/// "nothing pushed" from "one item pushed"; `pushed` holds the original
/// `Expression` references (not the compiled wire nodes) so a caller can
/// still inspect what actually made it through.
pub fn compile_cnf<'a>(
    client: &dyn Client,
    sc: &StatementContext,
    exprs: &'a [Expression],
) -> (Option<Expr>, Vec<&'a Expression>, Vec<&'a Expression>) {
    let mut pushed = Vec::new();
    let mut remained = Vec::new();
    let mut wire_exprs = Vec::new();

    for e in exprs {
        match compiler::compile(client, sc, e) {
            Some(wire) => {
                pushed.push(e);
                wire_exprs.push(wire);
            }
            None => remained.push(e),
        }
    }

    let folded = fold_left_deep_and(wire_exprs);
    (folded, pushed, remained)
}

fn fold_left_deep_and(mut items: Vec<Expr>) -> Option<Expr> {
    if items.is_empty() {
        return None;
    }
    let mut acc = items.remove(0);
    for item in items {
        let mut and_node = Expr::with_tp(ExprType::And);
        and_node.mut_children().push(acc);
        and_node.mut_children().push(item);
        acc = and_node;
    }
    Some(acc)
}

/// Compiles a single expression for a `GROUP BY`/`ORDER BY` slot, attaching
/// the descending flag on success.
pub fn by_item(client: &dyn Client, sc: &StatementContext, expr: &Expression, desc: bool) -> Option<ByItem> {
    let wire = compiler::compile(client, sc, expr)?;
    Some(ByItem { expr: wire, desc })
}
