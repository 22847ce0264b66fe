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

//! The expression compiler: the recursive tree rewriter.
//! `compile` is the single public operation; it returns absent whenever any
//! precondition fails and never panics.

use codec::Datum;
use pb::{Expr, ExprType};

use super::capability::{supports_tag, Client, RequestKind, DAG_SIGNATURE};
use super::{arithmetic, bitwise, column, constant, control, field_type, json, like, logical, value_list};
use super::{Expression, FieldType, ScalarFunction, StatementContext};

pub fn compile(client: &dyn Client, sc: &StatementContext, expr: &Expression) -> Option<Expr> {
    match *expr {
        Expression::Literal(ref lit) => constant::compile(client, lit),
        Expression::ColumnRef(ref col) => column::compile(client, col),
        Expression::ScalarFunction(ref func) => compile_scalar_fn(client, sc, func),
    }
}

fn compile_scalar_fn(client: &dyn Client, sc: &StatementContext, func: &ScalarFunction) -> Option<Expr> {
    let name = func.name.as_str();

    if let Some(tag) = comparison_tag(name) {
        return generic_emit(client, sc, tag, func, true);
    }
    if name == "in" {
        return compile_in(client, sc, func);
    }
    if name == "like" {
        return like::compile(client, sc, &func.args);
    }
    if let Some(tag) = arithmetic::tag_for(name) {
        return generic_emit(client, sc, tag, func, true);
    }
    if let Some(tag) = logical::tag_for(name) {
        return generic_emit(client, sc, tag, func, true);
    }
    if let Some(tag) = bitwise::tag_for(name) {
        return generic_emit(client, sc, tag, func, true);
    }
    if let Some(tag) = control::tag_for(name) {
        return generic_emit(client, sc, tag, func, true);
    }
    if let Some(tag) = json::tag_for(name) {
        // JSON push-down is not gated through the Select oracle.
        return generic_emit(client, sc, tag, func, false);
    }
    None
}

fn comparison_tag(name: &str) -> Option<ExprType> {
    match name {
        "lt" => Some(ExprType::LT),
        "le" => Some(ExprType::LE),
        "eq" => Some(ExprType::EQ),
        "ne" => Some(ExprType::NE),
        "ge" => Some(ExprType::GE),
        "gt" => Some(ExprType::GT),
        "nulleq" => Some(ExprType::NullEQ),
        _ => None,
    }
}

/// Generic scalar-function emission, shared by every family except IN and
/// LIKE (which have their own sub-algorithms): recursively compiles every
/// argument, failing the whole call if any argument fails, then emits
/// either a generic per-operator tag or a signature-gated `ScalarFunc` node.
///
/// `gated` is false only for the JSON family, whose push-down support is
/// advertised independently of the general Select capability.
fn generic_emit(
    client: &dyn Client,
    sc: &StatementContext,
    tag: ExprType,
    func: &ScalarFunction,
    gated: bool,
) -> Option<Expr> {
    if gated && !supports_tag(client, tag) {
        return None;
    }

    let mut children = Vec::with_capacity(func.args.len());
    for arg in &func.args {
        children.push(compile(client, sc, arg)?);
    }

    let use_signature = client.supports(RequestKind::Dag, DAG_SIGNATURE) && func.signature.map_or(false, |s| s > 0);

    let mut expr = if use_signature {
        let mut e = Expr::with_tp(ExprType::ScalarFunc);
        e.set_sig(func.signature.unwrap() as i32);
        e.set_field_type(field_type::project(&func.return_type));
        e
    } else {
        Expr::with_tp(tag)
    };
    expr.set_children(children);
    Some(expr)
}

/// IN: first argument compiled generically, the rest must all be literals,
/// collected into a single `ValueList`.
fn compile_in(client: &dyn Client, sc: &StatementContext, func: &ScalarFunction) -> Option<Expr> {
    if !supports_tag(client, ExprType::In) {
        return None;
    }
    let (first, rest) = func.args.split_first()?;

    let mut datums: Vec<Datum> = Vec::with_capacity(rest.len());
    for arg in rest {
        match *arg {
            Expression::Literal(ref lit) => datums.push(lit.value.clone()),
            _ => return None,
        }
    }

    let first_pb = compile(client, sc, first)?;
    let list_pb = value_list::build(client, sc, &datums)?;

    let mut expr = Expr::with_tp(ExprType::In);
    expr.mut_children().push(first_pb);
    expr.mut_children().push(list_pb);
    Some(expr)
}
