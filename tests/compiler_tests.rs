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

//! End-to-end scenarios for the expression push-down compiler.

extern crate chrono;
extern crate expr_pushdown;

use chrono::FixedOffset;
use expr_pushdown::codec::mysql::{types, Time, TimeType};
use expr_pushdown::codec::Datum;
use expr_pushdown::expr::capability::{Client, RequestKind, StaticClient, DAG_SIGNATURE};
use expr_pushdown::expr::{assemble, compiler, Expression, FieldType, StatementContext};
use expr_pushdown::pb::ExprType;

fn col(index: usize, tp: u8) -> Expression {
    Expression::column(index, 0, FieldType::new(tp))
}

fn int_lit(v: i64) -> Expression {
    Expression::literal(Datum::I64(v), FieldType::new(types::LONG))
}

fn str_lit(s: &str) -> Expression {
    Expression::literal(Datum::Str(s.as_bytes().to_vec()), FieldType::new(types::VARCHAR))
}

fn escape_lit() -> Expression {
    Expression::literal(Datum::I64('\\' as i64), FieldType::new(types::LONG))
}

#[test]
fn scenario_1_column_lt_literal() {
    let client = StaticClient::new()
        .with_select(&[ExprType::ColumnRef, ExprType::Int64, ExprType::LT])
        .with_dag_basic();
    let sc = StatementContext::default();
    let expr = Expression::scalar_fn("lt", vec![col(3, types::LONG), int_lit(7)], FieldType::default(), None);

    let wire = compiler::compile(&client, &sc, &expr).expect("should push down");
    assert_eq!(wire.get_tp(), ExprType::LT);
    let children = wire.get_children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].get_tp(), ExprType::ColumnRef);
    assert_eq!(children[1].get_tp(), ExprType::Int64);
}

#[test]
fn scenario_2_like_prefix_and_rejected_interior_wildcard() {
    let client = StaticClient::new()
        .with_select(&[ExprType::ColumnRef, ExprType::String, ExprType::Like])
        .with_dag_basic();
    let sc = StatementContext::default();

    let ok = Expression::scalar_fn(
        "like",
        vec![col(0, types::VARCHAR), str_lit("abc%"), escape_lit()],
        FieldType::default(),
        None,
    );
    let wire = compiler::compile(&client, &sc, &ok).expect("prefix wildcard should push");
    assert_eq!(wire.get_tp(), ExprType::Like);
    assert_eq!(wire.get_children()[1].get_tp(), ExprType::String);

    let bad = Expression::scalar_fn(
        "like",
        vec![col(0, types::VARCHAR), str_lit("a%b"), escape_lit()],
        FieldType::default(),
        None,
    );
    assert!(compiler::compile(&client, &sc, &bad).is_none());
}

#[test]
fn scenario_3_cnf_with_one_unpushable_like() {
    let client = StaticClient::new()
        .with_select(&[ExprType::ColumnRef, ExprType::Int64, ExprType::EQ, ExprType::GT])
        .with_dag_basic();
    let sc = StatementContext::default();

    let eq1 = Expression::scalar_fn("eq", vec![col(0, types::LONG), int_lit(1)], FieldType::default(), None);
    let like_a_b = Expression::scalar_fn(
        "like",
        vec![col(0, types::VARCHAR), str_lit("a_b"), escape_lit()],
        FieldType::default(),
        None,
    );
    let gt0 = Expression::scalar_fn("gt", vec![col(0, types::LONG), int_lit(0)], FieldType::default(), None);

    let exprs = vec![eq1, like_a_b, gt0];
    let (wire, pushed, remained) = assemble::compile_cnf(&client, &sc, &exprs);

    assert_eq!(pushed.len(), 2);
    assert_eq!(remained.len(), 1);
    let top = wire.expect("two predicates should fold");
    assert_eq!(top.get_tp(), ExprType::And);
    assert_eq!(top.get_children()[0].get_tp(), ExprType::EQ);
    assert_eq!(top.get_children()[1].get_tp(), ExprType::GT);
}

#[test]
fn scenario_4_in_list_homogeneous_and_heterogeneous() {
    let client = StaticClient::new()
        .with_select(&[ExprType::ColumnRef, ExprType::In, ExprType::ValueList])
        .with_dag_basic();
    let sc = StatementContext::default();

    let good = Expression::scalar_fn(
        "in",
        vec![col(0, types::LONG), int_lit(1), int_lit(2), int_lit(3)],
        FieldType::default(),
        None,
    );
    let wire = compiler::compile(&client, &sc, &good).expect("homogeneous IN should push");
    assert_eq!(wire.get_tp(), ExprType::In);
    assert_eq!(wire.get_children()[1].get_tp(), ExprType::ValueList);

    let bad = Expression::scalar_fn(
        "in",
        vec![col(0, types::LONG), int_lit(1), str_lit("x"), int_lit(3)],
        FieldType::default(),
        None,
    );
    assert!(compiler::compile(&client, &sc, &bad).is_none());
}

#[test]
fn scenario_5_timestamp_utc_normalization() {
    let plus8 = Time::new(TimeType::Timestamp, FixedOffset::east(8 * 3600), 2023, 6, 1, 12, 0, 0, 0).unwrap();
    let lit = Expression::literal(Datum::Time(plus8), FieldType::new(types::TIMESTAMP));

    let without_dag = StaticClient::new();
    let sc = StatementContext::default();
    assert!(compiler::compile(&without_dag, &sc, &lit).is_none());

    let with_dag = StaticClient::new().with_dag_mysql_time();
    let wire = compiler::compile(&with_dag, &sc, &lit).expect("timestamp should push with DAG/MysqlTime");
    assert_eq!(wire.get_tp(), ExprType::MysqlTime);

    let utc = Time::new(TimeType::Timestamp, FixedOffset::east(0), 2023, 6, 1, 4, 0, 0, 0).unwrap();
    assert_eq!(utc.to_packed_u64(), {
        use expr_pushdown::util::codec::number::NumberDecoder;
        let mut v = wire.get_val();
        v.decode_u64().unwrap()
    });
}

#[test]
fn scenario_6_scalar_func_signature_gating() {
    let sc = StatementContext::default();
    let plus = Expression::scalar_fn(
        "plus",
        vec![col(0, types::LONG), int_lit(1)],
        FieldType::new(types::LONG),
        Some(42),
    );

    let base = StaticClient::new()
        .with_select(&[ExprType::ColumnRef, ExprType::Int64, ExprType::Plus])
        .with_dag_basic();
    let without_sig = compiler::compile(&base, &sc, &plus).unwrap();
    assert_eq!(without_sig.get_tp(), ExprType::Plus);
    assert!(without_sig.get_field_type().is_none());

    let with_sig = base.with_dag_signature();
    assert!(with_sig.supports(RequestKind::Dag, DAG_SIGNATURE));
    let with_sig_wire = compiler::compile(&with_sig, &sc, &plus).unwrap();
    assert_eq!(with_sig_wire.get_tp(), ExprType::ScalarFunc);
    assert_eq!(with_sig_wire.get_sig(), Some(42));
    assert!(with_sig_wire.get_field_type().is_some());
}

#[test]
fn determinism_same_input_same_output() {
    let client = StaticClient::new()
        .with_select(&[ExprType::ColumnRef, ExprType::Int64, ExprType::EQ])
        .with_dag_basic();
    let sc = StatementContext::default();
    let expr = Expression::scalar_fn("eq", vec![col(1, types::LONG), int_lit(9)], FieldType::default(), None);

    let a = compiler::compile(&client, &sc, &expr).unwrap();
    let b = compiler::compile(&client, &sc, &expr).unwrap();
    assert_eq!(a, b);
}

#[test]
fn column_ref_ordinal_vs_id_exclusivity() {
    let with_basic = StaticClient::new().with_select(&[ExprType::ColumnRef]).with_dag_basic();
    let without_basic = StaticClient::new().with_select(&[ExprType::ColumnRef]);

    let c = Expression::column(5, 9, FieldType::new(types::LONG));
    let ordinal_wire = compiler::compile(&with_basic, &StatementContext::default(), &c).unwrap();
    let id_wire = compiler::compile(&without_basic, &StatementContext::default(), &c).unwrap();
    assert_ne!(ordinal_wire.get_val(), id_wire.get_val());

    let zero_id = Expression::column(5, 0, FieldType::new(types::LONG));
    assert!(compiler::compile(&without_basic, &StatementContext::default(), &zero_id).is_none());
}
