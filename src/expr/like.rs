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

//! `LIKE` compilation. Only patterns like `abc`, `%abc`,
//! `abc%`, `%abc%` can be pushed down; the escape argument is validated
//! and then dropped from the emitted node.

use codec::Datum;
use pb::{Expr, ExprType};

use super::capability::{supports_tag, Client};
use super::compiler;
use super::{Expression, Literal, StatementContext};

const BACKSLASH: i64 = b'\\' as i64;

pub fn compile(client: &dyn Client, sc: &StatementContext, args: &[Expression]) -> Option<Expr> {
    if !supports_tag(client, ExprType::Like) {
        return None;
    }
    let (subject, pattern, escape) = match args {
        [s, p, e] => (s, p, e),
        _ => return None,
    };

    if !is_backslash_literal(escape) {
        return None;
    }
    let pattern_bytes = match string_literal_bytes(pattern) {
        Some(b) => b,
        None => return None,
    };
    if !is_pushable_pattern(pattern_bytes) {
        return None;
    }

    let subject_pb = compiler::compile(client, sc, subject)?;
    let pattern_pb = compiler::compile(client, sc, pattern)?;

    let mut expr = Expr::with_tp(ExprType::Like);
    expr.mut_children().push(subject_pb);
    expr.mut_children().push(pattern_pb);
    Some(expr)
}

fn is_backslash_literal(e: &Expression) -> bool {
    match e {
        Expression::Literal(Literal { value: Datum::I64(v), .. }) => *v == BACKSLASH,
        _ => false,
    }
}

fn string_literal_bytes(e: &Expression) -> Option<&[u8]> {
    match e {
        Expression::Literal(Literal { value: Datum::Str(bs), .. }) => Some(bs),
        _ => None,
    }
}

/// A pattern is pushable if it contains no `\` and no `_`, and its only
/// `%` occurrences are the first or last byte. An empty pattern vacuously
/// satisfies this and is accepted rather than rejected.
fn is_pushable_pattern(pattern: &[u8]) -> bool {
    let last = pattern.len().saturating_sub(1);
    for (i, &b) in pattern.iter().enumerate() {
        match b {
            b'\\' | b'_' => return false,
            b'%' if i != 0 && i != last => return false,
            _ => {}
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use expr::capability::StaticClient;
    use expr::FieldType;

    fn str_lit(s: &str) -> Expression {
        Expression::literal(Datum::Str(s.as_bytes().to_vec()), FieldType::default())
    }

    fn col(idx: usize) -> Expression {
        Expression::column(idx, 1, FieldType::default())
    }

    fn escape_ok() -> Expression {
        Expression::literal(Datum::I64(BACKSLASH), FieldType::default())
    }

    fn client() -> StaticClient {
        StaticClient::new()
            .with_select(&[ExprType::Like, ExprType::ColumnRef, ExprType::String])
            .with_dag_basic()
    }

    #[test]
    fn test_prefix_and_suffix_wildcard_pushed() {
        let sc = StatementContext::default();
        for pat in &["abc%", "%abc", "%abc%", "abc"] {
            let args = vec![col(0), str_lit(pat), escape_ok()];
            assert!(compile(&client(), &sc, &args).is_some(), "pattern {:?}", pat);
        }
    }

    #[test]
    fn test_interior_wildcard_rejected() {
        let sc = StatementContext::default();
        let args = vec![col(0), str_lit("a%b"), escape_ok()];
        assert!(compile(&client(), &sc, &args).is_none());
    }

    #[test]
    fn test_underscore_rejected() {
        let sc = StatementContext::default();
        let args = vec![col(0), str_lit("a_c"), escape_ok()];
        assert!(compile(&client(), &sc, &args).is_none());
    }

    #[test]
    fn test_wrong_escape_rejected() {
        let sc = StatementContext::default();
        let bad_escape = Expression::literal(Datum::I64('!' as i64), FieldType::default());
        let args = vec![col(0), str_lit("abc%"), bad_escape];
        assert!(compile(&client(), &sc, &args).is_none());
    }

    #[test]
    fn test_empty_pattern_accepted() {
        let sc = StatementContext::default();
        let args = vec![col(0), str_lit(""), escape_ok()];
        assert!(compile(&client(), &sc, &args).is_some());
    }
}
