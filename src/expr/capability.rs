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

//! The capability oracle: a thin, narrow adapter over the storage client.
//! The compiler only ever asks one question of it — "is request-type T
//! with sub-feature F supported?" — so the trait is kept to that single
//! predicate rather than leaking richer client concepts (connection,
//! retry, credentials) into the compiler.

use pb::ExprType;

/// The two request kinds the capability oracle is probed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// The legacy "select" request kind: probed per wire tag.
    Select,
    /// The "DAG" request kind: probed per documented sub-feature constant.
    Dag,
}

/// DAG sub-feature: ordinal-index (rather than stable-id) column refs are
/// understood.
pub const DAG_BASIC: i64 = 1;
/// DAG sub-feature: resolved-signature scalar-function emission is
/// understood.
pub const DAG_SIGNATURE: i64 = 2;

/// Feature id used to probe the DAG kind for `MysqlTime` literal support.
pub fn dag_mysql_time_feature() -> i64 {
    expr_type_feature_id(ExprType::MysqlTime)
}

/// Feature ids for the Select kind correspond to the wire-tag enumeration.
/// `ExprType` carries no explicit discriminants, so this maps each tag to
/// a stable feature id via its position in a fixed canonical order.
pub fn expr_type_feature_id(tp: ExprType) -> i64 {
    use pb::ExprType::*;
    let ordinal = match tp {
        Null => 0,
        Int64 => 1,
        Uint64 => 2,
        String => 3,
        Bytes => 4,
        Float32 => 5,
        Float64 => 6,
        MysqlDuration => 7,
        MysqlDecimal => 8,
        MysqlTime => 9,
        ColumnRef => 10,
        ValueList => 11,
        ScalarFunc => 12,
        LT => 13,
        LE => 14,
        EQ => 15,
        NE => 16,
        GE => 17,
        GT => 18,
        NullEQ => 19,
        In => 20,
        Like => 21,
        Plus => 22,
        Minus => 23,
        Mul => 24,
        Div => 25,
        Mod => 26,
        IntDiv => 27,
        And => 28,
        Or => 29,
        Xor => 30,
        Not => 31,
        BitAnd => 32,
        BitOr => 33,
        BitXor => 34,
        BitNeg => 35,
        LeftShift => 36,
        RightShift => 37,
        Case => 38,
        If => 39,
        IfNull => 40,
        NullIf => 41,
        Coalesce => 42,
        IsNull => 43,
        JSONType => 44,
        JSONExtract => 45,
        JSONUnquote => 46,
        JSONValid => 47,
        JSONObject => 48,
        JSONArray => 49,
        JSONMerge => 50,
        JSONSet => 51,
        JSONInsert => 52,
        JSONReplace => 53,
        JSONRemove => 54,
        JSONContains => 55,
    };
    ordinal
}

/// The capability oracle contract. Narrowed to one boolean predicate so
/// the compiler is trivially testable with fakes.
pub trait Client {
    fn supports(&self, kind: RequestKind, feature_id: i64) -> bool;
}

/// Convenience predicate: is wire tag `tp` supported under the Select kind?
pub fn supports_tag(client: &dyn Client, tp: ExprType) -> bool {
    client.supports(RequestKind::Select, expr_type_feature_id(tp))
}

/// A fixed-feature-set `Client`, handy for callers (and this crate's own
/// tests) that just need a static capability advertisement rather than a
/// live connection.
#[derive(Debug, Clone, Default)]
pub struct StaticClient {
    pub select_tags: Vec<ExprType>,
    pub dag_basic: bool,
    pub dag_signature: bool,
    pub dag_mysql_time: bool,
}

impl StaticClient {
    pub fn new() -> StaticClient {
        StaticClient::default()
    }

    pub fn with_select(mut self, tags: &[ExprType]) -> StaticClient {
        self.select_tags.extend_from_slice(tags);
        self
    }

    pub fn with_dag_basic(mut self) -> StaticClient {
        self.dag_basic = true;
        self
    }

    pub fn with_dag_signature(mut self) -> StaticClient {
        self.dag_signature = true;
        self
    }

    pub fn with_dag_mysql_time(mut self) -> StaticClient {
        self.dag_mysql_time = true;
        self
    }
}

impl Client for StaticClient {
    fn supports(&self, kind: RequestKind, feature_id: i64) -> bool {
        match kind {
            RequestKind::Select => self
                .select_tags
                .iter()
                .any(|&tp| expr_type_feature_id(tp) == feature_id),
            RequestKind::Dag => {
                if feature_id == DAG_BASIC {
                    self.dag_basic
                } else if feature_id == DAG_SIGNATURE {
                    self.dag_signature
                } else if feature_id == dag_mysql_time_feature() {
                    self.dag_mysql_time
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_static_client() {
        let c = StaticClient::new()
            .with_select(&[ExprType::LT, ExprType::ColumnRef])
            .with_dag_basic();
        assert!(supports_tag(&c, ExprType::LT));
        assert!(!supports_tag(&c, ExprType::GT));
        assert!(c.supports(RequestKind::Dag, DAG_BASIC));
        assert!(!c.supports(RequestKind::Dag, DAG_SIGNATURE));
    }
}
