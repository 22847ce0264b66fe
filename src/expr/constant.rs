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

//! `Literal` compilation.

use codec::mysql::TimeType;
use codec::Datum;
use pb::{Expr, ExprType};
use util::codec::number::NumberEncoder;

use super::capability::{dag_mysql_time_feature, supports_tag, Client, RequestKind};
use super::field_type;
use super::Literal;

pub fn compile(client: &dyn Client, lit: &Literal) -> Option<Expr> {
    let tp = match lit.value {
        Datum::Null => ExprType::Null,
        Datum::I64(_) => ExprType::Int64,
        Datum::U64(_) => ExprType::Uint64,
        Datum::Str(_) => ExprType::String,
        Datum::Bytes(_) => ExprType::Bytes,
        Datum::F32(_) => ExprType::Float32,
        Datum::F64(_) => ExprType::Float64,
        Datum::Dec(_) => ExprType::MysqlDecimal,
        Datum::Dur(_) => ExprType::MysqlDuration,
        Datum::Time(ref t) => return compile_time(client, t, lit),
    };

    if !supports_tag(client, tp) {
        return None;
    }

    let mut buf = Vec::new();
    if lit.value.encode(&mut buf).is_err() {
        warn!("failed to encode literal datum {:?} for push-down", lit.value);
        return None;
    }

    let mut expr = Expr::with_tp(tp);
    if !buf.is_empty() || matches!(lit.value, Datum::Str(_) | Datum::Bytes(_)) {
        expr.set_val(buf);
    }
    Some(expr)
}

fn compile_time(client: &dyn Client, t: &::codec::mysql::Time, lit: &Literal) -> Option<Expr> {
    if !client.supports(RequestKind::Dag, dag_mysql_time_feature()) {
        return None;
    }

    // The datum itself carries the session location it was interpreted in;
    // only `Timestamp` is normalized, and it is always normalized to UTC.
    let utc = ::chrono::FixedOffset::east(0);
    let normalized;
    let to_pack = if t.get_tp() == TimeType::Timestamp && t.location() != utc {
        match t.convert_time_zone(utc) {
            Ok(n) => {
                normalized = n;
                &normalized
            }
            Err(e) => {
                warn!("failed to normalize timestamp literal to UTC: {}", e);
                return None;
            }
        }
    } else {
        t
    };

    let packed = to_pack.to_packed_u64();
    let mut buf = Vec::with_capacity(8);
    if buf.encode_u64(packed).is_err() {
        return None;
    }

    let mut expr = Expr::with_tp(ExprType::MysqlTime);
    expr.set_val(buf);
    expr.set_field_type(field_type::project(&lit.field_type));
    Some(expr)
}

#[cfg(test)]
mod test {
    use super::*;
    use codec::mysql::{Decimal, Duration, Time};
    use expr::capability::StaticClient;
    use expr::FieldType;
    use util::codec::number::NumberDecoder;

    fn ft() -> FieldType {
        FieldType::default()
    }

    #[test]
    fn test_int_literal() {
        let client = StaticClient::new().with_select(&[ExprType::Int64]);
        let lit = Literal {
            value: Datum::I64(7),
            field_type: ft(),
        };
        let e = compile(&client, &lit).unwrap();
        assert_eq!(e.get_tp(), ExprType::Int64);
        let mut v = e.get_val();
        assert_eq!(v.decode_i64().unwrap(), 7);
    }

    #[test]
    fn test_unsupported_tag_rejected() {
        let client = StaticClient::new();
        let lit = Literal {
            value: Datum::I64(7),
            field_type: ft(),
        };
        assert!(compile(&client, &lit).is_none());
    }

    #[test]
    fn test_decimal_literal() {
        let client = StaticClient::new().with_select(&[ExprType::MysqlDecimal]);
        let lit = Literal {
            value: Datum::Dec("12.50".parse::<Decimal>().unwrap()),
            field_type: ft(),
        };
        assert!(compile(&client, &lit).is_some());
    }

    #[test]
    fn test_duration_literal() {
        let client = StaticClient::new().with_select(&[ExprType::MysqlDuration]);
        let lit = Literal {
            value: Datum::Dur(Duration::from_nanos(12)),
            field_type: ft(),
        };
        let e = compile(&client, &lit).unwrap();
        let mut v = e.get_val();
        assert_eq!(v.decode_i64().unwrap(), 12);
    }

    #[test]
    fn test_timestamp_requires_dag_mysql_time() {
        let loc = ::chrono::FixedOffset::east(8 * 3600);
        let t = Time::new(TimeType::Timestamp, loc, 2023, 6, 1, 12, 0, 0, 0).unwrap();
        let lit = Literal {
            value: Datum::Time(t),
            field_type: ft(),
        };

        let no_dag = StaticClient::new();
        assert!(compile(&no_dag, &lit).is_none());

        let with_dag = StaticClient::new().with_dag_mysql_time();
        let e = compile(&with_dag, &lit).unwrap();
        assert_eq!(e.get_tp(), ExprType::MysqlTime);
        assert!(e.get_field_type().is_some());

        let utc = Time::new(TimeType::Timestamp, ::chrono::FixedOffset::east(0), 2023, 6, 1, 4, 0, 0, 0).unwrap();
        let mut expected_buf = Vec::new();
        expected_buf.encode_u64(utc.to_packed_u64()).unwrap();
        assert_eq!(e.get_val(), &expected_buf[..]);
    }

    #[test]
    fn test_date_is_not_shifted() {
        let loc = ::chrono::FixedOffset::east(8 * 3600);
        let t = Time::new(TimeType::Date, loc, 2023, 6, 1, 0, 0, 0, 0).unwrap();
        let lit = Literal {
            value: Datum::Time(t.clone()),
            field_type: ft(),
        };
        let client = StaticClient::new().with_dag_mysql_time();
        let e = compile(&client, &lit).unwrap();
        let mut expected_buf = Vec::new();
        expected_buf.encode_u64(t.to_packed_u64()).unwrap();
        assert_eq!(e.get_val(), &expected_buf[..]);
    }
}
