// Copyright 2016 PingCAP, Inc.
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

pub mod mysql;

use std::cmp::Ordering;

use self::mysql::decimal::DecimalEncoder;
use self::mysql::{Decimal, Duration, Time};
use util::codec::number::{NumberEncoder, encode_f32_as_f64};
use util::codec::{Error, Result};

/// The closed set of scalar value kinds a `Literal` expression can carry.
/// Kinds outside this set are never constructed by this crate's
/// `Expression` input and are rejected by the compiler's literal dispatch
/// as non-pushable.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    I64(i64),
    U64(u64),
    /// A charset-bearing text value.
    Str(Vec<u8>),
    /// `KindBytes`: an opaque byte string. Encodes identically to `Str`,
    /// but keeps a distinct wire `Tp` (`String` vs `Bytes`).
    Bytes(Vec<u8>),
    F32(f32),
    F64(f64),
    Dec(Decimal),
    Dur(Duration),
    Time(Time),
}

impl Datum {
    /// A coarse discriminant used to check `ValueList` homogeneity without
    /// pulling `Null` into the comparison.
    pub fn kind_name(&self) -> &'static str {
        match *self {
            Datum::Null => "null",
            Datum::I64(_) => "int",
            Datum::U64(_) => "uint",
            Datum::Str(_) | Datum::Bytes(_) => "bytes",
            Datum::F32(_) | Datum::F64(_) => "float",
            Datum::Dec(_) => "decimal",
            Datum::Dur(_) => "duration",
            Datum::Time(_) => "time",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(*self, Datum::Null)
    }

    /// Appends this datum's standalone memcomparable byte form. Every
    /// encoder here is a pure append; the only failure mode is `Time`'s
    /// packing precondition, surfaced as `Err` so callers can degrade the
    /// whole expression to "not pushable".
    pub fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        match *self {
            Datum::Null => Ok(()),
            Datum::I64(v) => buf.encode_i64(v),
            Datum::U64(v) => buf.encode_u64(v),
            Datum::Str(ref bs) | Datum::Bytes(ref bs) => {
                buf.extend_from_slice(bs);
                Ok(())
            }
            Datum::F32(v) => encode_f32_as_f64(buf, v),
            Datum::F64(v) => buf.encode_f64(v),
            Datum::Dec(ref d) => buf.encode_decimal(d),
            Datum::Dur(d) => buf.encode_i64(d.to_nanos()),
            Datum::Time(_) => Err(Error::InvalidDataType(
                "Time must be encoded via its packed-uint form, not Datum::encode".into(),
            )),
        }
    }

    /// Appends this datum's "encode value" form: a one-byte kind flag
    /// followed by a self-delimiting payload. Unlike `encode`, this is
    /// meant for concatenating several datums into one blob (`ValueList`)
    /// that a reader must be able to split back into its original values —
    /// `Null` still contributes its flag byte, and variable-length payloads
    /// carry an explicit length so two different byte strings can never
    /// collide on the wire.
    pub fn encode_with_flag(&self, buf: &mut Vec<u8>) -> Result<()> {
        match *self {
            Datum::Null => {
                buf.push(NIL_FLAG);
                Ok(())
            }
            Datum::I64(v) => {
                buf.push(INT_FLAG);
                buf.encode_i64(v)
            }
            Datum::U64(v) => {
                buf.push(UINT_FLAG);
                buf.encode_u64(v)
            }
            Datum::Str(ref bs) | Datum::Bytes(ref bs) => {
                buf.push(BYTES_FLAG);
                buf.encode_u64(bs.len() as u64)?;
                buf.extend_from_slice(bs);
                Ok(())
            }
            Datum::F32(v) => {
                buf.push(FLOAT_FLAG);
                encode_f32_as_f64(buf, v)
            }
            Datum::F64(v) => {
                buf.push(FLOAT_FLAG);
                buf.encode_f64(v)
            }
            Datum::Dec(ref d) => {
                buf.push(DECIMAL_FLAG);
                buf.encode_decimal(d)
            }
            Datum::Dur(d) => {
                buf.push(DURATION_FLAG);
                buf.encode_i64(d.to_nanos())
            }
            Datum::Time(_) => Err(Error::InvalidDataType(
                "Time must be encoded via its packed-uint form, not Datum::encode_with_flag".into(),
            )),
        }
    }
}

const NIL_FLAG: u8 = 0;
const BYTES_FLAG: u8 = 1;
const INT_FLAG: u8 = 2;
const UINT_FLAG: u8 = 3;
const FLOAT_FLAG: u8 = 4;
const DECIMAL_FLAG: u8 = 5;
const DURATION_FLAG: u8 = 6;

/// Orders two datums of the *same* kind for `ValueList` construction,
/// comparing `Str`/`Bytes` under `collation` rather than raw byte order.
/// The compiler is total over its input domain, so a call with mismatched
/// kinds — which should never happen, since `expr::value_list` checks
/// homogeneity first — falls back to `Ordering::Equal` rather than
/// panicking.
pub fn cmp_same_kind(a: &Datum, b: &Datum, collation: &str) -> Ordering {
    match (a, b) {
        (&Datum::Null, &Datum::Null) => Ordering::Equal,
        (&Datum::Null, _) => Ordering::Less,
        (_, &Datum::Null) => Ordering::Greater,
        (&Datum::I64(x), &Datum::I64(y)) => x.cmp(&y),
        (&Datum::U64(x), &Datum::U64(y)) => x.cmp(&y),
        (&Datum::Str(ref x), &Datum::Str(ref y)) => mysql::collation_compare(collation, x, y),
        (&Datum::Bytes(ref x), &Datum::Bytes(ref y)) => mysql::collation_compare(collation, x, y),
        (&Datum::F32(x), &Datum::F32(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (&Datum::F64(x), &Datum::F64(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (&Datum::Dec(ref x), &Datum::Dec(ref y)) => x.cmp(y),
        (&Datum::Dur(x), &Datum::Dur(y)) => x.cmp(&y),
        (&Datum::Time(ref x), &Datum::Time(ref y)) => x.to_packed_u64().cmp(&y.to_packed_u64()),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode_roundless_ordering() {
        let mut a = Vec::new();
        Datum::I64(-5).encode(&mut a).unwrap();
        let mut b = Vec::new();
        Datum::I64(5).encode(&mut b).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_bytes_datum_is_raw() {
        let mut buf = Vec::new();
        Datum::Bytes(b"abc".to_vec()).encode(&mut buf).unwrap();
        assert_eq!(buf, b"abc");
    }

    #[test]
    fn test_cmp_same_kind_respects_ci_collation() {
        let upper = Datum::Str(b"B".to_vec());
        let lower = Datum::Str(b"a".to_vec());
        assert_eq!(cmp_same_kind(&upper, &lower, "utf8mb4_bin"), Ordering::Greater);
        assert_eq!(cmp_same_kind(&upper, &lower, "utf8mb4_general_ci"), Ordering::Greater);

        let a = Datum::Str(b"A".to_vec());
        let b = Datum::Str(b"a".to_vec());
        assert_ne!(cmp_same_kind(&a, &b, "utf8mb4_bin"), Ordering::Equal);
        assert_eq!(cmp_same_kind(&a, &b, "utf8mb4_general_ci"), Ordering::Equal);
    }

    #[test]
    fn test_encode_with_flag_keeps_null() {
        let mut buf = Vec::new();
        Datum::Null.encode_with_flag(&mut buf).unwrap();
        assert_eq!(buf, vec![NIL_FLAG]);
    }

    #[test]
    fn test_encode_with_flag_length_prefixes_bytes() {
        let mut first = Vec::new();
        Datum::Str(b"ab".to_vec()).encode_with_flag(&mut first).unwrap();
        Datum::Str(b"cde".to_vec()).encode_with_flag(&mut first).unwrap();

        let mut second = Vec::new();
        Datum::Str(b"a".to_vec()).encode_with_flag(&mut second).unwrap();
        Datum::Str(b"bcde".to_vec()).encode_with_flag(&mut second).unwrap();

        assert_ne!(first, second);
    }
}
