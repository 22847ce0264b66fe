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

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use util::codec::{Error, Result};

/// A fixed-point decimal, represented as a sign plus two digit sequences
/// (integer part, fractional part), most-significant digit first.
///
/// This is a trimmed stand-in for a full arbitrary-precision decimal type;
/// this crate only ever needs to parse a planner-supplied literal, compare
/// it against its peers for `ValueList` ordering, and encode it to its
/// memcomparable byte form — it never evaluates `+`/`-`/`*`/`/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    negative: bool,
    int_digits: Vec<u8>,
    frac_digits: Vec<u8>,
}

impl Decimal {
    pub fn is_zero(&self) -> bool {
        self.int_digits.iter().all(|&d| d == 0) && self.frac_digits.iter().all(|&d| d == 0)
    }

    /// Returns `(precision, frac)`: total significant digits and the
    /// fractional digit count, as consulted when sizing the encode buffer.
    pub fn prec_and_frac(&self) -> (u8, u8) {
        let int_len = self.int_digits.len().max(1) as u8;
        (int_len + self.frac_digits.len() as u8, self.frac_digits.len() as u8)
    }

    /// Appends the canonical memcomparable encoding of this decimal.
    ///
    /// Layout: a sign byte (`0x00` negative, `0x01` zero, `0x02` positive),
    /// the integer part as an explicit digit-count byte followed by the
    /// digits, then the fractional part as digits shifted up by one
    /// (`1..=10`) terminated by a `0` byte. The shift keeps every
    /// fractional digit byte strictly greater than the terminator, so a
    /// shorter fraction compares as though it were right-padded with
    /// trailing zero digits rather than sorting by its own length — two
    /// decimals that share an integer part but diverge partway through
    /// the fraction (`1.19` vs `1.2`) still compare by digit value first.
    /// For a negative decimal every subsequent byte is bitwise-inverted,
    /// which reverses ordering so that more-negative values sort first.
    pub fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        if self.is_zero() {
            buf.push(1);
            return Ok(());
        }
        let sign = if self.negative { 0u8 } else { 2u8 };
        buf.push(sign);

        let flip = |b: u8| if self.negative { !b } else { b };
        if self.int_digits.len() > u8::max_value() as usize {
            return Err(Error::InvalidDataType("decimal too wide to encode".into()));
        }
        buf.push(flip(self.int_digits.len() as u8));
        for &d in &self.int_digits {
            buf.push(flip(d));
        }
        for &d in &self.frac_digits {
            buf.push(flip(d + 1));
        }
        buf.push(flip(0));
        Ok(())
    }
}

impl From<i64> for Decimal {
    fn from(v: i64) -> Decimal {
        let negative = v < 0;
        let magnitude = if v == i64::min_value() {
            v as i128 * -1
        } else {
            i128::from(v.abs())
        };
        let digits: Vec<u8> = magnitude.to_string().bytes().map(|b| b - b'0').collect();
        Decimal {
            negative,
            int_digits: digits,
            frac_digits: Vec::new(),
        }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Decimal> {
        let s = s.trim();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let mut parts = rest.splitn(2, '.');
        let int_part = parts.next().unwrap_or("");
        let frac_part = parts.next().unwrap_or("");
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::InvalidDataType(format!("bad decimal literal {:?}", s)));
        }
        let to_digits = |p: &str| -> Result<Vec<u8>> {
            p.bytes()
                .map(|b| {
                    if b.is_ascii_digit() {
                        Ok(b - b'0')
                    } else {
                        Err(Error::InvalidDataType(format!("bad decimal literal {:?}", s)))
                    }
                })
                .collect()
        };
        let mut int_digits = to_digits(int_part)?;
        // normalize leading zeros, keep at least one digit
        while int_digits.len() > 1 && int_digits[0] == 0 {
            int_digits.remove(0);
        }
        let frac_digits = to_digits(frac_part)?;
        let nonzero = int_digits.iter().any(|&d| d != 0) || frac_digits.iter().any(|&d| d != 0);
        Ok(Decimal {
            negative: negative && nonzero,
            int_digits,
            frac_digits,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for &d in &self.int_digits {
            write!(f, "{}", d)?;
        }
        if !self.frac_digits.is_empty() {
            write!(f, ".")?;
            for &d in &self.frac_digits {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        if self.is_zero() && other.is_zero() {
            return Ordering::Equal;
        }
        match (self.negative, other.negative) {
            (false, true) => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            _ => {}
        }
        let magnitude = cmp_magnitude(&self.int_digits, &self.frac_digits, &other.int_digits, &other.frac_digits);
        if self.negative {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

fn cmp_magnitude(a_int: &[u8], a_frac: &[u8], b_int: &[u8], b_frac: &[u8]) -> Ordering {
    let a_int_trim = trim_leading_zeros(a_int);
    let b_int_trim = trim_leading_zeros(b_int);
    match a_int_trim.len().cmp(&b_int_trim.len()) {
        Ordering::Equal => {}
        other => return other,
    }
    match a_int_trim.cmp(b_int_trim) {
        Ordering::Equal => {}
        other => return other,
    }
    a_frac.iter().cmp(b_frac.iter())
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let first_nonzero = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
    &digits[first_nonzero..]
}

pub trait DecimalEncoder {
    fn encode_decimal(&mut self, d: &Decimal) -> Result<()>;
}

impl DecimalEncoder for Vec<u8> {
    fn encode_decimal(&mut self, d: &Decimal) -> Result<()> {
        d.encode(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let d: Decimal = "123.45".parse().unwrap();
        assert_eq!(d.to_string(), "123.45");
        let d: Decimal = "-0.5".parse().unwrap();
        assert_eq!(d.to_string(), "-0.5");
    }

    #[test]
    fn test_ordering() {
        let mut values: Vec<Decimal> = vec!["3", "-1.5", "0", "1", "-2", "2.75"]
            .into_iter()
            .map(|s| s.parse().unwrap())
            .collect();
        values.sort();
        let got: Vec<String> = values.iter().map(|d| d.to_string()).collect();
        assert_eq!(got, vec!["-2", "-1.5", "0", "1", "2.75", "3"]);
    }

    #[test]
    fn test_encode_order_preserving() {
        let mut values: Vec<Decimal> = vec!["3", "-1.5", "0", "1", "-2", "2.75"]
            .into_iter()
            .map(|s| s.parse().unwrap())
            .collect();
        values.sort();
        let mut encoded = Vec::new();
        for v in &values {
            let mut buf = Vec::new();
            v.encode(&mut buf).unwrap();
            encoded.push(buf);
        }
        let mut resorted = encoded.clone();
        resorted.sort();
        assert_eq!(encoded, resorted);
    }

    #[test]
    fn test_encode_diverges_mid_fraction() {
        let a: Decimal = "1.19".parse().unwrap();
        let b: Decimal = "1.2".parse().unwrap();
        assert!(a < b);

        let mut buf_a = Vec::new();
        a.encode(&mut buf_a).unwrap();
        let mut buf_b = Vec::new();
        b.encode(&mut buf_b).unwrap();
        assert!(buf_a < buf_b);
    }
}
