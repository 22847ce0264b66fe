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

use std::io::Write;
use byteorder::{BigEndian, ByteOrder, ReadBytesExt, WriteBytesExt};

use super::{Error, Result};

pub const I64_SIZE: usize = 8;
pub const U64_SIZE: usize = 8;
pub const F64_SIZE: usize = 8;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// Flips the sign bit so two's-complement `i64`s compare as unsigned big-endian bytes do.
#[inline]
fn order_encode_i64(v: i64) -> u64 {
    v as u64 ^ SIGN_MASK
}

#[inline]
fn order_decode_i64(u: u64) -> i64 {
    (u ^ SIGN_MASK) as i64
}

/// Maps an IEEE-754 `f64` bit pattern to one whose big-endian byte order matches numeric order.
#[inline]
fn order_encode_f64(v: f64) -> u64 {
    let bits = v.to_bits();
    if v >= 0f64 {
        bits ^ SIGN_MASK
    } else {
        !bits
    }
}

#[inline]
fn order_decode_f64(u: u64) -> f64 {
    let bits = if u & SIGN_MASK > 0 { u ^ SIGN_MASK } else { !u };
    f64::from_bits(bits)
}

/// Appends fixed-size, memcomparable encodings of the storage-layer scalar number kinds.
///
/// Implemented for `Vec<u8>`, following the "encoders take an append buffer"
/// convention.
pub trait NumberEncoder: Write {
    fn encode_i64(&mut self, v: i64) -> Result<()> {
        let u = order_encode_i64(v);
        self.write_u64::<BigEndian>(u).map_err(From::from)
    }

    fn encode_u64(&mut self, v: u64) -> Result<()> {
        self.write_u64::<BigEndian>(v).map_err(From::from)
    }

    fn encode_f64(&mut self, v: f64) -> Result<()> {
        let u = order_encode_f64(v);
        self.write_u64::<BigEndian>(u).map_err(From::from)
    }
}

impl<T: Write> NumberEncoder for T {}

pub trait NumberDecoder: ReadBytesExt {
    fn decode_i64(&mut self) -> Result<i64> {
        let u = self.read_u64::<BigEndian>()?;
        Ok(order_decode_i64(u))
    }

    fn decode_u64(&mut self) -> Result<u64> {
        self.read_u64::<BigEndian>().map_err(From::from)
    }

    fn decode_f64(&mut self) -> Result<f64> {
        let u = self.read_u64::<BigEndian>()?;
        Ok(order_decode_f64(u))
    }
}

impl<'a> NumberDecoder for &'a [u8] {}

/// Widens an `f32` to the `f64` memcomparable encoding, matching how the
/// datum codec represents all floats on the wire.
#[inline]
pub fn encode_f32_as_f64(buf: &mut Vec<u8>, v: f32) -> Result<()> {
    buf.encode_f64(f64::from(v))
}

#[inline]
pub fn bytes_to_i64(data: &[u8]) -> Result<i64> {
    if data.len() != I64_SIZE {
        return Err(Error::KeyLength);
    }
    let u = BigEndian::read_u64(data);
    Ok(order_decode_i64(u))
}
