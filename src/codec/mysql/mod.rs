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

pub mod decimal;
pub mod duration;
pub mod time;

pub use self::decimal::Decimal;
pub use self::duration::Duration;
pub use self::time::{Time, TimeType};

/// MySQL column type codes, the subset the compiler needs to recognize.
///
/// Only the variants referenced by the column-type exclusion list and by
/// literal dispatch are named here.
pub mod types {
    pub const UNSPECIFIED: u8 = 0;
    pub const DECIMAL: u8 = 1;
    pub const TINY: u8 = 2;
    pub const SHORT: u8 = 3;
    pub const LONG: u8 = 4;
    pub const FLOAT: u8 = 5;
    pub const DOUBLE: u8 = 6;
    pub const NULL: u8 = 7;
    pub const TIMESTAMP: u8 = 8;
    pub const LONG_LONG: u8 = 9;
    pub const INT24: u8 = 10;
    pub const DATE: u8 = 11;
    pub const DURATION: u8 = 12;
    pub const DATETIME: u8 = 13;
    pub const YEAR: u8 = 14;
    pub const NEW_DATE: u8 = 15;
    pub const VARCHAR: u8 = 16;
    pub const BIT: u8 = 17;
    pub const JSON: u8 = 0xf5;
    pub const NEW_DECIMAL: u8 = 0xf6;
    pub const ENUM: u8 = 0xf7;
    pub const SET: u8 = 0xf8;
    pub const TINY_BLOB: u8 = 0xf9;
    pub const MEDIUM_BLOB: u8 = 0xfa;
    pub const LONG_BLOB: u8 = 0xfb;
    pub const BLOB: u8 = 0xfc;
    pub const VAR_STRING: u8 = 0xfd;
    pub const STRING: u8 = 0xfe;
    pub const GEOMETRY: u8 = 0xff;

    pub const UNSIGNED_FLAG: u32 = 1 << 5;
}

/// Charset/collation names and the default used when a name is not recognized.
///
/// `collation_name` is translated by lookup in a static table; an unknown
/// name maps to a documented default collation id rather than failing.
pub mod charset {
    pub const CHARSET_UTF8: &str = "utf8";
    pub const CHARSET_UTF8MB4: &str = "utf8mb4";
    pub const CHARSET_BIN: &str = "binary";
    pub const CHARSET_ASCII: &str = "ascii";
    pub const CHARSET_LATIN1: &str = "latin1";
    pub const CHARSET_GBK: &str = "gbk";

    pub const UTF8_CHARSETS: &[&str] = &[CHARSET_UTF8, CHARSET_UTF8MB4];
}

lazy_static! {
    /// Collation name -> collation id, the table consulted by field-type
    /// projection. Names and ids follow MySQL's standard
    /// `information_schema.COLLATIONS` numbering for the collations this
    /// crate's tests exercise; unrecognized names fall back to
    /// `DEFAULT_COLLATION_ID` rather than erroring.
    pub static ref COLLATION_NAMES: ::std::collections::HashMap<&'static str, i32> = {
        let mut m = ::std::collections::HashMap::new();
        m.insert("binary", 63);
        m.insert("utf8_bin", 83);
        m.insert("utf8_general_ci", 33);
        m.insert("utf8mb4_bin", 46);
        m.insert("utf8mb4_general_ci", 45);
        m.insert("utf8mb4_unicode_ci", 224);
        m.insert("latin1_bin", 47);
        m.insert("ascii_bin", 65);
        m.insert("gbk_chinese_ci", 28);
        m
    };
}

/// `utf8mb4_bin`: the collation TiDB uses when none is specified.
pub const DEFAULT_COLLATION_ID: i32 = 46;

/// Orders two byte strings the way `collation` would: collations whose name
/// ends in `_ci` fold ASCII case before comparing, everything else
/// (`binary`, the `_bin` collations) compares raw bytes.
pub fn collation_compare(collation: &str, a: &[u8], b: &[u8]) -> ::std::cmp::Ordering {
    if collation.ends_with("_ci") {
        a.iter()
            .map(u8::to_ascii_lowercase)
            .cmp(b.iter().map(u8::to_ascii_lowercase))
    } else {
        a.cmp(b)
    }
}

/// Maximum fractional-seconds precision a `Duration`/`Time` can carry.
pub const MAX_FSP: i8 = 6;
pub const MIN_FSP: i8 = 0;
pub const UNSPECIFIED_FSP: i8 = -1;
