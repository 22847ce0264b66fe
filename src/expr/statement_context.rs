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

use chrono::FixedOffset;

use super::Error;
use super::Result;

const ONE_DAY: i64 = 3600 * 24;

/// Per-statement context the compiler reads: the session time zone (used
/// to UTC-normalize `Timestamp` literals) and a collation, used as the
/// sort key for `ValueList` construction.
///
/// It carries no `ignore_truncate`/`truncate_as_warning` flags, since this
/// crate never evaluates anything — it only rewrites expression trees.
#[derive(Debug, Clone)]
pub struct StatementContext {
    pub time_zone: FixedOffset,
    pub collation: String,
}

impl Default for StatementContext {
    fn default() -> StatementContext {
        StatementContext {
            time_zone: FixedOffset::east(0),
            collation: "utf8mb4_bin".to_owned(),
        }
    }
}

impl StatementContext {
    /// Builds a context from a raw timezone offset and collation name,
    /// rejecting offsets outside the representable range.
    pub fn new(tz_offset_secs: i64, collation: impl Into<String>) -> Result<StatementContext> {
        if tz_offset_secs <= -ONE_DAY || tz_offset_secs >= ONE_DAY {
            return Err(Error::Eval(format!("invalid tz offset {}", tz_offset_secs)));
        }
        let tz = FixedOffset::east_opt(tz_offset_secs as i32)
            .ok_or_else(|| Error::Eval(format!("invalid tz offset {}", tz_offset_secs)))?;
        Ok(StatementContext {
            time_zone: tz,
            collation: collation.into(),
        })
    }
}
