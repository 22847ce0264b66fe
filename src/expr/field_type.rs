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

//! Field-type projection: maps a planner `FieldType` record to the wire
//! `FieldType` record, including collation-name -> collation-id lookup
//! with a documented default.

use codec::mysql::{COLLATION_NAMES, DEFAULT_COLLATION_ID};
use pb;

use super::FieldType;

/// Copies `tp`/`flag`/`flen`/`decimal` verbatim and translates
/// `collation_name` via the static table, falling back to
/// `DEFAULT_COLLATION_ID` for unrecognized names.
pub fn project(ft: &FieldType) -> pb::FieldType {
    let mut out = pb::FieldType::new();
    out.set_tp(i32::from(ft.type_code));
    out.set_flag(ft.flag);
    out.set_flen(ft.flen);
    out.set_decimal(ft.decimal);
    out.set_collate(collation_id(&ft.collation_name));
    out
}

fn collation_id(name: &str) -> i32 {
    COLLATION_NAMES.get(name).copied().unwrap_or(DEFAULT_COLLATION_ID)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_collation() {
        assert_eq!(collation_id("utf8mb4_bin"), 46);
    }

    #[test]
    fn test_unknown_collation_falls_back_to_default() {
        assert_eq!(collation_id("totally_unknown_collation"), DEFAULT_COLLATION_ID);
    }

    #[test]
    fn test_project_copies_fields_verbatim() {
        let ft = FieldType {
            type_code: 3,
            flag: 32,
            flen: 11,
            decimal: 2,
            collation_name: "utf8mb4_bin".to_owned(),
        };
        let projected = project(&ft);
        assert_eq!(projected.get_tp(), 3);
        assert_eq!(projected.get_flag(), 32);
        assert_eq!(projected.get_flen(), 11);
        assert_eq!(projected.get_decimal(), 2);
        assert_eq!(projected.get_collate(), 46);
    }
}
