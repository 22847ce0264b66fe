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

//! JSON function-name to wire-tag table.
//!
//! JSON capability is *not* gated through the Select oracle here:
//! `compiler::compile` skips the `supports(Select, tag)` check for this
//! family alone, since JSON push-down support is advertised independently
//! of the general scalar-expression capability.

use pb::ExprType;

pub fn tag_for(name: &str) -> Option<ExprType> {
    match name {
        "jsontype" => Some(ExprType::JSONType),
        "jsonextract" => Some(ExprType::JSONExtract),
        "jsonunquote" => Some(ExprType::JSONUnquote),
        "jsonvalid" => Some(ExprType::JSONValid),
        "jsonobject" => Some(ExprType::JSONObject),
        "jsonarray" => Some(ExprType::JSONArray),
        "jsonmerge" => Some(ExprType::JSONMerge),
        "jsonset" => Some(ExprType::JSONSet),
        "jsoninsert" => Some(ExprType::JSONInsert),
        "jsonreplace" => Some(ExprType::JSONReplace),
        "jsonremove" => Some(ExprType::JSONRemove),
        "jsoncontains" => Some(ExprType::JSONContains),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_operators() {
        assert_eq!(tag_for("jsontype"), Some(ExprType::JSONType));
        assert_eq!(tag_for("jsoncontains"), Some(ExprType::JSONContains));
        assert_eq!(tag_for("bogus"), None);
    }
}
