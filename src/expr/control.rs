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

//! Control/other-builtin function-name to wire-tag table.

use pb::ExprType;

pub fn tag_for(name: &str) -> Option<ExprType> {
    match name {
        "case" => Some(ExprType::Case),
        "if" => Some(ExprType::If),
        "ifnull" => Some(ExprType::IfNull),
        "nullif" => Some(ExprType::NullIf),
        "coalesce" => Some(ExprType::Coalesce),
        "isnull" => Some(ExprType::IsNull),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_operators() {
        assert_eq!(tag_for("case"), Some(ExprType::Case));
        assert_eq!(tag_for("coalesce"), Some(ExprType::Coalesce));
        assert_eq!(tag_for("bogus"), None);
    }
}
