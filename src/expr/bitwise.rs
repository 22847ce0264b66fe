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

//! Bitwise function-name to wire-tag table.

use pb::ExprType;

pub fn tag_for(name: &str) -> Option<ExprType> {
    match name {
        "bitand" => Some(ExprType::BitAnd),
        "bitor" => Some(ExprType::BitOr),
        "bitxor" => Some(ExprType::BitXor),
        "bitneg" => Some(ExprType::BitNeg),
        "leftshift" => Some(ExprType::LeftShift),
        "rightshift" => Some(ExprType::RightShift),
        _ => None,
    }
}
