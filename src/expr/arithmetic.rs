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

//! Arithmetic function-name to wire-tag table.
//!
//! `mod`/`intdiv` are mapped to their wire tags for completeness (the tags
//! exist in `pb::ExprType`), but their push-down status stays unclear
//! pending a planner/coprocessor contract, so no reference `Client` in this
//! crate ever advertises `supports(Select, Mod)` or `supports(Select,
//! IntDiv)` — `compiler::generic_emit`'s capability check is what actually
//! keeps them non-pushable today.

use pb::ExprType;

pub fn tag_for(name: &str) -> Option<ExprType> {
    match name {
        "plus" => Some(ExprType::Plus),
        "minus" => Some(ExprType::Minus),
        "mul" => Some(ExprType::Mul),
        "div" => Some(ExprType::Div),
        "mod" => Some(ExprType::Mod),
        "intdiv" => Some(ExprType::IntDiv),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mod_and_intdiv_resolve_to_wire_tags() {
        assert_eq!(tag_for("mod"), Some(ExprType::Mod));
        assert_eq!(tag_for("intdiv"), Some(ExprType::IntDiv));
    }

    #[test]
    fn test_known_operators() {
        assert_eq!(tag_for("plus"), Some(ExprType::Plus));
        assert_eq!(tag_for("div"), Some(ExprType::Div));
    }
}
