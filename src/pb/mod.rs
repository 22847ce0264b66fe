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

//! Coprocessor wire-format types.
//!
//! These would ordinarily be generated by `rust-protobuf` from the `tipb`
//! crate's `.proto` definitions (a git-only dependency with no vendored
//! `.proto` file in this workspace, so there is nothing to regenerate from).
//! This module hand-writes the same message shape with the same
//! accessor-style API rust-protobuf would generate (`get_*`/`set_*`/`mut_*`/
//! `take_*`), so compiler code reads exactly as it would against a real
//! generated `tipb::expression::Expr`.

/// The wire tag enumeration. Discriminants are irrelevant to this
/// crate's semantics (they are never compared numerically outside of the
/// capability oracle's feature-id space), but are assigned densely to read
/// naturally in debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::enum_variant_names)]
pub enum ExprType {
    Null,
    Int64,
    Uint64,
    String,
    Bytes,
    Float32,
    Float64,
    MysqlDuration,
    MysqlDecimal,
    MysqlTime,
    ColumnRef,
    ValueList,
    ScalarFunc,

    LT,
    LE,
    EQ,
    NE,
    GE,
    GT,
    NullEQ,
    In,
    Like,

    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    IntDiv,

    And,
    Or,
    Xor,
    Not,

    BitAnd,
    BitOr,
    BitXor,
    BitNeg,
    LeftShift,
    RightShift,

    Case,
    If,
    IfNull,
    NullIf,
    Coalesce,
    IsNull,

    JSONType,
    JSONExtract,
    JSONUnquote,
    JSONValid,
    JSONObject,
    JSONArray,
    JSONMerge,
    JSONSet,
    JSONInsert,
    JSONReplace,
    JSONRemove,
    JSONContains,
}

/// A resolved function-overload code.
pub type ScalarFuncSig = i32;

/// The wire `FieldType` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldType {
    tp: i32,
    flag: u32,
    flen: i32,
    decimal: i32,
    collate: i32,
}

impl FieldType {
    pub fn new() -> FieldType {
        FieldType::default()
    }

    pub fn get_tp(&self) -> i32 {
        self.tp
    }
    pub fn set_tp(&mut self, v: i32) {
        self.tp = v;
    }
    pub fn get_flag(&self) -> u32 {
        self.flag
    }
    pub fn set_flag(&mut self, v: u32) {
        self.flag = v;
    }
    pub fn get_flen(&self) -> i32 {
        self.flen
    }
    pub fn set_flen(&mut self, v: i32) {
        self.flen = v;
    }
    pub fn get_decimal(&self) -> i32 {
        self.decimal
    }
    pub fn set_decimal(&mut self, v: i32) {
        self.decimal = v;
    }
    pub fn get_collate(&self) -> i32 {
        self.collate
    }
    pub fn set_collate(&mut self, v: i32) {
        self.collate = v;
    }
}

/// The wire `Expr` record.
///
/// `val`, `children`, `sig` and `field_type` are each optional: absent
/// rather than defaulted when not set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    tp: Option<ExprType>,
    val: Option<Vec<u8>>,
    children: Vec<Expr>,
    sig: Option<ScalarFuncSig>,
    field_type: Option<FieldType>,
}

impl Expr {
    pub fn new() -> Expr {
        Expr::default()
    }

    pub fn with_tp(tp: ExprType) -> Expr {
        let mut e = Expr::new();
        e.set_tp(tp);
        e
    }

    pub fn get_tp(&self) -> ExprType {
        self.tp.expect("Expr::get_tp called before set_tp")
    }
    pub fn set_tp(&mut self, tp: ExprType) {
        self.tp = Some(tp);
    }

    pub fn get_val(&self) -> &[u8] {
        self.val.as_deref().unwrap_or(&[])
    }
    pub fn set_val(&mut self, v: Vec<u8>) {
        self.val = Some(v);
    }
    pub fn has_val(&self) -> bool {
        self.val.is_some()
    }

    pub fn get_children(&self) -> &[Expr] {
        &self.children
    }
    pub fn mut_children(&mut self) -> &mut Vec<Expr> {
        &mut self.children
    }
    pub fn take_children(&mut self) -> Vec<Expr> {
        ::std::mem::take(&mut self.children)
    }
    pub fn set_children(&mut self, v: Vec<Expr>) {
        self.children = v;
    }

    pub fn get_sig(&self) -> Option<ScalarFuncSig> {
        self.sig
    }
    pub fn set_sig(&mut self, sig: ScalarFuncSig) {
        self.sig = Some(sig);
    }

    pub fn get_field_type(&self) -> Option<&FieldType> {
        self.field_type.as_ref()
    }
    pub fn mut_field_type(&mut self) -> &mut FieldType {
        self.field_type.get_or_insert_with(FieldType::new)
    }
    pub fn set_field_type(&mut self, ft: FieldType) {
        self.field_type = Some(ft);
    }
    pub fn take_field_type(&mut self) -> Option<FieldType> {
        self.field_type.take()
    }
}

/// A single item of a `GROUP BY`/`ORDER BY` list.
#[derive(Debug, Clone, PartialEq)]
pub struct ByItem {
    pub expr: Expr,
    pub desc: bool,
}
