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

//! The expression push-down compiler: a pure, side-effect free
//! translator from a logical SQL scalar-expression tree to the
//! coprocessor wire format, gated by the capability oracle.

pub mod assemble;
pub mod capability;
pub mod column;
pub mod compiler;
pub mod constant;
pub mod field_type;
pub mod statement_context;
pub mod value_list;

mod arithmetic;
mod bitwise;
mod control;
mod json;
mod like;
mod logical;

pub use self::statement_context::StatementContext;

use std::error;
use std::io;

use codec::Datum;
use util;

quick_error! {
    /// Internal errors raised while encoding a literal or a `ValueList`.
    /// These never cross the public `compile` boundary: every call site
    /// here degrades them to `NotPushable` (`None`) after logging.
    #[derive(Debug)]
    pub enum Error {
        Io(err: io::Error) {
            from()
            description("io error")
            display("I/O error: {}", err)
            cause(err)
        }
        Codec(err: util::codec::Error) {
            from()
            description("codec error")
            display("codec error: {}", err)
            cause(err)
        }
        Eval(s: String) {
            description("evaluation failed")
            display("{}", s)
        }
        Other(err: Box<error::Error + Send + Sync>) {
            from()
            cause(err.as_ref())
            description(err.description())
            display("unknown error {:?}", err)
        }
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;

/// The planner-facing `FieldType` record: verbatim inputs that get copied
/// onto the wire field type, plus the collation name it resolves to a
/// collation id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldType {
    pub type_code: u8,
    pub flag: u32,
    pub flen: i32,
    pub decimal: i32,
    pub collation_name: String,
}

impl FieldType {
    pub fn new(type_code: u8) -> FieldType {
        FieldType {
            type_code,
            ..FieldType::default()
        }
    }
}

/// The closed input expression sum type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    ColumnRef(ColumnRef),
    ScalarFunction(ScalarFunction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Datum,
    pub field_type: FieldType,
}

/// An ordinal index within the projected row and a stable column id
/// (id = 0 or -1 denotes "not from a base table").
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub index: usize,
    pub id: i64,
    pub field_type: FieldType,
}

/// A normalized lower-case function name, an ordered argument list, a
/// return-type record, and (optionally) a function-signature code.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarFunction {
    pub name: String,
    pub args: Vec<Expression>,
    pub return_type: FieldType,
    pub signature: Option<i64>,
}

impl Expression {
    pub fn literal(value: Datum, field_type: FieldType) -> Expression {
        Expression::Literal(Literal { value, field_type })
    }

    pub fn column(index: usize, id: i64, field_type: FieldType) -> Expression {
        Expression::ColumnRef(ColumnRef { index, id, field_type })
    }

    pub fn scalar_fn(
        name: impl Into<String>,
        args: Vec<Expression>,
        return_type: FieldType,
        signature: Option<i64>,
    ) -> Expression {
        Expression::ScalarFunction(ScalarFunction {
            name: name.into(),
            args,
            return_type,
            signature,
        })
    }
}
