// Copyright (C) 2024-2026 The Style Expr Authors.
// This file is part of the style-expr library.

// The style-expr library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The style-expr library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the style-expr library. If not, see <https://www.gnu.org/licenses/>.

//! The typed AST: a sum type of literal and call nodes (§3, §9 "Tagged AST
//! over class hierarchy").

use crate::types::{Value, ValueType};
use serde::{Deserialize, Serialize};

/// The closed set of operators a call node may carry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum Operator {
    Get,
    Has,
    Var,
    Id,
    GeometryType,
    Resolution,
    Zoom,
    Time,
    LineMetric,
    Concat,
    Not,
    All,
    Any,
    Eq,
    Neq,
    Lt,
    Le,
    Gt,
    Ge,
    Between,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Clamp,
    Abs,
    Floor,
    Ceil,
    Round,
    Sin,
    Cos,
    Sqrt,
    Atan,
    Case,
    MatchNumber,
    MatchString,
    Coalesce,
    Interpolate,
    In,
    Array,
    Color,
    Band,
    Palette,
}

impl Operator {
    /// The encoded-expression keyword for this operator, used both for
    /// dispatch and in error messages.
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Get => "get",
            Operator::Has => "has",
            Operator::Var => "var",
            Operator::Id => "id",
            Operator::GeometryType => "geometry-type",
            Operator::Resolution => "resolution",
            Operator::Zoom => "zoom",
            Operator::Time => "time",
            Operator::LineMetric => "line-metric",
            Operator::Concat => "concat",
            Operator::Not => "!",
            Operator::All => "all",
            Operator::Any => "any",
            Operator::Eq => "==",
            Operator::Neq => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Between => "between",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "^",
            Operator::Clamp => "clamp",
            Operator::Abs => "abs",
            Operator::Floor => "floor",
            Operator::Ceil => "ceil",
            Operator::Round => "round",
            Operator::Sin => "sin",
            Operator::Cos => "cos",
            Operator::Sqrt => "sqrt",
            Operator::Atan => "atan",
            Operator::Case => "case",
            Operator::MatchNumber => "match-number",
            Operator::MatchString => "match-string",
            Operator::Coalesce => "coalesce",
            Operator::Interpolate => "interpolate",
            Operator::In => "in",
            Operator::Array => "array",
            Operator::Color => "color",
            Operator::Band => "band",
            Operator::Palette => "palette",
        }
    }
}

/// A typed expression node: either a literal value or a call to an
/// [`Operator`] with already-parsed argument nodes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Expression {
    Literal { value_type: ValueType, value: Value },
    Call { value_type: ValueType, operator: Operator, args: Vec<Expression> },
}

impl Expression {
    pub fn literal(value: Value) -> Self {
        Expression::Literal { value_type: value.value_type(), value }
    }

    pub fn call(value_type: ValueType, operator: Operator, args: Vec<Expression>) -> Self {
        Expression::Call { value_type, operator, args }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Expression::Literal { value_type, .. } => *value_type,
            Expression::Call { value_type, .. } => *value_type,
        }
    }
}
