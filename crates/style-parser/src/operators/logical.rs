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

use crate::util::{parse_args_same_type, require_at_least, require_exact};
use serde_json::Value as Json;
use style_ast::{Expression, Operator, ParsingContext, ValueType};
use style_errors::ExprError;

pub fn parse_concat(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_at_least("concat", args, 2)?;
    let parsed = parse_args_same_type("concat", args, ValueType::String, 0, ctx)?;
    Ok(Expression::call(ValueType::String, Operator::Concat, parsed))
}

pub fn parse_not(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_exact("!", args, 1)?;
    let parsed = parse_args_same_type("!", args, ValueType::Boolean, 0, ctx)?;
    Ok(Expression::call(ValueType::Boolean, Operator::Not, parsed))
}

pub fn parse_all_any(op: &str, operator: Operator, args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_at_least(op, args, 2)?;
    let parsed = parse_args_same_type(op, args, ValueType::Boolean, 0, ctx)?;
    Ok(Expression::call(ValueType::Boolean, operator, parsed))
}
