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

use crate::util::{parse_args_same_type, require_at_least, require_exact, require_range};
use serde_json::Value as Json;
use style_ast::{Expression, Operator, ParsingContext, ValueType};
use style_errors::ExprError;

/// `+`, `*`: at least 2 numeric arguments.
pub fn parse_variadic(op: &str, operator: Operator, args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_at_least(op, args, 2)?;
    let parsed = parse_args_same_type(op, args, ValueType::Number, 0, ctx)?;
    Ok(Expression::call(ValueType::Number, operator, parsed))
}

/// `-`, `/`, `%`, `^`: exactly 2 numeric arguments.
pub fn parse_binary(op: &str, operator: Operator, args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_exact(op, args, 2)?;
    let parsed = parse_args_same_type(op, args, ValueType::Number, 0, ctx)?;
    Ok(Expression::call(ValueType::Number, operator, parsed))
}

/// `abs`, `floor`, `ceil`, `round`, `sin`, `cos`, `sqrt`: exactly 1 numeric argument.
pub fn parse_unary(op: &str, operator: Operator, args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_exact(op, args, 1)?;
    let parsed = parse_args_same_type(op, args, ValueType::Number, 0, ctx)?;
    Ok(Expression::call(ValueType::Number, operator, parsed))
}

/// `atan`: 1 argument (principal value) or 2 arguments (`atan2(y, x)`).
pub fn parse_atan(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_range("atan", args, 1, 2)?;
    let parsed = parse_args_same_type("atan", args, ValueType::Number, 0, ctx)?;
    Ok(Expression::call(ValueType::Number, Operator::Atan, parsed))
}

/// `clamp(v, lo, hi)`: exactly 3 numeric arguments.
pub fn parse_clamp(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_exact("clamp", args, 3)?;
    let parsed = parse_args_same_type("clamp", args, ValueType::Number, 0, ctx)?;
    Ok(Expression::call(ValueType::Number, Operator::Clamp, parsed))
}
