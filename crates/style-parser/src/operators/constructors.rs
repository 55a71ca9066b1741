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

use crate::util::{parse_args_same_type, require_at_least, require_range};
use serde_json::Value as Json;
use style_ast::{Expression, Operator, ParsingContext, ValueType};
use style_errors::{ExprError, ParseError};

/// `array(v1, …)`: at least 1 numeric argument.
pub fn parse_array(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_at_least("array", args, 1)?;
    let parsed = parse_args_same_type("array", args, ValueType::Number, 0, ctx)?;
    Ok(Expression::call(ValueType::NumberArray, Operator::Array, parsed))
}

/// `color(v1, …)`: 1-4 numeric arguments (shade, shade+alpha, rgb, rgba).
pub fn parse_color(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_range("color", args, 1, 4)?;
    let parsed = parse_args_same_type("color", args, ValueType::Number, 0, ctx)?;
    Ok(Expression::call(ValueType::Color, Operator::Color, parsed))
}

/// `band(index, xOffset?, yOffset?)`: 1-3 numeric arguments.
pub fn parse_band(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_range("band", args, 1, 3)?;
    let parsed = parse_args_same_type("band", args, ValueType::Number, 0, ctx)?;
    Ok(Expression::call(ValueType::Number, Operator::Band, parsed))
}

/// `palette(index, [color, color, …])`: the color list entries must each be
/// a *literal* color, not a call.
pub fn parse_palette(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    use crate::util::parse_arg;

    if args.len() != 2 {
        return Err(ParseError::wrong_arity("palette", "2", args.len()).into());
    }
    let index = parse_arg("palette", 0, &args[0], ValueType::Number, ctx)?;

    let colors_raw = args[1].as_array().ok_or_else(|| {
        ExprError::from(ParseError::MalformedOptions("the second argument to \"palette\" must be an array of colors".to_string()))
    })?;
    if colors_raw.is_empty() {
        return Err(ParseError::MalformedOptions("\"palette\" requires at least one color".to_string()).into());
    }

    let mut parsed = vec![index];
    for (i, raw) in colors_raw.iter().enumerate() {
        let color = crate::parse(raw, ValueType::Color, ctx).map_err(|e| ParseError::palette_color(i, e))?;
        if !matches!(color, Expression::Literal { .. }) {
            return Err(ParseError::PaletteColorNotLiteral(i).into());
        }
        parsed.push(color);
    }

    Ok(Expression::call(ValueType::Color, Operator::Palette, parsed))
}
