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

use crate::util::parse_arg;
use serde_json::Value as Json;
use style_ast::{Expression, Operator, ParsingContext, Value, ValueType};
use style_errors::{ExprError, ParseError};

/// Parses the `['linear']` or `['exponential', base]` method literal into a
/// numeric base, where linear is base = 1 (spec §4.3, §4.5.1).
fn parse_method(raw: &Json) -> Result<f64, ExprError> {
    let items = match raw.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Err(ParseError::InvalidInterpolationType(style_ast::display_json(raw)).into()),
    };
    match items[0].as_str() {
        Some("linear") if items.len() == 1 => Ok(1.0),
        Some("exponential") if items.len() == 2 => match items[1].as_f64() {
            Some(base) if base > 0.0 => Ok(base),
            _ => Err(ParseError::ExpectedExponentialBase(style_ast::display_json(&items[1])).into()),
        },
        _ => Err(ParseError::InvalidInterpolationType(style_ast::display_json(raw)).into()),
    }
}

/// `interpolate interp input s1 o1 s2 o2 …`: an even argument count >= 6
/// (interp + input + at least two stop pairs).
pub fn parse_interpolate(args: &[Json], declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    if !matches!(declared_type, ValueType::Number | ValueType::Color) {
        return Err(ParseError::MalformedOptions(format!(
            "interpolate result type must be number or color, got {}",
            declared_type.name()
        ))
        .into());
    }
    if args.len() < 6 || args.len() % 2 != 0 {
        return Err(ParseError::wrong_arity("interpolate", "an even number, at least 6,", args.len()).into());
    }

    let base = parse_method(&args[0])?;
    let method_literal = Expression::literal(Value::Number(base));
    let input = parse_arg("interpolate", 1, &args[1], ValueType::Number, ctx)?;

    let mut parsed = vec![method_literal, input];
    let stop_args = &args[2..];
    for (i, chunk) in stop_args.chunks(2).enumerate() {
        let stop_index = 2 + 2 * i;
        let output_index = stop_index + 1;
        parsed.push(parse_arg("interpolate", stop_index, &chunk[0], ValueType::Number, ctx)?);
        parsed.push(parse_arg("interpolate", output_index, &chunk[1], declared_type, ctx)?);
    }

    Ok(Expression::call(declared_type, Operator::Interpolate, parsed))
}
