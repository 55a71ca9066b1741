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

//! Turns an encoded expression plus a declared result type into a typed AST,
//! recording accessor metadata along the way (§4.2-§4.3).

mod operators;
mod util;

use operators::{accessors, arithmetic, comparison, constructors, control_flow, interpolate, logical, set};
use serde_json::Value as Json;
use style_ast::{coerce, Expression, Operator, ParsingContext, ValueType};
use style_errors::{ExprError, ParseError};
use tracing::trace;

/// Parses `encoded` into a typed [`Expression`] of type `declared_type`,
/// registering any accessors it touches in `ctx`.
///
/// Top-level dispatch (§4.3): an array whose first element is a string is a
/// call; any other array or primitive is a literal; an empty array or a
/// non-array, non-primitive value (e.g. a bare JSON object) fails.
pub fn parse(encoded: &Json, declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    match encoded {
        Json::Array(items) => {
            if items.is_empty() {
                return Err(ParseError::EmptyExpression.into());
            }
            match items[0].as_str() {
                Some(op) => {
                    trace!(operator = op, declared = declared_type.name(), "parsing call");
                    dispatch(op, &items[1..], declared_type, ctx)
                }
                None => Ok(Expression::literal(coerce(encoded, declared_type)?)),
            }
        }
        Json::Object(_) => Err(ParseError::NotAnExpression.into()),
        _ => Ok(Expression::literal(coerce(encoded, declared_type)?)),
    }
}

fn dispatch(op: &str, args: &[Json], declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    use Operator::*;

    match op {
        "get" => accessors::parse_accessor("get", Get, args, declared_type, ctx),
        "has" => accessors::parse_accessor("has", Has, args, declared_type, ctx),
        "var" => accessors::parse_accessor("var", Var, args, declared_type, ctx),

        "id" => accessors::parse_reader("id", Id, args, declared_type, ctx),
        "geometry-type" => accessors::parse_reader("geometry-type", GeometryType, args, declared_type, ctx),
        "resolution" => accessors::parse_reader("resolution", Resolution, args, declared_type, ctx),
        "zoom" => accessors::parse_reader("zoom", Zoom, args, declared_type, ctx),
        "time" => accessors::parse_reader("time", Time, args, declared_type, ctx),
        "line-metric" => accessors::parse_reader("line-metric", LineMetric, args, declared_type, ctx),

        "concat" => logical::parse_concat(args, ctx),
        "!" => logical::parse_not(args, ctx),
        "all" => logical::parse_all_any("all", All, args, ctx),
        "any" => logical::parse_all_any("any", Any, args, ctx),

        "==" => comparison::parse_binary_comparison("==", Eq, args, ctx),
        "!=" => comparison::parse_binary_comparison("!=", Neq, args, ctx),
        "<" => comparison::parse_binary_comparison("<", Lt, args, ctx),
        "<=" => comparison::parse_binary_comparison("<=", Le, args, ctx),
        ">" => comparison::parse_binary_comparison(">", Gt, args, ctx),
        ">=" => comparison::parse_binary_comparison(">=", Ge, args, ctx),
        "between" => comparison::parse_between(args, ctx),

        "+" => arithmetic::parse_variadic("+", Add, args, ctx),
        "*" => arithmetic::parse_variadic("*", Mul, args, ctx),
        "-" => arithmetic::parse_binary("-", Sub, args, ctx),
        "/" => arithmetic::parse_binary("/", Div, args, ctx),
        "%" => arithmetic::parse_binary("%", Mod, args, ctx),
        "^" => arithmetic::parse_binary("^", Pow, args, ctx),
        "clamp" => arithmetic::parse_clamp(args, ctx),
        "abs" => arithmetic::parse_unary("abs", Abs, args, ctx),
        "floor" => arithmetic::parse_unary("floor", Floor, args, ctx),
        "ceil" => arithmetic::parse_unary("ceil", Ceil, args, ctx),
        "round" => arithmetic::parse_unary("round", Round, args, ctx),
        "sin" => arithmetic::parse_unary("sin", Sin, args, ctx),
        "cos" => arithmetic::parse_unary("cos", Cos, args, ctx),
        "sqrt" => arithmetic::parse_unary("sqrt", Sqrt, args, ctx),
        "atan" => arithmetic::parse_atan(args, ctx),

        "case" => control_flow::parse_case(args, declared_type, ctx),
        "match-number" => control_flow::parse_match_number(args, declared_type, ctx),
        "match-string" => control_flow::parse_match_string(args, declared_type, ctx),
        "match" => control_flow::parse_match_alias(args, declared_type, ctx),
        "coalesce" => control_flow::parse_coalesce(args, declared_type, ctx),

        "interpolate" => interpolate::parse_interpolate(args, declared_type, ctx),

        "in" => set::parse_in(args, ctx),

        "array" => constructors::parse_array(args, ctx),
        "color" => constructors::parse_color(args, ctx),
        "band" => constructors::parse_band(args, ctx),
        "palette" => constructors::parse_palette(args, ctx),

        other => Err(ParseError::UnknownOperator(other.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_array_fails() {
        let mut ctx = ParsingContext::new();
        let err = parse(&json!([]), ValueType::Number, &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "empty expression");
    }

    #[test]
    fn bare_object_fails() {
        let mut ctx = ParsingContext::new();
        let err = parse(&json!({"a": 1}), ValueType::Number, &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "expression must be an array or a primitive value");
    }

    #[test]
    fn unknown_operator_fails() {
        let mut ctx = ParsingContext::new();
        let err = parse(&json!(["frobnicate", 1]), ValueType::Number, &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "unknown operator: frobnicate");
    }

    #[test]
    fn bare_number_literal() {
        let mut ctx = ParsingContext::new();
        let expr = parse(&json!(42), ValueType::Number, &mut ctx).unwrap();
        assert_eq!(expr.value_type(), ValueType::Number);
    }

    #[test]
    fn number_array_literal_coerces_to_color() {
        let mut ctx = ParsingContext::new();
        let expr = parse(&json!([0, 255, 0]), ValueType::Color, &mut ctx).unwrap();
        assert_eq!(expr.value_type(), ValueType::Color);
    }

    #[test]
    fn get_registers_accessor_and_returns_declared_type() {
        let mut ctx = ParsingContext::new();
        let expr = parse(&json!(["get", "property"]), ValueType::Number, &mut ctx).unwrap();
        assert_eq!(expr.value_type(), ValueType::Number);
        assert_eq!(ctx.properties().len(), 1);
    }

    #[test]
    fn interpolate_exponential_bad_base() {
        let mut ctx = ParsingContext::new();
        let encoded = json!(["interpolate", ["exponential", "x"], 0.5, 0, 0, 1, 1]);
        let err = parse(&encoded, ValueType::Number, &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "expected a number base for exponential interpolation, got \"x\" instead");
    }

    #[test]
    fn in_bare_string_array_requires_literal_wrapper() {
        let mut ctx = ParsingContext::new();
        let encoded = json!(["in", ["get", "attr"], ["abcd", "efgh", "ijkl"]]);
        let err = parse(&encoded, ValueType::Boolean, &mut ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "for the \"in\" operator, a string array should be wrapped in a \"literal\" operator to disambiguate from expressions"
        );
    }
}
