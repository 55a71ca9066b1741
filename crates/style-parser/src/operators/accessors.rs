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

use crate::util::require_exact;
use serde_json::Value as Json;
use style_ast::{Expression, Operator, ParsingContext, PathSegment, Value, ValueType};
use style_errors::{ExprError, ParseError};

/// Splits `get`/`var` arguments into the path segments and the optional
/// trailing `{ default? }` options record.
fn split_path_and_options(args: &[Json]) -> Result<(&[Json], Option<&Json>), ExprError> {
    if args.is_empty() {
        return Err(ParseError::EmptyAccessorPath.into());
    }
    match args.last() {
        Some(Json::Object(_)) => Ok((&args[..args.len() - 1], args.last())),
        _ => Ok((args, None)),
    }
}

fn parse_path(op: &str, raw: &[Json]) -> Result<Vec<PathSegment>, ExprError> {
    if raw.is_empty() {
        return Err(ParseError::EmptyAccessorPath.into());
    }
    raw.iter()
        .enumerate()
        .map(|(i, seg)| match seg {
            Json::String(s) => Ok(PathSegment::Key(s.clone())),
            Json::Number(n) => {
                let idx = n.as_u64().ok_or_else(|| {
                    ExprError::from(ParseError::MalformedOptions(format!(
                        "path segment {i} of {op} must be a non-negative integer"
                    )))
                })?;
                Ok(PathSegment::Index(idx as usize))
            }
            other => Err(ParseError::MalformedOptions(format!(
                "path segment {i} of {op} must be a string or a non-negative integer, got {}",
                style_ast::display_json(other)
            ))
            .into()),
        })
        .collect()
}

fn parse_default(options: Option<&Json>) -> Result<Option<Json>, ExprError> {
    match options {
        None => Ok(None),
        Some(Json::Object(map)) => Ok(map.get("default").cloned()),
        Some(other) => Err(ParseError::MalformedOptions(format!(
            "options must be an object, got {}",
            style_ast::display_json(other)
        ))
        .into()),
    }
}

/// Parses `get`/`has`/`var` into a call whose single argument is the literal
/// accessor key string, per spec §4.3.
pub fn parse_accessor(
    op: &str,
    operator: Operator,
    args: &[Json],
    declared_type: ValueType,
    ctx: &mut ParsingContext,
) -> Result<Expression, ExprError> {
    let (path_raw, options) = split_path_and_options(args)?;
    let path = parse_path(op, path_raw)?;
    let default = parse_default(options)?;

    let key = match operator {
        Operator::Var => ctx.register_variable(path, declared_type, default),
        _ => ctx.register_property(path, declared_type, default),
    };

    let key_literal = Expression::literal(Value::String(key.as_str().to_string()));
    Ok(Expression::call(declared_type, operator, vec![key_literal]))
}

/// Parses a zero-argument reader: `id`, `geometry-type`, `resolution`,
/// `zoom`, `time`, `line-metric`.
pub fn parse_reader(
    op: &str,
    operator: Operator,
    args: &[Json],
    declared_type: ValueType,
    ctx: &mut ParsingContext,
) -> Result<Expression, ExprError> {
    require_exact(op, args, 0)?;
    match operator {
        Operator::Id => ctx.mark_feature_id(),
        Operator::GeometryType => ctx.mark_geometry_type(),
        _ => {}
    }
    Ok(Expression::call(declared_type, operator, vec![]))
}
