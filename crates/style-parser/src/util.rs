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

use serde_json::Value as Json;
use style_ast::{Expression, ParsingContext, ValueType};
use style_errors::{ExprError, ParseError};

/// Parses `raw` as argument `index` of `op`, wrapping any failure in
/// [`ParseError::Argument`] so the message chain reads
/// `"failed to parse argument <index> of <op> expression: <inner>"`.
pub fn parse_arg(
    op: &str,
    index: usize,
    raw: &Json,
    expected: ValueType,
    ctx: &mut ParsingContext,
) -> Result<Expression, ExprError> {
    crate::parse(raw, expected, ctx).map_err(|e| ParseError::argument(op, index, e).into())
}

/// Parses every element of `raw` as an argument of `op`, all with the same
/// expected type, numbering arguments from `start`.
pub fn parse_args_same_type(
    op: &str,
    raw: &[Json],
    expected: ValueType,
    start: usize,
    ctx: &mut ParsingContext,
) -> Result<Vec<Expression>, ExprError> {
    raw.iter().enumerate().map(|(i, r)| parse_arg(op, start + i, r, expected, ctx)).collect()
}

/// Checks `args.len()` against an exact arity, producing the
/// `"expected N argument(s) for OP, got K"` message on mismatch.
pub fn require_exact(op: &str, args: &[Json], n: usize) -> Result<(), ExprError> {
    if args.len() != n {
        return Err(ParseError::wrong_arity(op, n.to_string(), args.len()).into());
    }
    Ok(())
}

/// Checks `args.len()` against a minimum arity, producing the
/// `"expected at least N argument(s) for OP, got K"` message on mismatch.
pub fn require_at_least(op: &str, args: &[Json], n: usize) -> Result<(), ExprError> {
    if args.len() < n {
        return Err(ParseError::wrong_arity(op, format!("at least {n}"), args.len()).into());
    }
    Ok(())
}

/// Checks `args.len()` against an inclusive range, e.g. `atan`'s 1-or-2.
pub fn require_range(op: &str, args: &[Json], lo: usize, hi: usize) -> Result<(), ExprError> {
    if args.len() < lo || args.len() > hi {
        return Err(ParseError::wrong_arity(op, format!("{lo} to {hi}"), args.len()).into());
    }
    Ok(())
}
