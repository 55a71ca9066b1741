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

use crate::util::{parse_arg, parse_args_same_type, require_at_least};
use serde_json::Value as Json;
use style_ast::{Expression, Operator, ParsingContext, ValueType};
use style_errors::{ExprError, ParseError};

/// `case cond1 out1 cond2 out2 … fallback`: an odd argument count >= 3.
/// Stored positionally: conditions at even indices, outputs at odd indices,
/// the fallback last — the evaluator re-derives the pairing from `len()`.
pub fn parse_case(args: &[Json], declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_at_least("case", args, 3)?;
    if args.len() % 2 == 0 {
        return Err(ParseError::wrong_arity("case", "an odd number, at least 3,", args.len()).into());
    }
    let mut parsed = Vec::with_capacity(args.len());
    let pairs = (args.len() - 1) / 2;
    for i in 0..pairs {
        parsed.push(parse_arg("case", 2 * i, &args[2 * i], ValueType::Boolean, ctx)?);
        parsed.push(parse_arg("case", 2 * i + 1, &args[2 * i + 1], declared_type, ctx)?);
    }
    parsed.push(parse_arg("case", args.len() - 1, &args[args.len() - 1], declared_type, ctx)?);
    Ok(Expression::call(declared_type, Operator::Case, parsed))
}

fn parse_match_typed(
    op: &str,
    operator: Operator,
    args: &[Json],
    value_type: ValueType,
    declared_type: ValueType,
    ctx: &mut ParsingContext,
) -> Result<Expression, ExprError> {
    require_at_least(op, args, 4)?;
    if args.len() % 2 != 0 {
        return Err(ParseError::wrong_arity(op, "an even number, at least 4,", args.len()).into());
    }
    let mut parsed = Vec::with_capacity(args.len());
    parsed.push(parse_arg(op, 0, &args[0], value_type, ctx)?);
    let pairs = (args.len() - 2) / 2;
    for i in 0..pairs {
        let mi = 1 + 2 * i;
        let oi = mi + 1;
        parsed.push(parse_arg(op, mi, &args[mi], value_type, ctx)?);
        parsed.push(parse_arg(op, oi, &args[oi], declared_type, ctx)?);
    }
    parsed.push(parse_arg(op, args.len() - 1, &args[args.len() - 1], declared_type, ctx)?);
    Ok(Expression::call(declared_type, operator, parsed))
}

pub fn parse_match_number(args: &[Json], declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    parse_match_typed("match-number", Operator::MatchNumber, args, ValueType::Number, declared_type, ctx)
}

pub fn parse_match_string(args: &[Json], declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    parse_match_typed("match-string", Operator::MatchString, args, ValueType::String, declared_type, ctx)
}

/// Legacy `match` alias: treated as `match-number` if the whole expression
/// (discriminant *and* every label) parses that way, else as `match-string`
/// (spec §9 open question). The discriminant alone is not enough to decide:
/// an accessor or call node parses against any declared type, so probing
/// only `args[0]` would always pick `match-number`. Probing against a
/// cloned context and only committing that clone back on success keeps a
/// failed number attempt from leaking accessors it registered along the way.
pub fn parse_match_alias(args: &[Json], declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    let mut probe = ctx.clone();
    match parse_match_typed("match", Operator::MatchNumber, args, ValueType::Number, declared_type, &mut probe) {
        Ok(expr) => {
            *ctx = probe;
            Ok(expr)
        }
        Err(_) => parse_match_typed("match", Operator::MatchString, args, ValueType::String, declared_type, ctx),
    }
}

pub fn parse_coalesce(args: &[Json], declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_at_least("coalesce", args, 2)?;
    let parsed = parse_args_same_type("coalesce", args, declared_type, 0, ctx)?;
    Ok(Expression::call(declared_type, Operator::Coalesce, parsed))
}
