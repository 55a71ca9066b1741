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

use crate::util::{parse_arg, require_exact};
use serde_json::Value as Json;
use style_ast::{coerce, Expression, Operator, ParsingContext, ValueType};
use style_errors::{ExprError, ParseError};

/// `in(needle, haystack)`: exactly 2 arguments. `haystack`'s first element
/// decides whether it is a `["literal", [strings...]]` wrapper (string
/// membership) or a bare numeric array. A bare string array is rejected
/// with the disambiguation message.
///
/// The returned call's args are `[needle, item_0, item_1, ...]`: each
/// haystack item is parsed as a literal up front (spec's "precomputed
/// haystack item"), so evaluation never re-walks the raw haystack.
pub fn parse_in(args: &[Json], ctx: &mut ParsingContext) -> Result<Expression, ExprError> {
    require_exact("in", args, 2)?;

    let haystack = args[1].as_array().ok_or(ParseError::InNotAnArray)?;

    let (needle_type, items): (ValueType, &[Json]) = if haystack.first().and_then(Json::as_str) == Some("literal") {
        if haystack.len() != 2 {
            return Err(ParseError::MalformedOptions(
                "the \"literal\" wrapper for \"in\" takes exactly one array argument".to_string(),
            )
            .into());
        }
        let strings = haystack[1].as_array().ok_or_else(|| {
            ExprError::from(ParseError::MalformedOptions(
                "the \"literal\" wrapper for \"in\" must contain an array of strings".to_string(),
            ))
        })?;
        (ValueType::String, strings.as_slice())
    } else if haystack.first().map(Json::is_string).unwrap_or(false) {
        return Err(ParseError::InStringArrayNotLiteral.into());
    } else {
        (ValueType::Number, haystack.as_slice())
    };

    let needle = parse_arg("in", 0, &args[0], needle_type, ctx)?;

    let mut parsed = vec![needle];
    for (i, item) in items.iter().enumerate() {
        let value = coerce(item, needle_type).map_err(|e| ParseError::haystack_item(i, e))?;
        parsed.push(Expression::literal(value));
    }

    Ok(Expression::call(ValueType::Boolean, Operator::In, parsed))
}
