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

//! A small, embeddable style-expression language for per-feature and
//! per-tile map styling: a parser/type-checker that turns an encoded
//! expression into a typed AST plus accessor metadata, and a CPU evaluator
//! that compiles the AST into something runnable against a per-render-pass
//! context.
//!
//! This crate is a thin façade over four workspace crates:
//! [`style_errors`], [`style_ast`], [`style_parser`] and [`style_eval`].
//! The five capabilities below (§6) are all a caller needs.

pub use style_ast::{
    AccessorKey, AccessorKind, AccessorMetadata, Expression, Operator, ParsingContext, Value, ValueType,
};
pub use style_errors::{ExprError, LiteralError, ParseError, Result};
pub use style_eval::{flatten, process_accessor_values, EvaluationContext, Evaluator, FeatureId, ProcessedValue};

use serde_json::Value as Json;

/// Capability 1: a fresh, empty parsing context.
pub fn new_parsing_context() -> ParsingContext {
    ParsingContext::new()
}

/// Capability 2: parses `encoded` into a typed AST of type `declared_type`,
/// registering any accessors it touches in `ctx`.
pub fn parse(encoded: &Json, declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Expression> {
    style_parser::parse(encoded, declared_type, ctx)
}

/// Capability 3: produces the flat, slug-keyed table an [`Evaluator`] reads
/// accessors from, given a raw feature/variable record and the accessor
/// metadata collected while parsing.
pub fn process_accessor_values(
    raw: &Json,
    metadata_lookup: &indexmap::IndexMap<AccessorKey, AccessorMetadata>,
) -> Result<indexmap::IndexMap<AccessorKey, ProcessedValue>> {
    style_eval::process_accessor_values(raw, metadata_lookup)
}

/// Capability 4: parses `encoded` and immediately compiles the result into
/// an [`Evaluator`].
pub fn build_expression(encoded: &Json, declared_type: ValueType, ctx: &mut ParsingContext) -> Result<Evaluator> {
    let expression = parse(encoded, declared_type, ctx)?;
    Ok(Evaluator::new(expression))
}

/// Capability 5: a fresh evaluation context. Populate it with
/// [`EvaluationContext::set_properties`], `set_variables`, `set_feature_id`,
/// `set_geometry_type` and `set_resolution` before evaluating.
pub fn new_evaluation_context() -> EvaluationContext {
    EvaluationContext::new()
}
