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

//! Errors raised by the style-expr parser and evaluator.
//!
//! [`ParseError`] and [`LiteralError`] carry the literal message templates
//! that callers and tests match against; [`ExprError`] is the umbrella type
//! that lets `style-parser` and `style-eval` both return a single `Result`
//! alias.

use thiserror::Error;

/// A primitive could not be coerced to a declared [value type](style_ast::ValueType).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LiteralError {
    /// The raw value's shape cannot be coerced to the declared type at all
    /// (an entry marked `✗` in the coercion table), or can be coerced but
    /// the concrete value is malformed for it (wrong array length, NaN from
    /// a numeric string, ...).
    #[error("expected {0}")]
    Shape(String),

    /// The external color-string parser rejected a string.
    #[error("failed to parse {0:?} as color")]
    Color(String),
}

impl LiteralError {
    pub fn shape(expected: impl Into<String>) -> Self {
        Self::Shape(expected.into())
    }

    pub fn color(raw: impl Into<String>) -> Self {
        Self::Color(raw.into())
    }
}

/// An encoded expression failed to parse into a typed AST.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,

    #[error("expression must be an array or a primitive value")]
    NotAnExpression,

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("expected {expected} argument(s) for {op}, got {got}")]
    WrongArity { op: String, expected: String, got: usize },

    #[error("expected a number base for exponential interpolation, got {0} instead")]
    ExpectedExponentialBase(String),

    #[error("invalid interpolation type: {0}")]
    InvalidInterpolationType(String),

    #[error("the second argument for the \"in\" operator must be an array")]
    InNotAnArray,

    #[error(
        "for the \"in\" operator, a string array should be wrapped in a \"literal\" operator to disambiguate from expressions"
    )]
    InStringArrayNotLiteral,

    #[error("failed to parse argument {index} of {op} expression: {inner}")]
    Argument { op: String, index: usize, inner: Box<ExprError> },

    #[error("failed to parse haystack item {index} for \"in\" expression: {inner}")]
    HaystackItem { index: usize, inner: Box<ExprError> },

    #[error("failed to parse color at index {index} in palette expression: {inner}")]
    PaletteColor { index: usize, inner: Box<ExprError> },

    #[error("the palette color at index {0} must be a literal value")]
    PaletteColorNotLiteral(usize),

    #[error("a \"get\" or \"var\" accessor requires a non-empty path")]
    EmptyAccessorPath,

    #[error("malformed options record: {0}")]
    MalformedOptions(String),
}

impl ParseError {
    pub fn wrong_arity(op: impl Into<String>, expected: impl Into<String>, got: usize) -> Self {
        Self::WrongArity { op: op.into(), expected: expected.into(), got }
    }

    pub fn argument(op: impl Into<String>, index: usize, inner: impl Into<ExprError>) -> Self {
        Self::Argument { op: op.into(), index, inner: Box::new(inner.into()) }
    }

    pub fn haystack_item(index: usize, inner: impl Into<ExprError>) -> Self {
        Self::HaystackItem { index, inner: Box::new(inner.into()) }
    }

    pub fn palette_color(index: usize, inner: impl Into<ExprError>) -> Self {
        Self::PaletteColor { index, inner: Box::new(inner.into()) }
    }
}

/// The umbrella error type for anything that can go wrong while turning an
/// encoded expression into a typed, evaluable AST.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ExprError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Literal(#[from] LiteralError),
}

pub type Result<T, E = ExprError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_arity_message() {
        let err = ParseError::wrong_arity("concat", "at least 2", 1);
        assert_eq!(err.to_string(), "expected at least 2 argument(s) for concat, got 1");
    }

    #[test]
    fn exponential_base_message() {
        let err = ParseError::ExpectedExponentialBase("\"x\"".to_string());
        assert_eq!(err.to_string(), "expected a number base for exponential interpolation, got \"x\" instead");
    }

    #[test]
    fn in_disambiguation_message() {
        assert_eq!(
            ParseError::InStringArrayNotLiteral.to_string(),
            "for the \"in\" operator, a string array should be wrapped in a \"literal\" operator to disambiguate from expressions"
        );
    }

    #[test]
    fn nested_argument_message() {
        let inner = LiteralError::color("not-a-color");
        let err = ParseError::argument("get", 0, inner);
        assert_eq!(err.to_string(), "failed to parse argument 0 of get expression: failed to parse \"not-a-color\" as color");
    }

    #[test]
    fn color_parse_message() {
        let err = LiteralError::color("not-a-color");
        assert_eq!(err.to_string(), "failed to parse \"not-a-color\" as color");
    }
}
