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

//! The closed value-type set and the literal coercion rules of §4.1.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use style_errors::LiteralError;

/// The closed set of value types a style expression can be declared to
/// produce.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum ValueType {
    Boolean,
    Number,
    String,
    Color,
    NumberArray,
    Size,
}

impl ValueType {
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Color => "color",
            ValueType::NumberArray => "number[]",
            ValueType::Size => "size",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value conforming to a [`ValueType`].
///
/// `Color` is `(r, g, b, a)` with `r, g, b` in `[0, 255]` and `a` in
/// `[0, 1]`. `Size` is exactly two numbers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Boolean(bool),
    Number(f64),
    String(String),
    Color([f64; 4]),
    NumberArray(Vec<f64>),
    Size([f64; 2]),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Color(_) => ValueType::Color,
            Value::NumberArray(_) => ValueType::NumberArray,
            Value::Size(_) => ValueType::Size,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<[f64; 4]> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }
}

/// Renders a raw JSON value the way it should appear inside an error
/// message: quoted strings, bare numbers, `[...]` arrays.
pub fn display_json(raw: &Json) -> String {
    raw.to_string()
}

/// Coerces a raw JSON primitive to `target`, following the table in spec
/// §4.1. Used both by the parser (for literal arguments) and by the
/// accessor processor (for resolved or defaulted property/variable values).
pub fn coerce(raw: &Json, target: ValueType) -> Result<Value, LiteralError> {
    match (raw, target) {
        // boolean row
        (Json::Bool(b), ValueType::Boolean) => Ok(Value::Boolean(*b)),
        (Json::Bool(b), ValueType::String) => Ok(Value::String(if *b { "true" } else { "false" }.to_string())),
        (Json::Bool(_), _) => Err(LiteralError::shape(target.name())),

        // number row
        (Json::Number(n), ValueType::Boolean) => Ok(Value::Boolean(json_number_f64(n) != 0.0)),
        (Json::Number(n), ValueType::Number) => Ok(Value::Number(json_number_f64(n))),
        (Json::Number(n), ValueType::String) => Ok(Value::String(format_number(json_number_f64(n)))),
        (Json::Number(n), ValueType::Size) => {
            let v = json_number_f64(n);
            Ok(Value::Size([v, v]))
        }
        (Json::Number(_), _) => Err(LiteralError::shape(target.name())),

        // string row
        (Json::String(s), ValueType::Boolean) => Ok(Value::Boolean(!s.is_empty())),
        (Json::String(s), ValueType::Number) => {
            let n: f64 = s.trim().parse().map_err(|_| LiteralError::shape(target.name()))?;
            if n.is_nan() {
                return Err(LiteralError::shape(target.name()));
            }
            Ok(Value::Number(n))
        }
        (Json::String(s), ValueType::String) => Ok(Value::String(s.clone())),
        (Json::String(s), ValueType::Color) => parse_color(s),
        (Json::String(_), _) => Err(LiteralError::shape(target.name())),

        // array row
        (Json::Array(items), ValueType::String) => {
            let parts = items.iter().map(display_json).collect::<Vec<_>>();
            Ok(Value::String(parts.join(",")))
        }
        (Json::Array(items), ValueType::Color) => coerce_array_to_color(items),
        (Json::Array(items), ValueType::NumberArray) => Ok(Value::NumberArray(all_numbers(items, target)?)),
        (Json::Array(items), ValueType::Size) => {
            if items.len() != 2 {
                return Err(LiteralError::shape(target.name()));
            }
            let nums = all_numbers(items, target)?;
            Ok(Value::Size([nums[0], nums[1]]))
        }
        (Json::Array(_), _) => Err(LiteralError::shape(target.name())),

        // other (null, object): total fallback for boolean, otherwise unsupported.
        (Json::Null, ValueType::Boolean) => Ok(Value::Boolean(false)),
        (Json::Object(_), ValueType::Boolean) => Ok(Value::Boolean(true)),
        (Json::Null | Json::Object(_), _) => Err(LiteralError::shape(target.name())),
    }
}

fn all_numbers(items: &[Json], target: ValueType) -> Result<Vec<f64>, LiteralError> {
    items
        .iter()
        .map(|item| match item {
            Json::Number(n) => Ok(json_number_f64(n)),
            _ => Err(LiteralError::shape(target.name())),
        })
        .collect()
}

fn coerce_array_to_color(items: &[Json]) -> Result<Value, LiteralError> {
    let nums = all_numbers(items, ValueType::Color)?;
    match nums.len() {
        3 => Ok(Value::Color([nums[0], nums[1], nums[2], 1.0])),
        4 => Ok(Value::Color([nums[0], nums[1], nums[2], nums[3]])),
        _ => Err(LiteralError::shape(ValueType::Color.name())),
    }
}

fn parse_color(s: &str) -> Result<Value, LiteralError> {
    let parsed = csscolorparser::parse(s).map_err(|_| LiteralError::color(s.to_string()))?;
    let [r, g, b, _] = parsed.to_rgba8();
    Ok(Value::Color([r as f64, g as f64, b as f64, parsed.a]))
}

fn json_number_f64(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

/// Shortest round-tripping decimal form of a number, the way `to-string`
/// must render it (spec §8 round-trip law).
pub fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        let mut s = format!("{n}");
        if s.contains('e') || s.contains("inf") || s.contains("NaN") {
            s = format!("{n:?}");
        }
        s
    }
}
