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

//! Walks a typed AST against an [`EvaluationContext`] (§4.5).
//!
//! JS-style `undefined` is modeled as `Option<Value>::None` rather than a
//! seventh [`Value`] variant: [`Evaluator::evaluate`] can itself return
//! `None`, and the handful of operators that care about absence
//! (`coalesce`, `case`/`match` fallbacks) just propagate it. Every other
//! operator that needs a concrete operand substitutes a type-appropriate
//! falsy default (`0`, `false`, `""`, transparent black) so evaluation never
//! panics or throws, per §7.

use crate::color;
use crate::context::EvaluationContext;
use style_ast::{coerce, Expression, Operator, Value, ValueType};

/// A compiled expression, ready to be run against any number of
/// [`EvaluationContext`]s (§4.5, §6 item 4).
#[derive(Clone, Debug)]
pub struct Evaluator {
    expression: Expression,
}

impl Evaluator {
    pub fn new(expression: Expression) -> Self {
        Self { expression }
    }

    pub fn value_type(&self) -> ValueType {
        self.expression.value_type()
    }

    /// Evaluates the compiled expression. `None` means the result is
    /// `undefined` (an unresolved accessor propagated through, unhandled by
    /// `coalesce` or a `case`/`match` fallback).
    pub fn evaluate(&self, ctx: &EvaluationContext) -> Option<Value> {
        eval(&self.expression, ctx)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Number(n) => *n > 0.0,
        _ => false,
    }
}

fn literal_key(expr: &Expression) -> &str {
    match expr {
        Expression::Literal { value: Value::String(s), .. } => s,
        _ => unreachable!("accessor key argument is always a literal string set by the parser"),
    }
}

fn eval_number(expr: &Expression, ctx: &EvaluationContext) -> f64 {
    eval(expr, ctx).and_then(|v| v.as_number()).unwrap_or(f64::NAN)
}

fn eval_bool(expr: &Expression, ctx: &EvaluationContext) -> bool {
    eval(expr, ctx).map(|v| truthy(&v)).unwrap_or(false)
}

fn eval_string(expr: &Expression, ctx: &EvaluationContext) -> String {
    eval(expr, ctx).and_then(|v| v.as_string().map(str::to_string)).unwrap_or_default()
}

fn eval_color(expr: &Expression, ctx: &EvaluationContext) -> [f64; 4] {
    eval(expr, ctx).and_then(|v| v.as_color()).unwrap_or([0.0, 0.0, 0.0, 0.0])
}

fn eval(expr: &Expression, ctx: &EvaluationContext) -> Option<Value> {
    match expr {
        Expression::Literal { value, .. } => Some(value.clone()),
        Expression::Call { operator, args, value_type } => eval_call(*operator, args, *value_type, ctx),
    }
}

fn eval_call(operator: Operator, args: &[Expression], value_type: ValueType, ctx: &EvaluationContext) -> Option<Value> {
    use Operator::*;

    match operator {
        Get => ctx.property(literal_key(&args[0])).cloned(),
        Has => Some(Value::Boolean(ctx.has_property(literal_key(&args[0])))),
        Var => ctx.variable(literal_key(&args[0])).cloned(),

        Id => ctx.feature_id_json().and_then(|raw| coerce(&raw, value_type).ok()),
        GeometryType => ctx.geometry_type_json().and_then(|raw| coerce(&raw, value_type).ok()),
        Resolution => ctx.resolution_json().and_then(|raw| coerce(&raw, value_type).ok()),
        // No context slot exists for these: recognized by the parser (§4.3)
        // but the evaluation context (§3, §6) carries nothing to read.
        Zoom | Time | LineMetric => None,

        Concat => {
            let joined: String = args.iter().map(|a| eval_string(a, ctx)).collect();
            Some(Value::String(joined))
        }

        Not => Some(Value::Boolean(!eval_bool(&args[0], ctx))),
        All => Some(Value::Boolean(args.iter().all(|a| eval_bool(a, ctx)))),
        Any => Some(Value::Boolean(args.iter().any(|a| eval_bool(a, ctx)))),

        Eq | Neq | Lt | Le | Gt | Ge => {
            let a = eval_number(&args[0], ctx);
            let b = eval_number(&args[1], ctx);
            let result = match operator {
                Eq => a == b,
                Neq => a != b,
                Lt => a < b,
                Le => a <= b,
                Gt => a > b,
                Ge => a >= b,
                _ => unreachable!(),
            };
            Some(Value::Boolean(result))
        }
        Between => {
            let x = eval_number(&args[0], ctx);
            let lo = eval_number(&args[1], ctx);
            let hi = eval_number(&args[2], ctx);
            Some(Value::Boolean(lo <= x && x <= hi))
        }

        Add => Some(Value::Number(args.iter().map(|a| eval_number(a, ctx)).sum())),
        Mul => Some(Value::Number(args.iter().map(|a| eval_number(a, ctx)).product())),
        Sub => Some(Value::Number(eval_number(&args[0], ctx) - eval_number(&args[1], ctx))),
        Div => Some(Value::Number(eval_number(&args[0], ctx) / eval_number(&args[1], ctx))),
        Mod => Some(Value::Number(eval_number(&args[0], ctx) % eval_number(&args[1], ctx))),
        Pow => Some(Value::Number(eval_number(&args[0], ctx).powf(eval_number(&args[1], ctx)))),
        Clamp => {
            let v = eval_number(&args[0], ctx);
            let lo = eval_number(&args[1], ctx);
            let hi = eval_number(&args[2], ctx);
            Some(Value::Number(v.clamp(lo, hi)))
        }
        Abs => Some(Value::Number(eval_number(&args[0], ctx).abs())),
        Floor => Some(Value::Number(eval_number(&args[0], ctx).floor())),
        Ceil => Some(Value::Number(eval_number(&args[0], ctx).ceil())),
        Round => Some(Value::Number(eval_number(&args[0], ctx).round())),
        Sin => Some(Value::Number(eval_number(&args[0], ctx).sin())),
        Cos => Some(Value::Number(eval_number(&args[0], ctx).cos())),
        Sqrt => Some(Value::Number(eval_number(&args[0], ctx).sqrt())),
        Atan => {
            if args.len() == 1 {
                Some(Value::Number(eval_number(&args[0], ctx).atan()))
            } else {
                Some(Value::Number(eval_number(&args[0], ctx).atan2(eval_number(&args[1], ctx))))
            }
        }

        Case => {
            let pairs = (args.len() - 1) / 2;
            for i in 0..pairs {
                if eval_bool(&args[2 * i], ctx) {
                    return eval(&args[2 * i + 1], ctx);
                }
            }
            eval(&args[args.len() - 1], ctx)
        }
        MatchNumber => {
            let needle = eval_number(&args[0], ctx);
            let pairs = (args.len() - 2) / 2;
            for i in 0..pairs {
                if eval_number(&args[1 + 2 * i], ctx) == needle {
                    return eval(&args[2 + 2 * i], ctx);
                }
            }
            eval(&args[args.len() - 1], ctx)
        }
        MatchString => {
            let needle = eval_string(&args[0], ctx);
            let pairs = (args.len() - 2) / 2;
            for i in 0..pairs {
                if eval_string(&args[1 + 2 * i], ctx) == needle {
                    return eval(&args[2 + 2 * i], ctx);
                }
            }
            eval(&args[args.len() - 1], ctx)
        }
        Coalesce => args.iter().find_map(|a| eval(a, ctx)),

        Interpolate => eval_interpolate(args, value_type, ctx),

        In => {
            let needle = eval(&args[0], ctx);
            let found = args[1..].iter().any(|item| eval(item, ctx) == needle);
            Some(Value::Boolean(found))
        }

        Array => Some(Value::NumberArray(args.iter().map(|a| eval_number(a, ctx)).collect())),
        Color => {
            let nums: Vec<f64> = args.iter().map(|a| eval_number(a, ctx)).collect();
            let rgba = match nums.len() {
                1 => [nums[0], nums[0], nums[0], 1.0],
                2 => [nums[0], nums[0], nums[0], nums[1]],
                3 => [nums[0], nums[1], nums[2], 1.0],
                4 => [nums[0], nums[1], nums[2], nums[3]],
                _ => unreachable!("color arity enforced at parse time"),
            };
            Some(Value::Color(rgba))
        }
        Band => {
            // No raster data source is modeled in this core; args are still
            // evaluated for their side-effect-free shape but the sampled
            // value itself comes from outside this crate's scope.
            for a in args {
                eval(a, ctx);
            }
            Some(Value::Number(0.0))
        }
        Palette => {
            let index = eval_number(&args[0], ctx);
            let colors = &args[1..];
            if colors.is_empty() {
                return Some(Value::Color([0.0, 0.0, 0.0, 0.0]));
            }
            let i = (index.round() as i64).clamp(0, colors.len() as i64 - 1) as usize;
            eval(&colors[i], ctx)
        }
    }
}

fn eval_interpolate(args: &[Expression], value_type: ValueType, ctx: &EvaluationContext) -> Option<Value> {
    let base = eval_number(&args[0], ctx);
    let x = eval_number(&args[1], ctx);
    let stops = &args[2..];
    let n = stops.len() / 2;

    let stop_at = |i: usize| eval_number(&stops[2 * i], ctx);
    let out_at = |i: usize| &stops[2 * i + 1];

    if x <= stop_at(0) {
        return eval(out_at(0), ctx);
    }
    if x >= stop_at(n - 1) {
        return eval(out_at(n - 1), ctx);
    }

    let mut i = 0;
    while i + 1 < n && !(stop_at(i) <= x && x < stop_at(i + 1)) {
        i += 1;
    }
    let s_i = stop_at(i);
    let s_next = stop_at(i + 1);
    let delta = s_next - s_i;
    if delta == 0.0 {
        return eval(out_at(i + 1), ctx);
    }

    let t = if base == 1.0 {
        (x - s_i) / delta
    } else {
        let y = x - s_i;
        (base.powf(y) - 1.0) / (base.powf(delta) - 1.0)
    };

    match value_type {
        ValueType::Color => {
            let from = eval_color(out_at(i), ctx);
            let to = eval_color(out_at(i + 1), ctx);
            Some(Value::Color(color::blend(from, to, t)))
        }
        _ => {
            let from = eval_number(out_at(i), ctx);
            let to = eval_number(out_at(i + 1), ctx);
            Some(Value::Number(from + t * (to - from)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use style_parser::parse;

    fn evaluate(encoded: &serde_json::Value, declared_type: ValueType, properties: IndexMap<String, Value>) -> Option<Value> {
        let mut parse_ctx = style_ast::ParsingContext::new();
        let expr = parse(encoded, declared_type, &mut parse_ctx).unwrap();
        let mut eval_ctx = EvaluationContext::new();
        eval_ctx.set_properties(properties);
        Evaluator::new(expr).evaluate(&eval_ctx)
    }

    #[test]
    fn get_with_default_falls_back() {
        let mut props = IndexMap::new();
        let mut parse_ctx = style_ast::ParsingContext::new();
        let encoded: serde_json::Value = serde_json::json!(["get", "deeply", "nested", "property", {"default": 100}]);
        let expr = parse(&encoded, ValueType::Number, &mut parse_ctx).unwrap();
        let key = parse_ctx.properties().keys().next().unwrap().as_str().to_string();
        props.insert(key, Value::Number(100.0));
        let mut eval_ctx = EvaluationContext::new();
        eval_ctx.set_properties(props);
        assert_eq!(Evaluator::new(expr).evaluate(&eval_ctx), Some(Value::Number(100.0)));
    }

    #[test]
    fn concat_joins_values() {
        let mut props = IndexMap::new();
        props.insert("val".to_string(), Value::String("test".to_string()));
        props.insert("val2".to_string(), Value::String("another".to_string()));
        let encoded = serde_json::json!(["concat", ["get", "val"], " ", ["get", "val2"]]);

        let mut parse_ctx = style_ast::ParsingContext::new();
        let expr = parse(&encoded, ValueType::String, &mut parse_ctx).unwrap();
        let mut remapped = IndexMap::new();
        for key in parse_ctx.properties().keys() {
            let raw_path = key.as_str().split('|').next().unwrap();
            if let Some(v) = props.get(raw_path) {
                remapped.insert(key.as_str().to_string(), v.clone());
            }
        }
        let mut eval_ctx = EvaluationContext::new();
        eval_ctx.set_properties(remapped);
        assert_eq!(Evaluator::new(expr).evaluate(&eval_ctx), Some(Value::String("test another".to_string())));
    }

    #[test]
    fn interpolate_linear_number() {
        let encoded = serde_json::json!(["interpolate", ["linear"], ["get", "n"], 0, 0, 1, 100]);
        let mut parse_ctx = style_ast::ParsingContext::new();
        let expr = parse(&encoded, ValueType::Number, &mut parse_ctx).unwrap();
        let key = parse_ctx.properties().keys().next().unwrap().as_str().to_string();
        let mut props = IndexMap::new();
        props.insert(key, Value::Number(0.5));
        let mut eval_ctx = EvaluationContext::new();
        eval_ctx.set_properties(props);
        assert_eq!(Evaluator::new(expr).evaluate(&eval_ctx), Some(Value::Number(50.0)));
    }

    #[test]
    fn interpolate_exponential_number() {
        let encoded = serde_json::json!(["interpolate", ["exponential", 2], 0.5, 0, 0, 1, 100]);
        let mut parse_ctx = style_ast::ParsingContext::new();
        let expr = parse(&encoded, ValueType::Number, &mut parse_ctx).unwrap();
        let eval_ctx = EvaluationContext::new();
        let result = Evaluator::new(expr).evaluate(&eval_ctx).unwrap();
        match result {
            Value::Number(n) => assert!((n - 41.42135623730952).abs() < 1e-6),
            other => panic!("expected a number, got {other:?}"),
        }
    }

    #[test]
    fn between_is_inclusive() {
        let result = evaluate(&serde_json::json!(["between", 3, 3, 5]), ValueType::Boolean, IndexMap::new());
        assert_eq!(result, Some(Value::Boolean(true)));
    }

    #[test]
    fn in_rejects_non_member() {
        let encoded = serde_json::json!(["in", "yellow", ["literal", ["red", "green", "blue"]]]);
        let result = evaluate(&encoded, ValueType::Boolean, IndexMap::new());
        assert_eq!(result, Some(Value::Boolean(false)));
    }

    #[test]
    fn coalesce_skips_undefined() {
        let mut props = IndexMap::new();
        let mut parse_ctx = style_ast::ParsingContext::new();
        let encoded = serde_json::json!(["coalesce", ["get", "a"], ["get", "b"], "last"]);
        let expr = parse(&encoded, ValueType::String, &mut parse_ctx).unwrap();
        for key in parse_ctx.properties().keys() {
            let raw_path = key.as_str().split('|').next().unwrap();
            if raw_path == "b" {
                props.insert(key.as_str().to_string(), Value::String("hello".to_string()));
            }
        }
        let mut eval_ctx = EvaluationContext::new();
        eval_ctx.set_properties(props);
        assert_eq!(Evaluator::new(expr).evaluate(&eval_ctx), Some(Value::String("hello".to_string())));
    }
}
