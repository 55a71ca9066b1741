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

//! The fourteen concrete scenarios from the style language's evaluator
//! spec, used as end-to-end seed fixtures against the public API.

use indexmap::IndexMap;
use serde_json::json;
use style_expr::{new_evaluation_context, new_parsing_context, process_accessor_values, ValueType, Value};

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {a} ~= {b} within {tol}");
}

/// Parses `encoded`, processes `properties`/`variables` against the
/// resulting accessor metadata, and evaluates — the full pipeline a real
/// caller drives.
fn run(
    encoded: &serde_json::Value,
    declared_type: ValueType,
    properties: serde_json::Value,
    variables: serde_json::Value,
) -> Option<Value> {
    let mut ctx = new_parsing_context();
    let evaluator = style_expr::build_expression(encoded, declared_type, &mut ctx).unwrap();

    let processed_properties = process_accessor_values(&properties, ctx.properties()).unwrap();
    let processed_variables = process_accessor_values(&variables, ctx.variables()).unwrap();

    let mut eval_ctx = new_evaluation_context();
    eval_ctx.set_properties(style_expr::flatten(processed_properties));
    eval_ctx.set_variables(style_expr::flatten(processed_variables));

    evaluator.evaluate(&eval_ctx)
}

#[test]
fn scenario_1_get_simple_property() {
    let result = run(&json!(["get", "property"]), ValueType::Number, json!({"property": 42}), json!({}));
    assert_eq!(result, Some(Value::Number(42.0)));
}

#[test]
fn scenario_2_get_nested_with_default() {
    let encoded = json!(["get", "deeply", "nested", "property", {"default": 100}]);
    let result = run(&encoded, ValueType::Number, json!({"deeply": {"nested": {}}}), json!({}));
    assert_eq!(result, Some(Value::Number(100.0)));
}

#[test]
fn scenario_3_get_color_from_named_string() {
    let result = run(&json!(["get", "color"]), ValueType::Color, json!({"color": "red"}), json!({}));
    assert_eq!(result, Some(Value::Color([255.0, 0.0, 0.0, 1.0])));
}

#[test]
fn scenario_4_var_nested_color() {
    let encoded = json!(["var", "deeply", "nested", "property"]);
    let variables = json!({"deeply": {"nested": {"property": "fuchsia"}}});
    let result = run(&encoded, ValueType::Color, json!({}), variables);
    assert_eq!(result, Some(Value::Color([255.0, 0.0, 255.0, 1.0])));
}

#[test]
fn scenario_5_concat_properties() {
    let encoded = json!(["concat", ["get", "val"], " ", ["get", "val2"]]);
    let properties = json!({"val": "test", "val2": "another"});
    let result = run(&encoded, ValueType::String, properties, json!({}));
    assert_eq!(result, Some(Value::String("test another".to_string())));
}

#[test]
fn scenario_6_coalesce_skips_missing_property() {
    let encoded = json!(["coalesce", ["get", "a"], ["get", "b"], "last"]);
    let properties = json!({"b": "hello"});
    let result = run(&encoded, ValueType::String, properties, json!({}));
    assert_eq!(result, Some(Value::String("hello".to_string())));
}

#[test]
fn scenario_7_interpolate_linear_number() {
    let encoded = json!(["interpolate", ["linear"], ["get", "n"], 0, 0, 1, 100]);
    let result = run(&encoded, ValueType::Number, json!({"n": 0.5}), json!({}));
    assert_eq!(result, Some(Value::Number(50.0)));
}

#[test]
fn scenario_8_interpolate_exponential_number() {
    let encoded = json!(["interpolate", ["exponential", 2], 0.5, 0, 0, 1, 100]);
    let result = run(&encoded, ValueType::Number, json!({}), json!({})).unwrap();
    match result {
        Value::Number(n) => approx_eq(n, 41.42135623730952, 1e-6),
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn scenario_9_interpolate_linear_color() {
    let encoded = json!(["interpolate", ["linear"], 0.5, 0, "red", 1, [0, 255, 0]]);
    let result = run(&encoded, ValueType::Color, json!({}), json!({})).unwrap();
    match result {
        Value::Color([r, g, b, a]) => {
            approx_eq(r, 219.0, 1.0);
            approx_eq(g, 170.0, 1.0);
            approx_eq(b, 0.0, 1.0);
            approx_eq(a, 1.0, 1e-6);
        }
        other => panic!("expected a color, got {other:?}"),
    }
}

#[test]
fn scenario_10_match_legacy_alias_with_string_discriminant() {
    let encoded = json!(["match", ["get", "string"], "foo", "got foo", "got other"]);
    let properties = json!({"string": "bar"});
    let result = run(&encoded, ValueType::String, properties, json!({}));
    assert_eq!(result, Some(Value::String("got other".to_string())));
}

#[test]
fn scenario_11_in_rejects_yellow() {
    let encoded = json!(["in", "yellow", ["literal", ["red", "green", "blue"]]]);
    let result = run(&encoded, ValueType::Boolean, json!({}), json!({}));
    assert_eq!(result, Some(Value::Boolean(false)));
}

#[test]
fn scenario_12_between_is_inclusive() {
    let result = run(&json!(["between", 3, 3, 5]), ValueType::Boolean, json!({}), json!({}));
    assert_eq!(result, Some(Value::Boolean(true)));
}

#[test]
fn scenario_13_parse_error_bad_exponential_base() {
    let encoded = json!(["interpolate", ["exponential", "x"], 0.5, 0, 0, 1, 1]);
    let mut ctx = new_parsing_context();
    let err = style_expr::parse(&encoded, ValueType::Number, &mut ctx).unwrap_err();
    assert_eq!(err.to_string(), "expected a number base for exponential interpolation, got \"x\" instead");
}

#[test]
fn scenario_14_parse_error_bare_string_array_needs_literal_wrapper() {
    let encoded = json!(["in", ["get", "attr"], ["abcd", "efgh", "ijkl"]]);
    let mut ctx = new_parsing_context();
    let err = style_expr::parse(&encoded, ValueType::Boolean, &mut ctx).unwrap_err();
    assert_eq!(
        err.to_string(),
        "for the \"in\" operator, a string array should be wrapped in a \"literal\" operator to disambiguate from expressions"
    );
}

#[test]
fn accessor_dedup_preserves_first_slug() {
    let mut ctx = new_parsing_context();
    let encoded = json!(["==", ["get", "a"], ["get", "a"]]);
    style_expr::parse(&encoded, ValueType::Boolean, &mut ctx).unwrap();
    assert_eq!(ctx.properties().len(), 1);
}

#[test]
fn feature_id_flag_is_set_when_id_appears() {
    let mut ctx = new_parsing_context();
    style_expr::parse(&json!(["==", ["id"], 1.0]), ValueType::Boolean, &mut ctx).unwrap();
    assert!(ctx.uses_feature_id());
    assert!(!ctx.uses_geometry_type());
}

#[test]
fn all_and_any_short_circuit_consistently() {
    let all_result = run(&json!(["all", true, false]), ValueType::Boolean, json!({}), json!({}));
    let any_result = run(&json!(["any", false, true]), ValueType::Boolean, json!({}), json!({}));
    assert_eq!(all_result, Some(Value::Boolean(false)));
    assert_eq!(any_result, Some(Value::Boolean(true)));
}

#[test]
fn clamp_is_idempotent() {
    let once = run(&json!(["clamp", 12.0, 0.0, 10.0]), ValueType::Number, json!({}), json!({}));
    assert_eq!(once, Some(Value::Number(10.0)));
    let twice = run(&json!(["clamp", ["clamp", 12.0, 0.0, 10.0], 0.0, 10.0]), ValueType::Number, json!({}), json!({}));
    assert_eq!(twice, once);
}

#[test]
fn accessor_processor_omits_absent_without_default() {
    let mut ctx = new_parsing_context();
    let encoded = json!(["has", "missing"]);
    style_expr::parse(&encoded, ValueType::Boolean, &mut ctx).unwrap();
    let processed = process_accessor_values(&json!({}), ctx.properties()).unwrap();
    assert!(processed.is_empty());
}

#[allow(dead_code)]
fn assert_indexmap_type(_: &IndexMap<String, Value>) {}
