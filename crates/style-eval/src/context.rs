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

//! The read-only context an [`crate::Evaluator`] is run against (§3 "Evaluation context").

use indexmap::IndexMap;
use style_ast::Value;

/// A feature id, supplied by the caller as either a number or a string.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureId {
    Number(f64),
    String(String),
}

impl From<f64> for FeatureId {
    fn from(n: f64) -> Self {
        FeatureId::Number(n)
    }
}

impl From<String> for FeatureId {
    fn from(s: String) -> Self {
        FeatureId::String(s)
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        FeatureId::String(s.to_string())
    }
}

impl FeatureId {
    pub(crate) fn as_json(&self) -> serde_json::Value {
        match self {
            FeatureId::Number(n) => serde_json::Value::from(*n),
            FeatureId::String(s) => serde_json::Value::from(s.clone()),
        }
    }
}

/// Supplied once per render pass and read only during evaluation (§3): the
/// flat accessor tables produced by [`crate::process_accessor_values`], plus
/// the scalar reader fields `id`, `geometry-type` and `resolution`.
#[derive(Clone, Debug, Default)]
pub struct EvaluationContext {
    properties: IndexMap<String, Value>,
    variables: IndexMap<String, Value>,
    feature_id: Option<FeatureId>,
    geometry_type: Option<String>,
    resolution: Option<f64>,
}

impl EvaluationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_properties(&mut self, properties: IndexMap<String, Value>) {
        self.properties = properties;
    }

    pub fn set_variables(&mut self, variables: IndexMap<String, Value>) {
        self.variables = variables;
    }

    pub fn set_feature_id(&mut self, feature_id: impl Into<FeatureId>) {
        self.feature_id = Some(feature_id.into());
    }

    pub fn set_geometry_type(&mut self, geometry_type: impl Into<String>) {
        self.geometry_type = Some(geometry_type.into());
    }

    pub fn set_resolution(&mut self, resolution: f64) {
        self.resolution = Some(resolution);
    }

    pub(crate) fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub(crate) fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub(crate) fn variable(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    pub(crate) fn feature_id_json(&self) -> Option<serde_json::Value> {
        self.feature_id.as_ref().map(FeatureId::as_json)
    }

    pub(crate) fn geometry_type_json(&self) -> Option<serde_json::Value> {
        self.geometry_type.as_ref().map(|s| serde_json::Value::from(s.clone()))
    }

    pub(crate) fn resolution_json(&self) -> Option<serde_json::Value> {
        self.resolution.map(serde_json::Value::from)
    }
}
