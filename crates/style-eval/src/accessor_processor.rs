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

//! Turns raw, possibly nested feature/variable records into a flat table of
//! typed values keyed by accessor identity (§4.4).

use indexmap::IndexMap;
use serde_json::Value as Json;
use style_ast::{coerce, AccessorKey, AccessorMetadata, PathSegment, Value};
use style_errors::ExprError;
use tracing::trace;

/// A resolved accessor: the slug it was assigned at parse time, its type,
/// and the coerced value that survived path-walking, defaulting and
/// coercion.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedValue {
    pub slug: String,
    pub value_type: style_ast::ValueType,
    pub value: Value,
}

fn walk_path<'a>(root: &'a Json, path: &[PathSegment]) -> Option<&'a Json> {
    let mut current = root;
    for segment in path {
        current = match (segment, current) {
            (PathSegment::Key(key), Json::Object(map)) => map.get(key)?,
            (PathSegment::Index(index), Json::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Produces a flat lookup from accessor key to [`ProcessedValue`] by
/// walking `raw` for every accessor in `metadata_lookup` (spec's 4-step
/// procedure: walk, coerce if present, else coerce the default, else omit).
pub fn process_accessor_values(
    raw: &Json,
    metadata_lookup: &IndexMap<AccessorKey, AccessorMetadata>,
) -> Result<IndexMap<AccessorKey, ProcessedValue>, ExprError> {
    let mut out = IndexMap::with_capacity(metadata_lookup.len());
    for (key, info) in metadata_lookup {
        let resolved = walk_path(raw, &info.path);
        let value = match (resolved, &info.default) {
            (Some(leaf), _) => coerce(leaf, info.value_type)?,
            (None, Some(default)) => coerce(default, info.value_type)?,
            (None, None) => {
                trace!(key = %key, "accessor absent and no default, omitting");
                continue;
            }
        };
        out.insert(key.clone(), ProcessedValue { slug: info.slug.clone(), value_type: info.value_type, value });
    }
    Ok(out)
}

/// Flattens a processed-value lookup into the plain `key -> value` table
/// [`crate::EvaluationContext::set_properties`]/`set_variables` expect.
pub fn flatten(processed: IndexMap<AccessorKey, ProcessedValue>) -> IndexMap<String, Value> {
    processed.into_iter().map(|(key, pv)| (key.as_str().to_string(), pv.value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use style_ast::{ParsingContext, ValueType};

    #[test]
    fn present_value_is_coerced() {
        let mut ctx = ParsingContext::new();
        let key = ctx.register_property(vec![PathSegment::Key("property".into())], ValueType::Number, None);
        let raw = json!({"property": 42});
        let out = process_accessor_values(&raw, ctx.properties()).unwrap();
        assert_eq!(out.get(&key).unwrap().value, Value::Number(42.0));
    }

    #[test]
    fn missing_value_falls_back_to_default() {
        let mut ctx = ParsingContext::new();
        let path = vec![PathSegment::Key("deeply".into()), PathSegment::Key("nested".into()), PathSegment::Key("property".into())];
        let key = ctx.register_property(path, ValueType::Number, Some(json!(100)));
        let raw = json!({"deeply": {"nested": {}}});
        let out = process_accessor_values(&raw, ctx.properties()).unwrap();
        assert_eq!(out.get(&key).unwrap().value, Value::Number(100.0));
    }

    #[test]
    fn missing_value_without_default_is_omitted() {
        let mut ctx = ParsingContext::new();
        ctx.register_property(vec![PathSegment::Key("missing".into())], ValueType::Number, None);
        let raw = json!({});
        let out = process_accessor_values(&raw, ctx.properties()).unwrap();
        assert!(out.is_empty());
    }
}
