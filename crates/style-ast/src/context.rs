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

//! The mutable parsing context accumulated over a single parse (§3, §4.2).

use crate::path::{join_path, PathSegment};
use crate::types::ValueType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// Identifies an accessor kind: which of the two mappings it lives in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccessorKind {
    Property,
    Variable,
}

/// The stable lookup key for an accessor: the canonical serialization of
/// `(path, type, default)`. Two registrations with the same tuple produce
/// the same key and therefore dedupe to one metadata entry.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct AccessorKey(String);

impl AccessorKey {
    fn compute(path: &[PathSegment], value_type: ValueType, default: Option<&Json>) -> Self {
        let default_repr = default.map(|d| d.to_string()).unwrap_or_else(|| "\u{2205}".to_string());
        Self(format!("{}|{}|{}", join_path(path), value_type.name(), default_repr))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccessorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-accessor metadata: its path, declared type, optional raw default and
/// the slug it was assigned at registration time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccessorMetadata {
    pub path: Vec<PathSegment>,
    pub value_type: ValueType,
    pub default: Option<Json>,
    pub slug: String,
}

/// Accumulates accessor metadata and reader-operator usage flags over the
/// course of a single [`parse`](style_parser). Never shared or reset across
/// parses; each call to [`new`](ParsingContext::new) starts fresh.
#[derive(Clone, Debug, Default)]
pub struct ParsingContext {
    properties: IndexMap<AccessorKey, AccessorMetadata>,
    variables: IndexMap<AccessorKey, AccessorMetadata>,
    feature_id: bool,
    geometry_type: bool,
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a `get` accessor against `properties`, returning its key.
    /// A second registration with the same `(path, type, default)` returns
    /// the existing entry and its original slug.
    pub fn register_property(
        &mut self,
        path: Vec<PathSegment>,
        value_type: ValueType,
        default: Option<Json>,
    ) -> AccessorKey {
        Self::register(&mut self.properties, AccessorKind::Property, path, value_type, default)
    }

    /// Registers a `var` accessor against `variables`. See
    /// [`register_property`](Self::register_property).
    pub fn register_variable(
        &mut self,
        path: Vec<PathSegment>,
        value_type: ValueType,
        default: Option<Json>,
    ) -> AccessorKey {
        Self::register(&mut self.variables, AccessorKind::Variable, path, value_type, default)
    }

    fn register(
        map: &mut IndexMap<AccessorKey, AccessorMetadata>,
        kind: AccessorKind,
        path: Vec<PathSegment>,
        value_type: ValueType,
        default: Option<Json>,
    ) -> AccessorKey {
        let key = AccessorKey::compute(&path, value_type, default.as_ref());
        if let Some(existing) = map.get(&key) {
            tracing::trace!(key = %key, kind = ?kind, "accessor already registered, reusing slug {}", existing.slug);
            return key;
        }
        let slug = format!("{}_{}", join_path(&path), map.len());
        tracing::trace!(key = %key, kind = ?kind, slug = %slug, "registered new accessor");
        map.insert(key.clone(), AccessorMetadata { path, value_type, default, slug });
        key
    }

    pub fn mark_feature_id(&mut self) {
        self.feature_id = true;
    }

    pub fn mark_geometry_type(&mut self) {
        self.geometry_type = true;
    }

    pub fn uses_feature_id(&self) -> bool {
        self.feature_id
    }

    pub fn uses_geometry_type(&self) -> bool {
        self.geometry_type
    }

    pub fn properties(&self) -> &IndexMap<AccessorKey, AccessorMetadata> {
        &self.properties
    }

    pub fn variables(&self) -> &IndexMap<AccessorKey, AccessorMetadata> {
        &self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_reuses_slug() {
        let mut ctx = ParsingContext::new();
        let path = vec![PathSegment::Key("a".into())];
        let k1 = ctx.register_property(path.clone(), ValueType::Number, None);
        let k2 = ctx.register_property(path, ValueType::Number, None);
        assert_eq!(k1, k2);
        assert_eq!(ctx.properties().len(), 1);
        assert_eq!(ctx.properties().get(&k1).unwrap().slug, "a_0");
    }

    #[test]
    fn differing_default_is_a_distinct_accessor() {
        let mut ctx = ParsingContext::new();
        let path = vec![PathSegment::Key("a".into())];
        let k1 = ctx.register_property(path.clone(), ValueType::Number, None);
        let k2 = ctx.register_property(path, ValueType::Number, Some(Json::from(1)));
        assert_ne!(k1, k2);
        assert_eq!(ctx.properties().len(), 2);
    }

    #[test]
    fn slug_counters_are_per_accessor_kind() {
        let mut ctx = ParsingContext::new();
        let k_prop = ctx.register_property(vec![PathSegment::Key("foo".into())], ValueType::Number, None);
        let k_var = ctx.register_variable(vec![PathSegment::Key("foo".into())], ValueType::Number, None);
        assert_eq!(ctx.properties().get(&k_prop).unwrap().slug, "foo_0");
        assert_eq!(ctx.variables().get(&k_var).unwrap().slug, "foo_0");
    }

    #[test]
    fn feature_id_and_geometry_type_flags() {
        let mut ctx = ParsingContext::new();
        assert!(!ctx.uses_feature_id());
        ctx.mark_feature_id();
        assert!(ctx.uses_feature_id());
        assert!(!ctx.uses_geometry_type());
    }
}
