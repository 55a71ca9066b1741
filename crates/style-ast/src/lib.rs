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

//! Core value types, literal coercion, the parsing context and the typed
//! AST of the style-expr language. See `SPEC_FULL.md` §4.1, §4.2 and §3.

mod context;
mod expression;
mod path;
mod types;

pub use context::{AccessorKind, AccessorKey, AccessorMetadata, ParsingContext};
pub use expression::{Expression, Operator};
pub use path::{join_path, PathSegment};
pub use types::{coerce, display_json, format_number, Value, ValueType};
