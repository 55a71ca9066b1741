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

//! The accessor processor (§4.4) and CPU evaluator (§4.5): turns raw style
//! data plus a typed AST into concrete, typed values.

mod accessor_processor;
mod color;
mod context;
mod evaluator;

pub use accessor_processor::{flatten, process_accessor_values, ProcessedValue};
pub use context::{EvaluationContext, FeatureId};
pub use evaluator::Evaluator;
