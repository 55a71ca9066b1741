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

//! One module per operator family (§4.3), each exposing plain functions that
//! the dispatch table in `lib.rs` wires up to keywords.

pub mod accessors;
pub mod arithmetic;
pub mod comparison;
pub mod constructors;
pub mod control_flow;
pub mod interpolate;
pub mod logical;
pub mod set;
