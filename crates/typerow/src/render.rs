// Dweve Typerow - Statically typed rows for delimited text
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Row rendering.
//!
//! A display convenience independent of the parsing contract: rows render as
//! `(f0,f1,...,fn)` with fields joined by commas and no trailing separator,
//! regardless of the separator the source used. Numeric fields render in
//! their canonical form, so a decoded `+05` comes back as `5`; round-trips
//! are value-level, not byte-identical.

use std::fmt::Display;

/// Textual rendering of a row as `(f0,f1,...,fn)`.
///
/// Implemented for the same tuple arities as [`Row`](crate::Row), over
/// `Display` elements.
///
/// # Examples
///
/// ```rust
/// use typerow::RenderRow;
///
/// assert_eq!((1, 2, "hello").render(), "(1,2,hello)");
/// assert_eq!((-3.5,).render(), "(-3.5)");
/// ```
pub trait RenderRow {
    /// Render the row to its parenthesized comma-joined form.
    fn render(&self) -> String;
}

macro_rules! impl_render_for_tuple {
    ($($ty:ident => $idx:tt),+) => {
        impl<$($ty: Display),+> RenderRow for ($($ty,)+) {
            fn render(&self) -> String {
                let fields = [$(self.$idx.to_string()),+];
                format!("({})", fields.join(","))
            }
        }
    };
}

impl_render_for_tuple!(A => 0);
impl_render_for_tuple!(A => 0, B => 1);
impl_render_for_tuple!(A => 0, B => 1, C => 2);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9, K => 10);
impl_render_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9, K => 10, L => 11);
