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

//! Typed row decoding.
//!
//! A row type is a fixed-arity tuple whose element *i* is converted from
//! field *i* of a record via [`FromField`]. Implementations are generated
//! for tuple arities 1 through 12, which makes the schema a plain Rust type:
//! declare `(i64, f64, String)` and every decoded row has exactly that
//! shape, with no runtime schema lookup.
//!
//! # Examples
//!
//! ```rust
//! use typerow::Row;
//!
//! let row: (i64, i64, String) = Row::from_record("1,2,hello", b',').unwrap();
//! assert_eq!(row, (1, 2, "hello".to_string()));
//! ```

use crate::error::DecodeError;
use crate::field::FromField;
use crate::record::split_record;

/// A fixed-shape typed row decodable from one record.
///
/// Decoding is positional: the record must split into exactly
/// [`WIDTH`](Self::WIDTH) fields, and field *i* must parse as element type
/// *i*. Extra fields are an error, not ignored.
pub trait Row: Sized {
    /// Number of fields a record must contain.
    const WIDTH: usize;

    /// Decode an ordered field list into a typed row.
    ///
    /// # Errors
    ///
    /// [`DecodeError::WidthMismatch`] if `fields.len() != Self::WIDTH`;
    /// [`DecodeError::Conversion`] for the first field whose text does not
    /// parse as its declared type.
    fn from_fields(fields: &[&str]) -> Result<Self, DecodeError>;

    /// Split a raw record on `separator` and decode it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`from_fields`](Self::from_fields).
    fn from_record(record: &str, separator: u8) -> Result<Self, DecodeError> {
        Self::from_fields(&split_record(record, separator))
    }
}

macro_rules! impl_row_for_tuple {
    ($($ty:ident => $idx:tt),+) => {
        impl<$($ty: FromField),+> Row for ($($ty,)+) {
            const WIDTH: usize = [$($idx),+].len();

            fn from_fields(fields: &[&str]) -> Result<Self, DecodeError> {
                if fields.len() != Self::WIDTH {
                    return Err(DecodeError::width_mismatch(Self::WIDTH, fields.len()));
                }
                Ok(($(
                    <$ty as FromField>::from_field(fields[$idx]).ok_or_else(|| {
                        DecodeError::conversion($idx, <$ty as FromField>::TYPE_NAME, fields[$idx])
                    })?,
                )+))
            }
        }
    };
}

impl_row_for_tuple!(A => 0);
impl_row_for_tuple!(A => 0, B => 1);
impl_row_for_tuple!(A => 0, B => 1, C => 2);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9, K => 10);
impl_row_for_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9, K => 10, L => 11);
