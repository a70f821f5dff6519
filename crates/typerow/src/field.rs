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

//! Per-field type conversion.
//!
//! [`FromField`] maps the raw text of one field to one typed column value.
//! Implementations exist for every primitive integer, `f32`/`f64`, `bool`,
//! `char`, and `String`. Numeric, boolean, and character conversion follow
//! the standard library's `FromStr` semantics; `String` takes the field
//! content verbatim with no trimming or unescaping.
//!
//! # Examples
//!
//! ```rust
//! use typerow::FromField;
//!
//! assert_eq!(i64::from_field("-42"), Some(-42));
//! assert_eq!(i64::from_field("4.2"), None);
//! assert_eq!(String::from_field(" raw "), Some(" raw ".to_string()));
//! ```

/// Conversion from a raw field to a typed column value.
///
/// A failed conversion returns `None`; the decoding layer turns it into a
/// [`DecodeError::Conversion`](crate::DecodeError::Conversion) naming the
/// field index, [`TYPE_NAME`](Self::TYPE_NAME), and the raw text.
pub trait FromField: Sized {
    /// Type name used in conversion diagnostics.
    const TYPE_NAME: &'static str;

    /// Parse a raw field into this type, or `None` if the text is not a
    /// valid rendition of it.
    fn from_field(raw: &str) -> Option<Self>;
}

macro_rules! from_field_via_parse {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl FromField for $ty {
                const TYPE_NAME: &'static str = $name;

                #[inline]
                fn from_field(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )+
    };
}

from_field_via_parse!(
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    bool => "bool",
    char => "char",
);

/// Verbatim field content; never fails.
impl FromField for String {
    const TYPE_NAME: &'static str = "string";

    #[inline]
    fn from_field(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}
