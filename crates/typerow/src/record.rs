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

//! Record splitting.
//!
//! A record is one separator-bounded unit of raw input text; splitting it on
//! the field separator is a pure operation independent of the stream and of
//! any row type, so it lives here as a free function returning borrowed
//! subslices.

use memchr::memchr_iter;

/// Split a record into fields on `separator`.
///
/// The final field extends to the end of the record, so no trailing
/// separator is expected; an empty record is one empty field. No quoting or
/// escaping is recognized, and fields are returned verbatim (no trimming).
///
/// # Panics
///
/// Panics if `separator` is not an ASCII byte. A non-ASCII byte can land
/// inside a multi-byte character, where no field boundary exists.
///
/// # Examples
///
/// ```rust
/// use typerow::split_record;
///
/// assert_eq!(split_record("1,2,hello", b','), vec!["1", "2", "hello"]);
/// assert_eq!(split_record("a;;b", b';'), vec!["a", "", "b"]);
/// assert_eq!(split_record("", b','), vec![""]);
/// ```
pub fn split_record(record: &str, separator: u8) -> Vec<&str> {
    assert!(separator.is_ascii(), "separator must be an ASCII byte");
    let mut fields = Vec::new();
    let mut start = 0;
    for pos in memchr_iter(separator, record.as_bytes()) {
        fields.push(&record[start..pos]);
        start = pos + 1;
    }
    fields.push(&record[start..]);
    fields
}
