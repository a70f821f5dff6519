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

//! # Typerow
//!
//! Streaming reader for delimited text with statically typed rows.
//!
//! Typerow turns a byte stream of separator-delimited records into an
//! iterator of Rust tuples. The row schema is a type, not a runtime
//! description: `(i64, f64, String)` *is* the schema, every field is
//! converted during the read, and a record that does not match it is an
//! error, not a partially filled row.
//!
//! ## Features
//!
//! - **Statically typed rows**: tuple schemas up to 12 fields, checked at
//!   compile time
//! - **Streaming**: one record in memory at a time, lazy pull-based reading
//! - **Configurable separators**: any ASCII byte for fields and records
//! - **Precise diagnostics**: errors carry the record number and the
//!   offending field
//! - **Fail fast**: the first I/O, encoding, or decode failure ends the
//!   iteration
//!
//! ## Quick Start
//!
//! ```rust
//! use typerow::RowReader;
//! use std::io::Cursor;
//!
//! let source = Cursor::new("1,2,hello\n3,4,world\n");
//! let reader: RowReader<_, (i64, i64, String)> = RowReader::new(source)?;
//!
//! for row in reader {
//!     let (a, b, s) = row?;
//!     println!("{} + {} = {}", a, b, s);
//! }
//! # Ok::<(), typerow::ReadError>(())
//! ```
//!
//! ## Decoding Without a Stream
//!
//! Single records decode through the [`Row`] trait directly:
//!
//! ```rust
//! use typerow::Row;
//!
//! let row = <(u32, String)>::from_record("17,seventeen", b',')?;
//! assert_eq!(row, (17, "seventeen".to_string()));
//! # Ok::<(), typerow::DecodeError>(())
//! ```

mod error;
mod field;
mod parser;
mod reader;
mod record;
mod render;
mod row;

pub use error::{DecodeError, ReadError, ReadResult};
pub use field::FromField;
pub use parser::{RowReader, RowReaderConfig};
pub use reader::RecordReader;
pub use record::split_record;
pub use render::RenderRow;
pub use row::Row;
