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

//! Error types for typed row reading.
//!
//! Two layers of errors mirror the two layers of the crate. [`DecodeError`]
//! is produced by the pure decoding path ([`Row`](crate::Row) and
//! [`FromField`](crate::FromField)) and carries no stream position.
//! [`ReadError`] is produced by the streaming path ([`RowReader`](crate::RowReader)
//! and [`RecordReader`](crate::RecordReader)) and annotates every failure with
//! where in the stream it happened.
//!
//! # Error Categories
//!
//! - **Empty source**: no record where the first row was expected
//! - **Format errors**: bytes that are readable but not parseable text
//! - **I/O errors**: faults reported by the underlying stream
//! - **Width mismatches**: a record's field count differs from the row arity
//! - **Conversion errors**: a field's text does not parse as its column type
//!
//! Every error is fatal to the iteration that raised it; nothing is retried
//! or recovered internally.
//!
//! # Examples
//!
//! ```rust
//! use typerow::{ReadError, RowReader};
//! use std::io::Cursor;
//!
//! // Three columns declared, but the second record only has two.
//! let source = Cursor::new("1,2,3\n4,5\n");
//! let reader: RowReader<_, (i64, i64, i64)> = RowReader::new(source).unwrap();
//!
//! for row in reader {
//!     if let Err(e) = row {
//!         eprintln!("Error: {}", e);
//!         if let Some(row) = e.row() {
//!             eprintln!("  at row {}", row);
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors from decoding a single record, independent of any stream.
///
/// Produced by [`Row::from_record`](crate::Row::from_record) and
/// [`Row::from_fields`](crate::Row::from_fields). The streaming layer lifts
/// these into [`ReadError`] via [`ReadError::from_decode`], attaching the
/// record number.
///
/// # Examples
///
/// ```rust
/// use typerow::{DecodeError, Row};
///
/// let err = <(i64, i64)>::from_record("1,2,3", b',').unwrap_err();
/// assert_eq!(err, DecodeError::width_mismatch(2, 3));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Field count differs from the declared row arity.
    #[error("expected {expected} fields, got {got}")]
    WidthMismatch { expected: usize, got: usize },

    /// A field's text does not parse as its declared type.
    #[error("field {index}: cannot parse '{value}' as {expected}")]
    Conversion {
        index: usize,
        expected: &'static str,
        value: String,
    },
}

impl DecodeError {
    /// Create a width mismatch error.
    #[inline]
    pub fn width_mismatch(expected: usize, got: usize) -> Self {
        Self::WidthMismatch { expected, got }
    }

    /// Create a conversion error for the zero-based field `index`.
    #[inline]
    pub fn conversion(index: usize, expected: &'static str, value: impl Into<String>) -> Self {
        Self::Conversion {
            index,
            expected,
            value: value.into(),
        }
    }
}

/// Errors that can occur while reading typed rows from a stream.
///
/// All variants except [`EmptySource`](Self::EmptySource) include where in
/// the stream the failure happened; use the [`row()`](Self::row) method to
/// extract the diagnostic row uniformly. Positions on
/// [`Io`](Self::Io)/[`Format`](Self::Format) are derived from the byte
/// offset at failure time and are best-effort diagnostics, not part of the
/// parsing contract.
///
/// # Examples
///
/// ## Creating Errors
///
/// ```rust
/// use typerow::ReadError;
///
/// let err = ReadError::format(42, 7, "invalid UTF-8");
/// assert_eq!(err.row(), Some(42));
///
/// let err = ReadError::empty_source(1, 3);
/// assert_eq!(err.row(), None);
/// ```
///
/// ## Error Display
///
/// ```rust
/// use typerow::ReadError;
///
/// let err = ReadError::format(5, 1, "stray control byte");
/// let msg = format!("{}", err);
/// assert!(msg.contains("row 5"));
/// assert!(msg.contains("stray control byte"));
/// ```
#[derive(Error, Debug)]
pub enum ReadError {
    /// No record available where the first row was expected, either because
    /// the stream was empty after skipping or because the skip count
    /// exceeded the available records.
    #[error("No record available for the first row (skipped {skipped} of {requested} leading records)")]
    EmptySource { skipped: usize, requested: usize },

    /// Stream readable but not cleanly parseable at the current position.
    #[error("Malformed input near row {row}, column {column}: {message}")]
    Format {
        row: usize,
        column: usize,
        message: String,
    },

    /// I/O fault reported by the underlying stream.
    #[error("I/O error near row {row}, column {column}: {source}")]
    Io {
        row: usize,
        column: usize,
        #[source]
        source: std::io::Error,
    },

    /// A record's field count differs from the declared row arity.
    #[error("Width mismatch at record {record}: expected {expected} fields, got {got}")]
    WidthMismatch {
        record: usize,
        expected: usize,
        got: usize,
    },

    /// A field's text does not parse as its declared column type.
    #[error("Conversion error at record {record}, field {index}: cannot parse '{value}' as {expected}")]
    Conversion {
        record: usize,
        index: usize,
        expected: &'static str,
        value: String,
    },
}

impl ReadError {
    /// Create an empty source error.
    #[inline]
    pub fn empty_source(skipped: usize, requested: usize) -> Self {
        Self::EmptySource { skipped, requested }
    }

    /// Create a format error at a 1-based (row, column) position.
    #[inline]
    pub fn format(row: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Format {
            row,
            column,
            message: message.into(),
        }
    }

    /// Create an I/O error at a 1-based (row, column) position.
    #[inline]
    pub fn io(row: usize, column: usize, source: std::io::Error) -> Self {
        Self::Io {
            row,
            column,
            source,
        }
    }

    /// Lift a [`DecodeError`] into a read error at the 1-based `record`.
    #[inline]
    pub fn from_decode(record: usize, err: DecodeError) -> Self {
        match err {
            DecodeError::WidthMismatch { expected, got } => Self::WidthMismatch {
                record,
                expected,
                got,
            },
            DecodeError::Conversion {
                index,
                expected,
                value,
            } => Self::Conversion {
                record,
                index,
                expected,
                value,
            },
        }
    }

    /// Get the diagnostic row number if one is attached.
    #[inline]
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::Format { row, .. } | Self::Io { row, .. } => Some(*row),
            Self::WidthMismatch { record, .. } | Self::Conversion { record, .. } => Some(*record),
            Self::EmptySource { .. } => None,
        }
    }
}

/// Result type for row reading operations.
pub type ReadResult<T> = Result<T, ReadError>;
