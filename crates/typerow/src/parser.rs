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

//! Streaming typed row reader.
//!
//! This module provides the core reader for delimited text. It pulls one
//! record at a time from the underlying stream, decodes it into the caller's
//! tuple type, and yields rows lazily, making it suitable for sources that
//! are too large to fit in memory.
//!
//! # Design Philosophy
//!
//! - **Memory Efficiency**: Only the current row and one record buffer are
//!   kept in memory
//! - **Static Typing**: The schema is a Rust tuple type; every yielded row
//!   already has its final shape
//! - **Iterator-Based**: Standard Rust iterator interface for easy
//!   composition
//! - **Fail Fast**: Any I/O, format, or decode failure ends the iteration;
//!   there is no skip-and-continue mode
//!
//! # Basic Usage
//!
//! ```rust
//! use typerow::RowReader;
//! use std::io::Cursor;
//!
//! let source = Cursor::new("1,2,hello\n3,4,world\n");
//! let reader: RowReader<_, (i64, i64, String)> = RowReader::new(source).unwrap();
//!
//! for row in reader {
//!     let (a, b, s) = row.unwrap();
//!     println!("{} {} {}", a, b, s);
//! }
//! ```

use crate::error::{ReadError, ReadResult};
use crate::reader::RecordReader;
use crate::row::Row;
use std::io::{Read, Seek};

/// Configuration options for the row reader.
///
/// Covers the skip count and both separators, with the conventional CSV
/// defaults. Separators must be single, distinct ASCII bytes.
///
/// # Examples
///
/// ## Default Configuration
///
/// ```rust
/// use typerow::RowReaderConfig;
///
/// let config = RowReaderConfig::default();
/// assert_eq!(config.skip, 0);
/// assert_eq!(config.field_separator, b',');
/// assert_eq!(config.record_separator, b'\n');
/// assert_eq!(config.buffer_size, 64 * 1024);
/// ```
///
/// ## Skipping a Header Record
///
/// ```rust
/// use typerow::RowReaderConfig;
///
/// let config = RowReaderConfig {
///     skip: 1,
///     ..Default::default()
/// };
/// ```
///
/// ## Semicolon-Separated Fields
///
/// ```rust
/// use typerow::RowReaderConfig;
///
/// let config = RowReaderConfig {
///     field_separator: b';',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RowReaderConfig {
    /// Number of leading records to discard before the first row.
    ///
    /// Consumed once at construction. Skipped records are discarded as raw
    /// bytes, never decoded, so a header need not be valid UTF-8. Running
    /// out of records while skipping is tolerated silently; the subsequent
    /// first-record read then reports the source as empty.
    ///
    /// Default: 0
    pub skip: usize,

    /// Byte that splits a record into fields.
    ///
    /// Default: `b','`
    pub field_separator: u8,

    /// Byte that splits the stream into records.
    ///
    /// Default: `b'\n'`
    pub record_separator: u8,

    /// Buffer size for reading input.
    ///
    /// Larger buffers reduce the number of reads against the underlying
    /// stream at the cost of memory.
    ///
    /// Default: 64KB
    pub buffer_size: usize,
}

impl Default for RowReaderConfig {
    fn default() -> Self {
        Self {
            skip: 0,
            field_separator: b',',
            record_separator: b'\n',
            buffer_size: 64 * 1024,
        }
    }
}

/// Streaming reader yielding statically typed rows.
///
/// `RowReader` owns the read position in the underlying stream and decodes
/// one record at a time into the tuple type `T`. Construction performs the
/// first positioning: it measures the stream (for the end-of-iteration
/// sentinel), discards the configured number of leading records, and decodes
/// the first row, so an empty or immediately malformed source fails up
/// front instead of yielding an empty iteration.
///
/// # Cursor Contract
///
/// The classic external-iterator shape is exposed as inherent methods:
/// [`current()`](Self::current) is the row at the cursor,
/// [`advance()`](Self::advance) moves to the next one, and
/// [`at_end()`](Self::at_end) tests the position against the end sentinel
/// (stream length + 1), which is the sole termination test. On top of that,
/// `RowReader` implements `Iterator<Item = ReadResult<T>>` for `for`-loop
/// driving; the two styles share one cursor and may be mixed.
///
/// Errors are absorbing: after any failure no further rows are produced,
/// `current()` is `None`, and `at_end()` stays false (an erroring source is
/// not a cleanly exhausted one).
///
/// # Examples
///
/// ## Collecting Rows
///
/// ```rust
/// use typerow::{ReadResult, RowReader};
/// use std::io::Cursor;
///
/// let source = Cursor::new("1,2,hello\n3,4,world\n");
/// let reader: RowReader<_, (i64, i64, String)> = RowReader::new(source).unwrap();
///
/// let rows: ReadResult<Vec<_>> = reader.collect();
/// let rows = rows.unwrap();
/// assert_eq!(rows[0], (1, 2, "hello".to_string()));
/// assert_eq!(rows[1], (3, 4, "world".to_string()));
/// ```
///
/// ## From a File
///
/// ```rust,no_run
/// use typerow::{RowReader, RowReaderConfig};
/// use std::fs::File;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("measurements.csv")?;
/// let config = RowReaderConfig {
///     skip: 1, // header record
///     ..Default::default()
/// };
/// let reader: RowReader<File, (String, f64, f64)> = RowReader::with_config(file, config)?;
///
/// for row in reader {
///     let (station, min, max) = row?;
///     println!("{}: {}..{}", station, min, max);
/// }
/// # Ok(())
/// # }
/// ```
///
/// ## Manual Cursor Driving
///
/// ```rust
/// use typerow::RowReader;
/// use std::io::Cursor;
///
/// let source = Cursor::new("1,a\n2,b\n");
/// let mut reader: RowReader<_, (i32, String)> = RowReader::new(source).unwrap();
///
/// while let Some(row) = reader.current() {
///     println!("{} -> {}", row.0, row.1);
///     if !reader.advance().unwrap() {
///         break;
///     }
/// }
/// assert!(reader.at_end());
/// ```
///
/// # Error Handling
///
/// Failures carry the record number where they happened:
///
/// ```rust
/// use typerow::RowReader;
/// use std::io::Cursor;
///
/// let source = Cursor::new("1,2\n3,oops\n");
/// let reader: RowReader<_, (i64, i64)> = RowReader::new(source).unwrap();
///
/// for row in reader {
///     if let Err(e) = row {
///         assert_eq!(e.row(), Some(2));
///     }
/// }
/// ```
#[derive(Debug)]
pub struct RowReader<R: Read + Seek, T: Row> {
    reader: RecordReader<R>,
    config: RowReaderConfig,
    /// End sentinel: stream length + 1, fixed at construction.
    end: u64,
    /// Byte offset after the record backing the current row.
    position: u64,
    current: Option<T>,
    /// Error raised while prefetching, yielded by the next `next()` call.
    pending: Option<ReadError>,
    failed: bool,
}

impl<R: Read + Seek, T: Row> RowReader<R, T> {
    /// Create a reader with default configuration and position it on the
    /// first row.
    ///
    /// # Errors
    ///
    /// [`ReadError::EmptySource`] if the stream holds no record;
    /// any [`ReadError`] the first record's read or decode raises.
    pub fn new(stream: R) -> ReadResult<Self> {
        Self::with_config(stream, RowReaderConfig::default())
    }

    /// Create a reader with the given configuration and position it on the
    /// first post-skip row.
    ///
    /// # Errors
    ///
    /// [`ReadError::EmptySource`] if no record remains after skipping
    /// (including a skip count exceeding the available records); any
    /// [`ReadError`] the skip reads or the first record's decode raise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typerow::{RowReader, RowReaderConfig};
    /// use std::io::Cursor;
    ///
    /// let source = Cursor::new("id;count\n7;9\n");
    /// let config = RowReaderConfig {
    ///     skip: 1,
    ///     field_separator: b';',
    ///     ..Default::default()
    /// };
    /// let reader: RowReader<_, (u32, u32)> = RowReader::with_config(source, config).unwrap();
    /// assert_eq!(reader.current(), Some(&(7, 9)));
    /// ```
    pub fn with_config(stream: R, config: RowReaderConfig) -> ReadResult<Self> {
        let mut reader =
            RecordReader::with_capacity(stream, config.record_separator, config.buffer_size)?;
        let end = reader.stream_len() + 1;

        // Discard leading records as raw bytes; running out early stops the
        // skip silently.
        let mut skipped = 0;
        while skipped < config.skip {
            if !reader.skip_record()? {
                break;
            }
            skipped += 1;
        }

        let first = match Self::read_one(&mut reader, config.field_separator)? {
            Some(row) => row,
            None => return Err(ReadError::empty_source(skipped, config.skip)),
        };
        let position = reader.offset();

        Ok(Self {
            reader,
            config,
            end,
            position,
            current: Some(first),
            pending: None,
            failed: false,
        })
    }

    /// The row at the cursor, or `None` after exhaustion or an error.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Whether the cursor has reached the end sentinel.
    ///
    /// True exactly when the position equals stream length + 1, which only
    /// happens on clean exhaustion; an iteration ended by an error leaves
    /// this false.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.position == self.end
    }

    /// Current cursor position: the byte offset after the record backing
    /// the current row, or the end sentinel once exhausted.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Records consumed from the stream so far, skipped ones included.
    #[inline]
    pub fn records(&self) -> usize {
        self.reader.records()
    }

    /// Move the cursor to the next row.
    ///
    /// Returns `Ok(true)` when a new row is current, `Ok(false)` on clean
    /// exhaustion (the position becomes the end sentinel) and on any call
    /// after exhaustion or a previous failure.
    ///
    /// # Errors
    ///
    /// Any [`ReadError`] from reading or decoding the next record. An error
    /// clears the current row and no further rows will be produced.
    pub fn advance(&mut self) -> ReadResult<bool> {
        if let Some(e) = self.pending.take() {
            return Err(e);
        }
        if self.failed || self.at_end() {
            return Ok(false);
        }

        match Self::read_one(&mut self.reader, self.config.field_separator) {
            Ok(Some(row)) => {
                self.current = Some(row);
                self.position = self.reader.offset();
                Ok(true)
            }
            Ok(None) => {
                self.current = None;
                self.position = self.end;
                Ok(false)
            }
            Err(e) => {
                self.current = None;
                self.failed = true;
                Err(e)
            }
        }
    }

    /// Read and decode one record; `Ok(None)` is clean end of stream.
    fn read_one(reader: &mut RecordReader<R>, separator: u8) -> ReadResult<Option<T>> {
        let record_no = reader.records() + 1;
        match reader.next_record()? {
            Some(record) => match T::from_record(record, separator) {
                Ok(row) => Ok(Some(row)),
                Err(e) => Err(ReadError::from_decode(record_no, e)),
            },
            None => Ok(None),
        }
    }
}

impl<R: Read + Seek, T: Row> Iterator for RowReader<R, T> {
    type Item = ReadResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.pending.take() {
            return Some(Err(e));
        }
        let row = self.current.take()?;

        // Prefetch the next row; an error is yielded on the next call so
        // every row before the failing record is still produced.
        if let Err(e) = self.advance() {
            self.pending = Some(e);
        }
        Some(Ok(row))
    }
}
