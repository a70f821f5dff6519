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

//! Record reader for the streaming row parser.
//!
//! Provides buffered record-by-record reading on an arbitrary record
//! separator byte, with byte offset and record number tracking for error
//! reporting. The stream length is measured once at construction, which is
//! what lets the typed layer compute its end-of-iteration sentinel.
//!
//! This module is primarily an internal implementation detail of
//! [`RowReader`](crate::RowReader), but is exposed for advanced use cases.

use crate::error::{ReadError, ReadResult};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

/// Default read buffer capacity in bytes.
const DEFAULT_CAPACITY: usize = 8 * 1024;

/// Buffered record reader with offset and record number tracking.
///
/// Reads one separator-bounded record at a time from any `Read + Seek`
/// stream. The seek bound exists solely so construction can measure the
/// total stream length; after that the stream is consumed strictly forward.
///
/// Three outcomes of a read are distinguished: a record (possibly the last
/// one, unterminated at EOF), a clean end of stream (`Ok(None)`), and
/// failure, meaning an I/O fault or bytes that are not valid UTF-8, each
/// reported with a best-effort (row, column) position.
///
/// # Examples
///
/// ```rust
/// use typerow::RecordReader;
/// use std::io::Cursor;
///
/// let mut reader = RecordReader::new(Cursor::new("a,b\nc,d"), b'\n').unwrap();
/// assert_eq!(reader.stream_len(), 7);
/// assert_eq!(reader.next_record().unwrap(), Some("a,b"));
/// assert_eq!(reader.next_record().unwrap(), Some("c,d"));
/// assert_eq!(reader.next_record().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct RecordReader<R> {
    reader: BufReader<R>,
    separator: u8,
    stream_len: u64,
    offset: u64,
    records: usize,
    buffer: Vec<u8>,
}

impl<R: Read + Seek> RecordReader<R> {
    /// Create a new record reader, measuring the stream length.
    ///
    /// Seeks to the end of `stream` to measure it, then back to the start.
    ///
    /// # Errors
    ///
    /// [`ReadError::Io`] if either seek fails.
    pub fn new(stream: R, separator: u8) -> ReadResult<Self> {
        Self::with_capacity(stream, separator, DEFAULT_CAPACITY)
    }

    /// Create with a specific buffer capacity.
    ///
    /// # Errors
    ///
    /// [`ReadError::Io`] if either seek fails.
    pub fn with_capacity(mut stream: R, separator: u8, capacity: usize) -> ReadResult<Self> {
        let stream_len = stream
            .seek(SeekFrom::End(0))
            .and_then(|len| stream.seek(SeekFrom::Start(0)).map(|_| len))
            .map_err(|e| ReadError::io(1, 1, e))?;

        Ok(Self {
            reader: BufReader::with_capacity(capacity, stream),
            separator,
            stream_len,
            offset: 0,
            records: 0,
            buffer: Vec::new(),
        })
    }

    /// Total stream length in bytes, measured at construction.
    #[inline]
    pub fn stream_len(&self) -> u64 {
        self.stream_len
    }

    /// Bytes consumed from the start of the stream, separators included.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Number of complete records read so far.
    #[inline]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Read the next record, without its trailing separator.
    ///
    /// A final record unterminated at EOF is still a complete record.
    /// Records are returned verbatim; carriage returns are field content,
    /// not separators.
    ///
    /// # Errors
    ///
    /// [`ReadError::Io`] on an underlying I/O fault, [`ReadError::Format`]
    /// when the record bytes are not valid UTF-8.
    pub fn next_record(&mut self) -> ReadResult<Option<&str>> {
        self.buffer.clear();

        match self.reader.read_until(self.separator, &mut self.buffer) {
            Ok(0) => Ok(None), // EOF
            Ok(n) => {
                self.offset += n as u64;
                self.records += 1;

                // Strip the trailing separator, if any
                let mut end = self.buffer.len();
                if self.buffer.last() == Some(&self.separator) {
                    end -= 1;
                }

                match std::str::from_utf8(&self.buffer[..end]) {
                    Ok(record) => Ok(Some(record)),
                    Err(e) => Err(ReadError::format(
                        self.records,
                        e.valid_up_to() + 1,
                        format!("invalid UTF-8 in record: {}", e),
                    )),
                }
            }
            Err(e) => Err(ReadError::io(self.records + 1, self.buffer.len() + 1, e)),
        }
    }

    /// Discard the next record without interpreting its bytes.
    ///
    /// Advances the offset and record count like
    /// [`next_record`](Self::next_record), but skips UTF-8 validation since
    /// the content is thrown away; a discarded record may hold arbitrary
    /// bytes. Returns `false` on clean end of stream.
    ///
    /// # Errors
    ///
    /// [`ReadError::Io`] on an underlying I/O fault.
    pub fn skip_record(&mut self) -> ReadResult<bool> {
        self.buffer.clear();

        match self.reader.read_until(self.separator, &mut self.buffer) {
            Ok(0) => Ok(false),
            Ok(n) => {
                self.offset += n as u64;
                self.records += 1;
                Ok(true)
            }
            Err(e) => Err(ReadError::io(self.records + 1, self.buffer.len() + 1, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Reader that fails with an I/O error once `fail_after` bytes were read.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
        fail_after: u64,
    }

    impl FailingReader {
        fn new(data: &str, fail_after: u64) -> Self {
            Self {
                data: Cursor::new(data.as_bytes().to_vec()),
                fail_after,
            }
        }
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.position() >= self.fail_after {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "simulated fault"));
            }
            let limit = (self.fail_after - self.data.position()).min(buf.len() as u64) as usize;
            self.data.read(&mut buf[..limit])
        }
    }

    impl Seek for FailingReader {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.data.seek(pos)
        }
    }

    // ==================== Basic reading tests ====================

    #[test]
    fn test_read_records() {
        let mut reader = RecordReader::new(Cursor::new("r1\nr2\nr3"), b'\n').unwrap();

        assert_eq!(reader.next_record().unwrap(), Some("r1"));
        assert_eq!(reader.next_record().unwrap(), Some("r2"));
        assert_eq!(reader.next_record().unwrap(), Some("r3"));
        assert_eq!(reader.next_record().unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = RecordReader::new(Cursor::new(""), b'\n').unwrap();
        assert_eq!(reader.next_record().unwrap(), None);
        assert_eq!(reader.stream_len(), 0);
    }

    #[test]
    fn test_single_empty_record() {
        let mut reader = RecordReader::new(Cursor::new("\n"), b'\n').unwrap();
        assert_eq!(reader.next_record().unwrap(), Some(""));
        assert_eq!(reader.next_record().unwrap(), None);
    }

    #[test]
    fn test_eof_is_repeatable() {
        let mut reader = RecordReader::new(Cursor::new("only"), b'\n').unwrap();
        assert_eq!(reader.next_record().unwrap(), Some("only"));
        assert_eq!(reader.next_record().unwrap(), None);
        assert_eq!(reader.next_record().unwrap(), None);
    }

    // ==================== Separator handling tests ====================

    #[test]
    fn test_trailing_separator() {
        let mut reader = RecordReader::new(Cursor::new("r1\n"), b'\n').unwrap();
        assert_eq!(reader.next_record().unwrap(), Some("r1"));
        assert_eq!(reader.next_record().unwrap(), None);
    }

    #[test]
    fn test_no_trailing_separator() {
        let mut reader = RecordReader::new(Cursor::new("r1\nr2"), b'\n').unwrap();
        assert_eq!(reader.next_record().unwrap(), Some("r1"));
        assert_eq!(reader.next_record().unwrap(), Some("r2"));
        assert_eq!(reader.next_record().unwrap(), None);
    }

    #[test]
    fn test_custom_record_separator() {
        let mut reader = RecordReader::new(Cursor::new("a,b;c,d;"), b';').unwrap();
        assert_eq!(reader.next_record().unwrap(), Some("a,b"));
        assert_eq!(reader.next_record().unwrap(), Some("c,d"));
        assert_eq!(reader.next_record().unwrap(), None);
    }

    #[test]
    fn test_carriage_return_is_content() {
        let mut reader = RecordReader::new(Cursor::new("a\r\nb"), b'\n').unwrap();
        assert_eq!(reader.next_record().unwrap(), Some("a\r"));
        assert_eq!(reader.next_record().unwrap(), Some("b"));
    }

    #[test]
    fn test_adjacent_separators() {
        let mut reader = RecordReader::new(Cursor::new("a\n\nb"), b'\n').unwrap();
        assert_eq!(reader.next_record().unwrap(), Some("a"));
        assert_eq!(reader.next_record().unwrap(), Some(""));
        assert_eq!(reader.next_record().unwrap(), Some("b"));
    }

    // ==================== Offset and count tests ====================

    #[test]
    fn test_stream_len() {
        let reader = RecordReader::new(Cursor::new("a,b\nc,d\n"), b'\n').unwrap();
        assert_eq!(reader.stream_len(), 8);
    }

    #[test]
    fn test_offset_tracking() {
        let mut reader = RecordReader::new(Cursor::new("ab\ncde\nf"), b'\n').unwrap();
        assert_eq!(reader.offset(), 0);

        reader.next_record().unwrap();
        assert_eq!(reader.offset(), 3);

        reader.next_record().unwrap();
        assert_eq!(reader.offset(), 7);

        reader.next_record().unwrap();
        assert_eq!(reader.offset(), 8);
    }

    #[test]
    fn test_offset_at_eof_equals_stream_len() {
        let mut reader = RecordReader::new(Cursor::new("one\ntwo"), b'\n').unwrap();
        while reader.next_record().unwrap().is_some() {}
        assert_eq!(reader.offset(), reader.stream_len());
    }

    #[test]
    fn test_record_count() {
        let mut reader = RecordReader::new(Cursor::new("a\nb\nc"), b'\n').unwrap();
        assert_eq!(reader.records(), 0);

        reader.next_record().unwrap();
        assert_eq!(reader.records(), 1);

        reader.next_record().unwrap();
        reader.next_record().unwrap();
        assert_eq!(reader.records(), 3);

        reader.next_record().unwrap(); // EOF
        assert_eq!(reader.records(), 3); // Count unchanged
    }

    // ==================== Skip tests ====================

    #[test]
    fn test_skip_record_advances_offset_and_count() {
        let mut reader = RecordReader::new(Cursor::new("ab\ncde\nf"), b'\n').unwrap();

        assert!(reader.skip_record().unwrap());
        assert_eq!(reader.offset(), 3);
        assert_eq!(reader.records(), 1);
        assert_eq!(reader.next_record().unwrap(), Some("cde"));
    }

    #[test]
    fn test_skip_record_at_eof() {
        let mut reader = RecordReader::new(Cursor::new("only"), b'\n').unwrap();

        assert!(reader.skip_record().unwrap());
        assert!(!reader.skip_record().unwrap());
        assert!(!reader.skip_record().unwrap());
    }

    #[test]
    fn test_skip_record_accepts_invalid_utf8() {
        // Discarded bytes are never validated as text.
        let mut reader =
            RecordReader::with_capacity(Cursor::new(vec![0xFF, 0xFE, b'\n', b'o', b'k']), b'\n', 64)
                .unwrap();

        assert!(reader.skip_record().unwrap());
        assert_eq!(reader.next_record().unwrap(), Some("ok"));
        assert_eq!(reader.records(), 2);
    }

    // ==================== Error tests ====================

    #[test]
    fn test_invalid_utf8_is_format_error() {
        let mut reader =
            RecordReader::with_capacity(Cursor::new(vec![b'a', 0xFF, b'b', b'\n']), b'\n', 64)
                .unwrap();

        let err = reader.next_record().unwrap_err();
        assert!(matches!(err, ReadError::Format { .. }));
        assert_eq!(err.row(), Some(1));
    }

    #[test]
    fn test_invalid_utf8_on_later_record() {
        let mut reader =
            RecordReader::with_capacity(Cursor::new(vec![b'o', b'k', b'\n', 0xC0, b'\n']), b'\n', 64)
                .unwrap();

        assert_eq!(reader.next_record().unwrap(), Some("ok"));
        let err = reader.next_record().unwrap_err();
        assert_eq!(err.row(), Some(2));
    }

    #[test]
    fn test_io_fault_is_io_error() {
        let mut reader = RecordReader::new(FailingReader::new("r1\nr2\nr3\n", 3), b'\n').unwrap();

        assert_eq!(reader.next_record().unwrap(), Some("r1"));
        let err = reader.next_record().unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
        assert_eq!(err.row(), Some(2));
    }

    // ==================== Capacity tests ====================

    #[test]
    fn test_with_small_capacity() {
        let mut reader = RecordReader::with_capacity(Cursor::new("r1\nr2"), b'\n', 1).unwrap();
        assert_eq!(reader.next_record().unwrap(), Some("r1"));
        assert_eq!(reader.next_record().unwrap(), Some("r2"));
    }

    #[test]
    fn test_record_longer_than_buffer() {
        let long = "x".repeat(10_000);
        let input = format!("{}\nshort", long);
        let mut reader = RecordReader::with_capacity(Cursor::new(input), b'\n', 16).unwrap();

        assert_eq!(reader.next_record().unwrap(), Some(long.as_str()));
        assert_eq!(reader.next_record().unwrap(), Some("short"));
    }

    // ==================== Unicode tests ====================

    #[test]
    fn test_unicode_content() {
        let mut reader = RecordReader::new(Cursor::new("héllo\n日本\n🎉"), b'\n').unwrap();

        assert_eq!(reader.next_record().unwrap(), Some("héllo"));
        assert_eq!(reader.next_record().unwrap(), Some("日本"));
        assert_eq!(reader.next_record().unwrap(), Some("🎉"));
    }

    #[test]
    fn test_unicode_byte_offsets() {
        let mut reader = RecordReader::new(Cursor::new("héllo\nx"), b'\n').unwrap();
        reader.next_record().unwrap();
        // "héllo" is six bytes, plus the separator
        assert_eq!(reader.offset(), 7);
    }
}
