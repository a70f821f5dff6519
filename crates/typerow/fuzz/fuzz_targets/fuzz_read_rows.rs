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


#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use typerow::{RowReader, RowReaderConfig};

/// Fuzz target for streaming row reading.
///
/// This fuzzer drives the full read path over raw bytes, including UTF-8
/// validation, record framing, and typed decoding. It helps identify:
///
/// - Panics or crashes from arbitrary byte streams
/// - Incorrect position accounting around the end sentinel
/// - Infinite loops in the record reader
/// - Incorrect error handling on invalid encodings
///
/// # Running the Fuzzer
///
/// ```bash
/// # Install cargo-fuzz if not already installed
/// cargo install cargo-fuzz
///
/// # Run the fuzzer (from the typerow directory)
/// cargo fuzz run fuzz_read_rows
///
/// # Run with specific options
/// cargo fuzz run fuzz_read_rows -- -max_len=10000 -max_total_time=300
/// ```
fuzz_target!(|data: &[u8]| {
    // String schema accepts any valid UTF-8, exercising the longest path
    if let Ok(reader) = RowReader::<_, (String,)>::new(Cursor::new(data)) {
        for row in reader.take(1000) {
            if row.is_err() {
                break;
            }
        }
    }

    // Numeric schema with a header skip and custom separators
    let config = RowReaderConfig {
        skip: 1,
        field_separator: b';',
        record_separator: b'|',
        ..Default::default()
    };
    if let Ok(mut reader) = RowReader::<_, (i64, f64)>::with_config(Cursor::new(data), config) {
        while let Ok(true) = reader.advance() {
            if reader.records() > 1000 {
                break;
            }
        }
        // The sentinel only ever marks clean exhaustion
        if reader.at_end() {
            assert!(reader.current().is_none());
        }
    }
});
