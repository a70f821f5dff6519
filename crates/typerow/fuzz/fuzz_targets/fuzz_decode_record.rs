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
use typerow::{split_record, Row};

/// Fuzz target for single-record decoding.
///
/// This fuzzer tests the robustness of record splitting and typed decoding
/// against malformed or edge-case inputs. It helps identify:
///
/// - Panics from unexpected field contents or counts
/// - Integer overflow handling in numeric conversion
/// - Incorrect slicing around separator bytes
///
/// # Running the Fuzzer
///
/// ```bash
/// # Install cargo-fuzz if not already installed
/// cargo install cargo-fuzz
///
/// # Run the fuzzer (from the typerow directory)
/// cargo fuzz run fuzz_decode_record
///
/// # Run with specific options
/// cargo fuzz run fuzz_decode_record -- -max_len=4096 -max_total_time=300
/// ```
fuzz_target!(|data: &[u8]| {
    if let Ok(record) = std::str::from_utf8(data) {
        // Splitting never fails; decoding errors are expected for most inputs
        let _ = split_record(record, b',');
        let _ = split_record(record, b';');

        let _ = <(i64,)>::from_record(record, b',');
        let _ = <(i64, i64)>::from_record(record, b',');
        let _ = <(f64, String, bool)>::from_record(record, b',');
        let _ = <(String, String, String, String)>::from_record(record, b';');
        let _ = <(u8, i128, char, f32)>::from_record(record, b'\t');
    }
});
