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

//! Basic usage example of typerow for reading typed rows from delimited text.

use std::io::Cursor;
use typerow::{RenderRow, RowReader, RowReaderConfig};

fn main() {
    println!("=== Iterating Typed Rows ===\n");
    iterate_rows_example();

    println!("\n=== Custom Separators and Skipping ===\n");
    custom_config_example();

    println!("\n=== Manual Cursor Driving ===\n");
    manual_cursor_example();

    println!("\n=== Error Reporting ===\n");
    error_reporting_example();
}

/// Example: Iterate rows with a three-column schema
fn iterate_rows_example() {
    let data = "1,2,three\n4,5,six\n7,8,nine\n";
    println!("Input:\n{}", data);

    let reader: RowReader<_, (i32, i32, String)> =
        RowReader::new(Cursor::new(data)).expect("Failed to open source");

    for row in reader {
        let row = row.expect("Failed to read row");
        println!("  {}", row.render());
    }
}

/// Example: Semicolon-separated fields with a header record
fn custom_config_example() {
    let data = "lo;hi;label\n1;2;x\n3;4;y\n";
    println!("Input:\n{}", data);

    let config = RowReaderConfig {
        skip: 1,
        field_separator: b';',
        ..Default::default()
    };
    let reader: RowReader<_, (i32, i32, String)> =
        RowReader::with_config(Cursor::new(data), config).expect("Failed to open source");

    for row in reader {
        let row = row.expect("Failed to read row");
        println!("  {}", row.render());
    }
}

/// Example: Drive the cursor by hand and observe its position
fn manual_cursor_example() {
    let data = "10,a\n20,b\n30,c\n";
    let mut reader: RowReader<_, (u32, String)> =
        RowReader::new(Cursor::new(data)).expect("Failed to open source");

    while let Some(row) = reader.current() {
        println!("  position {:>2}: {}", reader.position(), row.render());
        if !reader.advance().expect("Failed to advance") {
            break;
        }
    }
    println!("  exhausted at position {}", reader.position());
}

/// Example: Decode failures name the record and field
fn error_reporting_example() {
    let data = "1,2\n3,potato\n5,6\n";
    println!("Input:\n{}", data);

    let reader: RowReader<_, (i64, i64)> =
        RowReader::new(Cursor::new(data)).expect("Failed to open source");

    for row in reader {
        match row {
            Ok(row) => println!("  ok: {}", row.render()),
            Err(e) => println!("  error: {}", e),
        }
    }
}
