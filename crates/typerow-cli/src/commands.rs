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

//! CLI command implementations
//!
//! The library decodes into compile-time tuple schemas; the CLI bridges from
//! a runtime `--fields N` argument by dispatching to the all-`String` tuple
//! of that arity. Field contents are printed or checked verbatim, so string
//! columns lose nothing.

use crate::error::CliError;
use colored::Colorize;
use std::fs::File;
use typerow::{RenderRow, Row, RowReader, RowReaderConfig};

/// Expand a runtime field count into the matching `String` tuple schema.
macro_rules! dispatch_width {
    ($width:expr, $call:ident($($arg:expr),* $(,)?)) => {
        match $width {
            1 => $call::<(String,)>($($arg),*),
            2 => $call::<(String, String)>($($arg),*),
            3 => $call::<(String, String, String)>($($arg),*),
            4 => $call::<(String, String, String, String)>($($arg),*),
            5 => $call::<(String, String, String, String, String)>($($arg),*),
            6 => $call::<(String, String, String, String, String, String)>($($arg),*),
            7 => $call::<(String, String, String, String, String, String, String)>($($arg),*),
            8 => $call::<(String, String, String, String, String, String, String, String)>($($arg),*),
            9 => $call::<(String, String, String, String, String, String, String, String, String)>($($arg),*),
            10 => $call::<(String, String, String, String, String, String, String, String, String, String)>($($arg),*),
            11 => $call::<(String, String, String, String, String, String, String, String, String, String, String)>($($arg),*),
            12 => $call::<(String, String, String, String, String, String, String, String, String, String, String, String)>($($arg),*),
            width => Err(CliError::UnsupportedWidth { width }),
        }
    };
}

/// Print rows from a delimited file.
///
/// Streams `file` as `fields` string columns and prints each row in its
/// rendered `(f0,f1,...,fn)` form, stopping after `limit` rows if one is
/// given.
///
/// # Errors
///
/// Returns `Err` if the file cannot be opened, the field count is not
/// between 1 and 12, the delimiter argument is invalid, or any record fails
/// to read or decode.
pub fn print(
    file: &str,
    fields: usize,
    skip: usize,
    delimiter: &str,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let config = RowReaderConfig {
        skip,
        field_separator: parse_delimiter(delimiter)?,
        ..Default::default()
    };
    dispatch_width!(fields, print_rows(file, config, limit))
}

/// Check that every record in a delimited file decodes at a fixed width.
///
/// Reads the whole file and reports the row count on success, or the first
/// read or decode failure.
///
/// # Errors
///
/// Returns `Err` if the file cannot be opened, the field count is not
/// between 1 and 12, the delimiter argument is invalid, or any record fails
/// to read or decode.
pub fn check(file: &str, fields: usize, skip: usize, delimiter: &str) -> Result<(), CliError> {
    let config = RowReaderConfig {
        skip,
        field_separator: parse_delimiter(delimiter)?,
        ..Default::default()
    };
    dispatch_width!(fields, check_rows(file, config))
}

/// Parse a delimiter argument into its separator byte.
///
/// Accepts a single ASCII character, or the two-character escapes `\t` and
/// `\n` as typed in a shell.
pub fn parse_delimiter(raw: &str) -> Result<u8, CliError> {
    match raw {
        "\\t" => Ok(b'\t'),
        "\\n" => Ok(b'\n'),
        _ => {
            let mut bytes = raw.bytes();
            match (bytes.next(), bytes.next()) {
                (Some(byte), None) => Ok(byte),
                _ => Err(CliError::BadDelimiter {
                    raw: raw.to_string(),
                }),
            }
        }
    }
}

fn print_rows<T: Row + RenderRow>(
    file: &str,
    config: RowReaderConfig,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let stream = File::open(file).map_err(|e| CliError::io_error(file, e))?;
    let reader = RowReader::<File, T>::with_config(stream, config)
        .map_err(|e| CliError::read_error(file, e))?;

    for row in reader.take(limit.unwrap_or(usize::MAX)) {
        let row = row.map_err(|e| CliError::read_error(file, e))?;
        println!("{}", row.render());
    }
    Ok(())
}

fn check_rows<T: Row>(file: &str, config: RowReaderConfig) -> Result<(), CliError> {
    let skipped = config.skip;
    let stream = File::open(file).map_err(|e| CliError::io_error(file, e))?;

    let mut reader = match RowReader::<File, T>::with_config(stream, config) {
        Ok(reader) => reader,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(CliError::read_error(file, e));
        }
    };

    // The first row was decoded during construction.
    let mut rows = 1usize;
    loop {
        match reader.advance() {
            Ok(true) => rows += 1,
            Ok(false) => break,
            Err(e) => {
                println!("{} {}", "✗".red().bold(), file);
                return Err(CliError::read_error(file, e));
            }
        }
    }

    println!("{} {}", "✓".green().bold(), file);
    println!("  Rows: {}", rows);
    println!("  Fields: {}", T::WIDTH);
    if skipped > 0 {
        println!("  Skipped: {}", skipped);
    }
    Ok(())
}
