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

//! CLI command definitions and argument parsing.
//!
//! This module contains the command-line interface structures for the
//! typerow CLI. Both commands share the same shape arguments (`--fields`,
//! `--skip`, `--delimiter`) so a working `print` invocation can be turned
//! into a `check` by swapping the verb.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Top-level CLI commands enum.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use typerow_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Print rows from a delimited file
    ///
    /// Streams the file as string columns of the given width and prints each
    /// row in its rendered (f0,f1,...,fn) form.
    Print {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Number of fields per record (1 to 12)
        #[arg(short, long, value_name = "N")]
        fields: usize,

        /// Leading records to skip (e.g. a header line)
        #[arg(short, long, default_value = "0", value_name = "K")]
        skip: usize,

        /// Field delimiter: one ASCII character, \t, or \n
        #[arg(short, long, default_value = ",", value_name = "CHAR")]
        delimiter: String,

        /// Stop after printing this many rows
        #[arg(short, long, value_name = "M")]
        limit: Option<usize>,
    },

    /// Check that a delimited file decodes at a fixed width
    ///
    /// Reads the whole file and reports the row count, or fails on the first
    /// record that does not match the given field count.
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Number of fields per record (1 to 12)
        #[arg(short, long, value_name = "N")]
        fields: usize,

        /// Leading records to skip (e.g. a header line)
        #[arg(short, long, default_value = "0", value_name = "K")]
        skip: usize,

        /// Field delimiter: one ASCII character, \t, or \n
        #[arg(short, long, default_value = ",", value_name = "CHAR")]
        delimiter: String,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - File I/O fails
    /// - The field count or delimiter argument is invalid
    /// - Reading or decoding any record fails
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Print {
                file,
                fields,
                skip,
                delimiter,
                limit,
            } => commands::print(&file, fields, skip, &delimiter, limit),
            Commands::Check {
                file,
                fields,
                skip,
                delimiter,
            } => commands::check(&file, fields, skip, &delimiter),
        }
    }
}
