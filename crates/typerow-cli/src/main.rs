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

//! Typerow Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use typerow_cli::cli::Commands;

/// Typerow - statically typed rows for delimited text
///
/// A command-line interface for reading delimited text files through the
/// typerow streaming reader, printing rows and checking files against a
/// fixed field count.
///
/// # Examples
///
/// ```bash
/// # Print a CSV file as three columns
/// typerow print data.csv --fields 3
///
/// # Skip a header line and use semicolons
/// typerow print data.csv --fields 3 --skip 1 --delimiter ";"
///
/// # Verify that a tab-separated file is uniformly five columns wide
/// typerow check data.tsv --fields 5 --delimiter "\t"
/// ```
#[derive(Parser)]
#[command(name = "typerow")]
#[command(author, version, about = "Typerow - statically typed rows for delimited text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
