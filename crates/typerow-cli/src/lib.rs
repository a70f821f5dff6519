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

//! Typerow CLI library for command-line parsing and execution.
//!
//! This library backs the `typerow` binary, which exposes the streaming
//! typed-row reader over delimited files from the shell.
//!
//! # Commands
//!
//! - **print**: Stream a file as N string columns and print each row
//! - **check**: Verify that every record in a file decodes at width N
//!
//! # Examples
//!
//! ```no_run
//! use typerow_cli::commands::{check, print};
//!
//! # fn main() -> Result<(), typerow_cli::error::CliError> {
//! // Print a comma-separated file as three columns
//! print("data.csv", 3, 0, ",", None)?;
//!
//! // Check a tab-separated file with a header line
//! check("data.tsv", 5, 1, "\\t")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>`. Errors carry the file path
//! they belong to and, for read failures, the record position reported by
//! the library.

pub mod cli;
pub mod commands;
pub mod error;
