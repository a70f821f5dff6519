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

//! Structured error types for the typerow CLI.
//!
//! This module provides type-safe, composable error handling using `thiserror`.
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use typerow::ReadError;

/// The main error type for typerow CLI operations.
///
/// Each variant adds the context a command-line user needs, most importantly
/// the file path the reported problem belongs to.
///
/// # Examples
///
/// ```rust,no_run
/// use typerow_cli::error::CliError;
///
/// fn open(path: &str) -> Result<std::fs::File, CliError> {
///     std::fs::File::open(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (file open, read, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Reading or decoding rows from a file failed.
    ///
    /// Wraps the library's [`ReadError`] with the file path it occurred in.
    #[error("'{path}': {source}")]
    Read {
        /// The file the rows were read from
        path: PathBuf,
        /// The underlying read or decode failure
        #[source]
        source: ReadError,
    },

    /// Requested field count has no tuple decoder.
    #[error("unsupported field count {width}: expected a value from 1 to 12")]
    UnsupportedWidth {
        /// The requested field count
        width: usize,
    },

    /// Delimiter argument is not a single ASCII character.
    #[error("invalid delimiter '{raw}': expected one ASCII character, \\t, or \\n")]
    BadDelimiter {
        /// The delimiter argument as given
        raw: String,
    },
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use typerow_cli::error::CliError;
    /// use std::fs;
    ///
    /// let result = fs::File::open("data.csv")
    ///     .map_err(|e| CliError::io_error("data.csv", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a read error with file path context.
    pub fn read_error(path: impl Into<PathBuf>, source: ReadError) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
