// Dweve Graphmap - Typed JSON Object Mapping
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

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```text
/// use clap::Parser;
/// use graphmap_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a JSON response without a target type
    ///
    /// Objects drop their null members; arrays, `{}` and `data` envelopes
    /// are decoded as lists.
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the result
        #[arg(short, long)]
        pretty: bool,

        /// Accept `data` envelopes with sibling keys such as `paging`
        #[arg(long)]
        lenient: bool,
    },

    /// Print the effective array of a list response
    ///
    /// Repairs `{}` and `{"data": [...]}` into a plain array and reports the
    /// detected shape on stderr.
    Normalize {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the result
        #[arg(short, long)]
        pretty: bool,

        /// Accept `data` envelopes with sibling keys such as `paging`
        #[arg(long)]
        lenient: bool,
    },

    /// Show the binding directives of a fixture type (debug)
    Fields {
        /// Type name, e.g. UserWithAffiliations
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O fails or the mapper rejects the input.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Inspect {
                file,
                output,
                pretty,
                lenient,
            } => commands::inspect(&file, output.as_deref(), pretty, lenient),
            Commands::Normalize {
                file,
                output,
                pretty,
                lenient,
            } => commands::normalize(&file, output.as_deref(), pretty, lenient),
            Commands::Fields { type_name, output } => {
                commands::fields(&type_name, output.as_deref())
            }
        }
    }
}
