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

//! graphmap Command Line Interface

use clap::Parser;
use graphmap_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// graphmap - typed mapping of Graph-API-style JSON responses
///
/// # Examples
///
/// ```bash
/// # Decode a response without a target type
/// graphmap inspect response.json --pretty
///
/// # Repair a list response into a plain array
/// graphmap normalize friends.json
///
/// # Show the directives of a fixture type
/// graphmap fields UserWithAffiliations
/// ```
#[derive(Parser)]
#[command(name = "graphmap")]
#[command(author, version, about = "graphmap - typed mapping of Graph-API-style JSON responses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRAPHMAP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
