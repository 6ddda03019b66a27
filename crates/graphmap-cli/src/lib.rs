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

//! graphmap CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **inspect**: decode a response without a target type
//! - **normalize**: repair a list response into a plain array
//! - **fields**: show the scanned binding directives of a fixture type
//!
//! # Security
//!
//! Input files larger than `GRAPHMAP_MAX_FILE_SIZE` bytes (default 100 MB)
//! are rejected before they are read.
//!
//! # Logging
//!
//! The binary logs to stderr. Set `GRAPHMAP_LOG` (e.g. `graphmap=debug`)
//! to see list repairs and skipped keys.

pub mod cli;
pub mod commands;
pub mod error;
