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

//! Fields command - print the scanned directives of a fixture type

use super::write_output;
use crate::error::CliError;
use graphmap::TypeRegistry;
use graphmap_test::field_tables;

/// Print the `(external, field, type)` rows of a fixture type.
///
/// One row per line, tab separated, in declaration order with inherited
/// fields first.
pub fn fields(type_name: &str, output: Option<&str>) -> Result<(), CliError> {
    let tables = field_tables();
    let table = tables
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, table)| table);

    let Some(table) = table else {
        let known: Vec<&str> = tables.iter().map(|(name, _)| *name).collect();
        return Err(CliError::unknown_type(type_name, &known));
    };

    let registry = TypeRegistry::new();
    let rows: Vec<String> = table(&registry)
        .into_iter()
        .map(|info| format!("{}\t{}\t{}", info.external, info.field, info.descriptor))
        .collect();
    write_output(&rows.join("\n"), output)
}
