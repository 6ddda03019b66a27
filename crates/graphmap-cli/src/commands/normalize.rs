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

//! Normalize command - list repair as a standalone step

use super::{read_file, write_output};
use crate::error::CliError;
use graphmap::mapping::{normalize_list_text, ListShape};
use graphmap::{JsonValue, MapperConfig};

/// Run list normalization over a response and print the effective array.
///
/// The detected shape goes to stderr so stdout stays valid JSON.
pub fn normalize(
    file: &str,
    output: Option<&str>,
    pretty: bool,
    lenient: bool,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let config = MapperConfig::builder().lenient_data_envelope(lenient).build();
    let (shape, items) = normalize_list_text(&content, &config)?;

    eprintln!("shape: {} ({} items)", shape_name(shape), items.len());

    let array = JsonValue::Array(items);
    let rendered = if pretty {
        serde_json::to_string_pretty(&array)?
    } else {
        serde_json::to_string(&array)?
    };
    write_output(&rendered, output)
}

fn shape_name(shape: ListShape) -> &'static str {
    match shape {
        ListShape::Array => "array",
        ListShape::EmptyObject => "empty-object",
        ListShape::DataEnvelope => "data-envelope",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_names() {
        assert_eq!(shape_name(ListShape::Array), "array");
        assert_eq!(shape_name(ListShape::EmptyObject), "empty-object");
        assert_eq!(shape_name(ListShape::DataEnvelope), "data-envelope");
    }
}
