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

//! Inspect command - untyped decoding of a JSON response

use super::{read_file, write_output};
use crate::error::CliError;
use graphmap::{JsonField, JsonMapper, MapperConfig, TypeDescriptor};
use tracing::debug;

/// Decode a JSON response without a target type and print the result.
///
/// Objects are decoded as untyped objects, so `null` members disappear.
/// Arrays and list stand-ins go through list normalization. Anything else
/// is decoded as a single untyped value.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or the mapper rejects it.
pub fn inspect(
    file: &str,
    output: Option<&str>,
    pretty: bool,
    lenient: bool,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let mapper = JsonMapper::with_config(
        MapperConfig::builder().lenient_data_envelope(lenient).build(),
    );

    let text = content.trim_start();
    let rendered = if text.starts_with('[') {
        let items = mapper.to_untyped_list(text)?;
        debug!(file, items = items.len(), "decoded untyped list");
        render(&mapper, &items, pretty)?
    } else if text.starts_with('{') {
        let members = mapper.to_untyped_object(text)?;
        debug!(file, members = members.len(), "decoded untyped object");
        render(&mapper, &members, pretty)?
    } else {
        let value = mapper.decode_as(text, &TypeDescriptor::Untyped)?;
        render(&mapper, &value, pretty)?
    };

    write_output(&rendered, output)
}

fn render<T: JsonField>(
    mapper: &JsonMapper,
    value: &T,
    pretty: bool,
) -> Result<String, CliError> {
    let text = if pretty {
        mapper.to_json_pretty(value)?
    } else {
        mapper.to_json(value)?
    };
    Ok(text)
}

