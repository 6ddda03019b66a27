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

//! Descriptor-driven decoding.
//!
//! Decodes a parsed tree against a [`TypeDescriptor`] chosen at runtime and
//! produces an [`UntypedValue`] shaped like the target. Composite targets
//! become objects keyed by Rust field name, holding only the bound fields
//! that were present and non-null.

use graphmap_core::{
    coerce_value, expect_object, normalize_list, JsonField, JsonValue, MapContext, MappingError,
    MappingResult, TypeDescriptor, UntypedValue,
};
use indexmap::IndexMap;
use tracing::trace;

/// Decode `value` as the type described by `descriptor`.
pub fn decode_with_descriptor(
    value: &JsonValue,
    descriptor: &TypeDescriptor,
    cx: &MapContext<'_>,
) -> MappingResult<UntypedValue> {
    match descriptor {
        TypeDescriptor::Untyped => UntypedValue::from_json(value, cx),
        TypeDescriptor::Scalar(kind) => {
            coerce_value(value, *kind, cx.config()).map(UntypedValue::Scalar)
        }
        TypeDescriptor::List(None) => Err(missing_element_type()),
        TypeDescriptor::List(Some(element)) => {
            let cx = cx.descend()?;
            let list = normalize_list(value, cx.config())?;
            list.items
                .iter()
                .map(|item| decode_with_descriptor(item, element, &cx))
                .collect::<MappingResult<Vec<_>>>()
                .map(UntypedValue::List)
        }
        TypeDescriptor::Map(element) => {
            let cx = cx.descend()?;
            let members = expect_object(value, &descriptor.name())?;
            let mut object = IndexMap::with_capacity(members.len());
            for (key, member) in members {
                if member.is_null() {
                    trace!(key = %key, "skipping null map entry");
                    continue;
                }
                let decoded = decode_with_descriptor(member, element, &cx)
                    .map_err(|e| e.in_field("map", key))?;
                object.insert(key.clone(), decoded);
            }
            Ok(UntypedValue::Object(object))
        }
        TypeDescriptor::Composite(composite) => {
            let fields = composite.fields();
            if fields.is_empty() && !value.is_object() && !value.is_array() {
                return Err(no_bound_fields(composite.name));
            }
            let members = expect_object(value, composite.name)?;
            if fields.is_empty() {
                return if members.is_empty() {
                    composite.require_constructible()?;
                    Ok(UntypedValue::Object(IndexMap::new()))
                } else {
                    Err(no_bound_fields(composite.name).with_json(value.to_string()))
                };
            }

            let cx = cx.descend()?;
            composite.require_constructible()?;
            let mut object = IndexMap::with_capacity(fields.len());
            for info in &fields {
                let raw = match members.get(info.external) {
                    None | Some(JsonValue::Null) => continue,
                    Some(raw) => raw,
                };
                let decoded = decode_with_descriptor(raw, &info.descriptor, &cx)
                    .map_err(|e| e.in_field(composite.name, info.field))?;
                object.insert(info.field.to_string(), decoded);
            }
            Ok(UntypedValue::Object(object))
        }
    }
}

pub(crate) fn missing_element_type() -> MappingError {
    MappingError::missing_element_type(
        "List targets need an element type; use List<?> only for untyped data",
    )
}

fn no_bound_fields(name: &str) -> MappingError {
    MappingError::unsupported_type(format!(
        "{} has no bound fields; only an empty object can be mapped to it",
        name
    ))
}
