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

//! List shape normalization.
//!
//! Wherever a list is expected, upstream responses may instead carry:
//!
//! - an empty object `{}` standing in for an empty list
//! - a connection envelope `{"data": [...]}` wrapping the list
//!
//! Both are repaired here, identically for typed and untyped targets.
//! Any other object is a [`ShapeMismatch`](crate::MappingErrorKind::ShapeMismatch).

use crate::coerce::json_type_name;
use crate::config::MapperConfig;
use crate::error::{MappingError, MappingResult};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Key holding the list inside a connection envelope.
pub const DATA_KEY: &str = "data";

/// How a list payload was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// A plain JSON array.
    Array,
    /// An empty object standing in for an empty list.
    EmptyObject,
    /// An object whose `data` member holds the list.
    DataEnvelope,
}

impl ListShape {
    /// True when the payload needed repair.
    pub fn was_repaired(self) -> bool {
        self != ListShape::Array
    }
}

/// The effective list payload, borrowed from the parsed tree.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedList<'v> {
    pub shape: ListShape,
    pub items: &'v [JsonValue],
}

impl<'v> NormalizedList<'v> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The effective payload as a JSON array.
    pub fn to_value(&self) -> JsonValue {
        JsonValue::Array(self.items.to_vec())
    }
}

/// Normalize a parsed value that should represent a list.
pub fn normalize_list<'v>(
    value: &'v JsonValue,
    config: &MapperConfig,
) -> MappingResult<NormalizedList<'v>> {
    match value {
        JsonValue::Array(items) => Ok(NormalizedList {
            shape: ListShape::Array,
            items,
        }),
        JsonValue::Object(members) if members.is_empty() => {
            debug!("empty object received where a list was expected; treating it as an empty list");
            Ok(NormalizedList {
                shape: ListShape::EmptyObject,
                items: &[],
            })
        }
        JsonValue::Object(members) => match members.get(DATA_KEY) {
            Some(JsonValue::Array(items))
                if members.len() == 1 || config.lenient_data_envelope =>
            {
                debug!(
                    items = items.len(),
                    siblings = members.len() - 1,
                    "unwrapping data envelope"
                );
                Ok(NormalizedList {
                    shape: ListShape::DataEnvelope,
                    items,
                })
            }
            _ => Err(MappingError::shape_mismatch(
                "JSON is an object but is being mapped as a list; only an empty object \
                 or a 'data' envelope can stand in for a list",
            )
            .with_json(value.to_string())),
        },
        other => Err(MappingError::object_mismatch(format!(
            "JSON is a {} but is being mapped as a list",
            json_type_name(other)
        ))
        .with_json(other.to_string())),
    }
}

/// Parse `text` and normalize it as a list, returning an owned payload.
///
/// Used where the caller does not keep the parsed tree around.
pub fn normalize_list_text(text: &str, config: &MapperConfig) -> MappingResult<(ListShape, Vec<JsonValue>)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MappingError::empty_input(
            "JSON is an empty string - can't map it",
        ));
    }
    let root: JsonValue = serde_json::from_str(trimmed)
        .map_err(|e| MappingError::from(e).with_json(trimmed))?;
    let list = normalize_list(&root, config)?;
    let shape = list.shape;
    let items = match root {
        JsonValue::Array(items) => items,
        JsonValue::Object(mut members) if shape == ListShape::DataEnvelope => {
            match members.remove(DATA_KEY) {
                Some(JsonValue::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    };
    Ok((shape, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MappingErrorKind;
    use serde_json::json;

    fn strict() -> MapperConfig {
        MapperConfig::default()
    }

    fn lenient() -> MapperConfig {
        MapperConfig::builder().lenient_data_envelope(true).build()
    }

    // ==================== Array tests ====================

    #[test]
    fn test_items_borrow_from_value_only() {
        let value = json!({"data": [1, 2]});
        let list = normalize_list(&value, &MapperConfig::default()).unwrap();
        assert_eq!(list.items, &[json!(1), json!(2)][..]);
        assert_eq!(list.shape, ListShape::DataEnvelope);
    }

    #[test]
    fn test_array_passes_through() {
        let value = json!([1, 2, 3]);
        let list = normalize_list(&value, &strict()).unwrap();
        assert_eq!(list.shape, ListShape::Array);
        assert_eq!(list.len(), 3);
        assert!(!list.shape.was_repaired());
    }

    #[test]
    fn test_empty_array() {
        let value = json!([]);
        let list = normalize_list(&value, &strict()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.shape, ListShape::Array);
    }

    // ==================== Empty object tests ====================

    #[test]
    fn test_empty_object_is_empty_list() {
        let value = json!({});
        let list = normalize_list(&value, &strict()).unwrap();
        assert_eq!(list.shape, ListShape::EmptyObject);
        assert!(list.is_empty());
        assert!(list.shape.was_repaired());
    }

    #[test]
    fn test_empty_object_with_whitespace_text() {
        let (shape, items) = normalize_list_text("  {   }  ", &strict()).unwrap();
        assert_eq!(shape, ListShape::EmptyObject);
        assert!(items.is_empty());
    }

    // ==================== Data envelope tests ====================

    #[test]
    fn test_data_envelope_unwrapped() {
        let value = json!({"data": [1, 2, 3]});
        let list = normalize_list(&value, &strict()).unwrap();
        assert_eq!(list.shape, ListShape::DataEnvelope);
        assert_eq!(list.to_value(), json!([1, 2, 3]));
    }

    #[test]
    fn test_data_envelope_empty() {
        let value = json!({"data": []});
        let list = normalize_list(&value, &strict()).unwrap();
        assert_eq!(list.shape, ListShape::DataEnvelope);
        assert!(list.is_empty());
    }

    #[test]
    fn test_data_envelope_with_siblings_rejected_by_default() {
        let value = json!({"data": [1], "paging": {"next": "x"}});
        let err = normalize_list(&value, &strict()).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_data_envelope_with_siblings_lenient() {
        let value = json!({"data": [1], "paging": {"next": "x"}});
        let list = normalize_list(&value, &lenient()).unwrap();
        assert_eq!(list.shape, ListShape::DataEnvelope);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_data_not_an_array() {
        let value = json!({"data": {"id": 1}});
        let err = normalize_list(&value, &lenient()).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ShapeMismatch);
    }

    // ==================== Mismatch tests ====================

    #[test]
    fn test_other_object_is_shape_mismatch() {
        let value = json!({"foo": [1, 2, 3]});
        let err = normalize_list(&value, &strict()).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ShapeMismatch);
        assert_eq!(err.json.as_deref(), Some("{\"foo\":[1,2,3]}"));
    }

    #[test]
    fn test_scalar_is_object_mismatch() {
        let err = normalize_list(&json!(42), &strict()).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ObjectMismatch);
        assert!(err.message.contains("number"));
    }

    // ==================== normalize_list_text tests ====================

    #[test]
    fn test_text_blank_is_empty_input() {
        let err = normalize_list_text("   ", &strict()).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::EmptyInput);
    }

    #[test]
    fn test_text_invalid_json_is_wrapped() {
        let err = normalize_list_text("[1, 2", &strict()).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::Wrapped);
        assert_eq!(err.json.as_deref(), Some("[1, 2"));
    }

    #[test]
    fn test_text_data_envelope_owned() {
        let (shape, items) = normalize_list_text(r#"{"data":["a","b"]}"#, &strict()).unwrap();
        assert_eq!(shape, ListShape::DataEnvelope);
        assert_eq!(items, vec![json!("a"), json!("b")]);
    }
}
