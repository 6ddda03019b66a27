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

//! JSON text entry points.

use crate::dynamic::{decode_with_descriptor, missing_element_type};
use graphmap_core::{
    coerce_descriptor, normalize_list, parse_json, CacheStatistics, FieldInfo, JsonField,
    JsonValue, MapContext, MapperConfig, Mapped, MappingError, MappingResult, TypeDescriptor,
    TypeRegistry, UntypedValue,
};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Maps JSON text onto mapped types and back.
///
/// A mapper owns a [`MapperConfig`] and shares a [`TypeRegistry`]. Cloning
/// is cheap: clones share the registry, so directives scanned through one
/// clone are cached for all of them.
///
/// # Thread Safety
///
/// `JsonMapper` is `Send + Sync`. Calls never mutate the mapper itself; the
/// registry is a concurrent cache.
///
/// # Examples
///
/// ```text
/// use graphmap_json::JsonMapper;
/// use graphmap_core::MapperConfig;
///
/// let mapper = JsonMapper::with_config(
///     MapperConfig::builder().lenient_data_envelope(true).build(),
/// );
/// let users: Vec<BasicUser> = mapper.to_list(r#"{"data": [], "paging": {}}"#)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonMapper {
    registry: Arc<TypeRegistry>,
    config: MapperConfig,
}

impl JsonMapper {
    /// Mapper with the default configuration and a private registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            registry: Arc::new(TypeRegistry::new()),
            config,
        }
    }

    /// Mapper sharing an existing registry.
    pub fn with_registry(registry: Arc<TypeRegistry>, config: MapperConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Field table of `T`, as scanned by this mapper's registry.
    pub fn fields_of<T: Mapped>(&self) -> Vec<FieldInfo> {
        self.registry.fields_of::<T>()
    }

    /// Registry hit and miss counts.
    pub fn statistics(&self) -> CacheStatistics {
        self.registry.statistics()
    }

    fn context(&self) -> MapContext<'_> {
        MapContext::new(&self.registry, &self.config)
    }

    /// Decode a single value of type `T`.
    ///
    /// Scalars accept bare top-level tokens: `"\"Good\""` maps to `Good`
    /// and `1234` maps to `1234`. A top-level array is always rejected;
    /// use [`to_list`](Self::to_list) for those.
    ///
    /// # Errors
    ///
    /// - `EmptyInputError` for blank input
    /// - `ArrayMismatchError` when the text is an array
    /// - whatever decoding `T` reports, with the offending JSON attached
    pub fn to_object<T: JsonField>(&self, json: &str) -> MappingResult<T> {
        let text = require_content(json)?;
        if text.starts_with('[') {
            return Err(array_mismatch(&T::descriptor().name()).with_json(text));
        }
        T::from_text(text, &self.context()).map_err(|e| e.or_json(text))
    }

    /// Decode a list of `T`.
    ///
    /// Accepts an array, `{}` (an empty list), or a `{"data": [...]}`
    /// envelope.
    pub fn to_list<T: JsonField>(&self, json: &str) -> MappingResult<Vec<T>> {
        let text = require_content(json)?;
        let root = parse_json(text)?;
        let cx = self.context().descend()?;
        let list = normalize_list(&root, &self.config).map_err(|e| e.or_json(text))?;
        if list.shape.was_repaired() {
            debug!(shape = ?list.shape, items = list.len(), "normalized list payload");
        }
        list.items
            .iter()
            .map(|item| T::from_json(item, &cx))
            .collect::<MappingResult<Vec<_>>>()
            .map_err(|e| e.or_json(text))
    }

    /// Decode a JSON object without a target type.
    ///
    /// Members whose value is `null` are left out.
    pub fn to_untyped_object(&self, json: &str) -> MappingResult<IndexMap<String, UntypedValue>> {
        let text = require_content(json)?;
        if text.starts_with('[') {
            return Err(array_mismatch("an untyped object").with_json(text));
        }
        match UntypedValue::from_json(&parse_json(text)?, &self.context()) {
            Ok(UntypedValue::Object(members)) => Ok(members),
            Ok(other) => Err(MappingError::object_mismatch(format!(
                "JSON is a {} but is being mapped as an untyped object",
                untyped_kind(&other)
            ))
            .with_json(text)),
            Err(e) => Err(e.or_json(text)),
        }
    }

    /// Decode a list without a target element type.
    ///
    /// List normalization applies to the payload itself; nested values are
    /// decoded as they are.
    pub fn to_untyped_list(&self, json: &str) -> MappingResult<Vec<UntypedValue>> {
        let text = require_content(json)?;
        let root = parse_json(text)?;
        let cx = self.context().descend()?;
        let list = normalize_list(&root, &self.config).map_err(|e| e.or_json(text))?;
        list.items
            .iter()
            .map(|item| UntypedValue::from_json(item, &cx))
            .collect::<MappingResult<Vec<_>>>()
            .map_err(|e| e.or_json(text))
    }

    /// Decode against a descriptor chosen at runtime.
    ///
    /// Scalar descriptors accept bare tokens like [`to_object`](Self::to_object);
    /// composite and map descriptors reject top-level arrays.
    pub fn decode_as(&self, json: &str, descriptor: &TypeDescriptor) -> MappingResult<UntypedValue> {
        if let TypeDescriptor::List(None) = descriptor {
            return Err(missing_element_type());
        }
        let text = require_content(json)?;
        match descriptor {
            TypeDescriptor::Scalar(_) => coerce_descriptor(text, descriptor, &self.config)
                .map(UntypedValue::Scalar)
                .map_err(|e| e.or_json(text)),
            TypeDescriptor::Composite(_) | TypeDescriptor::Map(_) if text.starts_with('[') => {
                Err(array_mismatch(&descriptor.name()).with_json(text))
            }
            _ => {
                let root = parse_json(text)?;
                decode_with_descriptor(&root, descriptor, &self.context())
                    .map_err(|e| e.or_json(text))
            }
        }
    }

    /// Encode `value` as compact JSON text.
    ///
    /// `None` encodes as `null`.
    pub fn to_json<T: JsonField>(&self, value: &T) -> MappingResult<String> {
        Ok(self.to_json_value(value)?.to_string())
    }

    /// Encode `value` as indented JSON text.
    pub fn to_json_pretty<T: JsonField>(&self, value: &T) -> MappingResult<String> {
        let tree = self.to_json_value(value)?;
        serde_json::to_string_pretty(&tree).map_err(MappingError::from)
    }

    /// Encode `value` as a JSON tree.
    pub fn to_json_value<T: JsonField>(&self, value: &T) -> MappingResult<JsonValue> {
        value.to_json(&self.context())
    }
}

fn require_content(json: &str) -> MappingResult<&str> {
    let text = json.trim();
    if text.is_empty() {
        Err(MappingError::empty_input("JSON is an empty string - can't map it"))
    } else {
        Ok(text)
    }
}

fn array_mismatch(target: &str) -> MappingError {
    MappingError::array_mismatch(format!(
        "JSON is an array but is being mapped as {}; map it as a list instead",
        target
    ))
}

fn untyped_kind(value: &UntypedValue) -> &'static str {
    match value {
        UntypedValue::Null => "null",
        UntypedValue::Scalar(_) => "scalar",
        UntypedValue::List(_) => "list",
        UntypedValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmap_core::{MappingErrorKind, Scalar, ScalarKind, TypeBuilder};

    #[derive(Debug, Default, PartialEq)]
    struct Account {
        id: Option<i64>,
        owner: Option<String>,
    }

    impl Mapped for Account {
        fn construct() -> Option<Self> {
            Some(Self::default())
        }

        fn describe(fields: &mut TypeBuilder<Self>) {
            fields.field("id", |a| &a.id, |a| &mut a.id);
            fields.field("owner", |a| &a.owner, |a| &mut a.owner).rename("owner_name");
        }
    }

    // ==== Object tests ====

    #[test]
    fn test_to_object_composite() {
        let mapper = JsonMapper::new();
        let account: Account = mapper
            .to_object(r#"{"id": 7, "owner_name": "Ada", "extra": true}"#)
            .unwrap();
        assert_eq!(
            account,
            Account {
                id: Some(7),
                owner: Some("Ada".to_string())
            }
        );
    }

    #[test]
    fn test_to_object_blank_input() {
        let mapper = JsonMapper::new();
        for blank in ["", "   ", "\n\t"] {
            let err = mapper.to_object::<Account>(blank).unwrap_err();
            assert_eq!(err.kind, MappingErrorKind::EmptyInput);
            assert!(err.json.is_none());
        }
    }

    #[test]
    fn test_to_object_array_is_rejected_before_parsing() {
        let mapper = JsonMapper::new();
        let err = mapper.to_object::<Account>("[not json").unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ArrayMismatch);
        assert_eq!(err.json.as_deref(), Some("[not json"));
    }

    #[test]
    fn test_to_object_attaches_json_to_errors() {
        let mapper = JsonMapper::new();
        let err = mapper.to_object::<Account>(r#"{"id": "x"}"#).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::Coercion);
        assert!(err.json.is_some());
        assert_eq!(err.context.as_deref(), Some("field 'id' of Account"));
    }

    #[test]
    fn test_to_object_bare_scalars() {
        let mapper = JsonMapper::new();
        assert_eq!(mapper.to_object::<String>("\"Good\"").unwrap(), "Good");
        assert_eq!(mapper.to_object::<i64>("1234").unwrap(), 1234);
        assert!(mapper.to_object::<bool>("True").unwrap());
    }

    // ==== List tests ====

    #[test]
    fn test_to_list_shapes() {
        let mapper = JsonMapper::new();
        assert_eq!(mapper.to_list::<i64>("[1, 2]").unwrap(), vec![1, 2]);
        assert!(mapper.to_list::<i64>("{}").unwrap().is_empty());
        assert_eq!(mapper.to_list::<i64>(r#"{"data": [3]}"#).unwrap(), vec![3]);
    }

    #[test]
    fn test_to_list_envelope_with_siblings_depends_on_config() {
        let json = r#"{"data": [3], "paging": {}}"#;
        let strict = JsonMapper::new();
        assert_eq!(
            strict.to_list::<i64>(json).unwrap_err().kind,
            MappingErrorKind::ShapeMismatch
        );

        let lenient =
            JsonMapper::with_config(MapperConfig::builder().lenient_data_envelope(true).build());
        assert_eq!(lenient.to_list::<i64>(json).unwrap(), vec![3]);
    }

    #[test]
    fn test_to_list_scalar_payload() {
        let mapper = JsonMapper::new();
        let err = mapper.to_list::<i64>("42").unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ObjectMismatch);
    }

    #[test]
    fn test_to_list_malformed() {
        let mapper = JsonMapper::new();
        let err = mapper.to_list::<i64>("[1, 2").unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::Wrapped);
        assert_eq!(err.json.as_deref(), Some("[1, 2"));
    }

    // ==== Untyped tests ====

    #[test]
    fn test_untyped_object_drops_nulls() {
        let mapper = JsonMapper::new();
        let members = mapper
            .to_untyped_object(r#"{"a": 1, "b": null, "c": [null]}"#)
            .unwrap();
        assert_eq!(members.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(members["c"], UntypedValue::List(vec![UntypedValue::Null]));
    }

    #[test]
    fn test_untyped_object_rejects_non_objects() {
        let mapper = JsonMapper::new();
        assert_eq!(
            mapper.to_untyped_object("[1]").unwrap_err().kind,
            MappingErrorKind::ArrayMismatch
        );
        assert_eq!(
            mapper.to_untyped_object("5").unwrap_err().kind,
            MappingErrorKind::ObjectMismatch
        );
    }

    #[test]
    fn test_untyped_list_normalizes_top_level_only() {
        let mapper = JsonMapper::new();
        let items = mapper.to_untyped_list(r#"{"data": [{"x": {}}]}"#).unwrap();
        assert_eq!(items.len(), 1);
        let inner = items[0].get("x").unwrap();
        assert_eq!(inner, &UntypedValue::Object(IndexMap::new()));
    }

    // ==== Descriptor tests ====

    #[test]
    fn test_decode_as_scalar_bare_token() {
        let mapper = JsonMapper::new();
        let got = mapper
            .decode_as("\"Good\"", &TypeDescriptor::Scalar(ScalarKind::String))
            .unwrap();
        assert_eq!(got, UntypedValue::Scalar(Scalar::String("Good".to_string())));
    }

    #[test]
    fn test_decode_as_list_needs_element_type() {
        let mapper = JsonMapper::new();
        let err = mapper.decode_as("[1]", &TypeDescriptor::List(None)).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::MissingElementType);
    }

    #[test]
    fn test_decode_as_composite_uses_field_names() {
        let mapper = JsonMapper::new();
        let descriptor = graphmap_core::composite_descriptor::<Account>();
        let got = mapper
            .decode_as(r#"{"id": "7", "owner_name": "Ada"}"#, &descriptor)
            .unwrap();
        assert_eq!(got.get("id"), Some(&UntypedValue::Scalar(Scalar::Long(7))));
        assert_eq!(
            got.get("owner"),
            Some(&UntypedValue::Scalar(Scalar::String("Ada".to_string())))
        );
    }

    #[test]
    fn test_decode_as_composite_rejects_array() {
        let mapper = JsonMapper::new();
        let descriptor = graphmap_core::composite_descriptor::<Account>();
        let err = mapper.decode_as("[]", &descriptor).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ArrayMismatch);
    }

    #[test]
    fn test_decode_as_string_from_empty_array() {
        let mapper = JsonMapper::new();
        let got = mapper
            .decode_as("[]", &TypeDescriptor::Scalar(ScalarKind::String))
            .unwrap();
        assert_eq!(got, UntypedValue::Scalar(Scalar::String(String::new())));
    }

    // ==== Encoding tests ====

    #[test]
    fn test_to_json_uses_external_names() {
        let mapper = JsonMapper::new();
        let account = Account {
            id: Some(7),
            owner: None,
        };
        assert_eq!(
            mapper.to_json(&account).unwrap(),
            r#"{"id":7,"owner_name":null}"#
        );
    }

    #[test]
    fn test_to_json_none_is_null() {
        let mapper = JsonMapper::new();
        assert_eq!(mapper.to_json(&None::<Account>).unwrap(), "null");
    }

    #[test]
    fn test_clones_share_registry() {
        let mapper = JsonMapper::new();
        let clone = mapper.clone();
        let _: Account = mapper.to_object(r#"{"id": 1}"#).unwrap();
        assert!(clone.registry().contains::<Account>());
    }
}
