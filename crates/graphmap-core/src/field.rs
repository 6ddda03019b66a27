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

//! Field codecs.
//!
//! [`JsonField`] is implemented by every type that can sit in a bound
//! field: the eight scalars, `Option`, `Vec`, string-keyed maps, untyped
//! values, and every [`Mapped`](crate::Mapped) composite. Dispatch over the
//! declared field type happens at compile time through these impls.

use crate::coerce::{coerce_text, coerce_value, json_type_name, scalar_to_json};
use crate::config::MapperConfig;
use crate::descriptor::{Scalar, ScalarKind, TypeDescriptor};
use crate::error::{MappingError, MappingResult};
use crate::normalize::normalize_list;
use crate::registry::TypeRegistry;
use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use tracing::trace;

/// State threaded through one decode or encode call.
#[derive(Debug, Clone, Copy)]
pub struct MapContext<'a> {
    registry: &'a TypeRegistry,
    config: &'a MapperConfig,
    depth: usize,
}

impl<'a> MapContext<'a> {
    pub fn new(registry: &'a TypeRegistry, config: &'a MapperConfig) -> Self {
        Self {
            registry,
            config,
            depth: 0,
        }
    }

    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    pub fn config(&self) -> &'a MapperConfig {
        self.config
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for one level deeper; fails past the configured limit.
    pub fn descend(&self) -> MappingResult<MapContext<'a>> {
        let depth = self.depth + 1;
        if self.config.exceeds_depth(depth) {
            return Err(MappingError::limit_exceeded(format!(
                "Maximum nesting depth ({}) exceeded",
                self.config.max_depth.unwrap_or_default()
            )));
        }
        Ok(MapContext { depth, ..*self })
    }
}

/// A type that can be decoded from and encoded to JSON.
pub trait JsonField: Sized + 'static {
    /// Runtime descriptor of this type.
    fn descriptor() -> TypeDescriptor;

    /// Decode from a parsed JSON value.
    fn from_json(value: &JsonValue, cx: &MapContext<'_>) -> MappingResult<Self>;

    /// Decode from raw top-level text.
    ///
    /// Scalars override this to accept bare tokens that are not valid JSON.
    fn from_text(text: &str, cx: &MapContext<'_>) -> MappingResult<Self> {
        let value = parse_json(text)?;
        Self::from_json(&value, cx)
    }

    /// Encode into a JSON value.
    fn to_json(&self, cx: &MapContext<'_>) -> MappingResult<JsonValue>;
}

/// Parse JSON text, wrapping syntax errors with the offending text.
pub fn parse_json(text: &str) -> MappingResult<JsonValue> {
    serde_json::from_str(text).map_err(|e| MappingError::from(e).with_json(text))
}

/// Borrow `value` as an object or explain why it is not one.
pub fn expect_object<'v>(
    value: &'v JsonValue,
    target: &str,
) -> MappingResult<&'v JsonMap<String, JsonValue>> {
    match value {
        JsonValue::Object(members) => Ok(members),
        JsonValue::Array(_) => Err(MappingError::array_mismatch(format!(
            "JSON is an array but is being mapped as {}; map it as a list instead",
            target
        ))
        .with_json(value.to_string())),
        other => Err(MappingError::object_mismatch(format!(
            "Expected a JSON object for {}, found {}",
            target,
            json_type_name(other)
        ))
        .with_json(other.to_string())),
    }
}

fn kind_mismatch(expected: ScalarKind, found: &Scalar) -> MappingError {
    MappingError::wrapped(format!(
        "Coercion to {} produced a {}",
        expected,
        found.kind()
    ))
}

macro_rules! scalar_field {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl JsonField for $ty {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::Scalar(ScalarKind::$kind)
            }

            fn from_json(value: &JsonValue, cx: &MapContext<'_>) -> MappingResult<Self> {
                match coerce_value(value, ScalarKind::$kind, cx.config())? {
                    Scalar::$kind(v) => Ok(v),
                    other => Err(kind_mismatch(ScalarKind::$kind, &other)),
                }
            }

            fn from_text(text: &str, cx: &MapContext<'_>) -> MappingResult<Self> {
                match coerce_text(text, ScalarKind::$kind, cx.config())? {
                    Scalar::$kind(v) => Ok(v),
                    other => Err(kind_mismatch(ScalarKind::$kind, &other)),
                }
            }

            fn to_json(&self, _cx: &MapContext<'_>) -> MappingResult<JsonValue> {
                scalar_to_json(&Scalar::$kind(self.clone()))
            }
        }
    )*};
}

scalar_field! {
    String => String,
    bool => Boolean,
    i32 => Integer,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    BigInt => BigInteger,
    BigDecimal => BigDecimal,
}

impl<T: JsonField> JsonField for Option<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor()
    }

    fn from_json(value: &JsonValue, cx: &MapContext<'_>) -> MappingResult<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_json(value, cx).map(Some)
        }
    }

    fn from_text(text: &str, cx: &MapContext<'_>) -> MappingResult<Self> {
        if text.trim() == "null" {
            Ok(None)
        } else {
            T::from_text(text, cx).map(Some)
        }
    }

    fn to_json(&self, cx: &MapContext<'_>) -> MappingResult<JsonValue> {
        match self {
            Some(value) => value.to_json(cx),
            None => Ok(JsonValue::Null),
        }
    }
}

impl<T: JsonField> JsonField for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::list_of(T::descriptor())
    }

    fn from_json(value: &JsonValue, cx: &MapContext<'_>) -> MappingResult<Self> {
        let cx = cx.descend()?;
        let list = normalize_list(value, cx.config())?;
        list.items
            .iter()
            .map(|item| T::from_json(item, &cx))
            .collect()
    }

    fn to_json(&self, cx: &MapContext<'_>) -> MappingResult<JsonValue> {
        let cx = cx.descend()?;
        self.iter()
            .map(|item| item.to_json(&cx))
            .collect::<MappingResult<Vec<_>>>()
            .map(JsonValue::Array)
    }
}

/// Key type of a mapped map.
///
/// Only string keys encode. Integer keys exist for id-keyed responses
/// such as `{"1234": {...}, "5678": {...}}`, which decode fine but are
/// rejected on encode with a [`KeyType`](crate::MappingErrorKind::KeyType)
/// error.
pub trait MapKey: Sized + 'static {
    fn from_key(key: &str) -> MappingResult<Self>;
    fn to_key(&self) -> MappingResult<String>;
}

impl MapKey for String {
    fn from_key(key: &str) -> MappingResult<Self> {
        Ok(key.to_string())
    }

    fn to_key(&self) -> MappingResult<String> {
        Ok(self.clone())
    }
}

macro_rules! integer_key {
    ($($ty:ty),*) => {$(
        impl MapKey for $ty {
            fn from_key(key: &str) -> MappingResult<Self> {
                key.parse::<$ty>().map_err(|e| {
                    MappingError::coercion(format!(
                        "Unable to map key '{}' to {}",
                        key,
                        stringify!($ty)
                    ))
                    .with_json(key)
                    .with_source(e)
                })
            }

            fn to_key(&self) -> MappingResult<String> {
                Err(MappingError::key_type(format!(
                    "Map keys must be strings, found {} key {}",
                    stringify!($ty),
                    self
                )))
            }
        }
    )*};
}

integer_key!(i32, i64, u64);

macro_rules! map_field {
    ($map:ident, $($bound:path),+) => {
        impl<K, V> JsonField for $map<K, V>
        where
            K: MapKey $(+ $bound)+,
            V: JsonField,
        {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::map_of(V::descriptor())
            }

            fn from_json(value: &JsonValue, cx: &MapContext<'_>) -> MappingResult<Self> {
                let cx = cx.descend()?;
                let members = expect_object(value, &Self::descriptor().name())?;
                let mut map = $map::new();
                for (key, item) in members {
                    if item.is_null() {
                        trace!(key = key.as_str(), "null map entry omitted");
                        continue;
                    }
                    let decoded = V::from_json(item, &cx)
                        .map_err(|e| e.in_field("map", key))?;
                    map.insert(K::from_key(key)?, decoded);
                }
                Ok(map)
            }

            fn to_json(&self, cx: &MapContext<'_>) -> MappingResult<JsonValue> {
                let cx = cx.descend()?;
                let mut object = JsonMap::new();
                for (key, value) in self {
                    object.insert(key.to_key()?, value.to_json(&cx)?);
                }
                Ok(JsonValue::Object(object))
            }
        }
    };
}

map_field!(BTreeMap, Ord);
map_field!(HashMap, Eq, Hash);
map_field!(IndexMap, Eq, Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MappingErrorKind;
    use serde_json::json;
    use std::str::FromStr;

    fn with_cx<R>(config: MapperConfig, f: impl FnOnce(&MapContext<'_>) -> R) -> R {
        let registry = TypeRegistry::new();
        let cx = MapContext::new(&registry, &config);
        f(&cx)
    }

    fn decode<T: JsonField>(value: JsonValue) -> MappingResult<T> {
        with_cx(MapperConfig::default(), |cx| T::from_json(&value, cx))
    }

    fn encode<T: JsonField>(value: &T) -> MappingResult<JsonValue> {
        with_cx(MapperConfig::default(), |cx| value.to_json(cx))
    }

    // ==================== MapContext tests ====================

    #[test]
    fn test_descend_counts_depth() {
        with_cx(MapperConfig::default(), |cx| {
            let one = cx.descend().unwrap();
            let two = one.descend().unwrap();
            assert_eq!(cx.depth(), 0);
            assert_eq!(two.depth(), 2);
        });
    }

    #[test]
    fn test_descend_past_limit() {
        let config = MapperConfig::builder().max_depth(1).build();
        with_cx(config, |cx| {
            let one = cx.descend().unwrap();
            let err = one.descend().unwrap_err();
            assert_eq!(err.kind, MappingErrorKind::LimitExceeded);
        });
    }

    // ==================== Scalar field tests ====================

    #[test]
    fn test_scalar_from_json() {
        assert_eq!(decode::<i64>(json!(1234)).unwrap(), 1234);
        assert_eq!(decode::<i32>(json!("1234")).unwrap(), 1234);
        assert!(decode::<bool>(json!(true)).unwrap());
        assert_eq!(decode::<String>(json!("Good")).unwrap(), "Good");
        assert_eq!(decode::<f64>(json!(2.5)).unwrap(), 2.5);
    }

    #[test]
    fn test_scalar_from_text() {
        with_cx(MapperConfig::default(), |cx| {
            assert_eq!(String::from_text("\"Good\"", cx).unwrap(), "Good");
            assert_eq!(i64::from_text("1240077", cx).unwrap(), 1240077);
            assert_eq!(
                BigInt::from_text("98765432109876543210", cx).unwrap(),
                BigInt::from_str("98765432109876543210").unwrap()
            );
        });
    }

    #[test]
    fn test_scalar_descriptor() {
        assert_eq!(
            <i32 as JsonField>::descriptor(),
            TypeDescriptor::Scalar(ScalarKind::Integer)
        );
        assert_eq!(
            <BigDecimal as JsonField>::descriptor(),
            TypeDescriptor::Scalar(ScalarKind::BigDecimal)
        );
    }

    // ==================== Option tests ====================

    #[test]
    fn test_option_null_is_none() {
        assert_eq!(decode::<Option<i64>>(JsonValue::Null).unwrap(), None);
        assert_eq!(decode::<Option<i64>>(json!(5)).unwrap(), Some(5));
        assert_eq!(encode(&None::<i64>).unwrap(), JsonValue::Null);
    }

    // ==================== Vec tests ====================

    #[test]
    fn test_vec_from_array() {
        let tags = decode::<Vec<String>>(json!(["Good", "Better", "Best"])).unwrap();
        assert_eq!(tags, vec!["Good", "Better", "Best"]);
    }

    #[test]
    fn test_vec_from_empty_object() {
        assert!(decode::<Vec<i32>>(json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_vec_from_data_envelope() {
        assert_eq!(
            decode::<Vec<i32>>(json!({"data": [1, 2, 3]})).unwrap(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_vec_null_element_fails() {
        let err = decode::<Vec<i64>>(json!([1, null])).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::Coercion);
    }

    #[test]
    fn test_vec_of_options_keeps_nulls() {
        assert_eq!(
            decode::<Vec<Option<i64>>>(json!([1, null])).unwrap(),
            vec![Some(1), None]
        );
    }

    #[test]
    fn test_vec_to_json() {
        assert_eq!(encode(&vec![1i64, 2, 3]).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_vec_descriptor() {
        assert_eq!(<Vec<String> as JsonField>::descriptor().name(), "List<String>");
    }

    // ==================== Map tests ====================

    #[test]
    fn test_btree_map_roundtrip() {
        let map = decode::<BTreeMap<String, i64>>(json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(encode(&map).unwrap(), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_map_omits_null_entries() {
        let map = decode::<IndexMap<String, String>>(json!({"a": "x", "b": null})).unwrap();
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_map_from_array_is_array_mismatch() {
        let err = decode::<HashMap<String, i64>>(json!([1])).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ArrayMismatch);
    }

    #[test]
    fn test_integer_keys_decode() {
        let map = decode::<BTreeMap<i64, String>>(json!({"1234": "a", "5678": "b"})).unwrap();
        assert_eq!(map.get(&1234).map(String::as_str), Some("a"));
    }

    #[test]
    fn test_integer_keys_fail_to_encode() {
        let mut map = BTreeMap::new();
        map.insert(1i64, "a".to_string());
        let err = encode(&map).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::KeyType);
        assert!(err.is_programming_error());
    }

    #[test]
    fn test_bad_integer_key() {
        let err = decode::<BTreeMap<i32, i32>>(json!({"x": 1})).unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::Coercion);
    }

    // ==================== parse_json tests ====================

    #[test]
    fn test_parse_json_error_carries_text() {
        let err = parse_json("{\"a\":").unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::Wrapped);
        assert_eq!(err.json.as_deref(), Some("{\"a\":"));
    }
}
