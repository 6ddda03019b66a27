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

//! Schema-less values.

use crate::coerce::scalar_to_json;
use crate::descriptor::{Scalar, TypeDescriptor};
use crate::error::{MappingError, MappingResult};
use crate::field::{JsonField, MapContext};
use indexmap::IndexMap;
use num_bigint::BigInt;
use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use std::str::FromStr;
use tracing::trace;

/// A value decoded without binding directives.
///
/// Objects keep insertion order and never store `null` members; lists
/// keep `null` elements as [`UntypedValue::Null`].
#[derive(Debug, Clone, PartialEq)]
pub enum UntypedValue {
    Null,
    Scalar(Scalar),
    List(Vec<UntypedValue>),
    Object(IndexMap<String, UntypedValue>),
}

impl UntypedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, UntypedValue::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            UntypedValue::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[UntypedValue]> {
        match self {
            UntypedValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, UntypedValue>> {
        match self {
            UntypedValue::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Member lookup on objects.
    pub fn get(&self, key: &str) -> Option<&UntypedValue> {
        self.as_object().and_then(|members| members.get(key))
    }
}

impl From<Scalar> for UntypedValue {
    fn from(scalar: Scalar) -> Self {
        UntypedValue::Scalar(scalar)
    }
}

/// Natural scalar for a JSON number: `Long` when it fits, `BigInteger`
/// for larger integers, `Double` otherwise.
pub fn natural_number(number: &Number) -> MappingResult<Scalar> {
    if let Some(value) = number.as_i64() {
        return Ok(Scalar::Long(value));
    }
    let text = number.to_string();
    let integral = !text.contains(['.', 'e', 'E']);
    if integral {
        if let Ok(value) = BigInt::from_str(&text) {
            return Ok(Scalar::BigInteger(value));
        }
    }
    match number.as_f64() {
        Some(value) if value.is_finite() => Ok(Scalar::Double(value)),
        _ => Err(MappingError::wrapped(format!("Number {} does not fit in a double", text))
            .with_json(text)),
    }
}

impl JsonField for UntypedValue {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Untyped
    }

    fn from_json(value: &JsonValue, cx: &MapContext<'_>) -> MappingResult<Self> {
        match value {
            JsonValue::Null => Ok(UntypedValue::Null),
            JsonValue::Bool(flag) => Ok(UntypedValue::Scalar(Scalar::Boolean(*flag))),
            JsonValue::Number(number) => natural_number(number).map(UntypedValue::Scalar),
            JsonValue::String(text) => Ok(UntypedValue::Scalar(Scalar::String(text.clone()))),
            JsonValue::Array(items) => {
                let cx = cx.descend()?;
                items
                    .iter()
                    .map(|item| UntypedValue::from_json(item, &cx))
                    .collect::<MappingResult<Vec<_>>>()
                    .map(UntypedValue::List)
            }
            JsonValue::Object(members) => {
                let cx = cx.descend()?;
                let mut object = IndexMap::with_capacity(members.len());
                for (key, member) in members {
                    if member.is_null() {
                        trace!(key = key.as_str(), "null member omitted from untyped object");
                        continue;
                    }
                    object.insert(key.clone(), UntypedValue::from_json(member, &cx)?);
                }
                Ok(UntypedValue::Object(object))
            }
        }
    }

    fn to_json(&self, cx: &MapContext<'_>) -> MappingResult<JsonValue> {
        match self {
            UntypedValue::Null => Ok(JsonValue::Null),
            UntypedValue::Scalar(scalar) => scalar_to_json(scalar),
            UntypedValue::List(items) => {
                let cx = cx.descend()?;
                items
                    .iter()
                    .map(|item| item.to_json(&cx))
                    .collect::<MappingResult<Vec<_>>>()
                    .map(JsonValue::Array)
            }
            UntypedValue::Object(members) => {
                let cx = cx.descend()?;
                let mut object = JsonMap::with_capacity(members.len());
                for (key, member) in members {
                    object.insert(key.clone(), member.to_json(&cx)?);
                }
                Ok(JsonValue::Object(object))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapperConfig;
    use crate::registry::TypeRegistry;
    use serde_json::json;

    fn decode(value: JsonValue) -> MappingResult<UntypedValue> {
        let registry = TypeRegistry::new();
        let config = MapperConfig::default();
        UntypedValue::from_json(&value, &MapContext::new(&registry, &config))
    }

    #[test]
    fn test_natural_scalars() {
        assert_eq!(
            decode(json!(true)).unwrap(),
            UntypedValue::Scalar(Scalar::Boolean(true))
        );
        assert_eq!(
            decode(json!(42)).unwrap(),
            UntypedValue::Scalar(Scalar::Long(42))
        );
        assert_eq!(
            decode(json!(1.5)).unwrap(),
            UntypedValue::Scalar(Scalar::Double(1.5))
        );
        assert_eq!(
            decode(json!("x")).unwrap(),
            UntypedValue::Scalar(Scalar::String("x".into()))
        );
    }

    #[test]
    fn test_big_integer_is_not_rounded() {
        let value: JsonValue = serde_json::from_str("123456789012345678901234567890").unwrap();
        let decoded = decode(value).unwrap();
        assert_eq!(
            decoded.as_scalar().map(Scalar::kind),
            Some(crate::ScalarKind::BigInteger)
        );
        assert_eq!(
            decoded.as_scalar().unwrap().to_string(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_object_preserves_order_and_omits_nulls() {
        let value: JsonValue = serde_json::from_str(r#"{"z":1,"a":null,"m":"x"}"#).unwrap();
        let decoded = decode(value).unwrap();
        let keys: Vec<_> = decoded.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "m"]);
    }

    #[test]
    fn test_list_keeps_nulls() {
        let decoded = decode(json!([1, null])).unwrap();
        let items = decoded.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[1].is_null());
    }

    #[test]
    fn test_nested_get() {
        let decoded = decode(json!({"user": {"name": "A"}})).unwrap();
        assert_eq!(
            decoded.get("user").and_then(|u| u.get("name")),
            Some(&UntypedValue::Scalar(Scalar::String("A".into())))
        );
    }

    #[test]
    fn test_encode_roundtrip_order() {
        let registry = TypeRegistry::new();
        let config = MapperConfig::default();
        let cx = MapContext::new(&registry, &config);
        let text = r#"{"b":[1,"two",true],"a":{"c":2.5}}"#;
        let value: JsonValue = serde_json::from_str(text).unwrap();
        let decoded = UntypedValue::from_json(&value, &cx).unwrap();
        assert_eq!(decoded.to_json(&cx).unwrap().to_string(), text);
    }
}
