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

//! Scalar coercion rules.
//!
//! Two entry points exist because scalars reach the mapper in two forms:
//!
//! - [`coerce_text`] takes raw top-level text. Upstream endpoints return
//!   bare tokens such as `1240077` or `"3e4a22bb..."`, which are mapped
//!   without going through a JSON parser.
//! - [`coerce_value`] takes a parsed JSON value (a field or list element).
//!   Numbers are parsed from their literal text, so arbitrary-precision
//!   targets never pass through a binary float.
//!
//! The string leniencies are kept as named rules:
//! [`strip_enclosing_quotes`] and [`is_empty_array`].

use crate::config::MapperConfig;
use crate::descriptor::{Scalar, ScalarKind, TypeDescriptor};
use crate::error::{MappingError, MappingResult};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use serde_json::{Number, Value as JsonValue};
use std::error::Error as StdError;
use std::str::FromStr;
use tracing::debug;

/// Strip exactly one pair of enclosing double quotes.
///
/// Applies only when the text is longer than one character and both starts
/// and ends with `"`. Escapes inside are left untouched.
pub fn strip_enclosing_quotes(text: &str) -> &str {
    if text.len() > 1 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// True for a zero-length JSON array.
///
/// Some upstream endpoints send `[]` for a string field that has no value.
pub fn is_empty_array(value: &JsonValue) -> bool {
    matches!(value, JsonValue::Array(items) if items.is_empty())
}

fn is_empty_array_text(text: &str) -> bool {
    text.trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|inner| inner.trim().is_empty())
}

/// Coerce raw top-level text into a scalar.
pub fn coerce_text(text: &str, kind: ScalarKind, config: &MapperConfig) -> MappingResult<Scalar> {
    match kind {
        ScalarKind::String => {
            if config.empty_array_as_empty_string && is_empty_array_text(text) {
                debug!("empty JSON array mapped to an empty string");
                return Ok(Scalar::String(String::new()));
            }
            let text = if config.strip_enclosing_quotes {
                strip_enclosing_quotes(text)
            } else {
                text
            };
            Ok(Scalar::String(text.to_string()))
        }
        _ => parse_scalar(text.trim(), kind),
    }
}

/// Coerce a parsed JSON value into a scalar.
pub fn coerce_value(
    value: &JsonValue,
    kind: ScalarKind,
    config: &MapperConfig,
) -> MappingResult<Scalar> {
    match value {
        JsonValue::Null => {
            Err(MappingError::coercion(format!("Cannot map null to {}", kind)).with_json("null"))
        }
        _ if kind == ScalarKind::String => Ok(Scalar::String(string_from_value(value, config))),
        JsonValue::String(text) => parse_scalar(text, kind),
        JsonValue::Number(number) => parse_scalar(&number.to_string(), kind),
        JsonValue::Bool(flag) => parse_scalar(if *flag { "true" } else { "false" }, kind),
        other => Err(MappingError::coercion(format!(
            "Cannot map a JSON {} to {}",
            json_type_name(other),
            kind
        ))
        .with_json(other.to_string())),
    }
}

/// Coerce raw text into the scalar named by `descriptor`.
///
/// Anything other than a scalar descriptor has no coercion rule.
pub fn coerce_descriptor(
    text: &str,
    descriptor: &TypeDescriptor,
    config: &MapperConfig,
) -> MappingResult<Scalar> {
    match descriptor {
        TypeDescriptor::Scalar(kind) => coerce_text(text, *kind, config),
        other => Err(MappingError::unsupported_type(format!(
            "No coercion rule maps JSON text to {}",
            other
        ))
        .with_json(text)),
    }
}

fn string_from_value(value: &JsonValue, config: &MapperConfig) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        _ if config.empty_array_as_empty_string && is_empty_array(value) => {
            debug!("empty JSON array mapped to an empty string");
            String::new()
        }
        other => other.to_string(),
    }
}

/// Parse `text` with the canonical parser of `kind`.
pub fn parse_scalar(text: &str, kind: ScalarKind) -> MappingResult<Scalar> {
    match kind {
        ScalarKind::String => Ok(Scalar::String(text.to_string())),
        ScalarKind::Boolean => parse_boolean(text).map(Scalar::Boolean),
        ScalarKind::Integer => text
            .parse::<i32>()
            .map(Scalar::Integer)
            .map_err(|e| failure(text, kind, e)),
        ScalarKind::Long => text
            .parse::<i64>()
            .map(Scalar::Long)
            .map_err(|e| failure(text, kind, e)),
        ScalarKind::Float => text
            .parse::<f32>()
            .map(Scalar::Float)
            .map_err(|e| failure(text, kind, e)),
        ScalarKind::Double => text
            .parse::<f64>()
            .map(Scalar::Double)
            .map_err(|e| failure(text, kind, e)),
        ScalarKind::BigInteger => BigInt::from_str(text)
            .map(Scalar::BigInteger)
            .map_err(|e| failure(text, kind, e)),
        ScalarKind::BigDecimal => BigDecimal::from_str(text)
            .map(Scalar::BigDecimal)
            .map_err(|e| failure(text, kind, e)),
    }
}

fn parse_boolean(text: &str) -> MappingResult<bool> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(MappingError::coercion(format!("Unable to map '{}' to Boolean", text)).with_json(text))
    }
}

fn failure(text: &str, kind: ScalarKind, cause: impl StdError + Send + Sync + 'static) -> MappingError {
    MappingError::coercion(format!("Unable to map '{}' to {}", text, kind))
        .with_json(text)
        .with_source(cause)
}

pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

// ==================== Encoding ====================

/// Encode a scalar as a JSON value.
///
/// Arbitrary-precision values are narrowed: integers to their low 64 bits,
/// decimals to the nearest `f64`.
pub fn scalar_to_json(scalar: &Scalar) -> MappingResult<JsonValue> {
    match scalar {
        Scalar::String(v) => Ok(JsonValue::String(v.clone())),
        Scalar::Boolean(v) => Ok(JsonValue::Bool(*v)),
        Scalar::Integer(v) => Ok(JsonValue::from(*v)),
        Scalar::Long(v) => Ok(JsonValue::from(*v)),
        Scalar::Float(v) => float_to_json(*v),
        Scalar::Double(v) => double_to_json(*v),
        Scalar::BigInteger(v) => Ok(JsonValue::from(narrow_big_integer(v))),
        Scalar::BigDecimal(v) => double_to_json(widen_big_decimal(v)?),
    }
}

/// Low 64 bits of `value` in two's complement.
pub fn narrow_big_integer(value: &BigInt) -> i64 {
    let (sign, digits) = value.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0) as i64;
    if sign == Sign::Minus {
        low.wrapping_neg()
    } else {
        low
    }
}

/// Nearest `f64` to `value`; fails when out of range.
pub fn widen_big_decimal(value: &BigDecimal) -> MappingResult<f64> {
    match value.to_f64() {
        Some(widened) if widened.is_finite() => Ok(widened),
        _ => Err(MappingError::wrapped(format!(
            "BigDecimal {} does not fit in a double",
            value
        ))),
    }
}

fn float_to_json(value: f32) -> MappingResult<JsonValue> {
    if !value.is_finite() {
        return Err(MappingError::wrapped(format!(
            "Float {} has no JSON representation",
            value
        )));
    }
    // Display keeps the shortest text that reads back as the same f32
    let number: Number = serde_json::from_str(&value.to_string())?;
    Ok(JsonValue::Number(number))
}

fn double_to_json(value: f64) -> MappingResult<JsonValue> {
    Number::from_f64(value)
        .map(JsonValue::Number)
        .ok_or_else(|| MappingError::wrapped(format!("Double {} has no JSON representation", value)))
}
