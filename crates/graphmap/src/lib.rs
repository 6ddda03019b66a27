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

//! # graphmap
//!
//! Typed mapping of Graph-API-style JSON responses.
//!
//! Upstream responses are not always well-formed for the types they are
//! mapped onto: empty lists arrive as `{}`, lists arrive wrapped in a
//! `{"data": [...]}` envelope, strings arrive as `[]`, and some methods
//! return bare tokens that are not legal JSON documents. graphmap decodes
//! all of them into plain Rust types described by binding directives.
//!
//! ## Quick Start
//!
//! ```text
//! use graphmap::{Mapped, TypeBuilder};
//!
//! #[derive(Debug, Default)]
//! struct User {
//!     uid: Option<i64>,
//!     name: Option<String>,
//! }
//!
//! impl Mapped for User {
//!     fn construct() -> Option<Self> {
//!         Some(Self::default())
//!     }
//!
//!     fn describe(fields: &mut TypeBuilder<Self>) {
//!         fields.field("uid", |u| &u.uid, |u| &mut u.uid);
//!         fields.field("name", |u| &u.name, |u| &mut u.name);
//!     }
//! }
//!
//! let user: User = graphmap::to_object(r#"{"uid": 1234, "name": "Test Person"}"#)?;
//! let friends: Vec<User> = graphmap::to_list(r#"{"data": []}"#)?;
//! let json = graphmap::to_json(&user)?;
//! ```
//!
//! ## Modules
//!
//! - [`mapping`]: data model, coercion, normalization and binding machinery
//! - [`json`]: the [`JsonMapper`] entry points
//!
//! The free functions in this crate use a process-wide default mapper.
//! Build a [`JsonMapper`] directly for non-default configuration.

pub use graphmap_core::{
    // Binding directives
    composite_descriptor,
    Binding,
    Mapped,
    TypeBuilder,
    TypeMetadata,
    TypeRegistry,
    // Configuration
    MapperConfig,
    MapperConfigBuilder,
    // Data model
    FieldInfo,
    JsonField,
    JsonValue,
    MapKey,
    Scalar,
    ScalarKind,
    TypeDescriptor,
    UntypedValue,
    // Errors
    MappingError,
    MappingErrorKind,
    MappingResult,
};
pub use graphmap_json::JsonMapper;

mod error_ext;
pub use error_ext::MappingResultExt;

pub mod mapping {
    //! Core data model and mapping machinery
    pub use graphmap_core::*;
}

pub mod json {
    //! JSON text entry points
    pub use graphmap_json::{decode_with_descriptor, JsonMapper};
}

use indexmap::IndexMap;
use once_cell::sync::Lazy;

static DEFAULT_MAPPER: Lazy<JsonMapper> = Lazy::new(JsonMapper::new);

/// The process-wide mapper behind the free functions.
pub fn default_mapper() -> &'static JsonMapper {
    &DEFAULT_MAPPER
}

/// Decode a single value of type `T` with the default mapper.
///
/// See [`JsonMapper::to_object`].
pub fn to_object<T: JsonField>(json: &str) -> MappingResult<T> {
    DEFAULT_MAPPER.to_object(json)
}

/// Decode a list of `T` with the default mapper.
///
/// See [`JsonMapper::to_list`].
pub fn to_list<T: JsonField>(json: &str) -> MappingResult<Vec<T>> {
    DEFAULT_MAPPER.to_list(json)
}

/// Decode a JSON object without a target type.
pub fn to_untyped_object(json: &str) -> MappingResult<IndexMap<String, UntypedValue>> {
    DEFAULT_MAPPER.to_untyped_object(json)
}

/// Decode a JSON list without a target element type.
pub fn to_untyped_list(json: &str) -> MappingResult<Vec<UntypedValue>> {
    DEFAULT_MAPPER.to_untyped_list(json)
}

/// Decode against a descriptor chosen at runtime.
pub fn decode_as(json: &str, descriptor: &TypeDescriptor) -> MappingResult<UntypedValue> {
    DEFAULT_MAPPER.decode_as(json, descriptor)
}

/// Encode `value` as compact JSON text.
pub fn to_json<T: JsonField>(value: &T) -> MappingResult<String> {
    DEFAULT_MAPPER.to_json(value)
}

/// Encode `value` as indented JSON text.
pub fn to_json_pretty<T: JsonField>(value: &T) -> MappingResult<String> {
    DEFAULT_MAPPER.to_json_pretty(value)
}

/// Encode `value` as a JSON tree.
pub fn to_json_value<T: JsonField>(value: &T) -> MappingResult<JsonValue> {
    DEFAULT_MAPPER.to_json_value(value)
}
