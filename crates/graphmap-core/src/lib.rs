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

//! Graphmap Core
//!
//! Core data model and mapping machinery for graphmap:
//!
//! - [`descriptor`]: scalar kinds and runtime type descriptors
//! - [`coerce`]: scalar coercion rules, including the upstream string quirks
//! - [`normalize`]: repair of `{}` and `{"data": [...]}` where lists belong
//! - [`binding`]: the [`Mapped`] trait and field binding directives
//! - [`registry`]: per-type cache of scanned directives
//! - [`field`]: the [`JsonField`] codec implemented by every mappable type
//! - [`untyped`]: schema-less values
//!
//! Most users want the `graphmap` facade crate instead.

pub mod binding;
pub mod coerce;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod normalize;
pub mod registry;
pub mod untyped;

pub use binding::{composite_descriptor, construct, Binding, Mapped, TypeBuilder, TypeMetadata};
pub use coerce::{coerce_descriptor, coerce_text, coerce_value, is_empty_array, strip_enclosing_quotes};
pub use config::{MapperConfig, MapperConfigBuilder, DEFAULT_MAX_DEPTH};
pub use descriptor::{CompositeDescriptor, FieldInfo, Scalar, ScalarKind, TypeDescriptor};
pub use error::{MappingError, MappingErrorKind, MappingResult, MAX_JSON_PREVIEW};
pub use field::{expect_object, parse_json, JsonField, MapContext, MapKey};
pub use normalize::{normalize_list, normalize_list_text, ListShape, NormalizedList};
pub use registry::{CacheStatistics, TypeRegistry};
pub use untyped::UntypedValue;

/// Re-exported so callers can name the tree type without a direct dependency.
pub use serde_json::Value as JsonValue;
