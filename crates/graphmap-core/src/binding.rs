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

//! Binding directives for composite types.
//!
//! A composite type implements [`Mapped`] and registers each bound field
//! with a [`TypeBuilder`]. Fields are reached through accessor functions,
//! so private fields stay private and no reflection is involved.
//!
//! # Examples
//!
//! ```text
//! use graphmap_core::{Mapped, TypeBuilder};
//!
//! #[derive(Default)]
//! struct Photo {
//!     photo_id: Option<i64>,
//! }
//!
//! impl Mapped for Photo {
//!     fn construct() -> Option<Self> {
//!         Some(Self::default())
//!     }
//!
//!     fn describe(fields: &mut TypeBuilder<Self>) {
//!         fields
//!             .field("photo_id", |p| &p.photo_id, |p| &mut p.photo_id)
//!             .rename("id");
//!     }
//! }
//! ```

use crate::descriptor::{CompositeDescriptor, FieldInfo, TypeDescriptor};
use crate::error::{MappingError, MappingResult};
use crate::field::{expect_object, parse_json, JsonField, MapContext};
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::any::TypeId;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace, warn};

/// A composite type with binding directives.
pub trait Mapped: Sized + 'static {
    /// Name used in diagnostics. Defaults to the unqualified type name.
    fn type_name() -> &'static str {
        short_type_name::<Self>()
    }

    /// No-argument construction. `None` means the type cannot be built
    /// and every decode into it fails with a construction error.
    fn construct() -> Option<Self>;

    /// Register the bound fields, ancestors first.
    fn describe(fields: &mut TypeBuilder<Self>);
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

type DecodeFn<T> =
    Box<dyn Fn(&mut T, &JsonValue, &MapContext<'_>) -> MappingResult<()> + Send + Sync>;
type EncodeFn<T> = Box<dyn Fn(&T, &MapContext<'_>) -> MappingResult<JsonValue> + Send + Sync>;

/// One bound field of `T`.
pub struct Binding<T> {
    field: &'static str,
    external: &'static str,
    descriptor: TypeDescriptor,
    decode: DecodeFn<T>,
    encode: EncodeFn<T>,
}

impl<T> Binding<T> {
    /// Bind to a JSON key other than the field name.
    pub fn rename(&mut self, external: &'static str) -> &mut Self {
        self.external = external;
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn external(&self) -> &'static str {
        self.external
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn info(&self) -> FieldInfo {
        FieldInfo {
            field: self.field,
            external: self.external,
            descriptor: self.descriptor.clone(),
            element: self.descriptor.element().cloned(),
        }
    }

    /// Decode `value` into this field of `target`.
    pub fn decode_into(
        &self,
        target: &mut T,
        value: &JsonValue,
        cx: &MapContext<'_>,
    ) -> MappingResult<()> {
        (self.decode)(target, value, cx)
    }

    /// Encode this field of `source`.
    pub fn encode_from(&self, source: &T, cx: &MapContext<'_>) -> MappingResult<JsonValue> {
        (self.encode)(source, cx)
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("field", &self.field)
            .field("external", &self.external)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Collects the binding directives of `T`.
pub struct TypeBuilder<T> {
    bindings: Vec<Binding<T>>,
}

impl<T: Mapped> TypeBuilder<T> {
    fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind an optional field. The external name defaults to `name`.
    ///
    /// A JSON `null` clears the field; a missing key leaves it untouched.
    pub fn field<F: JsonField>(
        &mut self,
        name: &'static str,
        get: fn(&T) -> &Option<F>,
        get_mut: fn(&mut T) -> &mut Option<F>,
    ) -> &mut Binding<T> {
        let decode: DecodeFn<T> = Box::new(
            move |target: &mut T, value: &JsonValue, cx: &MapContext<'_>| -> MappingResult<()> {
                let decoded = if value.is_null() {
                    None
                } else {
                    Some(F::from_json(value, cx)?)
                };
                *get_mut(target) = decoded;
                Ok(())
            },
        );
        let encode: EncodeFn<T> = Box::new(
            move |source: &T, cx: &MapContext<'_>| -> MappingResult<JsonValue> {
                match get(source) {
                    Some(value) => value.to_json(cx),
                    None => Ok(JsonValue::Null),
                }
            },
        );
        self.bindings.push(Binding {
            field: name,
            external: name,
            descriptor: F::descriptor(),
            decode,
            encode,
        });
        let last = self.bindings.len() - 1;
        &mut self.bindings[last]
    }

    /// Splice in every directive of an embedded ancestor `P`.
    pub fn inherit<P: Mapped>(
        &mut self,
        get: fn(&T) -> &P,
        get_mut: fn(&mut T) -> &mut P,
    ) -> &mut Self {
        let mut ancestor = TypeBuilder::<P>::new();
        P::describe(&mut ancestor);
        for binding in ancestor.bindings {
            let Binding {
                field,
                external,
                descriptor,
                decode,
                encode,
            } = binding;
            self.bindings.push(Binding {
                field,
                external,
                descriptor,
                decode: Box::new(
                    move |target: &mut T, value: &JsonValue, cx: &MapContext<'_>| {
                        decode(get_mut(target), value, cx)
                    },
                ),
                encode: Box::new(move |source: &T, cx: &MapContext<'_>| encode(get(source), cx)),
            });
        }
        self
    }
}

/// Scanned directives of one composite type.
pub struct TypeMetadata<T> {
    name: &'static str,
    bindings: Vec<Binding<T>>,
}

impl<T: Mapped> TypeMetadata<T> {
    /// Run `T::describe` and keep the first directive per external name.
    pub fn scan() -> Self {
        let mut builder = TypeBuilder::<T>::new();
        T::describe(&mut builder);

        let mut seen = HashSet::new();
        let mut bindings = Vec::with_capacity(builder.bindings.len());
        for binding in builder.bindings {
            if seen.insert(binding.external) {
                bindings.push(binding);
            } else {
                warn!(
                    type_name = T::type_name(),
                    field = binding.field,
                    external = binding.external,
                    "duplicate external name; keeping the first directive"
                );
            }
        }
        debug!(
            type_name = T::type_name(),
            fields = bindings.len(),
            "scanned binding directives"
        );
        Self {
            name: T::type_name(),
            bindings,
        }
    }
}

impl<T> TypeMetadata<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bindings(&self) -> &[Binding<T>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Directive bound to `external`.
    pub fn binding(&self, external: &str) -> Option<&Binding<T>> {
        self.bindings.iter().find(|b| b.external == external)
    }

    /// Scanner rows: `(external, field, type)` in declaration order.
    pub fn fields(&self) -> Vec<FieldInfo> {
        self.bindings.iter().map(Binding::info).collect()
    }
}

impl<T> fmt::Debug for TypeMetadata<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMetadata")
            .field("name", &self.name)
            .field("bindings", &self.bindings)
            .finish()
    }
}

fn composite_fields<T: Mapped>() -> Vec<FieldInfo> {
    TypeMetadata::<T>::scan().fields()
}

/// Descriptor of a composite type.
pub fn composite_descriptor<T: Mapped>() -> TypeDescriptor {
    TypeDescriptor::Composite(CompositeDescriptor {
        name: T::type_name(),
        type_id: TypeId::of::<T>(),
        fields: composite_fields::<T>,
        constructible: composite_constructible::<T>,
    })
}

fn composite_constructible<T: Mapped>() -> bool {
    T::construct().is_some()
}

/// Construct a bare instance of `T`.
pub fn construct<T: Mapped>() -> MappingResult<T> {
    T::construct().ok_or_else(|| no_constructor(T::type_name()))
}

pub(crate) fn no_constructor(name: &str) -> MappingError {
    MappingError::construction(format!(
        "Unable to create an instance of {}; it must provide a no-argument constructor",
        name
    ))
}

fn no_bound_fields<T: Mapped>(json: &str) -> MappingError {
    MappingError::unsupported_type(format!(
        "{} has no bound fields; only an empty object can be mapped to it",
        T::type_name()
    ))
    .with_json(json)
}

impl<T: Mapped> JsonField for T {
    fn descriptor() -> TypeDescriptor {
        composite_descriptor::<T>()
    }

    fn from_json(value: &JsonValue, cx: &MapContext<'_>) -> MappingResult<Self> {
        let metadata = cx.registry().metadata::<T>();
        if metadata.is_empty() && !value.is_object() && !value.is_array() {
            return Err(no_bound_fields::<T>(&value.to_string()));
        }
        let members = expect_object(value, T::type_name())?;
        if metadata.is_empty() {
            if members.is_empty() {
                return construct::<T>();
            }
            return Err(no_bound_fields::<T>(&value.to_string()));
        }

        let cx = cx.descend()?;
        let mut instance = construct::<T>()?;
        for binding in metadata.bindings() {
            match members.get(binding.external()) {
                Some(raw) => binding
                    .decode_into(&mut instance, raw, &cx)
                    .map_err(|e| e.in_field(T::type_name(), binding.field()))?,
                None => trace!(
                    type_name = T::type_name(),
                    field = binding.field(),
                    key = binding.external(),
                    "key absent; field left unset"
                ),
            }
        }
        Ok(instance)
    }

    fn from_text(text: &str, cx: &MapContext<'_>) -> MappingResult<Self> {
        match parse_json(text) {
            Ok(value) => Self::from_json(&value, cx),
            Err(_) if cx.registry().metadata::<T>().is_empty() => {
                Err(no_bound_fields::<T>(text))
            }
            Err(err) => Err(err),
        }
    }

    fn to_json(&self, cx: &MapContext<'_>) -> MappingResult<JsonValue> {
        let cx = cx.descend()?;
        let metadata = cx.registry().metadata::<T>();
        let mut object = JsonMap::with_capacity(metadata.len());
        for binding in metadata.bindings() {
            let value = binding
                .encode_from(self, &cx)
                .map_err(|e| e.in_field(T::type_name(), binding.field()))?;
            object.insert(binding.external().to_string(), value);
        }
        Ok(JsonValue::Object(object))
    }
}
