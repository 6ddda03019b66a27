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

//! Runtime type descriptors.
//!
//! A [`TypeDescriptor`] names the shape a piece of JSON should be decoded
//! into. Leaf types are a closed set of [`ScalarKind`]s; composite types
//! carry a function that yields their binding directives on demand, so
//! descriptors for recursive types stay finite.

use crate::binding::no_constructor;
use crate::error::MappingResult;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::any::TypeId;
use std::fmt;

/// The supported leaf types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Boolean,
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    BigInteger,
    BigDecimal,
}

impl ScalarKind {
    /// All scalar kinds, in declaration order.
    pub const ALL: [ScalarKind; 8] = [
        ScalarKind::String,
        ScalarKind::Boolean,
        ScalarKind::Integer,
        ScalarKind::Long,
        ScalarKind::Float,
        ScalarKind::Double,
        ScalarKind::BigInteger,
        ScalarKind::BigDecimal,
    ];

    /// True for the six numeric kinds.
    pub fn is_numeric(self) -> bool {
        !matches!(self, ScalarKind::String | ScalarKind::Boolean)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::String => "String",
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Integer => "Integer",
            ScalarKind::Long => "Long",
            ScalarKind::Float => "Float",
            ScalarKind::Double => "Double",
            ScalarKind::BigInteger => "BigInteger",
            ScalarKind::BigDecimal => "BigDecimal",
        };
        f.write_str(name)
    }
}

/// A decoded leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Boolean(bool),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
}

impl Scalar {
    /// The kind of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::String(_) => ScalarKind::String,
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::Integer(_) => ScalarKind::Integer,
            Scalar::Long(_) => ScalarKind::Long,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Double(_) => ScalarKind::Double,
            Scalar::BigInteger(_) => ScalarKind::BigInteger,
            Scalar::BigDecimal(_) => ScalarKind::BigDecimal,
        }
    }

    /// Borrow the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(v) => f.write_str(v),
            Scalar::Boolean(v) => write!(f, "{}", v),
            Scalar::Integer(v) => write!(f, "{}", v),
            Scalar::Long(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Double(v) => write!(f, "{}", v),
            Scalar::BigInteger(v) => write!(f, "{}", v),
            Scalar::BigDecimal(v) => write!(f, "{}", v),
        }
    }
}

/// One row of the scanner's output for a composite type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// Rust-side field name.
    pub field: &'static str,
    /// JSON key the field binds to.
    pub external: &'static str,
    /// Declared type of the field.
    pub descriptor: TypeDescriptor,
    /// Element type for list fields.
    pub element: Option<TypeDescriptor>,
}

/// Descriptor of a composite (struct) type.
#[derive(Clone, Copy)]
pub struct CompositeDescriptor {
    pub name: &'static str,
    pub type_id: TypeId,
    /// Yields the binding directives, ancestors first.
    pub fields: fn() -> Vec<FieldInfo>,
    /// True when the type has a no-argument constructor.
    pub constructible: fn() -> bool,
}

impl CompositeDescriptor {
    /// Binding directives of this type.
    pub fn fields(&self) -> Vec<FieldInfo> {
        (self.fields)()
    }

    /// Fails with a construction error when no instance can be created.
    pub fn require_constructible(&self) -> MappingResult<()> {
        if (self.constructible)() {
            Ok(())
        } else {
            Err(no_constructor(self.name))
        }
    }
}

impl PartialEq for CompositeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl fmt::Debug for CompositeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The target shape of a decode.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Scalar(ScalarKind),
    /// Ordered list; `None` when the element type was never declared.
    List(Option<Box<TypeDescriptor>>),
    /// String-keyed map of values.
    Map(Box<TypeDescriptor>),
    /// Schema-less value.
    Untyped,
    Composite(CompositeDescriptor),
}

impl TypeDescriptor {
    /// List of `element`.
    pub fn list_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::List(Some(Box::new(element)))
    }

    /// Map of string to `value`.
    pub fn map_of(value: TypeDescriptor) -> Self {
        TypeDescriptor::Map(Box::new(value))
    }

    /// Element type of a list descriptor.
    pub fn element(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::List(Some(element)) => Some(element),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeDescriptor::Scalar(_))
    }

    /// Human-readable type name, e.g. `List<Photo>`.
    pub fn name(&self) -> String {
        match self {
            TypeDescriptor::Scalar(kind) => kind.to_string(),
            TypeDescriptor::List(Some(element)) => format!("List<{}>", element.name()),
            TypeDescriptor::List(None) => "List<?>".to_string(),
            TypeDescriptor::Map(value) => format!("Map<String, {}>", value.name()),
            TypeDescriptor::Untyped => "Object".to_string(),
            TypeDescriptor::Composite(composite) => composite.name.to_string(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
