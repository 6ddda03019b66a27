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

//! Error types for JSON mapping.
//!
//! Every failure produced while decoding or encoding funnels into
//! [`MappingError`]. The [`MappingErrorKind`] tells callers whether the
//! problem lies in the data (a malformed upstream response) or in the
//! program (a type that can never be mapped).

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Maximum number of characters of offending JSON kept on an error.
pub const MAX_JSON_PREVIEW: usize = 512;

/// The kind of error that occurred during mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingErrorKind {
    /// Blank or whitespace-only JSON text.
    EmptyInput,
    /// A JSON array was handed to object decoding.
    ArrayMismatch,
    /// A JSON scalar was found where an object or array was required.
    ObjectMismatch,
    /// List decoding met an object that is neither `{}` nor a `data` envelope.
    ShapeMismatch,
    /// A scalar could not be parsed into the requested type.
    Coercion,
    /// The target type has no coercion rule.
    UnsupportedType,
    /// A map with non-string keys was encoded.
    KeyType,
    /// A list was requested without declaring its element type.
    MissingElementType,
    /// The target type could not be constructed.
    Construction,
    /// Nesting depth limit exceeded.
    LimitExceeded,
    /// Any other lower-level failure (JSON syntax, number range).
    Wrapped,
}

impl fmt::Display for MappingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "EmptyInputError"),
            Self::ArrayMismatch => write!(f, "ArrayMismatchError"),
            Self::ObjectMismatch => write!(f, "ObjectMismatchError"),
            Self::ShapeMismatch => write!(f, "ShapeMismatchError"),
            Self::Coercion => write!(f, "CoercionError"),
            Self::UnsupportedType => write!(f, "UnsupportedTypeError"),
            Self::KeyType => write!(f, "KeyTypeError"),
            Self::MissingElementType => write!(f, "MissingElementTypeError"),
            Self::Construction => write!(f, "ConstructionError"),
            Self::LimitExceeded => write!(f, "LimitExceededError"),
            Self::Wrapped => write!(f, "WrappedFailure"),
        }
    }
}

/// An error that occurred while mapping between JSON and typed values.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}{}", render_context(.context))]
pub struct MappingError {
    /// The kind of error.
    pub kind: MappingErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// The offending JSON fragment, truncated to [`MAX_JSON_PREVIEW`].
    pub json: Option<String>,
    /// Where the failure happened (e.g., "field 'uid' of BasicUser").
    pub context: Option<String>,
    /// Lower-level cause, kept for diagnostics.
    #[source]
    pub source: Option<Arc<dyn StdError + Send + Sync>>,
}

fn render_context(context: &Option<String>) -> String {
    match context {
        Some(context) => format!(" (in {})", context),
        None => String::new(),
    }
}

impl MappingError {
    /// Create a new error.
    pub fn new(kind: MappingErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            json: None,
            context: None,
            source: None,
        }
    }

    /// Attach the offending JSON fragment.
    pub fn with_json(mut self, json: impl AsRef<str>) -> Self {
        self.json = Some(preview(json.as_ref()));
        self
    }

    /// Attach the offending JSON fragment unless a more precise one is
    /// already present.
    pub fn or_json(self, json: impl AsRef<str>) -> Self {
        if self.json.is_some() {
            self
        } else {
            self.with_json(json)
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach the lower-level cause.
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Record the owning type and field. The innermost field wins, so a
    /// failure deep in a graph keeps pointing at the field that broke.
    pub fn in_field(self, owner: &str, field: &str) -> Self {
        if self.context.is_some() {
            self
        } else {
            self.with_context(format!("field '{}' of {}", field, owner))
        }
    }

    /// True for failures caused by the program rather than the data.
    ///
    /// These are static: the same type will fail the same way for every
    /// input, so callers should not treat them as bad upstream responses.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self.kind,
            MappingErrorKind::UnsupportedType
                | MappingErrorKind::KeyType
                | MappingErrorKind::MissingElementType
                | MappingErrorKind::Construction
        )
    }

    /// Mapping is deterministic; no failure is worth retrying.
    pub fn is_retryable(&self) -> bool {
        false
    }

    // Convenience constructors for each error kind
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::EmptyInput, message)
    }

    pub fn array_mismatch(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::ArrayMismatch, message)
    }

    pub fn object_mismatch(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::ObjectMismatch, message)
    }

    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::ShapeMismatch, message)
    }

    pub fn coercion(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::Coercion, message)
    }

    pub fn unsupported_type(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::UnsupportedType, message)
    }

    pub fn key_type(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::KeyType, message)
    }

    pub fn missing_element_type(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::MissingElementType, message)
    }

    pub fn construction(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::Construction, message)
    }

    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::LimitExceeded, message)
    }

    pub fn wrapped(message: impl Into<String>) -> Self {
        Self::new(MappingErrorKind::Wrapped, message)
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        MappingError::wrapped(format!("Unable to parse JSON: {}", err)).with_source(err)
    }
}

/// Truncate `json` to [`MAX_JSON_PREVIEW`] characters on a char boundary.
fn preview(json: &str) -> String {
    match json.char_indices().nth(MAX_JSON_PREVIEW) {
        Some((cut, _)) => format!("{}...", &json[..cut]),
        None => json.to_string(),
    }
}

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;
