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

//! Error context helpers.
//!
//! [`MappingResultExt`] annotates failures as they propagate out of the
//! code that called the mapper, e.g. with the endpoint a response came from.
//!
//! # Examples
//!
//! ```text
//! use graphmap::{to_list, MappingResultExt};
//!
//! let friends: Vec<BasicUser> = to_list(&body).context("friends.get")?;
//! ```
//!
//! Context chains outermost first:
//!
//! ```text
//! let err = decode().context("inner").context("outer").unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("outer: inner"));
//! ```

use graphmap_core::MappingError;
use std::fmt;

/// Extension trait for adding context to mapping results.
///
/// Context is stored in the error's `context` field; the message is
/// left untouched.
pub trait MappingResultExt<T> {
    /// The error type of this result.
    type ErrorType;

    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T, MappingError>
    where
        C: fmt::Display;

    /// Add context computed only on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, MappingError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert a foreign error into a `MappingError`.
    fn map_err_to_mapping<F>(self, f: F) -> Result<T, MappingError>
    where
        F: FnOnce(Self::ErrorType) -> MappingError;
}

impl<T> MappingResultExt<T> for Result<T, MappingError> {
    type ErrorType = MappingError;

    fn context<C>(self, context: C) -> Result<T, MappingError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, MappingError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(e, f().to_string()))
    }

    fn map_err_to_mapping<F>(self, _f: F) -> Result<T, MappingError>
    where
        F: FnOnce(Self::ErrorType) -> MappingError,
    {
        self
    }
}

impl<T> MappingResultExt<T> for Result<T, serde_json::Error> {
    type ErrorType = serde_json::Error;

    fn context<C>(self, context: C) -> Result<T, MappingError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| MappingError::from(e).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, MappingError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| MappingError::from(e).with_context(f().to_string()))
    }

    fn map_err_to_mapping<F>(self, f: F) -> Result<T, MappingError>
    where
        F: FnOnce(Self::ErrorType) -> MappingError,
    {
        self.map_err(f)
    }
}

/// Prefix `new_context` onto any existing context as `new: existing`.
fn add_context(error: MappingError, new_context: String) -> MappingError {
    if new_context.is_empty() {
        return error;
    }
    let context = match &error.context {
        Some(existing) => format!("{}: {}", new_context, existing),
        None => new_context,
    };
    error.with_context(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmap_core::MappingErrorKind;

    // ==================== context() tests ====================

    #[test]
    fn test_context_on_error() {
        let result: Result<(), MappingError> = Err(MappingError::coercion("bad number"));
        let err = result.context("users.getInfo").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("users.getInfo"));
        assert_eq!(err.kind, MappingErrorKind::Coercion);
        assert_eq!(err.message, "bad number");
    }

    #[test]
    fn test_context_on_ok() {
        let result: Result<i32, MappingError> = Ok(42);
        assert_eq!(result.context("unused").unwrap(), 42);
    }

    #[test]
    fn test_context_chaining() {
        let result: Result<(), MappingError> =
            Err(MappingError::coercion("bad").in_field("User", "uid"));
        let err = result
            .context("users.getInfo")
            .context("loading profile")
            .unwrap_err();
        assert_eq!(
            err.context.as_deref(),
            Some("loading profile: users.getInfo: field 'uid' of User")
        );
    }

    #[test]
    fn test_empty_context_is_ignored() {
        let result: Result<(), MappingError> = Err(MappingError::coercion("bad"));
        let err = result.context("").unwrap_err();
        assert!(err.context.is_none());
    }

    // ==================== with_context() tests ====================

    #[test]
    fn test_with_context_is_lazy() {
        let mut called = false;
        let result: Result<i32, MappingError> = Ok(1);
        let _ = result.with_context(|| {
            called = true;
            "never"
        });
        assert!(!called);
    }

    #[test]
    fn test_with_context_on_error() {
        let result: Result<(), MappingError> = Err(MappingError::shape_mismatch("no data"));
        let err = result
            .with_context(|| format!("page {}", 2))
            .unwrap_err();
        assert_eq!(err.context.as_deref(), Some("page 2"));
    }

    // ==================== foreign error tests ====================

    #[test]
    fn test_serde_json_error() {
        let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{");
        let err = result.context("raw body").unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::Wrapped);
        assert!(err.source.is_some());
        assert_eq!(err.context.as_deref(), Some("raw body"));
    }

    #[test]
    fn test_map_err_to_mapping() {
        let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("[1,");
        let err = result
            .map_err_to_mapping(|e| MappingError::shape_mismatch(e.to_string()))
            .unwrap_err();
        assert_eq!(err.kind, MappingErrorKind::ShapeMismatch);
    }
}
