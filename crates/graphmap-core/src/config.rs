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

//! Mapper configuration.

/// Default maximum nesting depth for decoding and encoding.
///
/// Matches the recursion limit of the JSON parser, so parsed input never
/// trips it; deeply nested object graphs built in code can.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for the object mapper.
///
/// The two string leniencies are upstream API quirks: they are on by
/// default and can be switched off individually.
///
/// # Examples
///
/// ```text
/// use graphmap_core::MapperConfig;
///
/// // Defaults: depth limit 128, both string leniencies on, strict envelopes
/// let config = MapperConfig::default();
///
/// // Accept `{"data": [...], "paging": {...}}` as a list
/// let lenient = MapperConfig::builder()
///     .lenient_data_envelope(true)
///     .build();
///
/// // No depth limit (use with caution)
/// let unlimited = MapperConfig::builder().unlimited().build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Maximum nesting depth (default: 128)
    ///
    /// Set to `None` to disable.
    pub max_depth: Option<usize>,

    /// Decode a zero-length JSON array into `""` for string targets
    /// (default: true)
    pub empty_array_as_empty_string: bool,

    /// Strip exactly one pair of enclosing double quotes from raw top-level
    /// text decoded as a string (default: true)
    pub strip_enclosing_quotes: bool,

    /// Treat an object holding a `data` array plus sibling keys (e.g.
    /// `paging`) as a connection envelope (default: false)
    ///
    /// When false, only an object whose sole key is `data` is unwrapped.
    pub lenient_data_envelope: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            empty_array_as_empty_string: true,
            strip_enclosing_quotes: true,
            lenient_data_envelope: false,
        }
    }
}

impl MapperConfig {
    /// Create a new builder for configuring the mapper
    pub fn builder() -> MapperConfigBuilder {
        MapperConfigBuilder::default()
    }

    /// True if `depth` is past the configured limit.
    pub fn exceeds_depth(&self, depth: usize) -> bool {
        matches!(self.max_depth, Some(max) if depth > max)
    }
}

/// Builder for `MapperConfig`
///
/// # Examples
///
/// ```text
/// use graphmap_core::MapperConfig;
///
/// let strict = MapperConfig::builder()
///     .max_depth(16)
///     .empty_array_as_empty_string(false)
///     .strip_enclosing_quotes(false)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct MapperConfigBuilder {
    max_depth: Option<usize>,
    empty_array_as_empty_string: bool,
    strip_enclosing_quotes: bool,
    lenient_data_envelope: bool,
}

impl Default for MapperConfigBuilder {
    fn default() -> Self {
        let defaults = MapperConfig::default();
        Self {
            max_depth: defaults.max_depth,
            empty_array_as_empty_string: defaults.empty_array_as_empty_string,
            strip_enclosing_quotes: defaults.strip_enclosing_quotes,
            lenient_data_envelope: defaults.lenient_data_envelope,
        }
    }
}

impl MapperConfigBuilder {
    /// Set the maximum nesting depth
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Remove the depth limit
    pub fn unlimited(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Toggle the empty-array-as-empty-string leniency
    pub fn empty_array_as_empty_string(mut self, enabled: bool) -> Self {
        self.empty_array_as_empty_string = enabled;
        self
    }

    /// Toggle the enclosing-quote strip for raw string text
    pub fn strip_enclosing_quotes(mut self, enabled: bool) -> Self {
        self.strip_enclosing_quotes = enabled;
        self
    }

    /// Toggle acceptance of `data` envelopes with sibling keys
    pub fn lenient_data_envelope(mut self, enabled: bool) -> Self {
        self.lenient_data_envelope = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> MapperConfig {
        MapperConfig {
            max_depth: self.max_depth,
            empty_array_as_empty_string: self.empty_array_as_empty_string,
            strip_enclosing_quotes: self.strip_enclosing_quotes,
            lenient_data_envelope: self.lenient_data_envelope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== MapperConfig tests ====================

    #[test]
    fn test_mapper_config_default() {
        let config = MapperConfig::default();
        assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
        assert_eq!(config.max_depth, Some(128));
        assert!(config.empty_array_as_empty_string);
        assert!(config.strip_enclosing_quotes);
        assert!(!config.lenient_data_envelope);
    }

    #[test]
    fn test_mapper_config_debug() {
        let debug = format!("{:?}", MapperConfig::default());
        assert!(debug.contains("MapperConfig"));
        assert!(debug.contains("lenient_data_envelope"));
    }

    #[test]
    fn test_exceeds_depth() {
        let config = MapperConfig::builder().max_depth(3).build();
        assert!(!config.exceeds_depth(3));
        assert!(config.exceeds_depth(4));

        let unlimited = MapperConfig::builder().unlimited().build();
        assert!(!unlimited.exceeds_depth(usize::MAX));
    }

    // ==================== MapperConfigBuilder tests ====================

    #[test]
    fn test_builder_default_matches_default() {
        assert_eq!(MapperConfig::builder().build(), MapperConfig::default());
    }

    #[test]
    fn test_builder_chaining() {
        let config = MapperConfig::builder()
            .max_depth(16)
            .empty_array_as_empty_string(false)
            .strip_enclosing_quotes(false)
            .lenient_data_envelope(true)
            .build();
        assert_eq!(config.max_depth, Some(16));
        assert!(!config.empty_array_as_empty_string);
        assert!(!config.strip_enclosing_quotes);
        assert!(config.lenient_data_envelope);
    }

    #[test]
    fn test_builder_unlimited_after_limit() {
        let config = MapperConfig::builder().max_depth(5).unlimited().build();
        assert_eq!(config.max_depth, None);
    }
}
