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

//! Per-type cache of scanned binding directives.
//!
//! # Thread Safety
//!
//! Uses `DashMap` for concurrent access. Scanning is pure, so two threads
//! racing on the same type both compute an equivalent value and the last
//! insert wins; no lock is held while scanning.

use crate::binding::{Mapped, TypeMetadata};
use crate::descriptor::FieldInfo;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStatistics {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that had to scan.
    pub misses: u64,
    /// Number of cached types.
    pub size: usize,
}

impl CacheStatistics {
    /// Calculate cache hit rate (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Registry of scanned types, keyed by type identity.
#[derive(Default)]
pub struct TypeRegistry {
    entries: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanned directives of `T`, computed on first use.
    pub fn metadata<T: Mapped>(&self) -> Arc<TypeMetadata<T>> {
        let id = TypeId::of::<T>();
        let cached = self.entries.get(&id).map(|entry| Arc::clone(entry.value()));
        if let Some(entry) = cached {
            if let Ok(metadata) = entry.downcast::<TypeMetadata<T>>() {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return metadata;
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let metadata = Arc::new(TypeMetadata::<T>::scan());
        self.entries.insert(id, metadata.clone());
        metadata
    }

    /// Scanner rows of `T`.
    pub fn fields_of<T: Mapped>(&self) -> Vec<FieldInfo> {
        self.metadata::<T>().fields()
    }

    /// True if `T` has been scanned.
    pub fn contains<T: Mapped>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached type and reset the counters.
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn statistics(&self) -> CacheStatistics {
        CacheStatistics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.entries.len(),
        }
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("statistics", &self.statistics())
            .finish()
    }
}
