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

//! Shared test fixtures for graphmap.
//!
//! - [`types`]: canonical mapped types (plain, renamed, inherited, nested,
//!   id-keyed, unconstructible)
//! - [`samples`]: upstream JSON responses, including `{}` for empty lists,
//!   `data` envelopes, bare tokens, and `[]` for empty strings
//!
//! # Quick Start
//!
//! ```text
//! use graphmap_test::{samples, types::BasicUser};
//!
//! let user: BasicUser = graphmap::to_object(samples::BASIC_USER)?;
//! ```

pub mod samples;
pub mod types;

use graphmap_core::{FieldInfo, Mapped, TypeRegistry};

/// Type alias for a list of named scanner functions.
pub type FieldTableList = Vec<(&'static str, fn(&TypeRegistry) -> Vec<FieldInfo>)>;

fn table<T: Mapped>(registry: &TypeRegistry) -> Vec<FieldInfo> {
    registry.fields_of::<T>()
}

/// Scanner rows of every fixture type, by type name.
pub fn field_tables() -> FieldTableList {
    use types::*;
    let mut tables: FieldTableList = Vec::new();
    tables.push(("BasicUser", table::<BasicUser>));
    tables.push(("PrivateUser", table::<PrivateUser>));
    tables.push(("Photo", table::<Photo>));
    tables.push(("UserWithPhotos", table::<UserWithPhotos>));
    tables.push(("Affiliation", table::<Affiliation>));
    tables.push(("UserWithAffiliations", table::<UserWithAffiliations>));
    tables.push(("GraphObject", table::<GraphObject>));
    tables.push(("CategorizedType", table::<CategorizedType>));
    tables.push(("Video", table::<Video>));
    tables.push(("Measurement", table::<Measurement>));
    tables.push(("UserDirectory", table::<UserDirectory>));
    tables.push(("NoConstructor", table::<NoConstructor>));
    tables.push(("Marker", table::<Marker>));
    tables
}
