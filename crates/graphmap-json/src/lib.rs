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

//! Graphmap JSON
//!
//! Text-level entry points for graphmap. [`JsonMapper`] parses JSON text,
//! repairs list payloads, and decodes into:
//!
//! - typed values: any [`JsonField`](graphmap_core::JsonField), including
//!   [`Mapped`](graphmap_core::Mapped) composites
//! - untyped values: [`UntypedValue`](graphmap_core::UntypedValue) trees
//! - descriptor-driven values: a [`TypeDescriptor`](graphmap_core::TypeDescriptor)
//!   chosen at runtime, see [`decode_with_descriptor`]
//!
//! Encoding goes the other way through the same field bindings.
//!
//! # Example
//!
//! ```text
//! use graphmap_json::JsonMapper;
//!
//! let mapper = JsonMapper::new();
//! let users: Vec<BasicUser> = mapper.to_list(r#"{"data": [{"uid": 1}]}"#)?;
//! let text = mapper.to_json(&users)?;
//! ```

mod dynamic;
mod mapper;

pub use dynamic::decode_with_descriptor;
pub use mapper::JsonMapper;
