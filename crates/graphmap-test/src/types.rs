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

//! Canonical mapped types.

use bigdecimal::BigDecimal;
use graphmap_core::{Mapped, TypeBuilder};
use num_bigint::BigInt;
use std::collections::BTreeMap;

/// A user with an id and a name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicUser {
    pub uid: Option<i64>,
    pub name: Option<String>,
}

impl Mapped for BasicUser {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.field("uid", |u| &u.uid, |u| &mut u.uid);
        fields.field("name", |u| &u.name, |u| &mut u.name);
    }
}

/// Same wire shape as [`BasicUser`], but the fields are private.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrivateUser {
    uid: Option<i64>,
    name: Option<String>,
}

impl PrivateUser {
    pub fn uid(&self) -> Option<i64> {
        self.uid
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Mapped for PrivateUser {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.field("uid", |u| &u.uid, |u| &mut u.uid);
        fields.field("name", |u| &u.name, |u| &mut u.name);
    }
}

/// A photo whose id is bound under a different key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Photo {
    pub photo_id: Option<i64>,
}

impl Mapped for Photo {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields
            .field("photo_id", |p| &p.photo_id, |p| &mut p.photo_id)
            .rename("id");
    }
}

/// A [`BasicUser`] extended with a list of photos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserWithPhotos {
    pub user: BasicUser,
    pub photos: Option<Vec<Photo>>,
}

impl Mapped for UserWithPhotos {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.inherit(|u| &u.user, |u| &mut u.user);
        fields.field("photos", |u| &u.photos, |u| &mut u.photos);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Affiliation {
    pub name: Option<String>,
    pub kind: Option<String>,
}

impl Mapped for Affiliation {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.field("name", |a| &a.name, |a| &mut a.name);
        fields.field("kind", |a| &a.kind, |a| &mut a.kind).rename("type");
    }
}

/// A [`BasicUser`] with a picture URL and affiliations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserWithAffiliations {
    pub user: BasicUser,
    pub big_picture_url: Option<String>,
    pub affiliations: Option<Vec<Affiliation>>,
}

impl Mapped for UserWithAffiliations {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.inherit(|u| &u.user, |u| &mut u.user);
        fields
            .field("big_picture_url", |u| &u.big_picture_url, |u| &mut u.big_picture_url)
            .rename("pic_big");
        fields.field("affiliations", |u| &u.affiliations, |u| &mut u.affiliations);
    }
}

/// Base of every Graph API object: just an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphObject {
    pub id: Option<String>,
}

impl Mapped for GraphObject {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.field("id", |o| &o.id, |o| &mut o.id);
    }
}

/// A named object with a category, e.g. the author of a post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedType {
    pub object: GraphObject,
    pub name: Option<String>,
    pub category: Option<String>,
}

impl Mapped for CategorizedType {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.inherit(|c| &c.object, |c| &mut c.object);
        fields.field("name", |c| &c.name, |c| &mut c.name);
        fields.field("category", |c| &c.category, |c| &mut c.category);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Video {
    pub object: GraphObject,
    pub from: Option<CategorizedType>,
    pub message: Option<String>,
    pub description: Option<String>,
    pub length: Option<i32>,
    pub created_time: Option<String>,
    pub updated_time: Option<String>,
}

impl Mapped for Video {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.inherit(|v| &v.object, |v| &mut v.object);
        fields.field("from", |v| &v.from, |v| &mut v.from);
        fields.field("message", |v| &v.message, |v| &mut v.message);
        fields.field("description", |v| &v.description, |v| &mut v.description);
        fields.field("length", |v| &v.length, |v| &mut v.length);
        fields.field("created_time", |v| &v.created_time, |v| &mut v.created_time);
        fields.field("updated_time", |v| &v.updated_time, |v| &mut v.updated_time);
    }
}

/// One field of every scalar kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurement {
    pub label: Option<String>,
    pub valid: Option<bool>,
    pub count: Option<i32>,
    pub total: Option<i64>,
    pub ratio: Option<f32>,
    pub mean: Option<f64>,
    pub exact_count: Option<BigInt>,
    pub exact_mean: Option<BigDecimal>,
}

impl Mapped for Measurement {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.field("label", |m| &m.label, |m| &mut m.label);
        fields.field("valid", |m| &m.valid, |m| &mut m.valid);
        fields.field("count", |m| &m.count, |m| &mut m.count);
        fields.field("total", |m| &m.total, |m| &mut m.total);
        fields.field("ratio", |m| &m.ratio, |m| &mut m.ratio);
        fields.field("mean", |m| &m.mean, |m| &mut m.mean);
        fields.field("exact_count", |m| &m.exact_count, |m| &mut m.exact_count);
        fields.field("exact_mean", |m| &m.exact_mean, |m| &mut m.exact_mean);
    }
}

/// A response keyed by user id, e.g. `{"1234": {"name": "..."}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    pub users: Option<BTreeMap<i64, BasicUser>>,
    pub labels: Option<BTreeMap<String, String>>,
}

impl Mapped for UserDirectory {
    fn construct() -> Option<Self> {
        Some(Self::default())
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.field("users", |d| &d.users, |d| &mut d.users);
        fields.field("labels", |d| &d.labels, |d| &mut d.labels);
    }
}

/// A type with bound fields but no way to construct it.
#[derive(Debug, Clone, PartialEq)]
pub struct NoConstructor {
    pub id: Option<i64>,
}

impl Mapped for NoConstructor {
    fn construct() -> Option<Self> {
        None
    }

    fn describe(fields: &mut TypeBuilder<Self>) {
        fields.field("id", |n| &n.id, |n| &mut n.id);
    }
}

/// A type with no bound fields at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marker;

impl Mapped for Marker {
    fn construct() -> Option<Self> {
        Some(Marker)
    }

    fn describe(_fields: &mut TypeBuilder<Self>) {}
}
