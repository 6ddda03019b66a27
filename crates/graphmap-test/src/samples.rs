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

//! Upstream JSON responses, including the malformed ones the mapper repairs.

/// A quoted string at top level.
pub const TAG: &str = "\"Good\"";

/// A bare number at top level.
pub const NUMBER: &str = "1234";

pub const TAGS: &str = r#"["Good", "Better", "Best"]"#;

pub const NUMBERS: &str = "[1234, 5678, 9012]";

pub const BASIC_USER: &str = r#"{"uid": 1234, "name": "Test Person"}"#;

pub const USER_WITH_PHOTOS: &str = r#"{
  "uid": 1234,
  "name": "Test Person",
  "photos": [
    {"id": 1, "caption": "First"},
    {"id": 2, "caption": "Second"}
  ]
}"#;

/// The third user's affiliations arrive as `{}` instead of `[]`.
pub const USERS_WITH_AFFILIATIONS: &str = r#"[
  {
    "uid": 1240077,
    "name": "Heather Merlin",
    "pic_big": "https://secure-profile.facebook.com/profile6/13580/1406/n284asf55_7662.jpg",
    "affiliations": [
      {"nid": 50431648, "name": "Intuit", "type": "work", "status": "", "year": 0}
    ]
  },
  {
    "uid": 222333,
    "name": "Jon Doe",
    "pic_big": "https://secure-profile.facebook.com/profile6/13580/1406/q22233_1234.jpg",
    "affiliations": [
      {"name": "Stanford", "type": "college"},
      {"name": "Palo Alto", "type": "region"}
    ]
  },
  {
    "uid": 1240079,
    "name": "Jane Roe",
    "pic_big": null,
    "affiliations": {}
  }
]"#;

pub const NULLS: &str = r#"{
  "uid": 1240077,
  "name": null,
  "pic_big": null,
  "affiliations": null
}"#;

/// `auth.createToken` returns a bare quoted token.
pub const AUTH_CREATE_TOKEN: &str = "\"3e4a22bb2f5ed75114b0fc9995ea85f1\"";

/// `users.getLoggedInUser` returns a bare number.
pub const USERS_GET_LOGGED_IN_USER: &str = "1240077";

pub const FRIENDS_GET: &str = "[222333, 1240079]";

/// A string field sent as `[]`.
pub const EMPTY_ARRAY_AS_STRING: &str = r#"{"uid": 1234, "name": []}"#;

/// A Graph API connection wrapping its list in `data`.
pub const FRIENDS_CONNECTION: &str = r#"{
  "data": [
    {"uid": 222333, "name": "Jon Doe"},
    {"uid": 1240079, "name": "Jane Roe"}
  ]
}"#;

/// A connection with paging alongside `data`.
pub const PAGED_CONNECTION: &str = r#"{
  "data": [{"uid": 222333, "name": "Jon Doe"}],
  "paging": {"next": "https://graph.facebook.com/me/friends?offset=1"}
}"#;

pub const VIDEO: &str = r#"{
  "id": "817129783203",
  "from": {"id": "220439", "name": "Bret Taylor", "category": "Person"},
  "message": "Check out this video",
  "description": "Launch day",
  "length": 172,
  "created_time": "2010-04-21T17:03:52+0000",
  "updated_time": "2010-04-22T09:15:00+0000"
}"#;

pub const MEASUREMENT: &str = r#"{
  "label": "latency",
  "valid": "TRUE",
  "count": "42",
  "total": 9007199254740993,
  "ratio": 0.5,
  "mean": 12.25,
  "exact_count": 123456789012345678901234567890,
  "exact_mean": 0.1000000000000000000000000001
}"#;

pub const USER_DIRECTORY: &str = r#"{
  "users": {
    "1234": {"uid": 1234, "name": "Test Person"},
    "5678": {"uid": 5678, "name": null}
  },
  "labels": {"a": "first", "b": null}
}"#;

/// Every sample as (name, json) pairs.
pub fn all() -> Vec<(&'static str, &'static str)> {
    vec![
        ("tag", TAG),
        ("number", NUMBER),
        ("tags", TAGS),
        ("numbers", NUMBERS),
        ("basic-user", BASIC_USER),
        ("user-with-photos", USER_WITH_PHOTOS),
        ("users-with-affiliations", USERS_WITH_AFFILIATIONS),
        ("nulls", NULLS),
        ("auth.createToken", AUTH_CREATE_TOKEN),
        ("users.getLoggedInUser", USERS_GET_LOGGED_IN_USER),
        ("friends.get", FRIENDS_GET),
        ("empty-array-as-string", EMPTY_ARRAY_AS_STRING),
        ("friends-connection", FRIENDS_CONNECTION),
        ("paged-connection", PAGED_CONNECTION),
        ("video", VIDEO),
        ("measurement", MEASUREMENT),
        ("user-directory", USER_DIRECTORY),
    ]
}

/// Look up a sample by name.
pub fn by_name(name: &str) -> Option<&'static str> {
    all()
        .into_iter()
        .find(|(sample, _)| *sample == name)
        .map(|(_, json)| json)
}
