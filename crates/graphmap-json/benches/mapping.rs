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

//! Mapping benchmarks for graphmap.
//!
//! Measures typed decode, untyped decode and encode over generated
//! `users.getInfo`-style payloads of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphmap_json::JsonMapper;
use graphmap_test::types::UserWithAffiliations;

const SIZES: [usize; 4] = [10, 50, 100, 500];

/// Generate a list of users; every third user has `{}` for affiliations.
fn generate_users(count: usize) -> String {
    let users: Vec<String> = (0..count)
        .map(|i| {
            let affiliations = if i % 3 == 2 {
                "{}".to_string()
            } else {
                format!(
                    r#"[{{"name": "Org {}", "type": "work"}}, {{"name": "School {}", "type": "college"}}]"#,
                    i, i
                )
            };
            format!(
                r#"{{"uid": {}, "name": "User {}", "pic_big": "https://example.com/{}.jpg", "affiliations": {}}}"#,
                1_000_000 + i,
                i,
                i,
                affiliations
            )
        })
        .collect();
    format!("[{}]", users.join(","))
}

// ============================================================================
// Decode Benchmarks
// ============================================================================

fn bench_decode_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_typed");
    let mapper = JsonMapper::new();

    for &size in &SIZES {
        let json = generate_users(size);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, input| {
            b.iter(|| mapper.to_list::<UserWithAffiliations>(black_box(input)))
        });
    }

    group.finish();
}

fn bench_decode_untyped(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_untyped");
    let mapper = JsonMapper::new();

    for &size in &SIZES {
        let json = generate_users(size);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, input| {
            b.iter(|| mapper.to_untyped_list(black_box(input)))
        });
    }

    group.finish();
}

fn bench_decode_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_envelope");
    let mapper = JsonMapper::new();

    for &size in &SIZES {
        let json = format!(r#"{{"data": {}}}"#, generate_users(size));
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, input| {
            b.iter(|| mapper.to_list::<UserWithAffiliations>(black_box(input)))
        });
    }

    group.finish();
}

// ============================================================================
// Encode Benchmarks
// ============================================================================

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let mapper = JsonMapper::new();

    for &size in &SIZES {
        let json = generate_users(size);
        let users = match mapper.to_list::<UserWithAffiliations>(&json) {
            Ok(users) => users,
            Err(e) => panic!("fixture failed to decode: {}", e),
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &users, |b, input| {
            b.iter(|| mapper.to_json(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_typed,
    bench_decode_untyped,
    bench_decode_envelope,
    bench_encode
);
criterion_main!(benches);
