// Copyright 2025 Anapaya Systems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(missing_docs)]

//! Hot-path costs of the version-table codec.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use openflow_proto::{
    ProtocolVersion,
    codec::ParseMode,
    flags::Capability,
    message::{Header, MessageType},
    wire_encoding::WireDecode,
};

const PACKET_IN_1_3: [u8; 8] = [0x04, 0x0a, 0x01, 0x00, 0x00, 0x00, 0x00, 0x6a];

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec");

    group.bench_function("HeaderDecode", |b| {
        b.iter(|| {
            let mut bytes = &PACKET_IN_1_3[..];
            assert!(Header::decode(&mut bytes).is_ok());
        })
    });

    group.bench_function(BenchmarkId::new("BitmapDecode", "strict"), |b| {
        b.iter(|| {
            let flags =
                Capability::decode_bitmap(0x16f, ProtocolVersion::V1_3, ParseMode::Strict).unwrap();
            assert_eq!(flags.len(), 7);
        })
    });
    group.bench_function(BenchmarkId::new("BitmapDecode", "lenient_junk"), |b| {
        b.iter(|| {
            let flags =
                Capability::decode_bitmap(0xffff, ProtocolVersion::V1_3, ParseMode::Lenient)
                    .unwrap();
            assert_eq!(flags.len(), 7);
        })
    });

    for version in ProtocolVersion::ALL {
        group.bench_with_input(
            BenchmarkId::new("DispatchLookup", version),
            &version,
            |b, &version| {
                b.iter(|| {
                    let mut known = 0;
                    for code in 0..30 {
                        known += MessageType::decode(code, version).is_ok() as usize;
                    }
                    assert_ne!(0, known);
                })
            },
        );
    }

    group.finish()
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
