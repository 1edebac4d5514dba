// Copyright 2025 Mysten Labs
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

//! Protocol-level types for the OpenFlow switch-control protocol
//!
//! [OpenFlow][onf] is the protocol spoken between a software-defined-network controller and the
//! switches it programs. Its widely deployed revisions, 1.0 through 1.3, share a common 8-byte
//! message header but disagree about nearly every enumeration behind it: revisions inserted
//! message types, error kinds, and capability bits into the middle of existing numbering spaces,
//! so the same wire code can mean different things under different version bytes.
//!
//! This crate provides Rust implementations of the version-sensitive core of the protocol:
//!
//! - [protocol versions][version] and their wire identifiers;
//! - a [codec engine][codec] of immutable per-version tables, with strict and lenient decoding
//!   of enumeration codes and flag bitmaps;
//! - the catalogue of [coded enumerations][codes] and [bit flags][flags] those tables describe;
//! - the common [message header, stream framing, subtype rules, and transaction
//!   identifiers][message].
//!
//! This crate does not perform any I/O. Frames are extracted from and encoded into
//! caller-provided buffers, leaving sockets and event loops to the application.
//!
//! [onf]: https://opennetworking.org/

pub mod codec;
pub mod codes;
pub mod flags;
pub mod message;
pub mod version;
pub mod wire_encoding;

pub use version::ProtocolVersion;

#[cfg(test)]
pub(crate) mod test_utils;
