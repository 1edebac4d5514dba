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

use std::sync::atomic::{AtomicU32, Ordering};

/// A thread-safe allocator of transaction identifiers for outgoing requests.
///
/// Issued values stay in `[BASE, CEILING)` and wrap around to [`Self::BASE`]
/// when the sequence is exhausted. Identifiers below the base are left free
/// for connection-setup exchanges, and the band above the ceiling for values
/// chosen out-of-band by the application.
#[derive(Debug)]
pub struct XidSequence(AtomicU32);

impl XidSequence {
    /// The first transaction identifier issued by a fresh sequence.
    pub const BASE: u32 = 100;
    /// The first identifier that is never issued; the sequence wraps here.
    pub const CEILING: u32 = 0xffff_ff00;

    /// Creates a sequence that starts issuing at [`Self::BASE`].
    pub const fn new() -> Self {
        Self::starting_at(Self::BASE)
    }

    /// Creates a sequence that starts issuing at the given value.
    pub const fn starting_at(start: u32) -> Self {
        Self(AtomicU32::new(start))
    }

    /// Issues the next transaction identifier.
    pub fn next(&self) -> u32 {
        self.0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |xid| {
                Some(if xid >= Self::CEILING - 1 {
                    Self::BASE
                } else {
                    xid + 1
                })
            })
            .unwrap_or(Self::BASE)
    }
}

impl Default for XidSequence {
    fn default() -> Self {
        Self::new()
    }
}
