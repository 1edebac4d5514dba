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

//! Traits for encoding and decoding OpenFlow objects on the wire.
//!
//! All multi-byte fields are big-endian. The traits operate on the buffer
//! abstractions from the [`bytes`] crate, so callers can decode from and
//! encode into network buffers without copying.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;

/// An object with a known wire representation that can be appended to a buffer.
pub trait WireEncode {
    /// Error raised by the checked [`encode_to`][Self::encode_to].
    type Error: From<InsufficientBufferSize>;

    /// The length of the encoded representation in bytes.
    fn encoded_length(&self) -> usize;

    /// Appends the encoded representation to the buffer.
    ///
    /// The caller must ensure that the buffer can hold at least
    /// [`encoded_length`][Self::encoded_length] further bytes; otherwise this
    /// may panic.
    fn encode_to_unchecked<T: BufMut>(&self, buffer: &mut T);

    /// Appends the encoded representation after checking the buffer capacity.
    fn encode_to<T: BufMut>(&self, buffer: &mut T) -> Result<(), Self::Error> {
        if buffer.remaining_mut() < self.encoded_length() {
            return Err(InsufficientBufferSize.into());
        }
        self.encode_to_unchecked(buffer);
        Ok(())
    }

    /// Encodes the object into a freshly allocated buffer.
    fn encode_to_bytes(&self) -> Bytes {
        let mut buffer = BytesMut::with_capacity(self.encoded_length());
        self.encode_to_unchecked(&mut buffer);
        buffer.freeze()
    }
}

/// An object that can be decoded from a buffer of wire data.
///
/// Decoding advances the reader past the bytes it consumed, also when it
/// fails; callers that need to retry from the original position should
/// decode from a cheap clone of the buffer.
pub trait WireDecode<T>: Sized {
    /// Error raised when the data cannot be decoded.
    type Error;

    /// Decodes an object from the buffer.
    fn decode(data: &mut T) -> Result<Self, Self::Error>;
}

/// Error returned when encoding into a buffer with insufficient capacity.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("the provided buffer did not have sufficient size")]
pub struct InsufficientBufferSize;
