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

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;
use tracing::warn;

use crate::{
    message::{Header, HeaderParseError},
    wire_encoding::{InsufficientBufferSize, WireDecode, WireEncode},
};

/// One complete OpenFlow message frame: the decoded header and the raw body.
///
/// The body holds the bytes after the 8 header bytes; parsing it into a
/// concrete message is left to the caller, driven by
/// [`Header::message_type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The decoded message header.
    pub header: Header,
    /// The message body following the header.
    pub body: Bytes,
}

impl Frame {
    /// Creates a frame, checking that the header's declared length matches
    /// the body.
    pub fn new(header: Header, body: Bytes) -> Result<Self, FrameError> {
        let actual = Header::LENGTH + body.len();
        if usize::from(header.length()) != actual {
            return Err(FrameError::LengthMismatch {
                declared: header.length(),
                actual,
            });
        }
        Ok(Self { header, body })
    }

    /// Extracts the next complete frame from a stream buffer.
    ///
    /// Returns `Ok(None)` without consuming anything while the buffer does
    /// not yet hold a complete frame; the caller should read more bytes and
    /// retry. The total frame length is peeked from the fixed offset in the
    /// header, which is version-independent.
    ///
    /// A frame whose header does not decode (unknown version or type code)
    /// is consumed in full before the error is returned, so the caller may
    /// keep extracting subsequent frames from the same buffer. Only a
    /// declared length too small to hold the header leaves the buffer
    /// untouched: the stream cannot be resynchronized past it and should be
    /// closed.
    pub fn next_from(src: &mut BytesMut) -> Result<Option<Self>, FrameError> {
        if src.len() < 4 {
            return Ok(None);
        }
        let declared = usize::from(u16::from_be_bytes([src[2], src[3]]));
        if declared < Header::LENGTH {
            return Err(FrameError::BadDeclaredLength {
                length: declared as u16,
            });
        }
        if src.len() < declared {
            return Ok(None);
        }

        let mut frame = src.split_to(declared);
        match Header::decode(&mut frame) {
            Ok(header) => Ok(Some(Self {
                header,
                body: frame.freeze(),
            })),
            Err(error) => {
                warn!(%error, length = declared, "skipping undecodable message frame");
                Err(error.into())
            }
        }
    }
}

impl WireEncode for Frame {
    type Error = InsufficientBufferSize;

    fn encoded_length(&self) -> usize {
        Header::LENGTH + self.body.len()
    }

    fn encode_to_unchecked<T: BufMut>(&self, buffer: &mut T) {
        self.header.encode_to_unchecked(buffer);
        buffer.put_slice(&self.body);
    }
}

/// Errors raised when extracting frames from a stream buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The declared total length cannot hold the fixed header.
    #[error("frame declares total length {length}, below the fixed header size")]
    BadDeclaredLength {
        /// The declared total length.
        length: u16,
    },
    /// A frame's header and body disagree about the total length.
    #[error("frame is {actual} bytes but its header declares {declared}")]
    LengthMismatch {
        /// The length declared by the header.
        declared: u16,
        /// The actual total length in bytes.
        actual: usize,
    },
    /// The frame's header did not decode; the frame has been consumed.
    #[error(transparent)]
    Header(#[from] HeaderParseError),
}
