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

use std::fmt;

use bytes::{Buf, BufMut};
use thiserror::Error;

use crate::{
    codec::UnsupportedValue,
    message::MessageType,
    version::{ProtocolVersion, UnknownVersion},
    wire_encoding::{InsufficientBufferSize, WireDecode, WireEncode},
};

/// The fixed header carried by every OpenFlow message.
///
/// On the wire the header spans 8 bytes: the version byte, the type code,
/// the total message length (including these 8 bytes), and the transaction
/// id, all big-endian. A decoded header stores the resolved
/// [`MessageType`]; construction fails fast when the type does not exist in
/// the version, so encoding a constructed header cannot fail.
///
/// # Examples
///
/// ```
/// use openflow_proto::{message::Header, wire_encoding::WireDecode, ProtocolVersion};
///
/// let mut wire: &[u8] = &[0x04, 0x0a, 0x01, 0x00, 0x00, 0x00, 0x00, 0x6a];
/// let header = Header::decode(&mut wire)?;
///
/// assert_eq!(header.version(), ProtocolVersion::V1_3);
/// assert_eq!(header.to_string(), "[V_1_3,PACKET_IN,256,106]");
/// # Ok::<(), openflow_proto::message::HeaderParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    version: ProtocolVersion,
    message_type: MessageType,
    type_code: u8,
    length: u16,
    xid: u32,
}

impl Header {
    /// The encoded length of the header in bytes.
    pub const LENGTH: usize = 8;

    /// Creates a header, failing fast if the version does not carry the type.
    ///
    /// The length is the *total* message length, header bytes included.
    pub fn new(
        version: ProtocolVersion,
        message_type: MessageType,
        length: u16,
        xid: u32,
    ) -> Result<Self, UnsupportedValue<MessageType>> {
        let code = message_type.code(version)?;
        Ok(Self {
            version,
            message_type,
            type_code: code as u8,
            length,
            xid,
        })
    }

    /// Derives a reply header, preserving this header's version and
    /// transaction id.
    pub fn reply(
        &self,
        message_type: MessageType,
        length: u16,
    ) -> Result<Self, UnsupportedValue<MessageType>> {
        Self::new(self.version, message_type, length, self.xid)
    }

    /// The protocol version of the message.
    pub const fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// The resolved message type.
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// The wire code of the message type under this header's version.
    pub const fn type_code(&self) -> u8 {
        self.type_code
    }

    /// The total message length in bytes, header included.
    pub const fn length(&self) -> u16 {
        self.length
    }

    /// The transaction id.
    pub const fn xid(&self) -> u32 {
        self.xid
    }

    /// Renders header bytes for diagnostics, without ever failing.
    ///
    /// Fields that decode render as in [`Display`][fmt::Display]; an
    /// unrecognized version or type byte renders as hex (`ver=0xdb`,
    /// `type=0xee`) and fields beyond the end of the data render as `?`.
    pub fn render_lossy(bytes: &[u8]) -> String {
        let version = bytes.first().map(|&code| ProtocolVersion::from_wire(code));
        let version_field = match version {
            Some(Ok(version)) => version.to_string(),
            Some(Err(UnknownVersion(code))) => format!("ver={code:#04x}"),
            None => String::from("?"),
        };
        let type_field = match (version, bytes.get(1)) {
            (Some(version), Some(&code)) => match version
                .ok()
                .and_then(|version| MessageType::decode(code.into(), version).ok())
            {
                Some(message_type) => message_type.to_string(),
                None => format!("type={code:#04x}"),
            },
            _ => String::from("?"),
        };
        let length_field = bytes
            .get(2..4)
            .map(|data| u16::from_be_bytes([data[0], data[1]]).to_string())
            .unwrap_or_else(|| String::from("?"));
        let xid_field = bytes
            .get(4..8)
            .map(|data| u32::from_be_bytes([data[0], data[1], data[2], data[3]]).to_string())
            .unwrap_or_else(|| String::from("?"));

        format!("[{version_field},{type_field},{length_field},{xid_field}]")
    }
}

impl fmt::Display for Header {
    /// Renders the fixed diagnostic form `[VERSION,TYPE,LENGTH,XID]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{}]",
            self.version, self.message_type, self.length, self.xid
        )
    }
}

impl WireEncode for Header {
    type Error = InsufficientBufferSize;

    fn encoded_length(&self) -> usize {
        Self::LENGTH
    }

    fn encode_to_unchecked<T: BufMut>(&self, buffer: &mut T) {
        buffer.put_u8(self.version.wire_code());
        buffer.put_u8(self.type_code);
        buffer.put_u16(self.length);
        buffer.put_u32(self.xid);
    }
}

impl<T: Buf> WireDecode<T> for Header {
    type Error = HeaderParseError;

    fn decode(data: &mut T) -> Result<Self, Self::Error> {
        if data.remaining() < Self::LENGTH {
            return Err(HeaderParseError::Truncated);
        }
        let version_code = data.get_u8();
        let type_code = data.get_u8();
        let length = data.get_u16();
        let xid = data.get_u32();

        let version = ProtocolVersion::from_wire(version_code)?;
        let message_type =
            MessageType::decode(type_code.into(), version).map_err(|_| {
                HeaderParseError::UnknownType {
                    version,
                    code: type_code,
                }
            })?;

        Ok(Self {
            version,
            message_type,
            type_code,
            length,
            xid,
        })
    }
}

/// Errors raised when decoding a message header.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeaderParseError {
    /// Fewer than [`Header::LENGTH`] bytes were available.
    #[error("the provided bytes did not contain a full message header")]
    Truncated,
    /// The version byte does not denote a known protocol version.
    #[error(transparent)]
    UnknownVersion(#[from] UnknownVersion),
    /// The type byte is not assigned in the message's version.
    #[error("unknown {version} type code: {code}")]
    UnknownType {
        /// The message's (known) protocol version.
        version: ProtocolVersion,
        /// The unassigned type code.
        code: u8,
    },
}
