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

//! The OpenFlow protocol versions modeled by this crate.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An OpenFlow protocol version.
///
/// The versions form a closed, totally ordered set; ordering comparisons express
/// "introduced in" gates such as `version >= ProtocolVersion::V1_2`.
///
/// # Examples
///
/// ```
/// use openflow_proto::ProtocolVersion;
///
/// assert!(ProtocolVersion::V1_0 < ProtocolVersion::V1_3);
/// assert_eq!(ProtocolVersion::from_wire(0x04), Ok(ProtocolVersion::V1_3));
/// assert_eq!("1.3".parse(), Ok(ProtocolVersion::V1_3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// OpenFlow 1.0, wire byte 0x01.
    #[serde(rename = "1.0")]
    V1_0,
    /// OpenFlow 1.1, wire byte 0x02.
    #[serde(rename = "1.1")]
    V1_1,
    /// OpenFlow 1.2, wire byte 0x03.
    #[serde(rename = "1.2")]
    V1_2,
    /// OpenFlow 1.3, wire byte 0x04.
    #[serde(rename = "1.3")]
    V1_3,
}

impl ProtocolVersion {
    /// The number of modeled protocol versions.
    pub const COUNT: usize = 4;
    /// All versions, oldest first.
    pub const ALL: [Self; Self::COUNT] = [Self::V1_0, Self::V1_1, Self::V1_2, Self::V1_3];
    /// The newest modeled version.
    pub const LATEST: Self = Self::V1_3;

    /// Resolves the version byte carried in every message header.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownVersion`] error for any byte other than 0x01 through 0x04.
    pub const fn from_wire(code: u8) -> Result<Self, UnknownVersion> {
        match code {
            0x01 => Ok(Self::V1_0),
            0x02 => Ok(Self::V1_1),
            0x03 => Ok(Self::V1_2),
            0x04 => Ok(Self::V1_3),
            other => Err(UnknownVersion(other)),
        }
    }

    /// Returns the version byte written to the wire.
    pub const fn wire_code(self) -> u8 {
        match self {
            Self::V1_0 => 0x01,
            Self::V1_1 => 0x02,
            Self::V1_2 => 0x03,
            Self::V1_3 => 0x04,
        }
    }

    /// Returns the row index of this version in per-version tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the diagnostic token for this version, as rendered in message headers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_0 => "V_1_0",
            Self::V1_1 => "V_1_1",
            Self::V1_2 => "V_1_2",
            Self::V1_3 => "V_1_3",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = InvalidVersionName;

    /// Parses either the dotted form used in configuration (`"1.3"`) or the
    /// diagnostic token (`"V_1_3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.0" | "V_1_0" => Ok(Self::V1_0),
            "1.1" | "V_1_1" => Ok(Self::V1_1),
            "1.2" | "V_1_2" => Ok(Self::V1_2),
            "1.3" | "V_1_3" => Ok(Self::V1_3),
            _ => Err(InvalidVersionName),
        }
    }
}

/// Error returned when a version byte does not denote a known protocol version.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown OpenFlow protocol version code: {0:#04x}")]
pub struct UnknownVersion(pub u8);

/// Error returned when parsing a protocol version from a string fails.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("not a recognized OpenFlow version name")]
pub struct InvalidVersionName;
