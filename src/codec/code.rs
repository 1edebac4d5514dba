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

use thiserror::Error;

use crate::{
    codec::{Slot, VersionTable},
    version::ProtocolVersion,
};

impl<K: Copy + PartialEq + fmt::Debug> VersionTable<K> {
    /// Resolves a wire code against the table for the given version.
    ///
    /// # Errors
    ///
    /// Fails with [`CodeDecodeError::VersionNotSupported`] when the whole
    /// enumeration predates or postdates the version, and with
    /// [`CodeDecodeError::UnknownCode`] when the enumeration exists in the
    /// version but no value carries the code. The two are deliberately
    /// distinct: the first is a usage error, the second points at unexpected
    /// bytes on the wire.
    pub fn decode_code(&self, code: u32, version: ProtocolVersion) -> Result<K, CodeDecodeError> {
        if !self.supported_in(version) {
            return Err(CodeDecodeError::VersionNotSupported {
                enumeration: self.name(),
                version,
            });
        }
        self.by_code(code, version)
            .ok_or(CodeDecodeError::UnknownCode {
                enumeration: self.name(),
                code,
                version,
            })
    }

    /// Returns the wire code of the value in the given version.
    pub fn encode_code(
        &self,
        value: K,
        version: ProtocolVersion,
    ) -> Result<u32, UnsupportedValue<K>> {
        match self.slot(value, version) {
            Slot::Code(code) => Ok(code),
            _ => Err(UnsupportedValue {
                enumeration: self.name(),
                value,
                version,
            }),
        }
    }
}

/// Errors raised when resolving a wire code against a version table.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodeDecodeError {
    /// The code is not assigned in the version, although the enumeration exists there.
    #[error("unknown {version} {enumeration} code: {code}")]
    UnknownCode {
        /// Name of the enumeration.
        enumeration: &'static str,
        /// The unassigned code.
        code: u32,
        /// The version the code was resolved against.
        version: ProtocolVersion,
    },
    /// No value of the enumeration exists in the version.
    #[error("{enumeration} does not exist in {version}")]
    VersionNotSupported {
        /// Name of the enumeration.
        enumeration: &'static str,
        /// The version lacking the enumeration.
        version: ProtocolVersion,
    },
}

/// Error raised when encoding a value that the version does not carry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{enumeration} value {value:?} is not supported in {version}")]
pub struct UnsupportedValue<K: fmt::Debug> {
    /// Name of the enumeration.
    pub enumeration: &'static str,
    /// The value without a representation.
    pub value: K,
    /// The version lacking the value.
    pub version: ProtocolVersion,
}

/// Declares a coded enumeration together with its per-version code table.
///
/// Each variant lists one slot per protocol version, oldest first: either the
/// numeric wire code of the value in that version, or `-` where the version
/// does not carry the value. The macro declares the enum itself, its
/// [`VersionTable`] as an associated `TABLE` constant, and delegating
/// `decode`, `code`, and `is_supported_in` methods.
///
/// # Examples
///
/// ```
/// use openflow_proto::ProtocolVersion;
///
/// openflow_proto::coded_enum! {
///     /// Reason of a port-status notification.
///     pub enum StatusReason {
///         Add => [0, 0, 0, 0],
///         Delete => [1, 1, 1, 1],
///         Renamed => [-, 2, 2, 2],
///     }
/// }
///
/// assert_eq!(StatusReason::decode(1, ProtocolVersion::V1_0), Ok(StatusReason::Delete));
/// assert_eq!(StatusReason::Renamed.code(ProtocolVersion::V1_3), Ok(2));
/// assert!(StatusReason::Renamed.code(ProtocolVersion::V1_0).is_err());
/// ```
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => [$s0:tt, $s1:tt, $s2:tt, $s3:tt]
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// The per-version code table driving this enumeration's codec.
            $vis const TABLE: $crate::codec::VersionTable<Self> =
                $crate::codec::VersionTable::new(
                    ::core::stringify!($name),
                    &[$(
                        (Self::$variant, [
                            $crate::__code_slot!($s0),
                            $crate::__code_slot!($s1),
                            $crate::__code_slot!($s2),
                            $crate::__code_slot!($s3),
                        ]),
                    )+],
                );

            /// Resolves a wire code for the given version.
            $vis fn decode(
                code: u32,
                version: $crate::ProtocolVersion,
            ) -> ::core::result::Result<Self, $crate::codec::CodeDecodeError> {
                Self::TABLE.decode_code(code, version)
            }

            /// Returns the wire code of this value in the given version.
            $vis fn code(
                self,
                version: $crate::ProtocolVersion,
            ) -> ::core::result::Result<u32, $crate::codec::UnsupportedValue<Self>> {
                Self::TABLE.encode_code(self, version)
            }

            /// Whether this value exists in the given version.
            $vis fn is_supported_in(self, version: $crate::ProtocolVersion) -> bool {
                !Self::TABLE.slot(self, version).is_absent()
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __code_slot {
    (-) => {
        $crate::codec::Slot::Absent
    };
    ($code:literal) => {
        $crate::codec::Slot::Code($code)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::param_test;

    crate::coded_enum! {
        /// Fixture with a code shift between versions.
        enum Shifting {
            Stable => [0, 0, 0, 0],
            Inserted => [-, 1, 1, 1],
            Moved => [1, 2, 2, 2],
        }
    }

    crate::coded_enum! {
        /// Fixture absent from the two oldest versions.
        enum Late {
            First => [-, -, 0, 0],
            Second => [-, -, 1, 1],
        }
    }

    param_test! {
        round_trips_supported_values: [
            oldest: (ProtocolVersion::V1_0),
            middle: (ProtocolVersion::V1_1),
            latest: (ProtocolVersion::V1_3),
        ]
    }
    fn round_trips_supported_values(version: ProtocolVersion) {
        for value in Shifting::TABLE.values() {
            if !value.is_supported_in(version) {
                continue;
            }
            let code = value.code(version).unwrap();
            assert_eq!(Shifting::decode(code, version), Ok(value));
        }
    }

    #[test]
    fn codes_shift_between_versions() {
        assert_eq!(Shifting::Moved.code(ProtocolVersion::V1_0), Ok(1));
        assert_eq!(Shifting::Moved.code(ProtocolVersion::V1_3), Ok(2));
        assert_eq!(
            Shifting::decode(1, ProtocolVersion::V1_0),
            Ok(Shifting::Moved)
        );
        assert_eq!(
            Shifting::decode(1, ProtocolVersion::V1_3),
            Ok(Shifting::Inserted)
        );
    }

    #[test]
    fn unknown_code_requires_the_enumeration_to_exist() {
        assert_eq!(
            Shifting::decode(9, ProtocolVersion::V1_2),
            Err(CodeDecodeError::UnknownCode {
                enumeration: "Shifting",
                code: 9,
                version: ProtocolVersion::V1_2,
            })
        );
    }

    #[test]
    fn absent_enumeration_is_not_an_unknown_code() {
        assert_eq!(
            Late::decode(0, ProtocolVersion::V1_0),
            Err(CodeDecodeError::VersionNotSupported {
                enumeration: "Late",
                version: ProtocolVersion::V1_0,
            })
        );
        assert_eq!(Late::decode(0, ProtocolVersion::V1_2), Ok(Late::First));
    }

    #[test]
    fn encoding_an_absent_value_fails() {
        assert_eq!(
            Shifting::Inserted.code(ProtocolVersion::V1_0),
            Err(UnsupportedValue {
                enumeration: "Shifting",
                value: Shifting::Inserted,
                version: ProtocolVersion::V1_0,
            })
        );
    }

    #[test]
    fn error_messages_name_the_version() {
        let error = Late::decode(7, ProtocolVersion::V1_3).unwrap_err();
        assert_eq!(error.to_string(), "unknown V_1_3 Late code: 7");
    }

    #[test]
    fn fixture_tables_are_consistent() {
        Shifting::TABLE.validate().unwrap();
        Late::TABLE.validate().unwrap();
    }
}
