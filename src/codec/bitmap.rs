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

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    codec::{Slot, VersionTable},
    version::ProtocolVersion,
};

/// How strictly a decoder treats wire data it does not recognize.
///
/// The mode is an explicit argument of every decode call; there is no
/// process-wide parsing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Unrecognized bits fail the decode.
    Strict,
    /// Unrecognized bits are dropped from the result.
    Lenient,
}

/// A bitmap codec for one bit-flag enumeration.
///
/// Bundles the enumeration's [`VersionTable`] with its mutually exclusive
/// flag groups. Instances are `const` data built by
/// [`bitmap_enum!`][crate::bitmap_enum].
#[derive(Debug)]
pub struct BitmapCodec<F: 'static> {
    table: VersionTable<F>,
    mutex_groups: &'static [&'static [F]],
}

impl<F> Clone for BitmapCodec<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for BitmapCodec<F> {}

impl<F: Copy + PartialEq + fmt::Debug> BitmapCodec<F> {
    /// Creates a codec over the table and mutually exclusive groups.
    pub const fn new(table: VersionTable<F>, mutex_groups: &'static [&'static [F]]) -> Self {
        Self {
            table,
            mutex_groups,
        }
    }

    /// Returns the version table backing this codec.
    pub const fn table(&self) -> &VersionTable<F> {
        &self.table
    }

    /// Decodes a wire bitmap into the set of flags it carries.
    ///
    /// A bitmap of exactly zero decodes to the empty set, unless the table
    /// designates an [`Slot::Empty`] value for the version, in which case it
    /// decodes to exactly that flag. Bits that no flag of the version claims
    /// fail the decode under [`ParseMode::Strict`] and are dropped under
    /// [`ParseMode::Lenient`].
    ///
    /// Mutually exclusive groups are not enforced here: a captured bitmap
    /// violating them is the sender's bug and is reported faithfully. The
    /// returned flags are in table-row order.
    pub fn decode(
        &self,
        bitmap: u32,
        version: ProtocolVersion,
        mode: ParseMode,
    ) -> Result<Vec<F>, BadBits> {
        if bitmap == 0 {
            return Ok(self.table.empty_value(version).into_iter().collect());
        }

        let junk = bitmap & !self.table.known_bits(version);
        if junk != 0 && mode == ParseMode::Strict {
            return Err(BadBits {
                enumeration: self.table.name(),
                version,
                bitmap,
                junk,
            });
        }

        Ok(self
            .table
            .values()
            .filter(|flag| match self.table.slot(*flag, version) {
                Slot::Bit(bit) => bitmap & (1u32 << bit) != 0,
                _ => false,
            })
            .collect())
    }

    /// Encodes a set of flags into a wire bitmap.
    ///
    /// Encoding is always strict. Every flag is resolved against the version
    /// first; a flag the version does not carry fails with
    /// [`BitmapEncodeError::UnsupportedFlag`] before mutual exclusion is
    /// considered. Once all flags resolve, each mutually exclusive group may
    /// contribute at most one flag, otherwise the encode fails with
    /// [`BitmapEncodeError::MutexViolation`] and no bits are produced.
    ///
    /// The input is treated as a set: mentioning a flag twice is equivalent
    /// to mentioning it once.
    pub fn encode(
        &self,
        flags: &[F],
        version: ProtocolVersion,
    ) -> Result<u32, BitmapEncodeError<F>> {
        let mut present: Vec<F> = Vec::with_capacity(flags.len());
        for &flag in flags {
            if !present.contains(&flag) {
                present.push(flag);
            }
        }

        let mut resolved = Vec::with_capacity(present.len());
        for &flag in &present {
            match self.table.slot(flag, version) {
                Slot::Bit(bit) => resolved.push(Some(bit)),
                Slot::Empty => resolved.push(None),
                Slot::Absent | Slot::Code(_) => {
                    return Err(BitmapEncodeError::UnsupportedFlag {
                        enumeration: self.table.name(),
                        flag,
                        version,
                    });
                }
            }
        }

        for group in self.mutex_groups {
            let offending: Vec<F> = group
                .iter()
                .copied()
                .filter(|member| present.contains(member))
                .collect();
            if offending.len() > 1 {
                return Err(BitmapEncodeError::MutexViolation {
                    enumeration: self.table.name(),
                    flags: offending,
                });
            }
        }

        Ok(resolved
            .into_iter()
            .flatten()
            .fold(0, |bitmap, bit| bitmap | (1u32 << bit)))
    }
}

/// Error raised by a strict decode of a bitmap with unrecognized bits.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{enumeration} bitmap {bitmap:#x} carries unrecognized bits {junk:#x} in {version}")]
pub struct BadBits {
    /// Name of the enumeration.
    pub enumeration: &'static str,
    /// The version the bitmap was decoded against.
    pub version: ProtocolVersion,
    /// The full wire bitmap.
    pub bitmap: u32,
    /// The mask of bits no flag of the version claims.
    pub junk: u32,
}

/// Errors raised when encoding a set of flags into a bitmap.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitmapEncodeError<F: fmt::Debug> {
    /// A flag has no representation in the version.
    #[error("{enumeration} flag {flag:?} is not supported in {version}")]
    UnsupportedFlag {
        /// Name of the enumeration.
        enumeration: &'static str,
        /// The unrepresentable flag.
        flag: F,
        /// The version lacking the flag.
        version: ProtocolVersion,
    },
    /// Two or more members of a mutually exclusive group were set together.
    #[error("{enumeration} flags {flags:?} are mutually exclusive")]
    MutexViolation {
        /// Name of the enumeration.
        enumeration: &'static str,
        /// The offending members of the group.
        flags: Vec<F>,
    },
}

/// Declares a bit-flag enumeration together with its per-version bit table.
///
/// Each variant lists one slot per protocol version, oldest first: the bit
/// position of the flag in that version, `zero` where the flag is what an
/// all-zero bitmap denotes, or `-` where the version does not carry the flag.
/// Groups of mutually exclusive flags follow the enum as
/// `mutex [A, B, C];` lines.
///
/// The macro declares the enum, its [`VersionTable`] and [`BitmapCodec`] as
/// associated constants, and delegating `decode_bitmap`, `encode_bitmap`, and
/// `is_supported_in` methods.
///
/// # Examples
///
/// ```
/// use openflow_proto::{codec::ParseMode, ProtocolVersion};
///
/// openflow_proto::bitmap_enum! {
///     /// How a port treats incoming traffic.
///     pub enum PortState {
///         Up => [zero, zero, zero, zero],
///         LinkDown => [0, 0, 0, 0],
///         Blocked => [-, 1, 1, 1],
///     }
///     mutex [Up, LinkDown];
/// }
///
/// let flags = PortState::decode_bitmap(0x1, ProtocolVersion::V1_3, ParseMode::Strict)?;
/// assert_eq!(flags, vec![PortState::LinkDown]);
/// assert_eq!(PortState::encode_bitmap(&[PortState::Up], ProtocolVersion::V1_0), Ok(0));
/// # Ok::<(), openflow_proto::codec::BadBits>(())
/// ```
#[macro_export]
macro_rules! bitmap_enum {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => [$s0:tt, $s1:tt, $s2:tt, $s3:tt]
            ),+ $(,)?
        }
        $( mutex [$($member:ident),+ $(,)?]; )*
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// The per-version bit table driving this enumeration's codec.
            $vis const TABLE: $crate::codec::VersionTable<Self> =
                $crate::codec::VersionTable::new(
                    ::core::stringify!($name),
                    &[$(
                        (Self::$variant, [
                            $crate::__bit_slot!($s0),
                            $crate::__bit_slot!($s1),
                            $crate::__bit_slot!($s2),
                            $crate::__bit_slot!($s3),
                        ]),
                    )+],
                );

            /// The bitmap codec over [`TABLE`][Self::TABLE] and the mutually
            /// exclusive groups.
            $vis const CODEC: $crate::codec::BitmapCodec<Self> =
                $crate::codec::BitmapCodec::new(
                    Self::TABLE,
                    &[$( &[$(Self::$member),+] ),*],
                );

            /// Decodes a wire bitmap into the flags it carries.
            $vis fn decode_bitmap(
                bitmap: u32,
                version: $crate::ProtocolVersion,
                mode: $crate::codec::ParseMode,
            ) -> ::core::result::Result<::std::vec::Vec<Self>, $crate::codec::BadBits> {
                Self::CODEC.decode(bitmap, version, mode)
            }

            /// Encodes a set of flags into a wire bitmap.
            $vis fn encode_bitmap(
                flags: &[Self],
                version: $crate::ProtocolVersion,
            ) -> ::core::result::Result<u32, $crate::codec::BitmapEncodeError<Self>> {
                Self::CODEC.encode(flags, version)
            }

            /// Whether this flag exists in the given version.
            $vis fn is_supported_in(self, version: $crate::ProtocolVersion) -> bool {
                !Self::TABLE.slot(self, version).is_absent()
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bit_slot {
    (-) => {
        $crate::codec::Slot::Absent
    };
    (zero) => {
        $crate::codec::Slot::Empty
    };
    ($bit:literal) => {
        $crate::codec::Slot::Bit($bit)
    };
}
