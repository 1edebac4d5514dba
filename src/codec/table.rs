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

use thiserror::Error;

use crate::version::ProtocolVersion;

/// The wire placement of one enumeration value in one protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A position inside a bitmap field, 0 through 31.
    Bit(u8),
    /// A numeric wire code.
    Code(u32),
    /// The value denoted by an all-zero bitmap.
    ///
    /// At most one value of a bit-flag enumeration may claim this per version;
    /// it contributes no bits when encoded and is the decode result of a zero
    /// bitmap.
    Empty,
    /// The value has no representation in the version.
    Absent,
}

impl Slot {
    /// Whether this slot denotes a value absent from the version.
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// An immutable table mapping enumeration values to their per-version [`Slot`]s.
///
/// Each row holds one logical value and one slot per protocol version, oldest
/// version first. Tables are plain `const` data; the enumeration declaration
/// macros ([`bitmap_enum!`][crate::bitmap_enum] and
/// [`coded_enum!`][crate::coded_enum]) build them from the slot arrays written
/// next to each variant.
///
/// A table is either a *bit table* (slots [`Slot::Bit`] and [`Slot::Empty`])
/// or a *code table* (slots [`Slot::Code`]); [`validate`][Self::validate]
/// rejects tables mixing the two kinds.
#[derive(Debug)]
pub struct VersionTable<K: 'static> {
    name: &'static str,
    rows: &'static [(K, [Slot; ProtocolVersion::COUNT])],
}

impl<K> Clone for VersionTable<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for VersionTable<K> {}

impl<K: Copy + PartialEq> VersionTable<K> {
    /// Creates a table over the given rows.
    ///
    /// The name is used in error messages; by convention it is the name of the
    /// enumeration type.
    pub const fn new(
        name: &'static str,
        rows: &'static [(K, [Slot; ProtocolVersion::COUNT])],
    ) -> Self {
        Self { name, rows }
    }

    /// Returns the diagnostic name of the table.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the slot of the value in the given version.
    ///
    /// Values without a row resolve to [`Slot::Absent`].
    pub fn slot(&self, value: K, version: ProtocolVersion) -> Slot {
        self.rows
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map_or(Slot::Absent, |(_, slots)| slots[version.index()])
    }

    /// Returns the value placed at the given bit position in the version.
    pub fn by_bit(&self, bit: u8, version: ProtocolVersion) -> Option<K> {
        self.rows
            .iter()
            .find_map(|(value, slots)| match slots[version.index()] {
                Slot::Bit(candidate) if candidate == bit => Some(*value),
                _ => None,
            })
    }

    /// Returns the value carrying the given wire code in the version.
    pub fn by_code(&self, code: u32, version: ProtocolVersion) -> Option<K> {
        self.rows
            .iter()
            .find_map(|(value, slots)| match slots[version.index()] {
                Slot::Code(candidate) if candidate == code => Some(*value),
                _ => None,
            })
    }

    /// Returns the value denoted by an all-zero bitmap in the version, if the
    /// enumeration designates one.
    pub fn empty_value(&self, version: ProtocolVersion) -> Option<K> {
        self.rows
            .iter()
            .find_map(|(value, slots)| match slots[version.index()] {
                Slot::Empty => Some(*value),
                _ => None,
            })
    }

    /// Whether any value of the enumeration exists in the given version.
    pub fn supported_in(&self, version: ProtocolVersion) -> bool {
        self.rows
            .iter()
            .any(|(_, slots)| !slots[version.index()].is_absent())
    }

    /// Returns the mask of all bit positions claimed in the given version.
    pub fn known_bits(&self, version: ProtocolVersion) -> u32 {
        self.rows
            .iter()
            .fold(0, |mask, (_, slots)| match slots[version.index()] {
                Slot::Bit(bit) if bit <= 31 => mask | (1u32 << bit),
                _ => mask,
            })
    }

    /// Iterates over all values with a row in the table, in row order.
    pub fn values(&self) -> impl Iterator<Item = K> + '_ {
        self.rows.iter().map(|(value, _)| *value)
    }

    /// Checks the table for internal consistency.
    ///
    /// This is the startup/test-time self-check backing the engine: within any
    /// one version no two values may claim the same bit or code, at most one
    /// value may claim the zero bitmap, bit positions must fit a 32-bit
    /// bitmap, and a table must not mix bit and code slots. Reusing a bit or
    /// code across *different* versions is legal.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.rows.is_empty() {
            return Err(TableError::Empty { table: self.name });
        }
        for (index, (value, _)) in self.rows.iter().enumerate() {
            if self.rows[..index].iter().any(|(seen, _)| seen == value) {
                return Err(TableError::DuplicateValue { table: self.name });
            }
        }

        let mut has_bits = false;
        let mut has_codes = false;
        for version in ProtocolVersion::ALL {
            let mut seen_bits = 0u32;
            let mut seen_codes = Vec::new();
            let mut has_empty = false;
            for (_, slots) in self.rows {
                match slots[version.index()] {
                    Slot::Bit(bit) => {
                        has_bits = true;
                        if bit > 31 {
                            return Err(TableError::BitOutOfRange {
                                table: self.name,
                                bit,
                                version,
                            });
                        }
                        if seen_bits & (1u32 << bit) != 0 {
                            return Err(TableError::DuplicateBit {
                                table: self.name,
                                bit,
                                version,
                            });
                        }
                        seen_bits |= 1u32 << bit;
                    }
                    Slot::Code(code) => {
                        has_codes = true;
                        if seen_codes.contains(&code) {
                            return Err(TableError::DuplicateCode {
                                table: self.name,
                                code,
                                version,
                            });
                        }
                        seen_codes.push(code);
                    }
                    Slot::Empty => {
                        has_bits = true;
                        if has_empty {
                            return Err(TableError::DuplicateEmpty {
                                table: self.name,
                                version,
                            });
                        }
                        has_empty = true;
                    }
                    Slot::Absent => {}
                }
            }
        }
        if has_bits && has_codes {
            return Err(TableError::MixedKinds { table: self.name });
        }
        Ok(())
    }
}

/// Errors raised by [`VersionTable::validate`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The table has no rows at all.
    #[error("table {table} has no rows")]
    Empty {
        /// Name of the offending table.
        table: &'static str,
    },
    /// The same value appears in two rows.
    #[error("table {table} lists a value twice")]
    DuplicateValue {
        /// Name of the offending table.
        table: &'static str,
    },
    /// The table contains both bit and code slots.
    #[error("table {table} mixes bit and code slots")]
    MixedKinds {
        /// Name of the offending table.
        table: &'static str,
    },
    /// Two values claim the same bit position in one version.
    #[error("table {table} assigns bit {bit} twice in {version}")]
    DuplicateBit {
        /// Name of the offending table.
        table: &'static str,
        /// The doubly assigned bit position.
        bit: u8,
        /// The version with the collision.
        version: ProtocolVersion,
    },
    /// Two values claim the same wire code in one version.
    #[error("table {table} assigns code {code} twice in {version}")]
    DuplicateCode {
        /// Name of the offending table.
        table: &'static str,
        /// The doubly assigned code.
        code: u32,
        /// The version with the collision.
        version: ProtocolVersion,
    },
    /// Two values claim the zero bitmap in one version.
    #[error("table {table} designates two empty-bitmap values in {version}")]
    DuplicateEmpty {
        /// Name of the offending table.
        table: &'static str,
        /// The version with the collision.
        version: ProtocolVersion,
    },
    /// A bit position does not fit a 32-bit bitmap.
    #[error("table {table} uses bit {bit} outside the 32-bit bitmap in {version}")]
    BitOutOfRange {
        /// Name of the offending table.
        table: &'static str,
        /// The out-of-range bit position.
        bit: u8,
        /// The version using it.
        version: ProtocolVersion,
    },
}
