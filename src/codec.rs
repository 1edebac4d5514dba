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

//! The version-aware codec engine.
//!
//! OpenFlow enumerations appear on the wire in two shapes: as single bits in
//! a bitmap field, or as numeric codes. Which bit or code a logical value
//! occupies depends on the protocol version, and a value may be missing from
//! a version altogether. This module provides the data-driven machinery that
//! captures those placements:
//!
//! - a [`VersionTable`] maps each value of one enumeration to its per-version
//!   [`Slot`] and is validated by [`VersionTable::validate`];
//! - bitmap fields are decoded and encoded through a [`BitmapCodec`], with an
//!   explicit [`ParseMode`] deciding how unrecognized bits are treated;
//! - coded fields go through [`VersionTable::decode_code`] and
//!   [`VersionTable::encode_code`], which keep "the version does not have
//!   this enumeration" distinct from "the code is not assigned".
//!
//! Enumerations declare themselves and their tables with the
//! [`bitmap_enum!`][crate::bitmap_enum] and [`coded_enum!`][crate::coded_enum]
//! macros; the catalogue shipped with this crate lives in [`crate::flags`]
//! and [`crate::codes`].

mod bitmap;
pub use bitmap::{BadBits, BitmapCodec, BitmapEncodeError, ParseMode};

mod code;
pub use code::{CodeDecodeError, UnsupportedValue};

mod table;
pub use table::{Slot, TableError, VersionTable};
