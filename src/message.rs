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

//! The OpenFlow message layer: the common header, message types, and frames.
//!
//! Every OpenFlow message starts with the same 8-byte [`Header`] carrying
//! the protocol version, the message type, the total message length, and a
//! transaction identifier. [`Frame`] cuts complete messages out of a stream
//! buffer using that header, and [`XidSequence`] issues the transaction
//! identifiers for outgoing requests.

mod frame;
pub use frame::{Frame, FrameError};

mod header;
pub use header::{Header, HeaderParseError};

mod subtype;
pub use subtype::{
    check_message, check_subtype, MessageCheckError, Subtype, SubtypeClass, SubtypeError,
};

mod types;
pub use types::MessageType;

mod xid;
pub use xid::XidSequence;
