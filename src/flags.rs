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

//! Bit-flag enumerations of the protocol.
//!
//! Each enumeration is declared through [`bitmap_enum!`][crate::bitmap_enum]
//! with one bit table per protocol version, and decodes from or encodes to
//! its wire bitmap with an explicit [`ParseMode`][crate::codec::ParseMode].

crate::bitmap_enum! {
    /// Switch configuration flags, carried in the flags field of
    /// [`SetConfig`][crate::message::MessageType::SetConfig] and
    /// [`GetConfigReply`][crate::message::MessageType::GetConfigReply]
    /// messages.
    ///
    /// The three fragment-handling policies are alternatives: exactly one is
    /// in force, and [`FragNormal`][Self::FragNormal] is what an all-zero
    /// flags field denotes.
    pub enum ConfigFlag {
        /// Handle IP fragments like any other packet.
        FragNormal => [zero, zero, zero, zero],
        /// Drop IP fragments.
        FragDrop => [0, 0, 0, 0],
        /// Reassemble IP fragments before matching.
        FragReasm => [1, 1, 1, 1],
        /// Send packets with an invalid TTL to the controller instead of
        /// processing them. Folded into the async configuration in 1.3.
        InvalidTtlToController => [-, 2, 2, -],
    }
    mutex [FragNormal, FragDrop, FragReasm];
}

crate::bitmap_enum! {
    /// Datapath capabilities advertised in a
    /// [`FeaturesReply`][crate::message::MessageType::FeaturesReply] message.
    pub enum Capability {
        FlowStats => [0, 0, 0, 0],
        TableStats => [1, 1, 1, 1],
        PortStats => [2, 2, 2, 2],
        /// 802.1d spanning tree, 1.0 only; later versions reuse its bit for
        /// [`GroupStats`][Self::GroupStats].
        Stp => [3, -, -, -],
        GroupStats => [-, 3, 3, 3],
        /// Can reassemble IP fragments.
        IpReasm => [5, 5, 5, 5],
        QueueStats => [6, 6, 6, 6],
        /// Match IP addresses in ARP packets; dropped in 1.3.
        ArpMatchIp => [7, 7, 7, -],
        /// Blocks ports on its own to break loops, new in 1.3.
        PortBlocked => [-, -, -, 8],
    }
}

crate::bitmap_enum! {
    /// Flags of a [`FlowMod`][crate::message::MessageType::FlowMod] request.
    pub enum FlowModFlag {
        /// Send a flow-removed message when the entry expires.
        SendFlowRem => [0, 0, 0, 0],
        /// Check for overlapping entries before adding.
        CheckOverlap => [1, 1, 1, 1],
        /// Emergency flow cache entry, 1.0 only; later versions reuse its
        /// bit for [`ResetCounts`][Self::ResetCounts].
        Emerg => [2, -, -, -],
        /// Reset the entry's packet and byte counters.
        ResetCounts => [-, 2, 2, 2],
        /// Do not keep a packet counter for the entry, new in 1.3.
        NoPktCounts => [-, -, -, 3],
        /// Do not keep a byte counter for the entry, new in 1.3.
        NoBytCounts => [-, -, -, 4],
    }
}

crate::bitmap_enum! {
    /// Group types a datapath supports, advertised as a bitmap in the
    /// group-features multipart reply. Groups themselves exist since 1.1.
    pub enum GroupType {
        /// Execute all buckets.
        All => [-, 0, 0, 0],
        /// Execute one bucket chosen by the switch.
        Select => [-, 1, 1, 1],
        /// Execute the single bucket; allows many entries to share it.
        Indirect => [-, 2, 2, 2],
        /// Fast failover: execute the first bucket with a live port.
        Ff => [-, 3, 3, 3],
    }
}

crate::bitmap_enum! {
    /// Flags of a
    /// [`MultipartReply`][crate::message::MessageType::MultipartReply]
    /// message.
    pub enum MultipartReplyFlag {
        /// More replies of the same request follow.
        ReplyMore => [0, 0, 0, 0],
    }
}
