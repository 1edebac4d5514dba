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

//! Coded enumerations of the protocol.
//!
//! Each enumeration is declared through [`coded_enum!`][crate::coded_enum]
//! with one code table per protocol version. Codes are not stable across
//! versions: protocol revisions inserted values into the middle of existing
//! enumerations and renumbered everything behind the insertion point, so a
//! code only has meaning together with the version it was captured under.

crate::coded_enum! {
    /// The command of a [`FlowMod`][crate::message::MessageType::FlowMod]
    /// request.
    pub enum FlowModCommand {
        Add => [0, 0, 0, 0],
        Modify => [1, 1, 1, 1],
        /// Modify only entries that strictly match wildcards and priority.
        ModifyStrict => [2, 2, 2, 2],
        Delete => [3, 3, 3, 3],
        /// Delete only entries that strictly match wildcards and priority.
        DeleteStrict => [4, 4, 4, 4],
    }
}

crate::coded_enum! {
    /// The high-level kind of an [`Error`][crate::message::MessageType::Error]
    /// message.
    ///
    /// This is the enumeration with the most churn across versions: 1.1
    /// inserted `BadInstruction` and `BadMatch` into the middle, shifting
    /// every later value by two or more codes, and each revision since has
    /// appended further kinds.
    pub enum ErrorType {
        HelloFailed => [0, 0, 0, 0],
        BadRequest => [1, 1, 1, 1],
        BadAction => [2, 2, 2, 2],
        BadInstruction => [-, 3, 3, 3],
        BadMatch => [-, 4, 4, 4],
        FlowModFailed => [3, 5, 5, 5],
        GroupModFailed => [-, 6, 6, 6],
        PortModFailed => [4, 7, 7, 7],
        TableModFailed => [-, 8, 8, 8],
        QueueOpFailed => [5, 9, 9, 9],
        SwitchConfigFailed => [-, 10, 10, 10],
        RoleRequestFailed => [-, -, 11, 11],
        MeterModFailed => [-, -, -, 12],
        TableFeaturesFailed => [-, -, -, 13],
        /// Experimenter-defined error, with the code parked at the top of
        /// the 16-bit range.
        Experimenter => [-, -, 0xffff, 0xffff],
    }
}

crate::coded_enum! {
    /// The body kind of a
    /// [`MultipartRequest`][crate::message::MessageType::MultipartRequest] or
    /// [`MultipartReply`][crate::message::MessageType::MultipartReply]
    /// message. Known as statistics request/reply before 1.3.
    pub enum MultipartType {
        Desc => [0, 0, 0, 0],
        Flow => [1, 1, 1, 1],
        Aggregate => [2, 2, 2, 2],
        Table => [3, 3, 3, 3],
        PortStats => [4, 4, 4, 4],
        Queue => [5, 5, 5, 5],
        Group => [-, 6, 6, 6],
        GroupDesc => [-, 7, 7, 7],
        GroupFeatures => [-, -, 8, 8],
        Meter => [-, -, -, 9],
        MeterConfig => [-, -, -, 10],
        MeterFeatures => [-, -, -, 11],
        TableFeatures => [-, -, -, 12],
        PortDesc => [-, -, -, 13],
        /// Called vendor in 1.0 and 1.1; same code throughout.
        Experimenter => [0xffff, 0xffff, 0xffff, 0xffff],
    }
}

crate::coded_enum! {
    /// The command of a [`GroupMod`][crate::message::MessageType::GroupMod]
    /// request. Groups exist since 1.1.
    pub enum GroupModCommand {
        Add => [-, 0, 0, 0],
        Modify => [-, 1, 1, 1],
        Delete => [-, 2, 2, 2],
    }
}

crate::coded_enum! {
    /// The command of a [`MeterMod`][crate::message::MessageType::MeterMod]
    /// request. Meters exist since 1.3.
    pub enum MeterModCommand {
        Add => [-, -, -, 0],
        Modify => [-, -, -, 1],
        Delete => [-, -, -, 2],
    }
}

crate::coded_enum! {
    /// Why a packet was sent to the controller in a
    /// [`PacketIn`][crate::message::MessageType::PacketIn] message.
    pub enum PacketInReason {
        /// No matching flow entry.
        NoMatch => [0, 0, 0, 0],
        /// An action explicitly directed the packet to the controller.
        Action => [1, 1, 1, 1],
        InvalidTtl => [-, -, 2, 2],
    }
}

crate::coded_enum! {
    /// Why a [`PortStatus`][crate::message::MessageType::PortStatus]
    /// notification was sent.
    pub enum PortReason {
        Add => [0, 0, 0, 0],
        Delete => [1, 1, 1, 1],
        Modify => [2, 2, 2, 2],
    }
}

crate::coded_enum! {
    /// Why a flow entry was removed, carried in a
    /// [`FlowRemoved`][crate::message::MessageType::FlowRemoved] message.
    pub enum FlowRemovedReason {
        IdleTimeout => [0, 0, 0, 0],
        HardTimeout => [1, 1, 1, 1],
        Delete => [2, 2, 2, 2],
        /// The entry's group was deleted.
        GroupDelete => [-, 3, 3, 3],
    }
}

crate::coded_enum! {
    /// The controller role negotiated through the
    /// [`RoleRequest`][crate::message::MessageType::RoleRequest] exchange,
    /// available since 1.2.
    pub enum ControllerRole {
        /// Keep the current role; used to query it.
        NoChange => [-, -, 0, 0],
        Equal => [-, -, 1, 1],
        Master => [-, -, 2, 2],
        Slave => [-, -, 3, 3],
    }
}
