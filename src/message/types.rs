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

crate::coded_enum! {
    /// The type of an OpenFlow message.
    ///
    /// Every message carries its type as the second header byte. The numeric
    /// codes form a contiguous, version-specific range: 1.1 inserted
    /// GROUP_MOD and TABLE_MOD into the middle of the 1.0 numbering, shifting
    /// everything from PORT_MOD onwards, and later versions appended to the
    /// end.
    pub enum MessageType {
        Hello => [0, 0, 0, 0],
        Error => [1, 1, 1, 1],
        EchoRequest => [2, 2, 2, 2],
        EchoReply => [3, 3, 3, 3],
        /// Named VENDOR before 1.2.
        Experimenter => [4, 4, 4, 4],
        FeaturesRequest => [5, 5, 5, 5],
        FeaturesReply => [6, 6, 6, 6],
        GetConfigRequest => [7, 7, 7, 7],
        GetConfigReply => [8, 8, 8, 8],
        SetConfig => [9, 9, 9, 9],
        PacketIn => [10, 10, 10, 10],
        FlowRemoved => [11, 11, 11, 11],
        PortStatus => [12, 12, 12, 12],
        PacketOut => [13, 13, 13, 13],
        FlowMod => [14, 14, 14, 14],
        GroupMod => [-, 15, 15, 15],
        PortMod => [15, 16, 16, 16],
        TableMod => [-, 17, 17, 17],
        /// Named STATS_REQUEST before 1.3.
        MultipartRequest => [16, 18, 18, 18],
        /// Named STATS_REPLY before 1.3.
        MultipartReply => [17, 19, 19, 19],
        BarrierRequest => [18, 20, 20, 20],
        BarrierReply => [19, 21, 21, 21],
        QueueGetConfigRequest => [20, 22, 22, 22],
        QueueGetConfigReply => [21, 23, 23, 23],
        RoleRequest => [-, -, 24, 24],
        RoleReply => [-, -, 25, 25],
        GetAsyncRequest => [-, -, -, 26],
        GetAsyncReply => [-, -, -, 27],
        SetAsync => [-, -, -, 28],
        MeterMod => [-, -, -, 29],
    }
}

impl MessageType {
    /// Returns the diagnostic token of this type, as rendered in message
    /// headers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hello => "HELLO",
            Self::Error => "ERROR",
            Self::EchoRequest => "ECHO_REQUEST",
            Self::EchoReply => "ECHO_REPLY",
            Self::Experimenter => "EXPERIMENTER",
            Self::FeaturesRequest => "FEATURES_REQUEST",
            Self::FeaturesReply => "FEATURES_REPLY",
            Self::GetConfigRequest => "GET_CONFIG_REQUEST",
            Self::GetConfigReply => "GET_CONFIG_REPLY",
            Self::SetConfig => "SET_CONFIG",
            Self::PacketIn => "PACKET_IN",
            Self::FlowRemoved => "FLOW_REMOVED",
            Self::PortStatus => "PORT_STATUS",
            Self::PacketOut => "PACKET_OUT",
            Self::FlowMod => "FLOW_MOD",
            Self::GroupMod => "GROUP_MOD",
            Self::PortMod => "PORT_MOD",
            Self::TableMod => "TABLE_MOD",
            Self::MultipartRequest => "MULTIPART_REQUEST",
            Self::MultipartReply => "MULTIPART_REPLY",
            Self::BarrierRequest => "BARRIER_REQUEST",
            Self::BarrierReply => "BARRIER_REPLY",
            Self::QueueGetConfigRequest => "QUEUE_GET_CONFIG_REQUEST",
            Self::QueueGetConfigReply => "QUEUE_GET_CONFIG_REPLY",
            Self::RoleRequest => "ROLE_REQUEST",
            Self::RoleReply => "ROLE_REPLY",
            Self::GetAsyncRequest => "GET_ASYNC_REQUEST",
            Self::GetAsyncReply => "GET_ASYNC_REPLY",
            Self::SetAsync => "SET_ASYNC",
            Self::MeterMod => "METER_MOD",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{test_utils::param_test, version::ProtocolVersion};

    param_test! {
        codes_form_a_contiguous_bijection: [
            v1_0: (ProtocolVersion::V1_0, 22),
            v1_1: (ProtocolVersion::V1_1, 24),
            v1_2: (ProtocolVersion::V1_2, 26),
            v1_3: (ProtocolVersion::V1_3, 30),
        ]
    }
    fn codes_form_a_contiguous_bijection(version: ProtocolVersion, count: u32) {
        let mut seen = HashSet::new();
        for code in 0..count {
            let message_type = MessageType::decode(code, version).unwrap();
            assert_eq!(message_type.code(version), Ok(code));
            assert!(seen.insert(message_type), "code {code} decoded twice");
        }
        assert!(MessageType::decode(count, version).is_err());
    }

    param_test! {
        codes_shift_where_1_1_inserted_types: [
            port_mod: (MessageType::PortMod, 15, 16),
            multipart_request: (MessageType::MultipartRequest, 16, 18),
            multipart_reply: (MessageType::MultipartReply, 17, 19),
            barrier_request: (MessageType::BarrierRequest, 18, 20),
            queue_get_config_reply: (MessageType::QueueGetConfigReply, 21, 23),
        ]
    }
    fn codes_shift_where_1_1_inserted_types(
        message_type: MessageType,
        code_1_0: u32,
        code_1_1: u32,
    ) {
        assert_eq!(message_type.code(ProtocolVersion::V1_0), Ok(code_1_0));
        assert_eq!(message_type.code(ProtocolVersion::V1_1), Ok(code_1_1));
        assert_eq!(message_type.code(ProtocolVersion::V1_3), Ok(code_1_1));
    }

    param_test! {
        later_types_are_gated_by_version: [
            group_mod: (MessageType::GroupMod, ProtocolVersion::V1_0, ProtocolVersion::V1_1),
            table_mod: (MessageType::TableMod, ProtocolVersion::V1_0, ProtocolVersion::V1_1),
            role_request: (MessageType::RoleRequest, ProtocolVersion::V1_1, ProtocolVersion::V1_2),
            set_async: (MessageType::SetAsync, ProtocolVersion::V1_2, ProtocolVersion::V1_3),
            meter_mod: (MessageType::MeterMod, ProtocolVersion::V1_2, ProtocolVersion::V1_3),
        ]
    }
    fn later_types_are_gated_by_version(
        message_type: MessageType,
        unsupported: ProtocolVersion,
        supported: ProtocolVersion,
    ) {
        assert!(!message_type.is_supported_in(unsupported));
        assert!(message_type.code(unsupported).is_err());
        assert!(message_type.is_supported_in(supported));
    }

    #[test]
    fn same_code_can_denote_different_types() {
        assert_eq!(
            MessageType::decode(15, ProtocolVersion::V1_0),
            Ok(MessageType::PortMod)
        );
        assert_eq!(
            MessageType::decode(15, ProtocolVersion::V1_3),
            Ok(MessageType::GroupMod)
        );
    }

    #[test]
    fn displays_the_diagnostic_token() {
        assert_eq!(MessageType::PacketIn.to_string(), "PACKET_IN");
        assert_eq!(
            MessageType::QueueGetConfigRequest.to_string(),
            "QUEUE_GET_CONFIG_REQUEST"
        );
    }

    #[test]
    fn table_is_consistent() {
        MessageType::TABLE.validate().unwrap();
    }
}
