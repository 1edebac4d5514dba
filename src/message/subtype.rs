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

use crate::{
    codes::{ErrorType, FlowModCommand, GroupModCommand, MeterModCommand, MultipartType},
    message::MessageType,
    version::ProtocolVersion,
};

/// The identity of a secondary enumeration designated by a message type.
///
/// A fixed subset of message types carries exactly one such enumeration in
/// its body (the error type of an ERROR message, the command of a FLOW_MOD,
/// the multipart kind of the MULTIPART pair); all other types carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtypeClass {
    /// The high-level error kind of an ERROR message.
    ErrorType,
    /// The command of a FLOW_MOD message.
    FlowModCommand,
    /// The command of a GROUP_MOD message.
    GroupModCommand,
    /// The command of a METER_MOD message.
    MeterModCommand,
    /// The body kind of a MULTIPART_REQUEST or MULTIPART_REPLY message.
    MultipartType,
}

/// A subtype value attached to a message at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    /// An [`ErrorType`] for ERROR messages.
    Error(ErrorType),
    /// A [`FlowModCommand`] for FLOW_MOD messages.
    FlowMod(FlowModCommand),
    /// A [`GroupModCommand`] for GROUP_MOD messages.
    GroupMod(GroupModCommand),
    /// A [`MeterModCommand`] for METER_MOD messages.
    MeterMod(MeterModCommand),
    /// A [`MultipartType`] for the MULTIPART message pair.
    Multipart(MultipartType),
}

impl Subtype {
    /// Returns the enumeration identity of this value.
    pub const fn class(&self) -> SubtypeClass {
        match self {
            Self::Error(_) => SubtypeClass::ErrorType,
            Self::FlowMod(_) => SubtypeClass::FlowModCommand,
            Self::GroupMod(_) => SubtypeClass::GroupModCommand,
            Self::MeterMod(_) => SubtypeClass::MeterModCommand,
            Self::Multipart(_) => SubtypeClass::MultipartType,
        }
    }
}

impl MessageType {
    /// Returns the subtype enumeration designated by this message type, if
    /// any.
    pub const fn subtype_class(self) -> Option<SubtypeClass> {
        match self {
            Self::Error => Some(SubtypeClass::ErrorType),
            Self::FlowMod => Some(SubtypeClass::FlowModCommand),
            Self::GroupMod => Some(SubtypeClass::GroupModCommand),
            Self::MeterMod => Some(SubtypeClass::MeterModCommand),
            Self::MultipartRequest | Self::MultipartReply => Some(SubtypeClass::MultipartType),
            _ => None,
        }
    }
}

/// Checks that a subtype value is compatible with a message type.
///
/// This is purely a gate between the message type and the *identity* of the
/// subtype enumeration, independent of any protocol version: whether the
/// value itself exists in a given version stays with that enumeration's own
/// codec. Messages without a subtype are not checked here; the gate applies
/// to present values only.
pub fn check_subtype(message_type: MessageType, subtype: &Subtype) -> Result<(), SubtypeError> {
    match message_type.subtype_class() {
        None => Err(SubtypeError::NotAllowed {
            message_type,
            found: subtype.class(),
        }),
        Some(expected) if expected == subtype.class() => Ok(()),
        Some(expected) => Err(SubtypeError::WrongClass {
            message_type,
            expected,
            found: subtype.class(),
        }),
    }
}

/// Checks a message construction request against a protocol version.
///
/// Fails fast when the version does not carry the message type at all, then
/// applies [`check_subtype`] to a present subtype value.
pub fn check_message(
    version: ProtocolVersion,
    message_type: MessageType,
    subtype: Option<&Subtype>,
) -> Result<(), MessageCheckError> {
    if !message_type.is_supported_in(version) {
        return Err(MessageCheckError::TypeNotSupported {
            message_type,
            version,
        });
    }
    if let Some(subtype) = subtype {
        check_subtype(message_type, subtype)?;
    }
    Ok(())
}

/// Errors raised by the message-type/subtype compatibility gate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubtypeError {
    /// The message type does not carry any subtype.
    #[error("{message_type} does not carry a subtype, got {found:?}")]
    NotAllowed {
        /// The type without a designated enumeration.
        message_type: MessageType,
        /// The identity of the offered value.
        found: SubtypeClass,
    },
    /// The message type designates a different subtype enumeration.
    #[error("{message_type} carries {expected:?} subtypes, got {found:?}")]
    WrongClass {
        /// The type with a designated enumeration.
        message_type: MessageType,
        /// The designated identity.
        expected: SubtypeClass,
        /// The identity of the offered value.
        found: SubtypeClass,
    },
}

/// Errors raised when validating a message construction request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MessageCheckError {
    /// The version does not carry the message type.
    #[error("{message_type} does not exist in {version}")]
    TypeNotSupported {
        /// The unrepresentable type.
        message_type: MessageType,
        /// The version lacking it.
        version: ProtocolVersion,
    },
    /// The subtype value has the wrong enumeration identity.
    #[error(transparent)]
    Subtype(#[from] SubtypeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::param_test;

    #[test]
    fn most_types_designate_no_subtype() {
        for message_type in MessageType::TABLE.values() {
            let designated = matches!(
                message_type,
                MessageType::Error
                    | MessageType::FlowMod
                    | MessageType::GroupMod
                    | MessageType::MeterMod
                    | MessageType::MultipartRequest
                    | MessageType::MultipartReply
            );
            assert_eq!(message_type.subtype_class().is_some(), designated);
        }
    }

    #[test]
    fn every_designated_constant_is_accepted() {
        for error_type in ErrorType::TABLE.values() {
            check_subtype(MessageType::Error, &Subtype::Error(error_type)).unwrap();
        }
        for command in FlowModCommand::TABLE.values() {
            check_subtype(MessageType::FlowMod, &Subtype::FlowMod(command)).unwrap();
        }
        for command in GroupModCommand::TABLE.values() {
            check_subtype(MessageType::GroupMod, &Subtype::GroupMod(command)).unwrap();
        }
        for command in MeterModCommand::TABLE.values() {
            check_subtype(MessageType::MeterMod, &Subtype::MeterMod(command)).unwrap();
        }
        for kind in MultipartType::TABLE.values() {
            check_subtype(MessageType::MultipartRequest, &Subtype::Multipart(kind)).unwrap();
            check_subtype(MessageType::MultipartReply, &Subtype::Multipart(kind)).unwrap();
        }
    }

    param_test! {
        unrelated_values_are_rejected: [
            error_with_command: (
                MessageType::Error,
                Subtype::FlowMod(FlowModCommand::Add),
                SubtypeClass::ErrorType,
            ),
            flow_mod_with_multipart: (
                MessageType::FlowMod,
                Subtype::Multipart(MultipartType::Desc),
                SubtypeClass::FlowModCommand,
            ),
            multipart_with_error: (
                MessageType::MultipartReply,
                Subtype::Error(ErrorType::HelloFailed),
                SubtypeClass::MultipartType,
            ),
        ]
    }
    fn unrelated_values_are_rejected(
        message_type: MessageType,
        subtype: Subtype,
        expected: SubtypeClass,
    ) {
        assert_eq!(
            check_subtype(message_type, &subtype),
            Err(SubtypeError::WrongClass {
                message_type,
                expected,
                found: subtype.class(),
            })
        );
    }

    param_test! {
        subtype_free_types_reject_all_values: [
            hello: (MessageType::Hello, Subtype::FlowMod(FlowModCommand::Add)),
            barrier: (MessageType::BarrierRequest, Subtype::Error(ErrorType::BadRequest)),
            packet_in: (MessageType::PacketIn, Subtype::Multipart(MultipartType::Flow)),
        ]
    }
    fn subtype_free_types_reject_all_values(message_type: MessageType, subtype: Subtype) {
        assert_eq!(
            check_subtype(message_type, &subtype),
            Err(SubtypeError::NotAllowed {
                message_type,
                found: subtype.class(),
            })
        );
    }

    mod check_message {
        use super::*;

        #[test]
        fn gates_the_type_by_version_first() {
            assert_eq!(
                check_message(
                    ProtocolVersion::V1_0,
                    MessageType::GroupMod,
                    Some(&Subtype::GroupMod(GroupModCommand::Add)),
                ),
                Err(MessageCheckError::TypeNotSupported {
                    message_type: MessageType::GroupMod,
                    version: ProtocolVersion::V1_0,
                })
            );
            check_message(
                ProtocolVersion::V1_1,
                MessageType::GroupMod,
                Some(&Subtype::GroupMod(GroupModCommand::Add)),
            )
            .unwrap();
        }

        #[test]
        fn absent_subtypes_are_always_acceptable() {
            for version in ProtocolVersion::ALL {
                for message_type in MessageType::TABLE.values() {
                    if message_type.is_supported_in(version) {
                        check_message(version, message_type, None).unwrap();
                    }
                }
            }
        }

        #[test]
        fn subtype_identity_errors_pass_through() {
            assert_eq!(
                check_message(
                    ProtocolVersion::V1_3,
                    MessageType::Hello,
                    Some(&Subtype::Error(ErrorType::BadRequest)),
                ),
                Err(MessageCheckError::Subtype(SubtypeError::NotAllowed {
                    message_type: MessageType::Hello,
                    found: SubtypeClass::ErrorType,
                }))
            );
        }
    }

    #[test]
    fn every_designated_enumeration_has_values() {
        for message_type in MessageType::TABLE.values() {
            let Some(class) = message_type.subtype_class() else {
                continue;
            };
            let supported_somewhere = match class {
                SubtypeClass::ErrorType => any_version(|v| ErrorType::TABLE.supported_in(v)),
                SubtypeClass::FlowModCommand => {
                    any_version(|v| FlowModCommand::TABLE.supported_in(v))
                }
                SubtypeClass::GroupModCommand => {
                    any_version(|v| GroupModCommand::TABLE.supported_in(v))
                }
                SubtypeClass::MeterModCommand => {
                    any_version(|v| MeterModCommand::TABLE.supported_in(v))
                }
                SubtypeClass::MultipartType => {
                    any_version(|v| MultipartType::TABLE.supported_in(v))
                }
            };
            assert!(supported_somewhere, "{class:?} has no values anywhere");
        }
    }

    fn any_version(predicate: impl Fn(ProtocolVersion) -> bool) -> bool {
        ProtocolVersion::ALL.into_iter().any(predicate)
    }
}
