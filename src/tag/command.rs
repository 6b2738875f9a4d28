// Copyright 2019-2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::apdu::{Apdu, ApduInstructions, APDU_HEADER_LEN, CLA_INTERINDUSTRY, SELECT_BY_NAME};
use byteorder::{BigEndian, ByteOrder};
use core::convert::TryFrom;

/// NFC Forum Type 4 Tag application, version 2.0 of the mapping.
pub const NDEF_APPLICATION_AID: [u8; 7] = [0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01];
pub const CC_FILE_ID: u16 = 0xE103;
pub const NDEF_FILE_ID: u16 = 0xE104;

const SELECT_APPLICATION_HEADER: [u8; APDU_HEADER_LEN] = [
    CLA_INTERINDUSTRY,
    ApduInstructions::Select as u8,
    SELECT_BY_NAME,
    0x00,
];
const INS_SELECT: u8 = ApduInstructions::Select as u8;
const INS_READ_BINARY: u8 = ApduInstructions::ReadBinary as u8;
// Header and one length byte.
const MIN_COMMAND_LEN: usize = APDU_HEADER_LEN + 1;
// The file identifier follows the header and Lc.
const FILE_ID_OFFSET: usize = APDU_HEADER_LEN + 1;

/// A command APDU, classified by what the tag does with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// SELECT by name of the NDEF application.
    SelectApplication,
    /// SELECT of an elementary file. The identifier is missing in commands shorter than 7 bytes.
    SelectFile(Option<u16>),
    ReadBinary { offset: u16, length: u8 },
    Unrecognized,
}

impl From<&[u8]> for Command {
    /// Classifies a command APDU. Anything malformed ends up as `Unrecognized`.
    fn from(command_apdu: &[u8]) -> Self {
        if command_apdu.starts_with(&SELECT_APPLICATION_HEADER) {
            // Only the NDEF application lives on this tag. Answering other AIDs would make
            // readers believe, for example, that a payment application is present.
            return match Apdu::try_from(command_apdu) {
                Ok(apdu) if apdu.data == &NDEF_APPLICATION_AID[..] => Command::SelectApplication,
                _ => Command::Unrecognized,
            };
        }
        if command_apdu.len() < MIN_COMMAND_LEN || command_apdu[0] != CLA_INTERINDUSTRY {
            return Command::Unrecognized;
        }
        match command_apdu[1] {
            INS_SELECT => Command::SelectFile(
                command_apdu
                    .get(FILE_ID_OFFSET..FILE_ID_OFFSET + 2)
                    .map(BigEndian::read_u16),
            ),
            INS_READ_BINARY => Command::ReadBinary {
                offset: BigEndian::read_u16(&command_apdu[2..4]),
                length: command_apdu[4],
            },
            _ => Command::Unrecognized,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn classify(command_apdu: &[u8]) -> Command {
        Command::from(command_apdu)
    }

    #[test]
    fn test_select_application() {
        let with_le = [
            0x00, 0xA4, 0x04, 0x00, 0x07, 0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01, 0x00,
        ];
        assert_eq!(classify(&with_le), Command::SelectApplication);
        let without_le = [
            0x00, 0xA4, 0x04, 0x00, 0x07, 0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01,
        ];
        assert_eq!(classify(&without_le), Command::SelectApplication);
    }

    #[test]
    fn test_select_other_application() {
        // FIDO applet.
        let fido = [
            0x00, 0xA4, 0x04, 0x00, 0x08, 0xA0, 0x00, 0x00, 0x06, 0x47, 0x2F, 0x00, 0x01, 0x00,
        ];
        assert_eq!(classify(&fido), Command::Unrecognized);
        // Version 1.0 of the NDEF application.
        let ndef_v1 = [
            0x00, 0xA4, 0x04, 0x00, 0x07, 0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x00, 0x00,
        ];
        assert_eq!(classify(&ndef_v1), Command::Unrecognized);
    }

    #[test]
    fn test_select_application_truncated() {
        let truncated = [0x00, 0xA4, 0x04, 0x00, 0x07, 0xD2, 0x76];
        assert_eq!(classify(&truncated), Command::Unrecognized);
        assert_eq!(classify(&SELECT_APPLICATION_HEADER), Command::Unrecognized);
    }

    #[test]
    fn test_select_file() {
        let cc = [0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x03];
        assert_eq!(classify(&cc), Command::SelectFile(Some(CC_FILE_ID)));
        let ndef = [0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x04];
        assert_eq!(classify(&ndef), Command::SelectFile(Some(NDEF_FILE_ID)));
        let other = [0x00, 0xA4, 0x02, 0x0C, 0x02, 0x3F, 0x00, 0x00];
        assert_eq!(classify(&other), Command::SelectFile(Some(0x3F00)));
    }

    #[test]
    fn test_select_file_without_identifier() {
        assert_eq!(
            classify(&[0x00, 0xA4, 0x00, 0x0C, 0x02]),
            Command::SelectFile(None)
        );
        assert_eq!(
            classify(&[0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1]),
            Command::SelectFile(None)
        );
    }

    #[test]
    fn test_read_binary() {
        assert_eq!(
            classify(&[0x00, 0xB0, 0x00, 0x00, 0x0F]),
            Command::ReadBinary {
                offset: 0,
                length: 15
            }
        );
        assert_eq!(
            classify(&[0x00, 0xB0, 0x01, 0x02, 0xFF]),
            Command::ReadBinary {
                offset: 0x0102,
                length: 0xFF
            }
        );
        assert_eq!(
            classify(&[0x00, 0xB0, 0x00, 0x02, 0x00]),
            Command::ReadBinary {
                offset: 2,
                length: 0
            }
        );
    }

    #[test]
    fn test_undersized() {
        assert_eq!(classify(&[]), Command::Unrecognized);
        assert_eq!(classify(&[0x00]), Command::Unrecognized);
        assert_eq!(classify(&[0x00, 0xA4, 0x00, 0x0C]), Command::Unrecognized);
        assert_eq!(classify(&[0x00, 0xB0, 0x00, 0x00]), Command::Unrecognized);
    }

    #[test]
    fn test_unknown_instruction() {
        // UPDATE BINARY
        let update = [0x00, 0xD6, 0x00, 0x00, 0x02, 0x00, 0x00];
        assert_eq!(classify(&update), Command::Unrecognized);
        // Proprietary class.
        let proprietary = [0x80, 0xB0, 0x00, 0x00, 0x0F];
        assert_eq!(classify(&proprietary), Command::Unrecognized);
    }
}
