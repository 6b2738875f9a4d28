// Copyright 2020-2023 Google LLC
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

use super::command::NDEF_FILE_ID;
use crate::api::customization::Customization;
use byteorder::{BigEndian, ByteOrder};

pub const CC_LEN: usize = 15;
/// Mapping version 2.0.
const MAPPING_VERSION: u8 = 0x20;
const NDEF_FILE_CONTROL_TLV_TAG: u8 = 0x04;
const NDEF_FILE_CONTROL_TLV_LEN: u8 = 0x06;

/// Capability Container file of a Type 4 Tag, describing the NDEF file.
//  +-------+---------+-----+-----+--------------------------------------------+
//  | CCLEN | version | MLe | MLc | NDEF File Control TLV                      |
//  |       |         |     |     | T | L | file ID | max size | read | write |
//  +-------+---------+-----+-----+--------------------------------------------+
//  |   2   |    1    |  2  |  2  | 1 | 1 |    2    |    2     |  1   |   1   |
//  +-------+---------+-----+-----+--------------------------------------------+
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapabilityContainer {
    pub max_read_data_size: u16,
    pub max_write_data_size: u16,
    pub ndef_file_id: u16,
    pub max_ndef_file_size: u16,
    pub ndef_read_access: u8,
    pub ndef_write_access: u8,
}

impl CapabilityContainer {
    pub fn new(customization: &impl Customization) -> Self {
        CapabilityContainer {
            max_read_data_size: customization.max_read_data_size(),
            max_write_data_size: customization.max_write_data_size(),
            ndef_file_id: NDEF_FILE_ID,
            max_ndef_file_size: customization.max_ndef_file_size(),
            ndef_read_access: customization.ndef_read_access(),
            ndef_write_access: customization.ndef_write_access(),
        }
    }

    pub fn to_bytes(&self) -> [u8; CC_LEN] {
        let mut bytes = [0; CC_LEN];
        {
            let (cc_len, version, mle, mlc, tlv_tag, tlv_len, file_id, max_size, read, write) =
                mut_array_refs![&mut bytes, 2, 1, 2, 2, 1, 1, 2, 2, 1, 1];
            BigEndian::write_u16(cc_len, CC_LEN as u16);
            version[0] = MAPPING_VERSION;
            BigEndian::write_u16(mle, self.max_read_data_size);
            BigEndian::write_u16(mlc, self.max_write_data_size);
            tlv_tag[0] = NDEF_FILE_CONTROL_TLV_TAG;
            tlv_len[0] = NDEF_FILE_CONTROL_TLV_LEN;
            BigEndian::write_u16(file_id, self.ndef_file_id);
            BigEndian::write_u16(max_size, self.max_ndef_file_size);
            read[0] = self.ndef_read_access;
            write[0] = self.ndef_write_access;
        }
        bytes
    }
}
