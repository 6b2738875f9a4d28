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

use alloc::string::String;
use core::convert::TryFrom;
use core::fmt::Write;

pub const APDU_HEADER_LEN: usize = 4;
pub const STATUS_WORD_LEN: usize = 2;

/// Status words this tag answers with.
///
/// Readers only distinguish success from failure for the commands a Type 4 Tag serves, so every
/// failure collapses into the generic one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ApduStatusCode {
    SW_SUCCESS = 0x90_00,
    /// No precise diagnosis.
    SW_INTERNAL_EXCEPTION = 0x6f_00,
}

impl From<ApduStatusCode> for u16 {
    fn from(code: ApduStatusCode) -> Self {
        code as u16
    }
}

pub enum ApduInstructions {
    Select = 0xA4,
    ReadBinary = 0xB0,
}

/// Interindustry class byte without secure messaging nor chaining.
pub const CLA_INTERINDUSTRY: u8 = 0x00;
/// P1 of SELECT when selecting by DF name, i.e. by AID.
pub const SELECT_BY_NAME: u8 = 0x04;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApduHeader {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
}

impl From<&[u8; APDU_HEADER_LEN]> for ApduHeader {
    fn from(header: &[u8; APDU_HEADER_LEN]) -> Self {
        ApduHeader {
            cla: header[0],
            ins: header[1],
            p1: header[2],
            p2: header[3],
        }
    }
}

/// A short command APDU, borrowing its data from the received frame.
///
/// Le is accepted but not kept, responses are never longer than the file read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Apdu<'a> {
    pub header: ApduHeader,
    pub data: &'a [u8],
}

impl<'a> TryFrom<&'a [u8]> for Apdu<'a> {
    type Error = ApduStatusCode;

    fn try_from(frame: &'a [u8]) -> Result<Self, ApduStatusCode> {
        if frame.len() < APDU_HEADER_LEN {
            return Err(ApduStatusCode::SW_INTERNAL_EXCEPTION);
        }
        //        +-----+-----+----+----+
        // header | CLA | INS | P1 | P2 |
        //        +-----+-----+----+----+
        let header: ApduHeader = array_ref!(frame, 0, APDU_HEADER_LEN).into();
        let body = &frame[APDU_HEADER_LEN..];

        let data = match body {
            // A single byte cannot be Lc, it would need at least one data byte after it.
            [] | [_] => &body[..0],
            [lc, rest @ ..] if *lc != 0 && rest.len() == *lc as usize => rest,
            [lc, rest @ .., _] if *lc != 0 && rest.len() == *lc as usize => rest,
            _ => return Err(ApduStatusCode::SW_INTERNAL_EXCEPTION),
        };
        Ok(Apdu { header, data })
    }
}

/// Renders bytes as contiguous upper-case hexadecimal, for diagnostics.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(2 * bytes.len());
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(hex, "{:02X}", byte);
    }
    hex
}
