// Copyright 2023 Google LLC
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

//! NDEF file content: a length prefixed message of one short well-known URI record.

use super::apdu::ApduStatusCode;
use alloc::string::String;
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};
use core::convert::TryFrom;
#[cfg(test)]
use enum_iterator::IntoEnumIterator;

/// Message begin, message end, short record, well-known type name format.
const RECORD_HEADER: u8 = 0xD1;
const URI_RECORD_TYPE: u8 = b'U';
/// Length of the NLEN field in front of the message.
pub const NLEN_LEN: usize = 2;
/// Header, type length, payload length and type.
const RECORD_PREAMBLE_LEN: usize = 4;
/// Short records have a one byte payload length, and the prefix code takes one of its 255 bytes.
pub const MAX_URI_LEN: usize = 254;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NdefError {
    /// The URL does not fit in a short record, even after abbreviation.
    UriTooLong,
    /// The bytes are not a message of one short URI record.
    Malformed,
}

impl From<NdefError> for ApduStatusCode {
    fn from(_: NdefError) -> Self {
        ApduStatusCode::SW_INTERNAL_EXCEPTION
    }
}

/// URI identifier codes of the NFC Forum URI record type definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(test, derive(IntoEnumIterator))]
pub enum UriPrefix {
    None = 0x00,
    HttpWww = 0x01,
    HttpsWww = 0x02,
    Http = 0x03,
    Https = 0x04,
}

impl UriPrefix {
    // Longer prefixes come first, "https://" also starts "https://www.".
    const ABBREVIATIONS: [UriPrefix; 4] = [
        UriPrefix::HttpsWww,
        UriPrefix::HttpWww,
        UriPrefix::Https,
        UriPrefix::Http,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UriPrefix::None => "",
            UriPrefix::HttpWww => "http://www.",
            UriPrefix::HttpsWww => "https://www.",
            UriPrefix::Http => "http://",
            UriPrefix::Https => "https://",
        }
    }

    /// Splits a URL into its longest abbreviable prefix and the remainder.
    ///
    /// Matching is case sensitive and the remainder is kept verbatim.
    pub fn split(url: &str) -> (UriPrefix, &str) {
        for prefix in UriPrefix::ABBREVIATIONS.iter() {
            if let Some(remainder) = url.strip_prefix(prefix.as_str()) {
                return (*prefix, remainder);
            }
        }
        (UriPrefix::None, url)
    }
}

impl TryFrom<u8> for UriPrefix {
    type Error = NdefError;

    fn try_from(code: u8) -> Result<Self, NdefError> {
        match code {
            0x00 => Ok(UriPrefix::None),
            0x01 => Ok(UriPrefix::HttpWww),
            0x02 => Ok(UriPrefix::HttpsWww),
            0x03 => Ok(UriPrefix::Http),
            0x04 => Ok(UriPrefix::Https),
            _ => Err(NdefError::Malformed),
        }
    }
}

/// Returns the size of the NDEF file holding `url`, length prefix included.
pub fn encoded_len(url: &str) -> Result<usize, NdefError> {
    let (_, remainder) = UriPrefix::split(url);
    if remainder.len() > MAX_URI_LEN {
        return Err(NdefError::UriTooLong);
    }
    Ok(NLEN_LEN + RECORD_PREAMBLE_LEN + 1 + remainder.len())
}

/// Encodes `url` as the content of the NDEF file.
//  +------+--------+----------+-------------+------+--------+-----------+
//  | NLEN | header | type len | payload len | type | prefix | remainder |
//  +------+--------+----------+-------------+------+--------+-----------+
//  |  2   |  0xD1  |   0x01   |      1      | 'U'  |   1    |    ...    |
//  +------+--------+----------+-------------+------+--------+-----------+
pub fn encode_uri_message(url: &str) -> Result<Vec<u8>, NdefError> {
    let (prefix, remainder) = UriPrefix::split(url);
    let uri = remainder.as_bytes();
    if uri.len() > MAX_URI_LEN {
        return Err(NdefError::UriTooLong);
    }
    let record_len = RECORD_PREAMBLE_LEN + 1 + uri.len();
    let mut message = Vec::with_capacity(NLEN_LEN + record_len);
    message.extend_from_slice(&[0; NLEN_LEN]);
    BigEndian::write_u16(&mut message[..NLEN_LEN], record_len as u16);
    message.extend_from_slice(&[
        RECORD_HEADER,
        0x01,
        (uri.len() + 1) as u8,
        URI_RECORD_TYPE,
        prefix as u8,
    ]);
    message.extend_from_slice(uri);
    Ok(message)
}

/// Decodes the URL back from the content of the NDEF file.
pub fn decode_uri_message(message: &[u8]) -> Result<String, NdefError> {
    if message.len() < NLEN_LEN + RECORD_PREAMBLE_LEN + 1 {
        return Err(NdefError::Malformed);
    }
    let (nlen, record) = message.split_at(NLEN_LEN);
    if BigEndian::read_u16(nlen) as usize != record.len() {
        return Err(NdefError::Malformed);
    }
    let (preamble, payload) = record.split_at(RECORD_PREAMBLE_LEN);
    if preamble[0] != RECORD_HEADER
        || preamble[1] != 0x01
        || preamble[2] as usize != payload.len()
        || preamble[3] != URI_RECORD_TYPE
    {
        return Err(NdefError::Malformed);
    }
    let prefix = UriPrefix::try_from(payload[0])?;
    let remainder = core::str::from_utf8(&payload[1..]).map_err(|_| NdefError::Malformed)?;
    let mut url = String::with_capacity(prefix.as_str().len() + remainder.len());
    url.push_str(prefix.as_str());
    url.push_str(remainder);
    Ok(url)
}
