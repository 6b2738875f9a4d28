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

use super::apdu::{ApduStatusCode, STATUS_WORD_LEN};
use alloc::vec::Vec;
use byteorder::{BigEndian, ByteOrder};

/// Builds a response APDU: the payload followed by the status word.
pub fn build_response(payload: &[u8], status: ApduStatusCode) -> Vec<u8> {
    let mut response = Vec::with_capacity(payload.len() + STATUS_WORD_LEN);
    response.extend_from_slice(payload);
    let mut status_word = [0; STATUS_WORD_LEN];
    BigEndian::write_u16(&mut status_word, status.into());
    response.extend_from_slice(&status_word);
    response
}

/// Converts the outcome of processing into a response APDU.
///
/// Failures carry no payload.
pub fn to_response_apdu(result: Result<&[u8], ApduStatusCode>) -> Vec<u8> {
    match result {
        Ok(payload) => build_response(payload, ApduStatusCode::SW_SUCCESS),
        Err(status) => build_response(&[], status),
    }
}
