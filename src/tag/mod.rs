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

pub mod apdu;
pub mod capability_container;
pub mod command;
pub mod emulation;
pub mod ndef;
pub mod response;
pub mod session;

#[cfg(feature = "debug_hce")]
use self::apdu::to_hex;
use self::apdu::ApduStatusCode;
use self::capability_container::CC_LEN;
use self::command::Command;
use self::emulation::{ActiveUrl, Emulation};
use self::response::{build_response, to_response_apdu};
use self::session::{DeactivationReason, SelectedFile, Session};
use crate::api::customization::Customization;
use crate::env::Env;
use alloc::vec::Vec;

const NO_DATA: &[u8] = &[];

/// Processes the command APDUs of the Type 4 Tag.
///
/// Holds the file selection of the current tap and the handle on the emulated URL. The files
/// served are built from the URL on first use and survive deactivation.
pub struct TagState {
    emulation: Emulation,
    session: Session,
}

impl TagState {
    pub fn new(emulation: Emulation) -> Self {
        TagState {
            emulation,
            session: Session::new(),
        }
    }

    pub fn emulation(&self) -> &Emulation {
        &self.emulation
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the response APDU to a command APDU.
    ///
    /// Every input, however malformed, results in exactly one response ending in a status word.
    pub fn process_apdu(&mut self, env: &mut impl Env, command_apdu: &[u8]) -> Vec<u8> {
        debug_hce!(env, "Received APDU: {}", to_hex(command_apdu));
        let active = match self.emulation.active() {
            Some(active) => active,
            None => {
                debug_hce!(env, "No URL to emulate");
                return build_response(NO_DATA, ApduStatusCode::SW_INTERNAL_EXCEPTION);
            }
        };
        let response = to_response_apdu(self.process_command(env, &active, command_apdu));
        debug_hce!(env, "Sending response: {}", to_hex(&response));
        response
    }

    fn process_command<'a>(
        &mut self,
        env: &mut impl Env,
        active: &'a ActiveUrl,
        command_apdu: &[u8],
    ) -> Result<&'a [u8], ApduStatusCode> {
        if !active.is_built() {
            debug_hce!(env, "Building files for {}", active.url());
        }
        let ndef_message = active.ndef_message()?;
        let capability_container = active.capability_container(env.customization());

        let command = Command::from(command_apdu);
        debug_hce!(env, "Command: {:?}", command);
        match command {
            Command::SelectApplication => {
                debug_hce!(env, "NDEF application selected");
                Ok(NO_DATA)
            }
            Command::SelectFile(file_id) => {
                self.session.select_file(file_id);
                debug_hce!(
                    env,
                    "SELECT file {:04X?}, now {:?}",
                    file_id,
                    self.session.selected_file()
                );
                Ok(NO_DATA)
            }
            Command::ReadBinary { offset, length } => {
                let offset = offset as usize;
                let length = length as usize;
                // Lenient readers read the Capability Container without selecting it.
                let is_cc_probe = env.customization().allows_implicit_cc_read()
                    && offset == 0
                    && length == CC_LEN;
                if self.session.selected_file() == SelectedFile::CapabilityContainer || is_cc_probe
                {
                    debug_hce!(env, "Returning CC: {}", to_hex(capability_container));
                    return Ok(&capability_container[..]);
                }
                let chunk = read_chunk(ndef_message, offset, length);
                if chunk.is_err() {
                    debug_hce!(
                        env,
                        "Read offset {} beyond NDEF size {}",
                        offset,
                        ndef_message.len()
                    );
                } else {
                    debug_hce!(
                        env,
                        "Returning NDEF chunk: offset={} length={} size={}",
                        offset,
                        length,
                        ndef_message.len()
                    );
                }
                chunk
            }
            Command::Unrecognized => {
                debug_hce!(env, "Unhandled command");
                Err(ApduStatusCode::SW_INTERNAL_EXCEPTION)
            }
        }
    }

    /// Ends the current tap. Built files are kept for the next one.
    pub fn deactivate(&mut self, env: &mut impl Env, reason: DeactivationReason) {
        debug_hce!(env, "Deactivated: {:?}", reason);
        // Every reason ends the tap the same way.
        let _ = reason;
        self.session.deactivate();
    }
}

/// Returns the bytes of `file` in `[offset, offset + length)`, truncated at its end.
fn read_chunk(file: &[u8], offset: usize, length: usize) -> Result<&[u8], ApduStatusCode> {
    if offset >= file.len() {
        return Err(ApduStatusCode::SW_INTERNAL_EXCEPTION);
    }
    let end = core::cmp::min(offset + length, file.len());
    Ok(&file[offset..end])
}
