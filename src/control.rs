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

//! Control surface used by the application to start and stop the emulation.

use crate::api::card_emulation::CardEmulation;
use crate::api::customization::Customization;
use crate::env::Env;
use crate::tag::emulation::Emulation;
use crate::tag::ndef::encoded_len;
use alloc::string::ToString;

pub const START_METHOD: &str = "startHCE";
pub const STOP_METHOD: &str = "stopHCE";
pub const QUERY_SUPPORT_METHOD: &str = "isHCESupported";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlError {
    /// The URL is absent, empty, or does not fit in the NDEF file.
    InvalidUrl,
    /// The method name is not part of the control surface.
    NotImplemented,
}

/// Publishes the URL read by the [tag](crate::Type4Tag) sharing the same emulation handle.
pub struct Controller<E: Env> {
    env: E,
    emulation: Emulation,
}

impl<E: Env> Controller<E> {
    pub fn new(env: E, emulation: Emulation) -> Self {
        Controller { env, emulation }
    }

    pub fn env(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn emulation(&self) -> &Emulation {
        &self.emulation
    }

    /// Sets the URL to emulate, replacing any previous one.
    pub fn start_emulation(&mut self, url: Option<&str>) -> Result<(), ControlError> {
        let url = match url {
            Some(url) if !url.is_empty() => url,
            _ => {
                debug_hce!(self.env, "Start rejected: no URL");
                return Err(ControlError::InvalidUrl);
            }
        };
        let max_ndef_file_size = self.env.customization().max_ndef_file_size() as usize;
        match encoded_len(url) {
            Ok(len) if len <= max_ndef_file_size => (),
            _ => {
                debug_hce!(self.env, "Start rejected: URL too long for the NDEF file");
                return Err(ControlError::InvalidUrl);
            }
        }
        self.emulation.start(url.to_string());
        debug_hce!(self.env, "Emulation started: {}", url);
        Ok(())
    }

    /// Clears the URL. Does nothing if no URL is set.
    pub fn stop_emulation(&mut self) {
        self.emulation.stop();
        debug_hce!(self.env, "Emulation stopped");
    }

    /// Whether card emulation is available and enabled on this device.
    pub fn query_support(&mut self) -> bool {
        self.env.card_emulation().is_supported()
    }

    /// Dispatches a method call received from the application.
    ///
    /// Start and stop return `true` on success. The support query returns its answer.
    pub fn handle_method_call(
        &mut self,
        method: &str,
        url: Option<&str>,
    ) -> Result<bool, ControlError> {
        debug_hce!(self.env, "Method call: {}", method);
        match method {
            START_METHOD => self.start_emulation(url).map(|()| true),
            STOP_METHOD => {
                self.stop_emulation();
                Ok(true)
            }
            QUERY_SUPPORT_METHOD => Ok(self.query_support()),
            _ => Err(ControlError::NotImplemented),
        }
    }
}
