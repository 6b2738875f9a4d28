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

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
#[macro_use]
extern crate arrayref;

use crate::env::Env;
use crate::tag::emulation::Emulation;
use crate::tag::session::DeactivationReason;
use crate::tag::TagState;
use alloc::vec::Vec;

// Those macros should eventually be split into trace, debug, info, warn, and error macros when
// adding either the defmt or log feature and crate dependency.
#[cfg(feature = "debug_hce")]
macro_rules! debug_hce {
    ($env: expr, $($rest:tt)*) => {{
        use core::fmt::Write;
        writeln!($env.write(), $($rest)*).unwrap();
    }};
}
#[cfg(not(feature = "debug_hce"))]
macro_rules! debug_hce {
    ($env: expr, $($rest:tt)*) => {
        // To avoid unused variable warnings.
        let _ = $env;
    };
}

pub mod api;
pub mod control;
pub mod env;
pub mod tag;

/// Type 4 Tag emulation parameterized by its environment.
///
/// The host NFC stack owns one instance and calls [`Type4Tag::process_apdu`] once per received
/// command APDU, and [`Type4Tag::deactivate`] when the reader leaves the field.
pub struct Type4Tag<E: Env> {
    env: E,
    state: TagState,
}

impl<E: Env> Type4Tag<E> {
    /// Instantiates a tag reading the URL published through `emulation`.
    ///
    /// The same `emulation` handle is given to the [`control::Controller`] that starts and
    /// stops the emulation.
    pub fn new(env: E, emulation: Emulation) -> Self {
        let state = TagState::new(emulation);
        Type4Tag { env, state }
    }

    pub fn state(&mut self) -> &mut TagState {
        &mut self.state
    }

    pub fn env(&mut self) -> &mut E {
        &mut self.env
    }

    /// Returns the response APDU for a command APDU, status word included.
    pub fn process_apdu(&mut self, command_apdu: &[u8]) -> Vec<u8> {
        self.state.process_apdu(&mut self.env, command_apdu)
    }

    pub fn deactivate(&mut self, reason: DeactivationReason) {
        self.state.deactivate(&mut self.env, reason)
    }
}
