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

//! URL published by the control surface and read by the APDU processing thread.

use super::capability_container::{CapabilityContainer, CC_LEN};
use super::ndef::{encode_uri_message, NdefError};
use crate::api::customization::Customization;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use spin::{Once, RwLock};

/// The emulated URL together with the files derived from it.
///
/// Files are built on first use. Replacing the URL replaces the whole value, which discards
/// the files built for the previous URL.
pub struct ActiveUrl {
    url: String,
    ndef_message: Once<Result<Vec<u8>, NdefError>>,
    capability_container: Once<[u8; CC_LEN]>,
}

impl ActiveUrl {
    fn new(url: String) -> Self {
        ActiveUrl {
            url,
            ndef_message: Once::new(),
            capability_container: Once::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the content of the NDEF file, encoding it on the first call.
    pub fn ndef_message(&self) -> Result<&[u8], NdefError> {
        self.ndef_message
            .call_once(|| encode_uri_message(&self.url))
            .as_deref()
            .map_err(|error| *error)
    }

    /// Returns the content of the Capability Container file, building it on the first call.
    ///
    /// The container does not depend on the URL. It is rebuilt once per URL, with the same bytes.
    pub fn capability_container(&self, customization: &impl Customization) -> &[u8; CC_LEN] {
        self.capability_container
            .call_once(|| CapabilityContainer::new(customization).to_bytes())
    }

    /// Whether both files are already built.
    pub fn is_built(&self) -> bool {
        self.ndef_message.is_completed() && self.capability_container.is_completed()
    }
}

/// Shared handle on the currently emulated URL, if any.
///
/// Clones refer to the same URL. A single writer, the control surface, swaps the URL as a
/// whole. Readers take a reference counted snapshot under a read lock held for the duration of
/// a pointer copy, so a reader never observes a partially built value.
#[derive(Clone)]
pub struct Emulation {
    active: Arc<RwLock<Option<Arc<ActiveUrl>>>>,
}

impl Default for Emulation {
    fn default() -> Self {
        Emulation::new()
    }
}

impl Emulation {
    pub fn new() -> Self {
        Emulation {
            active: Arc::new(RwLock::new(None)),
        }
    }

    /// Publishes a new URL to emulate.
    pub fn start(&self, url: String) {
        // The value is allocated outside the lock.
        let active = Some(Arc::new(ActiveUrl::new(url)));
        let previous = core::mem::replace(&mut *self.active.write(), active);
        drop(previous);
    }

    /// Withdraws the URL. The tag answers all commands with failure afterwards.
    pub fn stop(&self) {
        let previous = self.active.write().take();
        drop(previous);
    }

    /// Returns a snapshot of the emulated URL.
    ///
    /// The snapshot stays valid if the URL is replaced or withdrawn meanwhile.
    pub fn active(&self) -> Option<Arc<ActiveUrl>> {
        (*self.active.read()).clone()
    }

    pub fn is_active(&self) -> bool {
        self.active.read().is_some()
    }
}
