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

use super::command::{CC_FILE_ID, NDEF_FILE_ID};

/// Elementary file a READ BINARY applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectedFile {
    NoFile,
    CapabilityContainer,
    Ndef,
}

/// Why the reader stopped talking to the tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeactivationReason {
    /// The reader left the field.
    LinkLoss,
    /// The reader selected another application.
    Deselected,
    Unknown(u8),
}

impl From<u8> for DeactivationReason {
    fn from(reason: u8) -> Self {
        match reason {
            0 => DeactivationReason::LinkLoss,
            1 => DeactivationReason::Deselected,
            _ => DeactivationReason::Unknown(reason),
        }
    }
}

/// File selection during one tap.
///
/// Only the APDU processing thread touches a session.
#[derive(Debug)]
pub struct Session {
    selected_file: SelectedFile,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            selected_file: SelectedFile::NoFile,
        }
    }

    pub fn selected_file(&self) -> SelectedFile {
        self.selected_file
    }

    /// Applies a SELECT of an elementary file.
    ///
    /// Unknown or missing identifiers keep the current selection.
    pub fn select_file(&mut self, file_id: Option<u16>) {
        match file_id {
            Some(CC_FILE_ID) => self.selected_file = SelectedFile::CapabilityContainer,
            Some(NDEF_FILE_ID) => self.selected_file = SelectedFile::Ndef,
            _ => (),
        }
    }

    pub fn deactivate(&mut self) {
        self.selected_file = SelectedFile::NoFile;
    }
}
