// Copyright 2022-2023 Google LLC
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

/// Host platform facility that routes reader APDUs to this tag.
pub trait CardEmulation {
    /// Whether the platform offers host card emulation at all.
    fn is_available(&self) -> bool;

    /// Whether the NFC radio is currently switched on.
    ///
    /// Only meaningful if [`Self::is_available`] returns true.
    fn is_enabled(&self) -> bool;

    /// Whether a reader tapping the device would reach this tag.
    fn is_supported(&self) -> bool {
        self.is_available() && self.is_enabled()
    }
}
