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

//! This file contains all customizable constants.
//!
//! If you adapt them, make sure to run the tests before deploying.
//! The values end up in the Capability Container that readers parse before anything else.

/// Smallest MLe a Capability Container may announce, so the container is readable at once.
pub const MIN_MAX_READ_DATA_SIZE: u16 = 0x000F;
/// Smallest size of an NDEF file: the length prefix and an empty record header.
pub const MIN_NDEF_FILE_SIZE: u16 = 0x0005;
/// Sizes 0xFFFF and above are reserved by the Type 4 Tag mapping.
pub const MAX_NDEF_FILE_SIZE: u16 = 0xFFFE;
/// Access condition byte granting unrestricted access.
pub const ACCESS_UNRESTRICTED: u8 = 0x00;

pub trait Customization {
    // ###########################################################################
    // Constants announced in the Capability Container.
    // ###########################################################################

    /// Maximum data size a single READ BINARY may return (MLe).
    ///
    /// # Invariant
    ///
    /// - Must be at least 0x000F, so a reader can fetch the whole Capability Container.
    ///
    /// READ BINARY carries a one-byte length in short APDUs, so values above 0xFF are never
    /// exercised by readers using short APDUs.
    fn max_read_data_size(&self) -> u16;

    /// Maximum data size a single UPDATE BINARY may carry (MLc).
    ///
    /// # Invariant
    ///
    /// - Must be at least 0x0001.
    ///
    /// The NDEF file is never written, but the field is mandatory in the container.
    fn max_write_data_size(&self) -> u16;

    /// Maximum size of the NDEF file, length prefix included.
    ///
    /// # Invariant
    ///
    /// - Must be at least 0x0005.
    /// - Must be at most 0xFFFE.
    ///
    /// URLs whose encoded message does not fit are refused when emulation starts.
    fn max_ndef_file_size(&self) -> u16;

    /// Read access condition of the NDEF file.
    ///
    /// # Invariant
    ///
    /// - Must be 0x00, readers would otherwise refuse to read the URL.
    fn ndef_read_access(&self) -> u8;

    /// Write access condition of the NDEF file.
    ///
    /// The tag refuses all writes regardless. Announcing 0xFF makes readers treat the tag as
    /// read-only.
    fn ndef_write_access(&self) -> u8;

    // ###########################################################################
    // Compatibility with lenient readers.
    // ###########################################################################

    /// Serves the Capability Container on unselected reads of exactly its size at offset 0.
    ///
    /// Some readers skip the SELECT of the Capability Container file and directly issue
    /// READ BINARY with offset 0 and length 15. With this option, such a read returns the
    /// container even if the NDEF file is selected. Without it, the selected file decides.
    fn allows_implicit_cc_read(&self) -> bool;
}

#[derive(Clone)]
pub struct CustomizationImpl {
    pub max_read_data_size: u16,
    pub max_write_data_size: u16,
    pub max_ndef_file_size: u16,
    pub ndef_read_access: u8,
    pub ndef_write_access: u8,
    pub allows_implicit_cc_read: bool,
}

pub const DEFAULT_CUSTOMIZATION: CustomizationImpl = CustomizationImpl {
    max_read_data_size: 0x00FF,
    max_write_data_size: 0x00FF,
    max_ndef_file_size: 0x00FF,
    ndef_read_access: ACCESS_UNRESTRICTED,
    ndef_write_access: ACCESS_UNRESTRICTED,
    allows_implicit_cc_read: true,
};

impl Customization for CustomizationImpl {
    fn max_read_data_size(&self) -> u16 {
        self.max_read_data_size
    }

    fn max_write_data_size(&self) -> u16 {
        self.max_write_data_size
    }

    fn max_ndef_file_size(&self) -> u16 {
        self.max_ndef_file_size
    }

    fn ndef_read_access(&self) -> u8 {
        self.ndef_read_access
    }

    fn ndef_write_access(&self) -> u8 {
        self.ndef_write_access
    }

    fn allows_implicit_cc_read(&self) -> bool {
        self.allows_implicit_cc_read
    }
}

pub fn is_valid(customization: &impl Customization) -> bool {
    if customization.max_read_data_size() < MIN_MAX_READ_DATA_SIZE {
        return false;
    }

    if customization.max_write_data_size() == 0 {
        return false;
    }

    let max_ndef_file_size = customization.max_ndef_file_size();
    if !(MIN_NDEF_FILE_SIZE..=MAX_NDEF_FILE_SIZE).contains(&max_ndef_file_size) {
        return false;
    }

    customization.ndef_read_access() == ACCESS_UNRESTRICTED
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_invariants() {
        assert!(is_valid(&DEFAULT_CUSTOMIZATION));
    }

    #[test]
    fn test_invalid_read_size() {
        let customization = CustomizationImpl {
            max_read_data_size: 0x000E,
            ..DEFAULT_CUSTOMIZATION
        };
        assert!(!is_valid(&customization));
    }

    #[test]
    fn test_invalid_write_size() {
        let customization = CustomizationImpl {
            max_write_data_size: 0,
            ..DEFAULT_CUSTOMIZATION
        };
        assert!(!is_valid(&customization));
    }

    #[test]
    fn test_ndef_file_size_bounds() {
        let too_small = CustomizationImpl {
            max_ndef_file_size: 0x0004,
            ..DEFAULT_CUSTOMIZATION
        };
        assert!(!is_valid(&too_small));
        let too_large = CustomizationImpl {
            max_ndef_file_size: 0xFFFF,
            ..DEFAULT_CUSTOMIZATION
        };
        assert!(!is_valid(&too_large));
        let largest = CustomizationImpl {
            max_ndef_file_size: MAX_NDEF_FILE_SIZE,
            ..DEFAULT_CUSTOMIZATION
        };
        assert!(is_valid(&largest));
    }

    #[test]
    fn test_restricted_read_access() {
        let customization = CustomizationImpl {
            ndef_read_access: 0xFF,
            ..DEFAULT_CUSTOMIZATION
        };
        assert!(!is_valid(&customization));
        let read_only = CustomizationImpl {
            ndef_write_access: 0xFF,
            ..DEFAULT_CUSTOMIZATION
        };
        assert!(is_valid(&read_only));
    }
}
