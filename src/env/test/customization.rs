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

use crate::api::customization::{Customization, CustomizationImpl};

pub struct TestCustomization {
    max_read_data_size: u16,
    max_write_data_size: u16,
    max_ndef_file_size: u16,
    ndef_read_access: u8,
    ndef_write_access: u8,
    allows_implicit_cc_read: bool,
}

impl TestCustomization {
    pub fn set_max_ndef_file_size(&mut self, size: u16) {
        self.max_ndef_file_size = size;
    }

    pub fn set_ndef_write_access(&mut self, access: u8) {
        self.ndef_write_access = access;
    }

    pub fn set_allows_implicit_cc_read(&mut self, allows: bool) {
        self.allows_implicit_cc_read = allows;
    }
}

impl Customization for TestCustomization {
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

impl From<CustomizationImpl> for TestCustomization {
    fn from(c: CustomizationImpl) -> Self {
        let CustomizationImpl {
            max_read_data_size,
            max_write_data_size,
            max_ndef_file_size,
            ndef_read_access,
            ndef_write_access,
            allows_implicit_cc_read,
        } = c;

        Self {
            max_read_data_size,
            max_write_data_size,
            max_ndef_file_size,
            ndef_read_access,
            ndef_write_access,
            allows_implicit_cc_read,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::customization::{is_valid, DEFAULT_CUSTOMIZATION};

    #[test]
    fn test_invariants() {
        let customization = TestCustomization::from(DEFAULT_CUSTOMIZATION.clone());
        assert!(is_valid(&customization));
    }
}
