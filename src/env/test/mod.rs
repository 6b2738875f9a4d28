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

use crate::api::card_emulation::CardEmulation;
use crate::api::customization::DEFAULT_CUSTOMIZATION;
use crate::env::Env;
use customization::TestCustomization;

pub mod customization;

pub struct TestEnv {
    card_emulation: TestCardEmulation,
    customization: TestCustomization,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TestCardEmulation {
    available: bool,
    enabled: bool,
}

impl TestCardEmulation {
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Default for TestCardEmulation {
    fn default() -> Self {
        TestCardEmulation {
            available: true,
            enabled: true,
        }
    }
}

impl CardEmulation for TestCardEmulation {
    fn is_available(&self) -> bool {
        self.available
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

pub struct TestWrite;

impl core::fmt::Write for TestWrite {
    fn write_str(&mut self, _: &str) -> core::fmt::Result {
        Ok(())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        let card_emulation = TestCardEmulation::default();
        let customization = DEFAULT_CUSTOMIZATION.into();
        TestEnv {
            card_emulation,
            customization,
        }
    }
}

impl TestEnv {
    pub fn customization_mut(&mut self) -> &mut TestCustomization {
        &mut self.customization
    }
}

impl Env for TestEnv {
    type Write = TestWrite;
    type Customization = TestCustomization;
    type CardEmulation = TestCardEmulation;

    fn write(&mut self) -> Self::Write {
        TestWrite
    }

    fn customization(&self) -> &Self::Customization {
        &self.customization
    }

    fn card_emulation(&mut self) -> &mut Self::CardEmulation {
        &mut self.card_emulation
    }
}

#[cfg(test)]
#[allow(clippy::module_inception)]
mod test {
    use super::*;

    #[test]
    fn test_card_emulation() {
        let mut env = TestEnv::default();
        assert!(env.card_emulation().is_supported());
        env.card_emulation().set_enabled(false);
        assert!(env.card_emulation().is_available());
        assert!(!env.card_emulation().is_supported());
        env.card_emulation().set_enabled(true);
        env.card_emulation().set_available(false);
        assert!(!env.card_emulation().is_supported());
    }
}
