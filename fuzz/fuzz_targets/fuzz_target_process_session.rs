#![no_main]

use libfuzzer_sys::fuzz_target;
use type4_hce::control::Controller;
use type4_hce::env::test::TestEnv;
use type4_hce::tag::emulation::Emulation;
use type4_hce::tag::session::DeactivationReason;
use type4_hce::Type4Tag;

const URL: &str = "https://www.example.com/fuzz";

// The first byte configures the tag. The rest is a sequence of length prefixed command APDUs.
// A zero length stands for a deactivation, with the reason in the next byte. A length of 0xFF
// toggles the emulated URL.
fuzz_target!(|data: &[u8]| {
    let (config, mut data) = match data.split_first() {
        Some((config, rest)) => (*config, rest),
        None => return,
    };
    let emulation = Emulation::new();
    let mut tag_env = TestEnv::default();
    tag_env
        .customization_mut()
        .set_allows_implicit_cc_read(config & 0x01 != 0);
    let mut controller = Controller::new(TestEnv::default(), emulation.clone());
    let mut tag = Type4Tag::new(tag_env, emulation);
    if config & 0x02 != 0 {
        controller.start_emulation(Some(URL)).ok();
    }

    while let Some((&len, rest)) = data.split_first() {
        match len {
            0 => {
                let reason = rest.first().copied().unwrap_or(0);
                tag.deactivate(DeactivationReason::from(reason));
                data = rest.get(1..).unwrap_or(&[]);
            }
            0xFF => {
                if controller.emulation().is_active() {
                    controller.stop_emulation();
                } else {
                    controller.start_emulation(Some(URL)).ok();
                }
                data = rest;
            }
            _ => {
                let len = core::cmp::min(len as usize, rest.len());
                let (apdu, rest) = rest.split_at(len);
                let response = tag.process_apdu(apdu);
                assert!(response.len() >= 2);
                let status = &response[response.len() - 2..];
                assert!(status == [0x90, 0x00] || response == [0x6F, 0x00]);
                data = rest;
            }
        }
    }
});
