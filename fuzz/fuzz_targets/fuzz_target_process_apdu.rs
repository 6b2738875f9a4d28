#![no_main]

use libfuzzer_sys::fuzz_target;
use type4_hce::env::test::TestEnv;
use type4_hce::tag::emulation::Emulation;
use type4_hce::Type4Tag;

// Fuzz inputs as a single command APDU sent to a tag emulating a fixed URL.
// For sequences of commands and deactivations, you can use fuzz_target_process_session.
fuzz_target!(|data: &[u8]| {
    let emulation = Emulation::new();
    emulation.start("https://www.example.com/fuzz".to_string());
    let mut tag = Type4Tag::new(TestEnv::default(), emulation);
    let response = tag.process_apdu(data);
    assert!(response.len() >= 2);
    let status = &response[response.len() - 2..];
    assert!(status == [0x90, 0x00] || response == [0x6F, 0x00]);
});
