#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // fuzzed code goes here

    use reel_dpx::reel_core::bytestream::RCursor;
    let data = RCursor::new(data);

    let mut decoder = reel_dpx::DpxDecoder::new(data);
    let _ = decoder.decode();
});
