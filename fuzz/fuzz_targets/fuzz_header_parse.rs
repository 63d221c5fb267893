#![no_main]

use libfuzzer_sys::fuzz_target;
use podwave_audio::wav::extract_pcm_data;
use podwave_audio::WavHeader;

fuzz_target!(|data: &[u8]| {
    let _ = WavHeader::parse(data);
    let _ = extract_pcm_data(data);
});
