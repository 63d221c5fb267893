#![no_main]

use libfuzzer_sys::fuzz_target;
use podwave_audio::{create_wav_blob, WavHeader};

fuzz_target!(|payload: &str| {
    if let Ok(blob) = create_wav_blob(payload) {
        assert_eq!(blob.len(), 44 + blob.data_len());
        let parsed = WavHeader::parse(blob.as_bytes()).expect("encoded header must parse");
        assert_eq!(&parsed, blob.header());
    }
});
