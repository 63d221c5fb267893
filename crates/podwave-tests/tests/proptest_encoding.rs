//! Property-based tests for WAV encoding using proptest.
//!
//! These tests check the header invariants for arbitrary payloads and that
//! arbitrary text never panics the encoder.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p podwave-tests --test proptest_encoding
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::prelude::*;

use podwave_audio::{create_wav_blob, create_wav_blob_from_parts, WavHeader};
use podwave_tests::fixtures::{speech_payload, speech_payload_unpadded};
use podwave_tests::format_validators::validate_wav;

fn le_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn le_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

proptest! {
    /// Length, tags, size fields and fixed format fields hold for any payload.
    #[test]
    fn header_invariants_hold(pcm in prop::collection::vec(any::<u8>(), 0..4096)) {
        let blob = create_wav_blob(&speech_payload(&pcm)).unwrap();
        let bytes = blob.as_bytes();
        let n = pcm.len();

        prop_assert_eq!(bytes.len(), 44 + n);
        prop_assert_eq!(&bytes[0..4], b"RIFF");
        prop_assert_eq!(&bytes[8..12], b"WAVE");
        prop_assert_eq!(le_u32(bytes, 4) as usize, bytes.len() - 8);
        prop_assert_eq!(le_u32(bytes, 4) as usize, n + 36);
        prop_assert_eq!(le_u32(bytes, 40) as usize, n);
        prop_assert_eq!(le_u16(bytes, 20), 1);
        prop_assert_eq!(le_u16(bytes, 22), 1);
        prop_assert_eq!(le_u32(bytes, 24), 24_000);
        prop_assert_eq!(le_u16(bytes, 34), 16);
        prop_assert_eq!(blob.mime_type(), "audio/wav");
    }

    /// The payload region is the independently decoded input, byte for byte.
    #[test]
    fn payload_is_copied_verbatim(pcm in prop::collection::vec(any::<u8>(), 0..4096)) {
        let payload = speech_payload_unpadded(&pcm);
        let blob = create_wav_blob(&payload).unwrap();
        let independently_decoded = STANDARD.decode(speech_payload(&pcm)).unwrap();

        prop_assert_eq!(&blob.as_bytes()[44..], independently_decoded.as_slice());
    }

    /// The independent validator accepts every encoded file.
    #[test]
    fn encoded_files_validate(pcm in prop::collection::vec(any::<u8>(), 0..1024)) {
        let blob = create_wav_blob(&speech_payload(&pcm)).unwrap();
        let info = validate_wav(blob.as_bytes()).unwrap();

        prop_assert_eq!(info.data_offset, 44);
        prop_assert_eq!(info.data_size as usize, pcm.len());
    }

    /// The header parser reads back exactly what the encoder wrote.
    #[test]
    fn header_parse_agrees_with_blob(pcm in prop::collection::vec(any::<u8>(), 0..512)) {
        let blob = create_wav_blob(&speech_payload(&pcm)).unwrap();
        let parsed = WavHeader::parse(blob.as_bytes()).unwrap();

        prop_assert_eq!(&parsed, blob.header());
    }

    /// Joining parts equals encoding the concatenated PCM.
    #[test]
    fn parts_concatenate(parts in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..256), 0..6)) {
        let payloads: Vec<String> = parts.iter().map(|p| speech_payload(p)).collect();
        let joined: Vec<u8> = parts.concat();

        let from_parts = create_wav_blob_from_parts(&payloads).unwrap();
        let whole = create_wav_blob(&speech_payload(&joined)).unwrap();

        prop_assert_eq!(from_parts, whole);
    }

    /// Arbitrary text either encodes or fails cleanly, never panics.
    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,200}") {
        if let Ok(blob) = create_wav_blob(&s) {
            prop_assert_eq!(blob.len(), 44 + blob.data_len());
        }
    }

    /// Inserting a character outside the alphabet always fails.
    #[test]
    fn foreign_character_is_rejected(
        pcm in prop::collection::vec(any::<u8>(), 1..256),
        bad in prop::sample::select(vec!['!', '@', '#', '$', '%', '*', '-', '_', '.', ' ']),
        pos in any::<prop::sample::Index>(),
    ) {
        let mut payload = speech_payload(&pcm);
        let at = pos.index(payload.len() + 1);
        payload.insert(at, bad);

        prop_assert!(create_wav_blob(&payload).is_err());
    }
}
