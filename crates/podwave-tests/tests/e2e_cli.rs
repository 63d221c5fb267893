//! End-to-end tests for the CLI commands, called as library functions.

use std::fs;
use std::process::ExitCode;

use pretty_assertions::assert_eq;

use podwave_cli::commands::json_output::error_codes;
use podwave_cli::commands::{encode, export, inspect};
use podwave_tests::fixtures::{sine_pcm, speech_payload, ProjectFixture};
use podwave_tests::format_validators::validate_wav;

#[test]
fn encode_then_inspect() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("narration.b64");
    let output = dir.path().join("narration.wav");
    let pcm = sine_pcm(440.0, 4800, 0.5);
    fs::write(&input, format!("{}\n", speech_payload(&pcm))).unwrap();

    let code = encode::run(input.to_str().unwrap(), output.to_str().unwrap(), false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let bytes = fs::read(&output).unwrap();
    let info = validate_wav(&bytes).unwrap();
    assert_eq!(info.data_size as usize, pcm.len());
    assert_eq!(&bytes[44..], pcm.as_slice());

    let result = inspect::inspect_file(output.to_str().unwrap()).unwrap();
    assert!(result.warnings.is_empty());
    assert_eq!(result.wav.duration_seconds, 0.2);
    assert_eq!(result.wav.size_bytes, bytes.len());
}

#[test]
fn encode_rejects_corrupt_payload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("narration.b64");
    let output = dir.path().join("narration.wav");
    fs::write(&input, "AAAA!!!!").unwrap();

    assert!(encode::run(input.to_str().unwrap(), output.to_str().unwrap(), false).is_err());
    assert!(!output.exists());
}

#[test]
fn inspect_missing_file_fails() {
    let err = inspect::inspect_file("/nonexistent/narration.wav").unwrap_err();
    assert_eq!(err.code, error_codes::FILE_READ);
}

#[test]
fn export_writes_one_file_per_narrated_segment() {
    let intro = speech_payload(&sine_pcm(330.0, 240, 0.5));
    let body = speech_payload(&sine_pcm(660.0, 480, 0.5));
    let fixture = ProjectFixture::new(
        "Ocean Facts",
        &[
            ("Welcome!", Some(intro.as_str())),
            ("Not narrated", None),
            ("Whales & Dolphins", Some(body.as_str())),
        ],
    );
    let out = fixture.output_dir();

    let code = export::run(fixture.project(), out.to_str().unwrap(), true, false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let mut names: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "ocean_facts_full.wav",
            "segment_01_welcome_.wav",
            "segment_02_whales___dolphins.wav",
        ]
    );

    let first = validate_wav(&fs::read(out.join("segment_01_welcome_.wav")).unwrap()).unwrap();
    let second =
        validate_wav(&fs::read(out.join("segment_02_whales___dolphins.wav")).unwrap()).unwrap();
    let full = validate_wav(&fs::read(out.join("ocean_facts_full.wav")).unwrap()).unwrap();
    assert_eq!(first.data_size, 480);
    assert_eq!(second.data_size, 960);
    assert_eq!(full.data_size, 1440);
}

#[test]
fn export_without_narration_fails() {
    let fixture = ProjectFixture::new("", &[("Draft", None)]);
    let out = fixture.output_dir();

    let err = export::export_project(fixture.project(), out.to_str().unwrap(), false).unwrap_err();
    assert_eq!(err.code, error_codes::NO_AUDIO);
    assert!(err.message.contains("no generated audio"));

    let entries: Vec<_> = fs::read_dir(fixture.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the project file should exist");
}

#[test]
fn export_json_mode_reports_failure_exit_code() {
    let fixture = ProjectFixture::new("Draft", &[("Broken", Some("@@@@"))]);
    let out = fixture.output_dir();

    let code = export::run(fixture.project(), out.to_str().unwrap(), false, true).unwrap();
    assert_eq!(code, ExitCode::from(1));
    assert!(!out.exists());
}
