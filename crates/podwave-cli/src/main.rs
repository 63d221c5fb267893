//! PodWave CLI - Command-line interface for speech audio packaging
//!
//! This binary turns the base64 PCM narration returned by the speech API
//! into WAV files, inspects WAV headers and exports a project's segments.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use podwave_cli::commands;

/// PodWave - Podcast narration to WAV
#[derive(Parser)]
#[command(name = "podwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap a base64 PCM payload (24 kHz mono 16-bit) in a WAV file
    Encode {
        /// File containing the base64 payload, or `-` for stdin
        #[arg(short, long)]
        input: String,

        /// Path of the WAV file to write
        #[arg(short, long)]
        output: String,

        /// Output machine-readable JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Print the header fields of a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Write every narrated segment of a saved project as a WAV file
    Export {
        /// Path to the saved project JSON
        #[arg(short, long)]
        project: String,

        /// Directory to write the WAV files into
        #[arg(short, long)]
        output_dir: String,

        /// Also write the whole podcast as one combined WAV file
        #[arg(long)]
        full: bool,

        /// Output machine-readable JSON instead of colored text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            json,
        } => commands::encode::run(&input, &output, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Export {
            project,
            output_dir,
            full,
            json,
        } => commands::export::run(&project, &output_dir, full, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_encode() {
        let cli = Cli::try_parse_from([
            "podwave",
            "encode",
            "--input",
            "speech.b64",
            "--output",
            "speech.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Encode {
                input,
                output,
                json,
            } => {
                assert_eq!(input, "speech.b64");
                assert_eq!(output, "speech.wav");
                assert!(!json);
            }
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_cli_parses_encode_from_stdin() {
        let cli =
            Cli::try_parse_from(["podwave", "encode", "-i", "-", "-o", "out.wav", "--json"]).unwrap();
        match cli.command {
            Commands::Encode { input, json, .. } => {
                assert_eq!(input, "-");
                assert!(json);
            }
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["podwave", "inspect", "--input", "a.wav", "--json"]).unwrap();
        match cli.command {
            Commands::Inspect { input, json } => {
                assert_eq!(input, "a.wav");
                assert!(json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::try_parse_from([
            "podwave",
            "export",
            "--project",
            "project.json",
            "--output-dir",
            "out",
            "--full",
        ])
        .unwrap();
        match cli.command {
            Commands::Export {
                project,
                output_dir,
                full,
                json,
            } => {
                assert_eq!(project, "project.json");
                assert_eq!(output_dir, "out");
                assert!(full);
                assert!(!json);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_cli_encode_requires_output() {
        assert!(Cli::try_parse_from(["podwave", "encode", "--input", "a.b64"]).is_err());
    }
}
