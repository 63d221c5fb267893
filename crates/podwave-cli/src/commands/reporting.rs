//! Shared human-readable output for CLI commands.

use colored::Colorize;

use super::json_output::WavSummary;

/// Print the fields of a WAV file in the human-readable style shared by all
/// commands.
pub(crate) fn print_wav_summary(summary: &WavSummary) {
    if let Some(path) = &summary.path {
        println!("  {} {}", "File:".dimmed(), path);
    }
    println!(
        "  {} {} bytes ({} header + {} PCM)",
        "Size:".dimmed(),
        summary.size_bytes,
        summary.size_bytes.saturating_sub(summary.data_bytes),
        summary.data_bytes
    );
    println!(
        "  {} {} Hz, {} ch, {}-bit",
        "Format:".dimmed(),
        summary.sample_rate,
        summary.channels,
        summary.bits_per_sample
    );
    println!(
        "  {} {} B/s, block align {}",
        "Rate:".dimmed(),
        summary.byte_rate,
        summary.block_align
    );
    println!("  {} {:.3}s", "Duration:".dimmed(), summary.duration_seconds);
    if let Some(hash) = &summary.pcm_hash {
        println!("  {} {}", "PCM hash:".dimmed(), &hash[..16]);
    }
}
