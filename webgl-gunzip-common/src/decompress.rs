use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use flate2::bufread::GzDecoder;

use crate::file_entry::ManifestEntry;
use crate::report::{BatchReport, EntryOutcome, EntryReport};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decodes a whole gzip buffer. Concatenated members are decoded in turn and
/// NUL padding after a member is skipped.
pub fn gunzip_bytes(compressed: &[u8]) -> Result<Vec<u8>> {
    if compressed.is_empty() {
        bail!("not a gzip stream: input is empty");
    }
    if !compressed.starts_with(&GZIP_MAGIC) {
        bail!("not a gzip stream: missing 1f 8b magic");
    }

    let mut decompressed = Vec::new();
    let mut rest = compressed;
    loop {
        // bufread::GzDecoder stops right after the member trailer
        let mut decoder = GzDecoder::new(rest);
        decoder
            .read_to_end(&mut decompressed)
            .context("corrupt gzip stream")?;
        rest = decoder.into_inner();
        let padding = rest.iter().take_while(|&&b| b == 0).count();
        rest = &rest[padding..];
        if rest.is_empty() {
            break;
        }
    }
    Ok(decompressed)
}

/// Reads `input` fully, decodes it and writes the result to `output` in one
/// shot. Nothing is created at `output` unless decoding succeeded; a failed
/// write may leave a partial file behind.
fn unpack_file(input: &Path, output: &Path) -> Result<(u64, u64)> {
    let compressed = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    let decompressed =
        gunzip_bytes(&compressed).with_context(|| format!("failed to decompress {}", input.display()))?;

    let file = File::create(output).with_context(|| format!("failed to create {}", output.display()))?;
    let mut out_file = BufWriter::new(file);
    out_file
        .write_all(&decompressed)
        .and_then(|_| out_file.flush())
        .with_context(|| format!("failed to write {}", output.display()))?;

    log::debug!(
        "[unpack] {} -> {}: {} -> {} bytes",
        input.display(),
        output.display(),
        compressed.len(),
        decompressed.len()
    );
    Ok((compressed.len() as u64, decompressed.len() as u64))
}

fn outcome_of(result: Result<(u64, u64)>) -> EntryOutcome {
    match result {
        Ok((compressed_bytes, decompressed_bytes)) => EntryOutcome::Succeeded {
            compressed_bytes,
            decompressed_bytes,
        },
        Err(e) => EntryOutcome::Failed { error: format!("{e:#}") },
    }
}

/// Unpacks a single entry relative to `dir`, writing its status lines to
/// `console`. Decompression errors end up in the returned report; only a
/// failing `console` is propagated.
pub fn decompress_entry<W: Write>(dir: &Path, entry: &ManifestEntry, console: &mut W) -> Result<EntryReport> {
    let input = entry.input_path(dir);
    let output_name = entry.output_name();

    let outcome = if input.exists() {
        writeln!(console, "Decompressing {} to {}...", entry.name(), output_name)?;

        let outcome = outcome_of(unpack_file(&input, &entry.output_path(dir)));
        match &outcome {
            EntryOutcome::Failed { error } => {
                log::warn!("[batch] {} failed: {}", entry.name(), error);
                writeln!(console, "Error decompressing {}: {}", entry.name(), error)?;
            }
            _ => writeln!(console, "Successfully decompressed {}", entry.name())?,
        }
        outcome
    } else {
        writeln!(console, "File {} not found", entry.name())?;
        EntryOutcome::Absent
    };

    Ok(EntryReport {
        input: entry.name().to_string(),
        output: output_name.to_string(),
        outcome,
    })
}

/// Runs the whole manifest against `dir` in order. Per-entry failures are
/// reported and skipped over; only a failing `console` aborts the run.
pub fn decompress_manifest<W: Write>(dir: &Path, manifest: &[ManifestEntry], console: &mut W) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for entry in manifest {
        report.push(decompress_entry(dir, entry, console)?);
    }

    writeln!(console, "Decompression complete!")?;
    Ok(report)
}

/// Presence of each manifest entry in `dir`, in manifest order. Read-only.
pub fn survey_manifest(dir: &Path, manifest: &[ManifestEntry]) -> Vec<(ManifestEntry, bool)> {
    manifest
        .iter()
        .map(|entry| (entry.clone(), entry.input_path(dir).exists()))
        .collect()
}
