//! Encoding detection and decoding for exported CSV files.
//!
//! Trello exports are usually UTF-8, but spreadsheets that re-save them often
//! add a BOM or switch to UTF-16 / Windows-1252. This module handles:
//! - BOM detection (UTF-8, UTF-16 LE/BE), with the BOM stripped
//! - UTF-8 fast-path with strict validation
//! - Fallback encoding detection using chardetng
//! - Replacement characters for undecodable sequences

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::path::Path;

const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Detect the encoding of a byte buffer.
///
/// Strategy:
/// 1. Check for BOM markers first (most reliable)
/// 2. Try strict UTF-8 decoding on a sample
/// 3. Fall back to chardetng for non-UTF-8 content
///
/// Returns a normalized label (e.g., "utf-8", "utf-8-sig", "utf-16-le").
pub fn detect_encoding(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "utf-8".to_string();
    }

    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return bom_label(encoding).to_string();
    }

    let sample = &bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)];
    // A multi-byte sequence may straddle the sample boundary
    match std::str::from_utf8(sample) {
        Ok(_) => return "utf-8".to_string(),
        Err(e) if e.error_len().is_none() => return "utf-8".to_string(),
        Err(_) => {}
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == bytes.len());
    let encoding = detector.guess(None, true);

    let name = encoding.name().to_lowercase();
    if name.contains("utf-8") || name == "ascii" {
        "utf-8".to_string()
    } else {
        name
    }
}

fn bom_label(encoding: &'static Encoding) -> &'static str {
    if encoding == UTF_16LE {
        "utf-16-le"
    } else if encoding == UTF_16BE {
        "utf-16-be"
    } else {
        "utf-8-sig"
    }
}

/// Decode bytes into text, returning `(content, encoding_used)`.
///
/// Never fails: invalid sequences become U+FFFD.
pub fn decode_bytes(bytes: &[u8]) -> (String, String) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (decoded.into_owned(), bom_label(encoding).to_string());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), "utf-8".to_string());
    }

    let detected = detect_encoding(bytes);
    let encoding = Encoding::for_label(detected.as_bytes()).unwrap_or(UTF_8);
    let (decoded, _had_errors) = encoding.decode_without_bom_handling(bytes);
    (decoded.into_owned(), encoding.name().to_lowercase())
}

/// Read a text file with encoding detection.
pub fn read_file_safe(path: &Path) -> Result<(String, String)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(decode_bytes(&bytes))
}
