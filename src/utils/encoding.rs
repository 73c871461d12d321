//! Config text decoding with BOM handling and encoding fallback.
//!
//! Config files are usually UTF-8, but hand-edited ones occasionally arrive as
//! UTF-16 (with a BOM) or a legacy single-byte encoding. Strategy:
//! 1. Honour a BOM if present (UTF-8, UTF-16 LE/BE), stripping it
//! 2. Try strict UTF-8 (fast path)
//! 3. Fall back to chardetng detection, decoding with replacement characters

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

/// Decoded file content together with the label of the encoding used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub content: String,
    pub encoding: &'static str,
}

/// Read a file and decode it to a `String`.
///
/// Only I/O failures are reported; undecodable bytes become U+FFFD.
pub fn read_text(path: &Path) -> std::io::Result<DecodedText> {
    let bytes = std::fs::read(path)?;
    Ok(decode_bytes(&bytes))
}

pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return DecodedText { content: decoded.into_owned(), encoding: encoding.name() };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText { content: text.to_string(), encoding: UTF_8.name() };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, _had_errors) = encoding.decode_without_bom_handling(bytes);
    tracing::debug!(encoding = encoding.name(), "Decoded config with detected encoding");

    DecodedText { content: decoded.into_owned(), encoding: encoding.name() }
}
