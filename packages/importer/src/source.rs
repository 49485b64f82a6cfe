//! Reading rulebook text files.
//!
//! Rulebook exports are not always clean UTF-8, so decoding is lossy and
//! never fails.

use std::fs;
use std::path::Path;

use crate::error::{ImporterError, Result};

/// How invalid UTF-8 sequences are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Drop invalid sequences.
    Ignore,

    /// Replace invalid sequences with U+FFFD.
    Replace,
}

/// Decode raw bytes into text, removing a leading byte order mark.
///
/// # Arguments
/// * `bytes` - Raw file contents
/// * `mode` - What to do with invalid sequences
/// * `context` - Description used in the warning when bytes were invalid
pub fn decode_text(bytes: &[u8], mode: DecodeMode, context: &str) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut invalid = 0usize;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            invalid += 1;
            if mode == DecodeMode::Replace {
                text.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }

    if invalid > 0 {
        tracing::warn!(
            invalid_sequences = invalid,
            mode = ?mode,
            "Invalid UTF-8 in {context}"
        );
    }

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Read a rulebook text file.
///
/// # Returns
/// The decoded file contents
pub fn read_source(path: &Path, mode: DecodeMode) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ImporterError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read rulebook source");

    Ok(decode_text(&bytes, mode, &path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_valid_utf8() {
        let text = decode_text("103. Deck’s rules".as_bytes(), DecodeMode::Ignore, "test");
        assert_eq!(text, "103. Deck’s rules");
    }

    #[test]
    fn test_decode_ignore_drops_invalid_bytes() {
        let text = decode_text(b"103. Bad\xff byte", DecodeMode::Ignore, "test");
        assert_eq!(text, "103. Bad byte");
    }

    #[test]
    fn test_decode_replace_inserts_replacement_char() {
        let text = decode_text(b"204. Bad\xff byte", DecodeMode::Replace, "test");
        assert_eq!(text, "204. Bad\u{fffd} byte");
    }

    #[test]
    fn test_decode_strips_bom() {
        let text = decode_text(b"\xef\xbb\xbfRiftbound Core Rules", DecodeMode::Ignore, "test");
        assert_eq!(text, "Riftbound Core Rules");
    }

    #[test]
    fn test_read_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"100. Introduction\n").unwrap();

        let text = read_source(file.path(), DecodeMode::Replace).unwrap();
        assert_eq!(text, "100. Introduction\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("missing.txt"), DecodeMode::Ignore).unwrap_err();
        assert!(matches!(err, ImporterError::ReadSource { .. }));
    }
}
