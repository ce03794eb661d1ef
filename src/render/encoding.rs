//! Single-byte text encoding for PDF export.
//!
//! Output text is drawn with a standard Type1 font, so every glyph must be a
//! single byte. The target set is printable Latin-1: `0x20..=0x7E` and
//! `0xA0..=0xFF`, where WinAnsiEncoding and Latin-1 agree.

use unicode_normalization::UnicodeNormalization;

/// Byte emitted in place of any character outside the target set.
pub const REPLACEMENT_GLYPH: u8 = b'?';

/// A line converted to the single-byte target set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedLine {
    bytes: Vec<u8>,
    substituted: usize,
}

impl EncodedLine {
    /// Encoded bytes; every byte satisfies [`is_target_byte`].
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// How many characters were replaced by [`REPLACEMENT_GLYPH`].
    pub fn substituted(&self) -> usize {
        self.substituted
    }

    /// Check if the line has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Check whether a byte belongs to the target set.
pub fn is_target_byte(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E | 0xA0..=0xFF)
}

/// Encode one line, substituting anything outside the target set.
///
/// Text is composed to NFC first so that a base letter followed by a
/// combining accent lands on its precomposed Latin-1 form. A tab becomes a
/// single space. This never fails.
pub fn encode_line(line: &str) -> EncodedLine {
    let mut bytes = Vec::with_capacity(line.len());
    let mut substituted = 0;

    for c in line.nfc() {
        let code = c as u32;
        let byte = match c {
            '\t' => b' ',
            _ if code <= 0xFF && is_target_byte(code as u8) => code as u8,
            _ => {
                substituted += 1;
                REPLACEMENT_GLYPH
            }
        };
        bytes.push(byte);
    }

    EncodedLine { bytes, substituted }
}

/// Decode target-set bytes back to a string.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let line = encode_line("Section 4(b) applies.");
        assert_eq!(line.as_bytes(), b"Section 4(b) applies.");
        assert_eq!(line.substituted(), 0);
    }

    #[test]
    fn test_latin1_kept() {
        let line = encode_line("Caf\u{e9} \u{a7}12");
        assert_eq!(line.as_bytes(), &[b'C', b'a', b'f', 0xE9, b' ', 0xA7, b'1', b'2']);
        assert_eq!(decode(line.as_bytes()), "Caf\u{e9} \u{a7}12");
    }

    #[test]
    fn test_emoji_substituted() {
        let line = encode_line("Signed \u{1F58A}\u{FE0F}");
        assert_eq!(line.as_bytes(), b"Signed ??");
        assert_eq!(line.substituted(), 2);
    }

    #[test]
    fn test_combining_accent_composed() {
        let line = encode_line("Re\u{301}sume\u{301}");
        assert_eq!(decode(line.as_bytes()), "R\u{e9}sum\u{e9}");
        assert_eq!(line.substituted(), 0);
    }

    #[test]
    fn test_controls_and_tab() {
        let line = encode_line("a\tb\u{7}c\u{85}");
        assert_eq!(line.as_bytes(), b"a b?c?");
        assert!(line.as_bytes().iter().all(|&b| is_target_byte(b)));
    }

    #[test]
    fn test_empty_line() {
        assert!(encode_line("").is_empty());
    }
}
