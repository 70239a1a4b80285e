//! Single-byte output encoding (Latin-1 via the windows-1252 encoder)

use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;

/// Preamble bytes written ahead of byte-buffer output. The single-byte
/// charset defines no byte-order mark, so this is empty; byte exports
/// still prepend it so the encoding can be swapped without touching the
/// sinks.
pub const PREAMBLE: &[u8] = &[];

/// Encode text into the output charset. Characters outside the
/// repertoire are best-effort replaced by the encoder rather than
/// rejected.
pub fn encode(text: &str) -> Cow<'_, [u8]> {
    let (bytes, _, _) = WINDOWS_1252.encode(text);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode("Name,Age").as_ref(), b"Name,Age");
    }

    #[test]
    fn test_latin1_characters_encode_to_single_bytes() {
        assert_eq!(encode("café").as_ref(), b"caf\xe9");
    }

    #[test]
    fn test_unmappable_characters_are_replaced_not_rejected() {
        // The encoder substitutes rather than failing
        let bytes = encode("日");
        assert!(!bytes.is_empty());
    }
}
