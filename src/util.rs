//! Text decoding helpers for host-supplied source files.

use std::borrow::Cow;

/// Decode source bytes to a string.
///
/// This function:
/// 1. Tries UTF-8, stripping a leading BOM
/// 2. Falls back to Windows-1252 for legacy files
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8
/// without a BOM.
pub fn decode_source(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    tracing::debug!("source is not valid UTF-8, decoding as Windows-1252");
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_borrowed() {
        let decoded = decode_source("# Titre é".as_bytes());
        assert_eq!(decoded, "# Titre é");
        assert!(matches!(decoded, Cow::Borrowed(_)));
    }

    #[test]
    fn test_bom_is_stripped() {
        assert_eq!(decode_source(b"\xEF\xBB\xBF---\n"), "---\n");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // 0xE9 is 'é' in Windows-1252 and invalid as a lone UTF-8 byte
        assert_eq!(decode_source(b"caf\xE9"), "café");
    }
}
