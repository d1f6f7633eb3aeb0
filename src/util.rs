//! Small shared helpers.

use std::borrow::Cow;

/// Decode raw export bytes to a string.
///
/// Tries UTF-8 first (handles a BOM automatically via encoding_rs) and
/// falls back to Windows-1252, which covers old site exports saved
/// through legacy browsers.
pub fn decode_html_bytes(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
