//! Character classification and percent-coding.
//!
//! The classifier follows the classic URL character sets: ASCII alphanumerics,
//! the mark set `` $-_.+!*'(), `` and the reserved set `;/?:@&=` pass through;
//! everything else (including `%`, `#`, space, and all non-ASCII) is encoded.
//! Non-ASCII characters are escaped one `%XX` per UTF-8 byte, uppercase hex.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Complement of the classifier's safe sets: every ASCII character that must
/// be percent-encoded.
pub const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    // mark set
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'+')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b',')
    // reserved set
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=');

/// Encode set for characters inside an already-parsed path segment. Passes
/// `#`, `[`, `]` through on top of the component set, and leaves `%` alone so
/// existing escapes survive a repeated sanitization pass.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &COMPONENT_ENCODE_SET
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'%');

/// True when `c` must be percent-encoded.
pub fn needs_encoding(c: char) -> bool {
    if !c.is_ascii() {
        return true;
    }
    let mut buf = [0u8; 4];
    let s = c.encode_utf8(&mut buf);
    utf8_percent_encode(s, COMPONENT_ENCODE_SET).to_string() != *s
}

/// Percent-encodes a single character, one `%XX` escape per UTF-8 byte.
pub fn encode_char(c: char) -> String {
    let mut buf = [0u8; 4];
    let mut out = String::with_capacity(3 * c.len_utf8());
    for byte in c.encode_utf8(&mut buf).bytes() {
        out.push_str(&format!("%{byte:02X}"));
    }
    out
}

/// Percent-encodes every unsafe character in `input` per the classifier.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_ENCODE_SET).to_string()
}

/// Percent-encodes a path segment, keeping delimiters and existing escapes.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Reverses percent-encoding. If the decoded bytes are not valid UTF-8 the
/// input is returned unchanged.
pub fn decode_url(url: &str) -> String {
    match percent_decode_str(url).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            tracing::warn!("failed to decode URL: {err}");
            url.to_string()
        }
    }
}
