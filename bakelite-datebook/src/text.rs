//! NUL-delimited trailing text fields.

use std::borrow::Cow;

/// Splits one NUL-terminated field off the front of `data`, consuming the
/// terminator.
///
/// A field running to the end of the buffer without its terminator is
/// accepted as-is. Legacy records may carry non-UTF-8 code pages; those
/// bytes are replaced, not rejected.
pub(crate) fn take_field(data: &[u8]) -> (String, &[u8]) {
    match data.iter().position(|&b| b == 0) {
        Some(i) => (lossy(&data[..i]), &data[i + 1..]),
        None => (lossy(data), &[]),
    }
}

/// Appends a field with its terminator.
///
/// The text must not itself contain NUL: that byte would end the field
/// early on the next decode.
pub(crate) fn push_field(text: &str, out: &mut Vec<u8>) {
    out.extend_from_slice(text.as_bytes());
    out.push(0);
}

fn lossy(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => s.to_owned(),
        Cow::Owned(s) => s,
    }
}
