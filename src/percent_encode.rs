use crate::compat::{String, ToString};
use core::fmt;
use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

/// Query value percent-encode set
/// Everything except ASCII letters, digits and the unreserved marks `-_.~`
pub const QUERY_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path segment percent-encode set
/// C0 control + space, ", #, %, /, <, >, ?, [, \, ], ^, \`, {, |, }
/// `%` is included so decoding a parsed segment gives back the stored text
pub const PATH_SEGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Userinfo percent-encode set
/// Path segment + :, ;, =, @
pub const USERINFO_SET: &AsciiSet = &PATH_SEGMENT_SET
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@');

/// Percent-encode a value for use in a query string.
///
/// Letters, digits and `-_.~` pass through; every other byte, including
/// each byte of a non-ASCII character, becomes `%XX` with uppercase hex.
///
/// # Examples
///
/// ```
/// assert_eq!(urls::percent_encode("field<>Value1"), "field%3C%3EValue1");
/// assert_eq!(urls::percent_encode("a b&c"), "a%20b%26c");
/// ```
pub fn percent_encode(input: &str) -> String {
    percent_encode_with_set(input, QUERY_VALUE_SET)
}

/// Decode a percent-encoded string.
///
/// Malformed escapes such as `%`, `%4` or `%XY` are kept literally. Bytes
/// that do not form valid UTF-8 after decoding become U+FFFD.
///
/// # Examples
///
/// ```
/// assert_eq!(urls::percent_decode("field%3C%3EValue1"), "field<>Value1");
/// assert_eq!(urls::percent_decode("100%"), "100%");
/// ```
pub fn percent_decode(input: &str) -> String {
    percent_encoding::percent_decode_str(input)
        .decode_utf8_lossy()
        .into_owned()
}

/// Percent-encode a string using the provided encode set
pub fn percent_encode_with_set(input: &str, encode_set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, encode_set).to_string()
}

/// Write percent-encoded string directly to a formatter or buffer
pub fn percent_encode_into<W: fmt::Write>(
    out: &mut W,
    input: &str,
    encode_set: &'static AsciiSet,
) -> fmt::Result {
    for chunk in utf8_percent_encode(input, encode_set) {
        out.write_str(chunk)?;
    }
    Ok(())
}
