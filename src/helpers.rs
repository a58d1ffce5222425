use crate::checkers::{is_all_digits, parse_port};
use crate::error::{ParseError, Result};

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
/// Fragment is returned WITHOUT the leading '#'
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from a fragment-free URL string
/// Query is returned WITHOUT the leading '?'
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split `scheme://rest` at the first "://"
pub fn split_scheme(input: &str) -> Option<(&str, &str)> {
    memchr::memmem::find(input.as_bytes(), b"://").map(|pos| (&input[..pos], &input[pos + 3..]))
}

/// Split the text after "://" into authority and the path/query/fragment rest.
/// The authority ends at the first '/', '?' or '#'.
pub fn split_authority(input: &str) -> (&str, &str) {
    memchr::memchr3(b'/', b'?', b'#', input.as_bytes())
        .map_or((input, ""), |pos| (&input[..pos], &input[pos..]))
}

/// Split an authority at its last '@' into (userinfo, host[:port])
pub fn split_user_info(authority: &str) -> (Option<&str>, &str) {
    memchr::memrchr(b'@', authority.as_bytes()).map_or((None, authority), |pos| {
        (Some(&authority[..pos]), &authority[pos + 1..])
    })
}

/// Split `host[:port]` at its last ':'.
///
/// The suffix is only treated as a port when it is all digits; any other
/// suffix stays part of the host. A trailing ':' with nothing after it, or a
/// number that does not fit in a port, is an error.
pub fn split_host_port(input: &str) -> Result<(&str, Option<u16>)> {
    let Some(pos) = memchr::memrchr(b':', input.as_bytes()) else {
        return Ok((input, None));
    };
    let suffix = &input[pos + 1..];
    if suffix.is_empty() {
        return Err(ParseError::InvalidPort);
    }
    if !is_all_digits(suffix) {
        return Ok((input, None));
    }
    let port = parse_port(suffix).ok_or(ParseError::InvalidPort)?;
    Ok((&input[..pos], Some(port)))
}
