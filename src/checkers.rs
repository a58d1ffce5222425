/// Check that a string is a non-empty run of ASCII digits.
pub fn is_all_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if !is_all_digits(port) {
        return None;
    }
    port.parse::<u16>().ok()
}
