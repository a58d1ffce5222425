/// Errors that can occur while parsing an absolute URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input has no `://` between scheme and authority
    MissingSchemeDelimiter,
    /// The scheme is empty or contains characters outside `[A-Za-z0-9+.-]`
    InvalidScheme,
    /// The authority has no host
    InvalidHost,
    /// A `:` follows the host but no valid port number does
    InvalidPort,
    /// Another URL implementation refused the serialized form
    Rejected,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingSchemeDelimiter => "Missing scheme delimiter \"://\"",
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::Rejected => "URL rejected by conversion target",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
