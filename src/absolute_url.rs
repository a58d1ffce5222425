use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::helpers::{split_authority, split_host_port, split_scheme, split_user_info};
use crate::query::Query;
use crate::relative_url::RelativeUrl;
use crate::user_info::UserInfo;
use core::fmt;
use core::str::FromStr;

/// A URL with scheme, host, optional port and credentials, and a relative part.
///
/// Every `with_*`/`add_*` method returns a new value and leaves the
/// receiver untouched.
///
/// # Examples
///
/// ```
/// use urls::AbsoluteUrl;
///
/// let url = AbsoluteUrl::new("http", "host.com", Some(5000))
///     .add_query_parameter("f1", "v1")
///     .with_credentials("u", Some("p"))
///     .add_query_parameter("f2", "v2")
///     .with_fragment("frag")
///     .with_path(["p1", "p2"]);
///
/// assert_eq!(url.to_string(), "http://u:p@host.com:5000/p1/p2?f1=v1&f2=v2#frag");
/// assert_eq!(AbsoluteUrl::parse(&url.to_string()), Ok(url));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsoluteUrl {
    scheme: String,
    host: String,
    port: Option<u16>,
    relative_url: RelativeUrl,
    user_info: Option<UserInfo>,
}

impl AbsoluteUrl {
    /// Create a URL with an empty relative part and no credentials.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: Option<u16>) -> Self {
        Self::from_parts(scheme, host, port, RelativeUrl::empty(), None)
    }

    /// Assemble a URL from components that were already split apart,
    /// e.g. by another URL parser.
    pub fn from_parts(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
        relative_url: RelativeUrl,
        user_info: Option<UserInfo>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            relative_url,
            user_info,
        }
    }

    /// An `http` or `https` URL for `host` with nothing else set.
    pub fn from_host(host: impl Into<String>, port: Option<u16>, use_https: bool) -> Self {
        let scheme = if use_https { "https" } else { "http" };
        Self::new(scheme, host, port)
    }

    /// Parse `scheme://[user[:pass]@]host[:port][/path][?query][#fragment]`.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingSchemeDelimiter`] when there is no `://`
    /// - [`ParseError::InvalidScheme`] when the scheme is empty
    /// - [`ParseError::InvalidPort`] when a `:` after the host is followed by
    ///   nothing, or by a number that is not a valid port
    /// - [`ParseError::InvalidHost`] when the host is empty
    ///
    /// A `:` followed by non-digits is kept as part of the host, so bracketed
    /// IPv6 literals are not understood.
    pub fn parse(input: &str) -> Result<Self> {
        let (scheme, rest) = split_scheme(input).ok_or(ParseError::MissingSchemeDelimiter)?;
        if scheme.is_empty() {
            return Err(ParseError::InvalidScheme);
        }

        let (authority, relative) = split_authority(rest);
        let (user_info, host_and_port) = split_user_info(authority);
        let (host, port) = split_host_port(host_and_port)?;
        if host.is_empty() {
            return Err(ParseError::InvalidHost);
        }

        Ok(Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            relative_url: RelativeUrl::parse(relative),
            user_info: user_info.and_then(UserInfo::parse),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    pub fn relative_url(&self) -> &RelativeUrl {
        &self.relative_url
    }

    #[must_use]
    pub fn with_port(&self, port: Option<u16>) -> Self {
        Self {
            port,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_credentials(&self, username: impl Into<String>, password: Option<&str>) -> Self {
        self.with_user_info(Some(UserInfo::new(username, password)))
    }

    #[must_use]
    pub fn with_user_info(&self, user_info: Option<UserInfo>) -> Self {
        Self {
            user_info,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn without_credentials(&self) -> Self {
        self.with_user_info(None)
    }

    /// Replace the relative part wholesale.
    #[must_use]
    pub fn with_relative_url(&self, relative_url: RelativeUrl) -> Self {
        Self {
            relative_url,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn add_query_parameter(
        &self,
        field_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.with_relative_url(self.relative_url.add_query_parameter(field_name, value))
    }

    #[must_use]
    pub fn add_query_parameters<I, K, V>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_relative_url(self.relative_url.add_query_parameters(pairs))
    }

    #[must_use]
    pub fn with_query(&self, query: Query) -> Self {
        self.with_relative_url(self.relative_url.with_query(query))
    }

    #[must_use]
    pub fn with_fragment(&self, fragment: impl Into<String>) -> Self {
        self.with_relative_url(self.relative_url.with_fragment(fragment))
    }

    #[must_use]
    pub fn with_path<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_relative_url(self.relative_url.with_path(segments))
    }
}

/// Serializes as `scheme://[userinfo@]host[:port]` followed by the relative part.
impl fmt::Display for AbsoluteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        if let Some(user_info) = &self.user_info {
            write!(f, "{user_info}")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        write!(f, "{}", self.relative_url)
    }
}

impl FromStr for AbsoluteUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AbsoluteUrl {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AbsoluteUrl {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AbsoluteUrl {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(|e| {
            serde::de::Error::custom(format_args!(
                "failed to parse {s:?} as absolute URL: {e}"
            ))
        })
    }
}
