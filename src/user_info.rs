use crate::compat::String;
use crate::percent_encode::{USERINFO_SET, percent_decode, percent_encode_into};
use core::fmt;

/// Credentials carried in the authority of an absolute URL.
///
/// A password of `Some("")` is distinct from `None`: the first renders as
/// `user:@`, the second as `user@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserInfo {
    username: String,
    password: Option<String>,
}

impl UserInfo {
    pub fn new(username: impl Into<String>, password: Option<&str>) -> Self {
        Self {
            username: username.into(),
            password: password.map(Into::into),
        }
    }

    /// Parse the part of an authority before its last `@`.
    ///
    /// Returns `None` for an empty prefix. The prefix is split on its first
    /// `:` and both halves are percent-decoded.
    pub fn parse(authority_prefix: &str) -> Option<Self> {
        if authority_prefix.is_empty() {
            return None;
        }
        let info = match authority_prefix.split_once(':') {
            Some((username, password)) => Self {
                username: percent_decode(username),
                password: Some(percent_decode(password)),
            },
            None => Self {
                username: percent_decode(authority_prefix),
                password: None,
            },
        };
        Some(info)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

/// Serializes as `user:pass@`, `user@`, or nothing when the username is empty.
impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.username.is_empty() {
            return Ok(());
        }
        percent_encode_into(f, &self.username, USERINFO_SET)?;
        if let Some(password) = &self.password {
            f.write_str(":")?;
            percent_encode_into(f, password, USERINFO_SET)?;
        }
        f.write_str("@")
    }
}
