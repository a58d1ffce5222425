//! Explicit conversions between [`AbsoluteUrl`] and [`url::Url`].
//!
//! Nothing here is implicit: there are no `From` impls, so a caller has to
//! name the conversion it wants.

use crate::absolute_url::AbsoluteUrl;
use crate::compat::{String, ToString, Vec};
use crate::error::{ParseError, Result};
use crate::percent_encode::percent_decode;
use crate::query::Query;
use crate::relative_url::RelativeUrl;
use crate::user_info::UserInfo;

impl AbsoluteUrl {
    /// Take the components of an already-parsed [`url::Url`] without
    /// re-parsing its string form.
    ///
    /// `url::Url` hides default ports and empty passwords, so those come
    /// back as `None`.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidHost`] for URLs without a host, such as
    /// `mailto:` or `data:` URLs.
    pub fn from_platform_url(url: &url::Url) -> Result<Self> {
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or(ParseError::InvalidHost)?;

        let user_info = (!url.username().is_empty()).then(|| {
            let password = url.password().map(percent_decode);
            UserInfo::new(percent_decode(url.username()), password.as_deref())
        });

        let path: Vec<String> = url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|segment| !segment.is_empty())
                    .map(percent_decode)
                    .collect()
            })
            .unwrap_or_default();
        let query = url.query().map(Query::parse).unwrap_or_default();
        let fragment = url.fragment().unwrap_or_default();

        Ok(Self::from_parts(
            url.scheme(),
            host,
            url.port(),
            RelativeUrl::new(path, query, fragment),
            user_info,
        ))
    }

    /// Hand the canonical string form to [`url::Url::parse`].
    ///
    /// # Errors
    ///
    /// [`ParseError::Rejected`] when `url` refuses the string, e.g. for a
    /// host it considers invalid.
    pub fn to_platform_url(&self) -> Result<url::Url> {
        url::Url::parse(&self.to_string()).map_err(|_| ParseError::Rejected)
    }
}
