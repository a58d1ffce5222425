use crate::compat::{String, Vec};
use crate::helpers::{prune_fragment, prune_query};
use crate::percent_encode::{PATH_SEGMENT_SET, percent_decode, percent_encode_into};
use crate::query::{Query, QueryParameter};
use core::fmt;

/// Path segments, query and fragment of a URL.
///
/// Segments are stored decoded and never contain `/`. An empty fragment
/// means the URL has no fragment.
///
/// # Examples
///
/// ```
/// use urls::RelativeUrl;
///
/// let relative = RelativeUrl::parse("/docs/api?lang=en#intro");
/// assert_eq!(relative.path(), ["docs", "api"]);
/// assert_eq!(relative.query().get("lang"), Some("en"));
/// assert_eq!(relative.fragment(), "intro");
/// assert_eq!(relative.to_string(), "/docs/api?lang=en#intro");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RelativeUrl {
    path: Vec<String>,
    query: Query,
    fragment: String,
}

impl RelativeUrl {
    pub fn new(path: Vec<String>, query: Query, fragment: impl Into<String>) -> Self {
        Self {
            path,
            query,
            fragment: fragment.into(),
        }
    }

    /// No segments, no query, no fragment
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: segments.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse `path?query#fragment`.
    ///
    /// Never fails. The fragment is everything after the first `#` and is
    /// kept as written; the query is everything after the first `?`. Empty
    /// segments from leading, trailing or doubled slashes are dropped, so
    /// `"a/"`, `"/a"` and `"a//"` all yield `["a"]`.
    pub fn parse(input: &str) -> Self {
        let (rest, fragment) = prune_fragment(input);
        let (path, query) = prune_query(rest);

        Self {
            path: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(percent_decode)
                .collect(),
            query: query.map(Query::parse).unwrap_or_default(),
            fragment: fragment.map(String::from).unwrap_or_default(),
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn query_parameters(&self) -> &[QueryParameter] {
        self.query.elements()
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    #[must_use]
    pub fn with_fragment(&self, fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            ..self.clone()
        }
    }

    /// Replace the whole path.
    #[must_use]
    pub fn with_path<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: segments.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// Replace the whole query.
    #[must_use]
    pub fn with_query(&self, query: Query) -> Self {
        Self {
            query,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn add_query_parameter(
        &self,
        field_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.with_query(self.query.add(field_name, value))
    }

    /// Append `(name, value)` pairs after the existing parameters.
    #[must_use]
    pub fn add_query_parameters<I, K, V>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut query = self.query.clone();
        query.extend(pairs);
        self.with_query(query)
    }
}

/// Serializes as `/seg1/seg2?query#fragment`, leaving out empty parts.
impl fmt::Display for RelativeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            f.write_str("/")?;
            percent_encode_into(f, segment, PATH_SEGMENT_SET)?;
        }
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

impl From<&str> for RelativeUrl {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Query> for RelativeUrl {
    fn from(query: Query) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RelativeUrl {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RelativeUrl {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
