use crate::compat::{String, Vec};
use crate::percent_encode::{QUERY_VALUE_SET, percent_decode, percent_encode_into};
use core::fmt;

/// A single `name=value` pair of a query string.
///
/// The value is stored decoded and percent-encoded only when the query is
/// serialized. The field name is written out exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryParameter {
    field_name: String,
    value: String,
}

impl QueryParameter {
    pub fn new(field_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Serializes as `name=value` with the value percent-encoded.
impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.field_name)?;
        f.write_str("=")?;
        percent_encode_into(f, &self.value, QUERY_VALUE_SET)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for QueryParameter {
    fn from((field_name, value): (K, V)) -> Self {
        Self::new(field_name, value)
    }
}

/// An ordered list of query parameters.
///
/// Insertion order is kept through composition, serialization and parsing,
/// and repeated field names are allowed.
///
/// # Examples
///
/// ```
/// use urls::Query;
///
/// let query = Query::empty().add("q", "rust & c").add("page", "2");
/// assert_eq!(query.to_string(), "q=rust%20%26%20c&page=2");
/// assert_eq!(Query::parse("q=rust%20%26%20c&page=2"), query);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Query {
    elements: Vec<QueryParameter>,
}

impl Query {
    /// The query with no parameters
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn new(elements: Vec<QueryParameter>) -> Self {
        Self { elements }
    }

    /// Build a query from ordered `(name, value)` pairs.
    ///
    /// This is the entry point for turning a record's fields into query
    /// parameters: the caller lists the fields in declaration order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Parse the text after the `?` delimiter.
    ///
    /// Every `&`-separated piece becomes a parameter, including empty ones,
    /// so `a=1&&b=2` yields three parameters with an empty middle one.
    pub fn parse(query: &str) -> Self {
        if query.is_empty() {
            return Self::empty();
        }

        let elements = query
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => QueryParameter::new(key, percent_decode(value)),
                None => QueryParameter::new(pair, String::new()),
            })
            .collect();

        Self { elements }
    }

    /// Return a copy with `field_name=value` appended at the end.
    #[must_use]
    pub fn add(&self, field_name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut elements = self.elements.clone();
        elements.push(QueryParameter::new(field_name, value));
        Self { elements }
    }

    /// Return a copy with every parameter of `other` appended, in order.
    #[must_use]
    pub fn merge(&self, other: &Query) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + other.elements.len());
        elements.extend_from_slice(&self.elements);
        elements.extend_from_slice(&other.elements);
        Self { elements }
    }

    pub fn elements(&self) -> &[QueryParameter] {
        &self.elements
    }

    /// Get the first value for a field name.
    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|p| p.field_name == field_name)
            .map(|p| p.value.as_str())
    }

    /// Get all values for a field name, in order.
    pub fn get_all(&self, field_name: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|p| p.field_name == field_name)
            .map(|p| p.value.as_str())
            .collect()
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.elements.iter().any(|p| p.field_name == field_name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements
            .iter()
            .map(|p| (p.field_name.as_str(), p.value.as_str()))
    }
}

/// Serializes as `name1=value1&name2=value2` without a leading `?`.
/// Values are percent-encoded, field names are not.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            fmt::Display::fmt(param, f)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(QueryParameter::from).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Query {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.elements
            .extend(iter.into_iter().map(QueryParameter::from));
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Vec<QueryParameter>> for Query {
    fn from(elements: Vec<QueryParameter>) -> Self {
        Self { elements }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
