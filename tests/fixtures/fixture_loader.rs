use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest(Box<UrlCase>),
    /// A comment line (string)
    Comment(#[allow(dead_code)] String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct UrlCase {
    pub input: String,
    /// Expected serialization when it differs from `input`
    #[serde(default)]
    pub canonical: Option<String>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub query: Vec<(String, String)>,
    #[serde(default)]
    pub fragment: String,
    /// Name of the expected `ParseError` variant
    #[serde(default)]
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failures: Vec<String>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}\n{}",
            self.passed,
            self.failures.len(),
            self.failures.join("\n")
        )
    }
}

pub fn load_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("url_cases.json")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let urls = cases
            .iter()
            .filter(|case| matches!(case, TestCase::UrlTest(_)))
            .count();
        assert!(urls >= 20, "only {urls} cases loaded");
    }
}
