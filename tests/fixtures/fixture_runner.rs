use super::fixture_loader::{FixtureResult, TestCase, UrlCase, load_cases};
use urls::AbsoluteUrl;

fn check_case(case: &UrlCase) -> Result<(), String> {
    let parsed = AbsoluteUrl::parse(&case.input);

    if let Some(expected) = &case.failure {
        return match parsed {
            Ok(url) => Err(format!("expected {expected}, parsed as {url}")),
            Err(err) if &format!("{err:?}") == expected => Ok(()),
            Err(err) => Err(format!("expected {expected}, got {err:?}")),
        };
    }

    let url = parsed.map_err(|err| format!("parse error: {err}"))?;
    let mismatch = |field: &str, expected: &dyn core::fmt::Debug, actual: &dyn core::fmt::Debug| {
        Err(format!("{field}: expected {expected:?}, got {actual:?}"))
    };

    if case.scheme.as_deref().is_some_and(|scheme| scheme != url.scheme()) {
        return mismatch("scheme", &case.scheme, &url.scheme());
    }
    if case.host.as_deref().is_some_and(|host| host != url.host()) {
        return mismatch("host", &case.host, &url.host());
    }
    if url.port() != case.port {
        return mismatch("port", &case.port, &url.port());
    }

    let username = url.user_info().map(|info| info.username().to_string());
    if username != case.username {
        return mismatch("username", &case.username, &username);
    }
    let password = url
        .user_info()
        .and_then(|info| info.password().map(str::to_string));
    if password != case.password {
        return mismatch("password", &case.password, &password);
    }

    let relative = url.relative_url();
    if relative.path() != case.path.as_slice() {
        return mismatch("path", &case.path, &relative.path());
    }
    let query: Vec<(String, String)> = relative
        .query()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    if query != case.query {
        return mismatch("query", &case.query, &query);
    }
    if relative.fragment() != case.fragment {
        return mismatch("fragment", &case.fragment, &relative.fragment());
    }

    let canonical = case.canonical.as_deref().unwrap_or(&case.input);
    let serialized = url.to_string();
    if serialized != canonical {
        return mismatch("serialized", &canonical, &serialized);
    }

    // parse(serialize(x)) == x
    match AbsoluteUrl::parse(&serialized) {
        Ok(reparsed) if reparsed == url => Ok(()),
        Ok(reparsed) => mismatch("round trip", &url, &reparsed),
        Err(err) => Err(format!("round trip: {err}")),
    }
}

pub fn run_fixture_tests(cases: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    for case in cases {
        let TestCase::UrlTest(case) = case else {
            continue;
        };
        match check_case(&case) {
            Ok(()) => result.passed += 1,
            Err(reason) => result.failures.push(format!("{}: {reason}", case.input)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_cases() {
        let result = run_fixture_tests(load_cases());
        assert!(result.passed > 0);
        assert!(result.failures.is_empty(), "{}", result.summary());
    }
}
