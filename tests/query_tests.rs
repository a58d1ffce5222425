#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query and percent-codec tests
///
/// This test suite covers:
/// - Query string parsing and serialization
/// - Parameter order and duplicates
/// - The name/value encoding asymmetry
/// - Percent-encoding and lenient decoding
use urls::{AbsoluteUrl, Query, QueryParameter, RelativeUrl, percent_decode, percent_encode};

#[test]
fn test_encoding_correctness() {
    assert_eq!(percent_encode("field<>Value1"), "field%3C%3EValue1");
    assert_eq!(percent_decode("field%3C%3EValue1"), "field<>Value1");
}

#[test]
fn test_codec_round_trip_ascii_punctuation() {
    let punctuation: String = (0x21u8..=0x7E)
        .map(char::from)
        .filter(char::is_ascii_punctuation)
        .collect();
    assert_eq!(punctuation.len(), 32);
    assert_eq!(percent_decode(&percent_encode(&punctuation)), punctuation);
}

#[test]
fn test_codec_round_trip_every_ascii_char() {
    for byte in 0u8..=0x7F {
        let s = char::from(byte).to_string();
        assert_eq!(percent_decode(&percent_encode(&s)), s, "byte {byte:#04x}");
    }
}

#[test]
fn test_codec_unreserved_untouched() {
    let unreserved = "ABCXYZabcxyz0189-_.~";
    assert_eq!(percent_encode(unreserved), unreserved);
}

#[test]
fn test_codec_empty() {
    assert_eq!(percent_encode(""), "");
    assert_eq!(percent_decode(""), "");
}

#[test]
fn test_decode_lenient() {
    assert_eq!(percent_decode("%G0"), "%G0");
    assert_eq!(percent_decode("abc%"), "abc%");
    assert_eq!(percent_decode("abc%2"), "abc%2");
    assert_eq!(percent_decode("%3c"), "<");
}

#[test]
fn test_parse_empty() {
    assert_eq!(Query::parse(""), Query::empty());
    assert_eq!(Query::parse("&").len(), 2);
}

#[test]
fn test_order_is_preserved() {
    let query = Query::parse("z=1&a=2&m=3");
    let keys: Vec<&str> = query.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    assert_eq!(query.to_string(), "z=1&a=2&m=3");
}

#[test]
fn test_duplicates_are_kept() {
    let query = Query::empty().add("k", "1").add("k", "2").add("k", "1");
    assert_eq!(query.len(), 3);
    assert_eq!(query.get_all("k"), vec!["1", "2", "1"]);
    assert_eq!(query.to_string(), "k=1&k=2&k=1");
}

#[test]
fn test_missing_value() {
    let query = Query::parse("flag&name=");
    assert_eq!(
        query.elements(),
        [QueryParameter::new("flag", ""), QueryParameter::new("name", "")]
    );
}

#[test]
fn test_field_name_asymmetry() {
    let query = Query::empty().add("na<me", "va<lue");
    assert_eq!(query.to_string(), "na<me=va%3Clue");

    // names are taken as written on the way back in, too
    let parsed = Query::parse("na%3Cme=va%3Clue");
    assert_eq!(parsed.elements()[0].field_name(), "na%3Cme");
    assert_eq!(parsed.elements()[0].value(), "va<lue");
}

#[test]
fn test_value_round_trip() {
    let query = Query::empty()
        .add("a", "x & y = z")
        .add("b", "100%")
        .add("c", "#hash?q")
        .add("d", "日本語")
        .add("e", "");
    assert_eq!(Query::parse(&query.to_string()), query);
}

#[test]
fn test_plus_is_literal() {
    let query = Query::parse("math=1+1");
    assert_eq!(query.get("math"), Some("1+1"));
    assert_eq!(Query::empty().add("math", "1+1").to_string(), "math=1%2B1");
}

#[test]
fn test_contains() {
    let query = Query::parse("a=1&b=2");
    assert!(query.contains("a"));
    assert!(!query.contains("c"));
}

#[test]
fn test_from_iterator() {
    let query: Query = vec![("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(query.to_string(), "a=1&b=2");
}

#[test]
fn test_from_str_conversion() {
    let query = Query::from("a=1");
    assert_eq!(query.get("a"), Some("1"));
}

#[test]
fn test_question_mark_name_round_trip() {
    let relative = RelativeUrl::empty().add_query_parameter("?a", "1");
    assert_eq!(relative.to_string(), "??a=1");

    let parsed = RelativeUrl::parse(&relative.to_string());
    assert_eq!(parsed.query_parameters()[0].field_name(), "?a");
    assert_eq!(parsed, relative);
}

#[test]
fn test_empty_piece_round_trip() {
    let url = AbsoluteUrl::parse("http://host.com/p?a=1&&b=2").unwrap();
    let params = url.relative_url().query_parameters();
    assert_eq!(params.len(), 3);
    assert_eq!(params[1], QueryParameter::new("", ""));
    assert_eq!(AbsoluteUrl::parse(&url.to_string()).unwrap(), url);
}
