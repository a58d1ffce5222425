/// Building URLs by composition
use urls::{AbsoluteUrl, Query, RelativeUrl};

fn main() {
    let base = AbsoluteUrl::from_host("api.example.com", None, true);
    println!("Base: {base}"); // https://api.example.com

    // Every step returns a new value; `base` stays as it was
    let search = base
        .with_path(["v2", "search"])
        .add_query_parameter("q", "rust & wasm")
        .add_query_parameter("page", "2");
    println!("Search: {search}"); // https://api.example.com/v2/search?q=rust%20%26%20wasm&page=2
    println!("Base again: {base}");
    println!();

    // Credentials and fragments
    let private = search
        .with_credentials("alice", Some("s3cret"))
        .with_fragment("results");
    println!("Private: {private}");
    println!();

    // Query parameters from a record's fields, in declaration order
    let filters = Query::from_pairs([("lang", "en"), ("sort", "stars")]);
    let filtered = search.with_query(search.relative_url().query().merge(&filters));
    println!("Filtered: {filtered}");
    println!();

    // Swap in a different relative part wholesale
    let health = base.with_relative_url(RelativeUrl::parse("/health?verbose=1"));
    println!("Health: {health}"); // https://api.example.com/health?verbose=1
}
