//! End-to-end tests for `redact_url`.
//!
//! Query keys use bracket notation for nested data; these tests verify that the
//! rules written for JSON paths apply to them identically, and that everything
//! outside the matching parameter values survives untouched.

use payload_redaction::{RedactionConfig, RedactionEngine, RedactionError, RedactionRule};

const REDACTED: &str = "REDACTED";

fn redact_with(config: RedactionConfig, url: &str) -> String {
    RedactionEngine::new(config).redact_url(url).unwrap()
}

#[test]
fn test_default_rules_redact_token_query() {
    let redacted = RedactionEngine::with_default_rules()
        .redact_url("https://x.test/p?token=abc&keep=1")
        .unwrap();
    assert_eq!(redacted, "https://x.test/p?token=REDACTED&keep=1");
}

#[test]
fn test_default_rules_redact_nested_bracket_keys() {
    let input = concat!(
        "https://localhost/page?token=45mkmblmby3kymb56ky5by&password=Password1&someId=45vt45t4r454&",
        "nestedObject%5BdeeperNestedObject%5D%5BoldPassword%5D=old+pasword&",
        "nestedObject%5BdeeperNestedObject%5D%5Btoken%5D=super+secret+nested+token&",
        "nestedObject%5BdeeperNestedObject%5D%5BnotToRedact%5D=lorem+ipsum&",
        "nestedObject%5BnestedArray%5D%5B1%5D%5BarrayPassword%5D=true&",
        "nestedObject%5BnestedArray%5D%5B1%5D%5Btoken%5D=60865345675&",
        "nestedObject%5BnestedArray%5D%5B1%5D%5BalsoNotToRedact%5D=ipsum+lorem",
    );

    let redacted = RedactionEngine::with_default_rules()
        .redact_url(input)
        .unwrap();

    let expected = format!(
        "https://localhost/page?token={REDACTED}&password={REDACTED}&someId=45vt45t4r454&\
         nestedObject%5BdeeperNestedObject%5D%5BoldPassword%5D={REDACTED}&\
         nestedObject%5BdeeperNestedObject%5D%5Btoken%5D={REDACTED}&\
         nestedObject%5BdeeperNestedObject%5D%5BnotToRedact%5D=lorem+ipsum&\
         nestedObject%5BnestedArray%5D%5B1%5D%5BarrayPassword%5D={REDACTED}&\
         nestedObject%5BnestedArray%5D%5B1%5D%5Btoken%5D={REDACTED}&\
         nestedObject%5BnestedArray%5D%5B1%5D%5BalsoNotToRedact%5D=ipsum+lorem"
    );
    assert_eq!(redacted, expected);
}

#[test]
fn test_unencoded_brackets_are_understood() {
    let config = RedactionConfig::builder().property("secret").build().unwrap();
    let redacted = redact_with(config, "https://x.test/?nested[0][secret]=s&nested[0][id]=1");
    assert_eq!(redacted, "https://x.test/?nested[0][secret]=REDACTED&nested[0][id]=1");
}

#[test]
fn test_paths_match_through_array_indices() {
    let config = RedactionConfig::builder().path("items.token").build().unwrap();
    let redacted = redact_with(
        config,
        "https://x.test/?items%5B0%5D%5Btoken%5D=a&items%5B7%5D%5Btoken%5D=b&token=c",
    );
    assert_eq!(
        redacted,
        "https://x.test/?items%5B0%5D%5Btoken%5D=REDACTED&items%5B7%5D%5Btoken%5D=REDACTED&token=c"
    );
}

#[test]
fn test_paths_with_case_sensitivity() {
    let config = RedactionConfig::builder()
        .path(RedactionRule::case_sensitive("myObject.myPathToRedact"))
        .build()
        .unwrap();
    let redacted = redact_with(
        config,
        "https://x.test/?myObject%5BmyPathToRedact%5D=a&myobject%5BmyPathToRedact%5D=b",
    );
    assert_eq!(
        redacted,
        "https://x.test/?myObject%5BmyPathToRedact%5D=REDACTED&myobject%5BmyPathToRedact%5D=b"
    );
}

#[test]
fn test_whitelist_overrides_includes() {
    let config = RedactionConfig::builder()
        .include("Redact")
        .whitelist_path("myObject.notToRedact")
        .build()
        .unwrap();
    let redacted = redact_with(
        config,
        "https://x.test/?myObject%5BnotToRedact%5D=keep&myObject%5BtoRedact%5D=drop&notToRedact=drop",
    );
    assert_eq!(
        redacted,
        "https://x.test/?myObject%5BnotToRedact%5D=keep&myObject%5BtoRedact%5D=REDACTED&notToRedact=REDACTED"
    );
}

#[test]
fn test_includes_with_case_sensitivity() {
    let config = RedactionConfig::builder()
        .include(RedactionRule::case_sensitive("Redact"))
        .build()
        .unwrap();
    let redacted = redact_with(config, "https://x.test/?toRedact=a&toredact=b");
    assert_eq!(redacted, "https://x.test/?toRedact=REDACTED&toredact=b");
}

#[test]
fn test_custom_url_redaction_text_is_form_encoded() {
    let config = RedactionConfig::default_rules()
        .to_builder()
        .url_redaction_text("[gone]")
        .build()
        .unwrap();
    let redacted = redact_with(config, "https://x.test/?apiKey=k&a=b");
    assert_eq!(redacted, "https://x.test/?apiKey=%5Bgone%5D&a=b");
}

#[test]
fn test_scheme_host_path_and_fragment_are_preserved() {
    let redacted = RedactionEngine::with_default_rules()
        .redact_url("https://user@shop.example.com:8443/api/v1/cart?token=abc&q=red%20shoes#top")
        .unwrap();
    assert_eq!(
        redacted,
        "https://user@shop.example.com:8443/api/v1/cart?token=REDACTED&q=red%20shoes#top"
    );
}

#[test]
fn test_url_without_matches_is_returned_verbatim() {
    let input = "https://x.test?q=red%20shoes&page=2";
    let redacted = RedactionEngine::with_default_rules()
        .redact_url(input)
        .unwrap();
    assert_eq!(redacted, input);
}

#[test]
fn test_url_without_query_is_returned_verbatim() {
    let input = "https://x.test/products/42";
    let redacted = RedactionEngine::with_default_rules()
        .redact_url(input)
        .unwrap();
    assert_eq!(redacted, input);
}

#[test]
fn test_invalid_url_is_an_error() {
    let err = RedactionEngine::with_default_rules()
        .redact_url("/relative?token=abc")
        .unwrap_err();
    match err {
        RedactionError::InvalidUrl { url, .. } => assert_eq!(url, "/relative?token=abc"),
        other => panic!("unexpected error: {other}"),
    }
}
