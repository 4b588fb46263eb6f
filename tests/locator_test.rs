//! End-to-end locator tests over real TestCafe sources.
//!
//! Fixtures: tests/fixtures/javascript/

use pretty_assertions::assert_eq;
use std::path::PathBuf;
use testcafe_runner::error::LocateError;
use testcafe_runner::{locate, resolve, scan, ConstructKind, Occurrence, Selection};

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("javascript")
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_path().join(name))
        .unwrap_or_else(|_| panic!("Failed to read fixture: {name}"))
}

/// Character offset of the first occurrence of `needle`.
fn cursor_at(text: &str, needle: &str) -> usize {
    let byte = text
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in text"));
    text[..byte].chars().count()
}

// =============================================================================
// login.test.js
// =============================================================================

#[test]
fn test_login_scan() {
    let text = read_fixture("login.test.js");
    let found: Vec<(ConstructKind, String)> = scan(&text)
        .into_iter()
        .map(|o| (o.kind, o.name))
        .collect();
    assert_eq!(
        found,
        vec![
            (ConstructKind::Fixture, "Login".to_string()),
            (ConstructKind::Test, "logs in with valid credentials".to_string()),
            (ConstructKind::Test, String::new()),
            (ConstructKind::Test, "rejects a wrong password".to_string()),
            (ConstructKind::Fixture, "Logout".to_string()),
            (ConstructKind::Test, "logs out".to_string()),
        ]
    );
}

#[test]
fn test_login_cursor_in_fixture_header() {
    let text = read_fixture("login.test.js");
    let cursor = cursor_at(&text, "const submit");
    assert_eq!(locate(&text, cursor), Ok(Selection::fixture("Login")));
}

#[test]
fn test_login_cursor_in_test_body() {
    let text = read_fixture("login.test.js");
    let cursor = cursor_at(&text, ".typeText");
    assert_eq!(
        locate(&text, cursor),
        Ok(Selection::test("logs in with valid credentials"))
    );
}

#[test]
fn test_login_cursor_in_commented_test() {
    let text = read_fixture("login.test.js");
    let cursor = cursor_at(&text, "#remember");
    assert_eq!(locate(&text, cursor), Err(LocateError::NotFound));
}

#[test]
fn test_login_cursor_in_skipped_test() {
    let text = read_fixture("login.test.js");
    let cursor = cursor_at(&text, "rejects a wrong");
    assert_eq!(
        locate(&text, cursor),
        Ok(Selection::test("rejects a wrong password"))
    );
}

#[test]
fn test_login_cursor_in_page_modifier_test() {
    let text = read_fixture("login.test.js");
    let cursor = cursor_at(&text, "#logout");
    assert_eq!(locate(&text, cursor), Ok(Selection::test("logs out")));
}

#[test]
fn test_login_cursor_before_everything() {
    let text = read_fixture("login.test.js");
    assert_eq!(locate(&text, 0), Err(LocateError::NotFound));
}

// =============================================================================
// nested/cart.test.ts
// =============================================================================

#[test]
fn test_cart_template_literal_name() {
    let text = read_fixture("nested/cart.test.ts");
    let cursor = cursor_at(&text, ".add");
    assert_eq!(locate(&text, cursor), Ok(Selection::test("adds an item")));
}

#[test]
fn test_cart_computed_name_rejected() {
    let text = read_fixture("nested/cart.test.ts");
    let cursor = text.chars().count();
    assert_eq!(
        locate(&text, cursor),
        Err(LocateError::computed_name("<computed name>(line: 7)"))
    );
}

// =============================================================================
// properties
// =============================================================================

#[test]
fn test_text_without_constructs_never_resolves() {
    let text = "const testing = fixtures.map(f => f.test);\n// nothing to run\n";
    let result = scan(text);
    assert!(result.is_empty());
    for cursor in 0..=text.len() {
        assert_eq!(resolve(result.occurrences(), cursor), None);
    }
}

#[test]
fn test_fixture_then_test_on_one_line() {
    let text = "fixture('F'); test('T', () => {});";
    assert_eq!(
        locate(text, cursor_at(text, "'T'")),
        Ok(Selection::test("T"))
    );
    assert_eq!(
        locate(text, cursor_at(text, " test")),
        Ok(Selection::fixture("F"))
    );
}

#[test]
fn test_commented_fixture_blocks_later_test() {
    let text = "// fixture('F');\ntest('T', () => {});";
    for cursor in 0..cursor_at(text, "\n") {
        assert_eq!(locate(text, cursor), Err(LocateError::NotFound));
    }
    assert_eq!(locate(text, text.len()), Ok(Selection::test("T")));
}

#[test]
fn test_scan_is_idempotent() {
    let text = read_fixture("login.test.js");
    assert_eq!(scan(&text), scan(&text));
}

#[test]
fn test_name_cleaning_per_delimiter() {
    for text in [
        "test('Login works', fn);",
        "test(\"Login works\", fn);",
        "test(`Login works`, fn);",
        "fixture('Login works');",
        "fixture(\"Login works\");",
        "fixture `Login works`;",
        "fixture(`Login works`);",
    ] {
        let result = scan(text);
        assert_eq!(result.len(), 1, "{text}");
        assert_eq!(result.occurrences()[0].name, "Login works", "{text}");
    }
}

#[test]
fn test_only_matches_plain_test() {
    let plain = scan("test('T2', () => {})");
    let only = scan("test.only('T2', () => {})");
    assert_eq!(plain, only);
}

#[test]
fn test_reverse_order_resolution() {
    let occurrences = [
        Occurrence::new(ConstructKind::Test, "a", 10),
        Occurrence::new(ConstructKind::Test, "b", 40),
        Occurrence::new(ConstructKind::Test, "c", 70),
    ];
    assert_eq!(resolve(&occurrences, 55), Some(Selection::test("b")));
}
