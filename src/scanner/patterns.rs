//! Regular expression for TestCafe `fixture` and `test` declarations.
//!
//! One alternation covers both constructs so a single left-to-right pass
//! yields occurrences in document order.

use regex::Regex;
use std::sync::LazyLock;

pub const FIXTURE_KEYWORD: &str = "fixture";
pub const TEST_KEYWORD: &str = "test";

/// Capture group holding a `//` or `/*` marker in front of the keyword.
pub const MARKER_GROUP: &str = "marker";
pub const FIXTURE_GROUP: &str = "fixture";
pub const FIXTURE_ARG_GROUP: &str = "fixture_arg";
pub const FIXTURE_TAG_GROUP: &str = "fixture_tag";
pub const TEST_GROUP: &str = "test";
pub const TEST_NAME_GROUP: &str = "test_name";

/// Quoted or back-quoted literal; a backslash escapes the next character.
const STRING_LITERAL: &str = r#"'(?:[^'\\\n]|\\.)*'|"(?:[^"\\\n]|\\.)*"|`(?:[^`\\]|\\.)*`"#;

static CONSTRUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&construct_pattern()).expect("construct pattern is valid")
});

pub fn construct_regex() -> &'static Regex {
    &CONSTRUCT
}

fn construct_pattern() -> String {
    // Boundary: start of a line, a statement separator or whitespace.
    let boundary = r"(?:^|[;\s])";
    let marker = format!(r"(?P<{MARKER_GROUP}>[ \t]*(?://+|/\*+)[ \t]*)?");

    // fixture('name') or fixture `name`
    let fixture = format!(
        r"(?P<{FIXTURE_GROUP}>{FIXTURE_KEYWORD})\s*(?:(?P<{FIXTURE_ARG_GROUP}>\(\s*(?:{STRING_LITERAL})\s*\))|(?P<{FIXTURE_TAG_GROUP}>`(?:[^`\\]|\\.)*`))"
    );

    // test.only.meta('k', 'v')('name', fn): modifiers are `.ident` with an
    // optional flat argument list.
    let modifier = r"\s*\.\s*[A-Za-z_$][\w$]*(?:\s*\([^()]*\))?";
    let test = format!(
        r"(?P<{TEST_GROUP}>{TEST_KEYWORD})(?:{modifier})*\s*\(\s*(?P<{TEST_NAME_GROUP}>{STRING_LITERAL})\s*,"
    );

    format!(r"(?m){boundary}{marker}(?:{fixture}|{test})")
}
