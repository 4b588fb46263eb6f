use regex::Regex;
use std::sync::LazyLock;

/// Placeholder TestCafe reports for a name that only exists after compilation,
/// e.g. `<computed name>(line: 12)`.
static COMPUTED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<computed name>\(line: \d+\)$").expect("computed name pattern is valid")
});

const QUOTES: [char; 3] = ['\'', '"', '`'];

/// Strips one pair of matching quote or backtick delimiters.
pub fn unquote_string(s: &str) -> &str {
    let s = s.trim();
    let mut chars = s.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && QUOTES.contains(&open) => &s[1..s.len() - 1],
        _ => s,
    }
}

/// Turns a raw first-argument capture into the construct name: optional
/// surrounding parentheses, then one pair of delimiters, then escaped
/// delimiters and backslashes, then whitespace.
pub fn clean_name(raw: &str) -> String {
    let mut s = raw.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        s = inner;
    }
    unescape_delimiters(unquote_string(s)).trim().to_string()
}

/// Drops the backslash in front of a quote, backtick or backslash. Other
/// escapes such as `\n` are kept verbatim.
fn unescape_delimiters(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == '\\' || QUOTES.contains(&next) => out.push(next),
            Some(next) => {
                out.push(c);
                out.push(next);
            }
            None => out.push(c),
        }
    }
    out
}

pub fn is_computed_name(name: &str) -> bool {
    COMPUTED_NAME.is_match(name)
}
