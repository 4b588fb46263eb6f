//! Construct scanner: finds TestCafe `fixture` and `test` declarations in
//! source text without parsing it.

pub mod patterns;

use regex::Captures;
use serde::Serialize;
use tracing::{debug, trace};

use crate::utils::clean_name;
use patterns::{
    construct_regex, FIXTURE_ARG_GROUP, FIXTURE_GROUP, FIXTURE_TAG_GROUP, MARKER_GROUP,
    TEST_GROUP, TEST_NAME_GROUP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructKind {
    Fixture,
    Test,
}

impl ConstructKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructKind::Fixture => "fixture",
            ConstructKind::Test => "test",
        }
    }
}

impl std::fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scanned construct. `offset` is the character index of the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub kind: ConstructKind,
    pub name: String,
    pub offset: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub commented: bool,
}

impl Occurrence {
    pub fn new(kind: ConstructKind, name: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            offset,
            commented: false,
        }
    }

    /// A commented-out construct, recorded so it shadows earlier ones.
    pub fn placeholder(kind: ConstructKind, offset: usize) -> Self {
        Self {
            commented: true,
            ..Self::new(kind, String::new(), offset)
        }
    }

    /// True when the construct has no runnable name: it is commented out or
    /// its literal name is empty.
    pub fn is_placeholder(&self) -> bool {
        self.commented || self.name.is_empty()
    }
}

/// Occurrences in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    occurrences: Vec<Occurrence>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.occurrences.iter()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn commented_count(&self) -> usize {
        self.occurrences.iter().filter(|o| o.commented).count()
    }

    fn push(&mut self, occurrence: Occurrence) {
        self.occurrences.push(occurrence);
    }
}

impl IntoIterator for ScanResult {
    type Item = Occurrence;
    type IntoIter = std::vec::IntoIter<Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.occurrences.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScanResult {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.occurrences.iter()
    }
}

/// Scans `text` for `fixture` and `test` declarations.
///
/// Never fails: text without recognizable constructs yields an empty result.
pub fn scan(text: &str) -> ScanResult {
    let mut result = ScanResult::new();
    let mut chars = CharCounter::new(text);

    for caps in construct_regex().captures_iter(text) {
        let Some((kind, keyword_start)) = keyword(&caps) else {
            continue;
        };
        let offset = chars.advance_to(keyword_start);

        let occurrence = if caps.name(MARKER_GROUP).is_some() {
            Occurrence::placeholder(kind, offset)
        } else {
            Occurrence::new(kind, clean_name(raw_name(&caps)), offset)
        };
        trace!(
            kind = %occurrence.kind,
            name = %occurrence.name,
            offset,
            commented = occurrence.commented,
            "matched construct"
        );
        result.push(occurrence);
    }

    debug!(
        occurrences = result.len(),
        commented = result.commented_count(),
        "scan complete"
    );
    result
}

fn keyword(caps: &Captures<'_>) -> Option<(ConstructKind, usize)> {
    if let Some(m) = caps.name(FIXTURE_GROUP) {
        return Some((ConstructKind::Fixture, m.start()));
    }
    caps.name(TEST_GROUP)
        .map(|m| (ConstructKind::Test, m.start()))
}

fn raw_name<'t>(caps: &Captures<'t>) -> &'t str {
    [FIXTURE_ARG_GROUP, FIXTURE_TAG_GROUP, TEST_NAME_GROUP]
        .iter()
        .find_map(|group| caps.name(group))
        .map(|m| m.as_str())
        .unwrap_or_default()
}

/// Converts increasing byte positions into character offsets in one pass.
struct CharCounter<'t> {
    text: &'t str,
    byte: usize,
    chars: usize,
}

impl<'t> CharCounter<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn advance_to(&mut self, byte: usize) -> usize {
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}
