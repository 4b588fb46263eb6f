//! Enclosure resolver: picks the construct that governs a cursor offset.
//!
//! Constructs are never closed in the scanned grammar, so the nearest
//! construct at or before the cursor governs it. A `test` between a
//! `fixture` and the cursor therefore wins over the fixture.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::LocateError;
use crate::scanner::{scan, ConstructKind, Occurrence};
use crate::utils::is_computed_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub kind: ConstructKind,
    pub name: String,
}

impl Selection {
    pub fn new(kind: ConstructKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn test(name: impl Into<String>) -> Self {
        Self::new(ConstructKind::Test, name)
    }

    pub fn fixture(name: impl Into<String>) -> Self {
        Self::new(ConstructKind::Fixture, name)
    }

    pub fn is_computed(&self) -> bool {
        is_computed_name(&self.name)
    }
}

impl From<&Occurrence> for Selection {
    fn from(occurrence: &Occurrence) -> Self {
        Self::new(occurrence.kind, occurrence.name.clone())
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \"{}\"", self.kind, self.name)
    }
}

/// Returns the construct governing `cursor`, or `None` when nothing precedes
/// it or the nearest preceding construct is commented out.
///
/// The comparison is inclusive: a cursor on the first character of a
/// keyword belongs to that construct.
pub fn resolve(occurrences: &[Occurrence], cursor: usize) -> Option<Selection> {
    let governing = occurrences.iter().rev().find(|o| o.offset <= cursor)?;
    if governing.is_placeholder() {
        trace!(
            cursor,
            offset = governing.offset,
            "nearest construct is commented out"
        );
        return None;
    }
    Some(Selection::from(governing))
}

/// Scans `text` and resolves `cursor`, rejecting computed names.
pub fn locate(text: &str, cursor: usize) -> Result<Selection, LocateError> {
    let result = scan(text);
    let selection = resolve(result.occurrences(), cursor).ok_or(LocateError::NotFound)?;
    if selection.is_computed() {
        return Err(LocateError::computed_name(selection.name));
    }
    debug!(cursor, selection = %selection, "located construct");
    Ok(selection)
}
