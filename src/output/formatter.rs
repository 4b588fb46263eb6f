use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::resolver::Selection;
use crate::scanner::{ConstructKind, ScanResult};
use crate::utils::position_of;

#[derive(Debug, Serialize)]
pub struct OccurrenceEntry {
    pub kind: ConstructKind,
    pub name: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub commented: bool,
}

#[derive(Debug, Serialize)]
pub struct FileListing {
    pub file: String,
    pub occurrences: Vec<OccurrenceEntry>,
}

impl FileListing {
    pub fn new(file: &Path, text: &str, result: &ScanResult) -> Self {
        let occurrences = result
            .iter()
            .map(|o| {
                let (line, column) = position_of(text, o.offset);
                OccurrenceEntry {
                    kind: o.kind,
                    name: o.name.clone(),
                    offset: o.offset,
                    line,
                    column,
                    commented: o.commented,
                }
            })
            .collect();
        Self {
            file: file.display().to_string(),
            occurrences,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonListing<'a> {
    pub files_scanned: usize,
    pub total_occurrences: usize,
    pub files: &'a [FileListing],
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_listing(listings: &[FileListing], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let output = JsonListing {
                    files_scanned: listings.len(),
                    total_occurrences: listings.iter().map(|l| l.occurrences.len()).sum(),
                    files: listings,
                };
                Ok(serde_json::to_string_pretty(&output)?)
            }
            OutputFormat::Text => {
                let mut out = String::new();
                for listing in listings {
                    writeln!(out, "{}", listing.file)?;
                    for entry in &listing.occurrences {
                        let position = format!("{}:{}", entry.line, entry.column);
                        let name = if entry.commented {
                            "(commented out)".to_string()
                        } else {
                            format!("\"{}\"", entry.name)
                        };
                        writeln!(out, "  {position:<8} {:<8} {name}", entry.kind.as_str())?;
                    }
                }
                Ok(out)
            }
        }
    }

    pub fn format_selection(selection: &Selection, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(selection)?),
            OutputFormat::Text => Ok(selection.to_string()),
        }
    }
}
