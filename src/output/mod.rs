mod formatter;

pub use formatter::{FileListing, JsonListing, OccurrenceEntry, OutputFormatter};
