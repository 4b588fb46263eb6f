//! Conversions between editor positions and character offsets.
//!
//! Lines and columns are 1-based; offsets count Unicode scalar values from
//! the start of the text, matching [`crate::scanner::Occurrence::offset`].

/// Character offset of `line:column`. A column past the end of the line
/// clamps to the line end, so `usize::MAX` means "end of line".
pub fn offset_at(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 || column == 0 {
        return None;
    }

    let mut offset = 0;
    for (index, content) in text.split('\n').enumerate() {
        if index + 1 == line {
            let visible = content.strip_suffix('\r').unwrap_or(content);
            return Some(offset + (column - 1).min(visible.chars().count()));
        }
        offset += content.chars().count() + 1;
    }
    None
}

/// 1-based `(line, column)` of a character offset. Offsets past the end map
/// to the position just after the last character.
pub fn position_of(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in text.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
