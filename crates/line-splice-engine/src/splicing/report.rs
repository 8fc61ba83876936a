/// One applied request: where it was, where its replacement landed, what it removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement<T> {
    /// First replaced line, 1-based, in the original document
    pub start_line: usize,
    /// Last replaced line, 1-based inclusive, in the original document
    pub end_line: usize,
    /// 1-based line holding the replacement in the spliced document
    pub new_line: usize,
    /// The original lines `start_line..=end_line`
    pub removed: Vec<T>,
}

/// Result of a splice pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceReport<T> {
    /// Applied requests in ascending document order
    pub replacements: Vec<Replacement<T>>,
    pub original_len: usize,
    pub final_len: usize,
}

impl<T> SpliceReport<T> {
    /// Net number of lines the document shrank by.
    pub fn lines_removed(&self) -> usize {
        self.original_len - self.final_len
    }
}

/// Shorten `text` to at most `max` bytes for display, with a "..." suffix if cut.
///
/// Leading and trailing whitespace (including the line terminator) is dropped first.
/// The cut backs off to the nearest char boundary.
pub fn preview(text: &str, max: usize) -> String {
    let trimmed = text.trim();
    if trimmed.len() <= max {
        return trimmed.to_string();
    }
    let mut end = max;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    let mut s = trimmed[..end].to_string();
    s.push_str("...");
    s
}
