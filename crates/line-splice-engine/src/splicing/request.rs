use std::ops::Range;

/// Convert a 1-based inclusive line interval into a 0-based half-open index range.
///
/// The start moves down by one; the inclusive end line already equals the exclusive
/// index boundary. Lines 5..=5 map to `4..5`, exactly the element at index 4.
///
/// Callers must pass `start_line >= 1`; bounds are checked in [`EditSet::preflight`].
pub fn to_index_range(start_line: usize, end_line: usize) -> Range<usize> {
    (start_line - 1)..end_line
}

/// A request to collapse lines `start_line..=end_line` (1-based) into `replacement`.
///
/// Line numbers refer to the document as it was when the request was written,
/// not to its state part way through a splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest<T = String> {
    pub start_line: usize,
    pub end_line: usize,
    pub replacement: T,
}

impl<T> EditRequest<T> {
    pub fn new(start_line: usize, end_line: usize, replacement: T) -> Self {
        Self {
            start_line,
            end_line,
            replacement,
        }
    }

    /// Number of lines covered by the request (inclusive).
    pub fn width(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }

    /// The 0-based half-open positions this request covers.
    pub fn index_range(&self) -> Range<usize> {
        to_index_range(self.start_line, self.end_line)
    }
}

/// Unordered collection of [`EditRequest`]s applied together in one pass.
///
/// The order requests are added in has no meaning; the splicer sorts them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSet<T = String> {
    pub(crate) requests: Vec<EditRequest<T>>,
    pub(crate) allow_adjacent: bool,
}

impl<T> Default for EditSet<T> {
    fn default() -> Self {
        Self {
            requests: Vec::new(),
            allow_adjacent: false,
        }
    }
}

impl<T> EditSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept requests whose intervals touch (`a.end_line + 1 == b.start_line`).
    ///
    /// Touching ranges are rejected unless this is set, since collapsing both
    /// joins their replacements onto consecutive lines.
    pub fn allow_adjacent(mut self, allow: bool) -> Self {
        self.allow_adjacent = allow;
        self
    }

    pub fn push(&mut self, request: EditRequest<T>) {
        self.requests.push(request);
    }

    /// Add a request built from its parts
    pub fn with(mut self, start_line: usize, end_line: usize, replacement: T) -> Self {
        self.push(EditRequest::new(start_line, end_line, replacement));
        self
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditRequest<T>> {
        self.requests.iter()
    }
}

impl<T> FromIterator<EditRequest<T>> for EditSet<T> {
    fn from_iter<I: IntoIterator<Item = EditRequest<T>>>(iter: I) -> Self {
        Self {
            requests: iter.into_iter().collect(),
            allow_adjacent: false,
        }
    }
}

impl<T> Extend<EditRequest<T>> for EditSet<T> {
    fn extend<I: IntoIterator<Item = EditRequest<T>>>(&mut self, iter: I) {
        self.requests.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 5, 4..5)]
    #[case(1, 1, 0..1)]
    #[case(1, 10, 0..10)]
    #[case(3, 5, 2..5)]
    #[case(2256, 2381, 2255..2381)]
    fn to_index_range_maps_inclusive_lines_to_half_open_indices(
        #[case] start_line: usize,
        #[case] end_line: usize,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(to_index_range(start_line, end_line), expected);
    }

    #[test]
    fn single_line_range_selects_exactly_one_element() {
        let lines = ["L1", "L2", "L3", "L4", "L5", "L6"];
        let range = to_index_range(5, 5);

        assert_eq!(&lines[range], &["L5"]);
    }

    #[test]
    fn index_range_covers_first_and_last_requested_line() {
        let lines: Vec<String> = (1..=10).map(|n| format!("L{n}")).collect();
        let request = EditRequest::new(3, 5, "R1".to_string());

        let covered = &lines[request.index_range()];

        assert_eq!(covered.first().map(String::as_str), Some("L3"));
        assert_eq!(covered.last().map(String::as_str), Some("L5"));
        assert_eq!(covered.len(), request.width());
    }

    #[test]
    fn edit_set_collects_requests_in_any_order() {
        let set: EditSet<&str> = vec![EditRequest::new(8, 9, "R2"), EditRequest::new(3, 5, "R1")]
            .into_iter()
            .collect();

        assert_eq!(set.len(), 2);
        assert!(!set.allow_adjacent);
        assert_eq!(set.iter().map(|r| r.start_line).collect::<Vec<_>>(), vec![8, 3]);
    }

    #[test]
    fn builder_sets_adjacency_and_requests() {
        let set = EditSet::new().allow_adjacent(true).with(1, 2, "A").with(3, 3, "B");

        assert!(set.allow_adjacent);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}
