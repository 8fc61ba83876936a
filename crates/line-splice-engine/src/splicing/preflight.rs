use std::iter;

use log::debug;

use crate::splicing::{EditRequest, EditSet, Replacement, SpliceReport};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpliceError {
    #[error(
        "Invalid range {start_line}..={end_line}: lines must satisfy 1 <= start <= end <= {len}"
    )]
    InvalidRange {
        start_line: usize,
        end_line: usize,
        len: usize,
    },
    #[error("Overlapping ranges {}..={} and {}..={}", .first.0, .first.1, .second.0, .second.1)]
    OverlappingRanges {
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// An [`EditSet`] that passed validation against a document of `len` lines.
///
/// Requests are held in descending `start_line` order, which is the only order
/// in which applying one never moves the lines another still points at.
#[derive(Debug)]
pub struct Preflight<T> {
    requests: Vec<EditRequest<T>>,
    len: usize,
}

impl<T> EditSet<T> {
    /// Validate every request against a document of `len` lines without touching it.
    ///
    /// Fails on the first out-of-bounds or inverted request, then on the first pair
    /// of intervals that share a line (or touch, unless adjacency was allowed).
    pub fn preflight(self, len: usize) -> Result<Preflight<T>, SpliceError> {
        let EditSet {
            mut requests,
            allow_adjacent,
        } = self;

        for request in &requests {
            if request.start_line < 1
                || request.start_line > request.end_line
                || request.end_line > len
            {
                return Err(SpliceError::InvalidRange {
                    start_line: request.start_line,
                    end_line: request.end_line,
                    len,
                });
            }
        }

        requests.sort_by(|a, b| b.start_line.cmp(&a.start_line));

        for pair in requests.windows(2) {
            let (higher, lower) = (&pair[0], &pair[1]);
            let clear = if allow_adjacent {
                lower.end_line < higher.start_line
            } else {
                lower.end_line + 1 < higher.start_line
            };
            if !clear {
                return Err(SpliceError::OverlappingRanges {
                    first: (lower.start_line, lower.end_line),
                    second: (higher.start_line, higher.end_line),
                });
            }
        }

        Ok(Preflight { requests, len })
    }
}

impl<T> Preflight<T> {
    /// Line count of the document this set was validated against
    pub fn document_len(&self) -> usize {
        self.len
    }

    /// Requests in application order (descending start line)
    pub fn requests(&self) -> &[EditRequest<T>] {
        &self.requests
    }

    /// `(end_line, &mut replacement)` per request, in application order.
    ///
    /// Bounds stay read-only so they cannot drift from what was validated.
    pub fn replacements_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.requests
            .iter_mut()
            .map(|request| (request.end_line, &mut request.replacement))
    }

    /// Collapse every validated interval of `document` into its replacement.
    ///
    /// `document` must be the sequence (or an identical one) that was passed to
    /// [`EditSet::preflight`]; nothing here can fail once validation succeeded.
    pub fn apply(self, document: &mut Vec<T>) -> SpliceReport<T> {
        debug_assert_eq!(
            document.len(),
            self.len,
            "document changed length between preflight and apply"
        );

        let mut replacements = Vec::with_capacity(self.requests.len());
        for request in self.requests {
            let EditRequest {
                start_line,
                end_line,
                replacement,
            } = request;
            let range = super::to_index_range(start_line, end_line);
            debug!(
                "splicing lines {start_line}..={end_line} (indices {}..{})",
                range.start, range.end
            );
            let removed: Vec<T> = document.splice(range, iter::once(replacement)).collect();
            replacements.push(Replacement {
                start_line,
                end_line,
                new_line: start_line,
                removed,
            });
        }

        // Applied highest-first; report in document order with output positions.
        replacements.reverse();
        let mut shift = 0;
        for replacement in &mut replacements {
            replacement.new_line = replacement.start_line - shift;
            shift += replacement.end_line - replacement.start_line;
        }

        SpliceReport {
            replacements,
            original_len: self.len,
            final_len: document.len(),
        }
    }
}

/// Replace every interval in `edits` with its single replacement line.
///
/// Either all requests are applied or an error is returned and `document`
/// is left exactly as it was.
pub fn splice<T>(document: &mut Vec<T>, edits: EditSet<T>) -> Result<SpliceReport<T>, SpliceError> {
    let preflight = edits.preflight(document.len())?;
    Ok(preflight.apply(document))
}
