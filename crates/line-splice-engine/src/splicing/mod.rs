/*!
 * # Range Splicing
 *
 * Collapses numbered line intervals of a document into single replacement lines.
 *
 * ## Line numbering
 *
 * Requests use 1-based, inclusive line numbers, the way an editor shows them. Storage is
 * 0-based and slices are half-open, so every request goes through [`to_index_range`]:
 * `start_line..=end_line` becomes `start_line - 1..end_line`.
 *
 * ## Ordering
 *
 * Replacing a range with one line shifts every line after it. Requests are therefore applied
 * from the highest start line down: anything not yet applied sits entirely below what has
 * been, so positions computed against the original document stay valid. The sort happens
 * inside [`EditSet::preflight`]; callers may build an [`EditSet`] in any order.
 *
 * ## Atomicity
 *
 * All requests are checked before the first mutation. A bad bound yields
 * [`SpliceError::InvalidRange`], intersecting (or, by default, touching) intervals yield
 * [`SpliceError::OverlappingRanges`], and in both cases the document is untouched.
 *
 * ```rust
 * use line_splice_engine::splicing::{EditSet, splice};
 *
 * let mut doc: Vec<String> = (1..=10).map(|n| format!("L{n}")).collect();
 * let edits = EditSet::new()
 *     .with(8, 9, "R2".to_string())
 *     .with(3, 5, "R1".to_string());
 *
 * let report = splice(&mut doc, edits).unwrap();
 *
 * assert_eq!(doc, ["L1", "L2", "R1", "L6", "L7", "R2", "L10"]);
 * assert_eq!(report.replacements[1].new_line, 6);
 * ```
 */

pub mod preflight;
pub mod report;
pub mod request;

pub use preflight::{Preflight, SpliceError, splice};
pub use report::{Replacement, SpliceReport, preview};
pub use request::{EditRequest, EditSet, to_index_range};
