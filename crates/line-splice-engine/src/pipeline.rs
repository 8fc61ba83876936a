use log::info;

use crate::io::{IoError, LineSink, LineSource, line_terminator};
use crate::splicing::{EditSet, SpliceError, SpliceReport};

#[derive(Debug, thiserror::Error)]
pub enum SpliceFileError {
    #[error(transparent)]
    Splice(#[from] SpliceError),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Replacement for lines {start_line}..={end_line} spans more than one line")]
    MultiLineReplacement { start_line: usize, end_line: usize },
}

/// True if `replacement` holds a line break anywhere but at its very end.
fn is_multi_line(replacement: &str) -> bool {
    let body = replacement
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(replacement);
    body.contains('\n')
}

/// Read a document, splice it and write the result.
///
/// Validation runs before anything is written, so an invalid edit set leaves the
/// destination untouched. Passing no sink gives a dry run that only reports.
///
/// Each replacement must be a single line: a line break is only allowed as its
/// terminator. A replacement that does not end in `\n` takes the terminator of the
/// last line it replaces, so the output gains or loses no line break.
pub fn splice_file(
    source: &dyn LineSource,
    edits: EditSet<String>,
    sink: Option<&dyn LineSink>,
) -> Result<SpliceReport<String>, SpliceFileError> {
    let mut lines = source.read_lines()?;
    info!("loaded document with {} lines", lines.len());

    if let Some(request) = edits.iter().find(|r| is_multi_line(&r.replacement)) {
        return Err(SpliceFileError::MultiLineReplacement {
            start_line: request.start_line,
            end_line: request.end_line,
        });
    }

    let mut preflight = edits.preflight(lines.len())?;
    for (end_line, replacement) in preflight.replacements_mut() {
        if !replacement.ends_with('\n') {
            replacement.push_str(line_terminator(&lines[end_line - 1]));
        }
    }

    let report = preflight.apply(&mut lines);
    info!(
        "applied {} replacements, {} -> {} lines",
        report.replacements.len(),
        report.original_len,
        report.final_len
    );

    match sink {
        Some(sink) => sink.write_lines(&lines)?,
        None => info!("dry run, nothing written"),
    }

    Ok(report)
}
