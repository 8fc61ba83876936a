// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use line_splice_engine::splicing::EditSet;

#[allow(dead_code)]
pub fn generate_document(lines: usize) -> Vec<String> {
    (1..=lines)
        .map(|n| format!("        <div className=\"row-{n}\">content {n}</div>\n"))
        .collect()
}

/// `count` evenly spaced ranges of `width` lines across a document of `lines` lines
#[allow(dead_code)]
pub fn generate_edits(lines: usize, count: usize, width: usize) -> EditSet<String> {
    let stride = lines / count.max(1);
    assert!(stride > width + 1, "ranges would touch");

    let mut edits = EditSet::new();
    for i in 0..count {
        let start = i * stride + 1;
        edits = edits.with(start, start + width - 1, format!("<div>section {i}</div>\n"));
    }
    edits
}
