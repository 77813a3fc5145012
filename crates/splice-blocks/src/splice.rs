//! In-memory splice and full replace.

use crate::boundary::RegionEnd;
use crate::document::Document;
use tracing::{debug, warn};

/// Result of [`replace_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// The edited document, or an exact copy of the input when `found` is false.
    pub document: Document,
    /// Whether the start marker occurred.
    pub found: bool,
    /// 0-based index of the start marker line in the input.
    pub marker_line: Option<usize>,
    /// 0-based index, in the input, of the line that ended the region.
    /// `None` with `found` set means the region ran to the end of the input.
    pub boundary_line: Option<usize>,
    /// Original lines dropped from the region.
    pub removed: usize,
    /// Payload lines inserted after the marker line.
    pub inserted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Copying,
    Skipping,
}

/// Replace the region after the first line containing `start_marker`.
///
/// Lines are copied through until the marker line. That line is kept and
/// `payload` is inserted after it verbatim. The following original lines are
/// dropped until `is_region_end` accepts one; that line and everything after
/// it are copied again. The marker line itself is never offered to
/// `is_region_end`, and later occurrences of the marker are ordinary lines.
///
/// When no line contains the marker the document is returned unchanged with
/// `found == false`.
///
/// Re-applying a splice to its own output is not stable in general: if the
/// payload contains a line the boundary rule accepts, the second run stops
/// inside the payload instead of after it.
///
/// # Example
/// ```
/// use splice_blocks::{Boundary, Document, replace_block};
///
/// let doc = Document::parse("a\n// begin\nold\n// end\nz\n");
/// let end = Boundary::contains("// end").unwrap();
/// let result = replace_block(&doc, "// begin", &end, "new\n");
///
/// assert!(result.found);
/// assert_eq!(result.document.to_text(), "a\n// begin\nnew\n// end\nz\n");
/// ```
pub fn replace_block<R>(
    document: &Document,
    start_marker: &str,
    is_region_end: &R,
    payload: &str,
) -> Splice
where
    R: RegionEnd + ?Sized,
{
    let lines = document.lines();
    let payload_lines = Document::parse(payload).into_lines();

    let mut output = Vec::with_capacity(lines.len() + payload_lines.len());
    let mut mode = Mode::Copying;
    let mut marker_line = None;
    let mut boundary_line = None;
    let mut removed = 0;

    for (idx, line) in lines.iter().enumerate() {
        match mode {
            Mode::Copying => {
                output.push(line.clone());
                if marker_line.is_none() && line.contains(start_marker) {
                    debug!(line = idx + 1, "start marker found, inserting payload");
                    output.extend(payload_lines.iter().cloned());
                    marker_line = Some(idx);
                    mode = Mode::Skipping;
                }
            }
            Mode::Skipping => {
                let next = lines.get(idx + 1).map(String::as_str);
                if is_region_end.is_region_end(line, next) {
                    debug!(line = idx + 1, removed, "region end reached");
                    output.push(line.clone());
                    boundary_line = Some(idx);
                    mode = Mode::Copying;
                } else {
                    removed += 1;
                }
            }
        }
    }

    let Some(marker_idx) = marker_line else {
        debug!(lines = lines.len(), "start marker not found");
        return Splice {
            document: document.clone(),
            found: false,
            marker_line: None,
            boundary_line: None,
            removed: 0,
            inserted: 0,
        };
    };

    if mode == Mode::Skipping {
        warn!(
            marker_line = marker_idx + 1,
            removed, "no region end after start marker; dropped the rest of the document"
        );
    }

    Splice {
        document: Document::from_iter(output),
        found: true,
        marker_line: Some(marker_idx),
        boundary_line,
        removed,
        inserted: payload_lines.len(),
    }
}

/// Replace the whole document with `content`, whatever it held before.
pub fn full_replace(content: &str) -> Document {
    Document::parse(content)
}
