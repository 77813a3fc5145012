//! Splice and rewrite applied to files on disk.

use crate::boundary::RegionEnd;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::splice::{full_replace, replace_block};
use splice_fs::checksum::compute_content_checksum;
use splice_fs::{TargetPath, io};
use tracing::info;

/// What [`splice_file`] did to the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The region was replaced and the file rewritten.
    Replaced {
        /// 1-based line of the start marker.
        marker_line: usize,
        /// 1-based line, in the original file, that ended the region.
        boundary_line: Option<usize>,
        removed: usize,
        inserted: usize,
        /// Checksum of the file before the edit.
        before: String,
        /// Checksum of the file after the edit.
        after: String,
    },
    /// The start marker does not occur; the file was not touched.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceReport {
    pub path: TargetPath,
    pub outcome: Outcome,
}

impl SpliceReport {
    pub fn found(&self) -> bool {
        matches!(self.outcome, Outcome::Replaced { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: TargetPath,
    /// Checksum of the previous content, `None` if the file did not exist.
    pub before: Option<String>,
    pub after: String,
}

impl RewriteReport {
    pub fn created(&self) -> bool {
        self.before.is_none()
    }

    pub fn changed(&self) -> bool {
        self.before.as_deref() != Some(self.after.as_str())
    }
}

/// Splice `payload` into the file at `path`.
///
/// The file is read once, edited in memory, and written back atomically
/// only when the start marker occurs. Without a match the file is left
/// untouched and the report says [`Outcome::NotFound`].
///
/// # Errors
/// [`Error::EmptyMarker`] for an empty `start_marker`, checked before any
/// I/O. [`Error::Fs`] when the file cannot be read or written.
pub fn splice_file<R>(
    path: &TargetPath,
    start_marker: &str,
    boundary: &R,
    payload: &str,
) -> Result<SpliceReport>
where
    R: RegionEnd + ?Sized,
{
    if start_marker.is_empty() {
        return Err(Error::EmptyMarker {
            what: "start marker",
        });
    }

    let original = io::read_text(path)?;
    let document = Document::parse(&original);
    let splice = replace_block(&document, start_marker, boundary, payload);

    let Some(marker_idx) = splice.marker_line else {
        info!(path = %path, "start marker not found, file left untouched");
        return Ok(SpliceReport {
            path: path.clone(),
            outcome: Outcome::NotFound,
        });
    };

    let updated = splice.document.to_text();
    io::write_text(path, &updated)?;
    info!(
        path = %path,
        removed = splice.removed,
        inserted = splice.inserted,
        "block replaced"
    );

    Ok(SpliceReport {
        path: path.clone(),
        outcome: Outcome::Replaced {
            marker_line: marker_idx + 1,
            boundary_line: splice.boundary_line.map(|idx| idx + 1),
            removed: splice.removed,
            inserted: splice.inserted,
            before: compute_content_checksum(&original),
            after: compute_content_checksum(&updated),
        },
    })
}

/// Overwrite the file at `path` with `content`, creating it if needed.
///
/// # Errors
/// [`Error::Fs`] when the existing file cannot be read for its checksum or
/// the new content cannot be written.
pub fn rewrite_file(path: &TargetPath, content: &str) -> Result<RewriteReport> {
    let before = match io::read_text(path) {
        Ok(previous) => Some(compute_content_checksum(&previous)),
        Err(e) if e.is_not_found() => None,
        Err(e) => return Err(e.into()),
    };

    let document = full_replace(content);
    let text = document.to_text();
    io::write_text(path, &text)?;
    info!(path = %path, lines = document.len(), "file rewritten");

    Ok(RewriteReport {
        path: path.clone(),
        before,
        after: compute_content_checksum(&text),
    })
}
