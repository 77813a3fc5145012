//! Block splice command

use std::path::Path;

use splice_blocks::{Boundary, splice_file};
use splice_fs::TargetPath;

use super::report::print_splice;
use crate::error::Result;

/// Run the block command against one file.
///
/// A missing start marker is reported and is not an error.
pub fn run_block(path: &Path, start: &str, boundary: &Boundary, payload: &str) -> Result<()> {
    let target = TargetPath::new(path);
    tracing::debug!(path = %target, boundary = %boundary, "splicing block");

    let report = splice_file(&target, start, boundary, payload)?;
    print_splice(&report);
    Ok(())
}
