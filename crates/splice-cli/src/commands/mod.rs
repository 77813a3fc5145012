//! Command implementations for splice-cli

pub mod apply;
pub mod block;
pub mod report;
pub mod rewrite;

pub use apply::run_apply;
pub use block::run_block;
pub use rewrite::run_rewrite;

use std::path::Path;

use crate::error::Result;

/// Read text from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return Ok(std::io::read_to_string(std::io::stdin())?);
    }
    Ok(splice_fs::io::read_text(&splice_fs::TargetPath::new(path))?)
}
