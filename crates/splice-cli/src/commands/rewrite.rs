//! Whole-file rewrite command

use std::path::Path;

use splice_blocks::rewrite_file;
use splice_fs::TargetPath;

use super::report::print_rewrite;
use crate::error::Result;

pub fn run_rewrite(path: &Path, content: &str) -> Result<()> {
    let report = rewrite_file(&TargetPath::new(path), content)?;
    print_rewrite(&report);
    Ok(())
}
