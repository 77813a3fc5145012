//! Plan application command

use std::path::Path;

use colored::Colorize;
use splice_blocks::Plan;
use splice_fs::TargetPath;

use super::report::print_edit;
use crate::error::{CliError, Result};

/// Apply every edit of the plan at `plan_path`, in order.
///
/// The whole plan is validated before the first write. Status is printed as
/// each edit completes, so a failure part-way leaves the earlier lines on
/// screen.
pub fn run_apply(plan_path: &Path) -> Result<()> {
    let plan = Plan::load(&TargetPath::new(plan_path))?;
    if plan.edits.is_empty() {
        return Err(CliError::user(format!(
            "Plan {} contains no edits",
            plan_path.display()
        )));
    }
    println!(
        "{} Applying {} edit(s) from {}",
        "=>".blue().bold(),
        plan.edits.len(),
        plan_path.display().to_string().cyan()
    );

    plan.apply_with(|_, report| print_edit(report))?;
    Ok(())
}
