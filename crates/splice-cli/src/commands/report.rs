//! Status lines printed after each edit

use colored::Colorize;
use splice_blocks::{EditReport, Outcome, RewriteReport, SpliceReport};
use splice_fs::checksum::short;

pub fn print_splice(report: &SpliceReport) {
    match &report.outcome {
        Outcome::Replaced {
            marker_line,
            boundary_line,
            removed,
            inserted,
            before,
            after,
        } => {
            println!(
                "{} Successfully updated {}",
                "OK".green().bold(),
                report.path.to_string().cyan()
            );
            let end = match boundary_line {
                Some(line) => format!("line {}", line),
                None => "end of file".to_string(),
            };
            tracing::debug!(
                marker_line,
                end = %end,
                removed,
                inserted,
                before = short(before),
                after = short(after),
                "splice summary"
            );
            if boundary_line.is_none() {
                println!(
                    "{} No end boundary after line {}; replaced through end of file",
                    "WARN".yellow().bold(),
                    marker_line
                );
            }
        }
        Outcome::NotFound => {
            println!(
                "{} Could not find the start marker in {}",
                "WARN".yellow().bold(),
                report.path.to_string().cyan()
            );
        }
    }
}

pub fn print_rewrite(report: &RewriteReport) {
    let verb = if report.created() {
        "created"
    } else {
        "rewrote"
    };
    println!(
        "{} Successfully {} {}",
        "OK".green().bold(),
        verb,
        report.path.to_string().cyan()
    );
    if !report.changed() {
        println!("   content was already identical");
    }
}

pub fn print_edit(report: &EditReport) {
    match report {
        EditReport::Splice(splice) => print_splice(splice),
        EditReport::Rewrite(rewrite) => print_rewrite(rewrite),
    }
}
