use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use template_rewriter::{Rewriter, RunOptions, Stage, StageReport};

use super::relative;

pub fn handle(root: &Path, stages: &[Stage], options: RunOptions) -> Result<()> {
    let rewriter = Rewriter::new(root)
        .context("Failed to load template-rewriter configuration")?
        .with_options(options);

    if options.dry_run {
        println!("{}", "Dry run: no files will be written".bright_yellow());
    }

    for (idx, stage) in stages.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        if stages.len() > 1 {
            println!("{}", format!("== {} ==", stage).bright_blue().bold());
        }

        let report = rewriter
            .run(*stage)
            .with_context(|| format!("The {} stage failed", stage))?;

        match stage {
            Stage::Theme | Stage::Brand => print_rewrite_report(&report, root),
            Stage::Video => {
                let config = rewriter.config();
                print_injection_report(&report, root, config.extension(), config.backup_suffix());
            }
        }
    }

    Ok(())
}

fn print_rewrite_report(report: &StageReport, root: &Path) {
    let label = if report.dry_run { "Would update:" } else { "Updated:" };

    for change in &report.modified {
        let path = relative(&change.path, root).display();
        match change.occurrences {
            Some(count) => println!("{} {} ({} occurrences)", label.bright_green(), path, count),
            None => println!("{} {}", label.bright_green(), path),
        }
    }

    println!("\nTotal files updated: {}", report.modified_count());
    if report.total_occurrences() > 0 {
        println!("Total occurrences replaced: {}", report.total_occurrences());
    }
}

fn print_injection_report(report: &StageReport, root: &Path, extension: &str, backup_suffix: &str) {
    let label = if report.dry_run { "WOULD MODIFY:" } else { "MODIFIED:" };

    for change in &report.modified {
        println!("{} {}", label.bright_green(), relative(&change.path, root).display());
    }
    for failure in &report.failures {
        println!(
            "{} {} -> {}",
            "ERROR:".bright_red(),
            relative(&failure.path, root).display(),
            failure.message
        );
    }

    println!("\nScanned: {}", report.scanned);
    println!("Modified: {}", report.modified_count());
    if !report.dry_run {
        println!(
            "Backups: created as *.{}.{} for each modified file",
            extension, backup_suffix
        );
    }
}
