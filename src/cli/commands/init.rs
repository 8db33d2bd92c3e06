use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use template_rewriter::config::Config;

pub fn handle(root: &Path) -> Result<()> {
    let (path, created) = Config::init(root)
        .context("Failed to initialize template-rewriter in the project root")?;

    if created {
        println!("{} Wrote {}", "✓".bright_green(), path.display());
    } else {
        println!("{} {} already exists", "ℹ".bright_blue(), path.display());
    }

    let config = Config::load_or_default(root)?;
    println!("  Templates: {}", config.target_dir().display().to_string().bright_cyan());
    println!("  Files:     *.{}", config.extension());
    println!("  Backups:   *.{}.{}", config.extension(), config.backup_suffix());

    Ok(())
}
