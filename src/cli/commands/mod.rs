pub mod init;
pub mod run;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use template_rewriter::config::find_project_root;
use template_rewriter::error::ConfigError;
use template_rewriter::RewriteError;

/// Use the explicit root, or discover one from the working directory
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(find_project_root(&cwd)?)
        }
    }
}

/// Path relative to the project root, for display
pub fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    let config_error = err.downcast_ref::<ConfigError>().is_some()
        || matches!(err.downcast_ref::<RewriteError>(), Some(RewriteError::Config(_)));

    if config_error {
        eprintln!(
            "  {} Run {} to write a default config",
            "└".bright_cyan(),
            "template-rewriter init".bright_cyan()
        );
        return;
    }

    match err.downcast_ref::<RewriteError>() {
        Some(RewriteError::MissingDirectory { .. }) => {
            eprintln!(
                "  {} Check files.target_dir in template-rewriter.toml or pass {}",
                "└".bright_cyan(),
                "--root".bright_cyan()
            );
        }
        Some(RewriteError::FileAccess { .. }) => {
            eprintln!("  {} Check that the file is readable UTF-8 and writable", "└".bright_cyan());
        }
        _ => {
            eprintln!(
                "  {} Run with {} for more details",
                "└".bright_black(),
                "--verbose".bright_cyan()
            );
        }
    }
}
