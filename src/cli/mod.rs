pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "template-rewriter")]
#[command(about = "Bulk rewrites for page templates", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        env = "TEMPLATE_REWRITER_ROOT",
        help = "Project root (defaults to the nearest ancestor containing src/)"
    )]
    pub root: Option<PathBuf>,

    #[arg(short = 'n', long, global = true, help = "Report changes without writing files")]
    pub dry_run: bool,

    #[arg(short, long, global = true, help = "Log every scanned file")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a default template-rewriter.toml to the project root")]
    Init,

    #[command(about = "Rename slate color utilities to the theme tokens")]
    Theme,

    #[command(about = "Rename the IFFAI brand to IAISO")]
    Brand,

    #[command(about = "Add background videos to the Program Objectives and Delivery Model sections")]
    Video,

    #[command(about = "Run theme, brand and video in that order")]
    All,
}
