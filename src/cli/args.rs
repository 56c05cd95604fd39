//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser};
use std::path::PathBuf;

/// doclinks - Find broken links, missing anchors, and missing images in markdown.
#[derive(Debug, Parser)]
#[command(name = "doclinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub check: CheckArgs,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Arguments controlling what is checked and how it is reported.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// File or directory to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output issues as JSON
    #[arg(long)]
    pub json: bool,

    /// Show suggested fixes under each issue
    #[arg(long)]
    pub fix: bool,

    /// Path to settings file (overrides <PATH>/.doclinks.yml)
    #[arg(short, long, env = "DOCLINKS_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            json: false,
            fix: false,
            config: None,
        }
    }
}
