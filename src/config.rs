// src/config.rs
use std::path::PathBuf;

use crate::args::Args;
use crate::options::OutputFormat;

/// Resolved runtime configuration, decoupled from the CLI surface.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub recursive: bool,
    pub details: bool,
    pub format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            root: args.directory,
            recursive: !args.no_recursive,
            details: args.details,
            format: args.format,
        }
    }
}
