use clap::Parser;

use crate::application::data::LogLevel;

/// Removes the empty directories below the current working directory.
///
/// A directory counts as empty when it holds no files at any depth, only
/// other empty directories.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Only print the directories that would be deleted
    #[clap(long)]
    pub dry_run: bool,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
