use crate::cli::Cli;

/// Settings of a single run, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub dry_run: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            dry_run: cli.dry_run,
        }
    }
}
