use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// File holding the tree diagram.
    pub input: PathBuf,
    /// Directory the layout is created under.
    pub root: PathBuf,
    pub dry_run: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            root: cli.root,
            dry_run: cli.dry_run,
        }
    }
}
