use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Create the directories and empty files drawn in a `tree`-style diagram.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// File containing the tree diagram
    pub input: PathBuf,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Directory to create the structure in
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Report what would be created without touching the filesystem
    #[clap(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn input_argument_is_required() {
        let err = Cli::try_parse_from(["sprout"]).expect_err("Missing input should be rejected");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn defaults_apply_with_only_input() {
        let cli = Cli::try_parse_from(["sprout", "tree.txt"]).expect("Should parse");
        assert_eq!(cli.input, PathBuf::from("tree.txt"));
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(!cli.dry_run);
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "sprout",
            "tree.txt",
            "--root",
            "out",
            "-l",
            "debug",
            "--dry-run",
        ])
        .expect("Should parse");
        assert_eq!(cli.root, PathBuf::from("out"));
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert!(cli.dry_run);
    }
}
