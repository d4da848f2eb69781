#![allow(clippy::enum_variant_names)]

use clap::Parser as _;
use colored::Colorize as _;
use tracing::debug;

use crate::{
    application::{Application, ApplicationError},
    cli::Cli,
};

mod application;
mod cli;
mod ext;
mod filesystem;
mod tree;

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    setup_colors();
    debug!("Parsed CLI arguments: {cli_args:?}");

    let dry_run = cli_args.dry_run;
    let report = Application::run(cli_args).await?;

    let headline = if dry_run {
        "Dry run complete, nothing was written.".yellow()
    } else if report.created() == 0 {
        "✅ Directory structure already present.".green()
    } else {
        "✅ Directory structure created.".green()
    };
    println!("{headline} ({report})");

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn setup_colors() {
    let supported = supports_color::on(supports_color::Stream::Stdout).is_some();
    colored::control::set_override(supported);
}
