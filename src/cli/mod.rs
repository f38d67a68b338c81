//! Command line interface for the installer bundler.
//!
//! Parses arguments, validates them and dispatches to the subcommand
//! implementations in [`commands`].

mod args;
pub mod commands;
mod output;

pub use args::{Args, CargoBuildArgs, Command, InstallerArgs, PostInstallArgs, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Validates and runs already parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(args);

    match &args.command {
        Command::Installer(installer) => commands::installer::run(installer, &config).await,
        Command::CargoBuild(cargo) => commands::cargo_build::run(cargo, &config).await,
        Command::PostInstall(post) => commands::post_install::run(post, &config).await,
    }
}
