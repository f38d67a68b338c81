//! `cargo-build` command: build with cargo and copy the binary out.
//!
//! Meson calls this as a custom target, passing the cargo environment and
//! options as single whitespace-separated strings.

use crate::{
    bundler::utils::{fs, process::ToolCommand},
    cli::{RuntimeConfig, args::CargoBuildArgs},
    error::{BundlerError, CliError, Result},
};

/// Runs `cargo build` and copies the produced binary to the output path.
pub async fn run(args: &CargoBuildArgs, config: &RuntimeConfig) -> Result<i32> {
    config.section("executing cargo build with arguments:")?;
    config.indent(&format!("project_build_root: {}", args.project_build_root.display()))?;
    config.indent(&format!("project_src_root: {}", args.project_src_root.display()))?;
    config.indent(&format!("cargo_env: {}", args.cargo_env))?;
    config.indent(&format!("cargo_cmd: {}", args.cargo_cmd.display()))?;
    config.indent(&format!("cargo_options: {}", args.cargo_options))?;
    config.indent(&format!("bin_output: {}", args.bin_output.display()))?;
    config.indent(&format!("output_file: {}", args.output_file.display()))?;

    let command = cargo_command(args)?;
    config.progress(&command.display())?;
    command.run_inherited().await?;

    config.progress(&format!(
        "copying {} to {}",
        args.bin_output.display(),
        args.output_file.display()
    ))?;
    fs::copy_file(&args.bin_output, &args.output_file).await?;

    Ok(0)
}

/// Builds the cargo invocation from the raw build-system strings.
pub fn cargo_command(args: &CargoBuildArgs) -> Result<ToolCommand> {
    let mut command = ToolCommand::new(&args.cargo_cmd)
        .arg("build")
        .args(args.cargo_options.split_whitespace());

    for (key, value) in parse_env_pairs(&args.cargo_env)? {
        command = command.env(key, value);
    }

    Ok(command)
}

/// Splits `KEY=VALUE KEY2=VALUE2` into pairs.
pub fn parse_env_pairs(env: &str) -> Result<Vec<(&str, &str)>> {
    env.split_whitespace()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key, value)),
            _ => Err(BundlerError::from(CliError::InvalidArguments {
                reason: format!("cargo environment entry `{pair}` is not KEY=VALUE"),
            })),
        })
        .collect()
}
