//! Inno Setup installer compilation.
//!
//! `iscc` is started through the toolchain's login shell so it sees the MSYS2
//! environment. The compiler and script path travel as positional parameters
//! of a fixed `exec "$0" "$@"` command, never interpolated into the command
//! string.

use crate::{
    bail,
    bundler::{
        error::{Context, Result},
        settings::Settings,
        utils::process::ToolCommand,
    },
};

/// Command run by the login shell; `$0` is the compiler, `$@` its arguments.
const EXEC_POSITIONAL: &str = "exec \"$0\" \"$@\"";

/// Builds the shell invocation for the installer compiler.
pub fn iscc_command(settings: &Settings) -> ToolCommand {
    ToolCommand::new(settings.shell_path())
        .args(["-lc", EXEC_POSITIONAL])
        .arg(&settings.layout().tools.installer_compiler)
        .arg(settings.installer_script())
}

/// Compiles the installer script.
///
/// Compiler output streams straight to the terminal.
pub async fn build_installer(settings: &Settings) -> Result<()> {
    let script = settings.installer_script();
    if !script.is_file() {
        bail!("installer script {} does not exist", script.display());
    }

    iscc_command(settings)
        .run_inherited()
        .await
        .context("Running ISCC failed")?;

    log::info!("Compiled installer script {}", script.display());
    Ok(())
}
