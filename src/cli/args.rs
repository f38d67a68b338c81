//! Command line argument parsing and validation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Windows installer bundler for MSYS2 GTK applications
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_inno",
    version,
    about = "Windows installer bundler for MSYS2 GTK applications",
    long_about = "Stages DLLs, GSettings schemas and translation catalogs next to a MinGW-built GTK \
application, then compiles its Inno Setup script.

Usage:
  kodegen_bundler_inno installer <SOURCE_ROOT> <BUILD_ROOT> C:/msys64 rnote Rnote \\
      com.github.flxzt.rnote rnote.exe <BUILD_ROOT>/rnote.iss
  kodegen_bundler_inno cargo-build <BUILD_ROOT> <SRC_ROOT> \"CARGO_HOME=...\" cargo \"--release\" \\
      target/release/rnote <BUILD_ROOT>/rnote
  kodegen_bundler_inno post-install

Exit code 0 = every phase succeeded."
)]
pub struct Args {
    /// Show per-locale and per-tool detail
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress the progress banner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Stage the installer payload and run the Inno Setup compiler
    Installer(InstallerArgs),

    /// Run cargo build and copy the produced binary to the build output
    CargoBuild(CargoBuildArgs),

    /// Refresh icon, schema, desktop and MIME caches after `meson install`
    PostInstall(PostInstallArgs),
}

/// Arguments of `installer`, in the order the build system passes them.
#[derive(clap::Args, Debug, Clone)]
pub struct InstallerArgs {
    /// Project source root
    pub source_root: PathBuf,

    /// Build root receiving dlls/, gschemas/ and locale/
    pub build_root: PathBuf,

    /// MSYS2 installation root
    pub toolchain_root: PathBuf,

    /// Application name (e.g. rnote)
    pub app_name: String,

    /// Capitalized application name (e.g. Rnote)
    pub app_name_capitalized: String,

    /// Application id (e.g. com.github.flxzt.rnote)
    pub app_id: String,

    /// Built application binary, relative to the build root
    pub app_output: PathBuf,

    /// Inno Setup script
    pub installer_script: PathBuf,

    /// TOML file overriding the toolchain layout and tool names
    #[arg(long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Stage dlls/, gschemas/ and locale/ without running the installer compiler
    #[arg(long)]
    pub stage_only: bool,

    /// Fail unless the installer compiler created this file
    #[arg(long, value_name = "PATH", conflicts_with = "stage_only")]
    pub expect_installer: Option<PathBuf>,
}

/// Arguments of `cargo-build`, in the order the build system passes them.
#[derive(clap::Args, Debug, Clone)]
pub struct CargoBuildArgs {
    /// Project build root
    pub project_build_root: PathBuf,

    /// Project source root
    pub project_src_root: PathBuf,

    /// Whitespace-separated KEY=VALUE environment for cargo
    #[arg(allow_hyphen_values = true)]
    pub cargo_env: String,

    /// Cargo executable
    pub cargo_cmd: PathBuf,

    /// Whitespace-separated options appended to `cargo build`
    #[arg(allow_hyphen_values = true)]
    pub cargo_options: String,

    /// Binary produced by cargo
    pub bin_output: PathBuf,

    /// Where the build system expects the binary
    pub output_file: PathBuf,
}

/// Environment read by `post-install`.
#[derive(clap::Args, Debug, Clone)]
pub struct PostInstallArgs {
    /// Staged install root; caches are only refreshed when empty
    #[arg(long, env = "DESTDIR", default_value = "")]
    pub destdir: String,

    /// Install prefix
    #[arg(long, env = "MESON_INSTALL_PREFIX", default_value = "/usr/local")]
    pub prefix: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Installer(args) => {
                for (name, value) in [
                    ("app name", &args.app_name),
                    ("capitalized app name", &args.app_name_capitalized),
                    ("app id", &args.app_id),
                ] {
                    if value.trim().is_empty() {
                        return Err(format!("{name} cannot be empty"));
                    }
                }
                if args.app_output.as_os_str().is_empty() {
                    return Err("app output cannot be empty".to_string());
                }
                Ok(())
            }
            Command::CargoBuild(args) => {
                if args.cargo_cmd.as_os_str().is_empty() {
                    return Err("cargo command cannot be empty".to_string());
                }
                Ok(())
            }
            Command::PostInstall(_) => Ok(()),
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
