//! Installer payload staging for GTK applications built with MSYS2.
//!
//! The [`Bundler`] gathers everything a MinGW-built GTK application needs at
//! runtime next to its executable and then hands the build tree to Inno
//! Setup:
//!
//! - `dlls/` - the application's and loader plugins' toolchain DLLs
//! - `gschemas/` - GSettings schemas plus the compiled `gschemas.compiled`
//! - `locale/` - application catalogs merged with GLib/GTK/libadwaita ones
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_inno::bundler::{Bundler, PackageSettings, SettingsBuilder};
//!
//! # async fn example() -> kodegen_bundler_inno::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .build_root("_build")
//!     .toolchain_root("C:/msys64")
//!     .package_settings(PackageSettings {
//!         app_name: "rnote".into(),
//!         app_name_capitalized: "Rnote".into(),
//!         app_id: "com.github.flxzt.rnote".into(),
//!     })
//!     .app_output("rnote.exe")
//!     .installer_script("_build/rnote.iss")
//!     .build()?;
//!
//! let report = Bundler::new(settings).run().await?;
//! for locale in &report.locales {
//!     println!("{}: {:?}", locale.lang, locale.system_catalogs);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

pub use builder::Bundler;
pub use error::{Error, Result};
pub use platform::windows::locale::StagedLocale;
pub use settings::{BundleLayout, PackageSettings, Settings, SettingsBuilder, ToolSettings};

use std::path::PathBuf;

/// Outcome of a successful bundler run.
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Staged DLLs in `<build>/dlls`.
    pub dlls: Vec<PathBuf>,
    /// Compiled schema artifact.
    pub compiled_schemas: PathBuf,
    /// Staged locales.
    pub locales: Vec<StagedLocale>,
    /// Verified installer, when one was expected.
    pub installer: Option<InstallerArtifact>,
}

/// Installer executable produced by the installer compiler.
#[derive(Debug, Clone)]
pub struct InstallerArtifact {
    /// Installer path.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256.
    pub checksum: String,
}
