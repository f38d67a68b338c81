//! Toolchain and build-tree layout.
//!
//! Describes where things live inside an MSYS2 installation and inside the
//! application's build directory, plus which external tools to call. Every
//! field has a default matching a stock MSYS2 `mingw64` environment, so a
//! layout file only needs to name what differs:
//!
//! ```toml
//! prefix = "ucrt64"
//! library_pattern = '/ucrt64\S*\.dll'
//! loader_plugins = "ucrt64/lib/gdk-pixbuf-2.0/2.10.0/loaders/*.dll"
//! schema_dir = "ucrt64/share/glib-2.0/schemas"
//! system_locale_dir = "ucrt64/share/locale"
//!
//! [tools]
//! installer_compiler = "iscc"
//! ```

use crate::bundler::error::{ErrorExt, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Relative locations inside the toolchain root and the build root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleLayout {
    /// MSYS2 environment directory under the toolchain root.
    pub prefix: String,

    /// Regex selecting toolchain DLL paths in dependency listings.
    pub library_pattern: String,

    /// Glob (relative to the toolchain root) of loader plugins whose
    /// dependencies are bundled too.
    pub loader_plugins: String,

    /// Schema directory relative to the toolchain root.
    pub schema_dir: PathBuf,

    /// File name glob of toolchain schemas to stage.
    pub schema_pattern: String,

    /// Locale tree relative to the toolchain root.
    pub system_locale_dir: PathBuf,

    /// Toolchain catalogs merged into every application locale.
    pub locale_catalogs: Vec<String>,

    /// Directory holding `<app_id>.gschema.xml`, relative to the build root.
    pub app_schema_dir: String,

    /// Compiled application catalog tree, relative to the build root.
    pub app_locale_dir: String,

    /// External tools.
    pub tools: ToolSettings,
}

impl Default for BundleLayout {
    fn default() -> Self {
        Self {
            prefix: "mingw64".into(),
            library_pattern: r"/mingw\S*\.dll".into(),
            loader_plugins: "mingw64/lib/gdk-pixbuf-2.0/2.10.0/loaders/*.dll".into(),
            schema_dir: PathBuf::from("mingw64/share/glib-2.0/schemas"),
            schema_pattern: "org.gtk.*".into(),
            system_locale_dir: PathBuf::from("mingw64/share/locale"),
            locale_catalogs: vec!["glib20.mo".into(), "gtk40.mo".into(), "libadwaita.mo".into()],
            app_schema_dir: "{app_name}-ui/data".into(),
            app_locale_dir: "{app_name}-ui/po".into(),
            tools: ToolSettings::default(),
        }
    }
}

impl BundleLayout {
    /// Reads a layout from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).fs_context("reading layout file", path)?;
        Self::parse(&content)
    }

    /// Parses a layout from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Directories searched for tools before `PATH`.
    pub fn tool_dirs(&self, toolchain_root: &Path) -> Vec<PathBuf> {
        vec![
            toolchain_root.join(&self.prefix).join("bin"),
            toolchain_root.join("usr").join("bin"),
        ]
    }
}

/// External tools driven by the bundler.
///
/// Bare names are looked up in the toolchain first, then on `PATH`. Values
/// containing a path separator are used as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSettings {
    /// Prints the shared libraries a binary links against.
    pub dependency_inspector: String,

    /// Compiles a schema directory into `gschemas.compiled`.
    pub schema_compiler: String,

    /// Inno Setup compiler, started inside the toolchain shell.
    pub installer_compiler: String,

    /// Login shell, relative to the toolchain root unless absolute.
    pub shell: PathBuf,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            dependency_inspector: "ldd".into(),
            schema_compiler: "glib-compile-schemas".into(),
            installer_compiler: "iscc".into(),
            shell: PathBuf::from("usr/bin/bash"),
        }
    }
}

/// Replaces `{app_name}` in a layout path.
pub fn expand_app_path(template: &str, app_name: &str) -> PathBuf {
    PathBuf::from(template.replace("{app_name}", app_name))
}
