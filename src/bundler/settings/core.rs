//! Core Settings struct and implementations.

use super::{BundleLayout, PackageSettings, layout::expand_app_path};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Main settings for a bundler run.
///
/// Holds the eight invocation inputs plus the resolved [`BundleLayout`].
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which
/// validates the library pattern up front.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Application identity.
    package: PackageSettings,

    /// Source tree root; informational only.
    source_root: PathBuf,

    /// Build directory that receives the staging directories.
    build_root: PathBuf,

    /// MSYS2 installation root.
    toolchain_root: PathBuf,

    /// Built application binary, relative to the build root.
    app_output: PathBuf,

    /// Inno Setup script handed to the compiler.
    installer_script: PathBuf,

    /// Toolchain and build-tree layout.
    layout: BundleLayout,

    /// Compiled form of `layout.library_pattern`.
    library_pattern: Regex,
}

impl Settings {
    /// Returns the application identity.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the lower-case application name.
    pub fn app_name(&self) -> &str {
        &self.package.app_name
    }

    /// Returns the source root.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Returns the toolchain root.
    pub fn toolchain_root(&self) -> &Path {
        &self.toolchain_root
    }

    /// Returns the full path to the built application binary.
    pub fn app_binary_path(&self) -> PathBuf {
        self.build_root.join(&self.app_output)
    }

    /// Returns the installer script path.
    pub fn installer_script(&self) -> &Path {
        &self.installer_script
    }

    /// Returns the layout.
    pub fn layout(&self) -> &BundleLayout {
        &self.layout
    }

    /// Returns the compiled library pattern.
    pub fn library_pattern(&self) -> &Regex {
        &self.library_pattern
    }

    /// `<build>/dlls`
    pub fn dlls_dir(&self) -> PathBuf {
        self.build_root.join("dlls")
    }

    /// `<build>/gschemas`
    pub fn gschemas_dir(&self) -> PathBuf {
        self.build_root.join("gschemas")
    }

    /// `<build>/locale`
    pub fn locale_dir(&self) -> PathBuf {
        self.build_root.join("locale")
    }

    /// Directory containing the application's schema definition.
    pub fn app_schema_dir(&self) -> PathBuf {
        self.build_root
            .join(expand_app_path(&self.layout.app_schema_dir, self.app_name()))
    }

    /// Compiled application catalog tree.
    pub fn app_locale_dir(&self) -> PathBuf {
        self.build_root
            .join(expand_app_path(&self.layout.app_locale_dir, self.app_name()))
    }

    /// Toolchain schema directory.
    pub fn system_schema_dir(&self) -> PathBuf {
        self.toolchain_root.join(&self.layout.schema_dir)
    }

    /// Toolchain `LC_MESSAGES` directory for `lang`.
    pub fn system_messages_dir(&self, lang: &str) -> PathBuf {
        self.toolchain_root
            .join(&self.layout.system_locale_dir)
            .join(lang)
            .join("LC_MESSAGES")
    }

    /// Toolchain shell used to start the installer compiler.
    pub fn shell_path(&self) -> PathBuf {
        let shell = &self.layout.tools.shell;
        if shell.is_absolute() {
            shell.clone()
        } else {
            self.toolchain_root.join(shell)
        }
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        package: PackageSettings,
        source_root: PathBuf,
        build_root: PathBuf,
        toolchain_root: PathBuf,
        app_output: PathBuf,
        installer_script: PathBuf,
        layout: BundleLayout,
        library_pattern: Regex,
    ) -> Self {
        Self {
            package,
            source_root,
            build_root,
            toolchain_root,
            app_output,
            installer_script,
            layout,
            library_pattern,
        }
    }
}
