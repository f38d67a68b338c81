//! Builder for constructing Settings.

use super::{BundleLayout, PackageSettings, Settings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_inno::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_inno::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_root("C:/src/rnote")
///     .build_root("C:/src/rnote/_mesonbuild")
///     .toolchain_root("C:/msys64")
///     .package_settings(PackageSettings {
///         app_name: "rnote".into(),
///         app_name_capitalized: "Rnote".into(),
///         app_id: "com.github.flxzt.rnote".into(),
///     })
///     .app_output("rnote.exe")
///     .installer_script("C:/src/rnote/_mesonbuild/rnote.iss")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    package_settings: Option<PackageSettings>,
    source_root: Option<PathBuf>,
    build_root: Option<PathBuf>,
    toolchain_root: Option<PathBuf>,
    app_output: Option<PathBuf>,
    installer_script: Option<PathBuf>,
    layout: BundleLayout,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the application identity. Required.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the source root.
    ///
    /// Default: the build root
    pub fn source_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build root. Required.
    pub fn build_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.build_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the toolchain (MSYS2) root. Required.
    pub fn toolchain_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.toolchain_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the application binary, relative to the build root. Required.
    pub fn app_output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.app_output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the installer script. Required.
    pub fn installer_script<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.installer_script = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the layout.
    ///
    /// Default: [`BundleLayout::default`]
    pub fn layout(mut self, layout: BundleLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the layout's
    /// library pattern is not a valid regex.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let build_root = self.build_root.context("build_root is required")?;
        let library_pattern = regex::Regex::new(&self.layout.library_pattern)?;

        Ok(Settings::new(
            self.package_settings
                .context("package_settings is required")?,
            self.source_root.unwrap_or_else(|| build_root.clone()),
            build_root,
            self.toolchain_root.context("toolchain_root is required")?,
            self.app_output.context("app_output is required")?,
            self.installer_script
                .context("installer_script is required")?,
            self.layout,
            library_pattern,
        ))
    }
}
