//! Application identity.

/// Names identifying the application being packaged.
///
/// These come straight from the build system's invocation.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_inno::bundler::PackageSettings;
///
/// let package = PackageSettings {
///     app_name: "rnote".into(),
///     app_name_capitalized: "Rnote".into(),
///     app_id: "com.github.flxzt.rnote".into(),
/// };
/// assert_eq!(package.schema_file_name(), "com.github.flxzt.rnote.gschema.xml");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSettings {
    /// Lower-case application name (e.g. `rnote`).
    ///
    /// Substituted for `{app_name}` in layout paths.
    pub app_name: String,

    /// Display name used by the installer script (e.g. `Rnote`).
    pub app_name_capitalized: String,

    /// Reverse-DNS application id; names the application's schema file.
    pub app_id: String,
}

impl PackageSettings {
    /// File name of the application's own GSettings schema.
    pub fn schema_file_name(&self) -> String {
        format!("{}.gschema.xml", self.app_id)
    }
}
