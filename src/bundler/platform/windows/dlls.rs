//! DLL dependency discovery for MinGW builds.
//!
//! Runs the dependency inspector (`ldd` from MSYS2) against the application
//! binary and every gdk-pixbuf loader plugin, keeps the toolchain DLLs it
//! reports and stages them into `<build>/dlls`, one copy per file name.

use crate::bundler::{
    builder::tool_detection::locate_tool,
    error::{Context, Error, Result},
    settings::Settings,
    utils::{fs, process::ToolCommand},
};
use regex::Regex;
use std::{
    collections::BTreeMap,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Staged DLLs keyed by file name.
///
/// The first path seen for a name wins; later binaries reporting the same
/// DLL from another location do not overwrite it.
#[derive(Debug, Default)]
pub struct DependencyClosure {
    by_name: BTreeMap<OsString, PathBuf>,
}

impl DependencyClosure {
    /// Records `path`. Returns `false` if its file name was already present.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_os_string()) else {
            return false;
        };
        if self.by_name.contains_key(&name) {
            return false;
        }
        self.by_name.insert(name, path);
        true
    }

    /// Number of distinct DLLs.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Source paths, ordered by file name.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.by_name.values().map(PathBuf::as_path)
    }
}

/// Bundles the DLL closure of the application and its loader plugins.
///
/// # Process
///
/// 1. Recreate `<build>/dlls` empty
/// 2. Inspect the application binary
/// 3. Inspect every loader plugin matched by the layout's glob
/// 4. Copy each newly seen DLL into the staging directory
///
/// Any inspector failure or copy failure aborts the run.
///
/// # Returns
///
/// Staged DLL paths, ordered by file name.
pub async fn collect_dlls(settings: &Settings) -> Result<Vec<PathBuf>> {
    let dlls_dir = settings.dlls_dir();
    fs::create_dir_all(&dlls_dir, true).await?;

    let layout = settings.layout();
    let inspector = locate_tool(
        &layout.tools.dependency_inspector,
        &layout.tool_dirs(settings.toolchain_root()),
    );

    let mut closure = DependencyClosure::default();

    let app_binary = settings.app_binary_path();
    stage_dependencies_of(&inspector, &app_binary, settings, &dlls_dir, &mut closure)
        .await
        .context("Collecting app DLLs failed")?;

    for loader in find_loader_plugins(settings)? {
        stage_dependencies_of(&inspector, &loader, settings, &dlls_dir, &mut closure)
            .await
            .with_context(|| {
                format!("Collecting pixbuf-loader ({}) DLLs failed", loader.display())
            })?;
    }

    log::info!("Bundled {} unique DLLs into {}", closure.len(), dlls_dir.display());

    Ok(closure
        .paths()
        .filter_map(|p| p.file_name())
        .map(|name| dlls_dir.join(name))
        .collect())
}

async fn stage_dependencies_of(
    inspector: &Path,
    binary: &Path,
    settings: &Settings,
    dlls_dir: &Path,
    closure: &mut DependencyClosure,
) -> Result<()> {
    log::debug!("Discovering DLL dependencies for {}", binary.display());

    let output = ToolCommand::new(inspector)
        .arg(binary)
        .run_checked()
        .await?;

    for reported in parse_dependency_listing(&output.stdout, settings.library_pattern()) {
        let source = resolve_reported_path(&reported, settings.toolchain_root()).ok_or_else(
            || {
                Error::GenericError(format!(
                    "{} depends on {}, which was not found under {}",
                    binary.display(),
                    reported,
                    settings.toolchain_root().display()
                ))
            },
        )?;

        if closure.insert(source.clone()) {
            log::debug!("  - {}", source.display());
            fs::copy_into(&source, dlls_dir).await?;
        }
    }

    Ok(())
}

/// Extracts every toolchain library path from an inspector listing.
pub fn parse_dependency_listing(listing: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .find_iter(listing)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Maps a path reported by the inspector to a file on disk.
///
/// MSYS2 reports paths rooted at the installation (`/mingw64/bin/x.dll`), so
/// the path is first tried relative to the toolchain root and then as
/// written.
pub fn resolve_reported_path(reported: &str, toolchain_root: &Path) -> Option<PathBuf> {
    let under_root = toolchain_root.join(reported.trim_start_matches(['/', '\\']));
    if under_root.is_file() {
        return Some(under_root);
    }

    let as_written = PathBuf::from(reported);
    as_written.is_file().then_some(as_written)
}

/// Lists the loader plugins whose dependencies are bundled as well.
pub fn find_loader_plugins(settings: &Settings) -> Result<Vec<PathBuf>> {
    let root = glob::Pattern::escape(&settings.toolchain_root().to_string_lossy());
    let pattern = format!("{}/{}", root, settings.layout().loader_plugins);

    let mut plugins = Vec::new();
    for entry in glob::glob(&pattern)? {
        plugins.push(entry?);
    }
    plugins.sort();

    log::debug!("Found {} loader plugins matching {}", plugins.len(), pattern);
    Ok(plugins)
}
