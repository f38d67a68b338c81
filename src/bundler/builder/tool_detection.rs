//! External tool location.
//!
//! MSYS2 tools such as `ldd` and `glib-compile-schemas` usually live in the
//! toolchain rather than on the caller's `PATH`, so the toolchain's own bin
//! directories are searched first.

use std::path::{Path, PathBuf};

/// Resolves `name` to an executable path.
///
/// Names with a directory component are returned unchanged. Otherwise
/// `search_dirs` are tried in order, then `PATH`. When nothing matches the
/// bare name is returned, so spawning reports the failure with the command
/// line attached.
pub fn locate_tool(name: &str, search_dirs: &[PathBuf]) -> PathBuf {
    let as_path = Path::new(name);
    if as_path.components().count() > 1 || as_path.is_absolute() {
        return as_path.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    for dir in search_dirs {
        if let Ok(found) = which::which_in(name, Some(dir), &cwd) {
            log::debug!("Found {} at: {}", name, found.display());
            return found;
        }
    }

    match which::which(name) {
        Ok(found) => {
            log::debug!("Found {} on PATH at: {}", name, found.display());
            found
        }
        Err(e) => {
            log::warn!("{} not found in toolchain or PATH: {}", name, e);
            PathBuf::from(name)
        }
    }
}
