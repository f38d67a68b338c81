//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs the staging
//! phases in order and stops at the first failure.

use crate::{
    bail,
    bundler::{
        BundleReport, InstallerArtifact, Result, Settings,
        error::ErrorExt,
        platform::windows::{dlls, gschemas, inno, locale},
    },
};
use std::path::{Path, PathBuf};

use super::checksum::calculate_sha256;

/// Main bundler orchestrator.
///
/// Runs the four phases strictly in sequence:
///
/// 1. DLL collection into `<build>/dlls`
/// 2. Schema compilation into `<build>/gschemas`
/// 3. Locale staging into `<build>/locale`
/// 4. Installer compilation with `iscc`
///
/// Every phase recreates its staging directory first. A failing phase aborts
/// the run; directories staged by earlier phases are left in place.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_inno::bundler::{Bundler, Settings};
///
/// # async fn example(settings: Settings) -> kodegen_bundler_inno::bundler::Result<()> {
/// let report = Bundler::new(settings).run().await?;
/// println!("Staged {} DLLs", report.dlls.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    stage_only: bool,
    expected_installer: Option<PathBuf>,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            stage_only: false,
            expected_installer: None,
        }
    }

    /// Stops after locale staging, without running the installer compiler.
    pub fn stage_only(mut self, stage_only: bool) -> Self {
        self.stage_only = stage_only;
        self
    }

    /// Verifies after compilation that the installer exists at `path`.
    pub fn expect_installer(mut self, path: Option<PathBuf>) -> Self {
        self.expected_installer = path;
        self
    }

    /// Runs every phase.
    pub async fn run(&self) -> Result<BundleReport> {
        log::info!("Collecting DLLs...");
        let dlls = dlls::collect_dlls(&self.settings).await?;

        log::info!("Collecting and compiling GSchemas...");
        let compiled_schemas = gschemas::compile_schemas(&self.settings).await?;

        log::info!("Collecting locale...");
        let locales = locale::stage_locale(&self.settings).await?;

        let installer = if self.stage_only {
            log::info!("Skipping ISCC (stage only)");
            None
        } else {
            log::info!("Running ISCC...");
            inno::build_installer(&self.settings).await?;

            match &self.expected_installer {
                Some(path) => Some(verify_installer(path).await?),
                None => None,
            }
        };

        Ok(BundleReport {
            dlls,
            compiled_schemas,
            locales,
            installer,
        })
    }
}

/// Checks that the installer compiler produced `path` and fingerprints it.
async fn verify_installer(path: &Path) -> Result<InstallerArtifact> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            bail!(
                "installer compiler succeeded but {} was not created",
                path.display()
            );
        }
        Err(e) => return Err(e).fs_context("reading installer metadata", path),
    };

    if !metadata.is_file() || metadata.len() == 0 {
        bail!("installer {} is empty or not a file", path.display());
    }

    let checksum = calculate_sha256(path).await?;
    log::info!(
        "✓ Created installer: {} ({} bytes, sha256 {})",
        path.display(),
        metadata.len(),
        checksum
    );

    Ok(InstallerArtifact {
        path: path.to_path_buf(),
        size: metadata.len(),
        checksum,
    })
}
