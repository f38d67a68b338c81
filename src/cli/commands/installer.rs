//! `installer` command: stage the payload and compile the installer.

use crate::{
    bundler::{BundleLayout, BundleReport, Bundler, PackageSettings, SettingsBuilder},
    cli::{RuntimeConfig, args::InstallerArgs},
    error::Result,
};

/// Runs the full installer pipeline.
pub async fn run(args: &InstallerArgs, config: &RuntimeConfig) -> Result<i32> {
    print_invocation(args, config)?;

    let layout = match &args.layout {
        Some(path) => {
            log::debug!("Loading layout from {}", path.display());
            BundleLayout::load(path)?
        }
        None => BundleLayout::default(),
    };

    let settings = SettingsBuilder::new()
        .source_root(&args.source_root)
        .build_root(&args.build_root)
        .toolchain_root(&args.toolchain_root)
        .package_settings(PackageSettings {
            app_name: args.app_name.clone(),
            app_name_capitalized: args.app_name_capitalized.clone(),
            app_id: args.app_id.clone(),
        })
        .app_output(&args.app_output)
        .installer_script(&args.installer_script)
        .layout(layout)
        .build()?;

    let report = Bundler::new(settings)
        .stage_only(args.stage_only)
        .expect_installer(args.expect_installer.clone())
        .run()
        .await?;

    print_summary(&report, config)?;
    Ok(0)
}

fn print_invocation(args: &InstallerArgs, config: &RuntimeConfig) -> std::io::Result<()> {
    config.section("executing Inno-Setup installer build with arguments:")?;
    config.indent(&format!("source_root: {}", args.source_root.display()))?;
    config.indent(&format!("build_root: {}", args.build_root.display()))?;
    config.indent(&format!("toolchain_root: {}", args.toolchain_root.display()))?;
    config.indent(&format!("app_name: {}", args.app_name))?;
    config.indent(&format!("app_name_capitalized: {}", args.app_name_capitalized))?;
    config.indent(&format!("app_id: {}", args.app_id))?;
    config.indent(&format!("app_output: {}", args.app_output.display()))?;
    config.indent(&format!("installer_script: {}", args.installer_script.display()))?;
    if let Some(layout) = &args.layout {
        config.indent(&format!("layout: {}", layout.display()))?;
    }
    Ok(())
}

fn print_summary(report: &BundleReport, config: &RuntimeConfig) -> std::io::Result<()> {
    config.success(&format!("Staged {} DLLs", report.dlls.len()))?;
    config.success(&format!(
        "Compiled schemas: {}",
        report.compiled_schemas.display()
    ))?;
    config.success(&format!("Staged {} locales", report.locales.len()))?;
    for locale in &report.locales {
        config.output().verbose(&format!(
            "    {}: {}",
            locale.lang,
            if locale.system_catalogs.is_empty() {
                "no toolchain catalogs".to_string()
            } else {
                locale.system_catalogs.join(", ")
            }
        ))?;
    }
    if let Some(installer) = &report.installer {
        config.success(&format!(
            "Installer: {} ({} bytes, sha256 {})",
            installer.path.display(),
            installer.size,
            installer.checksum
        ))?;
    }
    Ok(())
}
