//! `post-install` command: refresh desktop caches after `meson install`.
//!
//! Only runs for a direct install (empty `DESTDIR`). Packagers staging into a
//! `DESTDIR` refresh caches in their own post-install hooks. Each tool is
//! best effort: a failure is reported and the next one still runs.

use crate::{
    bundler::utils::process::ToolCommand,
    cli::{RuntimeConfig, args::PostInstallArgs},
    error::Result,
};
use std::path::Path;

/// Host families with known cache tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    /// Linux desktop
    Linux,
    /// Native Windows or Cygwin/MSYS2
    Windows,
    /// Anything else
    Other(&'static str),
}

impl HostPlatform {
    /// Detects the platform this binary was built for.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "linux" => HostPlatform::Linux,
            "windows" => HostPlatform::Windows,
            other => HostPlatform::Other(other),
        }
    }
}

/// One cache refresh step.
#[derive(Debug)]
pub struct PostInstallStep {
    /// Progress label
    pub label: &'static str,
    /// Tool invocation
    pub command: ToolCommand,
}

/// Cache refresh steps for `platform`, or `None` when unsupported.
pub fn post_install_steps(platform: HostPlatform, data_dir: &Path) -> Option<Vec<PostInstallStep>> {
    let (icon_cache, schemas, desktop, mime) = match platform {
        HostPlatform::Linux => (
            "gtk-update-icon-cache",
            "glib-compile-schemas",
            "update-desktop-database",
            "update-mime-database",
        ),
        HostPlatform::Windows => (
            "gtk-update-icon-cache-3.0.exe",
            "glib-compile-schemas.exe",
            "update-desktop-database.exe",
            "update-mime-database.exe",
        ),
        HostPlatform::Other(_) => return None,
    };

    Some(vec![
        PostInstallStep {
            label: "Updating icon cache...",
            command: ToolCommand::new(icon_cache)
                .arg("-qtf")
                .arg(data_dir.join("icons").join("hicolor")),
        },
        PostInstallStep {
            label: "Compiling new schemas...",
            command: ToolCommand::new(schemas).arg(data_dir.join("glib-2.0").join("schemas")),
        },
        PostInstallStep {
            label: "Updating desktop database...",
            command: ToolCommand::new(desktop).arg(data_dir.join("applications")),
        },
        PostInstallStep {
            label: "Updating MIME-type database...",
            command: ToolCommand::new(mime).arg(data_dir.join("mime")),
        },
    ])
}

/// Runs the cache refresh steps for the current host.
pub async fn run(args: &PostInstallArgs, config: &RuntimeConfig) -> Result<i32> {
    if !args.destdir.is_empty() {
        log::info!("DESTDIR is set ({}), skipping cache updates", args.destdir);
        return Ok(0);
    }

    let data_dir = args.prefix.join("share");
    let platform = HostPlatform::current();

    let Some(steps) = post_install_steps(platform, &data_dir) else {
        config.warn(&format!("post-install does not work on {:?}", platform))?;
        return Ok(0);
    };

    for step in steps {
        config.progress(step.label)?;
        match step.command.output().await.and_then(|out| out.check()) {
            Ok(_) => {}
            Err(e) => config.warn(&e.to_string())?,
        }
    }

    Ok(0)
}
