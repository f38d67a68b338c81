//! GSettings schema staging and compilation.

use crate::{
    bail,
    bundler::{
        builder::tool_detection::locate_tool,
        error::{Context, ErrorExt, Result},
        settings::Settings,
        utils::{fs, process::ToolCommand},
    },
};
use std::path::PathBuf;

/// Name of the compiled schema blob written by `glib-compile-schemas`.
pub const COMPILED_SCHEMAS: &str = "gschemas.compiled";

/// Collects schema definitions and compiles them into `gschemas.compiled`.
///
/// Copies the toolchain schemas matching the layout's pattern plus the
/// application's `<app_id>.gschema.xml` into a freshly recreated
/// `<build>/gschemas`, then runs the schema compiler on that directory.
///
/// # Returns
///
/// Path to the compiled artifact, verified to be non-empty.
pub async fn compile_schemas(settings: &Settings) -> Result<PathBuf> {
    let gschemas_dir = settings.gschemas_dir();
    fs::create_dir_all(&gschemas_dir, true).await?;

    let layout = settings.layout();
    let root = glob::Pattern::escape(&settings.system_schema_dir().to_string_lossy());
    let pattern = format!("{}/{}", root, layout.schema_pattern);

    let mut staged = 0usize;
    for entry in glob::glob(&pattern)? {
        let src = entry?;
        if src.is_file() {
            fs::copy_into(&src, &gschemas_dir).await?;
            staged += 1;
        }
    }
    log::debug!("Staged {} toolchain schemas from {}", staged, pattern);

    let app_schema = settings
        .app_schema_dir()
        .join(settings.package().schema_file_name());
    fs::copy_into(&app_schema, &gschemas_dir)
        .await
        .context("copying application schema")?;

    let compiler = locate_tool(
        &layout.tools.schema_compiler,
        &layout.tool_dirs(settings.toolchain_root()),
    );
    ToolCommand::new(compiler)
        .arg(&gschemas_dir)
        .run_checked()
        .await
        .context("Compiling schemas failed")?;

    let compiled = gschemas_dir.join(COMPILED_SCHEMAS);
    let metadata = tokio::fs::metadata(&compiled)
        .await
        .fs_context("schema compiler produced no output", &compiled)?;
    if metadata.len() == 0 {
        bail!("schema compiler produced an empty {}", compiled.display());
    }

    log::info!("Compiled {} schemas into {}", staged + 1, compiled.display());
    Ok(compiled)
}
