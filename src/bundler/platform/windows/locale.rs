//! Translation catalog staging.
//!
//! The application's compiled catalogs are copied wholesale, then each locale
//! gets whichever toolchain catalogs (GLib, GTK, libadwaita) exist for it.
//! A toolchain catalog missing for some language is normal and skipped.

use crate::bundler::{
    error::{Context, ErrorExt, Result},
    settings::Settings,
    utils::fs,
};

/// One staged locale and the toolchain catalogs merged into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedLocale {
    /// Language directory name (e.g. `de`, `pt_BR`).
    pub lang: String,
    /// Toolchain catalogs that were present and copied.
    pub system_catalogs: Vec<String>,
}

/// Recreates `<build>/locale` from the application catalogs and merges in
/// the toolchain catalogs.
pub async fn stage_locale(settings: &Settings) -> Result<Vec<StagedLocale>> {
    let locale_dir = settings.locale_dir();
    let app_locale_dir = settings.app_locale_dir();

    fs::remove_dir_all(&locale_dir).await?;
    fs::copy_dir(&app_locale_dir, &locale_dir)
        .await
        .context("copying application locale")?;

    let mut staged = Vec::new();
    for lang in locale_subdirs(&app_locale_dir).await? {
        let messages_dir = locale_dir.join(&lang).join("LC_MESSAGES");
        fs::create_dir_all(&messages_dir, false).await?;

        let system_dir = settings.system_messages_dir(&lang);
        let mut system_catalogs = Vec::new();
        for catalog in &settings.layout().locale_catalogs {
            if fs::copy_file_if_exists(&system_dir.join(catalog), &messages_dir).await? {
                system_catalogs.push(catalog.clone());
            } else {
                log::debug!("No {} for locale {}, skipping", catalog, lang);
            }
        }

        staged.push(StagedLocale {
            lang,
            system_catalogs,
        });
    }

    log::info!("Staged {} locales into {}", staged.len(), locale_dir.display());
    Ok(staged)
}

/// Sorted names of the directories directly under `dir`.
async fn locale_subdirs(dir: &std::path::Path) -> Result<Vec<String>> {
    let mut langs = Vec::new();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .fs_context("reading locale directory", dir)?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading locale directory", dir)?
    {
        if entry.path().is_dir() {
            langs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    langs.sort();
    Ok(langs)
}
