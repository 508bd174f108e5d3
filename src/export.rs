//! Static export: one HTML file per language, for a plain static host.

use crate::i18n::Language;
use crate::page::{LinkStyle, Page};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render both languages into `dir` (created if missing).
///
/// Returns the written paths, primary language first. Existing files with
/// the same names are overwritten.
pub fn export_site(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(Language::ALL.len());
    for language in Language::ALL {
        let path = dir.join(language.config().static_file);
        let html = Page::with_language(language).render(LinkStyle::StaticFiles);

        fs::write(&path, &html)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("✓ Exported {} ({} bytes)", path.display(), html.len());
        written.push(path);
    }

    Ok(written)
}
