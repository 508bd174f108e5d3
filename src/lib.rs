//! Bilingual personal portfolio page.
//!
//! The page has one piece of state, the active language, and renders the
//! matching content bundle plus a language-invariant skills table. It can be
//! served over HTTP (`server`) or written out as static files (`export`).

pub mod config;
pub mod export;
pub mod i18n;
pub mod page;
pub mod server;
pub mod skills;

use anyhow::{bail, Result};
use i18n::ContentValidator;
use tracing::{info, warn};

/// Validate the static content tables, logging warnings.
///
/// Fails if any error is found, so a broken page is never served or exported.
pub fn check_content() -> Result<()> {
    let report = ContentValidator::validate_all(page::CONTACT_EMAIL, page::PROFILE_URL);

    for warning in &report.warnings {
        warn!("Content warning: {}", warning);
    }

    if report.has_errors() {
        for error in &report.errors {
            tracing::error!("Content error: {}", error);
        }
        bail!("Content validation failed with {} error(s)", report.errors.len());
    }

    info!("✓ Content validated for {} languages", i18n::Language::ALL.len());
    Ok(())
}
