//! Language registry: single source of truth for the two page languages.
//!
//! The registry holds the metadata the renderer needs about each language
//! (codes, display names, the value of the `<html lang>` attribute and the
//! file name used by the static export). It is built once behind a
//! `OnceLock` and never changes afterwards.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Metadata for one page language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// Short code used in URLs and on the toggle button (e.g., "pt", "en")
    pub code: &'static str,

    /// Native name of the language (e.g., "Português")
    pub native_name: &'static str,

    /// Value of the `lang` attribute on the rendered `<html>` element
    pub html_lang: &'static str,

    /// File name of this language's page in a static export
    pub static_file: &'static str,

    /// Whether this is the language shown on first load (exactly one)
    pub is_primary: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is exact: codes are lowercase and no trimming is applied.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration of a known language.
    pub fn config_for(&self, language: Language) -> &LanguageConfig {
        // Every `Language` variant has an entry in `default_languages`;
        // the registry tests pin that down.
        match self.languages.iter().find(|lang| lang.language == language) {
            Some(config) => config,
            None => unreachable!("language {:?} missing from registry", language),
        }
    }

    /// Get all languages in display order (primary first).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the primary language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one primary language
    /// (a programming error in `default_languages`).
    pub fn primary(&self) -> &LanguageConfig {
        let primary: Vec<_> = self.languages.iter().filter(|l| l.is_primary).collect();

        match primary.len() {
            0 => panic!("No primary language found in registry"),
            1 => primary[0],
            _ => panic!("Multiple primary languages found in registry"),
        }
    }
}

/// Portuguese is the primary language, English the secondary.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::Portuguese,
            code: "pt",
            native_name: "Português",
            html_lang: "pt-BR",
            static_file: "index.html",
            is_primary: true,
        },
        LanguageConfig {
            language: Language::English,
            code: "en",
            native_name: "English",
            html_lang: "en",
            static_file: "en.html",
            is_primary: false,
        },
    ]
}
