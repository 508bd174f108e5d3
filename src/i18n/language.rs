//! Language type: the two-valued selector between content bundles.
//!
//! The page only ever speaks Portuguese (primary) or English (secondary), so
//! the language is a closed enum. Metadata such as codes and display names
//! lives in the registry; this type only knows which entry it is.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};

/// One of the two page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Primary language, shown on first load
    Portuguese,
    /// Secondary language
    English,
}

impl Language {
    /// Both languages, primary first.
    pub const ALL: [Language; 2] = [Language::Portuguese, Language::English];

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` for "pt" or "en"
    /// * `Err` for any other code
    ///
    /// # Example
    /// ```ignore
    /// let english = Language::from_code("en")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(config.language),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language shown on first load.
    pub fn primary() -> Language {
        LanguageRegistry::get().primary().language
    }

    /// The other language.
    pub fn toggled(self) -> Language {
        match self {
            Language::Portuguese => Language::English,
            Language::English => Language::Portuguese,
        }
    }

    /// Short language code (e.g., "pt", "en").
    pub fn code(&self) -> &'static str {
        self.config().code
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config_for(*self)
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Label shown on the toggle button: the *other* language's code in
    /// upper case ("EN" while Portuguese is active).
    pub fn toggle_label(&self) -> String {
        self.toggled().code().to_uppercase()
    }

    /// Check if this is the primary language.
    pub fn is_primary(&self) -> bool {
        self.config().is_primary
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::primary()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_portuguese() {
        let language = Language::from_code("pt").expect("Should succeed");
        assert_eq!(language, Language::Portuguese);
        assert_eq!(language.code(), "pt");
    }

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::English);
        assert_eq!(language.code(), "en");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("es");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_primary_is_portuguese() {
        assert_eq!(Language::primary(), Language::Portuguese);
        assert_eq!(Language::default(), Language::Portuguese);
        assert!(Language::Portuguese.is_primary());
        assert!(!Language::English.is_primary());
    }

    #[test]
    fn test_toggled_flips() {
        assert_eq!(Language::Portuguese.toggled(), Language::English);
        assert_eq!(Language::English.toggled(), Language::Portuguese);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        for language in Language::ALL {
            assert_eq!(language.toggled().toggled(), language);
        }
    }

    #[test]
    fn test_toggle_label_names_other_language() {
        assert_eq!(Language::Portuguese.toggle_label(), "EN");
        assert_eq!(Language::English.toggle_label(), "PT");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Portuguese.to_string(), "pt");
        assert_eq!(Language::English.to_string(), "en");
    }

    #[test]
    fn test_serialize_as_code() {
        let json = serde_json::to_string(&Language::English).expect("serialize");
        assert_eq!(json, "\"en\"");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::Portuguese.native_name(), "Português");
        assert_eq!(Language::English.native_name(), "English");
    }
}
