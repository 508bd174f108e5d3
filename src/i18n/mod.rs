//! Internationalization (i18n) module for the two page languages.
//!
//! # Architecture
//!
//! - `registry`: metadata for Portuguese (primary) and English
//! - `language`: the two-valued `Language` selector and its toggle
//! - `strings`: the static content bundles and content resolution
//! - `validator`: startup checks on the content tables
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio::i18n::{Language, LanguageStrings};
//!
//! let language = Language::primary();
//! let content = LanguageStrings::for_language(language.toggled());
//! assert_eq!(content.nav.about, "About");
//! ```

mod language;
mod registry;
mod strings;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{
    AboutStrings, CategoryStrings, ContactStrings, HeroStrings, LanguageStrings, NavStrings,
    SkillsStrings, ENGLISH_STRINGS, PORTUGUESE_STRINGS,
};
pub use validator::{ContentValidator, ValidationReport};
