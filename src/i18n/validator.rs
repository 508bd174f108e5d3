//! Content validation module.
//!
//! Checks the static content tables before the page is ever served: every
//! bundle field must be filled in, display strings must be plain text (the
//! renderer escapes them, so embedded markup would show up literally), and
//! the contact links must be well formed.

use crate::i18n::{Language, LanguageStrings};
use crate::skills::{skill_table, SkillGroup};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the page wrong (missing text, broken links)
    pub errors: Vec<String>,

    /// Suspicious content that still renders
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the page content tables.
pub struct ContentValidator;

static MARKUP_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PROFILE_URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl ContentValidator {
    /// Validate everything the page renders: both bundles, the skills table
    /// and the contact links.
    pub fn validate_all(email: &str, profile_url: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        for language in Language::ALL {
            report.merge(Self::validate_bundle(
                language.code(),
                LanguageStrings::for_language(language),
            ));
        }
        report.merge(Self::validate_skills(&skill_table()));
        report.merge(Self::validate_links(email, profile_url));

        report
    }

    /// Validate a single content bundle.
    ///
    /// * empty (or whitespace-only) field → error
    /// * HTML tag inside a field → warning
    /// * leading/trailing whitespace → warning
    pub fn validate_bundle(label: &str, strings: &LanguageStrings) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (path, value) in strings.fields() {
            if value.trim().is_empty() {
                report.errors.push(format!("[{}] {} is empty", label, path));
                continue;
            }

            if Self::contains_markup(value) {
                report.warnings.push(format!(
                    "[{}] {} contains markup that will be shown escaped",
                    label, path
                ));
            }

            if value.trim() != value {
                report.warnings.push(format!(
                    "[{}] {} has leading or trailing whitespace",
                    label, path
                ));
            }
        }

        report
    }

    /// Validate a skills table: no empty categories or names, no
    /// duplicates inside a category.
    pub fn validate_skills(groups: &[SkillGroup]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for group in groups {
            let (category, skills) = (group.category, group.skills);
            if skills.is_empty() {
                report
                    .errors
                    .push(format!("Skill category '{}' is empty", category.key()));
            }

            for (index, skill) in skills.iter().enumerate() {
                if skill.trim().is_empty() {
                    report.errors.push(format!(
                        "Skill #{} in '{}' is empty",
                        index,
                        category.key()
                    ));
                } else if skills[..index].contains(skill) {
                    report.warnings.push(format!(
                        "Skill '{}' listed twice in '{}'",
                        skill,
                        category.key()
                    ));
                }
            }
        }

        report
    }

    /// Validate the mail address and the external profile URL.
    pub fn validate_links(email: &str, profile_url: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let email_regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
        });
        if !email_regex.is_match(email) {
            report
                .errors
                .push(format!("Contact email '{}' is not a valid address", email));
        }

        let url_regex =
            PROFILE_URL_REGEX.get_or_init(|| Regex::new(r"^https://[^\s/]+(/[^\s]*)?$").unwrap());
        if !url_regex.is_match(profile_url) {
            report.errors.push(format!(
                "Profile URL '{}' is not an absolute https URL",
                profile_url
            ));
        }

        report
    }

    fn contains_markup(text: &str) -> bool {
        let regex = MARKUP_REGEX.get_or_init(|| Regex::new(r"</?[a-zA-Z][^>]*>").unwrap());
        regex.is_match(text)
    }
}
