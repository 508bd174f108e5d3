//! The portfolio page: its single piece of state (the active language),
//! the toggle that flips it, and rendering to a full HTML document.

pub mod markup;
pub mod sections;

use crate::i18n::{Language, LanguageRegistry, LanguageStrings};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use tracing::debug;

/// Address behind every mail link on the page.
pub const CONTACT_EMAIL: &str = "matheusnonatomoreira@gmail.com";

/// External profile, opened in a new browsing context.
pub const PROFILE_URL: &str = "https://github.com/mahtewz";

/// Footer notice; identical in both languages.
pub const FOOTER_NOTICE: &str = "© 2024 Portfolio. Built with Rust & axum.";

/// How the language toggle addresses the other language's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Served by the HTTP server: `/?lang=<code>`
    Query,
    /// Exported files side by side: `index.html`, `en.html`
    StaticFiles,
}

impl LinkStyle {
    /// Link to the page rendered in `language`.
    pub fn href_for(&self, language: Language) -> String {
        match self {
            LinkStyle::Query => format!("/?lang={}", language.code()),
            LinkStyle::StaticFiles => language.config().static_file.to_string(),
        }
    }
}

/// Page component state.
///
/// Owns the active language and is the only thing that mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    language: Language,
}

impl Page {
    /// A freshly loaded page, showing the primary language.
    pub fn new() -> Self {
        Self {
            language: Language::primary(),
        }
    }

    /// A page already showing `language` (e.g. after following a toggle link).
    pub fn with_language(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Flip between the two languages.
    pub fn toggle(&mut self) {
        self.language = self.language.toggled();
        debug!("Language toggled to {}", self.language);
    }

    /// The page a toggle would lead to; `self` is left as it is.
    pub fn toggled(&self) -> Self {
        let mut next = *self;
        next.toggle();
        next
    }

    /// Content bundle of the active language.
    pub fn content(&self) -> &'static LanguageStrings {
        LanguageStrings::for_language(self.language)
    }

    /// Label of the toggle button ("EN" while Portuguese is shown).
    pub fn toggle_label(&self) -> String {
        self.language.toggle_label()
    }

    /// The complete HTML document for the active language.
    ///
    /// Pure: the output depends only on the language and `links`.
    pub fn view(&self, links: LinkStyle) -> Markup {
        let content = self.content();

        html! {
            (DOCTYPE)
            html lang=(self.language.config().html_lang) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "Portfolio | " (content.hero.title) }
                    meta name="description" content=(content.hero.subtitle);
                    @for alternate in LanguageRegistry::get().list_all() {
                        link rel="alternate"
                            hreflang=(alternate.html_lang)
                            href=(links.href_for(alternate.language));
                    }
                    style { (PreEscaped(markup::STYLESHEET)) }
                }
                body {
                    (sections::header(self, links))
                    main {
                        (sections::hero(content))
                        (sections::about(content))
                        (sections::skills(content))
                        (sections::contact(content))
                    }
                    (sections::footer())
                }
            }
        }
    }

    /// [`Page::view`] as a string, for writing to disk.
    pub fn render(&self, links: LinkStyle) -> String {
        self.view(links).into_string()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{ENGLISH_STRINGS, PORTUGUESE_STRINGS};
    use crate::skills::SkillCategory;

    // ==================== State Tests ====================

    #[test]
    fn test_new_page_shows_primary_language() {
        let page = Page::new();
        assert_eq!(page.language(), Language::Portuguese);
        assert_eq!(page.content().hero.title, PORTUGUESE_STRINGS.hero.title);
    }

    #[test]
    fn test_toggle_once_switches_to_secondary() {
        let mut page = Page::new();
        assert_eq!(page.toggle_label(), "EN");

        page.toggle();

        assert_eq!(page.language(), Language::English);
        assert_eq!(page.toggle_label(), "PT");
        assert_eq!(page.content().about.title, ENGLISH_STRINGS.about.title);
    }

    #[test]
    fn test_toggled_leaves_page_unchanged() {
        let page = Page::new();
        let next = page.toggled();
        assert_eq!(page.language(), Language::Portuguese);
        assert_eq!(next.language(), Language::English);
        assert_eq!(next.toggled(), page);
    }

    #[test]
    fn test_toggle_twice_restores_primary() {
        let mut page = Page::new();
        page.toggle();
        page.toggle();
        assert_eq!(page, Page::new());
    }

    // ==================== Link Style Tests ====================

    #[test]
    fn test_query_links() {
        assert_eq!(LinkStyle::Query.href_for(Language::English), "/?lang=en");
        assert_eq!(LinkStyle::Query.href_for(Language::Portuguese), "/?lang=pt");
    }

    #[test]
    fn test_static_links() {
        assert_eq!(LinkStyle::StaticFiles.href_for(Language::Portuguese), "index.html");
        assert_eq!(LinkStyle::StaticFiles.href_for(Language::English), "en.html");
    }

    // ==================== Render Tests ====================

    #[test]
    fn test_render_is_complete_document() {
        let html = Page::new().render(LinkStyle::Query);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="pt-BR">"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_includes_every_field_of_active_bundle() {
        for language in Language::ALL {
            let page = Page::with_language(language);
            let html = page.render(LinkStyle::Query);
            for (path, value) in page.content().fields() {
                assert!(
                    html.contains(&html! { (value) }.into_string()),
                    "{} missing from {} render",
                    path,
                    language
                );
            }
        }
    }

    #[test]
    fn test_primary_render_has_no_english_section_text() {
        let html = Page::new().render(LinkStyle::Query);
        assert!(html.contains("Sobre Mim"));
        assert!(!html.contains("About Me"));
        assert!(!html.contains(ENGLISH_STRINGS.contact.description));
    }

    #[test]
    fn test_skill_badges_identical_across_languages() {
        let pt = Page::with_language(Language::Portuguese).render(LinkStyle::Query);
        let en = Page::with_language(Language::English).render(LinkStyle::Query);

        for category in SkillCategory::ALL {
            let badges = sections::skill_badges(category).into_string();
            assert!(pt.contains(&badges));
            assert!(en.contains(&badges));
        }
        assert_eq!(
            pt.matches("class=\"badge").count(),
            en.matches("class=\"badge").count()
        );
    }

    #[test]
    fn test_contact_links_are_language_independent() {
        for language in Language::ALL {
            let html = Page::with_language(language).render(LinkStyle::StaticFiles);
            assert!(html.contains(r#"href="mailto:matheusnonatomoreira@gmail.com""#));
            assert!(html.contains(
                r#"href="https://github.com/mahtewz" target="_blank" rel="noopener noreferrer""#
            ));
        }
    }

    #[test]
    fn test_render_has_three_section_targets() {
        let html = Page::new().render(LinkStyle::Query);
        assert!(html.contains(r#"<section id="about">"#));
        assert!(html.contains(r#"<section id="skills">"#));
        assert!(html.contains(r#"<section id="contact">"#));
    }

    #[test]
    fn test_render_subtitle_is_meta_description() {
        let html = Page::with_language(Language::English).render(LinkStyle::Query);
        assert!(html.contains(r#"<meta name="description" content="Next.js Specialist">"#));
    }

    #[test]
    fn test_render_toggle_link_uses_html_lang() {
        let html = Page::with_language(Language::English).render(LinkStyle::StaticFiles);
        assert!(html.contains(
            r#"class="btn btn-outline btn-sm toggle" href="index.html" hreflang="pt-BR""#
        ));
    }

    #[test]
    fn test_render_alternate_links() {
        let html = Page::new().render(LinkStyle::StaticFiles);
        assert!(html.contains(r#"hreflang="en" href="en.html""#));
        assert!(html.contains(r#"hreflang="pt-BR" href="index.html""#));
    }
}
