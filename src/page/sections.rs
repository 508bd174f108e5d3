//! Page sections, top to bottom.

use super::markup::{badge, card, icon, link_button, ButtonSize, ButtonVariant, Target};
use super::{LinkStyle, Page, CONTACT_EMAIL, FOOTER_NOTICE, PROFILE_URL};
use crate::i18n::LanguageStrings;
use crate::skills::SkillCategory;
use maud::{html, Markup};

fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

/// Brand, in-page navigation and the language toggle.
///
/// The toggle addresses the page `page.toggled()` would show.
pub fn header(page: &Page, links: LinkStyle) -> Markup {
    let content = page.content();
    let next = page.toggled().language();

    html! {
        header {
            div.container.header-inner {
                div.brand {
                    (icon("code", "h-6 w-6"))
                    span { "Portfolio" }
                }
                nav {
                    a href="#about" { (content.nav.about) }
                    a href="#skills" { (content.nav.skills) }
                    a href="#contact" { (content.nav.contact) }
                }
                a.btn.btn-outline.btn-sm.toggle
                    href=(links.href_for(next))
                    hreflang=(next.config().html_lang)
                    title=(next.native_name()) {
                    (icon("languages", "h-4 w-4"))
                    span { (page.toggle_label()) }
                }
            }
        }
    }
}

pub fn hero(content: &LanguageStrings) -> Markup {
    let mail = html! {
        (icon("mail", "h-5 w-5"))
        (content.contact.email)
    };

    html! {
        section.hero {
            div.container {
                h1 { (content.hero.title) }
                p.lead.muted { (content.hero.description) }
                div.actions {
                    (link_button(
                        "#skills",
                        ButtonVariant::Default,
                        ButtonSize::Large,
                        Target::SameContext,
                        html! { (content.hero.cta) },
                    ))
                    (link_button(
                        &mailto(),
                        ButtonVariant::Outline,
                        ButtonSize::Large,
                        Target::SameContext,
                        mail,
                    ))
                }
            }
        }
    }
}

pub fn about(content: &LanguageStrings) -> Markup {
    html! {
        section id="about" {
            div.container.narrow {
                h2.section-title { (content.about.title) }
                p.lead.muted { (content.about.description) }
            }
        }
    }
}

/// Badge list of one category. Takes no language: skill names are shared.
pub fn skill_badges(category: SkillCategory) -> Markup {
    html! {
        div.tags {
            @for skill in category.skills() {
                (badge(skill))
            }
        }
    }
}

pub fn skills(content: &LanguageStrings) -> Markup {
    html! {
        section id="skills" {
            div.container {
                h2.section-title { (content.skills.title) }
                div.grid {
                    @for category in SkillCategory::ALL {
                        @let strings = category.strings(content);
                        (card(
                            icon(category.icon(), &format!("h-6 w-6 {}", category.accent())),
                            strings.title,
                            strings.description,
                            skill_badges(category),
                        ))
                    }
                }
            }
        }
    }
}

pub fn contact(content: &LanguageStrings) -> Markup {
    let mail = html! {
        (icon("mail", "h-5 w-5"))
        span { (content.contact.email) }
    };
    let profile = html! {
        (icon("github", "h-5 w-5"))
        span { (content.contact.github) }
    };

    html! {
        section id="contact" {
            div.container.narrow {
                h2.section-title { (content.contact.title) }
                p.lead.muted { (content.contact.description) }
                div.actions {
                    (link_button(
                        &mailto(),
                        ButtonVariant::Default,
                        ButtonSize::Large,
                        Target::SameContext,
                        mail,
                    ))
                    (link_button(
                        PROFILE_URL,
                        ButtonVariant::Outline,
                        ButtonSize::Large,
                        Target::NewContext,
                        profile,
                    ))
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer {
            div.container.footer-inner {
                div.brand {
                    (icon("code", "h-5 w-5"))
                    span.muted { (FOOTER_NOTICE) }
                }
                div.actions {
                    (link_button(
                        PROFILE_URL,
                        ButtonVariant::Ghost,
                        ButtonSize::Small,
                        Target::NewContext,
                        icon("github", "h-4 w-4"),
                    ))
                    (link_button(
                        &mailto(),
                        ButtonVariant::Ghost,
                        ButtonSize::Small,
                        Target::SameContext,
                        icon("mail", "h-4 w-4"),
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, ENGLISH_STRINGS, PORTUGUESE_STRINGS};

    #[test]
    fn test_header_anchors() {
        let html = header(&Page::with_language(Language::English), LinkStyle::Query).into_string();
        assert!(html.contains(r##"<a href="#about">About</a>"##));
        assert!(html.contains(r##"<a href="#skills">Skills</a>"##));
        assert!(html.contains(r##"<a href="#contact">Contact</a>"##));
    }

    #[test]
    fn test_header_toggle_points_to_other_language() {
        let html = header(&Page::new(), LinkStyle::Query).into_string();
        assert!(html.contains(r#"href="/?lang=en" hreflang="en" title="English""#));
        assert!(html.contains("<span>EN</span>"));

        let html = header(&Page::with_language(Language::English), LinkStyle::StaticFiles)
            .into_string();
        assert!(html.contains(r#"href="index.html" hreflang="pt-BR" title="Português""#));
        assert!(html.contains("<span>PT</span>"));
    }

    #[test]
    fn test_header_toggle_follows_toggled_page() {
        for language in Language::ALL {
            let page = Page::with_language(language);
            let next = page.toggled();
            let html = header(&page, LinkStyle::Query).into_string();

            let href = format!(r#"href="{}""#, LinkStyle::Query.href_for(next.language()));
            let hreflang = format!(r#"hreflang="{}""#, next.language().config().html_lang);
            assert!(html.contains(&href));
            assert!(html.contains(&hreflang));
            assert_eq!(page.toggle_label(), next.language().code().to_uppercase());
            assert!(html.contains(&format!("<span>{}</span>", page.toggle_label())));
        }
    }

    #[test]
    fn test_hero_cta_scrolls_to_skills() {
        let html = hero(&PORTUGUESE_STRINGS).into_string();
        assert!(html.contains(r##"href="#skills">Ver Projetos</a>"##));
        assert!(html.contains("mailto:matheusnonatomoreira@gmail.com"));
    }

    #[test]
    fn test_skill_badges_in_order() {
        let html = skill_badges(SkillCategory::Tools).into_string();
        let git = html.find(">Git<").expect("Git badge");
        let webpack = html.find(">Webpack<").expect("Webpack badge");
        assert!(git < webpack);
        assert_eq!(html.matches("class=\"badge").count(), 7);
    }

    #[test]
    fn test_skills_has_one_card_per_category() {
        let html = skills(&ENGLISH_STRINGS).into_string();
        assert_eq!(html.matches(r#"<div class="card">"#).count(), 4);
        assert!(html.contains("Tools &amp; Libraries"));
        assert!(html.contains("text-purple-500"));
    }

    #[test]
    fn test_contact_profile_opens_new_context() {
        let html = contact(&ENGLISH_STRINGS).into_string();
        assert!(html.contains(
            r#"href="https://github.com/mahtewz" target="_blank" rel="noopener noreferrer""#
        ));
        assert!(html.contains("<h2 class=\"section-title\">Let's Talk</h2>"));
    }

    #[test]
    fn test_footer_links() {
        let html = footer().into_string();
        assert!(html.contains(PROFILE_URL));
        assert!(html.contains("mailto:"));
        assert!(html.contains("© 2024 Portfolio. Built with Rust &amp; axum."));
    }
}
