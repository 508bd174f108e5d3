//! Markup primitives: the button, badge, card and icon snippets the
//! sections are assembled from. Text passed in is escaped by `maud`.

use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Where a link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    SameContext,
    /// New browsing context, without opener access
    NewContext,
}

/// Decorative icon placeholder; `name` is a lucide icon name.
pub fn icon(name: &str, class: &str) -> Markup {
    html! {
        span class=(format!("icon icon-{} {}", name, class)) aria-hidden="true" {}
    }
}

/// A button-styled anchor wrapping `inner`.
pub fn link_button(
    href: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    target: Target,
    inner: Markup,
) -> Markup {
    let new_context = target == Target::NewContext;

    html! {
        a class=(format!("{} {}", variant.class(), size.class()))
            href=(href)
            target=[new_context.then_some("_blank")]
            rel=[new_context.then_some("noopener noreferrer")] {
            (inner)
        }
    }
}

/// Small labeled tag.
pub fn badge(label: &str) -> Markup {
    html! {
        span.badge.badge-secondary { (label) }
    }
}

/// Card with an icon + title header, a description and a body.
pub fn card(icon: Markup, title: &str, description: &str, body: Markup) -> Markup {
    html! {
        div.card {
            div.card-header {
                div.card-heading {
                    (icon)
                    h3.card-title { (title) }
                }
                p.card-description { (description) }
            }
            div.card-content { (body) }
        }
    }
}

/// Stylesheet embedded in every rendered page.
pub const STYLESHEET: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",sans-serif;color:#0f172a;background:#fff}
a{color:inherit;text-decoration:none}
.container{max-width:1100px;margin:0 auto;padding:0 1rem}
header{position:sticky;top:0;z-index:50;border-bottom:1px solid #e2e8f0;background:rgba(255,255,255,.95)}
.header-inner{display:flex;height:3.5rem;align-items:center;justify-content:space-between}
.brand{display:flex;align-items:center;gap:.5rem;font-weight:700}
nav{display:flex;gap:1.5rem;font-size:.875rem;font-weight:500}
section{padding:4rem 0}
.hero{padding:6rem 0;text-align:center}
.hero h1{font-size:3rem;letter-spacing:-.05em;margin:0}
.muted{color:#64748b}
.lead{max-width:700px;margin:1.5rem auto;font-size:1.125rem}
.actions{display:flex;flex-wrap:wrap;gap:1rem;justify-content:center}
.section-title{text-align:center;font-size:2rem;letter-spacing:-.05em}
.narrow{max-width:48rem;margin:0 auto;text-align:center}
.grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fit,minmax(320px,1fr))}
.btn{display:inline-flex;align-items:center;gap:.5rem;border-radius:.375rem;background:#0f172a;color:#fff;font-weight:500}
.btn-outline{background:#fff;color:#0f172a;border:1px solid #e2e8f0}
.btn-ghost{background:transparent;color:#0f172a}
.btn-sm{padding:.25rem .75rem;font-size:.875rem}
.btn-lg{padding:.625rem 2rem;font-size:1.125rem}
.card{border:1px solid #e2e8f0;border-radius:.5rem;padding:1.5rem;height:100%}
.card-heading{display:flex;align-items:center;gap:.5rem}
.card-title{margin:0;font-size:1.25rem}
.card-description{color:#64748b;font-size:.875rem}
.tags{display:flex;flex-wrap:wrap;gap:.5rem}
.badge{border-radius:9999px;padding:.125rem .625rem;font-size:.875rem;background:#f1f5f9}
.icon{display:inline-block;width:1.25rem;height:1.25rem}
.text-blue-500{color:#3b82f6}.text-green-500{color:#22c55e}.text-purple-500{color:#a855f7}.text-orange-500{color:#f97316}
footer{border-top:1px solid #e2e8f0;padding:2rem 0}
.footer-inner{display:flex;flex-wrap:wrap;justify-content:space-between;align-items:center;gap:1rem}
"#;
