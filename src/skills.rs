//! Static skills table.
//!
//! Skill names are product names and read the same in every language, so
//! this table is shared by both content bundles. Only the card titles and
//! descriptions come from the bundle.

use crate::i18n::{CategoryStrings, LanguageStrings};
use serde::Serialize;

/// A group of skills rendered together as one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

const FRONTEND_SKILLS: &[&str] = &[
    "Next.js",
    "React",
    "TypeScript",
    "JavaScript",
    "Tailwind CSS",
    "CSS3",
    "HTML5",
    "Shadcn/ui",
    "Aceternity UI",
    "Framer Motion",
    "Responsive Design",
];

const BACKEND_SKILLS: &[&str] = &[
    "Node.js",
    "TypeScript",
    "JavaScript",
    "MJS",
    "Next.js API Routes",
    "Fastify",
    "Express.js",
    "RESTful APIs",
    "GraphQL",
    "Server Actions",
];

const DATABASE_SKILLS: &[&str] = &[
    "Prisma ORM",
    "PostgreSQL",
    "MongoDB",
    "MySQL",
    "Database Design",
    "Query Optimization",
    "Migrations",
];

const TOOLS_SKILLS: &[&str] = &["Git", "GitHub", "Vercel", "VS Code", "Figma", "ESLint", "Webpack"];

impl SkillCategory {
    /// All categories in the order their cards appear on the page.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
    ];

    /// Stable key (matches the content bundle section name)
    pub fn key(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
        }
    }

    /// Ordered skill names of this category
    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Frontend => FRONTEND_SKILLS,
            SkillCategory::Backend => BACKEND_SKILLS,
            SkillCategory::Database => DATABASE_SKILLS,
            SkillCategory::Tools => TOOLS_SKILLS,
        }
    }

    /// Icon shown next to the card title
    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "palette",
            SkillCategory::Backend => "server",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "code",
        }
    }

    /// Accent color class of the icon
    pub fn accent(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "text-blue-500",
            SkillCategory::Backend => "text-green-500",
            SkillCategory::Database => "text-purple-500",
            SkillCategory::Tools => "text-orange-500",
        }
    }

    /// Card title and description for this category in a bundle.
    pub fn strings<'a>(&self, content: &'a LanguageStrings) -> &'a CategoryStrings {
        match self {
            SkillCategory::Frontend => &content.skills.frontend,
            SkillCategory::Backend => &content.skills.backend,
            SkillCategory::Database => &content.skills.database,
            SkillCategory::Tools => &content.skills.tools,
        }
    }
}

/// One category with its skills, as exposed by the content API.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: &'static [&'static str],
}

/// The whole table in page order.
pub fn skill_table() -> Vec<SkillGroup> {
    SkillCategory::ALL
        .iter()
        .map(|category| SkillGroup {
            category: *category,
            skills: category.skills(),
        })
        .collect()
}
