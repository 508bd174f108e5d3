use crate::i18n::Language;
use serde::Serialize;

/// All localized display strings for one language.
///
/// Strings are stored raw and unescaped. The renderer escapes them for HTML
/// when it writes them into the page.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageStrings {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub skills: SkillsStrings,
    pub contact: ContactStrings,
}

/// Header navigation labels (anchors to the page sections)
#[derive(Debug, Clone, Serialize)]
pub struct NavStrings {
    pub about: &'static str,
    pub skills: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroStrings {
    pub title: &'static str,
    /// Not shown in the hero itself; used as the page meta description
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Call-to-action button label
    pub cta: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutStrings {
    pub title: &'static str,
    pub description: &'static str,
}

/// Title and blurb of one skills card
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStrings {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsStrings {
    pub title: &'static str,
    pub frontend: CategoryStrings,
    pub backend: CategoryStrings,
    pub database: CategoryStrings,
    pub tools: CategoryStrings,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactStrings {
    pub title: &'static str,
    pub description: &'static str,
    /// Label of the mail button
    pub email: &'static str,
    /// Label of the profile button
    pub github: &'static str,
}

impl LanguageStrings {
    /// Resolve the content bundle for a language.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language {
            Language::Portuguese => &PORTUGUESE_STRINGS,
            Language::English => &ENGLISH_STRINGS,
        }
    }

    /// Every field as a `(path, value)` pair, e.g. `("hero.title", "...")`.
    ///
    /// Used by the validator; keep in sync when adding fields.
    pub fn fields(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("nav.about", self.nav.about),
            ("nav.skills", self.nav.skills),
            ("nav.contact", self.nav.contact),
            ("hero.title", self.hero.title),
            ("hero.subtitle", self.hero.subtitle),
            ("hero.description", self.hero.description),
            ("hero.cta", self.hero.cta),
            ("about.title", self.about.title),
            ("about.description", self.about.description),
            ("skills.title", self.skills.title),
            ("skills.frontend.title", self.skills.frontend.title),
            ("skills.frontend.description", self.skills.frontend.description),
            ("skills.backend.title", self.skills.backend.title),
            ("skills.backend.description", self.skills.backend.description),
            ("skills.database.title", self.skills.database.title),
            ("skills.database.description", self.skills.database.description),
            ("skills.tools.title", self.skills.tools.title),
            ("skills.tools.description", self.skills.tools.description),
            ("contact.title", self.contact.title),
            ("contact.description", self.contact.description),
            ("contact.email", self.contact.email),
            ("contact.github", self.contact.github),
        ]
    }
}

// ==================== Portuguese Strings ====================

/// Portuguese language strings (primary)
pub const PORTUGUESE_STRINGS: LanguageStrings = LanguageStrings {
    nav: NavStrings {
        about: "Sobre",
        skills: "Habilidades",
        contact: "Contato",
    },
    hero: HeroStrings {
        title: "Desenvolvedor Full-Stack",
        subtitle: "Especialista em Next.js",
        description: "Criando experiências web modernas e escaláveis com as mais recentes \
tecnologias. Apaixonado por código limpo e soluções inovadoras.",
        cta: "Ver Projetos",
    },
    about: AboutStrings {
        title: "Sobre Mim",
        description: "Sou um desenvolvedor full-stack apaixonado por tecnologia, com foco em \
criar aplicações web modernas e performáticas. Tenho experiência tanto no front-end quanto no \
back-end, sempre buscando as melhores práticas e tecnologias mais atuais do mercado.",
    },
    skills: SkillsStrings {
        title: "Habilidades Técnicas",
        frontend: CategoryStrings {
            title: "Front-end",
            description: "Tecnologias para criar interfaces modernas e responsivas",
        },
        backend: CategoryStrings {
            title: "Back-end",
            description: "Desenvolvimento de APIs e sistemas robustos",
        },
        database: CategoryStrings {
            title: "Banco de Dados",
            description: "Gerenciamento e modelagem de dados",
        },
        tools: CategoryStrings {
            title: "Ferramentas & Bibliotecas",
            description: "Frameworks e bibliotecas para desenvolvimento eficiente",
        },
    },
    contact: ContactStrings {
        title: "Vamos Conversar",
        description: "Interessado em trabalhar juntos? Entre em contato!",
        email: "Enviar Email",
        github: "Ver GitHub",
    },
};

// ==================== English Strings ====================

/// English language strings
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    nav: NavStrings {
        about: "About",
        skills: "Skills",
        contact: "Contact",
    },
    hero: HeroStrings {
        title: "Full-Stack Developer",
        subtitle: "Next.js Specialist",
        description: "Building modern and scalable web experiences with cutting-edge \
technologies. Passionate about clean code and innovative solutions.",
        cta: "View Projects",
    },
    about: AboutStrings {
        title: "About Me",
        description: "I'm a full-stack developer passionate about technology, focused on \
creating modern and performant web applications. I have experience in both front-end and \
back-end development, always seeking best practices and the latest market technologies.",
    },
    skills: SkillsStrings {
        title: "Technical Skills",
        frontend: CategoryStrings {
            title: "Front-end",
            description: "Technologies for creating modern and responsive interfaces",
        },
        backend: CategoryStrings {
            title: "Back-end",
            description: "API development and robust systems",
        },
        database: CategoryStrings {
            title: "Database",
            description: "Data management and modeling",
        },
        tools: CategoryStrings {
            title: "Tools & Libraries",
            description: "Frameworks and libraries for efficient development",
        },
    },
    contact: ContactStrings {
        title: "Let's Talk",
        description: "Interested in working together? Get in touch!",
        email: "Send Email",
        github: "View GitHub",
    },
};
