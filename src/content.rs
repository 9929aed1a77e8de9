//! Static portfolio content. Everything here is defined once and never mutated.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    React,
    JavaScript,
    NextJs,
    MongoDb,
    Jest,
    GraphQl,
    TypeScript,
    GitHub,
    ExternalLink,
    Rocket,
    Code,
    Mail,
    LinkedIn,
    Briefcase,
    GraduationCap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::React => "⚛",
            Self::JavaScript => "JS",
            Self::NextJs => "N",
            Self::MongoDb => "🍃",
            Self::Jest => "🃏",
            Self::GraphQl => "◈",
            Self::TypeScript => "TS",
            Self::GitHub => "GH",
            Self::ExternalLink => "↗",
            Self::Rocket => "🚀",
            Self::Code => "</>",
            Self::Mail => "✉",
            Self::LinkedIn => "in",
            Self::Briefcase => "💼",
            Self::GraduationCap => "🎓",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::React => "icon icon-react",
            Self::JavaScript => "icon icon-javascript",
            Self::NextJs => "icon icon-nextjs",
            Self::MongoDb => "icon icon-mongodb",
            Self::Jest => "icon icon-jest",
            Self::GraphQl => "icon icon-graphql",
            Self::TypeScript => "icon icon-typescript",
            Self::GitHub => "icon icon-github",
            Self::ExternalLink => "icon icon-external",
            Self::Rocket => "icon icon-rocket",
            Self::Code => "icon icon-code",
            Self::Mail => "icon icon-mail",
            Self::LinkedIn => "icon icon-linkedin",
            Self::Briefcase => "icon icon-briefcase",
            Self::GraduationCap => "icon icon-graduation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechItem {
    pub icon: Icon,
    pub name: &'static str,
}

const fn tech(icon: Icon, name: &'static str) -> TechItem {
    TechItem { icon, name }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
    pub github_link: Option<&'static str>,
    pub tech_stack: &'static [TechItem],
}

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Online Bank account opening system",
        description: "Developed an Online Bank Account Opening system that enables customers to initiate E-Onboarding by completing forms that gather personal information. ",
        link: None,
        github_link: None,
        tech_stack: &[
            tech(Icon::React, "React"),
            tech(Icon::JavaScript, "JavaScript"),
            tech(Icon::JavaScript, "REST API"),
            tech(Icon::Jest, "RTL Jest"),
        ],
    },
    ProjectRecord {
        title: "Property-pulse",
        description: "A Next.js web application that allows users to search for properties, view property details, and save their favorite listings. It uses MongoDB cloud database for data storage and Next.js for server-side rendering.",
        link: Some("https://property-pulse-tau-dusky.vercel.app/"),
        github_link: None,
        tech_stack: &[
            tech(Icon::React, "React"),
            tech(Icon::NextJs, "Next.js"),
            tech(Icon::MongoDb, "MongoDB"),
        ],
    },
    ProjectRecord {
        title: "Joint ownership on credit card",
        description: "Developed a joint credit card ownership application enabling primary and secondary owners to complete registration processes through forms capturing essential and relative information.",
        link: None,
        github_link: None,
        tech_stack: &[
            tech(Icon::React, "React"),
            tech(Icon::JavaScript, "JavaScript"),
            tech(Icon::TypeScript, "TypeScript"),
            tech(Icon::Jest, "RTL Jest"),
            tech(Icon::GraphQl, "GraphQL API"),
        ],
    },
];

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub photo_src: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Unnati Moralwar",
    headline: "Welcome to My Portfolio",
    intro: "I'm Unnati Moralwar, a React Developer passionate about creating modern web applications.",
    photo_src: "my_profile.jpeg",
};

pub struct AboutCard {
    pub title: &'static str,
    pub desc: &'static str,
}

pub static ABOUT_CARDS: [AboutCard; 3] = [
    AboutCard {
        title: "React Enthusiast",
        desc: "I am passionate about React and its ecosystem, constantly exploring new libraries and tools to enhance my development process.",
    },
    AboutCard {
        title: "Full Stack Developer",
        desc: "With over 2.5 years of experience, I specialize in creating robust and scalable web applications using the MERN stack.",
    },
    AboutCard {
        title: "Frontend Developer",
        desc: "I have a strong focus on frontend development, ensuring that applications are not only functional but also visually appealing.",
    },
];

pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    role: "React Developer",
    organization: "Banking onboarding platform",
    period: "2.5+ years",
    highlights: &[
        "Built customer E-Onboarding forms for online bank account opening.",
        "Delivered joint credit card ownership registration flows backed by GraphQL.",
        "Covered form logic with React Testing Library and Jest.",
    ],
}];

pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [TechItem],
}

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        items: &[
            tech(Icon::React, "React"),
            tech(Icon::NextJs, "Next.js"),
            tech(Icon::JavaScript, "JavaScript"),
            tech(Icon::TypeScript, "TypeScript"),
        ],
    },
    SkillGroup {
        title: "Backend & Data",
        items: &[
            tech(Icon::MongoDb, "MongoDB"),
            tech(Icon::GraphQl, "GraphQL"),
            tech(Icon::JavaScript, "REST API"),
        ],
    },
    SkillGroup {
        title: "Testing",
        items: &[tech(Icon::Jest, "RTL Jest")],
    },
];

pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub detail: &'static str,
}

pub static EDUCATION: &[EducationEntry] = &[EducationEntry {
    degree: "Bachelor's degree in Computer Engineering",
    institution: "University",
    detail: "Coursework in data structures, web technologies and software engineering.",
}];

pub struct ContactLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: Icon::Mail,
        label: "Email",
        href: "mailto:unnati.moralwar@example.com",
    },
    ContactLink {
        icon: Icon::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/",
    },
    ContactLink {
        icon: Icon::GitHub,
        label: "GitHub",
        href: "https://github.com/",
    },
];

/// In-page sections in render order, as `(anchor id, nav label)`.
pub static SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("experience", "Experience"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("education", "Education"),
    ("contact", "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn project_links_are_absolute_http_urls() {
        for project in PROJECTS {
            for link in [project.link, project.github_link].into_iter().flatten() {
                let parsed = Url::parse(link).expect("project link should parse");
                assert!(matches!(parsed.scheme(), "http" | "https"), "{link}");
            }
        }
    }

    #[test]
    fn projects_keep_declared_order() {
        let titles: Vec<_> = PROJECTS.iter().map(|project| project.title).collect();
        assert_eq!(
            titles,
            [
                "Online Bank account opening system",
                "Property-pulse",
                "Joint ownership on credit card"
            ]
        );
        assert_eq!(PROJECTS[2].tech_stack.len(), 5);
    }

    #[test]
    fn contact_links_use_known_schemes() {
        for contact in CONTACT_LINKS {
            let parsed = Url::parse(contact.href).expect("contact link should parse");
            assert!(matches!(parsed.scheme(), "https" | "mailto"));
        }
    }

    #[test]
    fn photo_path_stays_relative() {
        assert!(Url::parse(PROFILE.photo_src).is_err());
        assert_eq!(SECTIONS[3].0, "projects");
    }
}
