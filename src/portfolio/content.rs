//! Static page copy. Everything here is fixed at build time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Code,
    Figma,
    Github,
    Linkedin,
    Mail,
    Menu,
    Monitor,
    Moon,
    Sun,
    X,
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub icon: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub icon: Glyph,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub avatar_src: &'static str,
    pub avatar_size: u32,
    pub bio: &'static [&'static str],
    pub copyright_year: u16,
}

impl Profile {
    pub fn greeting(&self) -> String {
        format!("Hello, I'm {}", self.name)
    }

    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_year, self.name
        )
    }
}

pub const PROFILE: Profile = Profile {
    name: "Abdi Koodhaa",
    tagline: "Software Engineer & Graphic Designer",
    avatar_src: "/placeholder.svg",
    avatar_size: 300,
    bio: &[
        "Hello! I'm Abdi Koodhaa, a passionate software engineer and graphic designer with a keen eye for detail and a love for creating beautiful, functional digital experiences.",
        "With years of experience in both fields, I bring a unique perspective to every project, combining technical expertise with creative flair. I specialize in full-stack web development, mobile app design, and creating stunning visual identities for brands.",
        "When I'm not coding or designing, you can find me exploring new technologies, contributing to open-source projects, or sketching ideas for my next big project. I'm always eager to take on new challenges and push the boundaries of what's possible in the digital realm.",
    ],
    copyright_year: 2023,
};

pub const SKILLS: [Skill; 3] = [
    Skill {
        icon: Glyph::Code,
        title: "Software Engineering",
        description: "Proficient in various programming languages and frameworks",
    },
    Skill {
        icon: Glyph::Figma,
        title: "Graphic Design",
        description: "Creating visually appealing designs and user interfaces",
    },
    Skill {
        icon: Glyph::Monitor,
        title: "Web Development",
        description: "Building responsive and interactive web applications",
    },
];

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Project 1",
        description: "A brief description of project 1",
        tags: &["React", "Node.js", "MongoDB"],
    },
    Project {
        title: "Project 2",
        description: "A brief description of project 2",
        tags: &["Python", "Django", "PostgreSQL"],
    },
    Project {
        title: "Project 3",
        description: "A brief description of project 3",
        tags: &["Vue.js", "Express", "MySQL"],
    },
];

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        icon: Glyph::Mail,
        label: "Email",
    },
    ContactLink {
        icon: Glyph::Github,
        label: "GitHub",
    },
    ContactLink {
        icon: Glyph::Linkedin,
        label: "LinkedIn",
    },
];

/// Heading text treatment shared by every section title.
pub const GRADIENT_TEXT: &str =
    "bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-yellow-600";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_copy() {
        assert_eq!(PROFILE.greeting(), "Hello, I'm Abdi Koodhaa");
        assert_eq!(
            PROFILE.copyright(),
            "© 2023 Abdi Koodhaa. All rights reserved."
        );
        assert_eq!(PROFILE.bio.len(), 3);
    }

    #[test]
    fn test_projects_keep_tag_order() {
        assert_eq!(PROJECTS[1].tags, &["Python", "Django", "PostgreSQL"]);
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_skill_icons() {
        let icons: Vec<Glyph> = SKILLS.iter().map(|s| s.icon).collect();
        assert_eq!(icons, vec![Glyph::Code, Glyph::Figma, Glyph::Monitor]);
    }
}
