mod content;
mod section;
mod state;

pub use content::{
    ContactLink, Glyph, Profile, Project, Skill, CONTACT_LINKS, GRADIENT_TEXT, PROFILE, PROJECTS,
    SKILLS,
};
pub use section::{ParseSectionError, Section, SectionBounds, VIEWPORT_THRESHOLD};
pub use state::{CardHover, ViewState};
