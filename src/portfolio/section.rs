use std::{fmt, str::FromStr};

use thiserror::Error;

/// Offset from the top of the viewport, in CSS pixels, that decides which
/// section counts as current.
pub const VIEWPORT_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct ParseSectionError(String);

/// Vertical extent of a rendered section, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

impl Section {
    /// Page order. Nav links and the scroll search both walk this.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Nav text: "Home" for the hero, otherwise the id with its first
    /// character uppercased.
    pub fn label(self) -> String {
        if self == Section::Hero {
            return "Home".to_string();
        }
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// First section, in page order, whose bounds straddle the viewport
    /// threshold. `measure` returns `None` for sections that are not mounted;
    /// those are skipped.
    pub fn straddling<F>(measure: F) -> Option<Section>
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        Self::ALL.into_iter().find(|section| {
            measure(*section)
                .map(|bounds| bounds.straddles(VIEWPORT_THRESHOLD))
                .unwrap_or(false)
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}
