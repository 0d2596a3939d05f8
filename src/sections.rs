//! Page sections and header navigation.
//!
//! Section anchors are the only addressable locations on the page. They are
//! rendered in [`SectionId::ALL`] order, which is also the order the
//! scroll-spy walks them.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Home,
    AboutMe,
    Skills,
    Education,
    Certifications,
    Projects,
    Contact,
}

impl SectionId {
    /// Document order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::AboutMe,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Certifications,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element id / anchor name.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::AboutMe => "about-me",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Certifications => "certifications",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// `href` used by links to this section. Home links to the page top.
    pub fn href(self) -> String {
        match self {
            SectionId::Home => "#".to_string(),
            other => format!("#{}", other.as_str()),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: SectionId,
}

impl NavLink {
    const fn new(label: &'static str, section: SectionId) -> Self {
        Self { label, section }
    }
}

/// Header links. Certifications sit between Education and Projects on the
/// page but are reached by scrolling rather than a dedicated link.
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink::new("Home", SectionId::Home),
    NavLink::new("About", SectionId::AboutMe),
    NavLink::new("Skills", SectionId::Skills),
    NavLink::new("Education", SectionId::Education),
    NavLink::new("Projects", SectionId::Projects),
    NavLink::new("Contact", SectionId::Contact),
];
