//! Mobile navigation menu.

use crate::sections::{NavLink, SectionId};

/// Where a navigation click scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Smooth-scroll to the very top of the page.
    Top,
    /// Smooth-scroll the section into view.
    Section(SectionId),
}

impl ScrollTarget {
    pub fn for_section(section: SectionId) -> Self {
        match section {
            SectionId::Home => ScrollTarget::Top,
            other => ScrollTarget::Section(other),
        }
    }
}

/// Open/closed state of the collapsed header menu. Toggling is never
/// blocked, so a press mid-transition simply reverses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Follow a navigation link: the menu closes whether it was open or not.
    pub fn select(&mut self, link: &NavLink) -> ScrollTarget {
        self.open = false;
        ScrollTarget::for_section(link.section)
    }
}
