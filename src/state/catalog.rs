//! Static display catalog: navigation rows, stat cards, quick actions.
//!
//! DESIGN
//! ======
//! Every figure on the page is a literal in these tables. Components render
//! the slices in order and nothing mutates them after mount, so the sidebar
//! and the stat grid stay in lockstep by construction.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::components::icon::Glyph;

/// Accent color for card badges and action buttons, keyed to a BEM
/// modifier slug in the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Pink,
    Blue,
    Green,
    Purple,
    Indigo,
}

impl Tone {
    /// Stylesheet modifier slug, e.g. `pink` in `stat-card__icon--pink`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Tone::Pink => "pink",
            Tone::Blue => "blue",
            Tone::Green => "green",
            Tone::Purple => "purple",
            Tone::Indigo => "indigo",
        }
    }
}

/// One sidebar navigation row.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub name: &'static str,
    pub glyph: Glyph,
    pub count: &'static str,
}

/// One stat card in the main grid.
#[derive(Clone, Copy, Debug)]
pub struct StatCard {
    pub name: &'static str,
    pub stat: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

/// One quick-action button.
#[derive(Clone, Copy, Debug)]
pub struct ActionButton {
    pub name: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Total Campaigns", glyph: Glyph::BarChart2, count: "12" },
    NavItem { name: "Active Contacts", glyph: Glyph::Users, count: "2,100" },
    NavItem { name: "Emails Sent", glyph: Glyph::Mail, count: "24,550" },
    NavItem { name: "Templates", glyph: Glyph::FileText, count: "15" },
];

pub const STAT_CARDS: &[StatCard] = &[
    StatCard { name: "Total Campaigns", stat: "12", glyph: Glyph::BarChart2, tone: Tone::Pink },
    StatCard { name: "Active Contacts", stat: "2,100", glyph: Glyph::Users, tone: Tone::Blue },
    StatCard { name: "Emails Sent", stat: "24,550", glyph: Glyph::Mail, tone: Tone::Green },
    StatCard { name: "Templates", stat: "15", glyph: Glyph::FileText, tone: Tone::Purple },
];

// None of these flows exist yet; the buttons render without handlers.
pub const QUICK_ACTIONS: &[ActionButton] = &[
    ActionButton { name: "New Campaign", glyph: Glyph::Plus, tone: Tone::Indigo },
    ActionButton { name: "Import Contacts", glyph: Glyph::Upload, tone: Tone::Green },
    ActionButton { name: "Create Template", glyph: Glyph::PenTool, tone: Tone::Purple },
];
