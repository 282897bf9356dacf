//! Inline SVG glyph catalog.
//!
//! DESIGN
//! ======
//! Glyphs are hand-drawn 20x20 stroke outlines so the page has no icon-font
//! or asset fetch to fail; a missing glyph cannot break layout, the worst
//! case is an empty badge.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

/// Named glyphs used across the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Mail,
    Users,
    FileText,
    BarChart2,
    Plus,
    Upload,
    PenTool,
    Menu,
    Moon,
    Sun,
}

impl Glyph {
    pub const ALL: [Glyph; 10] = [
        Glyph::Mail,
        Glyph::Users,
        Glyph::FileText,
        Glyph::BarChart2,
        Glyph::Plus,
        Glyph::Upload,
        Glyph::PenTool,
        Glyph::Menu,
        Glyph::Moon,
        Glyph::Sun,
    ];

    /// Accessible name for the glyph.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Glyph::Mail => "Mail",
            Glyph::Users => "Users",
            Glyph::FileText => "Document",
            Glyph::BarChart2 => "Bar chart",
            Glyph::Plus => "Plus",
            Glyph::Upload => "Upload",
            Glyph::PenTool => "Pen",
            Glyph::Menu => "Menu",
            Glyph::Moon => "Moon",
            Glyph::Sun => "Sun",
        }
    }
}

/// Render a glyph as an inline `<svg>` sized by the surrounding class.
pub fn render_glyph(glyph: Glyph) -> impl IntoView {
    match glyph {
        Glyph::Mail => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="4" width="16" height="12" rx="2" />
                <polyline points="2.5,6 10,11.5 17.5,6" />
            </svg>
        }
        .into_any(),
        Glyph::Users => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="7" cy="7.5" r="3" />
                <path d="M2 17 C2 13.8 4.2 12 7 12 C9.8 12 12 13.8 12 17" />
                <path d="M13 4.8 C14.4 5.2 15.4 6.5 15.4 7.9 C15.4 9.3 14.4 10.6 13 11" />
                <path d="M14.5 12.4 C16.6 13.1 18 14.9 18 17" />
            </svg>
        }
        .into_any(),
        Glyph::FileText => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M5 2 H12 L15.5 5.5 V18 H5 Z" />
                <polyline points="12,2 12,5.5 15.5,5.5" />
                <line x1="7.5" y1="9" x2="13" y2="9" />
                <line x1="7.5" y1="12" x2="13" y2="12" />
                <line x1="7.5" y1="15" x2="11" y2="15" />
            </svg>
        }
        .into_any(),
        Glyph::BarChart2 => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="5" y1="17" x2="5" y2="10" />
                <line x1="10" y1="17" x2="10" y2="3" />
                <line x1="15" y1="17" x2="15" y2="7" />
            </svg>
        }
        .into_any(),
        Glyph::Plus => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="10" y1="4" x2="10" y2="16" />
                <line x1="4" y1="10" x2="16" y2="10" />
            </svg>
        }
        .into_any(),
        Glyph::Upload => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <polyline points="6,7 10,3 14,7" />
                <line x1="10" y1="3" x2="10" y2="13" />
                <path d="M3 13 V16 C3 16.6 3.4 17 4 17 H16 C16.6 17 17 16.6 17 16 V13" />
            </svg>
        }
        .into_any(),
        Glyph::PenTool => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10.5 4.5 L15.5 9.5 L9 16 L3 17 L4 11 Z" />
                <line x1="13" y1="7" x2="16.5" y2="3.5" />
                <circle cx="9.2" cy="10.8" r="1.2" />
            </svg>
        }
        .into_any(),
        Glyph::Menu => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="5" x2="17" y2="5" />
                <line x1="3" y1="10" x2="17" y2="10" />
                <line x1="3" y1="15" x2="17" y2="15" />
            </svg>
        }
        .into_any(),
        Glyph::Moon => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M16.5 11.8 A6.8 6.8 0 1 1 8.2 3.5 A5.4 5.4 0 0 0 16.5 11.8 Z" />
            </svg>
        }
        .into_any(),
        Glyph::Sun => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="3.5" />
                <line x1="10" y1="2" x2="10" y2="4" />
                <line x1="10" y1="16" x2="10" y2="18" />
                <line x1="2" y1="10" x2="4" y2="10" />
                <line x1="16" y1="10" x2="18" y2="10" />
                <line x1="4.3" y1="4.3" x2="5.8" y2="5.8" />
                <line x1="14.2" y1="14.2" x2="15.7" y2="15.7" />
                <line x1="4.3" y1="15.7" x2="5.8" y2="14.2" />
                <line x1="14.2" y1="5.8" x2="15.7" y2="4.3" />
            </svg>
        }
        .into_any(),
    }
}
