//! Sidebar with brand mark, metric navigation rows, and the theme toggle.
//!
//! DESIGN
//! ======
//! Rows come from the shared catalog so the sidebar always mirrors the stat
//! grid. Rows are hover-only affordances: no navigation is wired up, and the
//! hover offset lives entirely in the stylesheet.

use leptos::prelude::*;

use crate::components::icon::{Glyph, render_glyph};
use crate::state::catalog::{NAV_ITEMS, NavItem};
use crate::state::ui::UiState;

/// Collapsible sidebar. Width animates between the fixed open width and
/// zero; content overflow is clipped while closed.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <aside
            class="sidebar"
            class:sidebar--closed=move || !ui.get().sidebar_open
            style:width=move || format!("{}px", ui.get().sidebar_width_px())
        >
            <div class="sidebar__inner">
                <div class="sidebar__brand">
                    <span class="sidebar__brand-mark">{render_glyph(Glyph::Mail)}</span>
                    <span class="sidebar__brand-name">"Email Automator"</span>
                </div>

                <nav class="sidebar__nav">
                    {NAV_ITEMS.iter().map(render_nav_row).collect::<Vec<_>>()}
                </nav>

                <div class="sidebar__footer">
                    <ThemeToggle />
                </div>
            </div>
        </aside>
    }
}

fn render_nav_row(item: &NavItem) -> impl IntoView {
    let item = *item;
    view! {
        <a class="sidebar__item">
            <span class="sidebar__item-icon">{render_glyph(item.glyph)}</span>
            <span class="sidebar__item-body">
                <span class="sidebar__item-name">{item.name}</span>
                <span class="sidebar__item-count">{item.count}</span>
            </span>
        </a>
    }
}

/// Theme toggle button. Flips the dark-mode flag and swaps the moon/sun
/// glyph; no stylesheet swap is wired to the flag yet.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        ui.update(|u| u.toggle_dark_mode());
    };

    view! {
        <button class="sidebar__theme-toggle" on:click=on_toggle title="Toggle theme">
            <span class="sidebar__theme-icon">
                {move || render_glyph(if ui.get().dark_mode { Glyph::Sun } else { Glyph::Moon })}
            </span>
            <span>"Toggle Theme"</span>
        </button>
    }
}
