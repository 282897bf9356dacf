//! Root application component providing the shared UI state context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the page's two transient flags and arranges the sidebar
//! and main column; the main column's left offset tracks the sidebar width
//! so the layout shifts as one unit.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::quick_actions::QuickActions;
use crate::components::sidebar::Sidebar;
use crate::components::stat_grid::StatGrid;
use crate::components::top_bar::TopBar;
use crate::state::ui::UiState;

/// Root dashboard component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Title text="Email Automator" />

        <div class="shell">
            <Sidebar />
            <div
                class="shell__main"
                style:margin-left=move || format!("{}px", ui.get().sidebar_width_px())
            >
                <TopBar />
                <main class="shell__content">
                    <StatGrid />
                    <QuickActions />
                </main>
            </div>
        </div>
    }
}
