//! Top navigation bar hosting the sidebar menu button.

use leptos::prelude::*;

use crate::components::icon::{Glyph, render_glyph};
use crate::state::ui::UiState;

/// Fixed-height bar above the content area. Its only control flips the
/// sidebar open/closed.
#[component]
pub fn TopBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_menu = move |_| {
        ui.update(|u| u.toggle_sidebar());
    };

    view! {
        <nav class="top-bar">
            <button class="top-bar__menu" on:click=on_menu title="Toggle sidebar">
                {render_glyph(Glyph::Menu)}
            </button>
        </nav>
    }
}
