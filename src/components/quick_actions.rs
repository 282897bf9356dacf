//! Quick-action button row.
//!
//! DESIGN
//! ======
//! The campaign, import, and template flows these buttons advertise are not
//! built, so no click handlers are attached; the buttons give hover/press
//! feedback only.

use leptos::prelude::*;

use crate::components::icon::render_glyph;
use crate::state::catalog::{ActionButton, QUICK_ACTIONS};
use crate::util::animation::{ACTIONS_ENTRANCE_DELAY_MS, entrance_style, entrance_trigger};

/// Panel of three tone-colored action buttons, entering after the stat
/// cards.
#[component]
pub fn QuickActions() -> impl IntoView {
    let entered = entrance_trigger();
    let style = entrance_style(ACTIONS_ENTRANCE_DELAY_MS);

    view! {
        <div class="reveal" class:reveal--in=move || entered.get() style=style>
            <section class="actions">
                <h3 class="actions__title">"Quick Actions"</h3>
                <div class="actions__grid">
                    {QUICK_ACTIONS.iter().map(render_action).collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}

fn render_action(action: &ActionButton) -> impl IntoView {
    let action = *action;
    view! {
        <button class=format!("actions__btn actions__btn--{}", action.tone.slug())>
            <span class="actions__btn-icon">{render_glyph(action.glyph)}</span>
            {action.name}
        </button>
    }
}
