//! Stat card grid with staggered entrance and hover lift.
//!
//! DESIGN
//! ======
//! One reveal signal drives all four cards; each card's stagger is an inline
//! transition-delay on its reveal wrapper, while the hover/press scale lives
//! on the card itself so it is not delayed by the entrance timing.

use leptos::prelude::*;

use crate::components::icon::render_glyph;
use crate::state::catalog::{STAT_CARDS, StatCard};
use crate::util::animation::{entrance_delay_ms, entrance_style, entrance_trigger};

/// Four-card grid of campaign figures. Values never change after mount.
#[component]
pub fn StatGrid() -> impl IntoView {
    let entered = entrance_trigger();

    view! {
        <div class="stat-grid">
            {STAT_CARDS
                .iter()
                .enumerate()
                .map(|(index, card)| render_card(index, card, entered))
                .collect::<Vec<_>>()}
        </div>
    }
}

fn render_card(index: usize, card: &StatCard, entered: RwSignal<bool>) -> impl IntoView {
    let card = *card;
    let style = entrance_style(entrance_delay_ms(index));

    view! {
        <div class="reveal" class:reveal--in=move || entered.get() style=style>
            <div class="stat-card">
                <span class=format!("stat-card__icon stat-card__icon--{}", card.tone.slug())>
                    {render_glyph(card.glyph)}
                </span>
                <span class="stat-card__body">
                    <span class="stat-card__name">{card.name}</span>
                    <span class="stat-card__figure">{card.stat}</span>
                </span>
            </div>
        </div>
    }
}
