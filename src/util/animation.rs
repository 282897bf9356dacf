//! Entrance animation timing for staggered card reveals.
//!
//! DESIGN
//! ======
//! Cards mount in their pre-entrance style (faded, offset) and a single
//! reveal signal flips after a short tick so CSS transitions carry them in.
//! Per-card stagger comes from an inline transition-delay computed here, not
//! from per-card timers.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use leptos::prelude::*;

/// How long each entrance transition runs.
pub const ENTRANCE_DURATION_MS: u32 = 500;

/// Extra delay added per card index in the stat grid.
pub const ENTRANCE_STAGGER_MS: u32 = 100;

/// Delay for the quick-actions panel, entering after the four cards.
pub const ACTIONS_ENTRANCE_DELAY_MS: u32 = 400;

/// One rendered frame's worth of wait before flipping the reveal signal,
/// so the pre-entrance style is committed first.
#[cfg(target_arch = "wasm32")]
const ENTRANCE_TICK_MS: u64 = 30;

/// Entrance delay for the card at `index`, saturating for large indexes.
#[must_use]
pub fn entrance_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(ENTRANCE_STAGGER_MS)
}

/// Inline style carrying the entrance duration and a per-item delay.
#[must_use]
pub fn entrance_style(delay_ms: u32) -> String {
    format!("transition-duration: {ENTRANCE_DURATION_MS}ms; transition-delay: {delay_ms}ms;")
}

/// Signal that flips to `true` shortly after mount to trigger CSS entrance
/// transitions. Off-WASM it starts `true`, so rendering degrades to the
/// final static layout.
#[must_use]
pub fn entrance_trigger() -> RwSignal<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        let entered = RwSignal::new(false);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(ENTRANCE_TICK_MS)).await;
            entered.set(true);
        });
        entered
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RwSignal::new(true)
    }
}
