use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_sidebar_open() {
    let state = UiState::default();
    assert!(state.sidebar_open);
}

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_width_matches_constant() {
    let state = UiState::default();
    assert_eq!(state.sidebar_width_px(), SIDEBAR_WIDTH_PX);
    assert_eq!(state.sidebar_width_px(), 280.0);
}

// =============================================================
// Sidebar toggle
// =============================================================

#[test]
fn toggle_sidebar_collapses_width_to_zero() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    assert_eq!(state.sidebar_width_px(), 0.0);
}

#[test]
fn toggle_sidebar_twice_round_trips() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    state.toggle_sidebar();
    assert_eq!(state, UiState::default());
    assert_eq!(state.sidebar_width_px(), 280.0);
}

// =============================================================
// Dark mode toggle
// =============================================================

#[test]
fn toggle_dark_mode_flips_flag() {
    let mut state = UiState::default();
    state.toggle_dark_mode();
    assert!(state.dark_mode);
}

#[test]
fn toggle_dark_mode_twice_restores_default() {
    let mut state = UiState::default();
    state.toggle_dark_mode();
    state.toggle_dark_mode();
    assert!(!state.dark_mode);
}

#[test]
fn toggles_are_independent() {
    let mut state = UiState::default();
    state.toggle_dark_mode();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.dark_mode);
}
