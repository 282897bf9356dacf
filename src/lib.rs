//! # automator-ui
//!
//! Leptos + WASM frontend for the Email Automator dashboard. A single
//! client-rendered page: sidebar with campaign metrics, top bar, stat card
//! grid, and quick-action buttons.
//!
//! This crate contains the page shell, presentation components, shared UI
//! state, and the static catalog every region renders from. There is no
//! network layer; all displayed figures are literals.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
