//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading/writing shared state
//! from Leptos context providers.

pub mod icon;
pub mod quick_actions;
pub mod sidebar;
pub mod stat_grid;
pub mod top_bar;
