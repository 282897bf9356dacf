//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate timing and environment concerns from component
//! logic to improve reuse and testability.

pub mod animation;
