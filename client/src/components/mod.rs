//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared dialog surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod language_switcher;
pub mod sidebar;
pub mod stat_card;
