//! Reactive application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is wrapped in an `RwSignal` by `app::App`. Components read
//! and update it; pure transition methods keep the rules testable natively.

pub mod chat;
pub mod ui;
