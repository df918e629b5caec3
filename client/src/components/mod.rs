//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, post content and the chat widget while
//! reading/writing shared state from Leptos context providers.

pub mod blog_card;
pub mod chat_widget;
pub mod nav_bar;
pub mod post_article;
