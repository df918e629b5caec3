//! Networking for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the endpoint's wire schema and `api` performs the POST.

pub mod api;
pub mod types;
