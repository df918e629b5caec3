//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped lookups and delegates rendering details
//! to `components`.

pub mod home;
pub mod post;
