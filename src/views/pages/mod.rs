//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives already-shaped records from its route handler and
//! delegates rendering details to `components`.

pub mod about;
pub mod home;
pub mod match_detail;
pub mod news;
pub mod not_found;
pub mod player;
pub mod schedule;
pub mod standings;
pub mod teams;
