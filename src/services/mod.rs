//! Background services.

pub mod scoreboard;
