//! Business Logic Layer: reconstructs the [model::game_match::GameMatch]es out of a feed of Quake 3 server events

mod config;
pub use config::*;

pub mod tracker;
pub mod matches;
