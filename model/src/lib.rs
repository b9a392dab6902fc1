//! The business entities shared by all layers: the [game_match::GameMatch]es reconstructed from the Quake 3 server events

pub mod game_match;
pub mod means_of_death;
