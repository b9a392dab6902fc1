//! Utilities shared by all layers

pub mod types;
