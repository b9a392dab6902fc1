//! Contains the types shared across the layers' boundaries

use std::result;


/// The `Result` crossing the layers: errors are boxed, as each layer has its own error types -- and most get enriched with context along the way
pub type Result<T> = result::Result<T, Box<dyn std::error::Error>>;
