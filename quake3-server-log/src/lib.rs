//! Library for making sense of Quake 3 server log files:
//! classifies each log line into the [model::Quake3Events] relevant for tracking game matches.

pub mod model;
pub mod classifier;
