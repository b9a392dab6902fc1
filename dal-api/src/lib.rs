//! API for the Data Access Layer: feeds of Quake 3 server events

mod config;
pub use config::*;

use common::types::Result;
use quake3_server_log::model::Quake3Events;
use std::pin::Pin;
use futures::Stream;


/// Feed for Quake 3 server events
pub trait Quake3ServerEvents {

    /// Consumes this object, returning a `Stream` which yields Quake 3 server events -- one per log line, in the log order.\
    /// Errors on reading or classifying a line are yielded as the `Stream` items, allowing the consumer to decide whether to go on or to stop.
    fn events_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<Quake3Events<'static>>>>>>;
}
