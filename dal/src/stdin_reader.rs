//! Resting place for [Quake3LogStdinReader]

use crate::sync_reader::Quake3LogSyncReader;
use common::types::Result;
use quake3_server_log::model::Quake3Events;
use dal_api::{Config, Quake3ServerEvents};
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;


/// How the standard input is referred to in error messages
pub const STDIN_SOURCE_NAME: &str = "<stdin>";


/// [Quake3ServerEvents] implementation for reading Quake 3 Server events piped through the standard input.\
/// Stdin is locked for the whole life of the `Stream`, using its own internal buffer.
pub struct Quake3LogStdinReader {
    config: Arc<Config>,
}

impl Quake3LogStdinReader {

    pub fn new(config: Arc<Config>) -> Box<Self> {
        Box::new(Self { config })
    }

}

impl Quake3ServerEvents for Quake3LogStdinReader {

    fn events_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<Quake3Events<'static>>>>>> {
        Quake3LogSyncReader::new(self.config, STDIN_SOURCE_NAME, std::io::stdin().lock())
            .events_stream()
    }

}
