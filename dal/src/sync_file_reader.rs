//! Resting place for [Quake3LogFileSyncReader]


use crate::sync_reader::Quake3LogSyncReader;
use common::types::Result;
use quake3_server_log::model::Quake3Events;
use dal_api::{Config, Quake3ServerEvents};
use std::fs::File;
use std::io::BufReader;
use std::pin::Pin;
use std::sync::Arc;
use futures::Stream;


/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;


/// [Quake3ServerEvents] implementation for reading Quake 3 Server events from a log file
pub struct Quake3LogFileSyncReader {
    config: Arc<Config>,
    log_file_path: String,
}

impl Quake3LogFileSyncReader {

    pub fn new(config: Arc<Config>, log_file_path: &str) -> Box<Self> {
        Box::new(Self {
            config,
            log_file_path: log_file_path.into(),
        })
    }

}

impl Quake3ServerEvents for Quake3LogFileSyncReader {

    fn events_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<Quake3Events<'static>>>>>> {
        let file = File::open(&self.log_file_path)
            .map_err(|err| format!("Couldn't open Quake3 Server log file '{}' for reading: {err}", self.log_file_path))?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);
        Quake3LogSyncReader::new(self.config, &self.log_file_path, reader)
            .events_stream()
    }

}
