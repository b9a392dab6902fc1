//! Resting place for [Quake3LogSyncReader]


use common::types::Result;
use quake3_server_log::{
    model::Quake3Events,
    classifier::classify_log_line,
};
use dal_api::{Config, Quake3ServerEvents};
use std::io::BufRead;
use std::pin::Pin;
use std::sync::Arc;
use futures::{Stream, stream, StreamExt};
use log::trace;


/// [Quake3ServerEvents] implementation for reading Quake 3 Server events from any line-oriented `Reader`
pub struct Quake3LogSyncReader<Reader: BufRead> {
    config: Arc<Config>,
    source_name: String,
    reader: Reader,
}

impl<Reader: BufRead> Quake3LogSyncReader<Reader> {

    /// `source_name` is used to contextualize error messages
    pub fn new(config: Arc<Config>, source_name: &str, reader: Reader) -> Box<Self> {
        Box::new(Self {
            config,
            source_name: source_name.into(),
            reader,
        })
    }

}

impl<Reader: BufRead + 'static> Quake3ServerEvents for Quake3LogSyncReader<Reader> {

    fn events_stream(self: Box<Self>) -> Result<Pin<Box<dyn Stream<Item=Result<Quake3Events<'static>>>>>> {
        let Self { config, source_name, reader } = *self;
        let stream = stream::iter(reader.lines().enumerate())
            .map(move |(line_index, line_result)| -> Result<Quake3Events<'static>> {
                let line_number = line_index + 1;
                let line = line_result
                    .map_err(|read_err| format!("IO read error when processing log file '{source_name}' at line {line_number}: {read_err}"))?;
                let event = classify_log_line(&line)
                    .map_err(|log_parsing_err| format!("`LogParsingError` when processing log file '{source_name}' at line {line_number}: {log_parsing_err}"))?;
                Ok(event.into_owned())
            });
        let stream: Pin<Box<dyn Stream<Item=Result<Quake3Events<'static>>>>> = if config.debug {
            Box::pin(stream
                .inspect(|yielded_event| trace!("{yielded_event:?}")))
        } else {
            Box::pin(stream)
        };
        Ok(stream)
    }

}
