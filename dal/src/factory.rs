//! Factory for obtaining one of the implementations of our DAO objects

use std::sync::Arc;
use dal_api::{Config, Quake3ServerEvents, Quake3ServerEventsImplementations};
use crate::{
    sync_file_reader::Quake3LogFileSyncReader,
    stdin_reader::Quake3LogStdinReader,
};

/// Instantiates a Data Access Object (dao) able to work on the contents of `log_locator`,
/// pointing to a Quake3 server log file, from which a [Quake3ServerEvents] is returned.\
/// `log_locator` is ignored by the implementations that don't need it (such as the stdin reader).
pub fn instantiate_log_dao(config: Arc<Config>, log_locator: &str) -> Box<dyn Quake3ServerEvents> {
    match config.quake3_server_events_implementation {
        Quake3ServerEventsImplementations::SyncLogFileReader  => Quake3LogFileSyncReader::new(config, log_locator),
        Quake3ServerEventsImplementations::SyncLogStdinReader => Quake3LogStdinReader::new(config),
    }
}
