//! Resting place for DAL's [Config] & friends

/// Configuration for the DAL crate
pub struct Config {

    /// The implementation to use when getting a Data Access Object (DAO) instance
    pub quake3_server_events_implementation: Quake3ServerEventsImplementations,

    /// If true, `log::trace!`s every event yielded by the DAO
    pub debug: bool,

}

/// The available sources of Quake 3 server events
#[derive(Debug, PartialEq, Eq)]
pub enum Quake3ServerEventsImplementations {
    /// Reads the log lines from a file
    SyncLogFileReader,
    /// Reads the log lines from the standard input
    SyncLogStdinReader,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quake3_server_events_implementation: Quake3ServerEventsImplementations::SyncLogFileReader,
            debug: false,
        }
    }
}
