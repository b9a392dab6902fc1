//! Reports on the game matches found in Quake3 Server log files:
//!
//! =======================================================================
//! Reconstructs the Game Matches played on a Quake3 Server from its logs,
//! reporting kills, player scores & deaths by their means as JSON.
//! By default, reads from the file at './log/qgames.log'
//! =======================================================================
//!
//! USAGE:
//!     quake3-matches [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help          Prints help information
//!         --permissive    Skips malformed log lines & events out of order, instead of stopping at the first of them
//!     -V, --version       Prints version information
//!         --verbose       Outputs any skipped problems in the log to stderr -- as well as every event read, at the trace level
//!
//! OPTIONS:
//!         --log-file <log-file>    Input file with Quake3 Server log messages -- `-` reads them from stdin
//!         --reports <reports>      Which reports to output [default: all]  [possible values: all, kills, kills-by-means]
//!
//!
//! Explore some execution options:
//!  - ./target/debug/quake3-matches --help
//!  - ./target/debug/quake3-matches --log-file '<path_to_quake3_log_file>'                 # both reports, stopping at the first problem in the log
//!  - ./target/debug/quake3-matches --permissive --verbose --log-file '<path_to_log>'      # skips problems, listing them on stderr
//!  - cat '<path_to_quake3_log_file>' | ./target/debug/quake3-matches --log-file - --reports kills-by-means

mod command_line;

use std::io::{BufWriter, Write};
use std::sync::Arc;
use log::{info, LevelFilter};
use common::types::Result;
use command_line::{CommandLineOptions, DEFAULT_LOG_FILE};
use dal_api::Quake3ServerEventsImplementations;

/// Buffer to allow efficient output operations
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

/// `--log-file` value for reading the log from the standard input
const STDIN_LOG_FILE: &str = "-";


fn main() -> Result<()> {

    let command_line_options = command_line::parse_from_args();

    // start the logger
    let log_level = if command_line_options.verbose { LevelFilter::Trace } else { LevelFilter::Warn };
    simple_logger::SimpleLogger::new()
        .with_utc_timestamps()
        .with_level(log_level)
        .init()
        .unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    let (dal_config, logic_config) = configs(&command_line_options);
    let log_file = command_line_options.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE);
    info!("Reading Quake3 Server events from '{log_file}'");

    // the whole log is processed before any output: problems yield no partial reports
    let log_dao = dal::factory::instantiate_log_dao(Arc::new(dal_config), log_file);
    let matches = bll::matches::track_matches(Arc::new(logic_config), log_dao)?;

    let mut writer = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, std::io::stdout().lock());
    if command_line_options.reports.includes_kills() {
        presentation::to_json(&matches, &mut writer)?;
        writeln!(writer)?;
    }
    if command_line_options.reports.includes_kills_by_means() {
        presentation::to_kills_by_means_json(&matches, &mut writer)?;
        writeln!(writer)?;
    }
    writer.flush()
        .map_err(|err| format!("Couldn't flush the reports to stdout: {err}"))?;

    Ok(())
}

/// Builds the configs for each layer out of the `command_line_options`
fn configs(command_line_options: &CommandLineOptions) -> (dal_api::Config, bll::Config) {
    let dal_config = dal_api::Config {
        quake3_server_events_implementation: if command_line_options.log_file.as_deref() == Some(STDIN_LOG_FILE) {
            Quake3ServerEventsImplementations::SyncLogStdinReader
        } else {
            Quake3ServerEventsImplementations::SyncLogFileReader
        },
        debug: command_line_options.verbose,
    };
    let logic_config = bll::Config {
        log_issues: command_line_options.verbose,
        stop_on_feed_errors: !command_line_options.permissive,
        stop_on_event_model_violations: !command_line_options.permissive,
    };
    (dal_config, logic_config)
}
