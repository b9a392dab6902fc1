//! Configs that are gathered from the command line -- see [CommandLineOptions]

use structopt::StructOpt;
use strum::VariantNames;
use strum_macros::{Display, EnumString, EnumVariantNames};


/// Where the Quake3 Server log is read from, if `--log-file` is not given
pub const DEFAULT_LOG_FILE: &str = "log/qgames.log";


/// Command-line options
#[derive(Debug,StructOpt)]
#[structopt(about = "
=======================================================================
Reconstructs the Game Matches played on a Quake3 Server from its logs,
reporting kills, player scores & deaths by their means as JSON.
By default, reads from the file at './log/qgames.log'
=======================================================================
")]
pub struct CommandLineOptions {

    // FLAGS
    ////////

    /// Outputs any skipped problems in the log to stderr -- as well as every event read, at the trace level
    #[structopt(long)]
    pub verbose: bool,

    /// Skips malformed log lines & events out of order, instead of stopping at the first of them
    #[structopt(long)]
    pub permissive: bool,


    // OPTIONS
    //////////

    /// Input file with Quake3 Server log messages -- `-` reads them from stdin
    #[structopt(long)]
    pub log_file: Option<String>,

    /// Which reports to output
    #[structopt(long, default_value = "all", possible_values = Reports::VARIANTS)]
    pub reports: Reports,

}

/// The available JSON reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum Reports {
    /// Kills & scores, then deaths by their means
    All,
    /// Kills & scores for each match
    Kills,
    /// Deaths by their means, for each match
    KillsByMeans,
}

impl Reports {

    pub fn includes_kills(&self) -> bool {
        matches!(self, Reports::All | Reports::Kills)
    }

    pub fn includes_kills_by_means(&self) -> bool {
        matches!(self, Reports::All | Reports::KillsByMeans)
    }

}

pub fn parse_from_args() -> CommandLineOptions {
    fill_in_defaults(CommandLineOptions::from_args())
}

fn fill_in_defaults(mut command_line_options: CommandLineOptions) -> CommandLineOptions {
    if command_line_options.log_file.is_none() {
        command_line_options.log_file = Some(DEFAULT_LOG_FILE.to_owned());
    }
    command_line_options
}
