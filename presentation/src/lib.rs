//! Small crate to be a central point for presentation requisites.
//!
//! Renders the reconstructed [GameMatch]es as the JSON reports:
//!   - [to_json()]: `[{"game_1": {"total_kills": ..., "players": [...], "kills": {...}}}, ...]`
//!   - [to_kills_by_means_json()]: `[{"game-1": {"kills_by_means": {...}}}, ...]`
//!
//! Both are pretty-printed with 2 spaces of indentation. No matches render as `[]`.

pub mod dtos;

use std::collections::BTreeMap;
use std::io::Write;
use log::debug;
use serde::Serialize;
use model::game_match::GameMatch;
use dtos::{KillsByMeansReport, KillsReport};


/// Writes the kills & scores report for `matches` to `writer`
pub fn to_json(matches: &[GameMatch], writer: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let report: Vec<_> = matches.iter()
        .enumerate()
        .map(|(index, game_match)| keyed(format!("game_{}", index+1), KillsReport::from(game_match)))
        .collect();
    write_pretty("to_json", &report, writer)
}

/// Writes the deaths-by-means report for `matches` to `writer`
pub fn to_kills_by_means_json(matches: &[GameMatch], writer: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let report: Vec<_> = matches.iter()
        .enumerate()
        .map(|(index, game_match)| keyed(format!("game-{}", index+1), KillsByMeansReport::from(game_match)))
        .collect();
    write_pretty("to_kills_by_means_json", &report, writer)
}

/// A single-entry JSON object
fn keyed<T>(key: String, value: T) -> BTreeMap<String, T> {
    BTreeMap::from([(key, value)])
}

fn write_pretty<T: Serialize>(report_name: &str, report: &[T], mut writer: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    debug!("presentation: {report_name}(): rendering {} matches", report.len());
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|err| format!("presentation: {report_name}(): Error writing the report to the given `writer`: {err}"))?;
    Ok(())
}
