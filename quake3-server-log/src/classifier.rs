//! Classification of Quake 3 server log lines into [Quake3Events].
//!
//! Plain `str::split*()` algorithms are used here, instead of Regular Expressions: all we need is to find
//! a handful of marker tokens and pick some fields by their position -- see `benches/classification_strategies.rs`
//! for the numbers backing this decision.
//!
//! Classification is an ordered decision: the first marker found wins, in the following order:
//!   1) `ClientUserinfoChanged:` anywhere in the line;
//!   2) an `InitGame:` token;
//!   3) a `Kill:` token -- being a "world kill" if a `<world>` token is also present;
//!   4) anything else is [Quake3Events::Ignored].

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use crate::model::Quake3Events;


const PLAYER_INFO_MARKER: &str = "ClientUserinfoChanged:";
const INIT_GAME_MARKER:   &str = "InitGame:";
const KILL_MARKER:        &str = "Kill:";
const WORLD_KILLER:       &str = "<world>";

/// `ClientUserinfoChanged` lines are split in, at most, this number of fields:
/// the last one keeps the whole `key1\val1\key2\val2...` info blob, spaces included
const PLAYER_INFO_FIELDS: usize = 4;


/// Transforms a raw Quake 3 log line into the appropriate [Quake3Events] variant.\
/// The returned event borrows from `log_line`.
pub fn classify_log_line(log_line: &str) -> Result<Quake3Events<'_>, LogParsingError> {
    if log_line.contains(PLAYER_INFO_MARKER) {
        return classify_player_info(log_line)
    }
    let fields: Vec<&str> = log_line.split_whitespace().collect();
    if fields.contains(&INIT_GAME_MARKER) {
        Ok(Quake3Events::InitGame)
    } else if fields.contains(&KILL_MARKER) {
        classify_kill(&fields)
    } else {
        Ok(Quake3Events::Ignored)
    }
}

/// The reasons a log line might not be classifiable
#[derive(Debug, PartialEq, Eq)]
pub enum LogParsingError {
    /// The line was recognized as `event_name`, but lacks enough fields to carry the expected `field_name`
    MissingField { event_name: &'static str, field_name: &'static str },
    /// The player info blob doesn't follow the `n\<name>\...` format
    MissingPlayerName { observed_data: String },
}

impl Display for LogParsingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogParsingError::MissingField { event_name, field_name } => write!(f, "`{event_name}` event is missing the {field_name} field"),
            LogParsingError::MissingPlayerName { observed_data } => write!(f, "player info doesn't appear to be in the form n\\<NAME>\\...: '{observed_data}'"),
        }
    }
}

impl std::error::Error for LogParsingError {}


/// ` 20:34 ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\...`
fn classify_player_info(log_line: &str) -> Result<Quake3Events<'_>, LogParsingError> {
    const EVENT_NAME: &str = "ClientUserinfoChanged";
    let fields = split_fields(log_line, PLAYER_INFO_FIELDS);
    let client_id = field_at(&fields, 2, EVENT_NAME, "client id")?;
    let player_info = field_at(&fields, 3, EVENT_NAME, "player info")?;
    let name = player_info.split('\\').nth(1)
        .ok_or_else(|| LogParsingError::MissingPlayerName { observed_data: player_info.to_string() })?;
    Ok(Quake3Events::ClientUserinfoChanged {
        client_id: Cow::Borrowed(client_id),
        name: Cow::Borrowed(name),
    })
}

/// ` 21:07 Kill: 1022 1 22: <world> killed Player 1 by MOD_TRIGGER_HURT`
fn classify_kill<'a>(fields: &[&'a str]) -> Result<Quake3Events<'a>, LogParsingError> {
    const EVENT_NAME: &str = "Kill";
    let killer_id = field_at(fields, 2, EVENT_NAME, "killer id")?;
    let victim_id = field_at(fields, 3, EVENT_NAME, "victim id")?;
    // the mean of death is the last token, after the ids
    let mean_of_death = fields.last()
        .filter(|_| fields.len() > 4)
        .ok_or(LogParsingError::MissingField { event_name: EVENT_NAME, field_name: "mean of death" })?;
    let victim_id = Cow::Borrowed(victim_id);
    let mean_of_death = Cow::Borrowed(*mean_of_death);
    if fields.contains(&WORLD_KILLER) {
        Ok(Quake3Events::WorldKill { victim_id, mean_of_death })
    } else {
        Ok(Quake3Events::Kill { killer_id: Cow::Borrowed(killer_id), victim_id, mean_of_death })
    }
}

fn field_at<'a>(fields: &[&'a str], index: usize, event_name: &'static str, field_name: &'static str) -> Result<&'a str, LogParsingError> {
    fields.get(index)
        .copied()
        .ok_or(LogParsingError::MissingField { event_name, field_name })
}

/// Splits `text` on whitespace into, at most, `max_fields`:
/// leading whitespace is skipped, consecutive whitespaces count as one and the last field retains the remaining text
fn split_fields(text: &str, max_fields: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(max_fields);
    let mut remaining = text.trim_start();
    while !remaining.is_empty() && max_fields > 0 {
        if fields.len() + 1 == max_fields {
            fields.push(remaining);
            break
        }
        match remaining.split_once(char::is_whitespace) {
            Some((field, rest)) => {
                fields.push(field);
                remaining = rest.trim_start();
            },
            None => {
                fields.push(remaining);
                break
            },
        }
    }
    fields
}
