//! Resting place for [MatchTracker], the state machine that applies the scoring rules to each event

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::mem;
use log::debug;
use model::game_match::{GameMatch, Player, PlayerHandle};
use quake3_server_log::model::Quake3Events;


/// Consumes [Quake3Events], in the log order, to reconstruct the [GameMatch]es.\
/// States:
///   - No active match: the initial state -- only `InitGame` (or ignored events) are acceptable here;
///   - Active match: holds the match being built and its roster, mapping client ids to the match's players.
///
/// Rules:
///   - `InitGame` finishes the active match, if any, and starts a new one -- with a fresh roster;
///   - `ClientUserinfoChanged` adds the player to the match, if the client id is new to the roster -- or renames it, otherwise;
///   - every `Kill` counts for the match's kills & deaths by its mean. Scores are: +1 for the killer -- unless it was a suicide --
///     and -1 for the victim of the `<world>`.
#[derive(Debug, Default)]
pub struct MatchTracker {
    finished_matches: Vec<GameMatch>,
    active_match: Option<ActiveMatch>,
}

#[derive(Debug, Default)]
struct ActiveMatch {
    game_match: GameMatch,
    roster: HashMap<String, PlayerHandle>,
}

impl ActiveMatch {

    fn resolve(&self, client_id: &str, event_name: &'static str) -> Result<PlayerHandle, EventModelViolations> {
        self.roster.get(client_id)
            .copied()
            .ok_or_else(|| EventModelViolations::UnknownPlayer { event_name, client_id: client_id.to_owned() })
    }

}

impl MatchTracker {

    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `event` to the active match.\
    /// On error, nothing is changed.
    pub fn apply(&mut self, event: &Quake3Events) -> Result<(), EventModelViolations> {
        match event {

            Quake3Events::InitGame => {
                if let Some(previous_match) = mem::replace(&mut self.active_match, Some(ActiveMatch::default())) {
                    self.finish_match(previous_match);
                }
            },

            Quake3Events::ClientUserinfoChanged { client_id, name } => {
                let client_id: &str = client_id;
                let name: &str = name;
                let active_match = self.active_match_mut(event)?;
                match active_match.roster.get(client_id) {
                    Some(&player) => active_match.game_match.player_mut(player).name = name.to_owned(),
                    None => {
                        let player = active_match.game_match.add_player(Player::new(client_id, name));
                        active_match.roster.insert(client_id.to_owned(), player);
                    },
                }
            },

            Quake3Events::Kill { killer_id, victim_id, mean_of_death } => {
                let event_name = event.event_name();
                let active_match = self.active_match_mut(event)?;
                let killer = active_match.resolve(killer_id, event_name)?;
                active_match.resolve(victim_id, event_name)?;
                active_match.game_match.register_kill(mean_of_death);
                if killer_id != victim_id {
                    active_match.game_match.player_mut(killer).score += 1;
                }
            },

            Quake3Events::WorldKill { victim_id, mean_of_death } => {
                let event_name = event.event_name();
                let active_match = self.active_match_mut(event)?;
                let victim = active_match.resolve(victim_id, event_name)?;
                active_match.game_match.register_kill(mean_of_death);
                active_match.game_match.player_mut(victim).score -= 1;
            },

            Quake3Events::Ignored => (),
        }
        Ok(())
    }

    /// The match being built, if any
    pub fn current_match(&self) -> Option<&GameMatch> {
        self.active_match.as_ref()
            .map(|active_match| &active_match.game_match)
    }

    /// The matches already finished -- by the start of the match that followed them
    pub fn matches(&self) -> &[GameMatch] {
        &self.finished_matches
    }

    /// Ends the tracking, returning all matches in the log order -- including the active one, even if no `ShutdownGame` was seen for it
    pub fn finish(mut self) -> Vec<GameMatch> {
        if let Some(active_match) = self.active_match.take() {
            self.finish_match(active_match);
        }
        self.finished_matches
    }

    fn active_match_mut(&mut self, event: &Quake3Events) -> Result<&mut ActiveMatch, EventModelViolations> {
        self.active_match.as_mut()
            .ok_or(EventModelViolations::GameNotStarted { event_name: event.event_name() })
    }

    fn finish_match(&mut self, ActiveMatch { game_match, .. }: ActiveMatch) {
        debug!("Match #{} finished with {} players and {} kills", self.finished_matches.len()+1, game_match.players().len(), game_match.total_kills());
        self.finished_matches.push(game_match);
    }

}

/// Errors that may come after applying [Quake3Events] out of the expected order
#[derive(Debug, PartialEq, Eq)]
pub enum EventModelViolations {
    /// Occurs when a game event happens outside of a game match (no [Quake3Events::InitGame] was issued)
    GameNotStarted { event_name: &'static str },
    /// Occurs when an event references a client id not introduced by a [Quake3Events::ClientUserinfoChanged] in the current match
    UnknownPlayer { event_name: &'static str, client_id: String },
}

impl Display for EventModelViolations {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EventModelViolations::GameNotStarted { event_name } => write!(f, "`{event_name}` event received before `InitGame`"),
            EventModelViolations::UnknownPlayer { event_name, client_id } => write!(f, "`{event_name}` event references the unknown client id {client_id:?}"),
        }
    }
}

impl std::error::Error for EventModelViolations {}
