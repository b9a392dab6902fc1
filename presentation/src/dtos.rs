//! Serializable shapes of the reports -- each borrowing from the [GameMatch] it reports on

use std::collections::BTreeMap;
use serde::{Serialize, Serializer};
use model::game_match::GameMatch;
use model::means_of_death::MeansOfDeath;


/// Report entry for the kills & scores of a single match
#[derive(Debug, Serialize, PartialEq)]
pub struct KillsReport<'a> {
    pub total_kills: u32,
    /// Sorted names -- repeated names are kept
    pub players: Vec<&'a str>,
    /// name -> score. For repeated names, the score of the player seen last wins
    pub kills: BTreeMap<&'a str, i32>,
}

impl<'a> From<&'a GameMatch> for KillsReport<'a> {
    fn from(game_match: &'a GameMatch) -> Self {
        let mut players: Vec<&str> = game_match.players().iter()
            .map(|player| player.name.as_str())
            .collect();
        players.sort_unstable();
        let kills = game_match.players().iter()
            .map(|player| (player.name.as_str(), player.score))
            .collect();
        Self {
            total_kills: game_match.total_kills(),
            players,
            kills,
        }
    }
}

/// Report entry for the deaths of a single match, by their means
#[derive(Debug, Serialize, PartialEq)]
pub struct KillsByMeansReport<'a> {
    pub kills_by_means: KillsByMeans<'a>,
}

impl<'a> From<&'a GameMatch> for KillsByMeansReport<'a> {
    fn from(game_match: &'a GameMatch) -> Self {
        Self {
            kills_by_means: KillsByMeans(game_match.deaths()),
        }
    }
}

/// Serializes [MeansOfDeath] as a JSON object, keeping the order in which each mean was first seen
#[derive(Debug, PartialEq)]
pub struct KillsByMeans<'a>(pub &'a MeansOfDeath);

impl Serialize for KillsByMeans<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}


/// Unit tests for the [dtos](super) module
#[cfg(test)]
mod tests {
    use super::*;
    use model::game_match::Player;

    #[test]
    fn kills_report() {
        let mut game_match = GameMatch::new();
        let zeh = game_match.add_player(Player::new("4", "Zeh"));
        game_match.add_player(Player::new("2", "Isgalamido"));
        game_match.register_kill("MOD_RAILGUN");
        game_match.player_mut(zeh).score += 1;
        assert_eq!(KillsReport::from(&game_match), KillsReport {
            total_kills: 1,
            players: vec!["Isgalamido", "Zeh"],
            kills: BTreeMap::from([("Isgalamido", 0), ("Zeh", 1)]),
        });
    }

    /// Two clients may share the same nickname: both are listed, but only one score survives
    #[test]
    fn repeated_names() {
        let mut game_match = GameMatch::new();
        let first = game_match.add_player(Player::new("1", "Zeh"));
        game_match.add_player(Player::new("2", "Zeh"));
        game_match.player_mut(first).score -= 1;
        let report = KillsReport::from(&game_match);
        assert_eq!(report.players, vec!["Zeh", "Zeh"]);
        assert_eq!(report.kills, BTreeMap::from([("Zeh", 0)]));
    }

    #[test]
    fn kills_by_means_order() {
        let means_of_death = MeansOfDeath::from([("MOD_TRIGGER_HURT", 2), ("MOD_FALLING", 1), ("MOD_BFG", 3)]);
        let json = serde_json::to_string(&KillsByMeans(&means_of_death)).expect("Serialization shouldn't fail");
        assert_eq!(json, r#"{"MOD_TRIGGER_HURT":2,"MOD_FALLING":1,"MOD_BFG":3}"#);
    }
}
