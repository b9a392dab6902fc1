//! Resting place for [GameMatch], [Player] & friends

use crate::means_of_death::MeansOfDeath;


/// A participant of a [GameMatch]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The game client id -- unique among the players of a single match
    id: String,
    /// The player's nickname, as of its last update
    pub name: String,
    /// +1 for each other player killed; -1 for each death caused by the `<world>`
    pub score: i32,
}

impl Player {

    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

}

/// Stable reference to one of the [Player]s owned by a [GameMatch].\
/// Only meaningful for the match that issued it -- see [GameMatch::add_player()].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerHandle(usize);

/// The data reconstructed for a single game match.\
/// Players are owned here, in the order they were first seen, and referenced elsewhere through [PlayerHandle]s:
/// renaming a player is, then, visible through every path that reaches it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameMatch {
    total_kills: u32,
    players: Vec<Player>,
    deaths: MeansOfDeath,
}

impl GameMatch {

    /// Creates an empty match: no players & no kills
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `player`, appending it to [Self::players()]
    pub fn add_player(&mut self, player: Player) -> PlayerHandle {
        self.players.push(player);
        PlayerHandle(self.players.len() - 1)
    }

    pub fn player(&self, handle: PlayerHandle) -> &Player {
        &self.players[handle.0]
    }

    pub fn player_mut(&mut self, handle: PlayerHandle) -> &mut Player {
        &mut self.players[handle.0]
    }

    /// Accounts for a kill -- regardless of who (or what) did it -- caused by `mean_of_death`.\
    /// Scores are not touched here.
    pub fn register_kill(&mut self, mean_of_death: &str) {
        self.total_kills += 1;
        self.deaths.increment(mean_of_death);
    }

    /// All kills that happened in this match, including suicides & deaths caused by the `<world>`
    pub fn total_kills(&self) -> u32 {
        self.total_kills
    }

    /// The players, in the order they were first seen
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The number of deaths for each mean of death
    pub fn deaths(&self) -> &MeansOfDeath {
        &self.deaths
    }

}


/// Unit tests for the [game_match](super) module
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player() {
        let player = Player::new("1", "Player 1");
        assert_eq!(player.id(), "1");
        assert_eq!(player.name, "Player 1");
        assert_eq!(player.score, 0, "Players should start with a zeroed score");
    }

    #[test]
    fn new_match() {
        let game_match = GameMatch::new();
        assert_eq!(game_match.total_kills(), 0);
        assert!(game_match.players().is_empty(), "A new match should have no players");
        assert!(game_match.deaths().is_empty(), "A new match should have no deaths");
    }

    /// Assures updates through a handle are seen by the players' listing -- and that the insertion order is kept
    #[test]
    fn players_are_shared_through_handles() {
        let mut game_match = GameMatch::new();
        let first = game_match.add_player(Player::new("1", "Player 1"));
        let second = game_match.add_player(Player::new("2", "Isgalamido"));
        game_match.player_mut(first).name = String::from("New Name");
        game_match.player_mut(second).score += 1;
        assert_eq!(game_match.players(), &[
            Player { id: "1".to_owned(), name: "New Name".to_owned(), score: 0 },
            Player { id: "2".to_owned(), name: "Isgalamido".to_owned(), score: 1 },
        ]);
        assert_eq!(game_match.player(first).id(), "1");
    }

    #[test]
    fn kills_and_deaths() {
        let mut game_match = GameMatch::new();
        game_match.register_kill("MOD_TRIGGER_HURT");
        game_match.register_kill("MOD_ROCKET_SPLASH");
        game_match.register_kill("MOD_ROCKET_SPLASH");
        assert_eq!(game_match.total_kills(), 3);
        assert_eq!(game_match.deaths(), &MeansOfDeath::from([("MOD_TRIGGER_HURT", 1), ("MOD_ROCKET_SPLASH", 2)]));
        assert_eq!(game_match.deaths().total(), game_match.total_kills(), "Every kill should have a mean of death");
    }
}
