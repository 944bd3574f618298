//! A search-backed player bound to one side of the board.

use crate::config::{ConfigError, PlayerConfig};
use log::debug;
use pengwin_othello::{Game, Location, Player};
use pengwin_search::select_move;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug)]
pub struct Bot {
    player: Player,
    config: PlayerConfig,
    rng: StdRng,
}

impl Bot {
    pub fn new(player: Player, config: PlayerConfig) -> Self {
        Self {
            player,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// A bot whose tie-breaks are reproducible.
    pub fn with_seed(player: Player, config: PlayerConfig, seed: u64) -> Self {
        Self {
            player,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Search for this bot's best move, from its own side's perspective whoever is to move.
    /// Returns None when this side has no legal moves and must pass.
    pub fn choose_move(&mut self, game: &Game) -> Option<Location> {
        let board = game.board_for(self.player);
        let choice = select_move(
            board,
            self.config.depth,
            self.config.algorithm,
            &self.config.strategy,
            &mut self.rng,
        );

        match choice {
            Some(loc) => debug!(
                "{} ({} {}, depth {}) chose {}",
                self.player, self.config.strategy, self.config.algorithm, self.config.depth, loc
            ),
            None => debug!("{} has no moves and passes", self.player),
        }

        choice
    }
}

/// Choose a move for `side` with a named evaluation strategy and alpha-beta search.
pub fn choose_move(
    game: &Game,
    side: Player,
    depth: u8,
    strategy: &str,
) -> Result<Option<Location>, ConfigError> {
    let config = PlayerConfig::new(depth, strategy, "alpha-beta")?;
    Ok(Bot::new(side, config).choose_move(game))
}
