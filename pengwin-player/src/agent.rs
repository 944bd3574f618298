use crate::bot::Bot;
use async_std::task;
use async_trait::async_trait;
use pengwin_othello::{Game, Location, Player};

/// Something that picks moves for one side of a game run by the game service.
#[async_trait]
pub trait Agent: Send {
    /// The side this agent plays.
    fn player(&self) -> Player;

    /// Pick a move for `game`, or None to pass.
    async fn next_move(&mut self, game: Game) -> Option<Location>;
}

#[async_trait]
impl Agent for Bot {
    fn player(&self) -> Player {
        Bot::player(self)
    }

    /// Searches on the blocking pool, then carries the advanced RNG back.
    async fn next_move(&mut self, game: Game) -> Option<Location> {
        let mut bot = self.clone();
        let (choice, bot) = task::spawn_blocking(move || {
            let choice = bot.choose_move(&game);
            (choice, bot)
        })
        .await;

        *self = bot;
        choice
    }
}
