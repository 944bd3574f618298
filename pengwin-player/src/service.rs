//! The game service: one task owns the authoritative [`Game`].
//!
//! Every read and move goes through a [`GameHandle`], which sends a command over a
//! channel. Commands are handled one at a time in arrival order, so concurrent callers
//! never observe a half-applied move. A bot reply to a move runs inside the same
//! command, after the move commits and before the next command is read.
//!
//! [`Bot`](crate::Bot) searches on the blocking pool while the game task waits for it,
//! so a deep search does not stall the executor's worker threads.

use crate::agent::Agent;
use async_std::channel::{self, Receiver, Sender};
use async_std::task::{self, JoinHandle};
use derive_more::{Display, Error};
use log::{debug, info, warn};
use pengwin_othello::{Game, InvalidMove, Location, Player, StateSnapshot, Transition};

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[display(fmt = "{}", source)]
    InvalidMove { source: InvalidMove },
    #[display(fmt = "game service has shut down")]
    Closed,
}

impl From<InvalidMove> for ServiceError {
    fn from(source: InvalidMove) -> Self {
        ServiceError::InvalidMove { source }
    }
}

/// Resolves to the moves the bot played in reply, in order.
pub type BotReply = JoinHandle<Result<Vec<Location>, ServiceError>>;

type Reply<T> = Sender<T>;

enum Command {
    State(Reply<StateSnapshot>),
    NewGame(Reply<StateSnapshot>),
    Play {
        coord: String,
        reply: Reply<Result<StateSnapshot, InvalidMove>>,
        bot_reply: Option<Reply<Vec<Location>>>,
    },
    BotTurn(Reply<Vec<Location>>),
}

/// Starts game tasks.
pub struct GameService;

impl GameService {
    /// Spawn a task owning a new game. `agent`, if any, plays its side on request.
    /// The task stops once every handle has been dropped.
    pub fn spawn(agent: Option<Box<dyn Agent>>) -> GameHandle {
        Self::spawn_with(Game::new(), agent)
    }

    /// Spawn a task owning `game`. If its side to move cannot move but the other
    /// side can, the other side moves first.
    pub fn spawn_with(game: Game, agent: Option<Box<dyn Agent>>) -> GameHandle {
        let game = Game::from_colors(
            game.bitboard_for(Player::Black),
            game.bitboard_for(Player::White),
            game.active_player,
        );
        let (commands, receiver) = channel::unbounded();
        task::spawn(run(game, agent, receiver));
        GameHandle { commands }
    }
}

/// Cloneable access to a running game.
#[derive(Clone)]
pub struct GameHandle {
    commands: Sender<Command>,
}

impl GameHandle {
    async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> Command) -> Result<T, ServiceError> {
        let (reply, response) = channel::bounded(1);
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| ServiceError::Closed)?;
        response.recv().await.map_err(|_| ServiceError::Closed)
    }

    /// Read the current position without changing it.
    pub async fn state(&self) -> Result<StateSnapshot, ServiceError> {
        self.request(Command::State).await
    }

    /// Throw away the current game and start again.
    pub async fn new_game(&self) -> Result<StateSnapshot, ServiceError> {
        self.request(Command::NewGame).await
    }

    /// Play `coord` ("E3") for the side to move.
    pub async fn play(&self, coord: &str) -> Result<StateSnapshot, ServiceError> {
        let coord = coord.to_string();
        let result = self
            .request(|reply| Command::Play {
                coord,
                reply,
                bot_reply: None,
            })
            .await?;
        Ok(result?)
    }

    /// Let the agent play while it is its turn.
    pub async fn bot_turn(&self) -> Result<Vec<Location>, ServiceError> {
        self.request(Command::BotTurn).await
    }

    /// Play `coord`, then queue the agent's reply behind it.
    ///
    /// Returns the position right after `coord` is committed, and a handle
    /// to await the agent's moves.
    pub async fn play_and_reply(
        &self,
        coord: &str,
    ) -> Result<(StateSnapshot, BotReply), ServiceError> {
        let coord = coord.to_string();
        let (bot_reply, bot_response) = channel::bounded(1);
        let snapshot = self
            .request(|reply| Command::Play {
                coord,
                reply,
                bot_reply: Some(bot_reply),
            })
            .await??;

        let handle = task::spawn(async move {
            bot_response.recv().await.map_err(|_| ServiceError::Closed)
        });
        Ok((snapshot, handle))
    }
}

async fn run(mut game: Game, mut agent: Option<Box<dyn Agent>>, commands: Receiver<Command>) {
    while let Ok(command) = commands.recv().await {
        match command {
            Command::State(reply) => {
                let _ = reply.send(game.snapshot()).await;
            }
            Command::NewGame(reply) => {
                debug!("starting a new game");
                game = Game::new();
                let _ = reply.send(game.snapshot()).await;
            }
            Command::Play {
                coord,
                reply,
                bot_reply,
            } => {
                let result = play(&mut game, &coord);
                let accepted = result.is_ok();
                let _ = reply.send(result).await;

                if let (true, Some(bot_reply)) = (accepted, bot_reply) {
                    let moves = bot_turn(&mut game, agent.as_deref_mut()).await;
                    let _ = bot_reply.send(moves).await;
                }
            }
            Command::BotTurn(reply) => {
                let moves = bot_turn(&mut game, agent.as_deref_mut()).await;
                let _ = reply.send(moves).await;
            }
        }
    }

    debug!("all game handles dropped; stopping");
}

fn play(game: &mut Game, coord: &str) -> Result<StateSnapshot, InvalidMove> {
    let mover = game.active_player;
    match game.play_coordinate(coord) {
        Ok(transition) => {
            debug!("{} played {}", mover, coord);
            log_transition(game, transition);
            Ok(game.snapshot())
        }
        Err(err) => {
            warn!("rejected {:?} from {}: {}", coord, mover, err);
            Err(err)
        }
    }
}

/// Play agent moves until it is no longer the agent's turn or the game ends.
async fn bot_turn(game: &mut Game, agent: Option<&mut (dyn Agent + 'static)>) -> Vec<Location> {
    let mut played = Vec::new();
    let agent = match agent {
        Some(agent) => agent,
        None => return played,
    };

    while !game.is_finished() && game.active_player == agent.player() {
        let loc = match agent.next_move(*game).await {
            Some(loc) => loc,
            None => break,
        };

        match game.play(loc) {
            Ok(transition) => {
                info!("{} bot played {}", agent.player(), loc);
                played.push(loc);
                log_transition(game, transition);
            }
            Err(err) => {
                warn!("{} bot chose {}: {}", agent.player(), loc, err);
                break;
            }
        }
    }

    played
}

fn log_transition(game: &Game, transition: Transition) {
    match transition {
        Transition::Advanced => {}
        Transition::OpponentPassed => info!("{} has no moves and passes", !game.active_player),
        Transition::Finished => {
            let (black, white) = game.piece_counts();
            match game.winner() {
                Some(winner) => info!("game over, {} wins {}-{}", winner, black, white),
                None => info!("game over, draw {}-{}", black, white),
            }
        }
    }
}
