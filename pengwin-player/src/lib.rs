//! Playing Othello against the outside world.
//!
//! [`Bot`] picks moves for one side using `pengwin-search`. [`GameService`] owns the
//! single authoritative game and serialises every read and move sent to it through
//! a [`GameHandle`].
pub mod agent;
pub mod bot;
pub mod config;
pub mod service;

pub use agent::Agent;
pub use bot::{choose_move, Bot};
pub use config::{ConfigError, PlayerConfig};
pub use service::{BotReply, GameHandle, GameService, ServiceError};
