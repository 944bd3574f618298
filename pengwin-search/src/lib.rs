//! Adversarial search over [`pengwin_othello::Board`]s.
//!
//!  - [`eval`] holds the evaluation strategies, behind the [`Evaluate`] trait.
//!  - [`search`] implements minimax and alpha-beta in negamax form.
//!  - [`selector`] ranks root moves and picks one, breaking ties at random.
pub mod eval;
pub mod search;
pub mod selector;

pub use eval::{Composite, Evaluate, Evaluation, Material};
pub use search::{alpha_beta, minimax, Algorithm, INFINITY};
pub use selector::{rank_moves, select_move, ScoredMove};
