//! A mailbox-based chess rules engine.
//!
//! The crate maintains board state, generates and legalizes moves, enforces
//! special-move bookkeeping (castling rights, en passant, promotion), detects
//! check/checkmate/stalemate, and round-trips positions through FEN notation.
//!
//! It deliberately contains no rendering, input handling, search, or network
//! code. Those live in the embedding application; the engine hands them a
//! [`GameSession`], a set of legal moves, and a FEN string, and consumes moves
//! back through [`GameSession::commit`] (or the wire codec in
//! [`engine::wire`] when the opponent lives across a process boundary).
//!
//! ```
//! use mailbox_chess::{GameSession, Square};
//!
//! let mut game = GameSession::new_game(false, false);
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let moves = game.legal_moves(e2).unwrap();
//! game.commit(moves[0]).unwrap();
//! ```

pub mod agent;
pub mod engine;

pub use agent::{Agent, RandomAgent};
pub use engine::board::{Board, STARTING_FEN};
pub use engine::game::GameSession;
pub use engine::types::*;
