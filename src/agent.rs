//! Opponent-agent interface.
//!
//! The engine never chooses moves; after a commit the session hands control
//! to whatever implements [`Agent`] — an in-process random mover, a WASM
//! search engine, a remote HTTP service — and that collaborator calls
//! [`GameSession::commit`] with its choice. How the move was chosen is
//! invisible to the engine.
//!
//! [`GameSession::commit`]: crate::engine::game::GameSession::commit

use rand::seq::SliceRandom;

use crate::engine::board::Board;
use crate::engine::legality;
use crate::engine::types::{GameError, Move};

/// An external opponent.
pub trait Agent {
    /// Choose a move for the side to move. `None` when no legal move exists
    /// (the position is checkmate or stalemate).
    fn choose_move(&mut self, board: &Board) -> Result<Option<Move>, GameError>;

    /// Human-readable name for logs and UI.
    fn name(&self) -> &str;
}

/// Plays a uniformly random legal move.
pub struct RandomAgent;

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &Board) -> Result<Option<Move>, GameError> {
        let moves = legality::all_legal_moves(board)?;
        let mut rng = rand::thread_rng();
        Ok(moves.choose(&mut rng).copied())
    }

    fn name(&self) -> &str {
        "random"
    }
}

// =========================================================================
// Tests
// =========================================================================
