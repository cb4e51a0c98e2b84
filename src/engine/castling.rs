//! Two-tier castling evaluation.
//!
//! The *raw* tier checks only the conditions that never require attack
//! detection: the rights flag is still set and the path between king and rook
//! is clear. The *legal* tier adds "the king is not in check and does not
//! pass through or land on an attacked square".
//!
//! The split exists to break recursion: attack detection runs the raw
//! generator over a side-flipped board copy, and raw generation of king moves
//! consults the raw tier — so the raw tier must never reach back into attack
//! detection.

use tracing::trace;

use crate::engine::board::Board;
use crate::engine::legality;
use crate::engine::types::{BoardStateError, Square};

// =========================================================================
// Raw tier
// =========================================================================

/// The side to move still has kingside rights and the f/g squares of its
/// back rank are empty.
pub fn can_castle_kingside_raw(board: &Board) -> bool {
    if !board.castling.kingside(board.side_to_move) {
        return false;
    }
    path_clear(board, &[6, 7])
}

/// The side to move still has queenside rights and the b/c/d squares of its
/// back rank are empty.
pub fn can_castle_queenside_raw(board: &Board) -> bool {
    if !board.castling.queenside(board.side_to_move) {
        return false;
    }
    path_clear(board, &[2, 3, 4])
}

// =========================================================================
// Legal tier
// =========================================================================

/// Full kingside gate: the raw conditions, the king not currently in check,
/// and neither the transit square nor the landing square attacked.
pub fn can_castle_kingside(board: &Board) -> Result<bool, BoardStateError> {
    if !can_castle_kingside_raw(board) {
        return Ok(false);
    }
    if legality::is_in_check(board)? {
        trace!(side = %board.side_to_move, "kingside castling refused: in check");
        return Ok(false);
    }
    let rank = board.side_to_move.back_rank();
    let transit = [Square::new(6, rank), Square::new(7, rank)];
    let clear = !legality::any_attacked_by_opponent(board, &transit);
    trace!(side = %board.side_to_move, clear, "kingside castling transit checked");
    Ok(clear)
}

/// Full queenside gate. The king transits d and lands on c; the b square
/// only needs to be empty, which the raw tier already established.
pub fn can_castle_queenside(board: &Board) -> Result<bool, BoardStateError> {
    if !can_castle_queenside_raw(board) {
        return Ok(false);
    }
    if legality::is_in_check(board)? {
        trace!(side = %board.side_to_move, "queenside castling refused: in check");
        return Ok(false);
    }
    let rank = board.side_to_move.back_rank();
    let transit = [Square::new(3, rank), Square::new(4, rank)];
    let clear = !legality::any_attacked_by_opponent(board, &transit);
    trace!(side = %board.side_to_move, clear, "queenside castling transit checked");
    Ok(clear)
}

// =========================================================================
// Helpers
// =========================================================================

/// True when every given file of the side-to-move's back rank is empty.
fn path_clear(board: &Board, files: &[u8]) -> bool {
    let rank = board.side_to_move.back_rank();
    files
        .iter()
        .all(|&file| board.piece_at(Square::new(file, rank)).is_empty())
}

// =========================================================================
// Tests
// =========================================================================
