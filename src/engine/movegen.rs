//! Raw (pseudo-legal) move generation.
//!
//! Move terminology:
//!
//! RAW: moves obeying a piece's movement pattern and board occupancy, but not
//! yet checked against "does this leave my own king attacked". Raw castling
//! moves are gated only on rights and a clear path, not on attacked squares.
//!
//! LEGAL: raw moves that survive the legality filter in
//! [`crate::engine::legality`].
//!
//! A shift that runs off the board is silently dropped — that is normal
//! generation, not a failure. Generation itself fails only for programmer
//! errors: no piece on the square, or a piece of the wrong color.

use crate::engine::board::Board;
use crate::engine::castling;
use crate::engine::types::{Move, MoveFlag, MoveGenError, Piece, PieceKind, Promotion, Square};

/// Rook (and half of queen) movement directions as (file, rank) deltas.
pub const STRAIGHT_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop (and half of queen) movement directions.
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The knight's eight jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The king's eight adjacent steps.
const KING_RING: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

// =========================================================================
// Public API
// =========================================================================

/// All raw moves for the piece on `from`.
///
/// The square must hold a piece of the side to move. Castling moves are
/// included whenever the rights flag is set and the path is clear; the
/// not-through-check condition is the legality filter's concern.
pub fn raw_moves(from: Square, board: &Board) -> Result<Vec<Move>, MoveGenError> {
    generate(from, board, false)
}

/// Raw moves restricted to squares the piece *threatens*.
///
/// Used by attack detection: pawn pushes and castling can never capture, so
/// they are omitted, while pawn diagonals count whether or not the target
/// square is occupied.
pub(crate) fn raw_attacks(from: Square, board: &Board) -> Result<Vec<Move>, MoveGenError> {
    generate(from, board, true)
}

// =========================================================================
// Per-kind generation
// =========================================================================

fn generate(from: Square, board: &Board, attacks_only: bool) -> Result<Vec<Move>, MoveGenError> {
    let piece = board.piece_at(from);
    if piece.is_empty() {
        return Err(MoveGenError::MissingPiece(from));
    }
    if !piece.is_color(board.side_to_move) {
        return Err(MoveGenError::WrongSide(from));
    }

    let mut moves = Vec::new();
    match piece.kind() {
        Some(PieceKind::Pawn) => pawn_moves(from, piece, board, attacks_only, &mut moves),
        Some(PieceKind::Knight) => {
            step_moves(from, piece, board, &KNIGHT_JUMPS, MoveFlag::None, &mut moves)
        }
        Some(PieceKind::King) => {
            step_moves(
                from,
                piece,
                board,
                &KING_RING,
                MoveFlag::MayRevokeCastlingRights,
                &mut moves,
            );
            if !attacks_only {
                castling_moves(from, board, &mut moves);
            }
        }
        Some(PieceKind::Bishop) => {
            sliding_moves(from, piece, board, &DIAGONAL_DIRS, MoveFlag::None, &mut moves)
        }
        Some(PieceKind::Rook) => sliding_moves(
            from,
            piece,
            board,
            &STRAIGHT_DIRS,
            MoveFlag::MayRevokeCastlingRights,
            &mut moves,
        ),
        Some(PieceKind::Queen) => {
            sliding_moves(
                from,
                piece,
                board,
                &STRAIGHT_DIRS,
                MoveFlag::MayRevokeCastlingRights,
                &mut moves,
            );
            sliding_moves(from, piece, board, &DIAGONAL_DIRS, MoveFlag::None, &mut moves);
        }
        None => unreachable!("non-empty piece always has a kind"),
    }
    Ok(moves)
}

// -------------------------------------------------------------------------
// Pawns
// -------------------------------------------------------------------------

fn pawn_moves(from: Square, piece: Piece, board: &Board, attacks_only: bool, moves: &mut Vec<Move>) {
    // A piece of the side to move always has a color.
    let color = board.side_to_move;
    let dir = color.pawn_direction();
    let home_rank = match dir {
        1 => 2,
        _ => 7,
    };
    let last_rank = (!color).back_rank();

    // Diagonal captures. In attack mode the diagonal threatens the square
    // whether or not anything stands on it.
    for file_delta in [-1, 1] {
        if let Some(end) = from.shifted(file_delta, dir) {
            let target = board.piece_at(end);
            let enemy = !target.is_empty() && !target.same_color(piece);
            if attacks_only || enemy {
                moves.push(Move::with_flag(from, end, promotion_or(end, last_rank)));
            }
        }
    }

    if attacks_only {
        return;
    }

    // Single push onto an empty square, then the double push from the home
    // rank when the intervening square was also empty.
    if let Some(end) = from.shifted(0, dir) {
        if board.piece_at(end).is_empty() {
            moves.push(Move::with_flag(from, end, promotion_or(end, last_rank)));

            if from.rank() == home_rank {
                if let Some(end2) = end.shifted(0, dir) {
                    if board.piece_at(end2).is_empty() {
                        moves.push(Move::with_flag(from, end2, MoveFlag::PawnDoublePush));
                    }
                }
            }
        }
    }

    // En passant: the diagonal lands on the skipped square.
    if let Some(target) = board.en_passant {
        for file_delta in [-1, 1] {
            if from.shifted(file_delta, dir) == Some(target)
                && !moves.iter().any(|m| m.end == target)
            {
                moves.push(Move::with_flag(from, target, MoveFlag::EnPassant));
            }
        }
    }
}

/// A pawn move landing on the far rank is a promotion candidate; the queen is
/// proposed and the committer may substitute another choice.
fn promotion_or(end: Square, last_rank: u8) -> MoveFlag {
    if end.rank() == last_rank {
        MoveFlag::Promote(Promotion::Queen)
    } else {
        MoveFlag::None
    }
}

// -------------------------------------------------------------------------
// Knights & kings (fixed offsets)
// -------------------------------------------------------------------------

fn step_moves(
    from: Square,
    piece: Piece,
    board: &Board,
    offsets: &[(i8, i8)],
    flag: MoveFlag,
    moves: &mut Vec<Move>,
) {
    for &(file_delta, rank_delta) in offsets {
        if let Some(end) = from.shifted(file_delta, rank_delta) {
            if !board.piece_at(end).same_color(piece) {
                moves.push(Move::with_flag(from, end, flag));
            }
        }
    }
}

// -------------------------------------------------------------------------
// Sliders (bishop, rook, queen)
// -------------------------------------------------------------------------

fn sliding_moves(
    from: Square,
    piece: Piece,
    board: &Board,
    dirs: &[(i8, i8)],
    flag: MoveFlag,
    moves: &mut Vec<Move>,
) {
    for &(file_delta, rank_delta) in dirs {
        let mut cursor = from;
        while let Some(end) = cursor.shifted(file_delta, rank_delta) {
            let target = board.piece_at(end);
            if target.same_color(piece) {
                break;
            }
            moves.push(Move::with_flag(from, end, flag));
            if !target.is_empty() {
                // Capture ends the ray.
                break;
            }
            cursor = end;
        }
    }
}

// -------------------------------------------------------------------------
// Castling pseudo-moves
// -------------------------------------------------------------------------

/// Append the two castling pseudo-moves when the raw conditions hold. These
/// are not yet validated against attacked squares.
fn castling_moves(from: Square, board: &Board, moves: &mut Vec<Move>) {
    if castling::can_castle_kingside_raw(board) {
        if let Some(end) = from.shifted(2, 0) {
            moves.push(Move::with_flag(from, end, MoveFlag::CastleKingside));
        }
    }
    if castling::can_castle_queenside_raw(board) {
        if let Some(end) = from.shifted(-2, 0) {
            moves.push(Move::with_flag(from, end, MoveFlag::CastleQueenside));
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
