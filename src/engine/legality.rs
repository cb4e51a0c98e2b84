//! Legality filtering and check detection.
//!
//! A raw move is legal when playing it leaves the mover's own king
//! unattacked. The filter simulates the bare start-to-end relocation on a
//! scratch copy of the board — special side effects (rook relocation, the
//! en-passant pawn removal, promotion substitution) do not change whether the
//! mover's king square is attacked, so they are skipped. Castling-flagged
//! moves defer entirely to the castling evaluator, whose checks already cover
//! the king's safety.
//!
//! Cost is O(moves x squares x per-square generation). On a fixed 8x8 board
//! that is perfectly adequate; this module is not meant to scale past it.

use crate::engine::board::Board;
use crate::engine::castling;
use crate::engine::movegen;
use crate::engine::types::{BoardStateError, Move, MoveFlag, MoveGenError, Piece, Square};

// =========================================================================
// Attack detection
// =========================================================================

/// True when any of `targets` is threatened by the opponent of the side to
/// move. Runs the raw generator in attack mode over a side-flipped copy;
/// the caller's board is never mutated.
pub fn any_attacked_by_opponent(board: &Board, targets: &[Square]) -> bool {
    let mut flipped = board.clone();
    flipped.advance_turn();

    for (square, piece) in board.pieces() {
        if piece.is_color(board.side_to_move) {
            continue;
        }
        let Ok(attacks) = movegen::raw_attacks(square, &flipped) else {
            continue;
        };
        if attacks.iter().any(|attack| targets.contains(&attack.end)) {
            return true;
        }
    }
    false
}

/// Is the side to move's king currently attacked?
///
/// A missing king is a broken board invariant, not a game condition, and is
/// surfaced as [`BoardStateError::MissingKing`].
pub fn is_in_check(board: &Board) -> Result<bool, BoardStateError> {
    let king = board
        .king_square(board.side_to_move)
        .ok_or(BoardStateError::MissingKing(board.side_to_move))?;
    Ok(any_attacked_by_opponent(board, &[king]))
}

// =========================================================================
// Legality
// =========================================================================

/// Would this raw move be legal to play right now?
pub fn is_legal(mv: Move, board: &Board) -> Result<bool, BoardStateError> {
    match mv.flag {
        MoveFlag::CastleKingside => castling::can_castle_kingside(board),
        MoveFlag::CastleQueenside => castling::can_castle_queenside(board),
        _ => {
            let mut scratch = board.clone();
            let piece = scratch.piece_at(mv.start);
            scratch.set_piece(mv.start, Piece::EMPTY);
            scratch.set_piece(mv.end, piece);
            Ok(!is_in_check(&scratch)?)
        }
    }
}

/// All legal moves for the piece on `square`.
pub fn legal_moves(square: Square, board: &Board) -> Result<Vec<Move>, MoveGenError> {
    let mut legal = Vec::new();
    for mv in movegen::raw_moves(square, board)? {
        if is_legal(mv, board)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// All legal moves for the side to move, across every piece.
pub fn all_legal_moves(board: &Board) -> Result<Vec<Move>, MoveGenError> {
    let mut all = Vec::new();
    for (square, piece) in board.pieces() {
        if piece.is_color(board.side_to_move) {
            all.extend(legal_moves(square, board)?);
        }
    }
    Ok(all)
}

/// True when the side to move has no legal move at all — the shared predicate
/// behind checkmate and stalemate detection.
pub fn no_legal_moves(board: &Board) -> Result<bool, MoveGenError> {
    for (square, piece) in board.pieces() {
        if piece.is_color(board.side_to_move) && !legal_moves(square, board)?.is_empty() {
            return Ok(false);
        }
    }
    Ok(true)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Color;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap()
    }

    // -------------------------------------------------------------------
    // Check detection
    // -------------------------------------------------------------------

    #[test]
    fn starting_position_not_in_check() {
        assert_eq!(is_in_check(&Board::starting()), Ok(false));
    }

    #[test]
    fn rook_check_detected() {
        let b = board("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
        assert_eq!(is_in_check(&b), Ok(true));
    }

    #[test]
    fn pawn_check_detected() {
        let b = board("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1");
        assert_eq!(is_in_check(&b), Ok(true));
    }

    #[test]
    fn knight_check_detected() {
        let b = board("4k3/8/8/8/8/3n4/8/4K3 w - - 0 1");
        assert_eq!(is_in_check(&b), Ok(true));
    }

    #[test]
    fn blocked_slider_is_no_check() {
        let b = board("4k3/8/8/8/4r3/8/4P3/4K3 w - - 0 1");
        assert_eq!(is_in_check(&b), Ok(false));
    }

    #[test]
    fn check_is_relative_to_side_to_move() {
        // The black king is attacked, but White is to move.
        let b = board("4k2R/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(is_in_check(&b), Ok(false));
        let mut flipped = b.clone();
        flipped.advance_turn();
        assert_eq!(is_in_check(&flipped), Ok(true));
    }

    #[test]
    fn missing_king_is_a_state_error() {
        let b = board("8/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(
            is_in_check(&b),
            Err(BoardStateError::MissingKing(Color::Black))
        );
    }

    #[test]
    fn check_detection_does_not_mutate_the_board() {
        let b = board("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
        let before = b.clone();
        let _ = is_in_check(&b);
        let _ = any_attacked_by_opponent(&b, &[sq("e1"), sq("d1")]);
        assert_eq!(b, before);
    }

    // -------------------------------------------------------------------
    // Attack queries
    // -------------------------------------------------------------------

    #[test]
    fn attacked_squares_include_empty_pawn_diagonals() {
        let b = board("4k3/8/8/8/8/8/6p1/4K3 w - - 0 1");
        assert!(any_attacked_by_opponent(&b, &[sq("f1")]));
        assert!(any_attacked_by_opponent(&b, &[sq("h1")]));
        assert!(!any_attacked_by_opponent(&b, &[sq("g1")]));
    }

    #[test]
    fn attack_query_ignores_own_pieces() {
        let b = board("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        // The white rook does not "attack" squares from White's view.
        assert!(!any_attacked_by_opponent(&b, &[sq("a4")]));
    }

    // -------------------------------------------------------------------
    // is_legal
    // -------------------------------------------------------------------

    #[test]
    fn pinned_piece_moves_are_illegal() {
        // Bishop on e2 is pinned against the king by the rook on e8.
        let b = board("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1");
        for mv in movegen::raw_moves(sq("e2"), &b).unwrap() {
            assert_eq!(is_legal(mv, &b), Ok(false), "{mv} should be illegal");
        }
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let b = board("4k3/8/8/8/8/8/r7/4K3 w - - 0 1");
        let to_d2 = Move::with_flag(sq("e1"), sq("d2"), MoveFlag::MayRevokeCastlingRights);
        assert_eq!(is_legal(to_d2, &b), Ok(false));
        let to_d1 = Move::with_flag(sq("e1"), sq("d1"), MoveFlag::MayRevokeCastlingRights);
        assert_eq!(is_legal(to_d1, &b), Ok(true));
    }

    #[test]
    fn castling_legality_defers_to_evaluator() {
        let b = board("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let kingside = Move::with_flag(sq("e1"), sq("g1"), MoveFlag::CastleKingside);
        let queenside = Move::with_flag(sq("e1"), sq("c1"), MoveFlag::CastleQueenside);
        assert_eq!(is_legal(kingside, &b), Ok(false));
        assert_eq!(is_legal(queenside, &b), Ok(true));
    }

    // -------------------------------------------------------------------
    // legal_moves
    // -------------------------------------------------------------------

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let b = Board::starting();
        assert_eq!(all_legal_moves(&b).unwrap().len(), 20);
    }

    #[test]
    fn legal_moves_prunes_raw_moves_under_check() {
        // White king on e1 is checked by the rook on e8; the knight on b1
        // cannot help, the king must step aside.
        let b = board("4r2k/8/8/8/8/8/8/1N2K3 w - - 0 1");
        // The knight cannot block or capture along the e-file.
        assert!(legal_moves(sq("b1"), &b).unwrap().is_empty());
        let king_moves = legal_moves(sq("e1"), &b).unwrap();
        assert!(!king_moves.is_empty());
        assert!(king_moves.iter().all(|m| m.end.file() != 5));
    }

    #[test]
    fn legal_moves_propagates_generator_preconditions() {
        let b = Board::starting();
        assert_eq!(
            legal_moves(sq("e4"), &b),
            Err(MoveGenError::MissingPiece(sq("e4")))
        );
        assert_eq!(legal_moves(sq("e7"), &b), Err(MoveGenError::WrongSide(sq("e7"))));
    }

    #[test]
    fn soundness_no_legal_move_leaves_own_king_attacked() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4r2k/8/8/8/8/8/8/1N2K3 w - - 0 1",
        ];
        for fen in fens {
            let b = board(fen);
            for mv in all_legal_moves(&b).unwrap() {
                let mut scratch = b.clone();
                let piece = scratch.piece_at(mv.start);
                scratch.set_piece(mv.start, Piece::EMPTY);
                scratch.set_piece(mv.end, piece);
                assert_eq!(
                    is_in_check(&scratch),
                    Ok(false),
                    "{mv} leaves the king attacked in {fen}"
                );
            }
        }
    }

    // -------------------------------------------------------------------
    // no_legal_moves
    // -------------------------------------------------------------------

    #[test]
    fn active_position_has_moves() {
        assert_eq!(no_legal_moves(&Board::starting()), Ok(false));
    }

    #[test]
    fn classic_queen_stalemate() {
        // Black to move: king cornered by king and queen, not in check.
        let b = board("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1");
        assert_eq!(no_legal_moves(&b), Ok(true));
        assert_eq!(is_in_check(&b), Ok(false));
    }

    #[test]
    fn back_rank_mate_has_no_moves() {
        // The rook does not control g8's escape squares yet.
        let b = board("6k1/5ppp/8/8/8/8/8/4R1K1 b - - 0 1");
        assert_eq!(no_legal_moves(&b), Ok(false));

        let mated = board("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(no_legal_moves(&mated), Ok(true));
        assert_eq!(is_in_check(&mated), Ok(true));
    }
}
