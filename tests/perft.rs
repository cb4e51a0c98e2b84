//! Shallow perft counts against known-correct values.
//!
//! Node counts are taken from <https://www.chessprogramming.org/Perft_Results>.
//! Depths are kept shallow: the generate-then-filter engine is built for an
//! interactive board, not bulk search, and promotions are generated as a
//! single queen candidate rather than four sibling moves, so only depths with
//! no promotions in reach are comparable to the reference tables.

use mailbox_chess::engine::all_legal_moves;
use mailbox_chess::{GameSession, Move};

/// Count leaf nodes by committing every legal move through a session clone.
fn perft(session: &GameSession, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = all_legal_moves(session.board()).unwrap();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = session.clone();
        child
            .commit(Move::new(mv.start, mv.end))
            .unwrap_or_else(|err| panic!("{mv} rejected: {err}"));
        nodes += perft(&child, depth - 1);
    }
    nodes
}

fn session(fen: &str) -> GameSession {
    GameSession::from_fen(fen, false, false).unwrap()
}

// =====================================================================
// Position 1 — starting position
// =====================================================================

#[test]
fn perft_start_depth_1() {
    let s = GameSession::new_game(false, false);
    assert_eq!(perft(&s, 1), 20);
}

#[test]
fn perft_start_depth_2() {
    let s = GameSession::new_game(false, false);
    assert_eq!(perft(&s, 2), 400);
}

#[test]
fn perft_start_depth_3() {
    let s = GameSession::new_game(false, false);
    assert_eq!(perft(&s, 3), 8_902);
}

// =====================================================================
// Position 2 — "kiwipete" (castling, en passant, pins)
// =====================================================================

#[test]
fn perft_kiwipete_depth_1() {
    let s = session("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    assert_eq!(perft(&s, 1), 48);
}

#[test]
fn perft_kiwipete_depth_2() {
    let s = session("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    assert_eq!(perft(&s, 2), 2_039);
}

// =====================================================================
// Position 3 — rook endgame with en passant traps
// =====================================================================

#[test]
fn perft_position_3_depth_1() {
    let s = session("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    assert_eq!(perft(&s, 1), 14);
}

#[test]
fn perft_position_3_depth_2() {
    let s = session("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    assert_eq!(perft(&s, 2), 191);
}

#[test]
fn perft_position_3_depth_3() {
    let s = session("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    assert_eq!(perft(&s, 3), 2_812);
}
