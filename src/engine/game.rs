//! Stateful game session wrapping [`Board`].
//!
//! `GameSession` is the point of contact for both the input layer and an
//! external opponent agent: it tracks turn order, the picked (selected or
//! held) piece, applies chosen moves with their special side effects, detects
//! terminal states, and keeps a single-ply undo snapshot.
//!
//! Two pick modalities mirror the two input styles: `select_piece` (tap to
//! select, piece stays on its square) and `pickup_piece` (drag, the piece is
//! lifted off the board and rendered at the cursor by the embedding UI). In
//! both cases legality is computed against the origin square; the board
//! returns to a consistent state on commit or cancel.

use tracing::debug;

use crate::engine::board::Board;
use crate::engine::castling;
use crate::engine::legality;
use crate::engine::types::{
    Color, FenError, GameError, Move, MoveFlag, Piece, PieceKind, PlayerKind, Promotion, Square,
};

// =========================================================================
// Pick state
// =========================================================================

/// A piece selected by tapping: it remains on its square.
#[derive(Clone, Debug)]
pub struct Selection {
    pub square: Square,
    pub moves: Vec<Move>,
}

/// A piece lifted off the board by dragging. The piece is logically still in
/// play on its home square; only the visual board square is vacated.
#[derive(Clone, Debug)]
pub struct HeldPiece {
    pub piece: Piece,
    pub home: Square,
    pub moves: Vec<Move>,
}

/// The saved previous position for one-ply undo.
#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    last_move: Option<(Square, Square)>,
}

// =========================================================================
// GameSession
// =========================================================================

/// A running chess game.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    selected: Option<Selection>,
    held: Option<HeldPiece>,
    /// Pre-commit position of the latest committed move. One ply deep by
    /// design; deeper history is the embedding application's concern.
    snapshot: Option<Snapshot>,
    /// Start/end of the latest committed move, for the renderer's highlight.
    last_move: Option<(Square, Square)>,
    /// Applied to the next queen-flagged promotion, then reset to queen.
    promotion_choice: Promotion,
    white_player: PlayerKind,
    black_player: PlayerKind,
}

impl GameSession {
    // -----------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------

    /// Start a new game from the standard starting position.
    pub fn new_game(white_is_bot: bool, black_is_bot: bool) -> GameSession {
        let player = |is_bot| if is_bot { PlayerKind::Bot } else { PlayerKind::Human };
        GameSession {
            board: Board::starting(),
            selected: None,
            held: None,
            snapshot: None,
            last_move: None,
            promotion_choice: Promotion::Queen,
            white_player: player(white_is_bot),
            black_player: player(black_is_bot),
        }
    }

    /// Start a game from an arbitrary FEN position.
    pub fn from_fen(fen: &str, white_is_bot: bool, black_is_bot: bool) -> Result<GameSession, FenError> {
        let board = Board::from_fen(fen)?;
        let mut session = GameSession::new_game(white_is_bot, black_is_bot);
        session.board = board;
        session.debug_assert_invariants();
        Ok(session)
    }

    /// Reset to the starting position, clearing all pick and undo state.
    pub fn reset(&mut self) {
        self.board = Board::starting();
        self.selected = None;
        self.held = None;
        self.snapshot = None;
        self.last_move = None;
        self.promotion_choice = Promotion::Queen;
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current position as FEN.
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    /// The latest committed move's start and end, for highlighting.
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    pub fn held(&self) -> Option<&HeldPiece> {
        self.held.as_ref()
    }

    pub fn promotion_choice(&self) -> Promotion {
        self.promotion_choice
    }

    fn player_for(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white_player,
            Color::Black => self.black_player,
        }
    }

    /// True when the next move belongs to an external agent.
    pub fn is_bot_to_move(&self) -> bool {
        self.player_for(self.board.side_to_move) == PlayerKind::Bot
    }

    pub fn is_human_to_move(&self) -> bool {
        self.player_for(self.board.side_to_move) == PlayerKind::Human
    }

    // -----------------------------------------------------------------
    // Legality queries
    // -----------------------------------------------------------------

    /// Legal moves for the piece on `square`. Works while that piece is
    /// held: the held piece's move set was computed before it was lifted.
    pub fn legal_moves(&self, square: Square) -> Result<Vec<Move>, GameError> {
        if let Some(held) = &self.held {
            if held.home == square {
                return Ok(held.moves.clone());
            }
        }
        Ok(legality::legal_moves(square, &self.board)?)
    }

    /// Is the side to move currently in check?
    pub fn is_in_check(&self) -> Result<bool, GameError> {
        Ok(legality::is_in_check(&self.board)?)
    }

    /// Would this move promote a pawn, so the input layer can prompt for a
    /// piece before committing?
    pub fn is_promotion_move(&self, mv: Move) -> bool {
        let piece = match &self.held {
            Some(held) if held.home == mv.start => held.piece,
            _ => self.board.piece_at(mv.start),
        };
        piece.is_kind(PieceKind::Pawn) && (mv.end.rank() == 1 || mv.end.rank() == 8)
    }

    // -----------------------------------------------------------------
    // Terminal states
    // -----------------------------------------------------------------

    /// The color that won by checkmate, or `None` when the game continues or
    /// is drawn. The winner is the side that is *not* to move.
    pub fn is_checkmate(&self) -> Result<Option<Color>, GameError> {
        if legality::no_legal_moves(&self.board)? && legality::is_in_check(&self.board)? {
            Ok(Some(!self.board.side_to_move))
        } else {
            Ok(None)
        }
    }

    /// True when the side to move has no legal move but is not in check.
    pub fn is_stalemate(&self) -> Result<bool, GameError> {
        Ok(legality::no_legal_moves(&self.board)? && !legality::is_in_check(&self.board)?)
    }

    /// True when the game has ended by checkmate or stalemate. Always false
    /// while a piece is held, since the position is mid-gesture.
    pub fn is_over(&self) -> Result<bool, GameError> {
        if self.held.is_some() {
            return Ok(false);
        }
        Ok(legality::no_legal_moves(&self.board)?)
    }

    // -----------------------------------------------------------------
    // Picking
    // -----------------------------------------------------------------

    /// Can the piece on `square` be picked: non-empty and belonging to the
    /// side to move?
    pub fn can_pick(&self, square: Square) -> bool {
        self.board.piece_at(square).is_color(self.board.side_to_move)
    }

    /// Tap-select the piece on `square` and compute its legal moves.
    pub fn select_piece(&mut self, square: Square) -> Result<&[Move], GameError> {
        self.cancel();
        let moves = legality::legal_moves(square, &self.board)?;
        debug!(square = %square, count = moves.len(), "piece selected");
        self.selected = Some(Selection { square, moves });
        self.debug_assert_invariants();
        Ok(&self.selected.as_ref().expect("just set").moves)
    }

    /// Lift the piece on `square` off the board for dragging. Legality is
    /// computed first, against the piece's origin square.
    pub fn pickup_piece(&mut self, square: Square) -> Result<&[Move], GameError> {
        self.cancel();
        let moves = legality::legal_moves(square, &self.board)?;
        let piece = self.board.piece_at(square);
        debug!(square = %square, count = moves.len(), "piece picked up");
        self.board.set_piece(square, Piece::EMPTY);
        self.held = Some(HeldPiece {
            piece,
            home: square,
            moves,
        });
        self.debug_assert_invariants();
        Ok(&self.held.as_ref().expect("just set").moves)
    }

    /// Drop selection state. A held piece returns to its home square. Turn,
    /// rights, and clock state are untouched.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.return_held_piece();
    }

    /// Put a held piece back on its home square. No-op when nothing is held.
    pub fn return_held_piece(&mut self) {
        if let Some(held) = self.held.take() {
            self.board.set_piece(held.home, held.piece);
        }
        self.debug_assert_invariants();
    }

    // -----------------------------------------------------------------
    // Promotion choice
    // -----------------------------------------------------------------

    /// Choose the piece the next promotion produces. Defaults to the queen
    /// and resets to it after every promotion.
    pub fn set_promotion_choice(&mut self, kind: PieceKind) -> Result<(), GameError> {
        let promotion =
            Promotion::from_kind(kind).ok_or(GameError::BadPromotionChoice(kind))?;
        self.promotion_choice = promotion;
        Ok(())
    }

    // -----------------------------------------------------------------
    // Commit
    // -----------------------------------------------------------------

    /// Play a move and advance the turn.
    ///
    /// The move must match an entry of the current pick's move set, or — when
    /// nothing is picked, as on the agent path — a legal move for the piece
    /// on its start square. Matching is by start and end square: the
    /// committed move takes its flag from the generated entry, so wire moves
    /// that arrive without flags still castle, capture en passant, and
    /// promote correctly. A promotion may override the generated queen by
    /// carrying an explicit `Promote` flag.
    pub fn commit(&mut self, mv: Move) -> Result<(), GameError> {
        if self.is_over()? {
            return Err(GameError::GameOver);
        }

        let candidates = match (&self.held, &self.selected) {
            (Some(held), _) => {
                if held.home != mv.start {
                    return Err(GameError::IllegalMove(mv));
                }
                held.moves.clone()
            }
            (None, Some(selection)) => {
                if selection.square != mv.start {
                    return Err(GameError::IllegalMove(mv));
                }
                selection.moves.clone()
            }
            (None, None) => legality::legal_moves(mv.start, &self.board)?,
        };
        let generated = candidates
            .iter()
            .find(|m| m.end == mv.end)
            .copied()
            .ok_or(GameError::IllegalMove(mv))?;

        // Explicit promotion override from the caller, if both sides agree
        // the move is a promotion.
        let flag = match (generated.flag, mv.flag) {
            (MoveFlag::Promote(_), MoveFlag::Promote(requested)) => MoveFlag::Promote(requested),
            (flag, _) => flag,
        };

        // Restore a held piece first so both the undo snapshot and the
        // relocation below see the complete board.
        self.cancel();
        let snapshot = Snapshot {
            board: self.board.clone(),
            last_move: self.last_move,
        };

        self.apply(Move::with_flag(mv.start, mv.end, flag));

        self.snapshot = Some(snapshot);
        self.last_move = if self.is_bot_to_move() {
            // The agent chooses invisibly; highlighting its prompt square
            // would leak a half-played state to the renderer.
            None
        } else {
            Some((mv.start, mv.end))
        };
        self.debug_assert_invariants();
        Ok(())
    }

    /// Apply a validated move: relocation, flag side effects, turn order,
    /// and clock bookkeeping.
    fn apply(&mut self, mv: Move) {
        let mover = self.board.side_to_move;
        let piece = self.board.piece_at(mv.start);

        debug!(mv = %mv, flag = ?mv.flag, side = %mover, "committing move");

        self.board.en_passant = None;

        let mut pawn_or_capture = piece.is_kind(PieceKind::Pawn);
        self.board.set_piece(mv.start, Piece::EMPTY);
        if self.board.set_piece(mv.end, piece) {
            pawn_or_capture = true;
        }

        match mv.flag {
            MoveFlag::None => {}

            MoveFlag::CastleKingside | MoveFlag::CastleQueenside => {
                let (rook_from, rook_to) = castling_rook_squares(mv.flag, mover);
                let rook = self.board.piece_at(rook_from);
                self.board.set_piece(rook_from, Piece::EMPTY);
                self.board.set_piece(rook_to, rook);
                // Castling consumes both of the mover's rights.
                self.board.castling.revoke_all(mover);
            }

            MoveFlag::EnPassant => {
                // The captured pawn sits one rank behind the landing square,
                // relative to the mover's direction.
                let victim = Square::new(
                    mv.end.file(),
                    (mv.end.rank() as i8 - mover.pawn_direction()) as u8,
                );
                self.board.set_piece(victim, Piece::EMPTY);
                pawn_or_capture = true;
            }

            MoveFlag::Promote(promotion) => {
                // A queen flag is the generator's default proposal; the
                // session's pending choice substitutes for it.
                let chosen = match promotion {
                    Promotion::Queen => self.promotion_choice,
                    explicit => explicit,
                };
                self.board.set_piece(mv.end, Piece::new(mover, chosen.kind()));
                self.promotion_choice = Promotion::Queen;
            }

            MoveFlag::PawnDoublePush => {
                let skipped = Square::new(
                    mv.start.file(),
                    (mv.start.rank() + mv.end.rank()) / 2,
                );
                self.board.en_passant = Some(skipped);
            }

            MoveFlag::MayRevokeCastlingRights => {
                if piece.is_kind(PieceKind::King) {
                    self.board.castling.revoke_all(mover);
                } else if piece.is_kind(PieceKind::Rook) && mv.start.rank() == mover.back_rank() {
                    if mv.start.file() == 1 {
                        self.board.castling.revoke_queenside(mover);
                    } else if mv.start.file() == 8 {
                        self.board.castling.revoke_kingside(mover);
                    }
                }
            }
        }

        self.board.advance_turn();

        if pawn_or_capture {
            self.board.halfmove_clock = 0;
        } else {
            self.board.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.board.fullmove_number += 1;
        }
    }

    // -----------------------------------------------------------------
    // Undo
    // -----------------------------------------------------------------

    /// Restore the single saved previous position. Exactly one ply deep:
    /// a second undo without an intervening commit reports
    /// [`GameError::NothingToUndo`].
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.held.is_some() {
            return Err(GameError::PieceHeld);
        }
        let snapshot = self.snapshot.take().ok_or(GameError::NothingToUndo)?;
        self.board = snapshot.board;
        self.last_move = snapshot.last_move;
        self.selected = None;
        self.debug_assert_invariants();
        Ok(())
    }

    // -----------------------------------------------------------------
    // Invariants
    // -----------------------------------------------------------------

    fn debug_assert_invariants(&self) {
        #[cfg(any(debug_assertions, test))]
        {
            // While a piece is held the mailbox is intentionally one short.
            if self.held.is_none() {
                self.board.assert_invariants();
            }
            assert!(
                self.selected.is_none() || self.held.is_none(),
                "a piece is both selected and held"
            );
        }
    }
}

// -------------------------------------------------------------------------
// Castling geometry
// -------------------------------------------------------------------------

/// The rook's relocation for a castling move by `mover`.
fn castling_rook_squares(flag: MoveFlag, mover: Color) -> (Square, Square) {
    let rank = mover.back_rank();
    match flag {
        MoveFlag::CastleKingside => (Square::new(8, rank), Square::new(6, rank)),
        MoveFlag::CastleQueenside => (Square::new(1, rank), Square::new(4, rank)),
        _ => unreachable!("not a castling flag: {flag:?}"),
    }
}

// =========================================================================
// Tests
// =========================================================================
