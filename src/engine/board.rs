//! Mailbox chess position representation.
//!
//! `Board` stores piece placement as a flat 64-element array indexed by
//! `(rank-1)*8 + (file-1)`, alongside side to move, castling rights, the
//! en-passant target, and the half/full move counters. Hypothetical moves are
//! tried on a deep copy (`Clone`); the real board is mutated only by the game
//! session's commit step.

use crate::engine::types::{
    BoardStateError, CastlingRights, Color, FenError, Piece, PieceKind, Square,
};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A complete chess position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Piece placement, one [`Piece`] per square in mailbox order.
    squares: [Piece; Square::COUNT],

    /// Whose turn it is.
    pub side_to_move: Color,

    /// Castling availability for both colors.
    pub castling: CastlingRights,

    /// The square a pawn skipped on its immediately preceding double push.
    /// Valid for exactly one reply; cleared every commit unless re-set.
    pub en_passant: Option<Square>,

    /// Moves since the last pawn move or capture (fifty-move bookkeeping).
    pub halfmove_clock: u32,

    /// Starts at 1, incremented after Black moves.
    pub fullmove_number: u32,
}

impl Board {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// An empty board with no pieces and no castling rights.
    pub fn empty() -> Board {
        Board {
            squares: [Piece::EMPTY; Square::COUNT],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    pub fn starting() -> Board {
        Board::from_fen(STARTING_FEN).expect("the starting FEN is always valid")
    }

    // -----------------------------------------------------------------------
    // Square access
    // -----------------------------------------------------------------------

    /// The piece on a square. Total over the 64 valid squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.squares[square.index()]
    }

    /// Place a piece (or [`Piece::EMPTY`]) on a square. Returns whether a
    /// piece was displaced, which is how commit detects captures. Performs no
    /// chess-legality validation.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> bool {
        let index = square.index();
        let displaced = !self.squares[index].is_empty();
        self.squares[index] = piece;
        displaced
    }

    /// Iterate `(square, piece)` over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(|sq| (sq, self.piece_at(sq)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    /// The square holding the given color's king, if one exists. Absence is a
    /// broken invariant; callers that require the king surface
    /// [`BoardStateError::MissingKing`].
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.piece_at(sq) == king)
    }

    // -----------------------------------------------------------------------
    // Turn order
    // -----------------------------------------------------------------------

    /// Flip the side to move. Clocks, rights, and the en-passant target are
    /// the commit step's responsibility, not this primitive's.
    #[inline]
    pub fn advance_turn(&mut self) {
        self.side_to_move = !self.side_to_move;
    }

    // -----------------------------------------------------------------------
    // Invariants
    // -----------------------------------------------------------------------

    /// Verify the board invariants: exactly one king per color, no pawn on
    /// its impossible back rank, fullmove number at least 1.
    pub fn check_invariants(&self) -> Result<(), BoardStateError> {
        for color in [Color::White, Color::Black] {
            let king = Piece::new(color, PieceKind::King);
            let count = Square::all().filter(|&sq| self.piece_at(sq) == king).count();
            if count == 0 {
                return Err(BoardStateError::MissingKing(color));
            }
            if count > 1 {
                return Err(BoardStateError::KingCount { color, count });
            }

            // A pawn can never stand on its own color's back rank.
            let pawn = Piece::new(color, PieceKind::Pawn);
            let impossible_rank = color.back_rank();
            for file in 1..=8 {
                let sq = Square::new(file, impossible_rank);
                if self.piece_at(sq) == pawn {
                    return Err(BoardStateError::PawnOnBackRank(color, sq));
                }
            }
        }
        if self.fullmove_number < 1 {
            return Err(BoardStateError::BadFullmoveNumber);
        }
        Ok(())
    }

    /// Panic on a broken invariant. Compiled only into debug and test builds.
    #[cfg(any(debug_assertions, test))]
    pub fn assert_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("board invariant broken: {err}");
        }
    }

    // -----------------------------------------------------------------------
    // Display (8x8 text grid)
    // -----------------------------------------------------------------------

    /// Render the board as an 8-line text grid, rank 8 at the top.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for rank in (1..=8).rev() {
            s.push((b'0' + rank) as char);
            s.push(' ');
            for file in 1..=8 {
                let ch = self.piece_at(Square::new(file, rank)).to_char().unwrap_or('.');
                s.push(ch);
                if file < 8 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board_string())
    }
}

// ---------------------------------------------------------------------------
// FEN parsing & generation
// ---------------------------------------------------------------------------

impl Board {
    /// Parse a FEN string.
    ///
    /// The string must carry exactly 6 whitespace-separated fields: piece
    /// placement, side to move, castling availability, en-passant target,
    /// halfmove clock, fullmove number. Each field is validated structurally;
    /// chess-level invariants (king counts, pawn ranks) are the caller's
    /// concern and checked by [`Board::check_invariants`].
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount(fields.len()));
        }

        let mut board = Board::empty();

        // ----- Field 1: piece placement, rank 8 down to rank 1 -----
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount(ranks.len()));
        }
        for (i, rank_text) in ranks.iter().enumerate() {
            let rank = 8 - i as u8;
            let mut file: u8 = 1;
            for ch in rank_text.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    // Run-length of empty squares. Summing digits also
                    // accepts ungrouped runs like "11111111", which some
                    // producers emit instead of grouped counts.
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::BadPieceChar(ch));
                    }
                    file += digit as u8;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if file > 8 {
                        return Err(FenError::BadRankWidth { rank, width: file });
                    }
                    board.set_piece(Square::new(file, rank), piece);
                    file += 1;
                } else {
                    return Err(FenError::BadPieceChar(ch));
                }
            }
            if file != 9 {
                return Err(FenError::BadRankWidth {
                    rank,
                    width: file.saturating_sub(1),
                });
            }
        }

        // ----- Field 2: side to move -----
        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        // ----- Field 3: castling availability -----
        board.castling = CastlingRights::from_fen(fields[2])
            .ok_or_else(|| FenError::BadCastling(fields[2].to_string()))?;

        // ----- Field 4: en-passant target -----
        if fields[3] != "-" {
            let target = Square::from_algebraic(fields[3])
                .ok_or_else(|| FenError::BadEnPassant(fields[3].to_string()))?;
            // A skipped square is always on rank 3 or 6.
            if target.rank() != 3 && target.rank() != 6 {
                return Err(FenError::BadEnPassant(fields[3].to_string()));
            }
            board.en_passant = Some(target);
        }

        // ----- Field 5: halfmove clock -----
        board.halfmove_clock = fields[4]
            .parse::<u32>()
            .map_err(|_| FenError::BadHalfmoveClock(fields[4].to_string()))?;

        // ----- Field 6: fullmove number -----
        board.fullmove_number = fields[5]
            .parse::<u32>()
            .map_err(|_| FenError::BadFullmoveNumber(fields[5].to_string()))?;
        if board.fullmove_number < 1 {
            return Err(FenError::BadFullmoveNumber(fields[5].to_string()));
        }

        Ok(board)
    }

    /// Export the position as a FEN string. Consecutive empty squares are
    /// grouped into a single digit per standard FEN, so external move
    /// consumers can parse the output directly.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(80);

        for rank in (1..=8).rev() {
            let mut empty_run = 0u8;
            for file in 1..=8 {
                match self.piece_at(Square::new(file, rank)).to_char() {
                    Some(ch) => {
                        if empty_run > 0 {
                            fen.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        fen.push(ch);
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push((b'0' + empty_run) as char);
            }
            if rank > 1 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        fen.push_str(&self.castling.to_fen());

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push(' ');
        fen.push_str(&self.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number.to_string());

        fen
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
