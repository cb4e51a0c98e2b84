use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The bit this color occupies in a packed [`Piece`].
    #[inline]
    pub(crate) const fn mask(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 0b1000,
        }
    }

    /// Rank 1 for White, rank 8 for Black.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// The direction this color's pawns advance in (`+1` or `-1` ranks).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds. Discriminants are the packed bit patterns; `0` is
/// reserved for the empty square so no (color, kind) pair collides with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All piece kinds in packed-value order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub(crate) const fn from_bits(bits: u8) -> Option<PieceKind> {
        match bits {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Single FEN letter: uppercase for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a FEN piece letter; case decides the color.
    pub fn from_char(c: char) -> Option<(Color, PieceKind)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A board occupant packed into one byte: bit 3 is the color, bits 0-2 the
/// kind. The all-zero value is the empty square and is disjoint from every
/// (color, kind) pair, so equality and extraction need no branching on
/// emptiness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece(u8);

impl Piece {
    /// The empty square.
    pub const EMPTY: Piece = Piece(0);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece(color.mask() | kind as u8)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The piece kind, or `None` for the empty square.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        PieceKind::from_bits(self.0 & 0b0111)
    }

    /// The piece color, or `None` for the empty square.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        if self.is_empty() {
            None
        } else if self.0 & 0b1000 == 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// True for a non-empty piece of the given color.
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        !self.is_empty() && self.0 & 0b1000 == color.mask()
    }

    /// True for a non-empty piece of the given kind.
    #[inline]
    pub fn is_kind(self, kind: PieceKind) -> bool {
        self.0 & 0b0111 == kind as u8
    }

    /// True when both pieces are non-empty and share a color.
    #[inline]
    pub fn same_color(self, other: Piece) -> bool {
        !self.is_empty() && !other.is_empty() && (self.0 ^ other.0) & 0b1000 == 0
    }

    /// FEN letter, or `None` for the empty square.
    pub fn to_char(self) -> Option<char> {
        match (self.color(), self.kind()) {
            (Some(color), Some(kind)) => Some(kind.to_char(color)),
            _ => None,
        }
    }

    /// Parse a FEN piece letter.
    pub fn from_char(c: char) -> Option<Piece> {
        PieceKind::from_char(c).map(|(color, kind)| Piece::new(color, kind))
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board location addressed by (file 1-8, rank 1-8), equivalently algebraic
/// `"a1"`-`"h8"`. Both coordinates are always in range; arithmetic that would
/// leave the board reports "no square" rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub const COUNT: usize = 64;

    /// Build a square from 1-based file and rank numbers.
    #[inline]
    pub fn new(file: u8, rank: u8) -> Square {
        debug_assert!(
            (1..=8).contains(&file) && (1..=8).contains(&rank),
            "file/rank out of range: {file},{rank}"
        );
        Square { file, rank }
    }

    /// File number, 1 (a) through 8 (h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank number, 1 through 8.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Mailbox index: `(rank-1)*8 + (file-1)`.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    #[inline]
    pub fn from_index(index: usize) -> Square {
        debug_assert!(index < 64, "square index out of range: {index}");
        Square {
            file: (index % 8) as u8 + 1,
            rank: (index / 8) as u8 + 1,
        }
    }

    /// Shift by file/rank deltas. `None` means the result would leave the
    /// board — an expected condition the move generator filters, never an
    /// error.
    #[inline]
    pub fn shifted(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Parse algebraic notation like `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Some(Square {
                file: file + 1,
                rank: rank + 1,
            })
        } else {
            None
        }
    }

    /// Convert to algebraic notation like `"e4"`.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file - 1) as char;
        let rank = (b'1' + self.rank - 1) as char;
        format!("{file}{rank}")
    }

    /// Iterate every square, a1 through h8 in mailbox order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

// ---------------------------------------------------------------------------
// Promotion
// ---------------------------------------------------------------------------

/// The piece kinds a pawn may promote to. A dedicated enum keeps king/pawn
/// promotions unrepresentable instead of checked at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Queen => PieceKind::Queen,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Knight => PieceKind::Knight,
        }
    }

    pub fn from_kind(kind: PieceKind) -> Option<Promotion> {
        match kind {
            PieceKind::Queen => Some(Promotion::Queen),
            PieceKind::Rook => Some(Promotion::Rook),
            PieceKind::Bishop => Some(Promotion::Bishop),
            PieceKind::Knight => Some(Promotion::Knight),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

// ---------------------------------------------------------------------------
// MoveFlag & Move
// ---------------------------------------------------------------------------

/// Special behavior attached to a move. A plain relocation (with capture of
/// whatever sits on the destination) carries `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveFlag {
    #[default]
    None,
    /// Capture the pawn that just double-pushed past us.
    EnPassant,
    CastleKingside,
    CastleQueenside,
    /// Pawn reaches the far rank; the generator always proposes the queen and
    /// the session may substitute the pending promotion choice at commit.
    Promote(Promotion),
    /// Opens en-passant eligibility for the opponent's next move.
    PawnDoublePush,
    /// A king or rook left its home square; commit re-evaluates the mover's
    /// castling rights.
    MayRevokeCastlingRights,
}

/// A move: start square, end square, and special-behavior flag. Moves are
/// plain values and never reference the board they were generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub flag: MoveFlag,
}

impl Move {
    #[inline]
    pub fn new(start: Square, end: Square) -> Move {
        Move {
            start,
            end,
            flag: MoveFlag::None,
        }
    }

    #[inline]
    pub fn with_flag(start: Square, end: Square, flag: MoveFlag) -> Move {
        Move { start, end, flag }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let MoveFlag::Promote(promotion) = self.flag {
            write!(f, "={}", promotion.kind().to_char(Color::Black))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CastlingRights
// ---------------------------------------------------------------------------

/// Four independent castling-availability flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    #[inline]
    pub fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }

    /// Parse a FEN castling field (`"KQkq"` subset or `"-"`).
    pub fn from_fen(s: &str) -> Option<CastlingRights> {
        if s == "-" {
            return Some(CastlingRights::NONE);
        }
        let mut rights = CastlingRights::NONE;
        for c in s.chars() {
            match c {
                'K' => rights.white_kingside = true,
                'Q' => rights.white_queenside = true,
                'k' => rights.black_kingside = true,
                'q' => rights.black_queenside = true,
                _ => return None,
            }
        }
        Some(rights)
    }

    /// Render as a FEN castling field.
    pub fn to_fen(self) -> String {
        if self == CastlingRights::NONE {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        if self.white_kingside {
            s.push('K');
        }
        if self.white_queenside {
            s.push('Q');
        }
        if self.black_kingside {
            s.push('k');
        }
        if self.black_queenside {
            s.push('q');
        }
        s
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

// ---------------------------------------------------------------------------
// PlayerKind
// ---------------------------------------------------------------------------

/// Who controls a color in a game session: a person at the input layer, or an
/// external agent (random mover, search service, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    Human,
    Bot,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Malformed FEN input. Each variant carries the offending field or character
/// so the caller can report precisely what was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 FEN fields, got {0}")]
    WrongFieldCount(usize),

    #[error("expected 8 ranks in the piece placement, got {0}")]
    WrongRankCount(usize),

    #[error("invalid character '{0}' in the piece placement")]
    BadPieceChar(char),

    #[error("rank {rank} of the piece placement describes {width} files")]
    BadRankWidth { rank: u8, width: u8 },

    #[error("invalid side to move: '{0}'")]
    BadSideToMove(String),

    #[error("invalid castling availability: '{0}'")]
    BadCastling(String),

    #[error("invalid en passant target: '{0}'")]
    BadEnPassant(String),

    #[error("invalid halfmove clock: '{0}'")]
    BadHalfmoveClock(String),

    #[error("invalid fullmove number: '{0}'")]
    BadFullmoveNumber(String),
}

/// A broken board invariant. These indicate the engine's own state was
/// corrupted; they are never a normal game condition.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardStateError {
    #[error("no {0} king on the board")]
    MissingKing(Color),

    #[error("{color} has {count} kings")]
    KingCount { color: Color, count: usize },

    #[error("{0} pawn on its impossible back rank at {1}")]
    PawnOnBackRank(Color, Square),

    #[error("fullmove number must be at least 1")]
    BadFullmoveNumber,
}

/// Precondition violations of the move generator, distinct from the silent
/// off-board filtering that is part of normal generation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoveGenError {
    #[error("no piece on {0} to generate moves for")]
    MissingPiece(Square),

    #[error("the piece on {0} does not belong to the side to move")]
    WrongSide(Square),

    #[error(transparent)]
    BrokenBoard(#[from] BoardStateError),
}

/// Failures of the game-session API.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("{0} is not a legal move in this position")]
    IllegalMove(Move),

    #[error("cannot promote a pawn to a {0}")]
    BadPromotionChoice(PieceKind),

    #[error("a piece is currently held")]
    PieceHeld,

    #[error("no previous position to restore")]
    NothingToUndo,

    #[error(transparent)]
    MoveGen(#[from] MoveGenError),

    #[error(transparent)]
    BrokenBoard(#[from] BoardStateError),
}

/// Malformed move text at the agent wire boundary.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    #[error("move text '{0}' is too short")]
    TooShort(String),

    #[error("invalid square '{0}' in move text")]
    BadSquare(String),

    #[error("invalid flag suffix '{0}' in move text")]
    BadFlagSuffix(String),

    #[error("unknown move flag code {0}")]
    UnknownFlagCode(u8),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn color_geometry() {
        assert_eq!(Color::White.back_rank(), 1);
        assert_eq!(Color::Black.back_rank(), 8);
        assert_eq!(Color::White.pawn_direction(), 1);
        assert_eq!(Color::Black.pawn_direction(), -1);
    }

    #[test]
    fn empty_piece_is_disjoint_from_all_pieces() {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                assert_ne!(Piece::new(color, kind), Piece::EMPTY);
            }
        }
    }

    #[test]
    fn piece_packing_round_trip() {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                assert_eq!(piece.color(), Some(color));
                assert_eq!(piece.kind(), Some(kind));
                assert!(piece.is_color(color));
                assert!(!piece.is_color(!color));
                assert!(piece.is_kind(kind));
            }
        }
    }

    #[test]
    fn empty_piece_has_no_color_or_kind() {
        assert!(Piece::EMPTY.is_empty());
        assert_eq!(Piece::EMPTY.color(), None);
        assert_eq!(Piece::EMPTY.kind(), None);
        assert!(!Piece::EMPTY.is_color(Color::White));
        assert!(!Piece::EMPTY.is_color(Color::Black));
    }

    #[test]
    fn same_color_requires_two_pieces() {
        let wp = Piece::new(Color::White, PieceKind::Pawn);
        let wq = Piece::new(Color::White, PieceKind::Queen);
        let bn = Piece::new(Color::Black, PieceKind::Knight);
        assert!(wp.same_color(wq));
        assert!(!wp.same_color(bn));
        assert!(!wp.same_color(Piece::EMPTY));
        assert!(!Piece::EMPTY.same_color(Piece::EMPTY));
    }

    #[test]
    fn piece_char_round_trip() {
        for c in "pbnrqkPBNRQK".chars() {
            let piece = Piece::from_char(c).unwrap();
            assert_eq!(piece.to_char(), Some(c));
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::EMPTY.to_char(), None);
    }

    #[test]
    fn square_index_round_trip() {
        for index in 0..Square::COUNT {
            let sq = Square::from_index(index);
            assert_eq!(sq.index(), index);
        }
        assert_eq!(Square::new(1, 1).index(), 0);
        assert_eq!(Square::new(8, 8).index(), 63);
        assert_eq!(Square::new(5, 2).to_algebraic(), "e2");
    }

    #[test]
    fn square_algebraic_round_trip() {
        for sq in Square::all() {
            assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
        }
    }

    #[test]
    fn square_from_algebraic_invalid() {
        assert_eq!(Square::from_algebraic(""), None);
        assert_eq!(Square::from_algebraic("e"), None);
        assert_eq!(Square::from_algebraic("e9"), None);
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
    }

    #[test]
    fn square_shift_stays_on_board() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.shifted(0, 1), Some(Square::from_algebraic("e5").unwrap()));
        assert_eq!(e4.shifted(-1, -1), Some(Square::from_algebraic("d3").unwrap()));

        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!(a1.shifted(-1, 0), None);
        assert_eq!(a1.shifted(0, -1), None);
        let h8 = Square::from_algebraic("h8").unwrap();
        assert_eq!(h8.shifted(1, 0), None);
        assert_eq!(h8.shifted(0, 1), None);
    }

    #[test]
    fn promotion_kind_mapping() {
        assert_eq!(Promotion::Queen.kind(), PieceKind::Queen);
        assert_eq!(Promotion::from_kind(PieceKind::Knight), Some(Promotion::Knight));
        assert_eq!(Promotion::from_kind(PieceKind::King), None);
        assert_eq!(Promotion::from_kind(PieceKind::Pawn), None);
    }

    #[test]
    fn move_display() {
        let m = Move::new(
            Square::from_algebraic("e2").unwrap(),
            Square::from_algebraic("e4").unwrap(),
        );
        assert_eq!(m.to_string(), "e2e4");

        let promo = Move::with_flag(
            Square::from_algebraic("e7").unwrap(),
            Square::from_algebraic("e8").unwrap(),
            MoveFlag::Promote(Promotion::Knight),
        );
        assert_eq!(promo.to_string(), "e7e8=n");
    }

    #[test]
    fn castling_rights_fen_round_trip() {
        for s in ["-", "K", "Kq", "KQkq", "kq", "Q"] {
            let rights = CastlingRights::from_fen(s).unwrap();
            assert_eq!(rights.to_fen(), s);
        }
        assert_eq!(CastlingRights::from_fen("KX"), None);
    }

    #[test]
    fn castling_rights_revocation() {
        let mut rights = CastlingRights::ALL;
        rights.revoke_kingside(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));

        rights.revoke_all(Color::Black);
        assert!(!rights.kingside(Color::Black));
        assert!(!rights.queenside(Color::Black));
        assert!(rights.queenside(Color::White));
    }

    #[test]
    fn error_messages_name_the_offender() {
        assert_eq!(
            FenError::WrongFieldCount(4).to_string(),
            "expected 6 FEN fields, got 4"
        );
        assert_eq!(
            FenError::BadPieceChar('x').to_string(),
            "invalid character 'x' in the piece placement"
        );
        let sq = Square::from_algebraic("e4").unwrap();
        assert_eq!(
            MoveGenError::MissingPiece(sq).to_string(),
            "no piece on e4 to generate moves for"
        );
        assert_eq!(
            BoardStateError::MissingKing(Color::White).to_string(),
            "no white king on the board"
        );
    }
}
