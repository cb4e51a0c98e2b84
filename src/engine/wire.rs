//! Move codec for the agent boundary.
//!
//! When the opponent lives across an HTTP or WASM boundary, moves travel as a
//! 4-character start+end algebraic pair, optionally suffixed with `:` and an
//! integer flag code: `"e2e4"`, `"e5d6:1"`, `"e7e8:7"`. The mapping between
//! codes and [`MoveFlag`] is lossless in both directions; a move arriving
//! without a suffix decodes with [`MoveFlag::None`] and is resolved against
//! the generated move set by [`GameSession::commit`].
//!
//! [`GameSession::commit`]: crate::engine::game::GameSession::commit

use crate::engine::types::{Move, MoveFlag, Promotion, Square, WireError};

/// Separator between the square pair and the flag code.
const FLAG_SEPARATOR: char = ':';

// =========================================================================
// Flag codes
// =========================================================================

/// The integer wire code for a move flag.
pub fn flag_code(flag: MoveFlag) -> u8 {
    match flag {
        MoveFlag::None => 0,
        MoveFlag::EnPassant => 1,
        MoveFlag::CastleKingside => 2,
        MoveFlag::CastleQueenside => 3,
        MoveFlag::Promote(Promotion::Queen) => 4,
        MoveFlag::Promote(Promotion::Rook) => 5,
        MoveFlag::Promote(Promotion::Bishop) => 6,
        MoveFlag::Promote(Promotion::Knight) => 7,
        MoveFlag::PawnDoublePush => 8,
        MoveFlag::MayRevokeCastlingRights => 9,
    }
}

/// The move flag for an integer wire code.
pub fn flag_from_code(code: u8) -> Result<MoveFlag, WireError> {
    match code {
        0 => Ok(MoveFlag::None),
        1 => Ok(MoveFlag::EnPassant),
        2 => Ok(MoveFlag::CastleKingside),
        3 => Ok(MoveFlag::CastleQueenside),
        4 => Ok(MoveFlag::Promote(Promotion::Queen)),
        5 => Ok(MoveFlag::Promote(Promotion::Rook)),
        6 => Ok(MoveFlag::Promote(Promotion::Bishop)),
        7 => Ok(MoveFlag::Promote(Promotion::Knight)),
        8 => Ok(MoveFlag::PawnDoublePush),
        9 => Ok(MoveFlag::MayRevokeCastlingRights),
        other => Err(WireError::UnknownFlagCode(other)),
    }
}

// =========================================================================
// Encode / decode
// =========================================================================

/// Render a move as wire text. The flag suffix is omitted for plain moves.
pub fn encode_move(mv: Move) -> String {
    match flag_code(mv.flag) {
        0 => format!("{}{}", mv.start.to_algebraic(), mv.end.to_algebraic()),
        code => format!(
            "{}{}{}{}",
            mv.start.to_algebraic(),
            mv.end.to_algebraic(),
            FLAG_SEPARATOR,
            code
        ),
    }
}

/// Parse wire text back into a move.
pub fn decode_move(text: &str) -> Result<Move, WireError> {
    if text.len() < 4 {
        return Err(WireError::TooShort(text.to_string()));
    }
    let start_text = text.get(0..2).ok_or_else(|| WireError::TooShort(text.to_string()))?;
    let end_text = text.get(2..4).ok_or_else(|| WireError::TooShort(text.to_string()))?;
    let rest = text.get(4..).unwrap_or("");

    let start = Square::from_algebraic(start_text)
        .ok_or_else(|| WireError::BadSquare(start_text.to_string()))?;
    let end = Square::from_algebraic(end_text)
        .ok_or_else(|| WireError::BadSquare(end_text.to_string()))?;

    let flag = if rest.is_empty() {
        MoveFlag::None
    } else {
        let code_text = rest
            .strip_prefix(FLAG_SEPARATOR)
            .ok_or_else(|| WireError::BadFlagSuffix(rest.to_string()))?;
        let code = code_text
            .parse::<u8>()
            .map_err(|_| WireError::BadFlagSuffix(rest.to_string()))?;
        flag_from_code(code)?
    };

    Ok(Move::with_flag(start, end, flag))
}

// =========================================================================
// Tests
// =========================================================================
