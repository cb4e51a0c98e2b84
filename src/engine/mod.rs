pub mod board;
pub mod castling;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod types;
pub mod wire;

pub use board::Board;
pub use game::GameSession;
pub use legality::{all_legal_moves, is_in_check, legal_moves, no_legal_moves};
pub use movegen::raw_moves;
pub use types::*;
