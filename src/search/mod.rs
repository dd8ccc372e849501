pub mod alphabeta;
pub mod eval;

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Operation, Piece};
use crate::error::{ParseError, SearchError};

/// Engine strength, expressed as look-ahead depth in plies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::BadAgent(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self { Difficulty::Easy => "easy", Difficulty::Medium => "medium", Difficulty::Hard => "hard" };
        f.write_str(name)
    }
}

/// One-shot search with a fresh [`alphabeta::Searcher`].
pub fn best_move(
    board: &Board,
    color: Piece,
    depth: u32,
    on_progress: Option<&mut dyn FnMut(f64)>,
) -> Result<Operation, SearchError> {
    alphabeta::Searcher::new().best_move(board, color, depth, on_progress).map(|r| r.best)
}
