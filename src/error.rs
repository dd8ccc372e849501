use thiserror::Error;

use crate::board::{Phase, Piece, Position};

/// Reasons `Board::apply` refuses an operation. The board is untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("{0:?} is not a player color")]
    InvalidColor(Piece),
    #[error("operation not allowed during {0:?}")]
    WrongPhase(Phase),
    #[error("{0:?} has no pieces left in hand")]
    NoPiecesInHand(Piece),
    #[error("position {0} is occupied")]
    Occupied(Position),
    #[error("position {0} does not hold a {1:?} piece")]
    NotOwnPiece(Position, Piece),
    #[error("position {to} is not adjacent to {from}")]
    NotAdjacent { from: Position, to: Position },
    #[error("position {0} does not hold an opponent piece")]
    NotOpponentPiece(Position),
    #[error("position {0} is protected by a mill")]
    ProtectedByMill(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no legal moves")]
    NoLegalMoves,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("illegal operation: {0}")]
    Illegal(#[from] RuleError),
    #[error("{0:?} has no legal moves")]
    NoLegalMoves(Piece),
    #[error("it is not {0:?}'s turn")]
    OutOfTurn(Piece),
    #[error("the game is over")]
    GameOver,
    #[error("it is not a human player's turn")]
    NotHumanTurn,
    #[error("it is not a computer player's turn")]
    NotComputerTurn,
    #[error("turn aborted")]
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("invalid position '{0}'")]
    BadPosition(String),
    #[error("unrecognized action '{0}' (expected @N, N-M or xN)")]
    BadAction(String),
    #[error("unknown player kind '{0}'")]
    BadAgent(String),
}
