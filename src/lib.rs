// Mill game engine: rules, move generation and alpha-beta search
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;
pub mod selfplay;

// Re-exports for the common entry points
pub use board::{Board, Operation, Phase, Piece, Position};
pub use movegen::legal_actions;
pub use search::best_move;
