use crate::board::{Board, Piece};
use crate::movegen::legal_actions;

// Leaf count of the action tree. A capture after a mill is its own ply, and
// decided positions are leaves.
pub fn perft(board: &Board, to_move: Piece, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for op in legal_actions(board, to_move) {
        let mut child = board.clone();
        if child.apply(op).is_err() { continue; }
        let next = child.next_to_move(to_move);
        child.check_board_state(next);
        nodes += if child.is_terminal() { 1 } else { perft(&child, next, depth - 1) };
    }
    nodes
}

// Same count, walking a single board with apply/undo instead of cloning.
pub fn perft_undo(board: &mut Board, to_move: Piece, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let actions: Vec<_> = legal_actions(board, to_move).collect();
    let mut nodes = 0u64;
    for op in actions {
        if board.apply(op).is_err() { continue; }
        let next = board.next_to_move(to_move);
        board.check_board_state(next);
        nodes += if board.is_terminal() { 1 } else { perft_undo(board, next, depth - 1) };
        board.undo();
    }
    nodes
}
