use std::time::Instant;

use log::debug;

use crate::board::{Board, Operation, Piece};
use crate::error::SearchError;
use crate::movegen::{count_actions, legal_actions};
use crate::search::eval::{evaluate, terminal_score, WIN_SCORE};
use crate::search::Difficulty;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: Difficulty::Medium.depth() } }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best: Operation,
    pub score: i64,
    pub nodes: u64,
    pub root_moves: usize,
}

/// Plain alpha-beta over cloned boards. A search runs to completion once
/// started; there is no abort check inside the recursion.
#[derive(Default)]
pub struct Searcher {
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn search_with_params(
        &mut self,
        board: &Board,
        color: Piece,
        params: SearchParams,
        on_progress: Option<&mut dyn FnMut(f64)>,
    ) -> Result<SearchResult, SearchError> {
        self.best_move(board, color, params.depth, on_progress)
    }

    /// Picks the best action for `color`. `on_progress` receives the share of
    /// root moves explored so far, in percent, after each one finishes.
    pub fn best_move(
        &mut self,
        board: &Board,
        color: Piece,
        depth: u32,
        mut on_progress: Option<&mut dyn FnMut(f64)>,
    ) -> Result<SearchResult, SearchError> {
        let t0 = Instant::now();
        self.nodes = 0;
        // The action iterator can't be rewound, so count in a separate pass.
        let total = count_actions(board, color);
        if total == 0 { return Err(SearchError::NoLegalMoves); }

        let mut alpha = -WIN_SCORE;
        let mut best: Option<Operation> = None;
        for (explored, op) in legal_actions(board, color).enumerate() {
            let mut child = board.clone();
            if child.apply(op).is_err() { continue; }
            let next = child.next_to_move(color);
            let score = self.node_value(child, depth.saturating_sub(1), color, next, alpha, WIN_SCORE);
            // Keep the first move even if every line loses.
            if score > alpha || best.is_none() {
                alpha = score;
                best = Some(op);
            }
            if let Some(cb) = on_progress.as_mut() {
                cb((explored + 1) as f64 / total as f64 * 100.0);
            }
            if alpha >= WIN_SCORE { break; }
        }

        let best = best.ok_or(SearchError::NoLegalMoves)?;
        debug!(
            "depth={} best={:?} score={} nodes={} elapsed={:.3}s",
            depth, best, alpha, self.nodes, t0.elapsed().as_secs_f64()
        );
        Ok(SearchResult { best, score: alpha, nodes: self.nodes, root_moves: total })
    }

    fn node_value(&mut self, board: Board, depth: u32, searcher: Piece, to_move: Piece, alpha: i64, beta: i64) -> i64 {
        if to_move == searcher {
            self.max_value(board, depth, searcher, to_move, alpha, beta)
        } else {
            self.min_value(board, depth, searcher, to_move, alpha, beta)
        }
    }

    /// Returns `Some(score)` when the node is a leaf: game over or depth
    /// exhausted.
    fn leaf_value(&mut self, board: &mut Board, depth: u32, searcher: Piece, to_move: Piece) -> Option<i64> {
        self.nodes += 1;
        board.check_board_state(to_move);
        if board.is_terminal() { return Some(terminal_score(board, searcher)); }
        if depth == 0 { return Some(evaluate(board, searcher, to_move)); }
        None
    }

    pub(crate) fn max_value(&mut self, mut board: Board, depth: u32, searcher: Piece, to_move: Piece, mut alpha: i64, beta: i64) -> i64 {
        if let Some(v) = self.leaf_value(&mut board, depth, searcher, to_move) { return v; }
        let mut any = false;
        for op in legal_actions(&board, to_move) {
            any = true;
            let mut child = board.clone();
            if child.apply(op).is_err() { continue; }
            let next = child.next_to_move(to_move);
            let score = self.node_value(child, depth - 1, searcher, next, alpha, beta);
            alpha = alpha.max(score);
            if alpha >= beta { return beta; }
        }
        // Stuck in a removal phase with nothing to take.
        if !any { return evaluate(&board, searcher, to_move); }
        alpha
    }

    pub(crate) fn min_value(&mut self, mut board: Board, depth: u32, searcher: Piece, to_move: Piece, alpha: i64, mut beta: i64) -> i64 {
        if let Some(v) = self.leaf_value(&mut board, depth, searcher, to_move) { return v; }
        let mut any = false;
        for op in legal_actions(&board, to_move) {
            any = true;
            let mut child = board.clone();
            if child.apply(op).is_err() { continue; }
            let next = child.next_to_move(to_move);
            let score = self.node_value(child, depth - 1, searcher, next, alpha, beta);
            beta = beta.min(score);
            if alpha >= beta { return alpha; }
        }
        if !any { return evaluate(&board, searcher, to_move); }
        beta
    }
}
