use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::info;

use crate::board::{Board, Operation, Piece};
use crate::error::{GameError, ParseError};
use crate::movegen::legal_actions;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::Difficulty;

/// Who decides the moves for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Agent {
    /// Actions arrive from outside and are validated before they are applied.
    Human,
    /// Actions are produced by the search engine.
    Computer(Difficulty),
}

impl Agent {
    pub fn is_human(&self) -> bool { matches!(self, Agent::Human) }
}

impl FromStr for Agent {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("human") { return Ok(Agent::Human); }
        s.parse::<Difficulty>().map(Agent::Computer)
    }
}

/// Turn scheduler around one live board. White moves first; a turn that
/// closes a mill continues with the same side's capture.
pub struct Game {
    board: Board,
    players: [Agent; 2],
    turn: usize,
    aborted: Arc<AtomicBool>,
}

impl Game {
    pub fn new(white: Agent, black: Agent) -> Self {
        Self { board: Board::new(), players: [white, black], turn: 0, aborted: Arc::new(AtomicBool::new(false)) }
    }

    /// Resumes play from an existing position with `to_move` acting next.
    pub fn from_position(board: Board, to_move: Piece, white: Agent, black: Agent) -> Self {
        let turn = if to_move == Piece::Black { 1 } else { 0 };
        Self { board, players: [white, black], turn, aborted: Arc::new(AtomicBool::new(false)) }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn turn(&self) -> usize { self.turn }
    pub fn is_over(&self) -> bool { self.board.is_terminal() }
    pub fn winner(&self) -> Option<Piece> { self.board.winner() }

    pub fn to_move(&self) -> Piece {
        if self.turn % 2 == 0 { Piece::White } else { Piece::Black }
    }

    pub fn current_agent(&self) -> Agent { self.players[self.turn % 2] }

    pub fn legal_actions(&self) -> Vec<Operation> {
        legal_actions(&self.board, self.to_move()).collect()
    }

    /// Shared flag another thread can raise to cancel the computer's turn.
    /// It is only looked at before a search starts and after it returns.
    pub fn abort_handle(&self) -> Arc<AtomicBool> { self.aborted.clone() }

    pub fn abort(&self) { self.aborted.store(true, Ordering::SeqCst); }

    /// Applies an action chosen by a human player.
    pub fn submit(&mut self, op: Operation) -> Result<(), GameError> {
        if !self.current_agent().is_human() { return Err(GameError::NotHumanTurn); }
        self.act(op)
    }

    /// Lets the computer player pick and apply its next action.
    pub fn play_computer(&mut self, on_progress: Option<&mut dyn FnMut(f64)>) -> Result<Operation, GameError> {
        let Agent::Computer(level) = self.current_agent() else { return Err(GameError::NotComputerTurn) };
        if self.is_over() { return Err(GameError::GameOver); }
        if self.aborted.swap(false, Ordering::SeqCst) { return Err(GameError::Aborted); }

        let color = self.to_move();
        let params = SearchParams { depth: level.depth() };
        let result = Searcher::new()
            .search_with_params(&self.board, color, params, on_progress)
            .map_err(|_| GameError::NoLegalMoves(color))?;

        if self.aborted.swap(false, Ordering::SeqCst) { return Err(GameError::Aborted); }
        self.act(result.best)?;
        Ok(result.best)
    }

    fn act(&mut self, op: Operation) -> Result<(), GameError> {
        if self.is_over() { return Err(GameError::GameOver); }
        let color = self.to_move();
        if op.color() != color { return Err(GameError::OutOfTurn(op.color())); }
        self.board.apply(op)?;
        if !self.board.phase().is_removal() {
            self.board.check_board_state(color.invert());
            self.turn += 1;
            info!("turn {} done: {}", self.turn, op);
            if let Some(w) = self.board.winner() { info!("{:?} wins after {} turns", w, self.turn); }
        }
        Ok(())
    }

    /// Rolls back the last full turn, or the half-finished current turn when
    /// a capture is pending. Returns false if there was nothing to undo.
    pub fn undo_turn(&mut self) -> bool {
        if self.board.phase().is_removal() { return self.board.undo().is_some(); }
        if self.turn == 0 || self.board.history().is_empty() { return false; }
        self.turn -= 1;
        while let Some(op) = self.board.undo() {
            if !op.is_remove() { break; }
        }
        true
    }

    /// Takes back moves until a human is to act again at the start of one of
    /// their turns. A pending capture only rolls back its own half turn.
    pub fn undo_for_human(&mut self) -> bool {
        if self.board.phase().is_removal() { return self.undo_turn(); }
        let steps = if self.players.iter().all(Agent::is_human) { 1 } else { 2 };
        let mut undone = false;
        for _ in 0..steps { undone |= self.undo_turn(); }
        while !self.current_agent().is_human() && self.undo_turn() { undone = true; }
        undone
    }
}
