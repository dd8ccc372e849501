pub mod op;
pub mod topology;

use log::debug;

use crate::error::RuleError;
pub use op::{HistoryEntry, Operation, Transition};
pub use topology::{Position, Triad, SLOTS, TRIADS};

pub const PIECES_PER_SIDE: u8 = 9;
/// A side with this many pieces on the board (or fewer) may jump anywhere.
pub const FLY_LIMIT: u8 = 3;
/// Losing this many pieces leaves two on the board, which loses the game.
pub const LOSING_CAPTURES: u8 = 7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    White,
    Black,
    #[default]
    Empty,
}

impl Piece {
    pub const fn invert(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            Piece::Empty => Piece::Empty,
        }
    }

    pub const fn is_color(self) -> bool { !matches!(self, Piece::Empty) }

    // Counter slot; only meaningful for the two colors.
    fn slot(self) -> usize { if self == Piece::Black { 1 } else { 0 } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Placing,
    Moving,
    RemoveAfterPlace,
    RemoveAfterMove,
    BlackWins,
    WhiteWins,
    Draw,
}

impl Phase {
    pub fn is_removal(self) -> bool { matches!(self, Phase::RemoveAfterPlace | Phase::RemoveAfterMove) }
    pub fn is_terminal(self) -> bool { matches!(self, Phase::BlackWins | Phase::WhiteWins | Phase::Draw) }

    pub fn win_for(color: Piece) -> Phase {
        if color == Piece::Black { Phase::BlackWins } else { Phase::WhiteWins }
    }
}

/// Complete game state. All mutation goes through [`Board::apply`] and is
/// logged so that [`Board::undo`] can reverse it step by step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    occupancy: [Piece; SLOTS],
    phase: Phase,
    in_hand: [u8; 2],
    captured: [u8; 2],
    history: Vec<HistoryEntry>,
}

impl Default for Board {
    fn default() -> Self { Self::new() }
}

impl Board {
    pub fn new() -> Self {
        Self {
            occupancy: [Piece::Empty; SLOTS],
            phase: Phase::Placing,
            in_hand: [PIECES_PER_SIDE; 2],
            captured: [0; 2],
            history: Vec::new(),
        }
    }

    /// Builds a position directly. Pieces missing from the board and not in
    /// hand count as captured. Returns `None` for overlapping or oversized
    /// layouts.
    pub fn setup(white: &[Position], black: &[Position], in_hand_white: u8, in_hand_black: u8) -> Option<Self> {
        let mut board = Self::new();
        for (color, list, hand) in [(Piece::White, white, in_hand_white), (Piece::Black, black, in_hand_black)] {
            let on_board = u8::try_from(list.len()).ok()?;
            if on_board.checked_add(hand)? > PIECES_PER_SIDE { return None; }
            for &pos in list {
                if board.occupancy[pos.index()] != Piece::Empty { return None; }
                board.occupancy[pos.index()] = color;
            }
            board.in_hand[color.slot()] = hand;
            board.captured[color.slot()] = PIECES_PER_SIDE - hand - on_board;
        }
        if in_hand_white == 0 && in_hand_black == 0 { board.phase = Phase::Moving; }
        Some(board)
    }

    pub fn phase(&self) -> Phase { self.phase }
    pub fn occupancy(&self) -> &[Piece; SLOTS] { &self.occupancy }
    pub fn at(&self, pos: Position) -> Piece { self.occupancy[pos.index()] }
    pub fn history(&self) -> &[HistoryEntry] { &self.history }
    pub fn is_terminal(&self) -> bool { self.phase.is_terminal() }

    pub fn in_hand(&self, color: Piece) -> u8 {
        if color.is_color() { self.in_hand[color.slot()] } else { 0 }
    }

    pub fn captured(&self, color: Piece) -> u8 {
        if color.is_color() { self.captured[color.slot()] } else { 0 }
    }

    pub fn on_board(&self, color: Piece) -> u8 {
        self.occupancy.iter().filter(|&&p| p == color).count() as u8
    }

    pub fn winner(&self) -> Option<Piece> {
        match self.phase {
            Phase::WhiteWins => Some(Piece::White),
            Phase::BlackWins => Some(Piece::Black),
            _ => None,
        }
    }

    /// True when the piece at `pos` completes one of its two triads.
    pub fn is_in_mill(&self, pos: Position) -> bool {
        let piece = self.at(pos);
        piece.is_color() && pos.triads().iter().any(|t| self.triad_owner(t) == Some(piece))
    }

    /// Owner of a fully occupied, single-colored triad.
    pub fn triad_owner(&self, triad: &Triad) -> Option<Piece> {
        let first = self.at(triad[0]);
        (first.is_color() && triad.iter().all(|&p| self.at(p) == first)).then_some(first)
    }

    pub fn has_unprotected_piece(&self, color: Piece) -> bool {
        Position::all().any(|p| self.at(p) == color && !self.is_in_mill(p))
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        pos.neighbors().iter().all(|&n| self.at(n) != Piece::Empty)
    }

    pub fn can_fly(&self, color: Piece) -> bool { self.on_board(color) <= FLY_LIMIT }

    /// Whether `color` has any move in the moving phase.
    pub fn has_mobile_piece(&self, color: Piece) -> bool {
        if self.can_fly(color) {
            self.on_board(color) > 0 && self.occupancy.contains(&Piece::Empty)
        } else {
            Position::all().any(|p| self.at(p) == color && !self.is_blocked(p))
        }
    }

    /// Side to act after `mover` has acted: the mover again while a capture
    /// is pending, otherwise the opponent.
    pub fn next_to_move(&self, mover: Piece) -> Piece {
        if self.phase.is_removal() { mover } else { mover.invert() }
    }

    /// True if the most recent completed action was a capture.
    pub fn last_turn_captured(&self) -> bool {
        self.history.iter().rev().find_map(|e| match e {
            HistoryEntry::Op(op) => Some(op.is_remove()),
            HistoryEntry::Transition(_) => None,
        }).unwrap_or(false)
    }

    /// Checks `op` against the rules without touching the board.
    pub fn validate(&self, op: &Operation) -> Result<(), RuleError> {
        let color = op.color();
        if !color.is_color() { return Err(RuleError::InvalidColor(color)); }
        match *op {
            Operation::Place { to, .. } => {
                if self.phase != Phase::Placing { return Err(RuleError::WrongPhase(self.phase)); }
                if self.in_hand(color) == 0 { return Err(RuleError::NoPiecesInHand(color)); }
                if self.at(to) != Piece::Empty { return Err(RuleError::Occupied(to)); }
            }
            Operation::Move { from, to, .. } => {
                if self.phase != Phase::Moving { return Err(RuleError::WrongPhase(self.phase)); }
                if self.at(from) != color { return Err(RuleError::NotOwnPiece(from, color)); }
                if self.at(to) != Piece::Empty { return Err(RuleError::Occupied(to)); }
                if !self.can_fly(color) && !from.is_adjacent(to) { return Err(RuleError::NotAdjacent { from, to }); }
            }
            Operation::Remove { target, .. } => {
                if !self.phase.is_removal() { return Err(RuleError::WrongPhase(self.phase)); }
                let opponent = color.invert();
                if self.at(target) != opponent { return Err(RuleError::NotOpponentPiece(target)); }
                if self.is_in_mill(target) && self.has_unprotected_piece(opponent) {
                    return Err(RuleError::ProtectedByMill(target));
                }
            }
        }
        Ok(())
    }

    /// The single mutation entry point. Rejected operations leave the board
    /// exactly as it was.
    pub fn apply(&mut self, op: Operation) -> Result<(), RuleError> {
        if let Err(e) = self.validate(&op) {
            debug!("rejected {:?}: {}", op, e);
            return Err(e);
        }
        self.history.push(HistoryEntry::Op(op));
        match op {
            Operation::Place { color, to } => {
                self.occupancy[to.index()] = color;
                self.in_hand[color.slot()] -= 1;
                if self.is_in_mill(to) {
                    self.record(Transition::PlacingToRemove, Phase::RemoveAfterPlace);
                } else {
                    self.finish_placing();
                }
            }
            Operation::Move { color, from, to } => {
                self.occupancy[from.index()] = Piece::Empty;
                self.occupancy[to.index()] = color;
                if self.is_in_mill(to) {
                    self.record(Transition::MovingToRemove, Phase::RemoveAfterMove);
                }
            }
            Operation::Remove { color, target } => {
                self.occupancy[target.index()] = Piece::Empty;
                self.captured[color.invert().slot()] += 1;
                if self.phase == Phase::RemoveAfterPlace {
                    self.record(Transition::RemoveToPlacing, Phase::Placing);
                    self.finish_placing();
                } else {
                    self.record(Transition::RemoveToMoving, Phase::Moving);
                }
            }
        }
        Ok(())
    }

    /// Reverses the most recent Place, Move or Remove along with any phase
    /// markers logged after it. Returns the reversed operation, or `None` if
    /// there was nothing to undo.
    pub fn undo(&mut self) -> Option<Operation> {
        while let Some(entry) = self.history.pop() {
            match entry {
                HistoryEntry::Transition(t) => self.phase = t.source(),
                HistoryEntry::Op(op) => {
                    self.reverse(op);
                    return Some(op);
                }
            }
        }
        None
    }

    /// Terminal detection after a completed turn. Only the moving phase can
    /// end the game; the first condition found decides the result.
    pub fn check_board_state(&mut self, next_to_move: Piece) {
        if self.phase != Phase::Moving || !next_to_move.is_color() { return; }
        let outcome = if !self.has_mobile_piece(next_to_move) {
            Some(Phase::win_for(next_to_move.invert()))
        } else if self.captured(Piece::Black) >= LOSING_CAPTURES {
            Some(Phase::WhiteWins)
        } else if self.captured(Piece::White) >= LOSING_CAPTURES {
            Some(Phase::BlackWins)
        } else {
            None
        };
        if let Some(end) = outcome { self.record(Transition::MovingToEnd, end); }
    }

    fn record(&mut self, transition: Transition, phase: Phase) {
        self.phase = phase;
        self.history.push(HistoryEntry::Transition(transition));
    }

    fn finish_placing(&mut self) {
        if self.phase == Phase::Placing && self.in_hand == [0, 0] {
            self.record(Transition::PlacingToMoving, Phase::Moving);
        }
    }

    fn reverse(&mut self, op: Operation) {
        match op {
            Operation::Place { color, to } => {
                self.occupancy[to.index()] = Piece::Empty;
                self.in_hand[color.slot()] += 1;
            }
            Operation::Move { color, from, to } => {
                self.occupancy[to.index()] = Piece::Empty;
                self.occupancy[from.index()] = color;
            }
            Operation::Remove { color, target } => {
                let opponent = color.invert();
                self.occupancy[target.index()] = opponent;
                self.captured[opponent.slot()] -= 1;
            }
        }
    }
}
