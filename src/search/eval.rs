use crate::board::{Board, Phase, Piece, Position, Triad, TRIADS};

// Terminal scoring helpers
pub const WIN_SCORE: i64 = 10_000_000_000;
pub const DRAW_SCORE: i64 = 0;

/// Tuned feature weights; one table per game regime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    pub closed_mill: i64,
    pub mills: i64,
    pub blocked: i64,
    pub pieces: i64,
    pub open_pairs: i64,
    pub forks: i64,
    pub double_mills: i64,
}

pub const PLACING_WEIGHTS: Weights = Weights {
    closed_mill: 18, mills: 26, blocked: 1, pieces: 9, open_pairs: 10, forks: 7, double_mills: 0,
};

pub const MOVING_WEIGHTS: Weights = Weights {
    closed_mill: 14, mills: 43, blocked: 10, pieces: 11, open_pairs: 0, forks: 0, double_mills: 8,
};

// Side to move is down to three pieces and may jump.
pub const FLYING_WEIGHTS: Weights = Weights {
    closed_mill: 16, mills: 0, blocked: 0, pieces: 0, open_pairs: 10, forks: 1, double_mills: 0,
};

/// Feature differentials, each positive when it favours the searcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub closed_mill: i64,
    pub mills: i64,
    pub blocked: i64,
    pub pieces: i64,
    pub open_pairs: i64,
    pub forks: i64,
    pub double_mills: i64,
}

impl Features {
    pub fn compute(board: &Board, searcher: Piece, to_move: Piece) -> Self {
        let opponent = searcher.invert();
        let mut f = Features {
            pieces: board.on_board(searcher) as i64 - board.on_board(opponent) as i64,
            ..Default::default()
        };

        if board.last_turn_captured() {
            f.closed_mill = if to_move == searcher { -1 } else { 1 };
        }

        for triad in TRIADS.iter() {
            if let Some(owner) = board.triad_owner(triad) {
                f.mills += side(owner, searcher);
            }
            for color in [searcher, opponent] {
                if is_open_pair(board, triad, color) { f.open_pairs += side(color, searcher); }
            }
        }

        for pos in Position::all() {
            let piece = board.at(pos);
            if !piece.is_color() { continue; }
            // A blocked piece is a liability for its owner.
            if board.is_blocked(pos) { f.blocked -= side(piece, searcher); }
            let [a, b] = pos.triads();
            if is_fork_arm(board, pos, a, piece) && is_fork_arm(board, pos, b, piece) {
                f.forks += side(piece, searcher);
            }
            if board.triad_owner(a) == Some(piece) && board.triad_owner(b) == Some(piece) {
                f.double_mills += side(piece, searcher);
            }
        }
        f
    }

    pub fn score(&self, w: &Weights) -> i64 {
        w.closed_mill * self.closed_mill
            + w.mills * self.mills
            + w.blocked * self.blocked
            + w.pieces * self.pieces
            + w.open_pairs * self.open_pairs
            + w.forks * self.forks
            + w.double_mills * self.double_mills
    }
}

/// Weight table for the current phase; `None` once the game is decided.
pub fn weights_for(board: &Board, to_move: Piece) -> Option<&'static Weights> {
    match board.phase() {
        Phase::Placing | Phase::RemoveAfterPlace => Some(&PLACING_WEIGHTS),
        Phase::Moving | Phase::RemoveAfterMove if board.can_fly(to_move) => Some(&FLYING_WEIGHTS),
        Phase::Moving | Phase::RemoveAfterMove => Some(&MOVING_WEIGHTS),
        Phase::BlackWins | Phase::WhiteWins | Phase::Draw => None,
    }
}

/// Static evaluation from the searcher's point of view.
pub fn evaluate(board: &Board, searcher: Piece, to_move: Piece) -> i64 {
    match weights_for(board, to_move) {
        Some(w) => Features::compute(board, searcher, to_move).score(w),
        None => terminal_score(board, searcher),
    }
}

pub fn terminal_score(board: &Board, searcher: Piece) -> i64 {
    match board.winner() {
        Some(w) if w == searcher => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => DRAW_SCORE,
    }
}

fn side(piece: Piece, searcher: Piece) -> i64 {
    if piece == searcher { 1 } else { -1 }
}

// The pivot's neighbour in `triad` is its own color and the remaining slot is
// empty, so the pivot and its two arms form an L with open ends.
fn is_fork_arm(board: &Board, pivot: Position, triad: &Triad, color: Piece) -> bool {
    let mut own = false;
    let mut open = false;
    for &p in triad.iter().filter(|&&p| p != pivot) {
        match board.at(p) {
            c if c == color && pivot.is_adjacent(p) => own = true,
            Piece::Empty => open = true,
            _ => return false,
        }
    }
    own && open
}

// Two of `color` and one empty slot.
fn is_open_pair(board: &Board, triad: &Triad, color: Piece) -> bool {
    let own = triad.iter().filter(|&&p| board.at(p) == color).count();
    let empty = triad.iter().filter(|&&p| board.at(p) == Piece::Empty).count();
    own == 2 && empty == 1
}
