//! Text notation for actions and a terminal diagram of the board.
//!
//! `@5` places on slot 5, `5-6` moves from 5 to 6, `x12` removes the piece on
//! 12. `Display` prefixes the acting color, e.g. `W@5`.

use std::fmt;

use crate::board::{Board, Operation, Piece, Position};
use crate::error::ParseError;

const DIAGRAM: &str = "\
X-----X-----X
|     |     |
| X---X---X |
| |   |   | |
| | X-X-X | |
X-X-X   X-X-X
| | X-X-X | |
| |   |   | |
| X---X---X |
|     |     |
X-----X-----X";

// Slot printed at each 'X' of the diagram, in reading order.
const DIAGRAM_ORDER: [usize; 24] = [
    7, 0, 1, 15, 8, 9, 23, 16, 17, 6, 14, 22, 18, 10, 2, 21, 20, 19, 13, 12, 11, 5, 4, 3,
];

pub fn piece_char(piece: Piece) -> char {
    match piece {
        Piece::White => 'W',
        Piece::Black => 'B',
        Piece::Empty => '.',
    }
}

impl Operation {
    /// Color-free notation, the form accepted by [`parse_action`].
    pub fn notation(&self) -> String {
        match *self {
            Operation::Place { to, .. } => format!("@{}", to),
            Operation::Move { from, to, .. } => format!("{}-{}", from, to),
            Operation::Remove { target, .. } => format!("x{}", target),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", piece_char(self.color()), self.notation())
    }
}

pub fn parse_position(text: &str) -> Result<Position, ParseError> {
    text.trim()
        .parse::<usize>()
        .ok()
        .and_then(Position::new)
        .ok_or_else(|| ParseError::BadPosition(text.trim().to_string()))
}

/// Parses `@N`, `N-M` or `xN` as an action by `color`.
pub fn parse_action(text: &str, color: Piece) -> Result<Operation, ParseError> {
    let text = text.trim();
    if text.is_empty() { return Err(ParseError::Empty); }
    if let Some(rest) = text.strip_prefix('@') {
        return Ok(Operation::Place { color, to: parse_position(rest)? });
    }
    if let Some(rest) = text.strip_prefix('x').or_else(|| text.strip_prefix('X')) {
        return Ok(Operation::Remove { color, target: parse_position(rest)? });
    }
    if let Some((from, to)) = text.split_once('-') {
        return Ok(Operation::Move { color, from: parse_position(from)?, to: parse_position(to)? });
    }
    Err(ParseError::BadAction(text.to_string()))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots = DIAGRAM_ORDER.iter();
        let mut out = String::with_capacity(DIAGRAM.len());
        for ch in DIAGRAM.chars() {
            if ch == 'X' {
                let idx = slots.next().copied().unwrap_or_default();
                out.push(piece_char(self.occupancy()[idx]));
            } else {
                out.push(ch);
            }
        }
        writeln!(f, "{}", out)?;
        write!(
            f,
            "phase: {:?}  in hand W{} B{}  captured W{} B{}",
            self.phase(),
            self.in_hand(Piece::White),
            self.in_hand(Piece::Black),
            self.captured(Piece::White),
            self.captured(Piece::Black)
        )
    }
}
