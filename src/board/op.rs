use super::{Phase, Piece, Position};

/// One atomic, reversible change to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Place { color: Piece, to: Position },
    Move { color: Piece, from: Position, to: Position },
    Remove { color: Piece, target: Position },
}

impl Operation {
    /// The side performing the operation.
    pub fn color(&self) -> Piece {
        match *self {
            Operation::Place { color, .. } | Operation::Move { color, .. } | Operation::Remove { color, .. } => color,
        }
    }

    pub fn is_remove(&self) -> bool { matches!(self, Operation::Remove { .. }) }
}

/// Phase changes recorded next to operations so `undo` can walk them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    PlacingToMoving,
    MovingToEnd,
    PlacingToRemove,
    MovingToRemove,
    RemoveToMoving,
    RemoveToPlacing,
}

impl Transition {
    /// Phase the board was in before this transition.
    pub fn source(self) -> Phase {
        match self {
            Transition::PlacingToMoving | Transition::PlacingToRemove => Phase::Placing,
            Transition::MovingToEnd | Transition::MovingToRemove => Phase::Moving,
            Transition::RemoveToMoving => Phase::RemoveAfterMove,
            Transition::RemoveToPlacing => Phase::RemoveAfterPlace,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistoryEntry {
    Op(Operation),
    Transition(Transition),
}
