use crate::board::{Board, Operation, Phase, Piece, Position};

/// Lazily enumerates every action `color` may legally take on `board`, in
/// ascending position order. Produces exactly the operations
/// [`Board::apply`] accepts.
pub fn legal_actions(board: &Board, color: Piece) -> impl Iterator<Item = Operation> + '_ {
    let phase = board.phase();
    let playable = color.is_color();

    let places = (playable && phase == Phase::Placing && board.in_hand(color) > 0).then(|| {
        empty_slots(board).map(move |to| Operation::Place { color, to })
    });

    let moves = (playable && phase == Phase::Moving).then(|| {
        let fly = board.can_fly(color);
        Position::all()
            .filter(move |&from| board.at(from) == color)
            .flat_map(move |from| {
                empty_slots(board)
                    .filter(move |&to| fly || from.is_adjacent(to))
                    .map(move |to| Operation::Move { color, from, to })
            })
    });

    let removes = (playable && phase.is_removal()).then(|| {
        let opponent = color.invert();
        let all_protected = !board.has_unprotected_piece(opponent);
        Position::all()
            .filter(move |&p| board.at(p) == opponent && (all_protected || !board.is_in_mill(p)))
            .map(move |target| Operation::Remove { color, target })
    });

    places.into_iter().flatten()
        .chain(moves.into_iter().flatten())
        .chain(removes.into_iter().flatten())
}

pub fn is_legal(board: &Board, op: &Operation) -> bool {
    legal_actions(board, op.color()).any(|a| a == *op)
}

pub fn count_actions(board: &Board, color: Piece) -> usize {
    legal_actions(board, color).count()
}

fn empty_slots(board: &Board) -> impl Iterator<Item = Position> + Clone + '_ {
    Position::all().filter(move |&p| board.at(p) == Piece::Empty)
}
