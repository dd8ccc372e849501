use morrisbot::board::{Board, Operation, Phase, Piece, Position};
use morrisbot::search::eval::{
    evaluate, terminal_score, weights_for, Features, FLYING_WEIGHTS, MOVING_WEIGHTS, PLACING_WEIGHTS, WIN_SCORE,
};
use pretty_assertions::assert_eq;

fn p(i: usize) -> Position { Position::new(i).unwrap() }

#[test]
fn weight_table_follows_phase_and_flying() {
    assert_eq!(weights_for(&Board::new(), Piece::White), Some(&PLACING_WEIGHTS));

    let b = Board::setup(&[p(7), p(0), p(2)], &[p(12), p(13), p(21), p(22)], 0, 0).unwrap();
    assert_eq!(b.phase(), Phase::Moving);
    assert_eq!(weights_for(&b, Piece::White), Some(&FLYING_WEIGHTS));
    assert_eq!(weights_for(&b, Piece::Black), Some(&MOVING_WEIGHTS));
}

#[test]
fn closed_mill_sign_depends_on_side_to_move() {
    let mut b = Board::setup(&[p(7), p(0), p(2)], &[p(12), p(13), p(21), p(22)], 0, 0).unwrap();
    b.apply(Operation::Move { color: Piece::White, from: p(2), to: p(1) }).unwrap();
    assert_eq!(Features::compute(&b, Piece::White, Piece::White).closed_mill, 0);

    b.apply(Operation::Remove { color: Piece::White, target: p(12) }).unwrap();
    assert_eq!(Features::compute(&b, Piece::White, Piece::Black).closed_mill, 1);
    assert_eq!(Features::compute(&b, Piece::White, Piece::White).closed_mill, -1);
    assert_eq!(Features::compute(&b, Piece::Black, Piece::Black).closed_mill, -1);
}

#[test]
fn mills_and_double_mills() {
    // Slot 0 sits in (7,0,1) and (0,8,16); owning both makes it a double mill.
    let b = Board::setup(&[p(7), p(0), p(1), p(8), p(16)], &[p(4), p(5), p(20)], 0, 0).unwrap();
    let f = Features::compute(&b, Piece::White, Piece::White);
    assert_eq!(f.mills, 2);
    assert_eq!(f.double_mills, 1);
    assert_eq!(f.pieces, 2);
    // 0 has no free neighbour.
    assert_eq!(f.blocked, -1);
    assert!(evaluate(&b, Piece::White, Piece::White) > 0);
}

#[test]
fn blocked_pieces_count_against_owner() {
    // Black 1 is boxed in by White 0 and 2.
    let b = Board::setup(&[p(0), p(2), p(12), p(20)], &[p(1), p(14), p(22), p(23)], 0, 0).unwrap();
    let f = Features::compute(&b, Piece::White, Piece::White);
    assert_eq!(f.blocked, 1);
}

#[test]
fn terminal_scores() {
    assert_eq!(terminal_score(&Board::new(), Piece::White), 0);

    let mut b = Board::setup(&[p(7), p(0), p(2)], &[p(20), p(21), p(22)], 0, 0).unwrap();
    b.apply(Operation::Move { color: Piece::White, from: p(2), to: p(1) }).unwrap();
    b.apply(Operation::Remove { color: Piece::White, target: p(20) }).unwrap();
    b.check_board_state(Piece::Black);
    assert_eq!(weights_for(&b, Piece::Black), None);
    assert_eq!(terminal_score(&b, Piece::White), WIN_SCORE);
    assert_eq!(terminal_score(&b, Piece::Black), -WIN_SCORE);
    assert_eq!(evaluate(&b, Piece::Black, Piece::Black), -WIN_SCORE);
}
