use criterion::{criterion_group, criterion_main, Criterion, black_box};
use morrisbot::board::{Board, Piece, Position};
use morrisbot::movegen::count_actions;
use morrisbot::perft::{perft, perft_undo};
use morrisbot::search::eval::evaluate;

fn bench_movegen(c: &mut Criterion) {
    let p = |i: usize| Position::new(i).unwrap();
    let moving = Board::setup(&[p(0), p(2), p(9), p(12), p(20), p(22)], &[p(1), p(4), p(14), p(17), p(23)], 0, 0).unwrap();

    c.bench_function("count_actions_moving", |ben| {
        ben.iter(|| count_actions(black_box(&moving), Piece::White))
    });
    c.bench_function("evaluate_moving", |ben| {
        ben.iter(|| evaluate(black_box(&moving), Piece::White, Piece::Black))
    });
    c.bench_function("perft_3_startpos", |ben| {
        ben.iter(|| perft(black_box(&Board::new()), Piece::White, 3))
    });
    c.bench_function("perft_undo_3_startpos", |ben| {
        ben.iter(|| {
            let mut b = Board::new();
            perft_undo(black_box(&mut b), Piece::White, 3)
        })
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
