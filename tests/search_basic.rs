use morrisbot::board::{Board, Operation, Phase, Piece, Position};
use morrisbot::error::SearchError;
use morrisbot::movegen::legal_actions;
use morrisbot::search::alphabeta::{SearchParams, Searcher};
use morrisbot::search::eval::{evaluate, terminal_score, WIN_SCORE};
use morrisbot::search::{best_move, Difficulty};
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

fn p(i: usize) -> Position { Position::new(i).unwrap() }

// Exhaustive minimax with the same turn and leaf rules as the engine.
fn minimax(mut board: Board, depth: u32, searcher: Piece, to_move: Piece) -> i64 {
    board.check_board_state(to_move);
    if board.is_terminal() { return terminal_score(&board, searcher); }
    if depth == 0 { return evaluate(&board, searcher, to_move); }
    let scores: Vec<i64> = legal_actions(&board, to_move)
        .map(|op| {
            let mut child = board.clone();
            child.apply(op).unwrap();
            let next = child.next_to_move(to_move);
            minimax(child, depth - 1, searcher, next)
        })
        .collect();
    if scores.is_empty() { return evaluate(&board, searcher, to_move); }
    if to_move == searcher { scores.into_iter().max().unwrap() } else { scores.into_iter().min().unwrap() }
}

fn root_minimax(board: &Board, color: Piece, depth: u32) -> i64 {
    legal_actions(board, color)
        .map(|op| {
            let mut child = board.clone();
            child.apply(op).unwrap();
            let next = child.next_to_move(color);
            minimax(child, depth.saturating_sub(1), color, next)
        })
        .max()
        .unwrap()
}

#[test]
fn difficulty_depths() {
    assert_eq!(Difficulty::Easy.depth(), 2);
    assert_eq!(Difficulty::Medium.depth(), 4);
    assert_eq!(Difficulty::Hard.depth(), 6);
    assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert!("brutal".parse::<Difficulty>().is_err());
    assert_eq!(SearchParams::default().depth, 4);
}

#[test]
fn search_returns_legal_move_startpos() {
    let b = Board::new();
    let op = best_move(&b, Piece::White, 1, None).expect("no move at depth 1");
    assert!(matches!(op, Operation::Place { color: Piece::White, .. }));
}

#[test]
fn no_moves_is_an_error() {
    // White wins by capture count; Black has nothing to do.
    let mut b = Board::setup(&[p(7), p(0), p(2)], &[p(20), p(21), p(22)], 0, 0).unwrap();
    b.apply(Operation::Move { color: Piece::White, from: p(2), to: p(1) }).unwrap();
    b.apply(Operation::Remove { color: Piece::White, target: p(20) }).unwrap();
    b.check_board_state(Piece::Black);
    assert_eq!(b.phase(), Phase::WhiteWins);
    assert_eq!(best_move(&b, Piece::Black, 2, None), Err(SearchError::NoLegalMoves));

    // Every black corner is hemmed in by white.
    let stuck = Board::setup(&[p(0), p(2), p(4), p(6), p(8), p(10)], &[p(1), p(3), p(5), p(7)], 0, 0).unwrap();
    assert_eq!(best_move(&stuck, Piece::Black, 2, None), Err(SearchError::NoLegalMoves));
}

#[test]
fn progress_reaches_one_hundred() {
    let b = Board::new();
    let mut seen = Vec::new();
    let report: &mut dyn FnMut(f64) = &mut |pct| seen.push(pct);
    let res = Searcher::new().best_move(&b, Piece::White, 1, Some(report)).unwrap();
    assert_eq!(res.root_moves, 24);
    assert_eq!(seen.len(), 24);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert!((seen[23] - 100.0).abs() < 1e-9);
}

#[test]
fn completes_a_mill_when_offered() {
    let b = Board::setup(&[p(0), p(1)], &[p(12), p(21)], 7, 7).unwrap();
    let res = Searcher::new().search_with_params(&b, Piece::White, SearchParams { depth: 2 }, None).unwrap();
    assert_eq!(res.best, Operation::Place { color: Piece::White, to: p(7) });
    assert!(res.nodes > 0);
}

#[test]
fn forced_win_stops_early() {
    // Black has three pieces and six captured: one more mill ends it.
    let b = Board::setup(&[p(7), p(0), p(5)], &[p(20), p(21), p(22)], 0, 0).unwrap();
    let mut last = 0.0;
    let report: &mut dyn FnMut(f64) = &mut |pct| last = pct;
    let res = Searcher::new().best_move(&b, Piece::White, 2, Some(report)).unwrap();
    assert_eq!(res.score, WIN_SCORE);
    assert!(last < 100.0, "search did not stop at the win");

    let mut after = b.clone();
    after.apply(res.best).unwrap();
    assert_eq!(after.phase(), Phase::RemoveAfterMove);
}

#[test]
fn alphabeta_agrees_with_minimax() {
    for seed in 0..6u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut b = Board::new();
        let mut to_move = Piece::White;
        // Random prefix, long enough to reach captures on some seeds.
        for _ in 0..(10 + seed as usize * 3) {
            let Some(op) = legal_actions(&b, to_move).choose(&mut rng) else { break };
            b.apply(op).unwrap();
            let next = b.next_to_move(to_move);
            b.check_board_state(next);
            to_move = next;
            if b.is_terminal() { break; }
        }
        if b.is_terminal() || legal_actions(&b, to_move).next().is_none() { continue; }

        for depth in 1..=3 {
            let res = Searcher::new().search_with_params(&b, to_move, SearchParams { depth }, None).unwrap();
            assert_eq!(res.score, root_minimax(&b, to_move, depth), "seed {} depth {}\n{}", seed, depth, b);
        }
    }
}

#[test]
fn alphabeta_agrees_with_minimax_when_moving() {
    let positions = [
        // Both sides slide.
        Board::setup(&[p(0), p(2), p(9), p(12), p(20), p(22)], &[p(1), p(4), p(14), p(17), p(23)], 0, 0).unwrap(),
        // White is down to three and flies.
        Board::setup(&[p(7), p(0), p(2)], &[p(12), p(13), p(21), p(22)], 0, 0).unwrap(),
        // Black can close (3,4,5) by sliding 6 to 5.
        Board::setup(&[p(0), p(8), p(10), p(18), p(20)], &[p(3), p(4), p(6), p(14), p(23)], 0, 0).unwrap(),
    ];
    for (i, b) in positions.iter().enumerate() {
        assert_eq!(b.phase(), Phase::Moving);
        for color in [Piece::White, Piece::Black] {
            for depth in 1..=4 {
                let res = Searcher::new().search_with_params(b, color, SearchParams { depth }, None).unwrap();
                assert_eq!(res.score, root_minimax(b, color, depth), "position {} {:?} depth {}", i, color, depth);
            }
        }
    }
}
