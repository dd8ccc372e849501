use morrisbot::selfplay::{generate_games, SelfPlayParams};

fn params(seed: u64, threads: usize) -> SelfPlayParams {
    SelfPlayParams { games: 3, max_plies: 14, threads, white_depth: 1, black_depth: 2, random_plies: 4, seed }
}

#[test]
fn selfplay_generates_games_deterministically() {
    let g1 = generate_games(&params(42, 1));
    let g2 = generate_games(&params(42, 1));
    assert_eq!(g1.len(), 3);
    assert_eq!(g1, g2);
    for g in &g1 {
        assert!(!g.moves.is_empty() && g.moves.len() <= 14);
        assert!((-1..=1).contains(&g.result));
        assert_eq!(g.moves[0].chars().next(), Some('W'));
        if !g.finished { assert_eq!(g.result, 0); }
    }
}

#[test]
fn parallel_run_matches_sequential() {
    assert_eq!(generate_games(&params(7, 2)), generate_games(&params(7, 1)));
}

#[test]
fn seeds_change_the_openings() {
    let a = generate_games(&params(1, 1));
    let b = generate_games(&params(2, 1));
    assert_ne!(a[0].moves[..4], b[0].moves[..4]);
}
