use anyhow::Context;
use morrisbot::board::{Board, Piece, Position};
use morrisbot::movegen::legal_actions;
use morrisbot::notation::parse_position;
use morrisbot::perft::{perft, perft_undo};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Action-tree leaf counts for MorrisBot")]
struct Args {
    /// Search depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// White pieces as comma separated slots; starts from a moving-phase setup
    #[arg(long)]
    white: Option<String>,
    /// Black pieces as comma separated slots
    #[arg(long)]
    black: Option<String>,
    /// Side to move: 'w' or 'b'
    #[arg(long, default_value = "w")]
    to_move: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Walk one board with apply/undo instead of cloning
    #[arg(long, default_value_t = false)]
    undo: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn parse_slots(list: Option<&str>) -> anyhow::Result<Vec<Position>> {
    let Some(list) = list else { return Ok(Vec::new()) };
    list.split(',').filter(|s| !s.trim().is_empty()).map(|s| parse_position(s).map_err(anyhow::Error::from)).collect()
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let to_move = match args.to_move.to_lowercase().as_str() {
        "w" | "white" => Piece::White,
        "b" | "black" => Piece::Black,
        other => anyhow::bail!("Invalid side to move '{}': use 'w' or 'b'", other),
    };

    let base = if args.white.is_some() || args.black.is_some() {
        let white = parse_slots(args.white.as_deref())?;
        let black = parse_slots(args.black.as_deref())?;
        Board::setup(&white, &black, 0, 0).context("overlapping or oversized setup")?
    } else {
        Board::new()
    };

    let depth = args.depth;
    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if depth == 0 {
            1
        } else if args.threads <= 1 {
            if args.undo { perft_undo(&mut base.clone(), to_move, depth) } else { perft(&base, to_move, depth) }
        } else {
            let root: Vec<_> = legal_actions(&base, to_move).collect();
            root.par_iter().map(|&op| {
                let mut b = base.clone();
                if b.apply(op).is_err() { return 0; }
                let next = b.next_to_move(to_move);
                b.check_board_state(next);
                if b.is_terminal() { 1 } else { perft(&b, next, depth - 1) }
            }).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
