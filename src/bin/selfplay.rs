use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use morrisbot::selfplay::{generate_games_with, write_shards, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "morrisbot-selfplay", about = "Play engine-vs-engine games and write JSONL shards")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Search depth for both sides unless overridden
    #[arg(long, default_value_t = 2)]
    depth: u32,
    #[arg(long)]
    white_depth: Option<u32>,
    #[arg(long)]
    black_depth: Option<u32>,
    /// Uniformly random plies at the start of each game
    #[arg(long, default_value_t = 4)]
    random_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "out/selfplay")]
    out: PathBuf,
    #[arg(long, default_value_t = 1000)]
    max_games_per_shard: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        threads: a.threads,
        white_depth: a.white_depth.unwrap_or(a.depth),
        black_depth: a.black_depth.unwrap_or(a.depth),
        random_plies: a.random_plies,
        seed: a.seed,
    };
    eprintln!(
        "Generating {} games (white depth={}, black depth={}, threads={}, random plies={})",
        a.games, params.white_depth, params.black_depth, a.threads, a.random_plies
    );
    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let games = generate_games_with(&params, |_| bar.inc(1));
    bar.finish();

    let white = games.iter().filter(|g| g.result > 0).count();
    let black = games.iter().filter(|g| g.result < 0).count();
    eprintln!("White wins: {}, Black wins: {}, undecided: {}", white, black, games.len() - white - black);
    eprintln!("Writing shards to {}", a.out.display());
    let shards = write_shards(&games, &a.out, a.max_games_per_shard)?;
    eprintln!("Wrote {} shards", shards.len());
    Ok(())
}
