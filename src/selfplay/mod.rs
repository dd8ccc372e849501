use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Operation, Piece};
use crate::search::alphabeta::{SearchParams, Searcher};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub threads: usize,
    pub white_depth: u32,
    pub black_depth: u32,
    pub random_plies: usize, // uniformly random actions for the first N plies
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, max_plies: 200, threads: 1, white_depth: 2, black_depth: 2, random_plies: 4, seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: i8, // 1 white win, 0 draw or unfinished, -1 black win
    pub finished: bool,
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    generate_games_with(params, |_| {})
}

/// Plays `params.games` independent games; `on_game` is called as each one
/// finishes, possibly from several threads.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_game: F) -> Vec<GameRecord>
where
    F: Fn(&GameRecord) + Sync,
{
    let run = |i: usize| {
        let g = play_game(params, i);
        on_game(&g);
        g
    };
    if params.threads > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
            Ok(pool) => return pool.install(|| (0..params.games).into_par_iter().map(run).collect()),
            Err(e) => warn!("thread pool unavailable ({}), playing sequentially", e),
        }
    }
    (0..params.games).map(run).collect()
}

/// Game `index` of a run; the same params and index always replay the same
/// game.
pub fn play_game(params: &SelfPlayParams, index: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let mut board = Board::new();
    let mut to_move = Piece::White;
    let mut moves = Vec::new();

    while moves.len() < params.max_plies && !board.is_terminal() {
        let op = if moves.len() < params.random_plies {
            select_random_move(&board, to_move, &mut rng)
        } else {
            let depth = if to_move == Piece::White { params.white_depth } else { params.black_depth };
            Searcher::new().search_with_params(&board, to_move, SearchParams { depth }, None).ok().map(|r| r.best)
        };
        let Some(op) = op else { break };
        if board.apply(op).is_err() { break; }
        moves.push(op.to_string());
        let next = board.next_to_move(to_move);
        board.check_board_state(next);
        to_move = next;
    }

    let result = match board.winner() {
        Some(Piece::White) => 1,
        Some(_) => -1,
        None => 0,
    };
    info!("game {} finished after {} plies, result {}", index, moves.len(), result);
    GameRecord { moves, result, finished: board.is_terminal() }
}

fn select_random_move(board: &Board, color: Piece, rng: &mut SmallRng) -> Option<Operation> {
    crate::movegen::legal_actions(board, color).choose(rng)
}

/// Writes games as JSON lines, at most `max_games_per_shard` per file.
pub fn write_shards<P: AsRef<Path>>(games: &[GameRecord], out_dir: P, max_games_per_shard: usize) -> std::io::Result<Vec<PathBuf>> {
    create_dir_all(&out_dir)?;
    let mut out_paths = Vec::new();
    for (idx, chunk) in games.chunks(max_games_per_shard.max(1)).enumerate() {
        let path = out_dir.as_ref().join(format!("shard_{:06}.jsonl", idx));
        let mut w = BufWriter::new(File::create(&path)?);
        for g in chunk {
            serde_json::to_writer(&mut w, g)?;
            w.write_all(b"\n")?;
        }
        w.flush()?;
        out_paths.push(path);
    }
    Ok(out_paths)
}

pub fn read_shard<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut games = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        games.push(serde_json::from_str(&line)?);
    }
    Ok(games)
}
