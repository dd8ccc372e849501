use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use morrisbot::error::GameError;
use morrisbot::game::{Agent, Game};
use morrisbot::notation::parse_action;
use morrisbot::Piece;
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play the mill game against the MorrisBot engine", long_about = None)]
struct Args {
    /// White player: human, easy, medium or hard
    #[arg(long, default_value = "human")]
    white: String,

    /// Black player: human, easy, medium or hard
    #[arg(long, default_value = "medium")]
    black: String,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

enum Input {
    Action(String),
    Undo,
    Quit,
}

fn read_input(color: Piece) -> Result<Input> {
    print!("{:?} to act (@N place, N-M move, xN remove, undo, quit): ", color);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 { return Ok(Input::Quit); }
    Ok(match line.trim() {
        "quit" | "q" => Input::Quit,
        "undo" | "u" => Input::Undo,
        other => Input::Action(other.to_string()),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let white: Agent = args.white.parse()?;
    let black: Agent = args.black.parse()?;
    let mut game = Game::new(white, black);

    loop {
        println!("\n{}", game.board());
        if game.is_over() {
            match game.winner() {
                Some(c) => println!("\n{:?} wins!", c),
                None => println!("\nThe game is drawn!"),
            }
            break;
        }

        let color = game.to_move();
        if game.legal_actions().is_empty() {
            println!("{:?} has no legal action available!", color);
            break;
        }

        match game.current_agent() {
            Agent::Human => match read_input(color)? {
                Input::Quit => {
                    println!("Thanks for playing!");
                    break;
                }
                Input::Undo => {
                    if !game.undo_for_human() { println!("Nothing to undo."); }
                }
                Input::Action(text) => {
                    let op = match parse_action(&text, color) {
                        Ok(op) => op,
                        Err(e) => { println!("{}", e); continue; }
                    };
                    match game.submit(op) {
                        Ok(()) => {}
                        Err(GameError::Illegal(e)) => {
                            println!("Illegal action: {}", e);
                            let legal: Vec<String> = game.legal_actions().iter().map(|a| a.notation()).collect();
                            println!("Legal actions: {}", legal.join(" "));
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            },
            Agent::Computer(level) => {
                let bar = ProgressBar::new(100);
                bar.set_style(ProgressStyle::with_template("thinking ({msg}) {bar:30} {pos}%")?);
                bar.set_message(level.to_string());
                let t0 = Instant::now();
                let report: &mut dyn FnMut(f64) = &mut |pct| bar.set_position(pct.round() as u64);
                let op = game.play_computer(Some(report))?;
                bar.finish_and_clear();
                println!("Computer plays: {}", op);
                if args.verbose {
                    println!("search depth {} took {:.2}s", level.depth(), t0.elapsed().as_secs_f64());
                }
            }
        }
    }

    Ok(())
}
