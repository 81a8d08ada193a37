use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use connect_bot::{
    bitboard::BitBoard,
    config::{AppConfig, SearchConfig},
    disc::DiscColor,
    heuristic::{evaluate, to_points},
    search::Engine,
    WIDTH,
};

mod session;
use session::*;

/// Play Connect 4 against a heuristic search engine
#[derive(Parser)]
#[command(name = "connect_bot", about = "Play Connect 4 against a heuristic search engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_bot.toml")]
    config: PathBuf,

    /// Override the search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Which colours the engine plays
    #[arg(long, value_enum, default_value_t = AiPlayers::Red)]
    ai: AiPlayers,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play every two-move opening engine against engine and report the results
    Selfplay,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AiPlayers {
    None,
    Red,
    Black,
    Both,
}

impl AiPlayers {
    fn controls(self, color: DiscColor) -> bool {
        match self {
            AiPlayers::None => false,
            AiPlayers::Red => color == DiscColor::Red,
            AiPlayers::Black => color == DiscColor::Black,
            AiPlayers::Both => true,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(depth) = cli.depth {
        config.search.max_depth = depth;
    }
    config.validate()?;

    match cli.command {
        Some(Command::Selfplay) => selfplay(config.search),
        None => play(&config, cli.ai),
    }
}

fn play(config: &AppConfig, ai: AiPlayers) -> Result<()> {
    let mut session = GameSession::new();
    // one engine per colour, each only ever runs one search at a time
    let mut engines = (Engine::new(config.search)?, Engine::new(config.search)?);

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("Black moves first. Search depth: {}", config.search.max_depth);

    // game loop
    loop {
        session.display()?;

        match session.state {
            GameState::Playing => {
                let color = session.to_move;
                let next_move =
                    // AI player
                    if ai.controls(color) {
                        println!("AI is thinking...");
                        stdout().flush()?;

                        // slow down play if both players are AI
                        if ai == AiPlayers::Both {
                            std::thread::sleep(Duration::from_millis(config.ai_delay_ms));
                        }

                        let engine = match color {
                            DiscColor::Red => &mut engines.0,
                            _ => &mut engines.1,
                        };
                        let best_move = engine.choose_move(session.board(), color)?;

                        if let Some(report) = engine.last_report() {
                            println!(
                                "{:?} after {} positions ({:.1} kpos/s)",
                                report.decision,
                                report.node_count,
                                report.kilo_nodes_per_second()
                            );
                            if !report.candidates.is_empty() {
                                println!("Scores: {}", report.score_trace());
                            }
                        }

                        println!("{} plays: {}", color, best_move + 1);
                        best_move + 1

                    // human player
                    } else {
                        print!("{} move input > ", color);
                        stdout().flush()?;
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = session.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                log::debug!(
                    "position {} evaluates to {:.1}",
                    session.game,
                    to_points(evaluate(session.board()))
                );
            }

            // end states
            GameState::RedWin => {
                println!("Red wins! ({})", session.game);
                break;
            }
            GameState::BlackWin => {
                println!("Black wins! ({})", session.game);
                break;
            }
            GameState::Draw => {
                println!("Draw! ({})", session.game);
                break;
            }
        }
    }
    Ok(())
}

/// The outcome of one engine-against-engine game
struct GameRecord {
    winner: DiscColor,
    discs: usize,
    nodes: u64,
    decisions: u64,
}

fn play_out(config: SearchConfig, first: usize, second: usize) -> Result<GameRecord> {
    let mut board = BitBoard::new()
        .apply_move(first, DiscColor::Black)?
        .apply_move(second, DiscColor::Red)?;
    let mut engines = (Engine::new(config)?, Engine::new(config)?);
    let mut to_move = DiscColor::Black;
    let mut nodes = 0;
    let mut decisions = 0;

    loop {
        let winner = board.check_victory()?;
        if winner != DiscColor::None || board.is_full() {
            return Ok(GameRecord {
                winner,
                discs: board.disc_count(),
                nodes,
                decisions,
            });
        }

        let engine = match to_move {
            DiscColor::Red => &mut engines.0,
            _ => &mut engines.1,
        };
        let column = engine.choose_move(&board, to_move)?;
        nodes += engine.last_report().map_or(0, |r| r.node_count);
        decisions += 1;

        board = board.apply_move(column, to_move)?;
        to_move = to_move.opponent();
    }
}

fn selfplay(config: SearchConfig) -> Result<()> {
    let start = Instant::now();
    let openings: Vec<(usize, usize)> = (0..WIDTH)
        .flat_map(|first| (0..WIDTH).map(move |second| (first, second)))
        .collect();

    let progress = ProgressBar::new(openings.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Self-play: {bar:40.cyan/blue} {pos}/{len} games ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    // every game owns its engines, only the games run in parallel
    let records = openings
        .par_iter()
        .map(|&(first, second)| {
            let record = play_out(config, first, second);
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish();

    let count = |color: DiscColor| records.iter().filter(|r| r.winner == color).count();
    let nodes: u64 = records.iter().map(|r| r.nodes).sum();
    let decisions: u64 = records.iter().map(|r| r.decisions).sum();
    let discs: usize = records.iter().map(|r| r.discs).sum();

    println!(
        "{} games at depth {}: Black {} wins, Red {} wins, {} draws",
        records.len(),
        config.max_depth,
        count(DiscColor::Black),
        count(DiscColor::Red),
        count(DiscColor::None)
    );
    println!(
        "Mean game length: {:.1} discs, mean no. of positions per move: {:.0}",
        discs as f64 / records.len() as f64,
        nodes as f64 / decisions.max(1) as f64
    );
    println!("Self-play completed in {}", HumanDuration(start.elapsed()));
    Ok(())
}
