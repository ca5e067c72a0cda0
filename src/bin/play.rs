use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::warn;
use tilemerge::*;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal (w/a/s/d or up/down/left/right, q to quit)")]
struct Cli {
	/// JSON file with a GameConfig; flags below override it
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Board side length
	#[arg(long, value_name = "N")]
	size: Option<usize>,

	/// Seed for tile spawning (random if omitted)
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
	let mut config = match &cli.config {
		Some(path) => {
			let text = std::fs::read_to_string(path)
				.with_context(|| format!("reading {}", path.display()))?;
			GameConfig::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))?
		}
		None => GameConfig::default(),
	};
	if let Some(size) = cli.size {
		config.size = size;
	}
	config.validate()?;
	Ok(config)
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

	let config = load_config(&cli)?;
	let mut game = match cli.seed {
		Some(seed) => Game::with_seed(config, seed)?,
		None => Game::new(config)?,
	};

	let stdin = io::stdin();
	let mut stdout = io::stdout();
	print!("{}{}\n> ", format_board(game.board()), format_status(&game));
	stdout.flush()?;

	for line in stdin.lock().lines() {
		let line = line?;
		let input = line.trim();
		if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
			break;
		}
		match game.play_named(input) {
			Ok(moves) if moves.is_empty() => println!("Nothing moves that way."),
			Ok(_) => {}
			Err(e) => warn!("{}", e),
		}
		println!("{}{}", format_board(game.board()), format_status(&game));
		if game.is_over() {
			println!("Game over! Score: {} (seed {})", game.score(), game.seed());
			return Ok(());
		}
		print!("> ");
		stdout.flush()?;
	}
	Ok(())
}
