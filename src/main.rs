use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use tile_2048::{BoardConfig, Direction, Game2048, GameRng, Preset};

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal with w/a/s/d")]
struct Cli {
    /// Side length of a random board
    #[arg(long, default_value_t = 4, value_name = "N")]
    size: usize,

    /// RNG seed (random when omitted)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Start from a practice board: straight-8192, l-shape, endgame
    #[arg(long, value_name = "ID")]
    preset: Option<String>,

    /// Chance that a spawned tile is a 4
    #[arg(long, default_value_t = 0.1, value_name = "P")]
    four_probability: f64,
}

fn parse_input(line: &str) -> Option<Direction> {
    let line = line.trim();
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Direction::from_key(key),
        _ => line.parse().ok(),
    }
}

fn build_game(cli: &Cli) -> Result<Game2048> {
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("seed {} (pass --seed {} to replay)", rng.seed(), rng.seed());
    let config = BoardConfig::default()
        .with_size(cli.size)
        .with_four_probability(cli.four_probability);

    let game = match cli.preset.as_deref() {
        Some(id) => {
            let Some(preset) = Preset::by_id(id) else {
                bail!("unknown preset `{id}`");
            };
            info!("practice board: {preset}");
            let board = tile_2048::Board::from_rows(&preset.layout())?;
            Game2048::from_board(config, board, rng)?
        }
        None => Game2048::with_rng(config, rng)?,
    };
    Ok(game)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut game = build_game(&cli)?;
    info!("new {}x{} game", game.size(), game.size());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{game}");

    // Adjacent blocked cells keep `can_move` true on a board where nothing
    // can change, so the loop also needs a legal move.
    while game.can_move() && !game.legal_moves().is_empty() {
        print!("Move (w/a/s/d, q to quit): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("q") {
            info!("quit with score {}", game.score());
            return Ok(());
        }

        match parse_input(&line) {
            Some(direction) if game.make_move(direction) => print!("{game}"),
            Some(_) => println!("Can't move that way!"),
            None => println!("Invalid input! Use w/a/s/d."),
        }
    }

    println!("Game Over!");
    info!(
        "game over after {} moves: score {}, max tile {}",
        game.move_count(),
        game.score(),
        game.max_tile()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("w\n"), Some(Direction::Up));
        assert_eq!(parse_input(" D "), Some(Direction::Right));
        assert_eq!(parse_input("left"), Some(Direction::Left));
        assert_eq!(parse_input("x"), None);
        assert_eq!(parse_input(""), None);
    }

    #[test]
    fn test_cli_preset() {
        let cli = Cli::parse_from(["tile-2048", "--preset", "endgame", "--seed", "1"]);
        let game = build_game(&cli).unwrap();
        assert_eq!(game.board().get(3, 0), 32768);

        let cli = Cli::parse_from(["tile-2048", "--preset", "bogus"]);
        assert!(build_game(&cli).is_err());
    }

    #[test]
    fn test_cli_random_board() {
        let cli = Cli::parse_from(["tile-2048", "--size", "5", "--seed", "3"]);
        let game = build_game(&cli).unwrap();
        assert_eq!(game.size(), 5);
        assert_eq!(game.tile_count(), 2);
    }
}
