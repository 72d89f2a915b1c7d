use std::io;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use minesweeper_core::{CellCount, Coord, GameConfig, RandomMineGenerator, Session};

use menu::Difficulty;

mod app;
mod command;
mod menu;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity,

    /// Preset board, skips the menu
    #[arg(short, long, value_enum, conflicts_with_all = ["width", "height", "mines"])]
    difficulty: Option<Difficulty>,

    /// Custom board width, needs --height and --mines as well
    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<Coord>,

    /// Custom board height
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<Coord>,

    /// Custom mine count, must leave at least one safe cell
    #[arg(short, long, requires_all = ["width", "height"])]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    /// Board requested on the command line, if any.
    fn board_config(&self) -> Option<minesweeper_core::Result<GameConfig>> {
        if let Some(difficulty) = self.difficulty {
            return Some(Ok(difficulty.config()));
        }
        match (self.width, self.height, self.mines) {
            (Some(width), Some(height), Some(mines)) => Some(GameConfig::new(width, height, mines)),
            _ => None,
        }
    }
}

fn init_logging(verbose: &Verbosity) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let config = match args.board_config() {
        Some(config) => config.context("Invalid board settings")?,
        None => menu::prompt_config(&mut input, &mut output)?,
    };

    let session = Session::new(config, RandomMineGenerator::from_seed(seed))
        .context("Could not create the board")?;
    app::play(session, &mut input, &mut output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn custom_board_from_flags() {
        let args = Args::parse_from(["minesweeper", "--width", "5", "--height", "4", "-m", "3"]);

        assert_eq!(args.board_config(), Some(GameConfig::new(5, 4, 3)));
    }

    #[test]
    fn invalid_custom_board_is_reported() {
        let args = Args::parse_from(["minesweeper", "--width", "2", "--height", "2", "-m", "4"]);

        assert!(args.board_config().unwrap().is_err());
    }

    #[test]
    fn difficulty_flag_conflicts_with_custom_size() {
        assert!(Args::try_parse_from(["minesweeper", "-d", "expert", "--width", "5"]).is_err());
        let args = Args::parse_from(["minesweeper", "-d", "beginner", "-s", "7"]);

        assert_eq!(args.board_config(), Some(Ok(Difficulty::Beginner.config())));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn no_flags_falls_back_to_menu() {
        let args = Args::parse_from(["minesweeper"]);

        assert_eq!(args.board_config(), None);
    }
}
