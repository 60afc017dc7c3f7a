use anyhow::Result;
use clap::Parser;
use tracing::info;

use forca::cli::Cli;
use forca::core::engine::Engine;
use forca::games::hangman::{HangmanGame, RoundEngine, TracingObserver};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    // Configuration errors are fatal before the terminal is touched.
    let config = cli.game_config()?;
    info!(words = config.words.len(), seed = ?config.seed, "starting forca");

    let mut rounds = RoundEngine::from_config(config);
    rounds.subscribe(Box::new(TracingObserver));

    let mut terminal = ratatui::init();
    let result = Engine::new(HangmanGame::new(rounds)).run(&mut terminal);
    ratatui::restore();

    let game = result?;
    info!(status = ?game.round().status(), "bye");
    Ok(())
}
