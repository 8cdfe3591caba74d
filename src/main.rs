//! Tic-tac-toe front end
//!
//! Opens the egui window by default, or plays in the terminal with
//! `--console`.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use tictactoe::config::AppConfig;
use tictactoe::console::Console;
use tictactoe::ui::TicTacToeApp;
use tictactoe::{AIEngine, Board, Game, GameError};

/// Play N-in-a-row against the alpha-beta agent.
#[derive(Parser)]
#[command(name = "tictactoe", about = "N-in-a-row with a minimax agent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<u8>,

    /// Override board columns
    #[arg(long)]
    cols: Option<u8>,

    /// Override the run length needed to win
    #[arg(long)]
    win_length: Option<u8>,

    /// Override the agent's search depth in plies
    #[arg(long)]
    look_ahead: Option<u32>,

    /// Play in the terminal instead of opening a window
    #[arg(long)]
    console: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(win_length) = cli.win_length {
        config.board.win_length = win_length;
    }
    if let Some(look_ahead) = cli.look_ahead {
        config.agent.look_ahead = look_ahead;
    }
    config.validate().context("invalid settings")?;

    log::info!(
        "board {}x{}, {} in a row, look-ahead {}",
        config.board.rows,
        config.board.cols,
        config.board.win_length,
        config.agent.look_ahead
    );

    if cli.console {
        run_console(&config)
    } else {
        run_gui(&config)
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let mut game = Game::from_config(config)?;
    let mut console = Console::stdio(config.console.retries);

    match game.run(&mut console) {
        Ok(()) => Ok(()),
        Err(GameError::Input(err)) => {
            eprintln!("{err} - QUITTING.");
            Ok(())
        }
        Err(err) => Err(err).context("game aborted"),
    }
}

fn run_gui(config: &AppConfig) -> Result<()> {
    let board = Board::from_config(&config.board)?;
    let engine = AIEngine::from_config(&config.agent);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 420.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc, board, engine)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}
