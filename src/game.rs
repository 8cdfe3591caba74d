//! Console game session: menu, turn loop, outcome, replay.

use std::io::{BufRead, Write};

use crate::board::{Board, BoardStatus, Mark};
use crate::config::AppConfig;
use crate::console::Console;
use crate::engine::AIEngine;
use crate::error::{BoardError, GameError};
use crate::player::Player;

/// Who sits at X and O. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    AgentVsHuman,
    HumanVsAgent,
    AgentVsAgent,
    HumanVsHuman,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::AgentVsHuman,
        GameMode::HumanVsAgent,
        GameMode::AgentVsAgent,
        GameMode::HumanVsHuman,
    ];

    /// Menu entry `1..=4`, `None` for anything else
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(GameMode::AgentVsHuman),
            2 => Some(GameMode::HumanVsAgent),
            3 => Some(GameMode::AgentVsAgent),
            4 => Some(GameMode::HumanVsHuman),
            _ => None,
        }
    }

    /// Whether the side playing `mark` is the search agent
    pub fn is_agent(self, mark: Mark) -> bool {
        match self {
            GameMode::AgentVsHuman => mark == Mark::X,
            GameMode::HumanVsAgent => mark == Mark::O,
            GameMode::AgentVsAgent => true,
            GameMode::HumanVsHuman => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::AgentVsHuman => "Computer (X) vs Human (O)",
            GameMode::HumanVsAgent => "Human (X) vs Computer (O)",
            GameMode::AgentVsAgent => "Computer (X) vs Computer (O)",
            GameMode::HumanVsHuman => "Human (X) vs Human (O)",
        }
    }

    /// X then O
    pub fn players(self, engine: &AIEngine) -> [Player; 2] {
        [Mark::X, Mark::O].map(|mark| {
            if self.is_agent(mark) {
                Player::agent(mark, engine.clone())
            } else {
                Player::human(mark)
            }
        })
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Draw,
    Win(Mark),
}

impl GameOutcome {
    /// `None` while the game is still running
    pub fn from_status(status: BoardStatus) -> Option<Self> {
        match status {
            BoardStatus::InProgress => None,
            BoardStatus::Draw => Some(GameOutcome::Draw),
            BoardStatus::Win(mark) => Some(GameOutcome::Win(mark)),
        }
    }

    pub fn message(self) -> String {
        match self {
            GameOutcome::Draw => "\nGAME OVER - The game is a DRAW.".to_string(),
            GameOutcome::Win(mark) => format!("\nGAME OVER - Player {mark} WON the game."),
        }
    }
}

const MODE_MENU: &str = "\nPlease choose game mode:\n\n\
    \t[1]\tComputer (X)\t vs.\t Human (O)\n\
    \t[2]\tHuman (X)\t vs.\t Computer (O)\n\
    \t[3]\tComputer (X)\t vs.\t Computer (O)\n\
    \t[4]\tHuman (X)\t vs.\t Human (O)\n\n\
    \t[0]\tQuit Game.\n";
const MODE_PROMPT: &str = "Please enter [1-4 or 0]: ";

const REPLAY_MENU: &str = "\nDo you wish to play another round?\n\n\
    \t[1]\tYES let's start over.\n\n\
    \t[0]\tNO please QUIT the game.\n";
const REPLAY_PROMPT: &str = "Please enter [1 or 0]: ";

/// A board plus the engine settings agents are created with.
pub struct Game {
    board: Board,
    engine: AIEngine,
}

impl Game {
    pub fn new(board: Board, engine: AIEngine) -> Self {
        Self { board, engine }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BoardError> {
        Ok(Self::new(
            Board::from_config(&config.board)?,
            AIEngine::from_config(&config.agent),
        ))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Full session: greet, then play rounds until the user quits.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<(), GameError> {
        console.message("Welcome to Tic-Tac-Toe!\n")?;
        console.message(&format!(
            "The board size is set to {} rows and {} columns.\n\
             You win if you have {} symbols in a row.\n\
             Player X starts the game.",
            self.board.rows(),
            self.board.cols(),
            self.board.win_length()
        ))?;

        loop {
            let choice = console.dialogue(MODE_MENU, MODE_PROMPT, Some(4))?;
            let Some(mode) = GameMode::from_choice(choice) else {
                log::info!("quit from game mode menu");
                return Ok(());
            };

            log::info!("new game: {}", mode.label());
            let mut players = mode.players(&self.engine);
            let outcome = self.play_turns(&mut players, console)?;
            log::info!("game over: {outcome:?}");
            console.message(&outcome.message())?;

            if console.dialogue(REPLAY_MENU, REPLAY_PROMPT, Some(1))? == 0 {
                return Ok(());
            }
            self.board.reset();
            console.clear()?;
        }
    }

    /// Alternate `players`, X first, until the board is finished.
    ///
    /// The board is shown before every move and once more at the end.
    pub fn play_turns<R: BufRead, W: Write>(
        &mut self,
        players: &mut [Player; 2],
        console: &mut Console<R, W>,
    ) -> Result<GameOutcome, GameError> {
        let mut current = 0;
        loop {
            console.show_board(&self.board)?;
            if let Some(outcome) = GameOutcome::from_status(self.board.status()) {
                return Ok(outcome);
            }
            players[current].perform_move(&mut self.board, console)?;
            current = 1 - current;
        }
    }
}
