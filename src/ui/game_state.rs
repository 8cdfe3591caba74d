//! Game state management for the GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, Mark, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::game::{GameMode, GameOutcome};

/// Agent computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Mark,
    pub outcome: Option<GameOutcome>,
    pub winning_line: Option<Vec<Pos>>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    engine: AIEngine,
}

impl GameState {
    /// Start a game on `board` (cleared first) with agents using `engine`.
    pub fn new(mode: GameMode, mut board: Board, engine: AIEngine) -> Self {
        board.reset();
        log::info!(
            "new game: {} on {}x{}, {} in a row",
            mode.label(),
            board.rows(),
            board.cols(),
            board.win_length()
        );
        Self {
            board,
            mode,
            current_turn: Mark::X,
            outcome: None,
            winning_line: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            engine,
        }
    }

    /// Same mode, empty board
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.board.clone(), self.engine.clone());
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    pub fn is_human_turn(&self) -> bool {
        !self.mode.is_agent(self.current_turn)
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode.is_agent(self.current_turn)
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        if !self.board.is_legal(pos) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and agent)
    fn execute_move(&mut self, pos: Pos) {
        let mark = self.current_turn;
        if let Err(err) = self.board.try_apply(pos, mark) {
            log::warn!("rejected move: {err}");
            self.message = Some(err.to_string());
            return;
        }

        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.move_timer.stop();
        self.message = None;

        if let Some(outcome) = GameOutcome::from_status(self.board.status()) {
            log::info!("game over: {outcome:?}");
            self.winning_line = self.board.winning_line();
            self.outcome = Some(outcome);
            return;
        }

        self.current_turn = mark.opponent();
        self.move_timer.start();
    }

    /// Start the agent on a worker thread with a copy of the board
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.outcome.is_some() {
            return;
        }

        let board = self.board.clone();
        let mark = self.current_turn;
        let mut engine = self.engine.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, mark);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the agent's move if the worker has finished
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Agent error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.ai_thinking_time = Some(Duration::from_millis(move_result.time_ms));
            self.last_ai_result = Some(move_result.clone());

            match move_result.best_move {
                Some(pos) => self.execute_move(pos),
                None => self.message = Some("Agent could not find a move".to_string()),
            }
        }
    }

    /// Get agent thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back the last human move, and the agent reply after it
    pub fn undo(&mut self) {
        if self.is_ai_thinking() || self.mode == GameMode::AgentVsAgent {
            return;
        }

        while let Some((pos, mark)) = self.move_history.pop() {
            self.board.undo(pos);
            self.current_turn = mark;
            if !self.mode.is_agent(mark) {
                break;
            }
        }

        self.outcome = None;
        self.winning_line = None;
        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: GameMode) -> GameState {
        GameState::new(mode, Board::new(3, 3, 3).unwrap(), AIEngine::new())
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!state.is_ai_thinking(), "agent did not answer in time");
    }

    #[test]
    fn test_hotseat_win_highlights_line() {
        let mut state = state(GameMode::HumanVsHuman);
        for (r, c) in [(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)] {
            state.try_place_mark(Pos::new(r, c)).unwrap();
        }
        assert_eq!(state.outcome, Some(GameOutcome::Win(Mark::X)));
        assert_eq!(
            state.winning_line,
            Some(vec![Pos::new(1, 1), Pos::new(1, 2), Pos::new(1, 3)])
        );
        assert!(state.try_place_mark(Pos::new(3, 3)).is_err());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = state(GameMode::HumanVsHuman);
        state.try_place_mark(Pos::new(2, 2)).unwrap();
        assert!(state.try_place_mark(Pos::new(2, 2)).is_err());
        assert_eq!(state.current_turn, Mark::O);
    }

    #[test]
    fn test_agent_replies_on_worker() {
        let mut state = state(GameMode::HumanVsAgent);
        state.try_place_mark(Pos::new(1, 1)).unwrap();
        assert!(state.is_ai_turn());
        assert!(state.try_place_mark(Pos::new(3, 3)).is_err());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.current_turn, Mark::X);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_undo_takes_back_agent_reply() {
        let mut state = state(GameMode::HumanVsAgent);
        state.try_place_mark(Pos::new(2, 2)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);

        state.undo();
        assert!(state.move_history.is_empty());
        assert_eq!(state.board.empty_count(), 9);
        assert_eq!(state.current_turn, Mark::X);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_reset_keeps_mode_and_size() {
        let mut state = GameState::new(
            GameMode::HumanVsHuman,
            Board::new(4, 5, 3).unwrap(),
            AIEngine::with_look_ahead(2),
        );
        state.try_place_mark(Pos::new(1, 1)).unwrap();
        state.reset();
        assert_eq!(state.mode, GameMode::HumanVsHuman);
        assert_eq!(state.board.cols(), 5);
        assert_eq!(state.board.empty_count(), 20);
        assert_eq!(state.current_turn, Mark::X);
        assert_eq!(state.engine().look_ahead(), 2);
    }
}
