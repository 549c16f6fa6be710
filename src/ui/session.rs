//! Game session state for the Nim GUI

use crate::config::MatchConfig;
use crate::error::{Error, Result};
use crate::rules::winner;
use crate::{AIEngine, GameState, Move, MoveResult, Player};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Player,
    /// Who took the last marble
    pub last_mover: Player,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// One game in progress
pub struct Session {
    pub config: MatchConfig,
    pub state: GameState,
    pub current_turn: Player,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<(Player, Move)>,
    pub move_history: Vec<(Player, Move)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
}

impl Session {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            state: config.initial,
            current_turn: config.first_player,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        }
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Player::Human
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Player::Computer
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move
    pub fn try_take(&mut self, mv: Move) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::invalid_argument("the game is over"));
        }

        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err(Error::invalid_argument("it is not your turn"));
        }

        let next = self.state.apply(mv)?;
        self.execute_move(next, mv);
        Ok(())
    }

    /// Record a move already applied to `next` (human or AI)
    fn execute_move(&mut self, next: GameState, mv: Move) {
        let mover = self.current_turn;

        self.state = next;
        self.move_history.push((mover, mv));
        self.last_move = Some((mover, mv));
        self.suggested_move = None;
        self.move_timer.stop();

        if self.state.is_terminal() {
            self.outcome = Some(GameOutcome {
                winner: winner(mover, self.config.mode),
                last_mover: mover,
            });
            return;
        }

        self.current_turn = mover.opponent();
        self.move_timer.start();
        self.message = None;
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.outcome.is_some() {
            return;
        }

        let state = self.state;
        let depth = i32::from(self.config.depth);
        let mode = self.config.mode;

        let (tx, rx) = channel();

        thread::spawn(move || {
            // Depth was validated when the config was built
            if let Ok(mut engine) = AIEngine::with_config(depth, mode) {
                let _ = tx.send(engine.get_move_with_stats(&state));
            }
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            self.apply_ai_result(move_result);
        }
    }

    fn apply_ai_result(&mut self, move_result: MoveResult) {
        self.last_ai_result = Some(move_result.clone());

        match move_result.best_move.map(|mv| (mv, self.state.apply(mv))) {
            Some((mv, Ok(next))) => self.execute_move(next, mv),
            Some((_, Err(err))) => self.message = Some(err.to_string()),
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the human, searched from the human's side
    pub fn request_suggestion(&mut self) {
        if self.outcome.is_some() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }

        let Ok(mut engine) = AIEngine::with_config(i32::from(self.config.depth), self.config.mode) else {
            return;
        };
        let result = engine.get_move_with_stats(&self.state);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }
}
