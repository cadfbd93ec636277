//! Game state.
//!
//! ## StepState
//!
//! One step's shuffled options plus whether the player has picked one.
//!
//! ## GameState
//!
//! The whole board:
//! - Step states in play order
//! - Current step index
//! - Terminal flags (game over, won)
//! - Pending advancement after a correct pick
//! - Generation of the initialization that produced it

use im::Vector;
use serde::{Deserialize, Serialize};

/// Options shown on every step: one correct, two traps.
pub const OPTIONS_PER_STEP: usize = 3;

/// A single selectable option.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepOption {
    pub text: String,
    pub is_correct: bool,
}

impl StepOption {
    /// The correct option for a step.
    pub fn correct(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_correct: true,
        }
    }

    /// A trap option.
    pub fn trap(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_correct: false,
        }
    }
}

/// Per-step state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepState {
    /// Options in display order.
    pub options: [StepOption; OPTIONS_PER_STEP],

    /// Set once the player picks any option on this step. Only a new
    /// game clears it.
    pub revealed: bool,

    /// Index of the option the player picked.
    pub picked: Option<usize>,
}

impl StepState {
    /// Create an unrevealed step.
    #[must_use]
    pub fn new(options: [StepOption; OPTIONS_PER_STEP]) -> Self {
        Self {
            options,
            revealed: false,
            picked: None,
        }
    }

    /// Index of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.is_correct)
    }

    /// The option the player picked, if any.
    #[must_use]
    pub fn picked_option(&self) -> Option<&StepOption> {
        self.picked.and_then(|i| self.options.get(i))
    }
}

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No steps have been dealt yet.
    NotStarted,
    /// Waiting for a pick on `step`.
    Playing { step: usize },
    /// `from` was answered correctly; `to` unlocks once the advance lands.
    Advancing { from: usize, to: usize },
    /// Every step answered correctly.
    Won,
    /// A trap was picked.
    Lost,
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Complete game state.
///
/// Uses an `im` vector so snapshots taken by `resolve_choice` are O(1).
/// Fields are only mutated through the rules engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    steps: Vector<StepState>,
    current_step: usize,
    game_over: bool,
    won: bool,
    pending_advance: Option<usize>,
    generation: u64,
}

impl GameState {
    /// An empty, not-yet-started state.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh state at step 0.
    pub(crate) fn new(steps: Vector<StepState>, generation: u64) -> Self {
        Self {
            steps,
            current_step: 0,
            game_over: false,
            won: false,
            pending_advance: None,
            generation,
        }
    }

    /// All steps in play order.
    #[must_use]
    pub fn steps(&self) -> &Vector<StepState> {
        &self.steps
    }

    /// Get a step by index.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&StepState> {
        self.steps.get(index)
    }

    /// Number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the step the player is on.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Step waiting to be unlocked by an advance ticket.
    #[must_use]
    pub fn pending_advance(&self) -> Option<usize> {
        self.pending_advance
    }

    /// Identity of the initialization that produced this state.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Index of the last step, if any.
    #[must_use]
    pub fn last_step(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    /// Check if a step is beyond the current progress point.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        index > self.current_step
    }

    /// Check if a step currently accepts a pick.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current_step && !self.game_over && index < self.steps.len()
    }

    /// Derive the lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.steps.is_empty() {
            GameStatus::NotStarted
        } else if self.won {
            GameStatus::Won
        } else if self.game_over {
            GameStatus::Lost
        } else if let Some(to) = self.pending_advance {
            GameStatus::Advancing {
                from: self.current_step,
                to,
            }
        } else {
            GameStatus::Playing {
                step: self.current_step,
            }
        }
    }

    pub(crate) fn step_mut(&mut self, index: usize) -> Option<&mut StepState> {
        self.steps.get_mut(index)
    }

    pub(crate) fn set_pending_advance(&mut self, next: usize) {
        self.pending_advance = Some(next);
    }

    pub(crate) fn complete_advance(&mut self, next: usize) {
        self.current_step = next;
        self.pending_advance = None;
    }

    pub(crate) fn finish(&mut self, won: bool) {
        self.game_over = true;
        self.won = won;
        self.pending_advance = None;
    }
}
