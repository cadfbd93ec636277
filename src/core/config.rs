//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `StepDefinition`: one stage with its correct and trap phrases
//! - `GameConfig`: the ordered list of steps plus presentation timing
//!
//! Steps are a plain ordered list so the step order never depends on
//! map iteration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, MIN_TRAPS};

/// Default pause between revealing a correct pick and unlocking the next step.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(500);

/// Static definition of a single step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Human-readable name (for debugging/logging).
    pub name: String,

    /// Phrases that count as the correct answer. One is picked per game.
    pub correct: Vec<String>,

    /// Distractor phrases. Two distinct ones are picked per game.
    pub traps: Vec<String>,
}

impl StepDefinition {
    /// Create a step with no phrases.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            correct: Vec::new(),
            traps: Vec::new(),
        }
    }

    /// Add a correct candidate.
    #[must_use]
    pub fn with_correct(mut self, phrase: impl Into<String>) -> Self {
        self.correct.push(phrase.into());
        self
    }

    /// Add a trap candidate.
    #[must_use]
    pub fn with_trap(mut self, phrase: impl Into<String>) -> Self {
        self.traps.push(phrase.into());
        self
    }

    /// Add several trap candidates.
    #[must_use]
    pub fn with_traps<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traps.extend(phrases.into_iter().map(Into::into));
        self
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if self.correct.is_empty() {
            return Err(ConfigError::NoCorrectCandidates {
                index,
                name: self.name.clone(),
            });
        }
        if self.traps.len() < MIN_TRAPS {
            return Err(ConfigError::NotEnoughTraps {
                index,
                name: self.name.clone(),
                found: self.traps.len(),
            });
        }
        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Steps in play order.
    pub steps: Vec<StepDefinition>,

    /// How long the presentation should wait before redeeming an
    /// advance ticket. The engine itself never sleeps.
    #[serde(default = "default_advance_delay")]
    pub advance_delay: Duration,
}

fn default_advance_delay() -> Duration {
    DEFAULT_ADVANCE_DELAY
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }

    /// Append a step.
    #[must_use]
    pub fn with_step(mut self, step: StepDefinition) -> Self {
        self.steps.push(step);
        self
    }

    /// Set the advance delay.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    /// Number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get a step definition by index.
    #[must_use]
    pub fn get_step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    /// Check that every step can produce one correct and two trap options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps.is_empty() {
            return Err(ConfigError::NoSteps);
        }
        self.steps
            .iter()
            .enumerate()
            .try_for_each(|(index, step)| step.validate(index))
    }
}
