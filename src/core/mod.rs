//! Core engine types: configuration, state, RNG, errors.
//!
//! This module contains the data the rules engine works on. It knows
//! nothing about any particular step table.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{GameConfig, StepDefinition, DEFAULT_ADVANCE_DELAY};
pub use error::{ConfigError, MIN_TRAPS};
pub use rng::{GameRng, RandomSource, SequenceRng};
pub use state::{GameState, GameStatus, StepOption, StepState, OPTIONS_PER_STEP};
