//! # dev-journey
//!
//! A step-by-step choice game engine. Each step of a development
//! lifecycle offers three options, one correct and two traps. Pick right
//! to move on, pick a trap and the game is over.
//!
//! ## Design Principles
//!
//! 1. **Logic Only**: The engine owns the state machine and randomization.
//!    Rendering is left to a presentation collaborator driven by `view`.
//!
//! 2. **Injectable Randomness**: Every random draw goes through
//!    `RandomSource`, so seeded or scripted sources give reproducible games.
//!
//! 3. **Explicit Time**: The pause after a correct pick is an
//!    `AdvanceTicket` the caller redeems, not a timer inside the engine.
//!
//! ## Modules
//!
//! - `core`: Step definitions, configuration, state, RNG, errors
//! - `rules`: `GameEngine` (initialize, resolve, advance, reset)
//! - `games`: Built-in step tables (Dev Journey)
//! - `view`: Render model and notifications
//! - `session`: Presentation-facing driver

pub mod core;
pub mod rules;
pub mod games;
pub mod view;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameState, GameStatus, RandomSource, SequenceRng,
    StepDefinition, StepOption, StepState,
};

pub use crate::rules::{AdvanceTicket, ChoiceOutcome, GameEngine, IgnoreReason};

pub use crate::games::dev_journey::{dev_journey_config, DevJourneyBuilder};

pub use crate::view::{BoardView, Notice, NoticeKind, OptionStyle, TileStatus};

pub use crate::session::GameSession;
