//! Rules engine for the step game.
//!
//! `GameEngine` owns the step table and the random source and defines:
//! - How a fresh game is dealt
//! - How a pick changes the state
//! - When the next step unlocks
//!
//! Picks that arrive at the wrong time are ignored rather than rejected,
//! since late or duplicated UI events are normal.

pub mod engine;

pub use engine::{AdvanceTicket, ChoiceOutcome, GameEngine, IgnoreReason};
