//! Configuration errors.
//!
//! Step tables are validated once, before any game state exists. Invalid
//! player input is never an error: the engine reports it as an ignored
//! choice instead (see `rules::IgnoreReason`).

/// Number of trap candidates every step needs.
pub const MIN_TRAPS: usize = 2;

/// A step table that cannot produce well-formed option sets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The table has no steps at all.
    #[error("game configuration has no steps")]
    NoSteps,

    /// A step has nothing to offer as the correct option.
    #[error("step {index} ('{name}') has no correct candidates")]
    NoCorrectCandidates { index: usize, name: String },

    /// A step cannot fill both trap slots.
    #[error(
        "step {index} ('{name}') has {found} trap candidates, at least {} required",
        MIN_TRAPS
    )]
    NotEnoughTraps {
        index: usize,
        name: String,
        found: usize,
    },
}
