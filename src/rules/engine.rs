//! The game engine: dealing, resolving picks, advancing, resetting.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted -> Playing(0) -> Advancing(0 -> 1) -> Playing(1) -> ... -> Won
//!                   \                                  \
//!                    +-> Lost                           +-> Lost
//! ```
//!
//! A correct pick on a non-final step does not move the game forward by
//! itself. It hands back an `AdvanceTicket`; the caller redeems it with
//! `advance_to_next_step` once its reveal animation is done. Tickets carry
//! the state's generation, so a ticket issued before a reset can never
//! touch the new game. Generations come from a process-wide counter, so
//! they are unique across engines too.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{GameState, StepOption, StepState};

/// Next generation to hand out. Starts at 1 so `GameState::empty()` (0)
/// never matches a dealt game.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Permission to unlock the next step.
///
/// Only the engine issues tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdvanceTicket {
    generation: u64,
    next_step: usize,
    delay: Duration,
}

impl AdvanceTicket {
    /// Generation of the state that issued the ticket.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Step to unlock.
    #[must_use]
    pub fn next_step(&self) -> usize {
        self.next_step
    }

    /// How long the presentation should wait before redeeming.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Why a pick was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The game already ended.
    GameOver,
    /// The step is past the current step.
    StepLocked { step: usize, current: usize },
    /// The step was already passed.
    StepPassed { step: usize, current: usize },
    /// The step index does not exist.
    StepOutOfRange { step: usize },
    /// The current step was already picked and is waiting to advance.
    AlreadyRevealed { step: usize },
    /// The option index does not exist.
    OptionOutOfRange { option: usize },
}

/// What a pick did to the state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ChoiceOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// Correct pick; redeem the ticket to unlock the next step.
    Advancing { ticket: AdvanceTicket, text: String },
    /// Correct pick on the last step.
    Won { text: String },
    /// A trap was picked.
    Lost { text: String },
}

impl ChoiceOutcome {
    /// Check if the pick changed the state.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, ChoiceOutcome::Ignored(_))
    }

    /// The advance ticket, if the pick issued one.
    #[must_use]
    pub fn ticket(&self) -> Option<AdvanceTicket> {
        match self {
            ChoiceOutcome::Advancing { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }
}

/// Game engine.
///
/// Owns the validated step table and the random source. State is passed
/// in and out, so a single engine can drive any number of games.
#[derive(Clone, Debug)]
pub struct GameEngine<R: RandomSource = GameRng> {
    config: GameConfig,
    rng: R,
    generation: u64,
}

impl GameEngine<GameRng> {
    /// Create an engine with a seeded `GameRng`.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine, rejecting step tables that cannot be dealt.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(steps = config.step_count(), "game engine configured");
        Ok(Self {
            config,
            rng,
            generation: 0,
        })
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Generation of the most recent deal, 0 before the first one.
    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.generation
    }

    /// Deal a fresh game.
    ///
    /// For each step: pick one correct phrase, pick two distinct traps from
    /// a shuffled copy of the trap list, then shuffle the three options.
    pub fn initialize(&mut self) -> GameState {
        self.generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);

        let mut steps = Vector::new();
        for definition in &self.config.steps {
            // Config validation guarantees a correct candidate and two traps.
            let Some(correct) = self.rng.choose(&definition.correct) else {
                unreachable!("step '{}' validated without correct candidates", definition.name);
            };
            let correct = StepOption::correct(correct.clone());

            let mut traps = definition.traps.clone();
            self.rng.shuffle(&mut traps);
            let mut traps = traps.into_iter().map(StepOption::trap);

            let (Some(first), Some(second)) = (traps.next(), traps.next()) else {
                unreachable!("step '{}' validated with fewer than two traps", definition.name);
            };

            let mut options = [correct, first, second];
            self.rng.shuffle(&mut options);

            trace!(step = %definition.name, ?options, "step dealt");
            steps.push_back(StepState::new(options));
        }

        info!(
            generation = self.generation,
            steps = steps.len(),
            "game initialized"
        );
        GameState::new(steps, self.generation)
    }

    /// Discard everything and deal a new game.
    pub fn reset(&mut self) -> GameState {
        debug!(previous_generation = self.generation, "game reset");
        self.initialize()
    }

    /// Resolve a pick, returning the new state and what happened.
    ///
    /// Ignored picks return an identical copy. A correct non-final pick
    /// returns the ticket needed to advance the new state.
    #[must_use]
    pub fn resolve_choice(
        &self,
        state: &GameState,
        step: usize,
        option: usize,
    ) -> (GameState, ChoiceOutcome) {
        let mut next = state.clone();
        let outcome = self.apply_choice(&mut next, step, option);
        (next, outcome)
    }

    /// Resolve a pick in place.
    pub fn apply_choice(
        &self,
        state: &mut GameState,
        step: usize,
        option: usize,
    ) -> ChoiceOutcome {
        if let Err(reason) = check_choice(state, step, option) {
            debug!(step, option, ?reason, "choice ignored");
            return ChoiceOutcome::Ignored(reason);
        }

        let is_last = state.last_step() == Some(step);
        let Some(step_state) = state.step_mut(step) else {
            return ChoiceOutcome::Ignored(IgnoreReason::StepOutOfRange { step });
        };
        step_state.revealed = true;
        step_state.picked = Some(option);
        let chosen = step_state.options[option].clone();

        if !chosen.is_correct {
            state.finish(false);
            info!(step, text = %chosen.text, "trap picked, game lost");
            return ChoiceOutcome::Lost { text: chosen.text };
        }

        if is_last {
            state.finish(true);
            info!(step, text = %chosen.text, "final step cleared, game won");
            return ChoiceOutcome::Won { text: chosen.text };
        }

        let ticket = AdvanceTicket {
            generation: state.generation(),
            next_step: step + 1,
            delay: self.config.advance_delay,
        };
        state.set_pending_advance(ticket.next_step);
        debug!(step, next_step = ticket.next_step, "correct pick, advance pending");
        ChoiceOutcome::Advancing {
            ticket,
            text: chosen.text,
        }
    }

    /// Unlock the next step for a ticket issued by `apply_choice`.
    ///
    /// Returns `false` and leaves the state alone when the ticket is stale
    /// (another generation), already redeemed, or the game has ended.
    pub fn advance_to_next_step(&self, state: &mut GameState, ticket: AdvanceTicket) -> bool {
        if ticket.generation != state.generation() {
            debug!(
                ticket_generation = ticket.generation,
                generation = state.generation(),
                "stale advance ticket dropped"
            );
            return false;
        }
        if state.is_game_over() || state.pending_advance() != Some(ticket.next_step) {
            debug!(next_step = ticket.next_step, "advance ticket not applicable");
            return false;
        }

        state.complete_advance(ticket.next_step);
        debug!(step = ticket.next_step, "advanced to next step");
        true
    }
}

fn check_choice(state: &GameState, step: usize, option: usize) -> Result<(), IgnoreReason> {
    if state.is_game_over() {
        return Err(IgnoreReason::GameOver);
    }

    let current = state.current_step();
    if step > current {
        return Err(IgnoreReason::StepLocked { step, current });
    }
    if step < current {
        return Err(IgnoreReason::StepPassed { step, current });
    }

    let Some(step_state) = state.step(step) else {
        return Err(IgnoreReason::StepOutOfRange { step });
    };
    if step_state.revealed {
        return Err(IgnoreReason::AlreadyRevealed { step });
    }
    if option >= step_state.options.len() {
        return Err(IgnoreReason::OptionOutOfRange { option });
    }
    Ok(())
}
