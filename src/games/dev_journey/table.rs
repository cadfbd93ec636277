//! Dev Journey step table and builder.

use std::time::Duration;

use crate::core::{ConfigError, GameConfig, GameRng, GameState, RandomSource, StepDefinition};
use crate::rules::GameEngine;

/// The six lifecycle steps, in play order.
#[must_use]
pub fn dev_journey_config() -> GameConfig {
    GameConfig::new()
        .with_step(
            StepDefinition::new("development")
                .with_correct("in progress")
                .with_traps(["build failed", "Dev went for sick"]),
        )
        .with_step(
            StepDefinition::new("testing")
                .with_correct("in test")
                .with_traps(["AC failed", "-7 out of 126 tests passed"]),
        )
        .with_step(
            StepDefinition::new("verification")
                .with_correct("all test passed")
                .with_traps(["not responsive", "works only on DEV machine"]),
        )
        .with_step(
            StepDefinition::new("acceptance")
                .with_correct("PO Passed")
                .with_traps(["AC Changed", "PO OOO"]),
        )
        .with_step(
            StepDefinition::new("release build")
                .with_correct("in progress")
                .with_traps(["build failed", "build failed successfully"]),
        )
        .with_step(
            StepDefinition::new("deployment")
                .with_correct("push to prod")
                .with_traps(["hot fix needed", "deployed on Friday Error"]),
        )
}

/// Builder for a Dev Journey engine and its first deal.
pub struct DevJourneyBuilder {
    config: GameConfig,
}

impl Default for DevJourneyBuilder {
    fn default() -> Self {
        Self {
            config: dev_journey_config(),
        }
    }
}

impl DevJourneyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_delay(mut self, delay: Duration) -> Self {
        self.config.advance_delay = delay;
        self
    }

    /// Append an extra step after deployment.
    pub fn extra_step(mut self, step: StepDefinition) -> Self {
        self.config.steps.push(step);
        self
    }

    /// The configuration that `build` will use.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the engine with a seeded RNG and deal the first game.
    pub fn build(self, seed: u64) -> Result<(GameEngine, GameState), ConfigError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build with any random source.
    pub fn build_with_rng<R: RandomSource>(
        self,
        rng: R,
    ) -> Result<(GameEngine<R>, GameState), ConfigError> {
        let mut engine = self.engine_with_rng(rng)?;
        let state = engine.initialize();
        Ok((engine, state))
    }

    /// Build the engine without dealing a game.
    pub fn engine_with_rng<R: RandomSource>(self, rng: R) -> Result<GameEngine<R>, ConfigError> {
        GameEngine::new(self.config, rng)
    }
}
