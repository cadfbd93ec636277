//! Game session: one engine, one current state.

use tracing::debug;

use crate::core::{ConfigError, GameRng, GameState, GameStatus, RandomSource};
use crate::games::dev_journey::dev_journey_config;
use crate::rules::{AdvanceTicket, ChoiceOutcome, GameEngine};
use crate::view::BoardView;

/// Owns an engine and the state it is currently driving.
///
/// Starts in `NotStarted`; call `start` to deal the first game.
#[derive(Clone, Debug)]
pub struct GameSession<R: RandomSource = GameRng> {
    engine: GameEngine<R>,
    state: GameState,
}

impl GameSession<GameRng> {
    /// A Dev Journey session with a seeded RNG.
    pub fn dev_journey(seed: u64) -> Result<Self, ConfigError> {
        let engine = GameEngine::seeded(dev_journey_config(), seed)?;
        Ok(Self::new(engine))
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            state: GameState::empty(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Render model for the current state.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::new(&self.state)
    }

    /// Deal the first game.
    pub fn start(&mut self) -> &GameState {
        self.state = self.engine.initialize();
        &self.state
    }

    /// Forward a click on `option` of `step`.
    pub fn choose(&mut self, step: usize, option: usize) -> ChoiceOutcome {
        self.engine.apply_choice(&mut self.state, step, option)
    }

    /// Redeem an advance ticket once the reveal delay has elapsed.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> bool {
        self.engine.advance_to_next_step(&mut self.state, ticket)
    }

    /// Replace the whole game with a fresh deal.
    ///
    /// Tickets issued before the restart are dropped when redeemed.
    pub fn restart(&mut self) -> &GameState {
        debug!(status = ?self.state.status(), "session restart");
        self.state = self.engine.reset();
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceRng;
    use crate::games::dev_journey::DevJourneyBuilder;
    use crate::view::TileStatus;

    fn scripted() -> GameSession<SequenceRng> {
        let engine = DevJourneyBuilder::new()
            .engine_with_rng(SequenceRng::zeros())
            .unwrap();
        GameSession::new(engine)
    }

    #[test]
    fn test_not_started_until_start() {
        let mut session = GameSession::dev_journey(1).unwrap();
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert!(!session.choose(0, 0).is_applied());

        session.start();
        assert_eq!(session.status(), GameStatus::Playing { step: 0 });
        assert_eq!(session.view().tiles.len(), 6);
    }

    #[test]
    fn test_start_deals_exactly_once() {
        let mut session = scripted();
        assert_eq!(session.engine().last_generation(), 0);

        let generation = session.start().generation();
        assert_eq!(session.engine().last_generation(), generation);
        // One deal of six steps at four draws each
        assert_eq!(session.engine().rng().draws(), 24);
    }

    #[test]
    fn test_cloned_sessions_reject_each_others_tickets() {
        let mut a = scripted();
        a.start();
        let mut b = a.clone();
        b.restart();

        let ticket = a.choose(0, 2).ticket().unwrap();
        b.choose(0, 2);

        assert!(!b.advance(ticket));
        assert_eq!(b.status(), GameStatus::Advancing { from: 0, to: 1 });
        assert!(a.advance(ticket));
    }

    #[test]
    fn test_choose_and_advance() {
        let mut session = scripted();
        session.start();

        let ticket = session.choose(0, 2).ticket().unwrap();
        assert_eq!(session.status(), GameStatus::Advancing { from: 0, to: 1 });

        assert!(session.advance(ticket));
        assert_eq!(session.status(), GameStatus::Playing { step: 1 });
        assert_eq!(session.view().tiles[1].status, TileStatus::Active);
    }

    #[test]
    fn test_restart_drops_pending_ticket() {
        let mut session = scripted();
        session.start();
        let ticket = session.choose(0, 2).ticket().unwrap();

        session.restart();

        assert!(!session.advance(ticket));
        assert_eq!(session.status(), GameStatus::Playing { step: 0 });
        assert!(session.state().steps().iter().all(|s| !s.revealed));
    }
}
