//! Engine behaviour tests on the Dev Journey table.
//!
//! These tests cover:
//! - Dealing (one correct option, two distinct traps)
//! - Guards on locked, passed, and finished games
//! - Win and loss scenarios
//! - Reset

use std::collections::HashSet;

use dev_journey::core::{GameConfig, GameRng, GameState, StepDefinition};
use dev_journey::games::dev_journey::{dev_journey_config, DevJourneyBuilder};
use dev_journey::rules::{ChoiceOutcome, GameEngine, IgnoreReason};

/// Pick the correct option on the current step and redeem the ticket.
fn clear_current_step(engine: &GameEngine, state: &mut GameState) -> ChoiceOutcome {
    let step = state.current_step();
    let correct = state.step(step).unwrap().correct_index().unwrap();
    let outcome = engine.apply_choice(state, step, correct);
    if let Some(ticket) = outcome.ticket() {
        assert!(engine.advance_to_next_step(state, ticket));
    }
    outcome
}

fn trap_index(state: &GameState, step: usize) -> usize {
    state
        .step(step)
        .unwrap()
        .options
        .iter()
        .position(|o| !o.is_correct)
        .unwrap()
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_options_drawn_from_definitions() {
    let config = dev_journey_config();

    for seed in 0..50 {
        let (_, state) = DevJourneyBuilder::new().build(seed).unwrap();

        for (step, definition) in state.steps().iter().zip(&config.steps) {
            let correct: Vec<_> = step.options.iter().filter(|o| o.is_correct).collect();
            assert_eq!(correct.len(), 1, "exactly one correct option");
            assert!(definition.correct.contains(&correct[0].text));

            let traps: HashSet<_> = step
                .options
                .iter()
                .filter(|o| !o.is_correct)
                .map(|o| o.text.as_str())
                .collect();
            assert_eq!(traps.len(), 2, "two distinct traps");
            assert!(traps.iter().all(|t| definition.traps.iter().any(|d| d == t)));
            assert!(!step.revealed);
        }
    }
}

#[test]
fn test_layouts_vary_with_entropy() {
    let config = GameConfig::new().with_step(
        StepDefinition::new("build")
            .with_correct("green")
            .with_correct("passing")
            .with_traps(["red", "flaky", "timed out", "cancelled"]),
    );
    let mut engine = GameEngine::new(config, GameRng::from_entropy()).unwrap();

    let mut orderings = HashSet::new();
    let mut correct_texts = HashSet::new();
    let mut trap_sets = HashSet::new();
    for _ in 0..200 {
        let state = engine.initialize();
        let step = state.step(0).unwrap();
        orderings.insert(step.correct_index().unwrap());
        correct_texts.insert(step.options[step.correct_index().unwrap()].text.clone());
        let mut traps: Vec<_> = step
            .options
            .iter()
            .filter(|o| !o.is_correct)
            .map(|o| o.text.clone())
            .collect();
        traps.sort();
        trap_sets.insert(traps);
    }

    assert!(orderings.len() > 1);
    assert_eq!(correct_texts.len(), 2);
    assert!(trap_sets.len() > 1);
}

#[test]
fn test_same_seed_same_layout() {
    let (_, a) = DevJourneyBuilder::new().build(99).unwrap();
    let (_, b) = DevJourneyBuilder::new().build(99).unwrap();
    assert_eq!(a.steps(), b.steps());
}

// =============================================================================
// Guards
// =============================================================================

#[test]
fn test_locked_step_is_noop() {
    let (engine, mut state) = DevJourneyBuilder::new().build(5).unwrap();
    let before = state.clone();

    for step in 1..6 {
        for option in 0..3 {
            let outcome = engine.apply_choice(&mut state, step, option);
            assert_eq!(
                outcome,
                ChoiceOutcome::Ignored(IgnoreReason::StepLocked { step, current: 0 })
            );
        }
    }

    assert_eq!(state, before);
}

#[test]
fn test_out_of_range_is_noop() {
    let (engine, state) = DevJourneyBuilder::new().build(5).unwrap();

    let (next, outcome) = engine.resolve_choice(&state, 0, 3);
    assert_eq!(next, state);
    assert!(!outcome.is_applied());

    let (next, _) = engine.resolve_choice(&state, 17, 0);
    assert_eq!(next, state);
}

#[test]
fn test_resolve_choice_advances_with_returned_ticket() {
    let (engine, state) = DevJourneyBuilder::new().build(13).unwrap();
    let correct = state.step(0).unwrap().correct_index().unwrap();

    let (mut next, outcome) = engine.resolve_choice(&state, 0, correct);
    let ticket = outcome.ticket().expect("correct pick on step 1 issues a ticket");

    assert!(engine.advance_to_next_step(&mut next, ticket));
    assert_eq!(next.current_step(), state.current_step() + 1);
}

#[test]
fn test_game_over_blocks_everything() {
    let (engine, mut state) = DevJourneyBuilder::new().build(11).unwrap();
    let trap = trap_index(&state, 0);
    engine.apply_choice(&mut state, 0, trap);
    assert!(state.is_game_over());

    let frozen = state.clone();
    for step in 0..6 {
        for option in 0..3 {
            assert_eq!(
                engine.apply_choice(&mut state, step, option),
                ChoiceOutcome::Ignored(IgnoreReason::GameOver)
            );
        }
    }
    assert_eq!(state, frozen);
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn test_correct_pick_advances_by_one() {
    let (engine, mut state) = DevJourneyBuilder::new().build(8).unwrap();

    for expected in 1..6 {
        let before = state.current_step();
        clear_current_step(&engine, &mut state);
        assert_eq!(state.current_step(), before + 1);
        assert_eq!(state.current_step(), expected);
        assert!(state.step(before).unwrap().revealed);
    }
}

#[test]
fn test_trap_ends_game_without_moving() {
    let (engine, mut state) = DevJourneyBuilder::new().build(21).unwrap();
    clear_current_step(&engine, &mut state);
    clear_current_step(&engine, &mut state);

    let trap = trap_index(&state, 2);
    let outcome = engine.apply_choice(&mut state, 2, trap);

    assert!(matches!(outcome, ChoiceOutcome::Lost { .. }));
    assert!(state.is_game_over());
    assert!(!state.has_won());
    assert_eq!(state.current_step(), 2);
    assert!(state.step(2).unwrap().revealed);
    assert!(!state.step(3).unwrap().revealed);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_all_correct_wins() {
    let (engine, mut state) = DevJourneyBuilder::new().build(42).unwrap();

    let mut outcomes = Vec::new();
    for _ in 0..6 {
        outcomes.push(clear_current_step(&engine, &mut state));
    }

    assert!(outcomes[..5].iter().all(|o| o.ticket().is_some()));
    assert_eq!(
        outcomes[5],
        ChoiceOutcome::Won {
            text: "push to prod".to_string()
        }
    );
    assert!(state.has_won());
    assert!(state.is_game_over());
    assert_eq!(state.current_step(), 5);
    assert!(state.steps().iter().all(|s| s.revealed));
}

#[test]
fn test_scenario_trap_on_second_step() {
    let (engine, mut state) = DevJourneyBuilder::new().build(42).unwrap();
    clear_current_step(&engine, &mut state);

    let trap = trap_index(&state, 1);
    engine.apply_choice(&mut state, 1, trap);

    assert!(state.is_game_over());
    assert!(!state.has_won());
    assert_eq!(state.current_step(), 1);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_is_fresh() {
    let (mut engine, mut state) = DevJourneyBuilder::new().build(3).unwrap();
    clear_current_step(&engine, &mut state);
    let trap = trap_index(&state, 1);
    engine.apply_choice(&mut state, 1, trap);

    let fresh = engine.reset();

    assert_eq!(fresh.current_step(), 0);
    assert!(!fresh.is_game_over());
    assert!(!fresh.has_won());
    assert!(fresh.steps().iter().all(|s| !s.revealed && s.picked.is_none()));
    assert!(fresh.pending_advance().is_none());
    assert!(fresh.generation() > state.generation());
}

#[test]
fn test_reset_reshuffles() {
    let (mut engine, first) = DevJourneyBuilder::new().build(1234).unwrap();

    // Six steps of three options each: twenty identical deals in a row
    // would be astronomically unlikely.
    let any_different = (0..20).any(|_| engine.reset().steps() != first.steps());
    assert!(any_different);
}
