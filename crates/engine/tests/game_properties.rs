//! Single-Game Engine Property Tests
//!
//! Drives many seeded rounds through the public API and checks the
//! invariants that make the stay/switch comparison valid:
//! - The host never opens the pick or the prize
//! - Stay keeps the pick, switch takes the last closed door
//! - Stay wins exactly when the first pick was the prize
//! - Stay and switch outcomes are always complementary

use monty_engine::{
    Door, GameEngine, GameError, GameLayout, Label, Outcome, Strategy, determine_outcome,
    final_choice_for, play_one_trial, reveal_decoy_door,
};
use monty_rng::seeded_rng;

const ROUNDS: usize = 5_000;

/// Every round respects the host's rules
#[test]
fn test_host_rules_hold_across_rounds() {
    let _ = env_logger::try_init();
    let mut rng = seeded_rng(2024);

    for _ in 0..ROUNDS {
        let trial = play_one_trial(&mut rng).unwrap();
        assert_ne!(trial.revealed, trial.initial_choice);
        assert_ne!(trial.revealed, trial.layout.prize_door());
    }
}

/// Final choices follow the strategy definitions
#[test]
fn test_final_choices_follow_strategy() {
    let mut rng = seeded_rng(7);

    for _ in 0..ROUNDS {
        let trial = play_one_trial(&mut rng).unwrap();

        let stay = final_choice_for(Strategy::Stay, trial.revealed, trial.initial_choice).unwrap();
        let switch =
            final_choice_for(Strategy::Switch, trial.revealed, trial.initial_choice).unwrap();

        assert_eq!(stay, trial.initial_choice);
        assert_ne!(switch, trial.initial_choice);
        assert_ne!(switch, trial.revealed);

        assert_eq!(determine_outcome(stay, &trial.layout), trial.stay);
        assert_eq!(determine_outcome(switch, &trial.layout), trial.switch);
    }
}

/// Stay wins iff the first pick was the prize; switch wins otherwise
#[test]
fn test_outcomes_are_complementary() {
    let mut engine = GameEngine::seeded(99);

    for _ in 0..ROUNDS {
        let trial = engine.play().unwrap();

        assert_eq!(trial.stay == Outcome::Win, trial.picked_prize());
        assert_eq!(trial.switch == Outcome::Win, !trial.picked_prize());
        assert_ne!(trial.stay, trial.switch);
    }
}

/// Malformed layouts never reach the host
#[test]
fn test_malformed_layouts_rejected() {
    let no_prize = GameLayout::new([Label::Decoy; 3]);
    let two_prizes = GameLayout::new([Label::Prize, Label::Decoy, Label::Prize]);

    assert!(matches!(no_prize, Err(GameError::InvalidArgument(_))));
    assert!(matches!(two_prizes, Err(GameError::InvalidArgument(_))));
}

/// Door identifiers outside 1..=3 are rejected before play
#[test]
fn test_bad_door_identifier_rejected() {
    assert!(matches!(
        Door::from_number(0),
        Err(GameError::InvalidArgument(_))
    ));

    let layout = GameLayout::new([Label::Prize, Label::Decoy, Label::Decoy]).unwrap();
    let pick = Door::from_number(3).unwrap();
    let mut rng = seeded_rng(0);
    assert_eq!(reveal_decoy_door(&mut rng, &layout, pick).unwrap(), Door::D2);
}
