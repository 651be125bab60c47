//! Game - the steps of a single round
//!
//! Each function is one step of the round. They are free functions over an
//! injected generator rather than methods on shared state, so a round can be
//! replayed from a seed and several rounds can run on different threads.

use monty_core::{Door, GameError, GameLayout, GameResult, Outcome, Strategy, TrialResult};
use rand::Rng;

/// Hide the prize behind one of the three doors
///
/// A uniform permutation of {decoy, decoy, prize} is fully determined by
/// where the prize lands, so drawing the prize door uniformly is the same
/// distribution.
pub fn create_layout<R: Rng + ?Sized>(rng: &mut R) -> GameLayout {
    let prize = Door::ALL[rng.gen_range(0..Door::COUNT)];
    GameLayout::with_prize_behind(prize)
}

/// Player's first pick, uniform over the three doors
pub fn select_initial_door<R: Rng + ?Sized>(rng: &mut R) -> Door {
    Door::ALL[rng.gen_range(0..Door::COUNT)]
}

/// Door the host opens after the player's first pick
///
/// The host never opens the player's door and never opens the prize door.
/// When the player already holds the prize, the host picks either decoy
/// with probability 1/2. Otherwise exactly one decoy is left and the host
/// must open it.
pub fn reveal_decoy_door<R: Rng + ?Sized>(
    rng: &mut R,
    layout: &GameLayout,
    player_choice: Door,
) -> GameResult<Door> {
    let decoys = layout.decoy_doors();

    if layout.is_prize(player_choice) {
        let revealed = decoys[rng.gen_range(0..decoys.len())];
        log::trace!(
            "Player holds the prize behind {}, host opens {} at random",
            player_choice,
            revealed
        );
        return Ok(revealed);
    }

    let candidates: Vec<Door> = decoys
        .into_iter()
        .filter(|door| *door != player_choice)
        .collect();

    match candidates.as_slice() {
        [revealed] => Ok(*revealed),
        other => Err(GameError::InvariantViolation(format!(
            "host must have exactly one decoy to open when player picked {}, found {}",
            player_choice,
            other.len()
        ))),
    }
}

/// Door the player ends on
///
/// `stay == true` keeps the initial pick; otherwise the player moves to the
/// only door that is neither the initial pick nor the opened one.
pub fn resolve_final_choice(
    stay: bool,
    revealed_door: Door,
    player_choice: Door,
) -> GameResult<Door> {
    if revealed_door == player_choice {
        return Err(GameError::InvalidArgument(format!(
            "host cannot open the player's own pick ({})",
            player_choice
        )));
    }

    if stay {
        return Ok(player_choice);
    }

    let remaining: Vec<Door> = Door::ALL
        .into_iter()
        .filter(|door| *door != revealed_door && *door != player_choice)
        .collect();

    match remaining.as_slice() {
        [door] => Ok(*door),
        other => Err(GameError::InvariantViolation(format!(
            "switching must leave exactly one closed door, found {}",
            other.len()
        ))),
    }
}

/// [`resolve_final_choice`] keyed by strategy
pub fn final_choice_for(
    strategy: Strategy,
    revealed_door: Door,
    player_choice: Door,
) -> GameResult<Door> {
    resolve_final_choice(strategy.stays(), revealed_door, player_choice)
}

/// Win iff the final door hides the prize
pub fn determine_outcome(final_choice: Door, layout: &GameLayout) -> Outcome {
    Outcome::from_win(layout.is_prize(final_choice))
}

/// Finish a round from a known layout and first pick
pub fn play_with_layout<R: Rng + ?Sized>(
    rng: &mut R,
    layout: GameLayout,
    initial_choice: Door,
) -> GameResult<TrialResult> {
    let revealed = reveal_decoy_door(rng, &layout, initial_choice)?;

    let stay_door = final_choice_for(Strategy::Stay, revealed, initial_choice)?;
    let switch_door = final_choice_for(Strategy::Switch, revealed, initial_choice)?;

    Ok(TrialResult {
        layout,
        initial_choice,
        revealed,
        stay: determine_outcome(stay_door, &layout),
        switch: determine_outcome(switch_door, &layout),
    })
}

/// Play one full round and score both strategies against it
pub fn play_one_trial<R: Rng + ?Sized>(rng: &mut R) -> GameResult<TrialResult> {
    let layout = create_layout(rng);
    let initial_choice = select_initial_door(rng);
    play_with_layout(rng, layout, initial_choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use monty_rng::seeded_rng;

    fn all_setups() -> impl Iterator<Item = (GameLayout, Door)> {
        Door::ALL.into_iter().flat_map(|prize| {
            Door::ALL
                .into_iter()
                .map(move |pick| (GameLayout::with_prize_behind(prize), pick))
        })
    }

    #[test]
    fn test_reveal_never_opens_pick_or_prize() {
        let mut rng = seeded_rng(1);
        for (layout, pick) in all_setups() {
            for _ in 0..50 {
                let revealed = reveal_decoy_door(&mut rng, &layout, pick).unwrap();
                assert_ne!(revealed, pick);
                assert_ne!(revealed, layout.prize_door());
            }
        }
    }

    #[test]
    fn test_reveal_is_forced_when_pick_is_decoy() {
        let layout = GameLayout::with_prize_behind(Door::D1);
        let mut rng = seeded_rng(2);
        for _ in 0..20 {
            assert_eq!(
                reveal_decoy_door(&mut rng, &layout, Door::D2).unwrap(),
                Door::D3
            );
            assert_eq!(
                reveal_decoy_door(&mut rng, &layout, Door::D3).unwrap(),
                Door::D2
            );
        }
    }

    #[test]
    fn test_reveal_uses_both_decoys_when_pick_is_prize() {
        let layout = GameLayout::with_prize_behind(Door::D2);
        let mut rng = seeded_rng(3);
        let opened: Vec<Door> = (0..200)
            .map(|_| reveal_decoy_door(&mut rng, &layout, Door::D2).unwrap())
            .collect();

        let d1 = opened.iter().filter(|d| **d == Door::D1).count();
        let d3 = opened.iter().filter(|d| **d == Door::D3).count();
        assert_eq!(d1 + d3, 200);
        // Each side near 100 of 200
        assert!((60..=140).contains(&d1), "door 1 opened {} times", d1);
    }

    #[test]
    fn test_resolve_stay_keeps_pick() {
        for pick in Door::ALL {
            for revealed in pick.others() {
                assert_eq!(resolve_final_choice(true, revealed, pick).unwrap(), pick);
            }
        }
    }

    #[test]
    fn test_resolve_switch_takes_remaining_door() {
        assert_eq!(
            resolve_final_choice(false, Door::D2, Door::D1).unwrap(),
            Door::D3
        );
        assert_eq!(
            resolve_final_choice(false, Door::D3, Door::D2).unwrap(),
            Door::D1
        );
        assert_eq!(
            final_choice_for(Strategy::Switch, Door::D1, Door::D3).unwrap(),
            Door::D2
        );
    }

    #[test]
    fn test_resolve_rejects_revealing_the_pick() {
        for stay in [true, false] {
            assert!(matches!(
                resolve_final_choice(stay, Door::D2, Door::D2),
                Err(GameError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_determine_outcome_is_total() {
        let layout = GameLayout::with_prize_behind(Door::D3);
        assert_eq!(determine_outcome(Door::D1, &layout), Outcome::Lose);
        assert_eq!(determine_outcome(Door::D2, &layout), Outcome::Lose);
        assert_eq!(determine_outcome(Door::D3, &layout), Outcome::Win);
    }

    #[test]
    fn test_outcomes_are_complementary_for_every_setup() {
        let mut rng = seeded_rng(4);
        for (layout, pick) in all_setups() {
            let trial = play_with_layout(&mut rng, layout, pick).unwrap();
            assert_eq!(trial.stay, trial.switch.opposite());
            assert_eq!(trial.stay.is_win(), pick == layout.prize_door());
            assert_eq!(trial.switch.is_win(), pick != layout.prize_door());
        }
    }

    #[test]
    fn test_play_one_trial_is_reproducible() {
        let mut a = seeded_rng(5);
        let mut b = seeded_rng(5);
        for _ in 0..100 {
            assert_eq!(
                play_one_trial(&mut a).unwrap(),
                play_one_trial(&mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_create_layout_covers_every_door() {
        let mut rng = seeded_rng(6);
        let mut seen = [0usize; 3];
        for _ in 0..300 {
            seen[create_layout(&mut rng).prize_door().index()] += 1;
        }
        assert!(seen.iter().all(|count| *count > 50), "{:?}", seen);
    }
}
