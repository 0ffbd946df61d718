//! Property tests for the bowling engine (pure domain, no DB).

use proptest::prelude::*;

use crate::domain::errors::RollRejection;
use crate::domain::frame::FRAMES_PER_GAME;
use crate::domain::game::GameStatus;
use crate::domain::roll::PINS_PER_RACK;
use crate::domain::scoring::running_totals;
use crate::domain::test_gens::{play_out, play_to_completion, proptest_config, roll_seeds};

proptest! {
    #![proptest_config(proptest_config())]

    /// Non-strike regular frames never hold more than ten pins.
    #[test]
    fn prop_regular_frames_respect_rack(seeds in roll_seeds()) {
        let game = play_out(&seeds);
        for frame in game.frames().iter().filter(|f| !f.is_tenth()) {
            prop_assert!(frame.rolls().len() <= 2);
            if frame.rolls().first().is_some_and(|r| r.is_strike()) {
                prop_assert_eq!(frame.rolls().len(), 1);
            } else {
                prop_assert!(frame.pins_knocked() <= u16::from(PINS_PER_RACK));
            }
        }
    }

    /// Any rejected roll leaves the game untouched.
    #[test]
    fn prop_rejection_is_side_effect_free(
        seeds in roll_seeds(),
        frame in -2i32..=12,
        pins in -2i32..=12,
    ) {
        let mut game = play_out(&seeds);
        let before = game.clone();
        if game.submit_roll(frame, pins).is_err() {
            prop_assert_eq!(game, before);
        }
    }

    /// Rolls addressed to any frame but the active one are refused.
    #[test]
    fn prop_only_active_frame_accepts(seeds in roll_seeds(), frame in 1i32..=10, pins in 0i32..=10) {
        let mut game = play_out(&seeds);
        if let Some(active) = game.active_frame() {
            let before = game.clone();
            let requested = u8::try_from(frame).unwrap();
            let result = game.submit_roll(frame, pins);
            if requested > active {
                prop_assert_eq!(result, Err(RollRejection::FrameMismatch { requested, active }));
            } else if requested < active {
                prop_assert_eq!(result, Err(RollRejection::FrameAlreadyComplete { frame: requested }));
            }
            if requested != active {
                prop_assert_eq!(game, before);
            }
        }
    }

    /// Totals never exceed a perfect game and never decrease.
    #[test]
    fn prop_total_bounded_and_monotonic(seeds in roll_seeds()) {
        let mut previous = 0u16;
        for n in 0..=seeds.len() {
            let total = play_out(&seeds[..n]).total_score();
            prop_assert!(total <= 300);
            prop_assert!(total >= previous);
            previous = total;
        }
    }

    /// A finished game has every frame resolved and matching running totals.
    #[test]
    fn prop_complete_game_fully_resolved(seeds in roll_seeds()) {
        let game = play_to_completion(&seeds);
        prop_assert_eq!(game.status(), GameStatus::Complete);
        let scores = game.scores();
        prop_assert!(scores.iter().all(|s| s.is_resolved()));
        prop_assert_eq!(scores.len(), usize::from(FRAMES_PER_GAME));
        let totals = running_totals(&scores);
        prop_assert_eq!(totals.last().copied().flatten(), Some(game.total_score()));
    }

    /// Replaying stored rolls reproduces the game exactly.
    #[test]
    fn prop_replay_round_trips(seeds in roll_seeds()) {
        let game = play_out(&seeds);
        let stored: Vec<Vec<u8>> = game.frames().iter().map(|f| f.pin_counts()).collect();
        prop_assert_eq!(crate::domain::game::GameState::replay(&stored), Ok(game));
    }
}
