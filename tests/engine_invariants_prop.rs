//! Property tests for the step kernel.
//!
//! Random seeds and random action-code streams (including unknown codes) must
//! never break the engine's structural invariants:
//! - every board cell holds 0..=7
//! - the observation shape never changes within a configuration
//! - the score is the running sum of rewards
//! - game over means no active piece, and nothing changes afterwards
//! - only recognized non-noop actions on a live piece advance the step count

use proptest::prelude::*;
use tetris_env::core::{EngineConfig, ObservationMode, Tetris};
use tetris_env::types::{Action, MAX_CELL_VALUE};

fn modes() -> impl Strategy<Value = ObservationMode> {
    prop_oneof![Just(ObservationMode::Panels), Just(ObservationMode::Flat)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rollout_preserves_invariants(
        seed in any::<u64>(),
        queue in 1usize..7,
        mode in modes(),
        codes in prop::collection::vec(-2i64..10, 1..400),
    ) {
        let config = EngineConfig::default()
            .with_seed(seed)
            .with_horizon(None)
            .with_next_queue_size(queue)
            .with_observation(mode);
        let mut game = Tetris::new(config);
        let first = game.reset();
        let dims = (first.rows, first.cols);
        prop_assert_eq!(dims, mode.dims(queue));

        let mut total = 0u32;
        let mut counted = 0u32;
        for code in codes {
            let live = !game.is_game_over() && game.active().is_some();
            let recognized = matches!(Action::from_code(code), Some(a) if a != Action::Noop);
            let before_over = game.is_game_over();
            let before_score = game.get_score();

            let result = game.step_code(code);
            total += result.reward;
            if live && recognized {
                counted += 1;
            }

            prop_assert!(game.board().cells().iter().all(|&c| c <= MAX_CELL_VALUE));
            prop_assert_eq!((result.observation.rows, result.observation.cols), dims);
            prop_assert_eq!(result.observation.len(), dims.0 * dims.1);
            prop_assert!(result.observation.as_slice().iter().all(|&c| c <= MAX_CELL_VALUE));
            prop_assert_eq!(game.get_score(), total);
            prop_assert_eq!(result.game_over, game.is_game_over());
            prop_assert_eq!(game.elapsed_steps(), counted);
            prop_assert_eq!(game.next_queue().len(), queue);

            if game.is_game_over() {
                prop_assert!(game.active().is_none());
            }
            if before_over {
                prop_assert_eq!(result.reward, 0);
                prop_assert_eq!(game.get_score(), before_score);
            }
        }
    }

    #[test]
    fn horizon_ends_episode_at_exactly_n_counted_steps(
        seed in any::<u64>(),
        horizon in 1u32..60,
    ) {
        let config = EngineConfig::default().with_seed(seed).with_horizon(Some(horizon));
        let mut game = Tetris::new(config);
        game.reset();

        // Lateral moves never lock, so the horizon is the only way to end.
        for step in 1..=horizon {
            let action = if step % 2 == 0 { Action::MoveLeft } else { Action::MoveRight };
            let result = game.step(action);
            prop_assert_eq!(result.game_over, step == horizon);
        }
        prop_assert_eq!(game.elapsed_steps(), horizon);
    }
}
