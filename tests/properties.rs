use std::collections::HashSet;

use badge_snake::{
    Cell,
    DeadZoneMode,
    Direction,
    FruitSource,
    JoystickFilter,
    MAX_SNAKE_LEN,
    RandomSpawner,
    Snake,
    StepResult,
    StickSample,
    WallMode,
    input::ADC_CENTER,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn any_request() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::None), direction()]
}

/// A sample deflected `strength` counts from centre toward `dir`.
fn deflected(dir: Direction, strength: u16) -> StickSample {
    let (dx, dy) = dir.delta();
    let axis = |d: i8| (i32::from(ADC_CENTER) + i32::from(d) * i32::from(strength)) as u16;
    StickSample::new(axis(dx), axis(dy))
}

fn distinct_cells() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::hash_set((0..64i8, 0..32i8), 1..=MAX_SNAKE_LEN)
        .prop_map(|set| set.into_iter().map(|(x, y)| Cell::new(x, y)).collect())
}

proptest! {
    #[test]
    fn reversal_leaves_the_request_unchanged(
        committed in direction(),
        held in any_request(),
        strength in 700u16..=2047,
    ) {
        let mut filter = JoystickFilter::new(700, DeadZoneMode::Hold, held);
        let out = filter.update(deflected(committed.opposite(), strength), committed);
        prop_assert_eq!(out, held);
        prop_assert_eq!(filter.next(), held);
    }

    #[test]
    fn dead_zone_never_changes_the_request(
        dx in -699i32..=699,
        dy in -699i32..=699,
        committed in any_request(),
        held in any_request(),
    ) {
        prop_assume!(dx * dx + dy * dy < 700 * 700);
        let sample = StickSample::new(
            (i32::from(ADC_CENTER) + dx) as u16,
            (i32::from(ADC_CENTER) + dy) as u16,
        );
        let mut filter = JoystickFilter::new(700, DeadZoneMode::Hold, held);
        prop_assert_eq!(filter.update(sample, committed), held);
    }

    #[test]
    fn filter_is_idempotent(x in 0u16..=4095, y in 0u16..=4095, committed in any_request(), held in any_request()) {
        let mut filter = JoystickFilter::new(700, DeadZoneMode::Hold, held);
        let first = filter.update(StickSample::new(x, y), committed);
        let second = filter.update(StickSample::new(x, y), committed);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fruit_never_overlaps_the_body(cells in distinct_cells(), seed in any::<u64>()) {
        let snake = Snake::from_cells(&cells, MAX_SNAKE_LEN).unwrap();
        let mut spawner = RandomSpawner::seeded(seed);
        for _ in 0..16 {
            let fruit = spawner.spawn(&snake);
            prop_assert!(fruit.in_bounds());
            prop_assert!(!snake.contains(fruit));
        }
    }

    #[test]
    fn steps_keep_length_and_body_invariants(
        moves in prop::collection::vec((direction(), any::<bool>()), 1..200),
        max_len in 16usize..=MAX_SNAKE_LEN,
    ) {
        let mut snake = Snake::horizontal(16, max_len);
        for (dir, feed) in moves {
            let before = snake.len();
            let ahead = snake.head().step(dir);
            let fruit = (feed && ahead.in_bounds() && !snake.contains(ahead)).then_some(ahead);

            match snake.attempt_step(dir, fruit, WallMode::Fatal) {
                StepResult::Blocked(reason) => {
                    prop_assert!(reason.is_fatal());
                    prop_assert_eq!(snake.len(), before);
                    break;
                }
                StepResult::Moved { head, .. } => {
                    prop_assert_eq!(snake.len(), before);
                    prop_assert_eq!(head, snake.head());
                }
                StepResult::MovedAndAte { head, .. } => {
                    prop_assert_eq!(snake.len(), (before + 1).min(max_len));
                    prop_assert_eq!(head, snake.head());
                }
            }

            let cells: Vec<Cell> = snake.iter().collect();
            let unique: HashSet<Cell> = cells.iter().copied().collect();
            prop_assert_eq!(unique.len(), cells.len());
            prop_assert!(cells.iter().all(|c| c.in_bounds()));
        }
    }
}
