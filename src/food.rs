use std::collections::HashSet;

use crate::config::GridSize;
use crate::rng::GameRng;
use crate::snake::{Position, Snake};

/// Picks a food cell among those not occupied by the snake.
///
/// Open cells are enumerated row by row (y outer, x inner) so that a given
/// board and RNG state always produce the same choice. Returns `None` when
/// the snake covers the whole board; the game then continues without food
/// until a cell frees up.
#[must_use]
pub fn place_food(rng: &mut GameRng, bounds: GridSize, snake: &Snake) -> Option<Position> {
    let occupied: HashSet<Position> = snake.segments().copied().collect();

    let mut open = Vec::with_capacity(bounds.total_cells().saturating_sub(occupied.len()));
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !occupied.contains(&position) {
                open.push(position);
            }
        }
    }

    if open.is_empty() {
        return None;
    }

    // The draw is exactly 1.0 when the generator state lands on u32::MAX,
    // so the index is clamped to the last open cell.
    let index = (rng.next_f64() * open.len() as f64) as usize;
    Some(open[index.min(open.len() - 1)])
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::rng::GameRng;
    use crate::snake::{Position, Snake};

    use super::place_food;

    const BOUNDS_4X4: GridSize = GridSize {
        width: 4,
        height: 4,
    };

    #[test]
    fn placement_is_deterministic_for_a_fixed_rng_state() {
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);

        // seed 7 -> first draw 1025555898 / u32::MAX ~ 0.2388; 13 open cells,
        // row-major index 3 is (2, 1).
        let mut rng = GameRng::from_seed(7);
        assert_eq!(
            place_food(&mut rng, BOUNDS_4X4, &snake),
            Some(Position { x: 2, y: 1 })
        );

        let mut replay = GameRng::from_seed(7);
        assert_eq!(
            place_food(&mut replay, BOUNDS_4X4, &snake),
            Some(Position { x: 2, y: 1 })
        );
    }

    #[test]
    fn single_free_cell_is_always_selected() {
        let mut segments = Vec::new();
        for y in 0..8 {
            for x in 0..8 {
                if !(x == 5 && y == 5) {
                    segments.push(Position { x, y });
                }
            }
        }
        let snake = Snake::from_segments(segments);
        let bounds = GridSize {
            width: 8,
            height: 8,
        };

        for seed in 0..50 {
            let mut rng = GameRng::from_seed(seed);
            assert_eq!(
                place_food(&mut rng, bounds, &snake),
                Some(Position { x: 5, y: 5 })
            );
        }
    }

    #[test]
    fn full_board_yields_no_food() {
        let mut segments = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                segments.push(Position { x, y });
            }
        }
        let snake = Snake::from_segments(segments);

        let mut rng = GameRng::from_seed(1);
        assert_eq!(place_food(&mut rng, BOUNDS_4X4, &snake), None);
    }

    #[test]
    fn food_never_lands_on_the_snake() {
        let snake = Snake::new(Position { x: 4, y: 3 }, 3, Direction::Right);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        let mut rng = GameRng::from_seed(99);
        for _ in 0..500 {
            let food = place_food(&mut rng, bounds, &snake)
                .expect("board with free cells must yield food");
            assert!(!snake.occupies(food));
            assert!(food.is_within_bounds(bounds));
        }
    }
}
