use rand::Rng;
use tracing::debug;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Tops `foods` up to `target_count` positions sampled uniformly at random.
///
/// A sampled position is rejected while it lies on the snake or on another
/// food. The number of additions is capped by the free cells left on the
/// grid, so this always terminates even when the board cannot hold
/// `target_count` foods. Returns the number of foods added.
pub fn generate_food<R: Rng + ?Sized>(
    foods: &mut Vec<Position>,
    snake: &Snake,
    target_count: usize,
    bounds: GridSize,
    rng: &mut R,
) -> usize {
    let wanted = target_count
        .saturating_sub(foods.len())
        .min(free_cells(foods, snake, bounds));

    let mut added = 0;
    while added < wanted {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if snake.occupies(candidate) || foods.contains(&candidate) {
            continue;
        }

        debug!(x = candidate.x, y = candidate.y, "placed food");
        foods.push(candidate);
        added += 1;
    }

    added
}

/// Counts in-bounds cells that hold neither a snake segment nor food.
#[must_use]
pub fn free_cells(foods: &[Position], snake: &Snake, bounds: GridSize) -> usize {
    let mut free = 0;
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) && !foods.contains(&position) {
                free += 1;
            }
        }
    }
    free
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{free_cells, generate_food};

    fn bounds(width: u16, height: u16) -> GridSize {
        GridSize { width, height }
    }

    #[test]
    fn food_never_overlaps_snake_or_other_food() {
        let snake = Snake::new(3);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut foods = Vec::new();

            let added = generate_food(&mut foods, &snake, 10, bounds(6, 4), &mut rng);

            assert_eq!(added, 10);
            assert_eq!(foods.len(), 10);
            assert!(foods.iter().all(|food| !snake.occupies(*food)));
            let unique: HashSet<_> = foods.iter().collect();
            assert_eq!(unique.len(), foods.len());
        }
    }

    #[test]
    fn existing_foods_are_kept_and_topped_up() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::new(2);
        let mut foods = vec![Position::new(4, 4)];

        let added = generate_food(&mut foods, &snake, 3, bounds(5, 5), &mut rng);

        assert_eq!(added, 2);
        assert_eq!(foods.len(), 3);
        assert_eq!(foods[0], Position::new(4, 4));
    }

    #[test]
    fn no_food_is_added_when_target_is_already_met() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::new(2);
        let mut foods = vec![Position::new(1, 1), Position::new(2, 2)];

        let added = generate_food(&mut foods, &snake, 2, bounds(5, 5), &mut rng);

        assert_eq!(added, 0);
        assert_eq!(foods.len(), 2);
    }

    #[test]
    fn fills_the_last_free_cells_and_stops() {
        let mut rng = StdRng::seed_from_u64(5);
        let snake = Snake::from_segments(
            vec![Position::new(0, 0), Position::new(1, 0)],
            Direction::Left,
        );
        let mut foods = Vec::new();

        let added = generate_food(&mut foods, &snake, 10, bounds(2, 2), &mut rng);

        assert_eq!(added, 2);
        assert!(foods.contains(&Position::new(0, 1)));
        assert!(foods.contains(&Position::new(1, 1)));
        assert_eq!(free_cells(&foods, &snake, bounds(2, 2)), 0);
    }

    #[test]
    fn free_cells_ignores_out_of_bounds_segments() {
        let snake = Snake::from_segments(
            vec![Position::new(-1, 0), Position::new(0, 0)],
            Direction::Left,
        );

        assert_eq!(free_cells(&[], &snake, bounds(3, 3)), 8);
    }
}
