use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Role of one grid cell for the current tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Body,
    /// Snake head, tagged with the direction it is heading toward.
    Head { facing: Direction },
    Food,
}

impl Cell {
    /// Returns true for head and body cells.
    #[must_use]
    pub fn is_snake(self) -> bool {
        matches!(self, Self::Body | Self::Head { .. })
    }
}

/// Corners of the head cell drawn rounded, so the head points where it goes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HeadRounding {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl HeadRounding {
    /// Rounds the two corners on the side the head is facing.
    #[must_use]
    pub fn facing(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                top_left: true,
                top_right: true,
                ..Self::default()
            },
            Direction::Down => Self {
                bottom_right: true,
                bottom_left: true,
                ..Self::default()
            },
            Direction::Right => Self {
                top_right: true,
                bottom_right: true,
                ..Self::default()
            },
            Direction::Left => Self {
                top_left: true,
                bottom_left: true,
                ..Self::default()
            },
        }
    }
}

/// Per-tick classification of every cell, row-major.
///
/// Derived from the snake and the food set; rebuilt from scratch each tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    bounds: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Returns the grid dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the cell at `position`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if is_out_of_bounds(position, self.bounds) {
            return None;
        }
        self.cells.get(self.index(position)).copied()
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.bounds.width))
    }

    /// Returns true when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| *cell == Cell::Empty)
    }

    /// Returns true when the snake covers every cell.
    #[must_use]
    pub fn is_fully_snaked(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_snake())
    }

    /// Counts cells with the given role.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(**cell)).count()
    }

    fn index(&self, position: Position) -> usize {
        // Callers check bounds first, so both coordinates are non-negative.
        position.y as usize * usize::from(self.bounds.width) + position.x as usize
    }
}

/// Rebuilds the full classification from the snake and the food set.
///
/// Snake cells win over food; segments outside the grid are skipped.
#[must_use]
pub fn classify_grid(snake: &Snake, foods: &[Position], bounds: GridSize) -> Grid {
    let head = snake.head();
    let mut cells = Vec::with_capacity(bounds.total_cells());

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            let cell = if snake.occupies(position) {
                if position == head {
                    Cell::Head {
                        facing: snake.direction(),
                    }
                } else {
                    Cell::Body
                }
            } else if foods.contains(&position) {
                Cell::Food
            } else {
                Cell::Empty
            };
            cells.push(cell);
        }
    }

    Grid { bounds, cells }
}

/// Returns true when `position` lies outside `[0, width) x [0, height)`.
#[must_use]
pub fn is_out_of_bounds(position: Position, bounds: GridSize) -> bool {
    position.x < 0
        || position.y < 0
        || position.x >= i32::from(bounds.width)
        || position.y >= i32::from(bounds.height)
}
