use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one cell toward `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body (head first), heading and the tail cached by the last move.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    left_over: Position,
}

impl Snake {
    /// Creates a snake of `length` segments along row 0, heading right,
    /// with its tail at the origin.
    ///
    /// # Panics
    ///
    /// Panics when `length` is zero; configuration validation rejects it.
    #[must_use]
    pub fn new(length: usize) -> Self {
        assert!(length > 0, "snake must have at least one segment");

        let segments = (0..length)
            .rev()
            .map(|x| Position::new(x as i32, 0))
            .collect();

        Self::from_segments(segments, Direction::Right)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        let body = VecDeque::from(segments);
        let left_over = *body
            .back()
            .expect("snake body must always contain at least one segment");

        Self {
            body,
            direction,
            left_over,
        }
    }

    /// Changes heading unless `direction` would reverse the snake onto itself.
    pub fn turn(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Advances one cell in the current direction, keeping the length.
    ///
    /// The dropped tail is remembered so a following [`Snake::grow`] in the
    /// same tick can put it back.
    pub fn move_forward(&mut self) {
        let next_head = self.head().stepped(self.direction);

        if let Some(tail) = self.body.pop_back() {
            self.left_over = tail;
        }
        self.body.push_front(next_head);
    }

    /// Re-attaches the tail dropped by the most recent move.
    pub fn grow(&mut self) {
        self.body.push_back(self.left_over);
    }

    /// Returns true when the head sits on `food`.
    #[must_use]
    pub fn ate_food(&self, food: Position) -> bool {
        self.head() == food
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn hit_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
