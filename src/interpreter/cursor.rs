//! Instruction pointer: position plus direction of travel
//!
//! Movement is toroidal. Stepping off any edge of the grid re-enters on the
//! opposite edge, so a [`Cursor`] can never hold an out-of-bounds position.

use super::constants::{GRID_HEIGHT, GRID_WIDTH};
use super::random::DirectionSource;
use crate::memory::grid::Position;
use crate::memory::value::Value;
use std::fmt;

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Arrow glyph for the viewer
    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Position and direction of the instruction pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub position: Position,
    pub direction: Direction,
}

impl Cursor {
    /// Cursor at the top-left cell, moving right
    pub fn new() -> Self {
        Cursor {
            position: Position::new(0, 0),
            direction: Direction::Right,
        }
    }

    /// Move one cell along the current direction, wrapping at the edges
    pub fn advance(&mut self) {
        let Position { x, y } = self.position;
        self.position = match self.direction {
            Direction::Right => Position::new((x + 1) % GRID_WIDTH, y),
            Direction::Left => Position::new((x + GRID_WIDTH - 1) % GRID_WIDTH, y),
            Direction::Up => Position::new(x, (y + GRID_HEIGHT - 1) % GRID_HEIGHT),
            Direction::Down => Position::new(x, (y + 1) % GRID_HEIGHT),
        };
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Turn to `when_zero` if `flag` is 0, otherwise to `when_nonzero`
    pub fn branch(&mut self, flag: Value, when_zero: Direction, when_nonzero: Direction) {
        self.direction = if flag == 0 { when_zero } else { when_nonzero };
    }

    /// Turn to a direction drawn from `source`
    pub fn random_direction(&mut self, source: &mut dyn DirectionSource) {
        self.direction = source.next_direction();
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
