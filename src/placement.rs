//! Word placement definitions and coordinate types.
//!
//! A placement fixes one word at an integer grid origin, running either
//! rightwards (horizontal) or downwards (vertical). Placements are immutable
//! values: the engine builds new layouts by copying, never by mutating a
//! placement shared with a sibling search branch.

/// A 2D grid cell position. y grows downwards, matching row-major rendering.
pub type Cell = (i32, i32);

/// Reading direction of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Unit step from one letter cell to the next.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
        }
    }

    /// The perpendicular direction, used when crossing an existing word.
    #[inline]
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

/// A word fixed at a grid origin with a direction.
///
/// Letters occupy `origin + i * direction.step()` for each index `i` of the
/// word. Words are ASCII uppercase by the time they reach the engine (the
/// front end normalizes raw input), so letters are indexed as bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    word: String,
    origin_x: i32,
    origin_y: i32,
    direction: Direction,
}

impl Placement {
    pub fn new(word: impl Into<String>, origin_x: i32, origin_y: i32, direction: Direction) -> Self {
        let word = word.into();
        debug_assert!(!word.is_empty(), "placement word must be non-empty");
        Self {
            word,
            origin_x,
            origin_y,
            direction,
        }
    }

    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The word's letters as bytes, index-aligned with `cell`.
    #[inline]
    pub fn letters(&self) -> &[u8] {
        self.word.as_bytes()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    #[inline]
    pub fn origin(&self) -> Cell {
        (self.origin_x, self.origin_y)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cell occupied by the letter at index `i`.
    #[inline]
    pub fn cell(&self, i: usize) -> Cell {
        let (dx, dy) = self.direction.step();
        (self.origin_x + dx * i as i32, self.origin_y + dy * i as i32)
    }

    /// The cell of the last letter.
    #[inline]
    pub fn last_cell(&self) -> Cell {
        self.cell(self.len() - 1)
    }

    /// Iterates over `(cell, letter)` pairs in word order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.word
            .bytes()
            .enumerate()
            .map(move |(i, letter)| (self.cell(i), letter))
    }

    /// Returns the letter occupying `(x, y)`, if this placement covers it.
    pub fn letter_at(&self, x: i32, y: i32) -> Option<u8> {
        match self.direction {
            Direction::Horizontal => {
                if y != self.origin_y {
                    return None;
                }
                let offset = x - self.origin_x;
                if offset >= 0 && (offset as usize) < self.len() {
                    Some(self.letters()[offset as usize])
                } else {
                    None
                }
            }
            Direction::Vertical => {
                if x != self.origin_x {
                    return None;
                }
                let offset = y - self.origin_y;
                if offset >= 0 && (offset as usize) < self.len() {
                    Some(self.letters()[offset as usize])
                } else {
                    None
                }
            }
        }
    }

    /// Returns a copy of this placement translated by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Placement {
        Placement {
            word: self.word.clone(),
            origin_x: self.origin_x + dx,
            origin_y: self.origin_y + dy,
            direction: self.direction,
        }
    }
}
