//! Pipe tile bitmask and the four connection directions
//!
//! A tile records which sides of its cell may still carry a pipe connection.
//! The fixed flag lives in its own bit so that a finished tile keeps its
//! connection pattern readable with the flag masked off.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// One of the four sides of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the previous column
    Left,
    /// Toward the next column
    Right,
    /// Toward the previous row
    Up,
    /// Toward the next row
    Down,
}

impl Direction {
    /// All directions in the order tiles are inspected
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The side a neighbor must offer for a connection across this side
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Row and column step toward the neighbor on this side
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
        }
    }

    /// Tile containing only this direction's connection bit
    pub const fn flag(self) -> Tile {
        match self {
            Self::Left => Tile::LEFT,
            Self::Right => Tile::RIGHT,
            Self::Up => Tile::UP,
            Self::Down => Tile::DOWN,
        }
    }
}

/// Connection bitmask of a single cell plus its fixed flag
///
/// Direction bits only ever get cleared during generation, and the fixed bit
/// only ever gets set, so a tile moves monotonically toward its final state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile(u16);

impl Tile {
    /// No open connections
    pub const EMPTY: Self = Self(0);
    /// Open toward the left neighbor
    pub const LEFT: Self = Self(1 << 1);
    /// Open toward the right neighbor
    pub const RIGHT: Self = Self(1 << 2);
    /// Open toward the upper neighbor
    pub const UP: Self = Self(1 << 3);
    /// Open toward the lower neighbor
    pub const DOWN: Self = Self(1 << 4);
    /// Pattern is final and will not change again
    pub const FIXED: Self = Self(1 << 10);

    /// Every direction bit
    pub const DIRECTIONS: Self = Self(Self::LEFT.0 | Self::RIGHT.0 | Self::UP.0 | Self::DOWN.0);
    /// Starting state of every cell: fully open, not fixed
    pub const INITIAL: Self = Self::DIRECTIONS;

    /// Build a tile from raw bits, dropping bits with no meaning
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & (Self::DIRECTIONS.0 | Self::FIXED.0))
    }

    /// Build an unfixed tile open toward each of the given directions
    pub fn from_directions(directions: &[Direction]) -> Self {
        directions
            .iter()
            .fold(Self::EMPTY, |tile, &direction| tile.with(direction))
    }

    /// Raw bit representation
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Connection pattern with the fixed flag masked off
    pub const fn directions(self) -> Self {
        Self(self.0 & Self::DIRECTIONS.0)
    }

    /// Whether the pattern is final
    pub const fn is_fixed(self) -> bool {
        self.0 & Self::FIXED.0 != 0
    }

    /// Whether no direction bit is set, ignoring the fixed flag
    pub const fn is_empty_pattern(self) -> bool {
        self.0 & Self::DIRECTIONS.0 == 0
    }

    /// Whether the connection toward `direction` is still open
    pub const fn has(self, direction: Direction) -> bool {
        self.0 & direction.flag().0 != 0
    }

    /// Whether every bit of `other` is also set here
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Copy with the connection toward `direction` opened
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.flag().0)
    }

    /// Copy with the connection toward `direction` closed
    #[must_use]
    pub const fn without(self, direction: Direction) -> Self {
        Self(self.0 & !direction.flag().0)
    }

    /// Copy with the fixed flag set
    #[must_use]
    pub const fn fixed(self) -> Self {
        Self(self.0 | Self::FIXED.0)
    }

    /// Number of open connections
    pub const fn open_count(self) -> u32 {
        self.directions().0.count_ones()
    }

    /// Open directions in inspection order
    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.has(direction))
    }
}

impl From<Direction> for Tile {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}

impl BitOr for Tile {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Tile {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Tile {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Tile {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .open_directions()
            .map(|direction| match direction {
                Direction::Left => "Left",
                Direction::Right => "Right",
                Direction::Up => "Up",
                Direction::Down => "Down",
            })
            .collect();

        if self.is_fixed() {
            write!(f, "Tile({} | Fixed)", names.join(" | "))
        } else {
            write!(f, "Tile({})", names.join(" | "))
        }
    }
}
