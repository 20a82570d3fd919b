use crate::Coordinate;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};

/// Axial offsets, indexed by [`Direction::index`].
const OFFSETS: [Coordinate; 6] = [
    Coordinate::new(0, -1),
    Coordinate::new(1, -1),
    Coordinate::new(1, 0),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 1),
    Coordinate::new(-1, 0),
];

/// Direction in a hexagonal coordinate system
///
/// Assumes flat-topped hexes: `North` and `South` cross an edge, there is no east or west.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("n")]
    North,
    #[display("ne")]
    Northeast,
    #[display("se")]
    Southeast,
    #[display("s")]
    South,
    #[display("sw")]
    Southwest,
    #[display("nw")]
    Northwest,
}

impl Direction {
    /// All `Direction`s, clockwise from `North`.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::Northeast,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::Northwest,
    ];

    /// Iterate through all `Direction`s, clockwise from `North`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        (0..Self::ALL.len()).map(|idx| Self::ALL[idx])
    }

    /// Position of this direction in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The unit vector which moves one step in this direction.
    #[inline]
    pub const fn offset(self) -> Coordinate {
        OFFSETS[self.index()]
    }

    /// The opposite direction.
    ///
    /// `d.offset() + d.reverse().offset()` is always the origin.
    pub fn reverse(self) -> Direction {
        self.rotate(3)
    }

    /// The next direction clockwise.
    pub fn clockwise(self) -> Direction {
        self.rotate(1)
    }

    /// The next direction counterclockwise.
    pub fn counterclockwise(self) -> Direction {
        self.rotate(-1)
    }

    /// Turn by `steps` sixths of a full circle; positive is clockwise.
    pub fn rotate(self, steps: i32) -> Direction {
        let idx = (self.index() as i32 + steps).rem_euclid(6);
        Self::ALL[idx as usize]
    }

    /// Attempt to parse a direction from the head of the given string.
    ///
    /// Returns `(maybe_direction, unused_portion)`.
    ///
    /// Legal inputs (case sensitive): `n`, `ne`, `se`, `s`, `sw`, `nw`.
    /// The two-character forms take priority, so `"nes"` reads as `ne` followed by `s`.
    pub fn try_parse(s: &str) -> (Option<Direction>, &str) {
        let mut chars = s.chars();
        let first = chars.next();
        let second = chars.next();
        match (first, second) {
            (Some('n'), Some('e')) => (Some(Direction::Northeast), &s[2..]),
            (Some('n'), Some('w')) => (Some(Direction::Northwest), &s[2..]),
            (Some('n'), _) => (Some(Direction::North), &s[1..]),
            (Some('s'), Some('e')) => (Some(Direction::Southeast), &s[2..]),
            (Some('s'), Some('w')) => (Some(Direction::Southwest), &s[2..]),
            (Some('s'), _) => (Some(Direction::South), &s[1..]),
            _ => (None, s),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidDirection(value))
    }
}

impl From<Direction> for Coordinate {
    fn from(direction: Direction) -> Self {
        direction.offset()
    }
}

#[cfg(feature = "random")]
impl rand::distributions::Distribution<Direction> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Only six directions exist; indices are `0..6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex direction index: {0}")]
pub struct InvalidDirection(pub u8);

/// Helper for parsing a line of directions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directions(pub Vec<Direction>);

impl FromStr for Directions {
    type Err = ParseDirectionsError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        let mut directions = Vec::with_capacity(s.len());

        while !s.is_empty() {
            let (direction, remaining) = Direction::try_parse(s);
            match direction {
                None => return Err(ParseDirectionsError),
                Some(direction) => directions.push(direction),
            }

            s = remaining;
        }

        Ok(Directions(directions))
    }
}

/// Parsing failed for a line of hex directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Parsing hex direction failed")]
pub struct ParseDirectionsError;
