use crate::{Coordinate, Direction, Overflow};
use std::{convert::TryFrom, iter::FusedIterator, ops::RangeInclusive};

/// Iterator over the hexes at a fixed distance from a center.
///
/// Created by [`Coordinate::ring`]. Yields `6 * radius` hexes clockwise from
/// the northernmost one, or just the center when `radius == 0`.
///
/// The ring is made of six sides. Side `k` starts at the corner reached by going
/// `radius` steps in `North.rotate(k)`, and walks toward the next corner in
/// `North.rotate(k + 2)`.
#[derive(Debug, Clone)]
pub struct Ring {
    center: Coordinate,
    radius: i32,
    front: u64,
    // one past the last index still to be yielded from the back
    back: u64,
}

impl Ring {
    /// Fails unless every corner of the ring is representable.
    ///
    /// Each hex of the ring lies between two corners, so this covers the whole ring.
    pub(crate) fn new(center: Coordinate, radius: u32) -> Result<Ring, Overflow> {
        let radius = i32::try_from(radius).map_err(|_| Overflow)?;
        for corner in Direction::iter() {
            center.checked_add(corner.offset().checked_scale(radius)?)?;
        }
        Ok(Ring::unchecked(center, radius))
    }

    fn unchecked(center: Coordinate, radius: i32) -> Ring {
        let back = if radius == 0 { 1 } else { 6 * radius as u64 };
        Ring {
            center,
            radius,
            front: 0,
            back,
        }
    }

    /// Hexes not yet yielded from either end.
    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }

    fn at(&self, idx: u64) -> Coordinate {
        if self.radius == 0 {
            return self.center;
        }
        let side = (idx / self.radius as u64) as i32;
        let step = (idx % self.radius as u64) as i32;
        let corner = Direction::North.rotate(side);
        self.center + corner.offset() * self.radius + corner.rotate(2).offset() * step
    }
}

impl Iterator for Ring {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let next = self.at(self.front);
        self.front += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (
            usize::try_from(remaining).unwrap_or(usize::MAX),
            usize::try_from(remaining).ok(),
        )
    }
}

/// A ring holds at most `6 * i32::MAX` hexes, which only fits a 64-bit `usize`.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Ring {}

impl DoubleEndedIterator for Ring {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl FusedIterator for Ring {}

/// Iterator over all hexes within a distance of a center, ring by ring.
///
/// Created by [`Coordinate::spiral`].
#[derive(Debug, Clone)]
pub struct Spiral {
    center: Coordinate,
    radii: RangeInclusive<i32>,
    ring: Ring,
}

impl Spiral {
    /// Fails unless the outermost ring is representable; inner rings then are too.
    pub(crate) fn new(center: Coordinate, radius: u32) -> Result<Spiral, Overflow> {
        let outer = Ring::new(center, radius)?;
        Ok(Spiral {
            center,
            radii: 1..=outer.radius,
            ring: Ring::unchecked(center, 0),
        })
    }
}

impl Iterator for Spiral {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(coord) = self.ring.next() {
                return Some(coord);
            }
            let radius = self.radii.next()?;
            self.ring = Ring::unchecked(self.center, radius);
        }
    }
}

impl FusedIterator for Spiral {}
