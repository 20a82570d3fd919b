use crate::Coordinate;
use std::{convert::TryFrom, iter::FusedIterator};

/// Round a fractional cube coordinate to the hex which contains it.
///
/// Each component rounds half-up independently; the component with the largest rounding
/// error is then recomputed from the other two so that `x + y + z == 0` holds exactly.
/// On equal errors `x` is recomputed before `y`, and `y` before `z`.
fn round_cube(x: f64, y: f64, z: f64) -> (i64, i64, i64) {
    let round = |v: f64| (v + 0.5).floor();

    let (mut rx, mut ry, mut rz) = (round(x), round(y), round(z));
    let dx = (rx - x).abs();
    let dy = (ry - y).abs();
    let dz = (rz - z).abs();

    if dx >= dy && dx >= dz {
        rx = -ry - rz;
    } else if dy >= dz {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    (rx as i64, ry as i64, rz as i64)
}

/// Iterator over the hexes of a straight line between two coordinates.
///
/// Created by [`Coordinate::line_to`]. Yields `from.distance(to) + 1` coordinates,
/// starting at `from` and ending at `to`; each is adjacent to the one before.
#[derive(Debug, Clone)]
pub struct Line {
    from: (i64, i64, i64),
    to: (i64, i64, i64),
    steps: u64,
    front: u64,
    // one past the last index still to be yielded from the back
    back: u64,
}

impl Line {
    pub(crate) fn new(from: Coordinate, to: Coordinate) -> Line {
        let steps = from.distance(to);
        log::trace!("drawing line from {} to {} in {} steps", from, to, steps);
        Line {
            from: from.to_cube(),
            to: to.to_cube(),
            steps,
            front: 0,
            back: steps + 1,
        }
    }

    /// Number of steps between the endpoints; one fewer than the number of hexes.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Hexes not yet yielded from either end.
    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }

    /// The hex at `idx` steps along the line.
    fn at(&self, idx: u64) -> Coordinate {
        // endpoints are exact; this also covers zero-length lines
        let (x, _, z) = if idx == 0 {
            self.from
        } else if idx == self.steps {
            self.to
        } else {
            let t = idx as f64 / self.steps as f64;
            let lerp = |a: i64, b: i64| a as f64 + (b - a) as f64 * t;
            round_cube(
                lerp(self.from.0, self.to.0),
                lerp(self.from.1, self.to.1),
                lerp(self.from.2, self.to.2),
            )
        };
        // every hex on the line lies between the endpoints, so this cannot truncate
        Coordinate::new(x as i32, z as i32)
    }
}

impl Iterator for Line {
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

/// Lines span at most `2 * u32::MAX` steps, which only fits a 64-bit `usize`.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Line {}

impl DoubleEndedIterator for Line {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl FusedIterator for Line {}
