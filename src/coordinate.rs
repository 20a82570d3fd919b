use crate::{Direction, Line, Path, Ring, Spiral};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Axial hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`
///
/// ## Overflow
///
/// The operator impls follow ordinary `i32` semantics: they panic on overflow in debug builds.
/// Use [`checked_add`](Self::checked_add) and friends when the inputs are untrusted.
/// [`distance`](Self::distance) and [`line_to`](Self::line_to) cannot overflow.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({q},{r})")]
pub struct Coordinate {
    pub q: i32,
    pub r: i32,
}

impl From<(i32, i32)> for Coordinate {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

impl Coordinate {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn origin() -> Self {
        Self { q: 0, r: 0 }
    }

    /// The implicit third cube coordinate: `-q - r`.
    #[inline]
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Cube coordinates `(x, y, z)` with `x + y + z == 0`.
    ///
    /// Widened to `i64` so that `s` cannot overflow.
    pub(crate) fn to_cube(self) -> (i64, i64, i64) {
        let x = self.q as i64;
        let z = self.r as i64;
        (x, -x - z, z)
    }

    /// Multiply both components by `factor`.
    #[inline]
    pub fn scale(self, factor: i32) -> Coordinate {
        self * factor
    }

    /// The adjacent coordinate in `direction`.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> Coordinate {
        self + direction
    }

    /// Iterate over the six adjacent coordinates, clockwise from north.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// Minimum number of steps between two hexes.
    ///
    /// This is the Chebyshev distance in cube space.
    pub fn distance(self, other: Coordinate) -> u64 {
        let (ax, ay, az) = self.to_cube();
        let (bx, by, bz) = other.to_cube();
        let dx = (ax - bx).unsigned_abs();
        let dy = (ay - by).unsigned_abs();
        let dz = (az - bz).unsigned_abs();
        dx.max(dy).max(dz)
    }

    /// Iterate over the hexes of the straight line from `self` to `destination`, inclusive.
    pub fn line_to(self, destination: Coordinate) -> Line {
        Line::new(self, destination)
    }

    /// Collect the straight line from `self` to `destination`.
    pub fn draw_line(self, destination: Coordinate) -> Path {
        self.line_to(destination).into()
    }

    /// Iterate over all hexes at exactly `radius` steps from `self`.
    ///
    /// Starts at the northernmost hex and proceeds clockwise.
    /// Fails with [`Overflow`] when some hex of the ring is not representable.
    pub fn ring(self, radius: u32) -> Result<Ring, Overflow> {
        Ring::new(self, radius)
    }

    /// Iterate over all hexes within `radius` steps of `self`, ring by ring outward.
    ///
    /// Fails with [`Overflow`] under the same conditions as [`ring`](Self::ring).
    pub fn spiral(self, radius: u32) -> Result<Spiral, Overflow> {
        Spiral::new(self, radius)
    }

    pub fn checked_add(self, rhs: Coordinate) -> Result<Coordinate, Overflow> {
        Ok(Coordinate {
            q: self.q.checked_add(rhs.q).ok_or(Overflow)?,
            r: self.r.checked_add(rhs.r).ok_or(Overflow)?,
        })
    }

    pub fn checked_sub(self, rhs: Coordinate) -> Result<Coordinate, Overflow> {
        Ok(Coordinate {
            q: self.q.checked_sub(rhs.q).ok_or(Overflow)?,
            r: self.r.checked_sub(rhs.r).ok_or(Overflow)?,
        })
    }

    pub fn checked_scale(self, factor: i32) -> Result<Coordinate, Overflow> {
        Ok(Coordinate {
            q: self.q.checked_mul(factor).ok_or(Overflow)?,
            r: self.r.checked_mul(factor).ok_or(Overflow)?,
        })
    }

    pub fn checked_neighbor(self, direction: Direction) -> Result<Coordinate, Overflow> {
        self.checked_add(direction.offset())
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Self::Output {
        Coordinate {
            q: self.q + rhs.q,
            r: self.r + rhs.r,
        }
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        *self = *self + rhs;
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Self::Output {
        Coordinate {
            q: self.q - rhs.q,
            r: self.r - rhs.r,
        }
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, rhs: Coordinate) {
        *self = *self - rhs;
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: i32) -> Self::Output {
        Coordinate {
            q: self.q * rhs,
            r: self.r * rhs,
        }
    }
}

impl MulAssign<i32> for Coordinate {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Self::Output {
        Coordinate {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, rhs: Direction) {
        *self += rhs.offset();
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

/// Coordinate arithmetic left the range of `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("hex coordinate arithmetic overflowed")]
pub struct Overflow;

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    fn window(radius: i32) -> impl Iterator<Item = Coordinate> + Clone {
        iproduct!(-radius..=radius, -radius..=radius).map(Coordinate::from)
    }

    #[test]
    fn test_s_completes_cube() {
        for c in window(5) {
            let (x, y, z) = c.to_cube();
            assert_eq!(x + y + z, 0);
            assert_eq!(y, c.s() as i64);
        }
    }

    #[test]
    fn test_add_is_commutative_and_associative() {
        let coords: Vec<_> = window(2).collect();
        for (&a, &b, &c) in iproduct!(&coords, &coords, &coords) {
            assert_eq!(a + b, b + a);
            assert_eq!((a + b) + c, a + (b + c));
        }
    }

    #[test]
    fn test_sub_undoes_add() {
        for (a, b) in iproduct!(window(4), window(4)) {
            assert_eq!((a + b) - b, a);
            assert_eq!(a - a, Coordinate::origin());
            assert_eq!(a - b, a + -b);
        }
    }

    #[test]
    fn test_scale() {
        for (a, k, m) in iproduct!(window(3), -4..=4, -4..=4) {
            assert_eq!(a.scale(k).scale(m), a.scale(k * m));
        }
        for (a, b, k) in iproduct!(window(3), window(3), -3..=3) {
            assert_eq!((a + b) * k, a * k + b * k);
        }
        for a in window(3) {
            assert_eq!(a.scale(1), a);
            assert_eq!(a.scale(0), Coordinate::new(0, 0));
            assert_eq!(a.scale(-1), -a);
        }
    }

    #[test]
    fn test_assign_ops() {
        let mut c = Coordinate::new(1, -3);
        c += Coordinate::new(3, -7);
        assert_eq!(c, Coordinate::new(4, -10));
        c -= Coordinate::new(4, -10);
        assert_eq!(c, Coordinate::origin());
        c += Direction::Southeast;
        c *= 5;
        assert_eq!(c, Coordinate::new(5, 0));
    }

    #[test]
    fn test_neighbors() {
        for a in window(3) {
            let neighbors: Vec<_> = a.neighbors().collect();
            assert_eq!(neighbors.len(), 6);
            for (idx, n) in neighbors.iter().enumerate() {
                assert_eq!(a.distance(*n), 1);
                assert!(neighbors[..idx].iter().all(|other| other != n));
            }
            for direction in Direction::iter() {
                assert_eq!(a.neighbor(direction).neighbor(direction.reverse()), a);
            }
        }
    }

    #[test]
    fn test_distance_is_a_metric() {
        let coords: Vec<_> = window(3).collect();
        for (&a, &b) in iproduct!(&coords, &coords) {
            assert_eq!(a.distance(b), b.distance(a));
            assert_eq!(a.distance(b) == 0, a == b);
        }
        for (&a, &b, &c) in iproduct!(&coords, &coords, &coords) {
            assert!(a.distance(c) <= a.distance(b) + b.distance(c));
        }
    }

    #[test]
    fn test_distance_extremes() {
        let a = Coordinate::new(i32::MIN, i32::MIN);
        let b = Coordinate::new(i32::MAX, i32::MAX);
        assert_eq!(a.distance(b), 2 * (u32::MAX as u64));
        assert_eq!(b.distance(a), a.distance(b));
    }

    #[test]
    fn test_checked_ops() {
        let max = Coordinate::new(i32::MAX, 0);
        assert_eq!(max.checked_add(Coordinate::new(1, 0)), Err(Overflow));
        assert_eq!(max.checked_neighbor(Direction::Southeast), Err(Overflow));
        assert_eq!(
            max.checked_neighbor(Direction::Northwest),
            Ok(Coordinate::new(i32::MAX - 1, 0))
        );
        assert_eq!(
            Coordinate::new(0, i32::MIN).checked_sub(Coordinate::new(0, 1)),
            Err(Overflow)
        );
        assert_eq!(max.checked_scale(2), Err(Overflow));
        assert_eq!(
            Coordinate::new(1, -3).checked_scale(2),
            Ok(Coordinate::new(2, -6))
        );
    }

    #[test]
    fn test_display_and_parse() {
        let c = Coordinate::new(-3, 12);
        assert_eq!(c.to_string(), "(-3,12)");
        assert_eq!("(-3,12)".parse::<Coordinate>().unwrap(), c);
        assert!("-3,12".parse::<Coordinate>().is_err());
        assert!("(a,1)".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_serde() {
        let c = Coordinate::new(2, -7);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"q":2,"r":-7}"#);
        assert_eq!(serde_json::from_str::<Coordinate>(&json).unwrap(), c);
    }
}
