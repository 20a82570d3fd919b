use crate::{Coordinate, Line};
use itertools::Itertools;
use std::{fmt, iter::FromIterator, ops::Deref};

/// An ordered sequence of hexes.
///
/// Displays as `[(q1,r1) (q2,r2) ...]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(pub Vec<Coordinate>);

impl Path {
    /// `true` when every hex is adjacent to the one before it.
    ///
    /// Empty and single-hex paths are trivially contiguous.
    pub fn is_contiguous(&self) -> bool {
        self.0
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.distance(*b) == 1)
    }
}

impl Deref for Path {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().format(" "))
    }
}

impl FromIterator<Coordinate> for Path {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Line> for Path {
    fn from(line: Line) -> Self {
        line.collect()
    }
}

impl From<Path> for Vec<Coordinate> {
    fn from(Path(coordinates): Path) -> Self {
        coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_display() {
        assert_eq!(Path::default().to_string(), "[]");
        let path = Path(vec![Coordinate::new(0, 0)]);
        assert_eq!(path.to_string(), "[(0,0)]");
        let path: Path = vec![Coordinate::new(1, -1), Coordinate::new(-2, 3)]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "[(1,-1) (-2,3)]");
    }

    #[test]
    fn test_is_contiguous() {
        assert!(Path::default().is_contiguous());

        let walk: Path = std::iter::successors(Some(Coordinate::origin()), |c| {
            Some(*c + Direction::Northeast)
        })
        .take(5)
        .collect();
        assert!(walk.is_contiguous());

        let gap = Path(vec![Coordinate::new(0, 0), Coordinate::new(2, 0)]);
        assert!(!gap.is_contiguous());

        let stutter = Path(vec![Coordinate::new(0, 0), Coordinate::new(0, 0)]);
        assert!(!stutter.is_contiguous());
    }

    #[test]
    fn test_from_line() {
        let path = Path::from(Coordinate::new(0, 0).line_to(Coordinate::new(0, 3)));
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&Coordinate::new(0, 3)));
        assert!(path.is_contiguous());
    }
}
