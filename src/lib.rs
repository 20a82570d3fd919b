//! Hexagonal grid geometry in axial coordinates.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod coordinate;
pub mod direction;
pub mod line;
pub mod path;
pub mod ring;

pub use coordinate::{Coordinate, Overflow};
pub use direction::{Direction, Directions, InvalidDirection, ParseDirectionsError};
pub use line::Line;
pub use path::Path;
pub use ring::{Ring, Spiral};
