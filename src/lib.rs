//! Geometry for hexagonal tile grids.
//!
//! - [`geometry::Coordinate`]: cube coordinates, distance, direction finding and rounding
//! - [`geometry::Direction`]: the 6 unit moves between adjacent hexes
//! - [`geometry::Line`]: the hexes along a straight line
//! - [`geometry::offset`]: conversion between hex space and dense array space
//! - [`geometry::Grid`]: dense storage for a rectangle of hexes
//!
//! The library logs through the [`log`] facade and never installs a logger itself.

pub mod config;
pub mod geometry;

pub use config::GridConfig;
pub use geometry::{BoundsError, Coordinate, Direction, Grid, Line, Offset};
