//! Conversion between hex space and dense array space.
//!
//! Hex coordinates are unbounded and live in a skewed axial space; storage wants a
//! rectangle of `(col, row)` indices. Each row of hexes is stored as one row of the
//! array, shifted so that every other row sits half a cell to the side: the usual
//! layout for a pointy-topped grid.
//!
//! - hex to offset: `col = x + floor(y / 2)`, `row = y`
//! - offset to hex: `x = col - floor(row / 2)`, `y = row`
//!
//! Both directions use floor division, so negative rows keep alternating their shift.
//! The mapping is a bijection between coordinates in the supported domain of
//! [`Coordinate`] (every component within `±`[`Coordinate::MAX_COMPONENT`]) and their
//! offsets. Beyond that domain `x + floor(y / 2)` can overflow `i32`.

use crate::geometry::hex::Coordinate;
use num::Integer;
use std::fmt;

/// A raw `(col, row)` index into dense storage.
///
/// Offsets have no invariant of their own; whether one is usable depends on the
/// bounds of a particular [`Grid`][crate::geometry::Grid].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

impl Offset {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Offset {
        Offset { col, row }
    }
}

impl From<(i32, i32)> for Offset {
    fn from((col, row): (i32, i32)) -> Self {
        Offset::new(col, row)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

/// Convert a location in hex space to array space.
#[inline]
pub fn to_offset(coordinate: Coordinate) -> Offset {
    let y = coordinate.y();
    Offset::new(coordinate.x() + Integer::div_floor(&y, &2), y)
}

/// Convert a location in array space to hex space.
#[inline]
pub fn to_hex(offset: Offset) -> Coordinate {
    Coordinate::new(offset.col - Integer::div_floor(&offset.row, &2), offset.row)
}

impl From<Coordinate> for Offset {
    fn from(coordinate: Coordinate) -> Self {
        to_offset(coordinate)
    }
}

impl From<Offset> for Coordinate {
    fn from(offset: Offset) -> Self {
        to_hex(offset)
    }
}
