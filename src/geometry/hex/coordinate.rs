use std::{
    convert::TryFrom,
    fmt,
    ops::{Add, AddAssign},
};

use super::{direction::Direction, line::Line};

/// Cube hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Only `x` and `y` are stored; `z` is derived, so the constraint
/// `x + y + z == 0` cannot be violated.
///
/// Hexes are pointy-topped. East is positive x, west negative x; northeast is
/// positive y, southwest negative y.
///
/// ## Supported domain
///
/// Coordinate math is total for coordinates whose `x`, `y` and `z` all lie within
/// `±`[`Coordinate::MAX_COMPONENT`]. Distances, direction finding, line tracing and
/// conversion to [`Offset`][crate::geometry::Offset] never overflow there. Outside that
/// range, arithmetic may overflow `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// The origin, `<0, 0>`.
    pub const ORIGIN: Coordinate = Coordinate::new(0, 0);

    /// Largest magnitude of any component within the supported domain.
    pub const MAX_COMPONENT: i32 = (1 << 30) - 1;

    /// Construct a coordinate; `z` is derived as `-x - y`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn z(self) -> i32 {
        -self.x - self.y
    }

    /// A new coordinate offset by `<dx, dy>`.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Coordinate {
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// A new coordinate `amount` steps away in `direction`.
    ///
    /// Negative amounts step backwards.
    #[inline]
    pub const fn translate_dir(self, direction: Direction, amount: i32) -> Coordinate {
        self.translate(direction.offset_x() * amount, direction.offset_y() * amount)
    }

    /// The adjacent coordinate in `direction`.
    #[inline]
    pub const fn step(self, direction: Direction) -> Coordinate {
        self.translate_dir(direction, 1)
    }

    /// All 6 adjacent coordinates, in [`Direction::iter`] order.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = Coordinate> {
        Direction::iter().map(move |direction| self + direction)
    }

    /// `true` when every component lies within `±`[`Coordinate::MAX_COMPONENT`].
    pub fn is_supported(self) -> bool {
        let within = |component: i64| component.abs() <= i64::from(Self::MAX_COMPONENT);
        within(i64::from(self.x)) && within(i64::from(self.y)) && within(self.z_wide())
    }

    /// `z`, computed without any chance of overflow.
    fn z_wide(self) -> i64 {
        -i64::from(self.x) - i64::from(self.y)
    }

    /// Number of single steps needed to get from `self` to `other`.
    ///
    /// Saturates at `i32::MAX` for coordinates outside the supported domain.
    pub fn distance_to(self, other: Coordinate) -> i32 {
        // the three deltas sum to zero, so their magnitudes sum to an even number
        i32::try_from(l1_wide(self, other, (0, 0, 0)) / 2).unwrap_or(i32::MAX)
    }

    /// The direction which most closely points from `self` towards `other`.
    ///
    /// Each direction's unit vector is scaled by the distance between the coordinates,
    /// and the one with the least L1 error against the true offset wins. Ties go to
    /// whichever direction comes first in [`Direction::iter`].
    ///
    /// The offset compared against is `other - self`, so the result points from `self`
    /// to `other`.
    ///
    /// When `other == self` there is nothing to point at; this returns [`Direction::East`].
    pub fn direction_towards(self, other: Coordinate) -> Direction {
        let magnitude = l1_wide(self, other, (0, 0, 0)) / 2;
        if magnitude == 0 {
            return Direction::East;
        }

        let mut best = Direction::East;
        let mut least_error = i64::MAX;
        for direction in Direction::iter() {
            let scaled = (
                i64::from(direction.offset_x()) * magnitude,
                i64::from(direction.offset_y()) * magnitude,
                i64::from(direction.offset_z()) * magnitude,
            );
            let error = l1_wide(self, other, scaled);
            if error < least_error {
                least_error = error;
                best = direction;
            }
        }
        best
    }

    /// Snap a continuous cube position to the nearest hex.
    ///
    /// Each component is rounded independently; exact halves round toward positive
    /// infinity. The component which moved the furthest is then discarded and
    /// recomputed from the other two. If no component strictly dominates, precedence
    /// goes `x`, then `y`, then `z`:
    ///
    /// - if the `x` error exceeds both others, recompute `x`
    /// - else if the `y` error exceeds the `z` error, recompute `y`
    /// - otherwise recompute `z`
    ///
    /// Inputs are usually produced with `z = -x - y`, but this is not required.
    ///
    /// Non-finite inputs and results beyond the range of `i32` saturate: `NaN` becomes
    /// `0`, and anything too large becomes `i32::MAX` or `i32::MIN`.
    pub fn round(x: f64, y: f64, z: f64) -> Coordinate {
        let round_half_up = |value: f64| (value + 0.5).floor();

        let mut rx = round_half_up(x);
        let mut ry = round_half_up(y);
        let rz = round_half_up(z);

        let dx = (x - rx).abs();
        let dy = (y - ry).abs();
        let dz = (z - rz).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy > dz {
            ry = -rx - rz;
        }

        Coordinate::new(rx as i32, ry as i32)
    }

    /// Iterate over the hexes on the straight line from `self` to `other`, inclusive.
    ///
    /// See [`Line`] for details.
    pub fn line(self, other: Coordinate) -> Line {
        Line::new(self, other)
    }

    /// Collect the hexes on the straight line from `self` to `other`, inclusive.
    pub fn line_to(self, other: Coordinate) -> Vec<Coordinate> {
        self.line(other).collect()
    }
}

/// L1 norm of `(other - from) - shift`, summed over all three components in `i64`.
fn l1_wide(from: Coordinate, other: Coordinate, shift: (i64, i64, i64)) -> i64 {
    let dx = i64::from(other.x) - i64::from(from.x);
    let dy = i64::from(other.y) - i64::from(from.y);
    let dz = other.z_wide() - from.z_wide();
    (shift.0 - dx).abs() + (shift.1 - dy).abs() + (shift.2 - dz).abs()
}

impl AddAssign<Direction> for Coordinate {
    fn add_assign(&mut self, rhs: Direction) {
        *self = self.step(rhs);
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
