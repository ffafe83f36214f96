/// Direction in a hexagonal coordinate system
///
/// Assumes pointy-topped hexes: `East` and `West` cross shared edges, and the
/// remaining four directions cross the diagonal edges.
///
/// The declaration order is significant; it is the order of [`Direction::iter`]
/// and breaks ties in [`Coordinate::direction_towards`][super::Coordinate::direction_towards].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    #[display("e")]
    East,
    #[display("se")]
    Southeast,
    #[display("sw")]
    Southwest,
    #[display("w")]
    West,
    #[display("nw")]
    Northwest,
    #[display("ne")]
    Northeast,
}

impl Direction {
    /// All `Direction`s, clockwise from `East`.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::Southeast,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
        Direction::Northeast,
    ];

    /// Iterate through all `Direction`s, clockwise from `East`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::East), |direction| {
            use Direction::*;

            match direction {
                East => Some(Southeast),
                Southeast => Some(Southwest),
                Southwest => Some(West),
                West => Some(Northwest),
                Northwest => Some(Northeast),
                Northeast => None,
            }
        })
    }

    /// Unit offset `(dx, dy)` of this direction.
    ///
    /// East is positive x; northeast is positive y.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::Southeast => (1, -1),
            Direction::Southwest => (0, -1),
            Direction::West => (-1, 0),
            Direction::Northwest => (-1, 1),
            Direction::Northeast => (0, 1),
        }
    }

    /// Horizontal component of this direction.
    #[inline]
    pub const fn offset_x(self) -> i32 {
        self.offset().0
    }

    /// Diagonal component of this direction.
    #[inline]
    pub const fn offset_y(self) -> i32 {
        self.offset().1
    }

    /// Derived third component; `offset_x + offset_y + offset_z == 0`.
    #[inline]
    pub const fn offset_z(self) -> i32 {
        -self.offset_x() - self.offset_y()
    }

    /// The direction 180° across the ring.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
            Direction::West => Direction::East,
            Direction::Northwest => Direction::Southeast,
            Direction::Northeast => Direction::Southwest,
        }
    }

    /// The next direction clockwise.
    pub const fn rotate_clockwise(self) -> Direction {
        match self {
            Direction::East => Direction::Southeast,
            Direction::Southeast => Direction::Southwest,
            Direction::Southwest => Direction::West,
            Direction::West => Direction::Northwest,
            Direction::Northwest => Direction::Northeast,
            Direction::Northeast => Direction::East,
        }
    }

    /// The next direction counter-clockwise.
    pub const fn rotate_counterclockwise(self) -> Direction {
        match self {
            Direction::East => Direction::Northeast,
            Direction::Southeast => Direction::East,
            Direction::Southwest => Direction::Southeast,
            Direction::West => Direction::Southwest,
            Direction::Northwest => Direction::West,
            Direction::Northeast => Direction::Northwest,
        }
    }

    /// Sum of the magnitudes of the componentwise sum of both unit vectors.
    ///
    /// The more the directions disagree, the smaller this gets:
    ///
    /// - `0`: opposites
    /// - `2`: 120° apart
    /// - `4`: identical or adjacent
    pub fn mag_sum(self, other: Direction) -> i32 {
        (self.offset_x() + other.offset_x()).abs()
            + (self.offset_y() + other.offset_y()).abs()
            + (self.offset_z() + other.offset_z()).abs()
    }

    /// Coarse measure of how different two directions are.
    ///
    /// - `0`: the same direction
    /// - `1`: 60° apart
    /// - `2`: 120° apart
    /// - `3`: opposites
    pub fn offset_factor(self, other: Direction) -> u8 {
        match self.mag_sum(other) {
            0 => 3,
            1 | 2 => 2,
            _ if self == other => 0,
            _ => 1,
        }
    }
}
