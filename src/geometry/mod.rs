pub mod grid;
pub mod hex;
pub mod offset;

pub use grid::{BoundsError, Grid};
pub use hex::{Coordinate, Direction, Line};
pub use offset::{to_hex, to_offset, Offset};
