// This interior module is private; we reexport its contents.
#[allow(clippy::module_inception)]
mod grid;

pub use grid::{BoundsError, Grid};
