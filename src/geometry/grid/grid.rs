use crate::{
    config::GridConfig,
    geometry::{
        hex::Coordinate,
        offset::{to_hex, to_offset, Offset},
    },
};
use std::{
    convert::TryFrom,
    fmt, hash,
    ops::{Index, IndexMut},
};

/// A Grid keeps track of the tiles of a rectangular patch of hex space.
///
/// Tiles are stored densely, by [`Offset`]: column `0..width`, row `0..height`.
/// Every cell holds an optional tile; a fresh grid is entirely empty.
///
/// There are two families of accessors:
///
/// - the `*_at_raw` methods index storage directly by [`Offset`]
/// - the plain methods take a hex [`Coordinate`], convert it, and delegate
///
/// Converting once and reusing the [`Offset`] avoids repeating the conversion for
/// callers which touch the same cell many times.
///
/// Both families fail with [`BoundsError`] outside the grid. The [`Index`] impls panic
/// instead, in the manner of slice indexing.
///
/// ## Panics
///
/// Several internal methods assume that the width and height of the grid can be
/// represented in an `i32`. Very large grids may panic if that assumption is violated.
#[derive(Clone, Default)]
pub struct Grid<Tile> {
    tiles: Vec<Option<Tile>>,
    width: usize,
    height: usize,
}

impl<Tile> Grid<Tile> {
    /// Create a new empty grid of the specified dimensions.
    pub fn new(width: usize, height: usize) -> Grid<Tile> {
        Self::procedural(width, height, |_| None)
    }

    /// Procedurally create a new `Grid` from a function of each cell's offset.
    pub fn procedural(
        width: usize,
        height: usize,
        procedure: impl Fn(Offset) -> Option<Tile>,
    ) -> Grid<Tile> {
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "grid dimensions must fit in an i32"
        );
        log::trace!("creating {}x{} hex grid", width, height);

        let area = width * height;
        let mut grid = Grid {
            tiles: Vec::with_capacity(area),
            width,
            height,
        };
        for idx in 0..area {
            let offset = grid.index2offset(idx);
            grid.tiles.push(procedure(offset));
        }
        grid
    }

    /// Create a new empty grid with the dimensions given by a configuration.
    pub fn from_config(config: &GridConfig) -> Grid<Tile> {
        Self::new(config.width, config.height)
    }

    /// Width of this grid; the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of this grid; the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` when an offset is a legal index into this grid.
    #[inline]
    pub fn in_bounds(&self, offset: Offset) -> bool {
        self.offset2index(offset).is_some()
    }

    /// `true` when a location, given either as an [`Offset`] or as a hex
    /// [`Coordinate`], lies within this grid.
    ///
    /// Never fails.
    pub fn is_valid_location(&self, location: impl Into<Offset>) -> bool {
        self.in_bounds(location.into())
    }

    /// Make a function which returns `true` when the parameter is within the bounds of this grid,
    /// without depending on the lifetime of `self`.
    pub fn make_in_bounds(&self) -> impl Fn(Offset) -> bool {
        let width = self.width;
        let height = self.height;

        move |offset| in_range(offset.col, width) && in_range(offset.row, height)
    }

    /// convert an offset into a 1d index into the tiles, if it is in bounds
    fn offset2index(&self, offset: Offset) -> Option<usize> {
        let col = usize::try_from(offset.col).ok().filter(|&col| col < self.width)?;
        let row = usize::try_from(offset.row).ok().filter(|&row| row < self.height)?;
        Some(col + (row * self.width))
    }

    /// convert a 1d index in the tiles into an offset
    fn index2offset(&self, idx: usize) -> Offset {
        make_index2offset(self.width)(idx)
    }

    fn checked_index(&self, offset: Offset) -> Result<usize, BoundsError> {
        self.offset2index(offset).ok_or(BoundsError {
            offset,
            width: self.width,
            height: self.height,
        })
    }

    /// Get the tile stored at a raw array location.
    pub fn get_at_raw(&self, offset: Offset) -> Result<Option<&Tile>, BoundsError> {
        let idx = self.checked_index(offset)?;
        Ok(self.tiles[idx].as_ref())
    }

    /// Get mutable access to the tile stored at a raw array location.
    pub fn get_at_raw_mut(&mut self, offset: Offset) -> Result<Option<&mut Tile>, BoundsError> {
        let idx = self.checked_index(offset)?;
        Ok(self.tiles[idx].as_mut())
    }

    /// Store a tile at a raw array location, returning the tile it replaced.
    pub fn set_at_raw(&mut self, offset: Offset, tile: Tile) -> Result<Option<Tile>, BoundsError> {
        let idx = self.checked_index(offset)?;
        Ok(self.tiles[idx].replace(tile))
    }

    /// Remove the tile at a raw array location, leaving the cell empty.
    pub fn take_at_raw(&mut self, offset: Offset) -> Result<Option<Tile>, BoundsError> {
        let idx = self.checked_index(offset)?;
        Ok(self.tiles[idx].take())
    }

    /// Get the tile at a hex coordinate.
    pub fn get(&self, coordinate: Coordinate) -> Result<Option<&Tile>, BoundsError> {
        self.get_at_raw(to_offset(coordinate))
    }

    /// Get mutable access to the tile at a hex coordinate.
    pub fn get_mut(&mut self, coordinate: Coordinate) -> Result<Option<&mut Tile>, BoundsError> {
        self.get_at_raw_mut(to_offset(coordinate))
    }

    /// Store a tile at a hex coordinate, returning the tile it replaced.
    pub fn set(&mut self, coordinate: Coordinate, tile: Tile) -> Result<Option<Tile>, BoundsError> {
        self.set_at_raw(to_offset(coordinate), tile)
    }

    /// Remove the tile at a hex coordinate, leaving the cell empty.
    pub fn take(&mut self, coordinate: Coordinate) -> Result<Option<Tile>, BoundsError> {
        self.take_at_raw(to_offset(coordinate))
    }

    /// Iterate over the occupied cells of this grid, by hex coordinate.
    ///
    /// Cells are visited in storage order: row by row, from column `0`.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Tile)> {
        let index2offset = make_index2offset(self.width);
        self.tiles
            .iter()
            .enumerate()
            .filter_map(move |(idx, tile)| Some((to_hex(index2offset(idx)), tile.as_ref()?)))
    }

    /// Iterate over the occupied cells of this grid, with mutable access to the tiles.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Coordinate, &mut Tile)> {
        let index2offset = make_index2offset(self.width);
        self.tiles
            .iter_mut()
            .enumerate()
            .filter_map(move |(idx, tile)| Some((to_hex(index2offset(idx)), tile.as_mut()?)))
    }

    /// Iterate over every hex coordinate within this grid, occupied or not,
    /// without depending on the lifetime of `self`.
    pub fn locations(&self) -> impl Iterator<Item = Coordinate> {
        let index2offset = make_index2offset(self.width);
        (0..self.tiles.len()).map(move |idx| to_hex(index2offset(idx)))
    }

    /// Return an iterator of all in-bounds hexes adjacent to the given hex.
    ///
    /// This iterator will return up to 6 elements.
    pub fn adjacencies(&self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> {
        let in_bounds = self.make_in_bounds();
        coordinate
            .neighbors()
            .filter(move |&neighbor| in_bounds(to_offset(neighbor)))
    }
}

fn in_range(value: i32, limit: usize) -> bool {
    usize::try_from(value).map_or(false, |value| value < limit)
}

/// make a function which converts a 1d index in the tiles into an offset without borrowing self
fn make_index2offset(width: usize) -> impl Fn(usize) -> Offset {
    move |idx| Offset::new((idx % width) as i32, (idx / width) as i32)
}

impl<Tile> fmt::Debug for Grid<Tile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Grid<{}>", std::any::type_name::<Tile>()))
            .field("width", &self.width)
            .field("height", &self.height)
            .field(
                "tiles",
                &format_args!(
                    "[{} occupied; {}]",
                    self.tiles.iter().filter(|tile| tile.is_some()).count(),
                    self.tiles.len()
                ),
            )
            .finish()
    }
}

impl<Tile: hash::Hash> hash::Hash for Grid<Tile> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
        self.width.hash(state);
        self.height.hash(state);
    }
}

impl<Tile: PartialEq> PartialEq for Grid<Tile> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.tiles == other.tiles
    }
}

impl<Tile: Eq> Eq for Grid<Tile> {}

impl<Tile> Index<Offset> for Grid<Tile> {
    type Output = Option<Tile>;

    /// Panics if `offset` is out of bounds.
    fn index(&self, offset: Offset) -> &Option<Tile> {
        match self.checked_index(offset) {
            Ok(idx) => &self.tiles[idx],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<Tile> IndexMut<Offset> for Grid<Tile> {
    /// Panics if `offset` is out of bounds.
    fn index_mut(&mut self, offset: Offset) -> &mut Option<Tile> {
        match self.checked_index(offset) {
            Ok(idx) => &mut self.tiles[idx],
            Err(err) => panic!("{}", err),
        }
    }
}

impl<Tile> Index<Coordinate> for Grid<Tile> {
    type Output = Option<Tile>;

    /// Panics if `coordinate` is out of bounds.
    fn index(&self, coordinate: Coordinate) -> &Option<Tile> {
        self.index(to_offset(coordinate))
    }
}

impl<Tile> IndexMut<Coordinate> for Grid<Tile> {
    /// Panics if `coordinate` is out of bounds.
    fn index_mut(&mut self, coordinate: Coordinate) -> &mut Option<Tile> {
        self.index_mut(to_offset(coordinate))
    }
}

/// A grid access resolved to an offset outside `[0, width) × [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("offset {offset} lies outside the {width}x{height} grid")]
pub struct BoundsError {
    pub offset: Offset,
    pub width: usize,
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::hex::Direction;
    use std::collections::HashSet;

    #[test]
    fn test_new_is_empty() {
        let grid = Grid::<u8>::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.tiles.len(), 12);
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn test_procedural() {
        let grid = Grid::procedural(2, 2, |offset| Some(offset.col + offset.row));
        assert_eq!(grid.tiles, vec![Some(0), Some(1), Some(1), Some(2)]);
        assert!(grid.iter().all(|(coordinate, &tile)| {
            let offset = to_offset(coordinate);
            offset.col + offset.row == tile
        }));
    }

    #[test]
    fn test_offset_index_conversion() {
        const EDGE: usize = 64;
        const AREA: usize = EDGE * EDGE;

        let grid = Grid::<()>::new(EDGE, EDGE);
        let mut emitted_offsets = HashSet::new();
        for idx in 0..AREA {
            let offset = grid.index2offset(idx);
            assert!(
                emitted_offsets.insert(offset),
                "no duplicate offset should ever be emitted"
            );
            assert_eq!(Some(idx), grid.offset2index(offset));
        }
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::<()>::new(5, 5);
        assert!(grid.is_valid_location(Offset::new(0, 0)));
        assert!(grid.is_valid_location(Offset::new(4, 4)));
        assert!(!grid.is_valid_location(Offset::new(5, 0)));
        assert!(!grid.is_valid_location(Offset::new(0, 5)));
        assert!(!grid.is_valid_location(Offset::new(-1, 2)));
        assert!(!grid.is_valid_location(Offset::new(2, -1)));
        assert!(!grid.is_valid_location(to_offset(Coordinate::new(10, 10))));
        assert!(!grid.is_valid_location(Coordinate::new(10, 10)));
        // row 4 shifts two columns; `<-2, 4>` lands in column 0
        assert!(grid.is_valid_location(Coordinate::new(-2, 4)));
        assert!(!grid.is_valid_location(Coordinate::new(-3, 4)));
    }

    #[test]
    fn test_make_in_bounds_agrees() {
        let grid = Grid::<()>::new(3, 7);
        let in_bounds = grid.make_in_bounds();
        for col in -2..6 {
            for row in -2..10 {
                let offset = Offset::new(col, row);
                assert_eq!(in_bounds(offset), grid.in_bounds(offset));
            }
        }
    }

    #[test]
    fn test_raw_access() {
        let mut grid = Grid::new(3, 2);
        let offset = Offset::new(2, 1);
        assert_eq!(grid.get_at_raw(offset), Ok(None));
        assert_eq!(grid.set_at_raw(offset, 'a'), Ok(None));
        assert_eq!(grid.set_at_raw(offset, 'b'), Ok(Some('a')));
        assert_eq!(grid.get_at_raw(offset), Ok(Some(&'b')));
        if let Ok(Some(tile)) = grid.get_at_raw_mut(offset) {
            *tile = 'c';
        }
        assert_eq!(grid.take_at_raw(offset), Ok(Some('c')));
        assert_eq!(grid.get_at_raw(offset), Ok(None));
    }

    #[test]
    fn test_raw_access_out_of_bounds() {
        let mut grid = Grid::new(3, 2);
        let err = BoundsError {
            offset: Offset::new(3, 0),
            width: 3,
            height: 2,
        };
        assert_eq!(grid.get_at_raw(Offset::new(3, 0)), Err(err));
        assert_eq!(grid.set_at_raw(Offset::new(3, 0), 1), Err(err));
        assert_eq!(grid.take_at_raw(Offset::new(3, 0)), Err(err));
        assert!(grid.get_at_raw_mut(Offset::new(0, -1)).is_err());
        assert_eq!(err.to_string(), "offset [3, 0] lies outside the 3x2 grid");
    }

    #[test]
    fn test_hex_access() {
        let mut grid = Grid::new(4, 4);
        let coordinate = Coordinate::new(1, 3);
        grid.set(coordinate, "tower").unwrap();
        assert_eq!(grid.get(coordinate), Ok(Some(&"tower")));
        assert_eq!(grid.get_at_raw(Offset::new(2, 3)), Ok(Some(&"tower")));
        if let Ok(Some(tile)) = grid.get_mut(coordinate) {
            *tile = "keep";
        }
        assert_eq!(grid.take(coordinate), Ok(Some("keep")));

        let err = grid.set(Coordinate::new(-1, 0), "moat").unwrap_err();
        assert_eq!(err.offset, Offset::new(-1, 0));
    }

    #[test]
    fn test_index() {
        let mut grid = Grid::new(2, 2);
        grid[Coordinate::new(0, 1)] = Some(7);
        assert_eq!(grid[Offset::new(0, 1)], Some(7));
        assert_eq!(grid[Offset::new(1, 1)], None);
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn test_index_out_of_bounds() {
        let grid = Grid::<u8>::new(2, 2);
        let _tile = &grid[Coordinate::new(5, 5)];
    }

    #[test]
    fn test_iter_skips_empty() {
        let mut grid = Grid::new(3, 3);
        grid.set(Coordinate::new(0, 2), 1).unwrap();
        grid.set(Coordinate::new(1, 0), 2).unwrap();
        let occupied: Vec<_> = grid.iter().collect();
        assert_eq!(
            occupied,
            vec![(Coordinate::new(1, 0), &2), (Coordinate::new(0, 2), &1)]
        );
        for (_, tile) in grid.iter_mut() {
            *tile *= 10;
        }
        assert_eq!(grid.get(Coordinate::new(0, 2)), Ok(Some(&10)));
    }

    #[test]
    fn test_locations_cover_grid() {
        let grid = Grid::<()>::new(4, 3);
        let locations: Vec<_> = grid.locations().collect();
        assert_eq!(locations.len(), 12);
        assert!(locations.iter().all(|&location| grid.is_valid_location(location)));
        assert_eq!(locations.iter().collect::<HashSet<_>>().len(), 12);
    }

    #[test]
    fn test_adjacencies() {
        let grid = Grid::<()>::new(3, 3);
        let center = to_hex(Offset::new(1, 1));
        assert_eq!(grid.adjacencies(center).count(), 6);

        let corner = to_hex(Offset::new(0, 0));
        let adjacent: Vec<_> = grid.adjacencies(corner).collect();
        assert_eq!(
            adjacent,
            vec![corner + Direction::East, corner + Direction::Northeast]
        );
    }

    #[test]
    fn test_debug() {
        let mut grid = Grid::new(2, 1);
        grid.set_at_raw(Offset::new(0, 0), 1_u8).unwrap();
        assert_eq!(
            format!("{:?}", grid),
            "Grid<u8> { width: 2, height: 1, tiles: [1 occupied; 2] }"
        );
    }

    #[test]
    fn test_from_config() {
        let config = GridConfig {
            width: 6,
            height: 2,
        };
        let grid = Grid::<()>::from_config(&config);
        assert_eq!((grid.width(), grid.height()), (6, 2));
    }
}
