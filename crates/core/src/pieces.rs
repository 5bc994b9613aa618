//! Pieces module - block shapes and the standard catalog
//!
//! A shape is a set of integer grid offsets relative to an anchor. The anchor
//! does not have to be one of the cells, and offsets may be negative.
//! Shapes up to a 3x3 square are stored inline; larger custom shapes spill to
//! the heap. There is no cap on cell count.

use smallvec::SmallVec;
use thiserror::Error;

use crate::types::{Coord, GridPos, PaletteIndex, MAX_BOARD_SIZE};

/// Cells kept inline before a shape allocates
const INLINE_CELLS: usize = 9;

/// Largest offset magnitude on either axis; anything further can never land on a board
pub const MAX_OFFSET: Coord = MAX_BOARD_SIZE as Coord;

/// Reasons a list of offsets cannot form a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no cells")]
    Empty,
    #[error("shape lists offset {0} more than once")]
    Duplicate(GridPos),
    #[error("shape offset {0} is further than {max} cells from the anchor", max = MAX_OFFSET)]
    OffsetOutOfRange(GridPos),
}

/// Palette-free set of cell offsets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    offsets: SmallVec<[GridPos; INLINE_CELLS]>,
}

impl Shape {
    /// Validate and build a shape. Order of offsets is preserved.
    pub fn new<I, P>(offsets: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<GridPos>,
    {
        let mut out: SmallVec<[GridPos; INLINE_CELLS]> = SmallVec::new();
        for p in offsets {
            let p = p.into();
            if p.x.unsigned_abs() > MAX_OFFSET as u32 || p.y.unsigned_abs() > MAX_OFFSET as u32 {
                return Err(ShapeError::OffsetOutOfRange(p));
            }
            if out.contains(&p) {
                return Err(ShapeError::Duplicate(p));
            }
            out.push(p);
        }
        if out.is_empty() {
            return Err(ShapeError::Empty);
        }
        Ok(Self { offsets: out })
    }

    /// Parse `#`/`.` rows; column index is dx, row index is dy.
    pub fn parse(ascii: &str) -> Result<Self, ShapeError> {
        let cells = ascii
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .flat_map(|(dy, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == '#')
                    .map(move |(dx, _)| GridPos::new(dx as Coord, dy as Coord))
            });
        Self::new(cells)
    }

    pub fn offsets(&self) -> &[GridPos] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always false for a validated shape; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Smallest and largest offsets on each axis: `(min, max)`
    pub fn bounds(&self) -> (GridPos, GridPos) {
        let mut min = GridPos::new(Coord::MAX, Coord::MAX);
        let mut max = GridPos::new(Coord::MIN, Coord::MIN);
        for p in &self.offsets {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }
}

/// A shape tagged with the palette it will be drawn (and cleared) with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    palette_index: PaletteIndex,
}

impl Piece {
    pub fn new<I, P>(offsets: I, palette_index: PaletteIndex) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<GridPos>,
    {
        Ok(Self::from_shape(Shape::new(offsets)?, palette_index))
    }

    pub fn from_shape(shape: Shape, palette_index: PaletteIndex) -> Self {
        Self {
            shape,
            palette_index,
        }
    }

    /// Parse `#`/`.` rows into a piece
    pub fn parse(ascii: &str, palette_index: PaletteIndex) -> Result<Self, ShapeError> {
        Ok(Self::from_shape(Shape::parse(ascii)?, palette_index))
    }

    /// Same shape, different palette
    pub fn with_palette(&self, palette_index: PaletteIndex) -> Self {
        Self {
            shape: self.shape.clone(),
            palette_index,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Relative offsets of each cell
    pub fn cells(&self) -> &[GridPos] {
        self.shape.offsets()
    }

    pub fn len(&self) -> usize {
        self.shape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    pub fn palette_index(&self) -> PaletteIndex {
        self.palette_index
    }

    /// Board cells covered when the piece's anchor sits on `origin`
    pub fn absolute_cells(&self, origin: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        self.cells().iter().map(move |&offset| origin + offset)
    }
}

/// All shapes of the standard set, in catalog order.
///
/// Bars, squares, corners, T and S/Z pieces, each in every distinct orientation.
pub fn standard_catalog() -> Vec<Shape> {
    const SOURCES: &[&str] = &[
        // singles and bars
        "#",
        "##",
        "#\n#",
        "###",
        "#\n#\n#",
        "####",
        "#\n#\n#\n#",
        "#####",
        "#\n#\n#\n#\n#",
        // squares
        "##\n##",
        "###\n###\n###",
        // small corners
        "##\n#.",
        "##\n.#",
        "#.\n##",
        ".#\n##",
        // big corners
        "###\n#..\n#..",
        "###\n..#\n..#",
        "#..\n#..\n###",
        "..#\n..#\n###",
        // T
        "###\n.#.",
        ".#.\n###",
        "#.\n##\n#.",
        ".#\n##\n.#",
        // S / Z
        ".##\n##.",
        "##.\n.##",
        "#.\n##\n.#",
        ".#\n##\n#.",
    ];
    SOURCES
        .iter()
        .filter_map(|src| Shape::parse(src).ok())
        .collect()
}
