// SPDX-License-Identifier: MIT
//
// Grid — the built stitch pattern.
//
// Design:
//
//   - Flat `Vec<Cell>` with row-major indexing: `index = row * width + col`.
//     The left neighbor is `index - 1` and the one above is `index - width`,
//     so propagation reads its single dependency in O(1) with no nesting.
//
//   - Construction is one forward pass. Each cell is classified, colored
//     from an already-finalized neighbor, and pushed. Nothing is revisited.
//
//   - The grid is immutable once built. Fields are private and there are
//     no `&mut` accessors; the rasterizer only borrows it.

use std::fmt;

use log::debug;

use crate::cell::{Cell, ColorChoice};
use crate::error::{Error, Result};

// ─── PatternSpec ─────────────────────────────────────────────────────────────

/// Validated input to the grid builder.
///
/// `horizontal` holds one parity bit per column and `vertical` one per row,
/// so the grid is `horizontal.len()` cells wide and `vertical.len()` tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    cell_size: u32,
}

impl PatternSpec {
    /// Validate the two parity sequences and the cell size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either sequence is empty or
    /// `cell_size` is zero.
    pub fn new(horizontal: Vec<bool>, vertical: Vec<bool>, cell_size: u32) -> Result<Self> {
        if horizontal.is_empty() {
            return Err(Error::invalid("horizontal sequence is empty"));
        }
        if vertical.is_empty() {
            return Err(Error::invalid("vertical sequence is empty"));
        }
        if cell_size == 0 {
            return Err(Error::invalid("cell size must be positive"));
        }
        Ok(Self {
            horizontal,
            vertical,
            cell_size,
        })
    }

    /// Like [`new`](Self::new), but also checks the sequences against
    /// dimensions the caller declared up front.
    ///
    /// Sequences are never truncated or padded to fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `width` differs from the
    /// horizontal length, `height` differs from the vertical length, or
    /// any check in [`new`](Self::new) fails.
    pub fn with_dimensions(
        horizontal: Vec<bool>,
        vertical: Vec<bool>,
        width: usize,
        height: usize,
        cell_size: u32,
    ) -> Result<Self> {
        if horizontal.len() != width {
            return Err(Error::invalid(format!(
                "declared width {width} does not match horizontal length {}",
                horizontal.len()
            )));
        }
        if vertical.len() != height {
            return Err(Error::invalid(format!(
                "declared height {height} does not match vertical length {}",
                vertical.len()
            )));
        }
        Self::new(horizontal, vertical, cell_size)
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.horizontal.len()
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.vertical.len()
    }

    /// Pixels per cell edge.
    #[inline]
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Build the grid. Infallible, since `new` already validated the inputs.
    #[must_use]
    pub fn build(&self) -> Grid {
        let width = self.width();
        let height = self.height();
        let mut cells: Vec<Cell> = Vec::with_capacity(width * height);

        for (row, &row_bit) in self.vertical.iter().enumerate() {
            for (col, &col_bit) in self.horizontal.iter().enumerate() {
                let cell = Cell::classify(row, col, row_bit, col_bit);
                let position = cells.len();

                let color = if position == 0 {
                    ColorChoice::A
                } else if col == 0 {
                    // Start of a row: inherit from above, across our own top edge.
                    cells[position - width].color.across(cell.top_bound())
                } else {
                    // Inherit from the left, across that neighbor's right edge.
                    let left = cells[position - 1];
                    left.color.across(left.right_bound())
                };

                cells.push(cell.with_color(color));
            }
        }

        let grid = Grid {
            width,
            height,
            cell_size: self.cell_size,
            cells,
        };

        if log::log_enabled!(log::Level::Debug) {
            let (a, b) = grid.color_counts();
            debug!(
                "built {width}x{height} grid (cell size {}): {a} A cells, {b} B cells",
                self.cell_size
            );
        }

        grid
    }
}

/// Validate the inputs and build a grid in one step.
///
/// ```
/// use hz_grid::{ColorChoice, build_grid};
///
/// let grid = build_grid(&[true, false], &[true, false], 10).unwrap();
/// assert_eq!((grid.width(), grid.height()), (2, 2));
/// assert_eq!(grid.cells()[0].color, ColorChoice::A);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either sequence is empty or
/// `cell_size` is zero.
pub fn build_grid(horizontal: &[bool], vertical: &[bool], cell_size: u32) -> Result<Grid> {
    PatternSpec::new(horizontal.to_vec(), vertical.to_vec(), cell_size).map(|spec| spec.build())
}

// ─── Grid ────────────────────────────────────────────────────────────────────

/// A fully built stitch pattern: `width × height` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Pixels per cell edge the grid was built for.
    #[inline]
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells. Never true for a built grid.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, row-major.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat index of `(row, col)`. Does not bounds-check.
    #[inline]
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// `(row, col)` of a flat index.
    #[inline]
    #[must_use]
    pub const fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// The cell at `(row, col)`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.height && col < self.width {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Number of cells filled with color A and color B.
    #[must_use]
    pub fn color_counts(&self) -> (usize, usize) {
        let a = self
            .cells
            .iter()
            .filter(|c| c.color == ColorChoice::A)
            .count();
        (a, self.cells.len() - a)
    }
}

/// ASCII diagram of the pattern, for logs and test output.
///
/// Each row draws as two lines: the top edges (`+-` where a stitch runs,
/// `+ ` where it doesn't), then the cells (`A`/`B` followed by `|` for a
/// right-edge stitch).
///
/// ```text
/// +-+ +
/// A|B
/// + +-+
/// A A|
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.top_bound() { "+-" } else { "+ " })?;
            }
            f.write_str("+\n")?;
            for cell in row {
                let letter = match cell.color {
                    ColorChoice::A => 'A',
                    ColorChoice::B => 'B',
                };
                let edge = if cell.right_bound() { '|' } else { ' ' };
                write!(f, "{letter}{edge}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
