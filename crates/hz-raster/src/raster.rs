// SPDX-License-Identifier: MIT
//
// Render pipeline — grid + palette → canvas.
//
// Paint order matters, since later passes overpaint earlier ones:
//
//   1. Clear to the background.
//   2. Fill every cell with its resolved palette color.
//   3. Stroke stitch lines in the foreground color. A top line is skipped
//      on row 0 and a right line is skipped on the last column, since
//      those edges are the grid's outer boundary.
//   4. Stroke a border around the whole canvas in the background color,
//      `BORDER_WIDTH` thick. Its inner half is exactly the padding around
//      the grid, so it masks stroke caps that spill past the cells.

use hz_grid::{Error, Grid, Result};
use log::{debug, trace};

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::palette::Palette;

/// Padding around the grid, split evenly between opposite sides.
pub const BORDER_WIDTH: u32 = 24;

/// Canvas clear color and border color.
pub const BACKGROUND: Rgb = Rgb::WHITE;

/// Stitch line color.
pub const FOREGROUND: Rgb = Rgb::BLACK;

/// Stitch line thickness for a cell size: one sixth of the cell, rounded
/// down. Cells smaller than 6px get no visible stitches.
#[inline]
#[must_use]
pub const fn line_width(cell_size: u32) -> u32 {
    cell_size / 6
}

/// Canvas dimensions for a grid: `(width * cell_size + BORDER_WIDTH,
/// height * cell_size + BORDER_WIDTH)`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the grid is empty or the dimensions
/// do not fit in a `u32`.
pub fn canvas_size(grid: &Grid) -> Result<(u32, u32)> {
    if grid.is_empty() {
        return Err(Error::InvalidInput("grid is empty".into()));
    }
    let span = |cells: usize| -> Option<u32> {
        u32::try_from(cells)
            .ok()?
            .checked_mul(grid.cell_size())?
            .checked_add(BORDER_WIDTH)
    };
    match (span(grid.width()), span(grid.height())) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(Error::InvalidInput(format!(
            "{}x{} grid at cell size {} overflows the canvas",
            grid.width(),
            grid.height(),
            grid.cell_size()
        ))),
    }
}

/// Render a grid at the cell size it was built with.
///
/// ```
/// use hz_grid::build_grid;
/// use hz_raster::{Palette, Rgb, render};
///
/// let grid = build_grid(&[true, false], &[true, false], 12).unwrap();
/// let canvas = render(&grid, &Palette::default()).unwrap();
/// assert_eq!((canvas.width(), canvas.height()), (48, 48));
/// assert_eq!(canvas.pixel(0, 0), Some(Rgb::WHITE));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the grid is empty or too large to
/// address.
pub fn render(grid: &Grid, palette: &Palette) -> Result<Canvas> {
    let (width, height) = canvas_size(grid)?;
    let size = i64::from(grid.cell_size());
    let lw = line_width(grid.cell_size());
    let half = i64::from(BORDER_WIDTH / 2);

    debug!(
        "rendering {}x{} grid to {width}x{height} canvas (line width {lw}, {} / {})",
        grid.width(),
        grid.height(),
        palette.color_a,
        palette.color_b
    );

    // Step 1: a fresh canvas starts out cleared to the background.
    let mut canvas = Canvas::new(width, height, BACKGROUND);

    // Safe: canvas_size already proved row/col * cell_size fits in u32.
    #[allow(clippy::cast_possible_wrap)]
    let origin = |index: usize| -> (i64, i64) {
        let (row, col) = grid.position_of(index);
        (col as i64 * size + half, row as i64 * size + half)
    };

    for (index, cell) in grid.cells().iter().enumerate() {
        let (x, y) = origin(index);
        canvas.fill_rect(x, y, size, size, palette.resolve(cell.color));
    }

    if lw > 0 {
        let last_col = grid.width() - 1;
        for (index, cell) in grid.cells().iter().enumerate() {
            if !(cell.top_bound() || cell.right_bound()) {
                continue;
            }
            let (row, col) = grid.position_of(index);
            let (x, y) = origin(index);

            if cell.top_bound() && row > 0 {
                trace!("top stitch at ({row}, {col})");
                canvas.stroke_hline(x, x + size, y, lw, FOREGROUND);
            }
            if cell.right_bound() && col < last_col {
                trace!("right stitch at ({row}, {col})");
                canvas.stroke_vline(x + size, y, y + size, lw, FOREGROUND);
            }
        }
    }

    canvas.stroke_rect(
        0,
        0,
        i64::from(width),
        i64::from(height),
        BORDER_WIDTH,
        BACKGROUND,
    );

    Ok(canvas)
}

/// Render, checking that the caller's cell size matches the grid's.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `cell_size` differs from the size the
/// grid was built with, or for any reason [`render`] fails.
pub fn render_with_cell_size(grid: &Grid, palette: &Palette, cell_size: u32) -> Result<Canvas> {
    if cell_size != grid.cell_size() {
        return Err(Error::InvalidInput(format!(
            "cell size {cell_size} does not match grid cell size {}",
            grid.cell_size()
        )));
    }
    render(grid, palette)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
