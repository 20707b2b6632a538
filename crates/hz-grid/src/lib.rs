// SPDX-License-Identifier: MIT
//
// hz-grid — Grid builder for hitomezashi stitch patterns.
//
// Two parity sequences go in, one per column (horizontal) and one per row
// (vertical). Out comes an immutable row-major grid of cells, each knowing
// whether a stitch runs along its top and right edges and which of the two
// display colors fills it.
//
// Boundary classification is a pure function of (row, col). Color is not:
// every cell after the first inherits from exactly one already-finalized
// neighbor (left, or above when starting a row), so the scan is strictly
// row-major and happens once. Nothing here knows about pixels; the
// rasterizer lives in hz-raster.

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::{Bounds, Cell, ColorChoice};
pub use error::{Error, Result};
pub use grid::{Grid, PatternSpec, build_grid};
