// SPDX-License-Identifier: MIT
//
// hz-raster — Rasterizer for hitomezashi stitch patterns.
//
// Takes a built `hz_grid::Grid` and paints it onto an owned RGB pixel
// buffer: cell fills first, then stitch strokes on top, then a background
// colored border that masks anything spilling past the grid. Coverage is
// decided per pixel center with integer math. There is no antialiasing,
// so the same grid and palette always produce the same bytes.
//
// Encoding and delivery are the caller's business. The canvas is backed by
// an `image::RgbImage`, and `Canvas::image` hands it over as is.

pub mod canvas;
pub mod color;
pub mod palette;
pub mod raster;

pub use canvas::Canvas;
pub use color::Rgb;
pub use palette::{ColorSource, Complementary, Palette};
pub use raster::{
    BACKGROUND, BORDER_WIDTH, FOREGROUND, canvas_size, line_width, render, render_with_cell_size,
};
