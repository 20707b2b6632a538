// SPDX-License-Identifier: MIT
//
// Canvas — the pixel buffer a pattern is painted onto.
//
// Design:
//
//   - Backed by an `image::RgbImage`, so the encoder gets the buffer as is.
//     Painting writes straight into the image's rows.
//
//   - Coverage is decided at pixel centers. A pixel `(px, py)` belongs to a
//     shape when `(px + 0.5, py + 0.5)` falls inside it, with half-open
//     edges so adjacent shapes never double-paint or leave a seam.
//
//   - Stroke edges can land on half pixels (an odd-width line centered on
//     an integer coordinate). All geometry is therefore carried in doubled
//     integer coordinates, which keeps it exact and free of float rounding.
//
//   - Everything clips to the buffer. Shapes may start at negative
//     coordinates or run past the right/bottom edge.

use image::RgbImage;

use crate::color::Rgb;

// ─── Canvas ──────────────────────────────────────────────────────────────────

/// An owned RGB pixel buffer.
///
/// ```
/// use hz_raster::{Canvas, Rgb};
///
/// let mut canvas = Canvas::new(8, 4, Rgb::WHITE);
/// canvas.fill_rect(2, 1, 3, 2, Rgb::BLACK);
/// assert_eq!(canvas.pixel(2, 1), Some(Rgb::BLACK));
/// assert_eq!(canvas.pixel(5, 1), Some(Rgb::WHITE));
/// assert_eq!(canvas.pixel(8, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    // ─── Construction ────────────────────────────────────────────────────

    /// Create a canvas filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.into()),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The color at `(x, y)`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image.get_pixel_checked(x, y).map(|&p| p.into())
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.image.pixels().map(|&p| p.into())
    }

    /// The backing image, ready for encoding.
    #[inline]
    #[must_use]
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Give up the backing image.
    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    // ─── Painting ────────────────────────────────────────────────────────

    /// Fill the `w × h` rectangle whose top-left corner is `(x, y)`.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgb) {
        self.fill_doubled(2 * x, 2 * y, 2 * (x + w), 2 * (y + h), color);
    }

    /// Stroke a horizontal line from `x0` to `x1` at height `y`.
    ///
    /// The stroke is `line_width` thick, centered on `y`, with square caps:
    /// it extends half the width past each endpoint so perpendicular
    /// strokes meeting at a corner join without a notch.
    pub fn stroke_hline(&mut self, x0: i64, x1: i64, y: i64, line_width: u32, color: Rgb) {
        let w = i64::from(line_width);
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        self.fill_doubled(2 * lo - w, 2 * y - w, 2 * hi + w, 2 * y + w, color);
    }

    /// Stroke a vertical line from `y0` to `y1` at column `x`.
    ///
    /// See [`stroke_hline`](Self::stroke_hline) for the stroke geometry.
    pub fn stroke_vline(&mut self, x: i64, y0: i64, y1: i64, line_width: u32, color: Rgb) {
        let w = i64::from(line_width);
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        self.fill_doubled(2 * x - w, 2 * lo - w, 2 * x + w, 2 * hi + w, color);
    }

    /// Stroke the outline of the `w × h` rectangle at `(x, y)`.
    ///
    /// Each edge is centered on the rectangle's boundary, so half the
    /// stroke falls inside and half outside.
    pub fn stroke_rect(&mut self, x: i64, y: i64, w: i64, h: i64, line_width: u32, color: Rgb) {
        self.stroke_hline(x, x + w, y, line_width, color);
        self.stroke_hline(x, x + w, y + h, line_width, color);
        self.stroke_vline(x, y, y + h, line_width, color);
        self.stroke_vline(x + w, y, y + h, line_width, color);
    }

    // ─── Internal ────────────────────────────────────────────────────────

    /// Fill the half-open region `[x0, x1) × [y0, y1)` given in doubled
    /// coordinates. Pixel `px` is covered when `x0 <= 2*px + 1 < x1`.
    fn fill_doubled(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb) {
        let (cx0, cx1) = covered_span(x0, x1, self.image.width());
        let (cy0, cy1) = covered_span(y0, y1, self.image.height());
        if cx0 >= cx1 || cy0 >= cy1 {
            return;
        }

        let color = color.into();
        for (_, row) in self.image.enumerate_rows_mut().skip(cy0).take(cy1 - cy0) {
            for (_, _, p) in row.skip(cx0).take(cx1 - cx0) {
                *p = color;
            }
        }
    }
}

/// Pixel indices `[start, end)` whose centers fall in the doubled span
/// `[lo, hi)`, clipped to `[0, limit)`.
///
/// `2*p + 1 >= lo` gives `p >= ceil((lo - 1) / 2)`, and `2*p + 1 < hi`
/// gives `p < ceil((hi - 1) / 2)`. Both reduce to `n.div_euclid(2)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn covered_span(lo: i64, hi: i64, limit: u32) -> (usize, usize) {
    let limit = i64::from(limit);
    let start = lo.div_euclid(2).clamp(0, limit);
    let end = hi.div_euclid(2).clamp(0, limit);
    // Safe: both are clamped into [0, limit] and limit fits in u32.
    (start as usize, end as usize)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
