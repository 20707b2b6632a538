// SPDX-License-Identifier: MIT
//
// Cell — one position in the stitch grid.
//
// A cell records two things: which of its edges carry a stitch line, and
// which of the two display colors fills it. Only top and right edges are
// stored. A cell's bottom edge is the top edge of the cell below, and its
// left edge is the right edge of the cell to the left, so every interior
// boundary is represented exactly once.
//
// Size: 2 bytes per cell. A 257×257 grid is ~130 KB.

// ─── Boundary Flags ──────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Stitch boundaries running along a cell's edges.
    ///
    /// ```
    /// use hz_grid::cell::Bounds;
    ///
    /// let both = Bounds::TOP | Bounds::RIGHT;
    /// assert!(both.contains(Bounds::TOP));
    /// assert!(!Bounds::RIGHT.contains(Bounds::TOP));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Bounds: u8 {
        /// A horizontal stitch runs along the top edge.
        const TOP   = 1 << 0;
        /// A vertical stitch runs along the right edge.
        const RIGHT = 1 << 1;
    }
}

// ─── Color Choice ────────────────────────────────────────────────────────────

/// Which of the two display colors fills a cell.
///
/// The grid never stores actual colors; the rasterizer resolves a choice
/// against a palette at render time, so the same grid can be painted with
/// any pair of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ColorChoice {
    /// The first color. Always the color of cell (0, 0).
    #[default]
    A,
    /// The second color.
    B,
}

impl ColorChoice {
    /// The other color.
    ///
    /// ```
    /// use hz_grid::cell::ColorChoice;
    ///
    /// assert_eq!(ColorChoice::A.flip(), ColorChoice::B);
    /// assert_eq!(ColorChoice::B.flip().flip(), ColorChoice::B);
    /// ```
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Inherit from a neighbor: flip across a boundary, keep otherwise.
    #[inline]
    #[must_use]
    pub const fn across(self, bounded: bool) -> Self {
        if bounded { self.flip() } else { self }
    }
}

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A single grid position: boundary flags plus a fill color choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Cell {
    /// Which edges carry a stitch line.
    pub bounds: Bounds,
    /// Which palette color fills the cell.
    pub color: ColorChoice,
}

impl Cell {
    /// Compute the boundary flags for the cell at `(row, col)`.
    ///
    /// `vertical_bit` is the parity bit for the cell's row and
    /// `horizontal_bit` the parity bit for its column. A stitch runs along
    /// the top edge when the row bit equals "column is even", and along the
    /// right edge when the column bit equals "row is even". Flipping a bit
    /// shifts that row's (or column's) stitches over by one, which is what
    /// gives the running-stitch offset.
    ///
    /// The color is left at [`ColorChoice::A`]; propagation is the grid's job.
    #[must_use]
    pub fn classify(row: usize, col: usize, vertical_bit: bool, horizontal_bit: bool) -> Self {
        let mut bounds = Bounds::empty();
        bounds.set(Bounds::TOP, vertical_bit == is_even(col));
        bounds.set(Bounds::RIGHT, horizontal_bit == is_even(row));
        Self {
            bounds,
            color: ColorChoice::A,
        }
    }

    /// Return a copy with the given color choice.
    #[inline]
    #[must_use]
    pub const fn with_color(self, color: ColorChoice) -> Self {
        Self { color, ..self }
    }

    /// Whether a stitch runs along the top edge.
    #[inline]
    #[must_use]
    pub const fn top_bound(self) -> bool {
        self.bounds.contains(Bounds::TOP)
    }

    /// Whether a stitch runs along the right edge.
    #[inline]
    #[must_use]
    pub const fn right_bound(self) -> bool {
        self.bounds.contains(Bounds::RIGHT)
    }
}

#[inline]
const fn is_even(n: usize) -> bool {
    n % 2 == 0
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── ColorChoice ─────────────────────────────────────────────────────

    #[test]
    fn default_choice_is_a() {
        assert_eq!(ColorChoice::default(), ColorChoice::A);
    }

    #[test]
    fn flip_is_an_involution() {
        for c in [ColorChoice::A, ColorChoice::B] {
            assert_ne!(c.flip(), c);
            assert_eq!(c.flip().flip(), c);
        }
    }

    #[test]
    fn across_flips_only_when_bounded() {
        assert_eq!(ColorChoice::A.across(false), ColorChoice::A);
        assert_eq!(ColorChoice::A.across(true), ColorChoice::B);
        assert_eq!(ColorChoice::B.across(true), ColorChoice::A);
    }

    // ── Classification ──────────────────────────────────────────────────

    #[test]
    fn set_row_bit_bounds_even_columns() {
        assert!(Cell::classify(0, 0, true, false).top_bound());
        assert!(!Cell::classify(0, 1, true, false).top_bound());
        assert!(Cell::classify(0, 2, true, false).top_bound());
    }

    #[test]
    fn clear_row_bit_bounds_odd_columns() {
        assert!(!Cell::classify(3, 0, false, false).top_bound());
        assert!(Cell::classify(3, 1, false, false).top_bound());
    }

    #[test]
    fn column_bit_controls_right_edge_by_row_parity() {
        assert!(Cell::classify(0, 5, false, true).right_bound());
        assert!(!Cell::classify(1, 5, false, true).right_bound());
        assert!(!Cell::classify(0, 5, false, false).right_bound());
        assert!(Cell::classify(1, 5, false, false).right_bound());
    }

    #[test]
    fn classify_leaves_color_at_a() {
        let cell = Cell::classify(7, 3, true, true);
        assert_eq!(cell.color, ColorChoice::A);
        assert_eq!(cell.with_color(ColorChoice::B).color, ColorChoice::B);
        assert_eq!(cell.with_color(ColorChoice::B).bounds, cell.bounds);
    }

    #[test]
    fn cell_is_two_bytes() {
        assert_eq!(std::mem::size_of::<Cell>(), 2);
    }
}
