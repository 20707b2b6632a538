//! Display colors — the pair a grid's color choices resolve against.
//!
//! A [`Palette`] is purely a rendering parameter: the grid stores only
//! [`ColorChoice`]s, and the same grid can be painted with any pair.
//! Where the pair comes from is abstracted behind [`ColorSource`], so
//! palette policy stays out of the rasterizer.

use hz_grid::ColorChoice;

use crate::color::Rgb;

// ---------------------------------------------------------------------------
// ColorSource
// ---------------------------------------------------------------------------

/// Anything that can hand out a pair of display colors.
///
/// Closures work too:
///
/// ```
/// use hz_raster::{Palette, Rgb};
///
/// let mut source = || (Rgb::new(200, 40, 40), Rgb::new(40, 200, 200));
/// let palette = Palette::from_source(&mut source);
/// assert_eq!(palette.color_a, Rgb::new(200, 40, 40));
/// ```
pub trait ColorSource {
    /// The next `(color_a, color_b)` pair.
    fn next(&mut self) -> (Rgb, Rgb);
}

impl<F> ColorSource for F
where
    F: FnMut() -> (Rgb, Rgb),
{
    fn next(&mut self) -> (Rgb, Rgb) {
        self()
    }
}

/// A base color paired with its hue complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complementary {
    base: Rgb,
}

impl Complementary {
    #[must_use]
    pub const fn new(base: Rgb) -> Self {
        Self { base }
    }
}

impl ColorSource for Complementary {
    fn next(&mut self) -> (Rgb, Rgb) {
        (self.base, self.base.complementary())
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The two fill colors for a render. Defaults to black and white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Fill for [`ColorChoice::A`] cells, including cell (0, 0).
    pub color_a: Rgb,
    /// Fill for [`ColorChoice::B`] cells.
    pub color_b: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Rgb::BLACK, Rgb::WHITE)
    }
}

impl Palette {
    #[must_use]
    pub const fn new(color_a: Rgb, color_b: Rgb) -> Self {
        Self { color_a, color_b }
    }

    /// `base` for A, its hue complement for B.
    #[must_use]
    pub fn complementary(base: Rgb) -> Self {
        Self::from_source(&mut Complementary::new(base))
    }

    /// Take one pair from a color source.
    pub fn from_source<S: ColorSource + ?Sized>(source: &mut S) -> Self {
        let (color_a, color_b) = source.next();
        Self { color_a, color_b }
    }

    /// The display color for a cell's choice.
    #[inline]
    #[must_use]
    pub const fn resolve(&self, choice: ColorChoice) -> Rgb {
        match choice {
            ColorChoice::A => self.color_a,
            ColorChoice::B => self.color_b,
        }
    }
}

impl ColorSource for Palette {
    fn next(&mut self) -> (Rgb, Rgb) {
        (self.color_a, self.color_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_black_and_white() {
        let p = Palette::default();
        assert_eq!(p.resolve(ColorChoice::A), Rgb::BLACK);
        assert_eq!(p.resolve(ColorChoice::B), Rgb::WHITE);
    }

    #[test]
    fn resolve_follows_choice() {
        let p = Palette::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        assert_eq!(p.resolve(ColorChoice::A), Rgb::new(1, 2, 3));
        assert_eq!(p.resolve(ColorChoice::B), Rgb::new(4, 5, 6));
        assert_eq!(p.resolve(ColorChoice::A.flip()), p.color_b);
    }

    #[test]
    fn complementary_pairs_base_with_complement() {
        let base = Rgb::new(0x33, 0x66, 0x99);
        let p = Palette::complementary(base);
        assert_eq!(p, Palette::new(base, Rgb::new(0x99, 0x66, 0x33)));
    }

    #[test]
    fn palette_is_a_fixed_source() {
        let mut p = Palette::new(Rgb::new(9, 9, 9), Rgb::WHITE);
        assert_eq!(p.next(), (Rgb::new(9, 9, 9), Rgb::WHITE));
        assert_eq!(p.next(), (Rgb::new(9, 9, 9), Rgb::WHITE));
    }

    #[test]
    fn stateful_closure_source() {
        let table = [Rgb::new(10, 0, 0), Rgb::new(0, 10, 0)];
        let mut i = 0;
        let mut source = || {
            let c = table[i % table.len()];
            i += 1;
            (c, Rgb::WHITE)
        };
        assert_eq!(Palette::from_source(&mut source).color_a, table[0]);
        assert_eq!(Palette::from_source(&mut source).color_a, table[1]);
    }
}
