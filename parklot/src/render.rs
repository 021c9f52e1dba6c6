//! Lot map rendering.
//!
//! [`MapView`] writes a row/column-labelled view of a [`Lot`] to any
//! `io::Write`, with up to two markers layered over the occupancy glyphs:
//! the origin `Y` and the found spot `A`. The origin takes precedence when
//! the two coincide (distance 0). Colors go through crossterm's styling
//! commands; [`MapView::plain`] skips them for tests and pipes.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
};

use parkgrid_core::{Color, Lot, Point, Spot};

use crate::colors;

/// Maps a [`parkgrid_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Renders lot maps with 1-based coordinate headers and width-3 cells.
pub struct MapView {
    colors: bool,
}

impl MapView {
    /// A colorized view.
    pub fn new() -> Self {
        Self { colors: true }
    }

    /// A view without any color escapes.
    pub fn plain() -> Self {
        Self { colors: false }
    }

    /// Draw the lot, overriding the occupancy glyph at the marker
    /// coordinates if given.
    pub fn draw(
        &self,
        w: &mut impl Write,
        lot: &Lot,
        origin: Option<Point>,
        spot: Option<Point>,
    ) -> io::Result<()> {
        let size = lot.size();

        // Column headers, 1-based.
        write!(w, "   ")?;
        for j in 1..=size {
            write!(w, "{j:>3}")?;
        }
        writeln!(w)?;

        for y in 0..size {
            write!(w, "{:>3}", y + 1)?;
            for x in 0..size {
                let p = Point::new(x, y);
                let (glyph, color) = if origin == Some(p) {
                    ('Y', colors::ORIGIN)
                } else if spot == Some(p) {
                    ('A', colors::SPOT)
                } else if lot.at(p) == Some(Spot::Occupied) {
                    ('X', colors::OCCUPIED)
                } else {
                    ('O', colors::FREE)
                };
                self.cell(w, glyph, color)?;
            }
            writeln!(w)?;
        }
        w.flush()
    }

    /// Explain the two marker glyphs.
    pub fn legend(&self, w: &mut impl Write) -> io::Result<()> {
        self.cell(w, 'Y', colors::ORIGIN)?;
        writeln!(w, "=Your starting location.")?;
        self.cell(w, 'A', colors::SPOT)?;
        writeln!(w, "=Your available parking spot.")?;
        Ok(())
    }

    /// One width-3 cell: two spaces of padding, then the styled glyph.
    fn cell(&self, w: &mut impl Write, glyph: char, color: Color) -> io::Result<()> {
        if self.colors {
            queue!(
                w,
                Print("  "),
                SetForegroundColor(to_ct_color(color)),
                Print(glyph),
                ResetColor
            )
        } else {
            write!(w, "{glyph:>3}")
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}
