//! Scaled bitmap text on top of the pixel writers.

use core::str::Chars;

use display_interface::WriteOnlyDataCommand;
use embedded_hal::digital::v2::OutputPin;

use crate::color::Color;
use crate::font::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::ili9341::{Error, Ili9341};

/// Line wrap limits. These are the landscape panel bounds, not the portrait
/// surface, and decide where text breaks.
pub const WRAP_WIDTH: u32 = 320;
pub const WRAP_HEIGHT: u32 = 240;

/// Horizontal distance between successive character origins.
pub const fn advance(scale: u8) -> u32 {
    GLYPH_WIDTH as u32 * scale as u32 + 1
}

/// Vertical distance between successive line origins.
pub const fn line_height(scale: u8) -> u32 {
    GLYPH_HEIGHT as u32 * scale as u32 + 2
}

/// Places the characters of a string, yielding each drawable character with
/// the top-left corner it goes to.
///
/// After each character the cursor moves right by [`advance`]. If the
/// following character would then reach [`WRAP_WIDTH`], the cursor returns
/// to the starting column one [`line_height`] down, and layout ends once
/// that line would start at or below [`WRAP_HEIGHT`]. Characters without a
/// glyph are dropped and take no space.
pub struct LineLayout<'a> {
    chars: Chars<'a>,
    origin_x: u32,
    x: u32,
    y: u32,
    advance: u32,
    line_height: u32,
    done: bool,
}

impl<'a> LineLayout<'a> {
    pub fn new(text: &'a str, x: u16, y: u16, scale: u8) -> Self {
        LineLayout {
            chars: text.chars(),
            origin_x: u32::from(x),
            x: u32::from(x),
            y: u32::from(y),
            advance: advance(scale),
            line_height: line_height(scale),
            done: false,
        }
    }
}

impl Iterator for LineLayout<'_> {
    type Item = (char, u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let c = self.chars.by_ref().find(|&c| Glyph::get(c).is_some())?;
        let placed = (c, self.x, self.y);

        self.x += self.advance;
        if self.x + self.advance >= WRAP_WIDTH {
            self.x = self.origin_x;
            self.y += self.line_height;
            self.done = self.y >= WRAP_HEIGHT;
        }
        Some(placed)
    }
}

impl<IFACE, RST, PinE> Ili9341<IFACE, RST>
where
    IFACE: WriteOnlyDataCommand,
    RST: OutputPin<Error = PinE>,
{
    /// Draws one character with its top-left corner at `x`, `y`.
    ///
    /// Every cell of the 5x5 glyph is painted, lit cells in `fg` and the
    /// rest in `bg`, each as a `scale` x `scale` block. Characters outside
    /// printable ASCII draw nothing.
    pub fn draw_char(
        &mut self,
        c: char,
        x: u16,
        y: u16,
        fg: Color,
        bg: Color,
        scale: u8,
    ) -> Result<(), Error<PinE>> {
        let glyph = match Glyph::get(c) {
            Some(glyph) => glyph,
            None => return Ok(()),
        };
        let step = u16::from(scale);

        for col in 0..GLYPH_WIDTH {
            let cell_x = x.saturating_add(u16::from(col) * step);
            for row in 0..GLYPH_HEIGHT {
                let cell_y = y.saturating_add(u16::from(row) * step);
                let color = if glyph.is_lit(col, row) { fg } else { bg };
                self.fill_rect(cell_x, cell_y, step, step, color)?;
            }
        }
        Ok(())
    }

    /// Draws `text` as laid out by [`LineLayout`].
    pub fn draw_string(
        &mut self,
        text: &str,
        x: u16,
        y: u16,
        fg: Color,
        bg: Color,
        scale: u8,
    ) -> Result<(), Error<PinE>> {
        for (c, cx, cy) in LineLayout::new(text, x, y, scale) {
            self.draw_char(c, saturate(cx), saturate(cy), fg, bg, scale)?;
        }
        Ok(())
    }
}

// off-surface either way; fill_rect drops it
fn saturate(v: u32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
