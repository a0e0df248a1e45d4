//! Driver for ILI9341 TFT panels on a 4-wire SPI bus.
//!
//! [`SpiFramer`] frames commands and data with the chip-select and
//! data/command lines, [`Ili9341`] brings the controller up and writes
//! pixels into clipped address windows, and the [`text`] module renders a
//! small 5x5 bitmap font on top of that.
//!
//! ```ignore
//! let iface = SpiFramer::new(spi, dc, cs);
//! let mut display = Ili9341::new(iface, rst, &mut delay)?;
//! display.fill_screen(Color::BLACK)?;
//! display.draw_string("Hello", 10, 10, Color::WHITE, Color::BLACK, 2)?;
//! ```
#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod color;
pub mod font;
pub mod framer;
pub mod ili9341;
pub mod shared;
pub mod text;

#[cfg(test)]
mod mock;

pub use clock::TickDelay;
pub use color::Color;
pub use font::Glyph;
pub use framer::SpiFramer;
pub use ili9341::{AddressWindow, Error, Ili9341, Rect, HEIGHT, WIDTH};
pub use shared::SharedDisplay;
pub use text::LineLayout;
