//! `embedded-graphics` drawing support.

use core::iter;

use display_interface::{DataFormat, WriteOnlyDataCommand};
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::{raw::RawData, raw::RawU16, Rgb565},
    primitives::{PointsIter, Rectangle},
    Pixel,
};
use embedded_hal::digital::v2::OutputPin;

use super::{Error, Ili9341, Rect, HEIGHT, WIDTH};
use crate::color::Color;

impl<IFACE, RST, PinE> OriginDimensions for Ili9341<IFACE, RST>
where
    IFACE: WriteOnlyDataCommand,
    RST: OutputPin<Error = PinE>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

/// Converts a rectangle already intersected with the surface.
fn surface_rect(area: &Rectangle) -> Option<(u16, u16, u16, u16)> {
    if area.size == Size::zero() {
        return None;
    }
    Some((
        u16::try_from(area.top_left.x).ok()?,
        u16::try_from(area.top_left.y).ok()?,
        u16::try_from(area.size.width).ok()?,
        u16::try_from(area.size.height).ok()?,
    ))
}

impl<IFACE, RST, PinE> DrawTarget for Ili9341<IFACE, RST>
where
    IFACE: WriteOnlyDataCommand,
    RST: OutputPin<Error = PinE>,
{
    type Color = Rgb565;
    type Error = Error<PinE>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let (Ok(x), Ok(y)) = (u16::try_from(coord.x), u16::try_from(coord.y)) {
                self.draw_pixel(x, y, color.into())?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let visible = area.intersection(&self.bounding_box());
        if visible != *area {
            // partly off-surface: the color stream no longer lines up with a window
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(coord, color)| Pixel(coord, color)),
            );
        }
        let window = match surface_rect(area).and_then(|(x, y, w, h)| Rect::new(x, y, w, h).clip()) {
            Some(window) => window,
            None => return Ok(()),
        };
        self.set_window(&window)?;

        let mut pixels = colors
            .into_iter()
            .map(|color| RawU16::from(color).into_inner())
            .chain(iter::repeat(0))
            .take(window.pixel_count());
        self.interface
            .send_data(DataFormat::U16BEIter(&mut pixels))
            .map_err(Error::Interface)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let visible = area.intersection(&self.bounding_box());
        match surface_rect(&visible) {
            Some((x, y, w, h)) => self.fill_rect(x, y, w, h, color.into()),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(Color::from(color))
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::{self, Transaction};
    use embedded_graphics::{
        pixelcolor::Rgb565,
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[test]
    fn reports_portrait_size() {
        let (display, _log) = mock::display();
        assert_eq!(display.size(), Size::new(240, 320));
    }

    #[test]
    fn filled_rectangle_is_one_window() {
        let (mut display, log) = mock::display();
        Rectangle::new(Point::new(4, 8), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut display)
            .unwrap();

        let transactions = log.transactions();
        assert_eq!(transactions.len(), 12);
        assert_eq!(transactions[11], Transaction::data(&[0x07, 0xE0].repeat(9)));
    }

    #[test]
    fn negative_origin_is_clipped_to_surface() {
        let (mut display, log) = mock::display();
        display
            .fill_solid(&Rectangle::new(Point::new(-5, -5), Size::new(10, 10)), Rgb565::RED)
            .unwrap();

        let transactions = log.transactions();
        assert_eq!(transactions[1..5], [0, 0, 0, 4].map(|b: u8| Transaction::data(&[b])));
        assert_eq!(transactions[11].bytes.len(), 5 * 5 * 2);
    }

    #[test]
    fn fully_offscreen_draws_nothing() {
        let (mut display, log) = mock::display();
        display
            .fill_solid(&Rectangle::new(Point::new(-20, 0), Size::new(10, 10)), Rgb565::RED)
            .unwrap();
        Pixel(Point::new(-1, 3), Rgb565::RED).draw(&mut display).unwrap();
        Pixel(Point::new(240, 3), Rgb565::RED).draw(&mut display).unwrap();
        assert!(log.events().is_empty());
    }

    #[test]
    fn contiguous_fill_streams_colors_in_order() {
        let (mut display, log) = mock::display();
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        display
            .fill_contiguous(&Rectangle::new(Point::new(0, 0), Size::new(2, 2)), colors)
            .unwrap();

        let transactions = log.transactions();
        assert_eq!(transactions.len(), 12);
        assert_eq!(
            transactions[11],
            Transaction::data(&[0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF])
        );
    }

    #[test]
    fn contiguous_fill_past_an_edge_keeps_colors_on_their_points() {
        let (mut display, log) = mock::display();
        display
            .fill_contiguous(
                &Rectangle::new(Point::new(-1, 2), Size::new(3, 1)),
                [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE],
            )
            .unwrap();

        // red lands at x = -1 and is dropped; green and blue are single pixels
        let transactions = log.transactions();
        assert_eq!(transactions.len(), 24);
        assert_eq!(transactions[1..5], [0, 0, 0, 0].map(|b: u8| Transaction::data(&[b])));
        assert_eq!(transactions[11], Transaction::data(&[0x07, 0xE0]));
        assert_eq!(transactions[13..17], [0, 1, 0, 1].map(|b: u8| Transaction::data(&[b])));
        assert_eq!(transactions[23], Transaction::data(&[0x00, 0x1F]));
    }

    #[test]
    fn contiguous_fill_past_the_right_edge_drops_the_overhang() {
        let (mut display, log) = mock::display();
        display
            .fill_contiguous(
                &Rectangle::new(Point::new(239, 0), Size::new(2, 1)),
                [Rgb565::RED, Rgb565::BLUE],
            )
            .unwrap();

        let transactions = log.transactions();
        assert_eq!(transactions.len(), 12);
        assert_eq!(transactions[1..5], [0, 0xEF, 0, 0xEF].map(|b: u8| Transaction::data(&[b])));
        assert_eq!(transactions[11], Transaction::data(&[0xF8, 0x00]));
    }

    #[test]
    fn clear_fills_whole_surface() {
        let (mut display, log) = mock::display();
        display.clear(Rgb565::BLACK).unwrap();
        assert_eq!(log.transactions().last().unwrap().bytes.len(), 240 * 320 * 2);
    }
}
