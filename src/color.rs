//! 16-bit RGB565 colors.

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::{
    raw::{RawData, RawU16},
    Rgb565,
};

/// A packed RGB565 color: 5 bits red, 6 bits green, 5 bits blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const NAVY: Color = Color(0x000F);
    pub const DARK_GREEN: Color = Color(0x03E0);
    pub const DARK_CYAN: Color = Color(0x03EF);
    pub const MAROON: Color = Color(0x7800);
    pub const PURPLE: Color = Color(0x780F);
    pub const OLIVE: Color = Color(0x7BE0);
    pub const LIGHT_GREY: Color = Color(0xC618);
    pub const DARK_GREY: Color = Color(0x7BEF);
    pub const BLUE: Color = Color(0x001F);
    pub const GREEN: Color = Color(0x07E0);
    pub const CYAN: Color = Color(0x07FF);
    pub const RED: Color = Color(0xF800);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const WHITE: Color = Color(0xFFFF);
    pub const ORANGE: Color = Color(0xFD20);
    pub const GREEN_YELLOW: Color = Color(0xAFE5);
    pub const PINK: Color = Color(0xF81F);

    /// Packs 8-bit channels, dropping the low bits of each.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16))
    }

    /// Unpacks to 8-bit channel approximations. The dropped low bits read as zero.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;
        (r << 3, g << 2, b << 3)
    }

    /// Wire order: high byte first.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(RawU16::from(color).into_inner())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::from(RawU16::new(color.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_primaries() {
        assert_eq!(Color::from_rgb(255, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb(0, 255, 0), Color::GREEN);
        assert_eq!(Color::from_rgb(0, 0, 255), Color::BLUE);
        assert_eq!(Color::from_rgb(255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgb(255, 255, 0), Color::YELLOW);
        assert_eq!(Color::from_rgb(0, 0, 0), Color::BLACK);
    }

    #[test]
    fn truncates_low_bits() {
        assert_eq!(Color::from_rgb(0x07, 0x03, 0x07), Color::BLACK);
        assert_eq!(Color::from_rgb(0x08, 0x04, 0x08), Color(0x0821));
    }

    #[test]
    fn decode_encode_is_stable() {
        for &(r, g, b) in &[(0u8, 0u8, 0u8), (13, 200, 77), (255, 1, 128), (99, 99, 99), (250, 251, 252)] {
            let packed = Color::from_rgb(r, g, b);
            let (dr, dg, db) = packed.to_rgb();
            let repacked = Color::from_rgb(dr, dg, db);
            assert_eq!(repacked, packed);
            assert_eq!(repacked.to_rgb(), (dr, dg, db));
        }
    }

    #[test]
    fn big_endian_wire_order() {
        assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
        assert_eq!(Color(0x10C4).to_be_bytes(), [0x10, 0xC4]);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn converts_with_embedded_graphics() {
        use embedded_graphics_core::pixelcolor::RgbColor;

        assert_eq!(Color::from(Rgb565::RED), Color::RED);
        assert_eq!(Rgb565::from(Color::BLUE), Rgb565::BLUE);
        assert_eq!(Color::from(Rgb565::new(31, 63, 31)), Color::WHITE);
    }
}
