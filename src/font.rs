//! 5x5 bitmap font covering printable ASCII.
//!
//! Each glyph is five column bytes, left to right. Bit `row + 2` of a column
//! lights row `row`, counted from the top; bits 0 and 1 are unused header bits.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u8 = 5;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u8 = 5;
/// Bit position of the top row inside a column byte.
pub const ROW_BIT_OFFSET: u8 = 2;

const FIRST: u32 = 32;
const LAST: u32 = 127;

#[rustfmt::skip]
const FONT: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5C, 0x00, 0x00], // '!'
    [0x00, 0x0C, 0x00, 0x0C, 0x00], // '"'
    [0x28, 0x7C, 0x28, 0x7C, 0x28], // '#'
    [0x48, 0x54, 0x7C, 0x54, 0x24], // '$'
    [0x4C, 0x2C, 0x10, 0x68, 0x64], // '%'
    [0x28, 0x54, 0x54, 0x28, 0x50], // '&'
    [0x00, 0x00, 0x0C, 0x00, 0x00], // '\''
    [0x00, 0x00, 0x38, 0x44, 0x00], // '('
    [0x00, 0x44, 0x38, 0x00, 0x00], // ')'
    [0x54, 0x38, 0x7C, 0x38, 0x54], // '*'
    [0x00, 0x10, 0x38, 0x10, 0x00], // '+'
    [0x00, 0x40, 0x20, 0x00, 0x00], // ','
    [0x00, 0x10, 0x10, 0x10, 0x00], // '-'
    [0x00, 0x00, 0x40, 0x00, 0x00], // '.'
    [0x40, 0x20, 0x10, 0x08, 0x04], // '/'
    [0x38, 0x64, 0x54, 0x4C, 0x38], // '0'
    [0x00, 0x48, 0x7C, 0x40, 0x00], // '1'
    [0x64, 0x54, 0x54, 0x54, 0x48], // '2'
    [0x44, 0x44, 0x54, 0x54, 0x28], // '3'
    [0x1C, 0x10, 0x10, 0x7C, 0x10], // '4'
    [0x5C, 0x54, 0x54, 0x54, 0x24], // '5'
    [0x38, 0x54, 0x54, 0x54, 0x20], // '6'
    [0x04, 0x64, 0x14, 0x0C, 0x04], // '7'
    [0x28, 0x54, 0x54, 0x54, 0x28], // '8'
    [0x08, 0x54, 0x54, 0x54, 0x38], // '9'
    [0x00, 0x00, 0x28, 0x00, 0x00], // ':'
    [0x00, 0x40, 0x28, 0x00, 0x00], // ';'
    [0x00, 0x10, 0x28, 0x44, 0x00], // '<'
    [0x00, 0x28, 0x28, 0x28, 0x00], // '='
    [0x00, 0x44, 0x28, 0x10, 0x00], // '>'
    [0x08, 0x04, 0x54, 0x14, 0x08], // '?'
    [0x38, 0x44, 0x7C, 0x2C, 0x18], // '@'
    [0x78, 0x14, 0x14, 0x14, 0x78], // 'A'
    [0x7C, 0x54, 0x54, 0x54, 0x28], // 'B'
    [0x38, 0x44, 0x44, 0x44, 0x44], // 'C'
    [0x7C, 0x44, 0x44, 0x44, 0x38], // 'D'
    [0x7C, 0x54, 0x54, 0x54, 0x44], // 'E'
    [0x7C, 0x14, 0x14, 0x14, 0x04], // 'F'
    [0x38, 0x44, 0x44, 0x54, 0x34], // 'G'
    [0x7C, 0x10, 0x10, 0x10, 0x7C], // 'H'
    [0x00, 0x44, 0x7C, 0x44, 0x00], // 'I'
    [0x20, 0x40, 0x44, 0x3C, 0x04], // 'J'
    [0x7C, 0x10, 0x28, 0x44, 0x00], // 'K'
    [0x7C, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7C, 0x08, 0x10, 0x08, 0x7C], // 'M'
    [0x7C, 0x08, 0x10, 0x20, 0x7C], // 'N'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'O'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'P'
    [0x38, 0x44, 0x54, 0x24, 0x58], // 'Q'
    [0x7C, 0x14, 0x14, 0x34, 0x48], // 'R'
    [0x48, 0x54, 0x54, 0x54, 0x24], // 'S'
    [0x04, 0x04, 0x7C, 0x04, 0x04], // 'T'
    [0x3C, 0x40, 0x40, 0x40, 0x3C], // 'U'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'V'
    [0x7C, 0x20, 0x10, 0x20, 0x7C], // 'W'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'X'
    [0x04, 0x08, 0x70, 0x08, 0x04], // 'Y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'Z'
    [0x00, 0x7C, 0x44, 0x44, 0x00], // '['
    [0x04, 0x08, 0x10, 0x20, 0x40], // '\\'
    [0x00, 0x44, 0x44, 0x7C, 0x00], // ']'
    [0x10, 0x08, 0x04, 0x08, 0x10], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x04, 0x08, 0x00, 0x00], // '`'
    [0x30, 0x48, 0x48, 0x78, 0x40], // 'a'
    [0x7C, 0x50, 0x50, 0x50, 0x20], // 'b'
    [0x30, 0x48, 0x48, 0x48, 0x48], // 'c'
    [0x20, 0x50, 0x50, 0x50, 0x7C], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x10, 0x78, 0x14, 0x04, 0x00], // 'f'
    [0x08, 0x54, 0x54, 0x54, 0x3C], // 'g'
    [0x7C, 0x10, 0x10, 0x10, 0x60], // 'h'
    [0x00, 0x50, 0x74, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x40, 0x34, 0x00], // 'j'
    [0x7C, 0x10, 0x10, 0x28, 0x40], // 'k'
    [0x00, 0x44, 0x7C, 0x40, 0x00], // 'l'
    [0x78, 0x08, 0x70, 0x08, 0x70], // 'm'
    [0x78, 0x08, 0x08, 0x08, 0x70], // 'n'
    [0x30, 0x48, 0x48, 0x48, 0x30], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'p'
    [0x08, 0x14, 0x14, 0x14, 0x7C], // 'q'
    [0x78, 0x10, 0x08, 0x08, 0x00], // 'r'
    [0x40, 0x58, 0x58, 0x68, 0x28], // 's'
    [0x08, 0x3C, 0x48, 0x40, 0x20], // 't'
    [0x38, 0x40, 0x40, 0x40, 0x78], // 'u'
    [0x18, 0x20, 0x40, 0x20, 0x18], // 'v'
    [0x38, 0x40, 0x30, 0x40, 0x38], // 'w'
    [0x48, 0x30, 0x30, 0x30, 0x48], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 'y'
    [0x48, 0x68, 0x58, 0x58, 0x48], // 'z'
    [0x10, 0x38, 0x44, 0x44, 0x00], // '{'
    [0x00, 0x00, 0x7C, 0x00, 0x00], // '|'
    [0x00, 0x44, 0x44, 0x38, 0x10], // '}'
    [0x10, 0x08, 0x10, 0x20, 0x10], // '~'
];

/// A single character bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(&'static [u8; 5]);

impl Glyph {
    /// Looks up `c`; anything outside `' '..='~'` has no glyph.
    pub fn get(c: char) -> Option<Glyph> {
        let code = u32::from(c);
        if (FIRST..LAST).contains(&code) {
            Some(Glyph(&FONT[(code - FIRST) as usize]))
        } else {
            None
        }
    }

    pub fn columns(&self) -> &'static [u8; 5] {
        self.0
    }

    /// Whether the pixel at `col`, `row` is part of the character.
    pub fn is_lit(&self, col: u8, row: u8) -> bool {
        (self.0[col as usize] >> (row + ROW_BIT_OFFSET)) & 0x01 != 0
    }
}
