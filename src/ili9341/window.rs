//! Mapping drawing rectangles onto the controller's address space.

/// Surface width in pixels (portrait).
pub const WIDTH: u16 = 240;
/// Surface height in pixels (portrait).
pub const HEIGHT: u16 = 320;

/// A drawing request in surface coordinates. May lie partly or entirely
/// outside the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrinks the far edges to fit the surface.
    ///
    /// The origin never moves. `None` when the origin is off the surface or
    /// either extent is zero: nothing should reach the controller then.
    pub fn clip(self) -> Option<AddressWindow> {
        if self.x >= WIDTH || self.y >= HEIGHT || self.width == 0 || self.height == 0 {
            return None;
        }
        let width = self.width.min(WIDTH - self.x);
        let height = self.height.min(HEIGHT - self.y);
        Some(AddressWindow {
            column_start: self.x,
            column_end: self.x + width - 1,
            page_start: self.y,
            page_end: self.y + height - 1,
        })
    }
}

/// Inclusive column/page bounds, always inside the surface. Only
/// [`Rect::clip`] builds one, so `start <= end` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressWindow {
    column_start: u16,
    column_end: u16,
    page_start: u16,
    page_end: u16,
}

impl AddressWindow {
    pub fn column_start(&self) -> u16 {
        self.column_start
    }

    pub fn column_end(&self) -> u16 {
        self.column_end
    }

    pub fn page_start(&self) -> u16 {
        self.page_start
    }

    pub fn page_end(&self) -> u16 {
        self.page_end
    }

    pub fn width(&self) -> u16 {
        self.column_end - self.column_start + 1
    }

    pub fn height(&self) -> u16 {
        self.page_end - self.page_start + 1
    }

    pub fn pixel_count(&self) -> usize {
        usize::from(self.width()) * usize::from(self.height())
    }

    /// CASET arguments: start hi, start lo, end hi, end lo.
    pub fn column_bytes(&self) -> [u8; 4] {
        span(self.column_start, self.column_end)
    }

    /// PASET arguments: start hi, start lo, end hi, end lo.
    pub fn page_bytes(&self) -> [u8; 4] {
        span(self.page_start, self.page_end)
    }
}

fn span(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}
