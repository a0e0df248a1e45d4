use core::fmt;
use core::iter;

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use log::{debug, trace};

use crate::color::Color;

#[cfg(feature = "graphics")]
mod graphics;
pub mod init;
pub mod window;

use init::{ILI9341_CASET, ILI9341_PASET, ILI9341_RAMWR, INIT_SEQUENCE, RESET_PULSE_MS};
pub use init::{InitStep, Stage};
pub use window::{AddressWindow, Rect, HEIGHT, WIDTH};

#[derive(Debug)]
pub enum Error<PinE> {
    /// The framer could not complete a transaction.
    Interface(DisplayError),
    /// The reset line could not be driven.
    Reset(PinE),
}

impl<PinE: fmt::Debug> fmt::Display for Error<PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "display interface error: {e:?}"),
            Error::Reset(e) => write!(f, "reset pin error: {e:?}"),
        }
    }
}

/// ILI9341 driver for a 240x320 portrait panel.
///
/// Every drawing call streams straight to the controller; there is no frame
/// buffer. Requests that start off the surface or have a zero extent are
/// dropped without touching the bus, and requests that run past the edge
/// are clipped at the far edge.
pub struct Ili9341<IFACE, RST> {
    interface: IFACE,
    reset: RST,
}

impl<IFACE, RST, PinE> Ili9341<IFACE, RST>
where
    IFACE: WriteOnlyDataCommand,
    RST: OutputPin<Error = PinE>,
{
    /// Pulses the reset line and runs the power-up sequence.
    ///
    /// The controller is ready for drawing once this returns. There is no
    /// way to run the sequence again short of dropping the driver and
    /// building a new one, which pulses the reset line first.
    pub fn new<DELAY>(interface: IFACE, reset: RST, delay: &mut DELAY) -> Result<Self, Error<PinE>>
    where
        DELAY: DelayMs<u32>,
    {
        let mut ili9341 = Ili9341 { interface, reset };

        ili9341.hard_reset(delay)?;
        for step in INIT_SEQUENCE.iter() {
            ili9341.run(step)?;
            if step.post_delay_ms > 0 {
                delay.delay_ms(step.post_delay_ms);
            }
        }
        debug!("ili9341: ready");

        Ok(ili9341)
    }

    /// Gives back the interface and reset pin.
    pub fn release(self) -> (IFACE, RST) {
        (self.interface, self.reset)
    }

    fn hard_reset<DELAY>(&mut self, delay: &mut DELAY) -> Result<(), Error<PinE>>
    where
        DELAY: DelayMs<u32>,
    {
        debug!("ili9341: {:?}", Stage::HardwareReset);
        let [settle_high, hold_low, recover] = RESET_PULSE_MS;
        self.reset.set_high().map_err(Error::Reset)?;
        delay.delay_ms(settle_high);
        self.reset.set_low().map_err(Error::Reset)?;
        delay.delay_ms(hold_low);
        self.reset.set_high().map_err(Error::Reset)?;
        delay.delay_ms(recover);
        Ok(())
    }

    fn run(&mut self, step: &InitStep) -> Result<(), Error<PinE>> {
        debug!("ili9341: {:?} ({:#04x})", step.stage, step.command);
        self.command(step.command)?;
        for &byte in step.payload {
            self.data(byte)?;
        }
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), Error<PinE>> {
        self.interface
            .send_commands(DataFormat::U8(&[cmd]))
            .map_err(Error::Interface)
    }

    fn data(&mut self, data: u8) -> Result<(), Error<PinE>> {
        self.interface
            .send_data(DataFormat::U8(&[data]))
            .map_err(Error::Interface)
    }

    /// Programs the column/page window and opens a memory write. Every data
    /// byte that follows lands in the window, left to right, top to bottom.
    pub(crate) fn set_window(&mut self, window: &AddressWindow) -> Result<(), Error<PinE>> {
        trace!("ili9341: window {:?}", window);
        self.command(ILI9341_CASET)?;
        for byte in window.column_bytes() {
            self.data(byte)?;
        }
        self.command(ILI9341_PASET)?;
        for byte in window.page_bytes() {
            self.data(byte)?;
        }
        self.command(ILI9341_RAMWR)
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> Result<(), Error<PinE>> {
        let window = match Rect::new(x, y, w, h).clip() {
            Some(window) => window,
            None => return Ok(()),
        };
        self.set_window(&window)?;

        let mut pixels = iter::repeat(color.0).take(window.pixel_count());
        self.interface
            .send_data(DataFormat::U16BEIter(&mut pixels))
            .map_err(Error::Interface)
    }

    pub fn fill_screen(&mut self, color: Color) -> Result<(), Error<PinE>> {
        self.fill_rect(0, 0, WIDTH, HEIGHT, color)
    }

    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), Error<PinE>> {
        self.fill_rect(x, y, 1, 1, color)
    }

    /// Streams big-endian RGB565 bytes into the clipped window.
    ///
    /// `pixels` is consumed in order, with no row stride: only the first
    /// `2 * width * height` bytes of the *clipped* window are sent and any
    /// surplus is ignored. A buffer too short to cover the clipped window is
    /// refused with [`DisplayError::OutOfBoundsError`] before anything is
    /// sent.
    pub fn draw_image(&mut self, x: u16, y: u16, w: u16, h: u16, pixels: &[u8]) -> Result<(), Error<PinE>> {
        let window = match Rect::new(x, y, w, h).clip() {
            Some(window) => window,
            None => return Ok(()),
        };
        let len = window.pixel_count() * 2;
        let bytes = pixels
            .get(..len)
            .ok_or(Error::Interface(DisplayError::OutOfBoundsError))?;

        self.set_window(&window)?;
        self.interface
            .send_data(DataFormat::U8(bytes))
            .map_err(Error::Interface)
    }
}
