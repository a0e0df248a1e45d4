//! Command/data framing over a byte-wide SPI transport.
//!
//! Every call to [`WriteOnlyDataCommand::send_commands`] or
//! [`WriteOnlyDataCommand::send_data`] is one complete bus transaction:
//! chip-select is asserted, the D/C line is driven low (command) or high
//! (data), the bytes are shifted out one exchange at a time, and
//! chip-select is released again.

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::blocking::spi;
use embedded_hal::digital::v2::OutputPin;

/// SPI transport plus the D/C and CS control lines of the panel.
pub struct SpiFramer<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> SpiFramer<SPI, DC, CS>
where
    SPI: spi::Transfer<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, cs: CS) -> Self {
        SpiFramer { spi, dc, cs }
    }

    /// Gives back the bus and the control pins.
    pub fn release(self) -> (SPI, DC, CS) {
        (self.spi, self.dc, self.cs)
    }

    fn transaction(&mut self, data: bool, words: DataFormat<'_>) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;

        let framed = if data {
            self.dc.set_high()
        } else {
            self.dc.set_low()
        };
        let result = match framed {
            Ok(()) => self.write(words),
            Err(_) => Err(DisplayError::DCError),
        };

        // CS goes back up even when the exchange failed
        self.cs.set_high().map_err(|_| DisplayError::CSError)?;
        result
    }

    fn write(&mut self, words: DataFormat<'_>) -> Result<(), DisplayError> {
        match words {
            DataFormat::U8(bytes) => self.write_bytes(bytes.iter().copied()),
            DataFormat::U8Iter(iter) => self.write_bytes(iter),
            DataFormat::U16(words) => self.write_bytes(words.iter().flat_map(|w| w.to_ne_bytes())),
            DataFormat::U16BE(words) => self.write_bytes(words.iter().flat_map(|w| w.to_be_bytes())),
            DataFormat::U16LE(words) => self.write_bytes(words.iter().flat_map(|w| w.to_le_bytes())),
            DataFormat::U16BEIter(iter) => self.write_bytes(iter.flat_map(u16::to_be_bytes)),
            DataFormat::U16LEIter(iter) => self.write_bytes(iter.flat_map(u16::to_le_bytes)),
            _ => Err(DisplayError::DataFormatNotImplemented),
        }
    }

    fn write_bytes(&mut self, bytes: impl IntoIterator<Item = u8>) -> Result<(), DisplayError> {
        for byte in bytes {
            self.transfer_byte(byte)?;
        }
        Ok(())
    }

    /// One full-duplex exchange. The byte clocked in is discarded.
    fn transfer_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        let mut word = [byte];
        self.spi
            .transfer(&mut word)
            .map_err(|_| DisplayError::BusWriteError)?;
        Ok(())
    }
}

impl<SPI, DC, CS> WriteOnlyDataCommand for SpiFramer<SPI, DC, CS>
where
    SPI: spi::Transfer<u8>,
    DC: OutputPin,
    CS: OutputPin,
{
    fn send_commands(&mut self, cmds: DataFormat<'_>) -> Result<(), DisplayError> {
        self.transaction(false, cmds)
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        self.transaction(true, buf)
    }
}
