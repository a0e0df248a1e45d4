//! Recording test doubles for the SPI bus, control lines and delay.

use std::{cell::RefCell, rc::Rc, vec::Vec};

use embedded_hal::blocking::{delay::DelayMs, spi};
use embedded_hal::digital::v2::OutputPin;

use crate::{framer::SpiFramer, Ili9341};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Cs,
    Dc,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(Line, bool),
    Byte(u8),
    Delay(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Shared, ordered record of everything that reached the bus.
#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Every byte shifted out, in order.
    pub fn bytes(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Byte(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    /// Groups bytes by chip-select bracket, tagging each bracket with the
    /// data/command line level seen by its first byte.
    pub fn transactions(&self) -> Vec<Transaction> {
        let mut out = Vec::new();
        let mut dc_high = false;
        let mut current: Option<Transaction> = None;
        for event in self.0.borrow().iter() {
            match *event {
                Event::Pin(Line::Cs, false) => {
                    current = Some(Transaction {
                        data: false,
                        bytes: Vec::new(),
                    })
                }
                Event::Pin(Line::Cs, true) => {
                    if let Some(t) = current.take() {
                        out.push(t);
                    }
                }
                Event::Pin(Line::Dc, level) => dc_high = level,
                Event::Byte(b) => {
                    if let Some(t) = current.as_mut() {
                        if t.bytes.is_empty() {
                            t.data = dc_high;
                        }
                        t.bytes.push(b);
                    }
                }
                _ => {}
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub data: bool,
    pub bytes: Vec<u8>,
}

impl Transaction {
    pub fn command(code: u8) -> Self {
        Transaction {
            data: false,
            bytes: vec![code],
        }
    }

    pub fn data(bytes: &[u8]) -> Self {
        Transaction {
            data: true,
            bytes: bytes.to_vec(),
        }
    }
}

pub struct MockSpi {
    log: Log,
}

impl MockSpi {
    pub fn new(log: &Log) -> Self {
        MockSpi { log: log.clone() }
    }
}

impl spi::Transfer<u8> for MockSpi {
    type Error = MockError;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Self::Error> {
        for word in words.iter_mut() {
            self.log.push(Event::Byte(*word));
            *word = 0xFF;
        }
        Ok(words)
    }
}

/// SPI that never completes a transfer.
pub struct FailingSpi;

impl spi::Transfer<u8> for FailingSpi {
    type Error = MockError;

    fn transfer<'w>(&mut self, _words: &'w mut [u8]) -> Result<&'w [u8], Self::Error> {
        Err(MockError)
    }
}

pub struct MockPin {
    line: Line,
    log: Log,
    fail: bool,
}

impl MockPin {
    pub fn new(line: Line, log: &Log) -> Self {
        MockPin {
            line,
            log: log.clone(),
            fail: false,
        }
    }

    pub fn failing(line: Line, log: &Log) -> Self {
        MockPin {
            fail: true,
            ..MockPin::new(line, log)
        }
    }

    fn set(&mut self, level: bool) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.log.push(Event::Pin(self.line, level));
        Ok(())
    }
}

impl OutputPin for MockPin {
    type Error = MockError;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        MockDelay { log: log.clone() }
    }
}

impl DelayMs<u32> for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Delay(ms));
    }
}

pub type MockFramer = SpiFramer<MockSpi, MockPin, MockPin>;
pub type MockDisplay = Ili9341<MockFramer, MockPin>;

pub fn framer(log: &Log) -> MockFramer {
    SpiFramer::new(
        MockSpi::new(log),
        MockPin::new(Line::Dc, log),
        MockPin::new(Line::Cs, log),
    )
}

/// An initialized display with the bring-up traffic already cleared from the log.
pub fn display() -> (MockDisplay, Log) {
    let log = Log::new();
    let mut delay = MockDelay::new(&log);
    let display = Ili9341::new(framer(&log), MockPin::new(Line::Reset, &log), &mut delay)
        .expect("mock bring-up");
    log.clear();
    (display, log)
}
