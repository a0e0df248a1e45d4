//! Millisecond tick counter and a blocking delay built on it.
//!
//! The board starts a 1 kHz timer interrupt and calls [`tick`] from its
//! handler. Drawing code never reads the counter; it only sees the
//! [`DelayMs`] implementation of [`TickDelay`].

use core::cell::Cell;

use critical_section::Mutex;
use embedded_hal::blocking::delay::DelayMs;

static TICKS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Advances the counter by one millisecond.
pub fn tick() {
    critical_section::with(|cs| {
        let ticks = TICKS.borrow(cs);
        ticks.set(ticks.get().wrapping_add(1));
    });
}

/// Milliseconds counted since the timer was started. Wraps after ~49 days.
pub fn now_ms() -> u32 {
    critical_section::with(|cs| TICKS.borrow(cs).get())
}

/// Busy-waits on the tick counter.
#[derive(Debug, Default)]
pub struct TickDelay {
    _private: (),
}

impl TickDelay {
    /// The timer interrupt calling [`tick`] must already be running.
    pub fn new() -> Self {
        TickDelay { _private: () }
    }
}

impl DelayMs<u32> for TickDelay {
    fn delay_ms(&mut self, ms: u32) {
        if ms == 0 {
            return;
        }
        let start = now_ms();
        let ticks = ticks_to_wait(ms);
        while now_ms().wrapping_sub(start) < ticks {
            core::hint::spin_loop();
        }
    }
}

/// One extra tick covers the partial period already in progress. Saturates,
/// so the longest wait is one full turn of the counter.
fn ticks_to_wait(ms: u32) -> u32 {
    ms.saturating_add(1)
}

impl DelayMs<u16> for TickDelay {
    fn delay_ms(&mut self, ms: u16) {
        DelayMs::<u32>::delay_ms(self, u32::from(ms));
    }
}

impl DelayMs<u8> for TickDelay {
    fn delay_ms(&mut self, ms: u8) {
        DelayMs::<u32>::delay_ms(self, u32::from(ms));
    }
}
