//! Sharing a display between thread mode and interrupt handlers.
//!
//! A chip-select bracket must never be interleaved with another one. Each
//! access runs inside a critical section and holds an exclusive borrow, so a
//! nested attempt (for example a draw issued from inside another draw's
//! closure) is refused instead of corrupting the transaction in flight.
//! Interrupts stay masked for the whole closure.

use core::cell::RefCell;

use critical_section::Mutex;

pub struct SharedDisplay<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> SharedDisplay<T> {
    /// An empty slot, usable in a `static`.
    pub const fn new() -> Self {
        SharedDisplay {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Stores `display`, returning the one it replaces. Hands `display`
    /// back untouched if the slot is borrowed.
    pub fn install(&self, display: T) -> Result<Option<T>, T> {
        critical_section::with(|cs| match self.inner.borrow(cs).try_borrow_mut() {
            Ok(mut slot) => Ok(slot.replace(display)),
            Err(_) => Err(display),
        })
    }

    /// Removes the display. `None` if empty or borrowed.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).try_borrow_mut().ok()?.take())
    }

    /// Runs `f` with exclusive access to the display.
    ///
    /// Returns `None` when nothing is installed or the display is already
    /// borrowed further up the call stack.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).try_borrow_mut().ok()?;
            slot.as_mut().map(f)
        })
    }
}

impl<T> Default for SharedDisplay<T> {
    fn default() -> Self {
        Self::new()
    }
}
