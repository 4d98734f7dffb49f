//! Card serial numbers.
//!
//! Serial numbers identify printed cards; they are bookkeeping, not part of
//! any structural invariant. [`SerialCounter`] is an explicit, injectable
//! service with a reset lifecycle: share one counter between generators to
//! number their cards from a single sequence, or give each its own.

use std::{
    fmt::{self, Display},
    sync::atomic::{AtomicU32, Ordering},
};

/// A card serial number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardSerial(u32);

impl CardSerial {
    /// Returns the numeric serial value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Display for CardSerial {
    /// Formats as a zero-padded six-digit serial, e.g. `#000042`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06}", self.0)
    }
}

/// A process-lifetime source of strictly increasing card serials.
///
/// The counter starts at 1 and increments by 1 per [`next`](Self::next)
/// call. It uses an atomic, so a single counter shared by reference across
/// concurrently running generators still hands out each serial exactly
/// once.
///
/// # Examples
///
/// ```
/// use housie_core::SerialCounter;
///
/// let counter = SerialCounter::new();
/// assert_eq!(counter.next().value(), 1);
/// assert_eq!(counter.next().value(), 2);
///
/// counter.reset();
/// assert_eq!(counter.next().value(), 1);
/// ```
#[derive(Debug)]
pub struct SerialCounter {
    next: AtomicU32,
}

impl SerialCounter {
    /// Creates a counter whose first serial is 1.
    #[must_use]
    pub const fn new() -> Self {
        SerialCounter {
            next: AtomicU32::new(1),
        }
    }

    /// Takes the next serial.
    #[must_use = "taking a serial advances the counter"]
    pub fn next(&self) -> CardSerial {
        CardSerial(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Restarts the sequence at 1.
    pub fn reset(&self) {
        self.next.store(1, Ordering::Relaxed);
    }
}

impl Default for SerialCounter {
    fn default() -> Self {
        SerialCounter::new()
    }
}
