// src/common/hal_traits.rs

use super::pins::BusPins;
use core::fmt::Debug;
use core::time::Duration;

/// A point in time from the platform's monotonic clock.
pub trait Wtc401Instant: Copy + Debug {
    /// Time elapsed since `earlier`, or `None` if `earlier` lies in the
    /// future, which for a free-running counter means it wrapped around.
    fn checked_duration_since(&self, earlier: Self) -> Option<Duration>;
}

/// Abstraction for the clock the driver paces its reads with.
pub trait Wtc401Clock {
    type Instant: Wtc401Instant;

    fn now(&self) -> Self::Instant;
}

/// Abstraction for the synchronous serial bus the chip sits on.
///
/// The driver owns the chip-select sequencing: it calls `select`, exactly one
/// `transfer_byte`, then `deselect`.
pub trait Wtc401Bus {
    /// Associated error type for bus or pin errors.
    type Error: Debug;

    /// Sets up the pins and starts the bus.
    ///
    /// Implementations must configure each pin with the direction given by
    /// [`BusPins::directions`], leave chip select inactive (high) and then
    /// bring up the bus peripheral.
    fn configure(&mut self, pins: &BusPins) -> Result<(), Self::Error>;

    /// Drives chip select active (low).
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Drives chip select inactive (high).
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Exchanges one byte full-duplex, returning the byte clocked in.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` while the transfer is in progress.
    fn transfer_byte(&mut self, byte: u8) -> nb::Result<u8, Self::Error>;
}

/// Millisecond timestamp from a free-running 32-bit counter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Millis(pub u32);

impl Wtc401Instant for Millis {
    #[inline]
    fn checked_duration_since(&self, earlier: Self) -> Option<Duration> {
        self.0
            .checked_sub(earlier.0)
            .map(|ms| Duration::from_millis(ms as u64))
    }
}

/// Clock backed by a function returning milliseconds since boot.
pub struct MillisFn<F>(pub F);

impl<F> Wtc401Clock for MillisFn<F>
where
    F: Fn() -> u32,
{
    type Instant = Millis;

    #[inline]
    fn now(&self) -> Millis {
        Millis((self.0)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_millis_elapsed() {
        assert_eq!(
            Millis(108).checked_duration_since(Millis(100)),
            Some(Duration::from_millis(8))
        );
        assert_eq!(Millis(5).checked_duration_since(Millis(5)), Some(Duration::ZERO));
    }

    #[test]
    fn test_millis_wraparound_is_none() {
        assert_eq!(Millis(3).checked_duration_since(Millis(u32::MAX - 2)), None);
    }

    #[test]
    fn test_millis_fn_clock() {
        let ticks = Cell::new(41u32);
        let clock = MillisFn(|| ticks.get());
        assert_eq!(clock.now(), Millis(41));
        ticks.set(42);
        assert_eq!(clock.now(), Millis(42));
    }
}
