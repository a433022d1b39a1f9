// src/adapter/mod.rs

//! Adapter from `embedded-hal` 1.0 traits to [`Wtc401Bus`] + [`Wtc401Clock`].
//!
//! With embedded-hal, pin directions are fixed by the HAL's typestate before
//! the pins are handed over, so `configure` only has to park chip select high.

use crate::common::hal_traits::{Wtc401Bus, Wtc401Clock};
use crate::common::pins::BusPins;
use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// An error from the SPI bus or the chip-select pin.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum HalError<SPI, PIN> {
    Spi(SPI),
    Pin(PIN),
}

/// Bundles an SPI bus, its chip-select pin and a clock.
pub struct HalInterface<SPI, CS, CLK> {
    spi: SPI,
    cs: CS,
    clock: CLK,
}

impl<SPI, CS, CLK> HalInterface<SPI, CS, CLK> {
    pub fn new(spi: SPI, cs: CS, clock: CLK) -> Self {
        Self { spi, cs, clock }
    }

    pub fn release(self) -> (SPI, CS, CLK) {
        (self.spi, self.cs, self.clock)
    }
}

impl<SPI, CS, CLK> Wtc401Clock for HalInterface<SPI, CS, CLK>
where
    CLK: Wtc401Clock,
{
    type Instant = CLK::Instant;

    #[inline]
    fn now(&self) -> Self::Instant {
        self.clock.now()
    }
}

impl<SPI, CS, CLK> Wtc401Bus for HalInterface<SPI, CS, CLK>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    SPI::Error: Debug,
    CS::Error: Debug,
{
    type Error = HalError<SPI::Error, CS::Error>;

    fn configure(&mut self, _pins: &BusPins) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(HalError::Pin)
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(HalError::Pin)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(HalError::Pin)
    }

    fn transfer_byte(&mut self, byte: u8) -> nb::Result<u8, Self::Error> {
        let mut buf = [byte];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(|e| nb::Error::Other(HalError::Spi(e)))?;
        self.spi
            .flush()
            .map_err(|e| nb::Error::Other(HalError::Spi(e)))?;
        Ok(buf[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::event::{Event, KeyId};
    use crate::common::hal_traits::{Millis, MillisFn};
    use crate::driver::Wtc401;
    use core::cell::Cell;
    use core::convert::Infallible;
    use heapless::Vec;

    // --- Mock SPI bus ---
    struct MockSpi {
        replies: [u8; 8],
        pos: usize,
        sent: Vec<u8, 8>,
        flushes: usize,
    }

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = Infallible;
    }

    impl SpiBus<u8> for MockSpi {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(0xFF);
            Ok(())
        }
        fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
        fn transfer(&mut self, read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            read.fill(0xFF);
            Ok(())
        }
        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            for word in words.iter_mut() {
                self.sent.push(*word).unwrap();
                *word = self.replies[self.pos];
                self.pos += 1;
            }
            Ok(())
        }
        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    // --- Mock chip-select pin ---
    #[derive(Default)]
    struct MockPin {
        high: bool,
        toggles: usize,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.toggles += 1;
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.toggles += 1;
            Ok(())
        }
    }

    #[test]
    fn test_driver_over_hal_interface() {
        let ticks = Cell::new(0u32);
        let spi = MockSpi {
            replies: [0x82, 0x7F, 0, 0, 0, 0, 0, 0],
            pos: 0,
            sent: Vec::new(),
            flushes: 0,
        };
        let interface = HalInterface::new(spi, MockPin::default(), MillisFn(|| ticks.get()));

        let mut events: Vec<Event, 4> = Vec::new();
        {
            let mut driver = Wtc401::new(interface, BusPins::new(18, 23, 19, 5))
                .set_on_event(|event: Event| events.push(event).unwrap());
            driver.begin().unwrap();
            assert!(driver.interface().cs.high);

            ticks.set(8);
            assert!(driver.poll().unwrap());
            ticks.set(16);
            assert!(driver.poll().unwrap());
            assert_eq!(driver.last_read(), Millis(16));

            let (spi, cs, _clock) = driver.release().release();
            assert_eq!(spi.sent.as_slice(), &[0xFF, 0xFF]);
            assert_eq!(spi.flushes, 2);
            assert!(cs.high);
            // begin + (low, high) per read
            assert_eq!(cs.toggles, 5);
        }

        assert_eq!(
            events.as_slice(),
            &[
                Event::Key { key: KeyId::LEFT, pressed: true },
                Event::Key { key: KeyId::Key2, pressed: false },
            ]
        );
    }
}
