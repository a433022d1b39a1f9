// src/driver/sync_driver/mod.rs

mod latch;

use crate::common::{
    config::Wtc401Config,
    error::Wtc401Error,
    event::{Event, EventHandler, KeyId, NoopHandler},
    frame::{self, ButtonCode, Frame, READ_COMMAND},
    hal_traits::{Wtc401Bus, Wtc401Clock, Wtc401Instant},
    pins::BusPins,
};
use latch::KeyLatches;

/// Polling driver for one WTC401 chip.
///
/// Call [`begin`](Self::begin) once, then [`poll`](Self::poll) from the main
/// loop at least as often as the configured read period. Events go to the
/// handler installed with [`set_on_event`](Self::set_on_event).
pub struct Wtc401<IF, H = NoopHandler>
where
    IF: Wtc401Bus + Wtc401Clock,
{
    interface: IF,
    pins: BusPins,
    handler: H,
    config: Wtc401Config,
    last_read: <IF as Wtc401Clock>::Instant,
    keys: KeyLatches,
    last_slider: u8,
}

impl<IF> Wtc401<IF, NoopHandler>
where
    IF: Wtc401Bus + Wtc401Clock,
{
    pub fn new(interface: IF, pins: BusPins) -> Self {
        let last_read = interface.now();
        Wtc401 {
            interface,
            pins,
            handler: NoopHandler,
            config: Wtc401Config::DEFAULT,
            last_read,
            keys: KeyLatches::new(),
            last_slider: 0,
        }
    }

    pub fn with_config(
        interface: IF,
        pins: BusPins,
        config: Wtc401Config,
    ) -> Result<Self, Wtc401Error<IF::Error>> {
        config.check().map_err(Wtc401Error::InvalidConfig)?;
        let mut driver = Self::new(interface, pins);
        driver.config = config;
        Ok(driver)
    }
}

impl<IF, H> Wtc401<IF, H>
where
    IF: Wtc401Bus + Wtc401Clock,
    H: EventHandler,
{
    // --- Setup ---

    /// Installs `handler`, dropping the previous one.
    pub fn set_on_event<H2: EventHandler>(self, handler: H2) -> Wtc401<IF, H2> {
        Wtc401 {
            interface: self.interface,
            pins: self.pins,
            handler,
            config: self.config,
            last_read: self.last_read,
            keys: self.keys,
            last_slider: self.last_slider,
        }
    }

    /// Configures the bus pins, starts the bus and restarts the read timer.
    pub fn begin(&mut self) -> Result<(), Wtc401Error<IF::Error>> {
        self.interface.configure(&self.pins).map_err(|e| {
            log::warn!("WTC401 bus setup failed: {:?}", e);
            Wtc401Error::Io(e)
        })?;
        self.last_read = self.interface.now();
        log::info!(
            "WTC401 started: sck={:?} mosi={:?} miso={:?} cs={:?}",
            self.pins.sck,
            self.pins.mosi,
            self.pins.miso,
            self.pins.cs
        );
        Ok(())
    }

    // --- Polling ---

    /// Reads and decodes one status byte if the read period has elapsed.
    ///
    /// Returns `Ok(true)` if the bus was read. If the clock is found behind
    /// the last read (counter wraparound) the timer is resynchronised and the
    /// next read happens one full period later.
    pub fn poll(&mut self) -> Result<bool, Wtc401Error<IF::Error>> {
        let now = self.interface.now();

        match now.checked_duration_since(self.last_read) {
            Some(elapsed) if elapsed >= self.config.read_period => {
                let result = self.read();
                if let Ok(byte) = result {
                    self.process(byte);
                }
                self.last_read = self.interface.now();
                result.map(|_| true)
            }
            Some(_) => Ok(false),
            None => {
                log::debug!("WTC401 clock wrapped, resynchronising read timer");
                self.last_read = now;
                Ok(false)
            }
        }
    }

    /// One chip-select framed transfer. Not rate limited.
    fn read(&mut self) -> Result<u8, Wtc401Error<IF::Error>> {
        self.interface.select().map_err(Wtc401Error::Io)?;
        let transfer = nb::block!(self.interface.transfer_byte(READ_COMMAND));
        // Chip select must go high again even if the transfer failed.
        let deselect = self.interface.deselect();

        let byte = transfer.map_err(|e| {
            log::warn!("WTC401 transfer failed: {:?}", e);
            Wtc401Error::Io(e)
        })?;
        deselect.map_err(Wtc401Error::Io)?;

        log::trace!("WTC401 read {:#04x}", byte);
        Ok(byte)
    }

    // --- Decoding ---

    /// Decodes one status byte and dispatches the resulting events.
    pub fn process(&mut self, byte: u8) {
        match Frame::decode(byte) {
            Frame::NoTouch => self.release_keys(),
            Frame::Button(code) => self.process_button(code),
            Frame::Slider(raw) => self.process_slider(raw),
        }
    }

    fn release_keys(&mut self) {
        let handler = &mut self.handler;
        self.keys
            .release_all(|key| emit(handler, Event::Key { key, pressed: false }));
    }

    fn process_button(&mut self, code: ButtonCode) {
        let Some(slot) = code.slot() else {
            log::debug!("WTC401 ignoring button code {:#04x}", code.raw());
            return;
        };

        if self.keys.press(slot) {
            if let Some(key) = KeyId::press_label(slot) {
                emit(&mut self.handler, Event::Key { key, pressed: true });
            }
        }
    }

    fn process_slider(&mut self, raw: u8) {
        let pct = frame::slider_percent(raw, &self.config);
        if pct != self.last_slider {
            emit(&mut self.handler, Event::Slider(pct));
        }
        self.last_slider = pct;
    }

    // --- Accessors ---

    #[inline]
    pub fn read_key(&self, key: KeyId) -> bool {
        self.keys.is_pressed(key)
    }

    #[inline]
    pub fn read_key0(&self) -> bool {
        self.read_key(KeyId::Key0)
    }

    #[inline]
    pub fn read_key1(&self) -> bool {
        self.read_key(KeyId::Key1)
    }

    #[inline]
    pub fn read_key2(&self) -> bool {
        self.read_key(KeyId::Key2)
    }

    #[inline]
    pub fn read_key3(&self) -> bool {
        self.read_key(KeyId::Key3)
    }

    /// Latched state of all slots, Key0 first.
    pub fn keys(&self) -> [bool; 4] {
        self.keys.snapshot()
    }

    /// Last slider position reported, in percent.
    #[inline]
    pub fn read_slider(&self) -> u8 {
        self.last_slider
    }

    pub fn pins(&self) -> &BusPins {
        &self.pins
    }

    pub fn config(&self) -> &Wtc401Config {
        &self.config
    }

    pub fn last_read(&self) -> <IF as Wtc401Clock>::Instant {
        self.last_read
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    pub fn interface_mut(&mut self) -> &mut IF {
        &mut self.interface
    }

    /// Destroys the driver and hands back the interface.
    pub fn release(self) -> IF {
        self.interface
    }
}

fn emit<H: EventHandler>(handler: &mut H, event: Event) {
    log::debug!("WTC401 event {:?}", event);
    handler.on_event(event);
}
