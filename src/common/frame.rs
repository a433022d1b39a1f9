// src/common/frame.rs

//! Wire format of the WTC401 status byte.
//!
//! | Bits | Meaning                                                    |
//! |------|------------------------------------------------------------|
//! | 7    | 1 = button frame, 0 = slider frame                         |
//! | 6:0  | button code (bit 7 set) or raw slider position (bit 7 clear) |
//!
//! A payload of `0x7F` means "no touch" whichever frame type bit 7 claims.

use super::config::Wtc401Config;

/// Byte clocked out to the chip on every read. The chip ignores it.
pub const READ_COMMAND: u8 = 0xFF;

/// Bit 7: set for a button frame.
pub const BUTTON_FLAG: u8 = 0x80;
/// Bits 6:0.
pub const PAYLOAD_MASK: u8 = 0x7F;
/// Payload reported when nothing is touched.
pub const NO_TOUCH_SENTINEL: u8 = 0x7F;

/// A button code carried in a button frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ButtonCode(u8);

impl ButtonCode {
    /// Number of codes the chip defines (0x00..=0x03).
    pub const COUNT: usize = 4;

    pub const fn new(code: u8) -> Self {
        ButtonCode(code & PAYLOAD_MASK)
    }

    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// Slot index for a recognised code, `None` for anything outside 0..=3.
    #[inline]
    pub const fn slot(&self) -> Option<usize> {
        if (self.0 as usize) < Self::COUNT {
            Some(self.0 as usize)
        } else {
            None
        }
    }
}

/// One decoded status byte.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Frame {
    /// Payload was the `0x7F` sentinel.
    NoTouch,
    /// Bit 7 set, payload holds a button code.
    Button(ButtonCode),
    /// Bit 7 clear, payload holds the raw slider position.
    Slider(u8),
}

impl Frame {
    pub const fn decode(byte: u8) -> Self {
        let is_button = byte & BUTTON_FLAG != 0;
        let payload = byte & PAYLOAD_MASK;

        if payload == NO_TOUCH_SENTINEL {
            Frame::NoTouch
        } else if is_button {
            Frame::Button(ButtonCode::new(payload))
        } else {
            Frame::Slider(payload)
        }
    }
}

/// Converts a raw slider position into a 0..=100 percentage.
///
/// The raw value is offset by `slider_min`; anything that falls outside
/// `0..=slider_max` after the offset (including positions below the minimum,
/// which wrap around) reads as 0.
pub fn slider_percent(raw: u8, config: &Wtc401Config) -> u8 {
    let offset = raw.wrapping_sub(config.slider_min) as u16;
    let max = config.slider_max as u16;
    if offset > max {
        return 0;
    }
    // offset <= max, so the result is at most 100
    ((offset * 100) / max) as u8
}
