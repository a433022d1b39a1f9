// src/common/config.rs

use super::error::Wtc401Error;
use super::frame::NO_TOUCH_SENTINEL;
use super::timing;
use core::time::Duration;

/// Tunables for one driver instance.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Wtc401Config {
    /// Minimum time between two bus reads.
    pub read_period: Duration,
    /// Raw slider value that maps to 0 %.
    pub slider_min: u8,
    /// Width of the usable slider range in raw counts; `slider_min + slider_max` maps to 100 %.
    pub slider_max: u8,
}

impl Wtc401Config {
    pub const DEFAULT: Wtc401Config = Wtc401Config {
        read_period: timing::READ_PERIOD,
        slider_min: timing::SLIDER_MIN,
        slider_max: timing::SLIDER_MAX,
    };

    pub const fn with_read_period(mut self, period: Duration) -> Self {
        self.read_period = period;
        self
    }

    pub const fn with_slider_range(mut self, min: u8, max: u8) -> Self {
        self.slider_min = min;
        self.slider_max = max;
        self
    }

    /// Checks the values against what the chip can deliver.
    pub fn validate(&self) -> Result<(), Wtc401Error<()>> {
        self.check().map_err(Wtc401Error::InvalidConfig)
    }

    pub(crate) fn check(&self) -> Result<(), &'static str> {
        if self.read_period < timing::DATASHEET_MIN_READ_INTERVAL {
            return Err("read period below datasheet minimum");
        }
        if self.slider_max == 0 {
            return Err("slider range is empty");
        }
        if self.slider_min >= NO_TOUCH_SENTINEL {
            return Err("slider minimum overlaps the no-touch sentinel");
        }
        Ok(())
    }
}

impl Default for Wtc401Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
