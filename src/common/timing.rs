// src/common/timing.rs

use core::time::Duration;

/// Minimum spacing between two reads according to the datasheet.
pub const DATASHEET_MIN_READ_INTERVAL: Duration = Duration::from_millis(4);

/// Default spacing between reads: twice the datasheet minimum for margin.
pub const READ_PERIOD: Duration = Duration::from_millis(8);

// === Slider range ===
// The chip reports roughly 1..=54. The edges are noisy, so the usable span is
// taken from 2 with a width of 53 counts.

/// Raw slider value that maps to 0 %.
pub const SLIDER_MIN: u8 = 2;
/// Width of the usable slider range, in raw counts.
pub const SLIDER_MAX: u8 = 53;
