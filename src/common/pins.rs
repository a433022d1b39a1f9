// src/common/pins.rs

/// Platform pin number.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct PinId(pub u8);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PinDirection {
    Output,
    Input,
}

/// Bus pin assignment for one chip. Fixed once the driver is built.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BusPins {
    /// Serial clock.
    pub sck: PinId,
    /// Data out of the host (MOSI).
    pub mosi: PinId,
    /// Data into the host (MISO).
    pub miso: PinId,
    /// Chip select, active low.
    pub cs: PinId,
}

impl BusPins {
    pub const fn new(sck: u8, mosi: u8, miso: u8, cs: u8) -> Self {
        BusPins {
            sck: PinId(sck),
            mosi: PinId(mosi),
            miso: PinId(miso),
            cs: PinId(cs),
        }
    }

    /// Direction each pin must be configured with before the bus starts,
    /// in configuration order.
    pub const fn directions(&self) -> [(PinId, PinDirection); 4] {
        [
            (self.sck, PinDirection::Output),
            (self.cs, PinDirection::Output),
            (self.mosi, PinDirection::Output),
            (self.miso, PinDirection::Input),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions() {
        let pins = BusPins::new(18, 23, 19, 5);
        let dirs = pins.directions();
        assert_eq!(dirs[0], (PinId(18), PinDirection::Output));
        assert_eq!(dirs[1], (PinId(5), PinDirection::Output));
        assert_eq!(dirs[2], (PinId(23), PinDirection::Output));
        assert_eq!(dirs[3], (PinId(19), PinDirection::Input));
    }
}
