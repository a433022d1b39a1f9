// src/driver/sync_driver/latch.rs

use crate::common::event::KeyId;

/// Last observed state of one key slot.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub(crate) struct KeyLatch {
    pressed: bool,
}

/// Latched state for all four key slots.
///
/// A slot only goes Released -> Pressed through `press` and Pressed ->
/// Released through `release_all`; the chip has no per-key release code.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub(crate) struct KeyLatches {
    slots: [KeyLatch; 4],
}

impl KeyLatches {
    pub(crate) const fn new() -> Self {
        KeyLatches {
            slots: [KeyLatch { pressed: false }; 4],
        }
    }

    #[inline]
    pub(crate) fn is_pressed(&self, key: KeyId) -> bool {
        self.slots[key.index()].pressed
    }

    pub(crate) fn snapshot(&self) -> [bool; 4] {
        let mut out = [false; 4];
        for (dst, slot) in out.iter_mut().zip(self.slots.iter()) {
            *dst = slot.pressed;
        }
        out
    }

    /// Marks `slot` pressed. Returns `true` on a rising edge.
    ///
    /// Panics if `slot` is out of range; callers pass `ButtonCode::slot()`.
    pub(crate) fn press(&mut self, slot: usize) -> bool {
        let latch = &mut self.slots[slot];
        let rising = !latch.pressed;
        latch.pressed = true;
        rising
    }

    /// Releases every slot, calling `on_release` for each one that was
    /// pressed, in slot order.
    pub(crate) fn release_all<F>(&mut self, mut on_release: F)
    where
        F: FnMut(KeyId),
    {
        for key in KeyId::ALL {
            let latch = &mut self.slots[key.index()];
            if latch.pressed {
                latch.pressed = false;
                on_release(key);
            }
        }
    }
}
