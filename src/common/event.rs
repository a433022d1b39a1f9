// src/common/event.rs

/// One of the four key slots reported by the chip, indexed by button code.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum KeyId {
    Key0 = 0,
    Key1 = 1,
    Key2 = 2,
    Key3 = 3,
}

impl KeyId {
    /// All slots in release-event order.
    pub const ALL: [KeyId; 4] = [KeyId::Key0, KeyId::Key1, KeyId::Key2, KeyId::Key3];

    // Logical names used on the reference board.
    pub const RIGHT: KeyId = KeyId::Key0;
    pub const POWER: KeyId = KeyId::Key1;
    pub const LEFT: KeyId = KeyId::Key2;

    /// Key identifier reported in press events, indexed by button code.
    ///
    /// Codes 2 and 3 both report `LEFT`. That is how the board's decode table
    /// labels them; release events still name the slot (`Key3`).
    pub const PRESS_LABELS: [KeyId; 4] = [KeyId::RIGHT, KeyId::POWER, KeyId::LEFT, KeyId::LEFT];

    #[inline]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(KeyId::Key0),
            1 => Some(KeyId::Key1),
            2 => Some(KeyId::Key2),
            3 => Some(KeyId::Key3),
            _ => None,
        }
    }

    /// Identifier reported when the slot at `index` is pressed.
    #[inline]
    pub const fn press_label(index: usize) -> Option<Self> {
        if index < Self::PRESS_LABELS.len() {
            Some(Self::PRESS_LABELS[index])
        } else {
            None
        }
    }
}

/// Event kind, as in the `(kind, value)` callback pair.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EventKind {
    Slider,
    Key(KeyId),
}

/// An input change decoded from the chip.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Event {
    /// Slider moved to a new position, in percent (0..=100).
    Slider(u8),
    /// A key was pressed or released.
    Key { key: KeyId, pressed: bool },
}

impl Event {
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Slider(_) => EventKind::Slider,
            Event::Key { key, .. } => EventKind::Key(*key),
        }
    }

    /// Percentage for slider events, 1 (pressed) or 0 (released) for keys.
    pub const fn value(&self) -> u8 {
        match self {
            Event::Slider(pct) => *pct,
            Event::Key { pressed, .. } => *pressed as u8,
        }
    }
}

/// Receives events decoded by the driver.
///
/// Any `FnMut(Event)` closure is a handler.
pub trait EventHandler {
    fn on_event(&mut self, event: Event);
}

impl<F> EventHandler for F
where
    F: FnMut(Event),
{
    #[inline]
    fn on_event(&mut self, event: Event) {
        self(event)
    }
}

/// Handler installed until the host registers one. Drops every event.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopHandler;

impl EventHandler for NoopHandler {
    #[inline]
    fn on_event(&mut self, _event: Event) {}
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_labels() {
        assert_eq!(KeyId::press_label(0), Some(KeyId::Key0));
        assert_eq!(KeyId::press_label(1), Some(KeyId::Key1));
        assert_eq!(KeyId::press_label(2), Some(KeyId::Key2));
        assert_eq!(KeyId::press_label(3), Some(KeyId::Key2));
        assert_eq!(KeyId::press_label(4), None);
    }

    #[test]
    fn test_index_round_trip_bounds() {
        for key in KeyId::ALL {
            assert_eq!(KeyId::from_index(key.index()), Some(key));
        }
        assert_eq!(KeyId::from_index(4), None);
    }

    #[test]
    fn test_event_kind_and_value() {
        let slider = Event::Slider(42);
        assert_eq!(slider.kind(), EventKind::Slider);
        assert_eq!(slider.value(), 42);

        let press = Event::Key { key: KeyId::POWER, pressed: true };
        assert_eq!(press.kind(), EventKind::Key(KeyId::Key1));
        assert_eq!(press.value(), 1);

        let release = Event::Key { key: KeyId::Key3, pressed: false };
        assert_eq!(release.value(), 0);
    }

    #[test]
    fn test_closure_is_handler() {
        let mut count = 0;
        {
            let mut handler = |_event: Event| count += 1;
            handler.on_event(Event::Slider(1));
            handler.on_event(Event::Slider(2));
        }
        assert_eq!(count, 2);
        NoopHandler.on_event(Event::Slider(3));
    }
}
